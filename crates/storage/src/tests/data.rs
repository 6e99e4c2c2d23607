use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone, Utc};
use spotter_domain as domain;

pub static CLOCK: std::sync::LazyLock<domain::Clock> = std::sync::LazyLock::new(|| {
    domain::Clock::fixed(
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap(),
    )
});

pub static WORKOUT_LOG: std::sync::LazyLock<domain::WorkoutLog> =
    std::sync::LazyLock::new(|| domain::WorkoutLog {
        id: domain::WorkoutLogID::from(1_u128),
        date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        workout_type: domain::WorkoutType::Legs,
        exercises: vec![
            domain::Exercise::new(
                domain::Name::new("Squat").unwrap(),
                vec![
                    domain::Set::new(5, Some(185.0)).unwrap(),
                    domain::Set::new(5, Some(185.0)).unwrap(),
                    domain::Set::new(4, Some(185.0)).unwrap(),
                ],
            ),
            domain::Exercise::new(
                domain::Name::new("Walking Lunges").unwrap(),
                vec![
                    domain::Set::new(12, Some(25.5)).unwrap(),
                    domain::Set::new(12, None).unwrap(),
                ],
            ),
        ],
        notes: String::from("Knees felt good"),
        completed: true,
        supplementary: BTreeSet::from([domain::Supplementary::Abs]),
    });

pub static TEMPLATE: std::sync::LazyLock<domain::Template> =
    std::sync::LazyLock::new(|| domain::Template {
        id: String::from("legs_b"),
        name: String::from("Legs B"),
        workout_type: domain::WorkoutType::Legs,
        exercises: vec![
            domain::PrescribedExercise {
                name: domain::Name::new("Front Squat").unwrap(),
                target_sets: 4,
                target_reps: domain::TargetReps::Range { low: 6, high: 8 },
                suggested_weight: Some(domain::Weight::new(135.0).unwrap()),
                rest_seconds: 180,
                reasoning: String::new(),
                notes: Some(String::from("Keep the elbows high")),
            },
            domain::PrescribedExercise {
                name: domain::Name::new("Calf Raise").unwrap(),
                target_sets: 3,
                target_reps: domain::TargetReps::Fixed(15),
                suggested_weight: None,
                rest_seconds: 60,
                reasoning: String::new(),
                notes: None,
            },
            domain::PrescribedExercise {
                name: domain::Name::new("Hanging Leg Raise").unwrap(),
                target_sets: 2,
                target_reps: domain::TargetReps::Max,
                suggested_weight: None,
                rest_seconds: 60,
                reasoning: String::new(),
                notes: None,
            },
        ],
        coaching_notes: vec![],
        adaptations: vec![],
        notes: Some(String::from("Lighter leg day")),
        mode: domain::TemplateMode::Static,
    });

/// Three readable logs in the legacy file format, plus one soft-deleted log.
pub const LOG_DOCUMENT: &str = r#"{
    "logs": [
        {
            "id": "2024-06-24-001",
            "date": "2024-06-24",
            "type": "Push",
            "exercises": [
                {"name": "Barbell Bench Press", "sets": [{"reps": 8, "weight_lbs": 140.0}]}
            ]
        },
        {
            "id": "2024-06-20-001",
            "date": "2024-06-20",
            "type": "Push",
            "exercises": [
                {"name": "Barbell Bench Press", "sets": [{"reps": 8, "weight_lbs": 200.0}]}
            ],
            "deleted": true
        },
        {
            "id": "2024-06-17-001",
            "date": "2024-06-17",
            "type": "Cardio",
            "warmup": {"type": "incline walk", "duration_min": 20},
            "exercises": []
        },
        {
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "date": "2024-06-10",
            "type": "Push",
            "exercises": [
                {
                    "name": "Barbell Bench Press",
                    "sets": [
                        {"reps": 8, "weight_lbs": 135.0, "rpe": 8},
                        {"reps": 8, "weight_lbs": 135.0}
                    ]
                },
                {"name": "Dips", "sets": [{"reps": 10}, {"reps": 8}]}
            ],
            "notes": "Felt strong",
            "completed": true
        }
    ]
}"#;

pub fn push_log(date: &str, bench_press_weight: f32) -> domain::WorkoutLog {
    domain::WorkoutLog {
        id: domain::WorkoutLogID::random(),
        date: date.parse().unwrap(),
        workout_type: domain::WorkoutType::Push,
        exercises: vec![domain::Exercise::new(
            domain::Name::new("Barbell Bench Press").unwrap(),
            vec![domain::Set::new(8, Some(bench_press_weight)).unwrap(); 3],
        )],
        notes: String::new(),
        completed: true,
        supplementary: BTreeSet::new(),
    }
}
