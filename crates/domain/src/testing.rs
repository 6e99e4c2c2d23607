use std::collections::BTreeSet;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{
    Clock, Exercise, Name, PrescribedExercise, Set, Template, TemplateMode, Weight, WorkoutLog,
    WorkoutLogID, WorkoutType,
};

pub type ExerciseSpec<'a> = (&'a str, &'a [(u32, Option<f32>)]);

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn exercise(name: &str, sets: &[(u32, Option<f32>)]) -> Exercise {
    Exercise::new(
        Name::new(name).unwrap(),
        sets.iter()
            .map(|(reps, weight)| Set::new(*reps, *weight).unwrap())
            .collect(),
    )
}

pub fn log(day: &str, workout_type: WorkoutType, exercises: &[ExerciseSpec]) -> WorkoutLog {
    WorkoutLog {
        id: WorkoutLogID::random(),
        date: date(day),
        workout_type,
        exercises: exercises
            .iter()
            .map(|(name, sets)| exercise(name, sets))
            .collect(),
        notes: String::new(),
        completed: true,
        supplementary: BTreeSet::new(),
    }
}

pub fn prescribed(
    name: &str,
    target_sets: u32,
    target_reps: &str,
    suggested_weight: Option<f32>,
    rest_seconds: u32,
) -> PrescribedExercise {
    PrescribedExercise {
        name: Name::new(name).unwrap(),
        target_sets,
        target_reps: target_reps.parse().unwrap(),
        suggested_weight: suggested_weight.map(|w| Weight::new(w).unwrap()),
        rest_seconds,
        reasoning: String::new(),
        notes: None,
    }
}

pub fn template(id: &str, workout_type: WorkoutType, exercises: Vec<PrescribedExercise>) -> Template {
    Template {
        id: id.to_string(),
        name: format!("{workout_type} A"),
        workout_type,
        exercises,
        coaching_notes: vec![],
        adaptations: vec![],
        notes: None,
        mode: TemplateMode::Static,
    }
}

/// Base templates for push, pull and legs days.
pub fn templates() -> Vec<Template> {
    vec![
        template(
            "push_a",
            WorkoutType::Push,
            vec![
                prescribed("Barbell Bench Press", 4, "6-8", None, 180),
                prescribed("Overhead Press", 3, "8-10", None, 120),
                prescribed("Incline Dumbbell Press", 3, "8-12", None, 90),
                prescribed("Lateral Raise", 3, "12-15", None, 60),
                prescribed("Tricep Pushdown", 3, "10-12", Some(40.0), 60),
                prescribed("Dips", 2, "max", None, 90),
            ],
        ),
        template(
            "pull_a",
            WorkoutType::Pull,
            vec![
                prescribed("Deadlift", 3, "5", None, 180),
                prescribed("Pull Ups", 4, "max", None, 120),
                prescribed("Barbell Row", 4, "6-8", None, 120),
                prescribed("Lat Pulldown", 3, "10-12", None, 90),
                prescribed("Face Pull", 3, "15", None, 60),
                prescribed("Hammer Curl", 3, "10-12", None, 60),
            ],
        ),
        template(
            "legs_a",
            WorkoutType::Legs,
            vec![
                prescribed("Squat", 4, "5", None, 180),
                prescribed("Romanian Deadlift", 3, "8", None, 120),
                prescribed("Leg Press", 3, "10-12", None, 120),
                prescribed("Leg Curl", 3, "12", None, 60),
                prescribed("Calf Raise", 4, "15", None, 60),
            ],
        ),
    ]
}

pub fn clock() -> Clock {
    Clock::fixed(
        date("2024-06-30"),
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap(),
    )
}
