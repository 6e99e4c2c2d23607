use std::collections::BTreeSet;

use crate::{DeviationPolicy, WorkoutType, classify, text};

/// Words naming equipment, ignored when comparing the movement itself.
const EQUIPMENT_WORDS: [&str; 8] = [
    "barbell", "dumbbell", "cable", "machine", "smith", "ez", "trap", "band",
];

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    MinorVariation,
    MajorDeviation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deviation {
    pub severity: Severity,
    pub similarity: f32,
    pub planned_name: Option<String>,
    pub actual_name: String,
    pub impact: String,
    /// Workout type implied by the actual exercise, if it differs from the planned one.
    pub new_workout_type: Option<WorkoutType>,
}

impl Deviation {
    #[must_use]
    pub fn is_deviation(&self) -> bool {
        self.severity != Severity::None
    }

    #[must_use]
    pub fn changes_workout_type(&self) -> bool {
        self.new_workout_type.is_some()
    }
}

/// Similarity of two exercise names in [0, 1].
///
/// Names that differ only in equipment are at least `variation_floor` similar.
#[must_use]
pub fn exercise_similarity(a: &str, b: &str, policy: &DeviationPolicy) -> f32 {
    let a = text::normalize(a);
    let b = text::normalize(b);
    if a == b {
        return 1.0;
    }
    let similarity = text::similarity(&a, &b);

    let core_a = core_words(&a);
    let core_b = core_words(&b);
    if !core_a.is_empty() && !core_b.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let overlap = core_a.intersection(&core_b).count() as f32
            / core_a.len().max(core_b.len()) as f32;
        if overlap >= policy.core_overlap {
            return similarity.max(policy.variation_floor);
        }
    }

    similarity
}

fn core_words(normalized: &str) -> BTreeSet<&str> {
    normalized
        .split(' ')
        .filter(|word| !word.is_empty() && !EQUIPMENT_WORDS.contains(word))
        .collect()
}

/// Compares the exercise a user performed with the one the plan suggested.
#[must_use]
pub fn detect_deviation(
    actual: &str,
    planned: Option<&str>,
    current_type: WorkoutType,
    policy: &DeviationPolicy,
) -> Deviation {
    let Some(planned) = planned else {
        return Deviation {
            severity: Severity::None,
            similarity: 1.0,
            planned_name: None,
            actual_name: actual.to_string(),
            impact: "No plan to compare against".to_string(),
            new_workout_type: None,
        };
    };

    let similarity = exercise_similarity(actual, planned, policy);
    let severity = policy.severity(similarity);
    let actual_type = classify(actual, current_type);
    let new_workout_type = (actual_type != classify(planned, current_type)).then_some(actual_type);

    Deviation {
        severity,
        similarity,
        planned_name: Some(planned.to_string()),
        actual_name: actual.to_string(),
        impact: impact(severity, actual, planned, new_workout_type),
        new_workout_type,
    }
}

fn impact(
    severity: Severity,
    actual: &str,
    planned: &str,
    new_workout_type: Option<WorkoutType>,
) -> String {
    match (severity, new_workout_type) {
        (Severity::None, _) => format!("On plan: {actual}"),
        (Severity::MinorVariation, Some(new_type)) => format!(
            "Minor variation: did {actual} instead of {planned}, which turns this into a {new_type} workout"
        ),
        (Severity::MinorVariation, None) => {
            format!("Equipment variation: {actual} instead of {planned}")
        }
        (Severity::MajorDeviation, Some(new_type)) => format!(
            "Off plan: did {actual} instead of {planned}, which turns this into a {new_type} workout"
        ),
        (Severity::MajorDeviation, None) => {
            format!("Different exercise: {actual} instead of {planned}")
        }
    }
}
