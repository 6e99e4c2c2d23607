//! Push/Pull/Legs classification of exercise names.

use std::collections::BTreeMap;

use crate::{WorkoutType, text};

const PUSH_KEYWORDS: [&str; 15] = [
    "press", "bench", "push", "pushdown", "chest", "pec", "tricep", "shoulder", "delt", "fly",
    "flies", "flye", "dip", "lateral", "overhead",
];
const PULL_KEYWORDS: [&str; 11] = [
    "pull", "pulldown", "row", "curl", "bicep", "lat", "chin", "deadlift", "face pull", "shrug",
    "pullover",
];
const LEGS_KEYWORDS: [&str; 17] = [
    "squat",
    "leg",
    "lunge",
    "calf",
    "calves",
    "hamstring",
    "quad",
    "glute",
    "hip",
    "thrust",
    "rdl",
    "romanian",
    "step up",
    "leg press",
    "leg curl",
    "hamstring curl",
    "romanian deadlift",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub push: usize,
    pub pull: usize,
    pub legs: usize,
}

impl Scores {
    #[must_use]
    pub fn of(name: &str) -> Self {
        let words = text::words(name);
        Self {
            push: hits(&words, &PUSH_KEYWORDS),
            pull: hits(&words, &PULL_KEYWORDS),
            legs: hits(&words, &LEGS_KEYWORDS),
        }
    }

    /// The category with the strictly highest score.
    #[must_use]
    pub fn winner(self) -> Option<WorkoutType> {
        let Scores { push, pull, legs } = self;
        if push > pull && push > legs {
            Some(WorkoutType::Push)
        } else if pull > push && pull > legs {
            Some(WorkoutType::Pull)
        } else if legs > push && legs > pull {
            Some(WorkoutType::Legs)
        } else {
            None
        }
    }
}

fn hits(words: &[String], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| {
            if keyword.contains(' ') {
                text::contains_phrase(words, keyword)
            } else {
                words.iter().any(|word| {
                    text::word_matches(word, keyword)
                        || (keyword.len() >= 4 && word.starts_with(*keyword))
                })
            }
        })
        .count()
}

/// Classifies an exercise name as Push, Pull or Legs.
///
/// Names without a clear winner keep `fallback`.
#[must_use]
pub fn classify(name: &str, fallback: WorkoutType) -> WorkoutType {
    Scores::of(name).winner().unwrap_or(fallback)
}

/// Infers the workout type of a list of exercises by majority vote.
///
/// Ties are resolved in the order Push, Pull, Legs.
#[must_use]
pub fn infer_workout_type<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<WorkoutType> {
    let mut votes = BTreeMap::<WorkoutType, usize>::new();
    for workout_type in names
        .into_iter()
        .filter_map(|name| Scores::of(name).winner())
    {
        *votes.entry(workout_type).or_default() += 1;
    }
    votes
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(workout_type, _)| workout_type)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Barbell Bench Press", WorkoutType::Push)]
    #[case("Tricep Pushdown", WorkoutType::Push)]
    #[case("Lateral Raise", WorkoutType::Push)]
    #[case("Dips", WorkoutType::Push)]
    #[case("Lat Pulldown", WorkoutType::Pull)]
    #[case("Pull-Ups", WorkoutType::Pull)]
    #[case("Hammer Curl", WorkoutType::Pull)]
    #[case("Deadlift", WorkoutType::Pull)]
    #[case("Squat", WorkoutType::Legs)]
    #[case("Leg Press", WorkoutType::Legs)]
    #[case("Leg Curl", WorkoutType::Legs)]
    #[case("Romanian Deadlift", WorkoutType::Legs)]
    #[case("Walking Lunges", WorkoutType::Legs)]
    #[case("Plank", WorkoutType::Upper)]
    fn test_classify(#[case] name: &str, #[case] expected: WorkoutType) {
        assert_eq!(classify(name, WorkoutType::Upper), expected);
    }

    #[test]
    fn test_scores() {
        assert_eq!(
            Scores::of("Leg Press"),
            Scores {
                push: 1,
                pull: 0,
                legs: 2
            }
        );
        assert_eq!(Scores::of("Plank").winner(), None);
    }

    #[rstest]
    #[case(&["Squat", "Leg Press", "Bench Press"], Some(WorkoutType::Legs))]
    #[case(&["Bench Press", "Barbell Row"], Some(WorkoutType::Push))]
    #[case(&["Plank", "Farmer Walk"], None)]
    #[case(&[], None)]
    fn test_infer_workout_type(#[case] names: &[&str], #[case] expected: Option<WorkoutType>) {
        assert_eq!(infer_workout_type(names.iter().copied()), expected);
    }
}
