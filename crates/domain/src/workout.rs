use std::{collections::BTreeSet, fmt, slice::Iter, str::FromStr};

use chrono::NaiveDate;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Name, Property, Set, Weight};

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WorkoutType {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    #[default]
    Other,
}

impl WorkoutType {
    /// Lowercase key used for template lookup and serialized configuration.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WorkoutType::Push => "push",
            WorkoutType::Pull => "pull",
            WorkoutType::Legs => "legs",
            WorkoutType::Upper => "upper",
            WorkoutType::Lower => "lower",
            WorkoutType::Other => "other",
        }
    }
}

impl Property for WorkoutType {
    fn iter() -> Iter<'static, WorkoutType> {
        static WORKOUT_TYPES: [WorkoutType; 6] = [
            WorkoutType::Push,
            WorkoutType::Pull,
            WorkoutType::Legs,
            WorkoutType::Upper,
            WorkoutType::Lower,
            WorkoutType::Other,
        ];
        WORKOUT_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutType::Push => "Push",
            WorkoutType::Pull => "Pull",
            WorkoutType::Legs => "Legs",
            WorkoutType::Upper => "Upper",
            WorkoutType::Lower => "Lower",
            WorkoutType::Other => "Other",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "push" => Ok(WorkoutType::Push),
            "pull" => Ok(WorkoutType::Pull),
            "legs" | "leg" => Ok(WorkoutType::Legs),
            "upper" => Ok(WorkoutType::Upper),
            "lower" => Ok(WorkoutType::Lower),
            "other" => Ok(WorkoutType::Other),
            _ => Err(WorkoutTypeError::Unknown(s.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorkoutTypeError {
    #[error("Unknown workout type: {0}")]
    Unknown(String),
}

/// Short add-on work done at the end of a workout and tracked per week.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Supplementary {
    Abs,
}

impl fmt::Display for Supplementary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Supplementary::Abs => write!(f, "abs"),
        }
    }
}

impl FromStr for Supplementary {
    type Err = SupplementaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abs" | "core" => Ok(Supplementary::Abs),
            _ => Err(SupplementaryError::Unknown(s.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SupplementaryError {
    #[error("Unknown supplementary work: {0}")]
    Unknown(String),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLogID(Uuid);

impl WorkoutLogID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name, sets: Vec<Set>) -> Self {
        Self { name, sets }
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        u32::try_from(self.sets.len()).unwrap_or(u32::MAX)
    }

    /// Heaviest positive load of all sets.
    #[must_use]
    pub fn max_weight(&self) -> Option<Weight> {
        self.sets
            .iter()
            .filter_map(Set::load)
            .max_by(|a, b| a.lbs().total_cmp(&b.lbs()))
    }

    #[must_use]
    pub fn volume_load(&self) -> f32 {
        self.sets.iter().map(Set::volume_load).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: WorkoutLogID,
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub exercises: Vec<Exercise>,
    pub notes: String,
    pub completed: bool,
    pub supplementary: BTreeSet<Supplementary>,
}

impl WorkoutLog {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(Exercise::num_sets).sum()
    }

    #[must_use]
    pub fn volume_load(&self) -> f32 {
        self.exercises.iter().map(Exercise::volume_load).sum()
    }

    /// Exercises whose name equals `name`, ignoring case and punctuation.
    pub fn exercises_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Exercise> {
        self.exercises.iter().filter(move |e| e.name.is_same(name))
    }

    #[must_use]
    pub fn max_weight_of(&self, name: &str) -> Option<Weight> {
        self.exercises_named(name)
            .filter_map(Exercise::max_weight)
            .max_by(|a, b| a.lbs().total_cmp(&b.lbs()))
    }

    /// Average reps and average weight over all sets performed with a positive weight.
    #[must_use]
    pub fn weighted_set_averages(&self) -> Option<(f32, f32)> {
        let sets = self
            .exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter_map(|s| s.load().map(|w| (u32::from(s.reps), w.lbs())))
            .collect::<Vec<_>>();
        if sets.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let len = sets.len() as f32;
        #[allow(clippy::cast_precision_loss)]
        let avg_reps = sets.iter().map(|(r, _)| *r as f32).sum::<f32>() / len;
        let avg_weight = sets.iter().map(|(_, w)| *w).sum::<f32>() / len;
        Some((avg_reps, avg_weight))
    }
}

/// The most recent workout of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct LastWorkout {
    pub log: WorkoutLog,
    pub days_since: i64,
}

#[must_use]
pub fn last_workout(
    logs: &[WorkoutLog],
    workout_type: WorkoutType,
    today: NaiveDate,
) -> Option<LastWorkout> {
    logs.iter()
        .filter(|log| log.workout_type == workout_type)
        .max_by_key(|log| log.date)
        .map(|log| LastWorkout {
            log: log.clone(),
            days_since: (today - log.date).num_days(),
        })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::testing::{date, log};

    #[rstest]
    #[case("Push", Ok(WorkoutType::Push))]
    #[case(" legs ", Ok(WorkoutType::Legs))]
    #[case("LEG", Ok(WorkoutType::Legs))]
    #[case("cardio", Err(WorkoutTypeError::Unknown("cardio".to_string())))]
    fn test_workout_type_from_str(
        #[case] value: &str,
        #[case] expected: Result<WorkoutType, WorkoutTypeError>,
    ) {
        assert_eq!(value.parse::<WorkoutType>(), expected);
    }

    #[rstest]
    #[case("abs", Ok(Supplementary::Abs))]
    #[case(" Core ", Ok(Supplementary::Abs))]
    #[case("mobility", Err(SupplementaryError::Unknown("mobility".to_string())))]
    fn test_supplementary_from_str(
        #[case] value: &str,
        #[case] expected: Result<Supplementary, SupplementaryError>,
    ) {
        assert_eq!(value.parse::<Supplementary>(), expected);
    }

    #[test]
    fn test_last_workout() {
        let logs = vec![
            log("2024-06-10", WorkoutType::Legs, &[("Squat", &[(5, Some(185.0))])]),
            log("2024-06-24", WorkoutType::Legs, &[("Leg Press", &[(10, Some(270.0))])]),
            log("2024-06-27", WorkoutType::Push, &[("Dips", &[(10, None)])]),
            log("2024-06-17", WorkoutType::Legs, &[("Squat", &[(5, Some(190.0))])]),
        ];

        let last = last_workout(&logs, WorkoutType::Legs, date("2024-06-30")).unwrap();

        assert_eq!(last.log.date, date("2024-06-24"));
        assert_eq!(last.log.exercises[0].name.as_str(), "Leg Press");
        assert_eq!(last.days_since, 6);
        assert_eq!(last_workout(&logs, WorkoutType::Upper, date("2024-06-30")), None);
    }

    #[test]
    fn test_workout_type_iter() {
        assert_eq!(
            WorkoutType::iter().map(|t| t.key()).collect::<Vec<_>>(),
            vec!["push", "pull", "legs", "upper", "lower", "other"]
        );
    }

    #[test]
    fn test_workout_log_id_nil() {
        assert!(WorkoutLogID::nil().is_nil());
        assert!(!WorkoutLogID::from(1_u128).is_nil());
    }

    #[test]
    fn test_workout_log_metrics() {
        let log = log(
            "2024-03-04",
            WorkoutType::Push,
            &[
                ("Bench Press", &[(10, Some(135.0)), (8, Some(155.0))]),
                ("Dips", &[(12, None), (10, None)]),
                ("Lateral Raise", &[(15, Some(0.0))]),
            ],
        );

        assert_eq!(log.num_sets(), 5);
        assert_approx_eq!(log.volume_load(), 1350.0 + 1240.0);
        assert_eq!(log.max_weight_of("bench press"), Some(Weight::new(155.0).unwrap()));
        assert_eq!(log.max_weight_of("Dips"), None);
        assert_eq!(log.max_weight_of("Squat"), None);

        let (avg_reps, avg_weight) = log.weighted_set_averages().unwrap();
        assert_approx_eq!(avg_reps, 9.0);
        assert_approx_eq!(avg_weight, 145.0);
    }

    #[test]
    fn test_workout_log_weighted_set_averages_without_load() {
        let log = log("2024-03-04", WorkoutType::Pull, &[("Pull Ups", &[(8, None)])]);
        assert_eq!(log.weighted_set_averages(), None);
    }
}
