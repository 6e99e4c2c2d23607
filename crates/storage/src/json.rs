use chrono::NaiveDate;
use log::debug;
use spotter_domain as domain;
use uuid::Uuid;

/// Collection wrapper of the log file, `{"logs": [...]}`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WorkoutLogs {
    #[serde(default)]
    pub logs: Vec<WorkoutLog>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "completed")]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplementary_work: Vec<String>,
    /// Soft-deleted logs stay in the file but are never read back.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

fn completed() -> bool {
    true
}

impl From<domain::WorkoutLog> for WorkoutLog {
    fn from(value: domain::WorkoutLog) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            id: value.id.to_string(),
            date: value.date,
            workout_type: value.workout_type.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            notes: if value.notes.is_empty() {
                None
            } else {
                Some(value.notes.clone())
            },
            completed: value.completed,
            supplementary_work: value
                .supplementary
                .iter()
                .map(ToString::to_string)
                .collect(),
            deleted: false,
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = RecordError;

    /// Workout types outside the strength split (e.g. `Cardio`, `Class`) are kept as `Other`.
    /// Legacy ids such as `2024-06-03-001` are replaced by random ids.
    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&value.id).map_or_else(
            |_| {
                debug!("replacing legacy workout id {}", value.id);
                domain::WorkoutLogID::random()
            },
            domain::WorkoutLogID::from,
        );
        let workout_type = value
            .workout_type
            .parse::<domain::WorkoutType>()
            .unwrap_or_else(|err| {
                debug!("treating workout {} as other: {err}", value.id);
                domain::WorkoutType::Other
            });
        Ok(Self {
            id,
            date: value.date,
            workout_type,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            notes: value.notes.unwrap_or_default(),
            completed: value.completed,
            supplementary: value
                .supplementary_work
                .iter()
                .filter_map(|work| {
                    work.parse::<domain::Supplementary>()
                        .inspect_err(|err| debug!("ignoring in workout {}: {err}", value.id))
                        .ok()
                })
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            sets: value
                .sets
                .into_iter()
                .map(|s| domain::Set::try_from(s).map_err(From::from))
                .collect::<Result<Vec<domain::Set>, RecordError>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f32>,
}

impl From<domain::Set> for Set {
    fn from(value: domain::Set) -> Self {
        Self {
            reps: value.reps.into(),
            weight_lbs: value.weight.map(f32::from),
        }
    }
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self::from(*value)
    }
}

impl TryFrom<Set> for domain::Set {
    type Error = domain::SetError;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        domain::Set::new(value.reps, value.weight_lbs)
    }
}

/// Collection wrapper of the template file, `{"templates": [...]}`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Templates {
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub exercises: Vec<TemplateExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<domain::Template> for Template {
    fn from(value: domain::Template) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            workout_type: value.workout_type.to_string(),
            exercises: value.exercises.iter().map(TemplateExercise::from).collect(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Template> for domain::Template {
    type Error = RecordError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            workout_type: value.workout_type.parse()?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PrescribedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            coaching_notes: vec![],
            adaptations: vec![],
            notes: value.notes,
            mode: domain::TemplateMode::Static,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub name: String,
    pub target_sets: u32,
    pub target_reps: TargetReps,
    #[serde(default = "rest_seconds")]
    pub rest_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn rest_seconds() -> u32 {
    90
}

impl From<domain::PrescribedExercise> for TemplateExercise {
    fn from(value: domain::PrescribedExercise) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::PrescribedExercise> for TemplateExercise {
    fn from(value: &domain::PrescribedExercise) -> Self {
        Self {
            name: value.name.to_string(),
            target_sets: value.target_sets,
            target_reps: value.target_reps.into(),
            rest_seconds: value.rest_seconds,
            weight_lbs: value.suggested_weight.map(f32::from),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<TemplateExercise> for domain::PrescribedExercise {
    type Error = RecordError;

    fn try_from(value: TemplateExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            target_sets: value.target_sets,
            target_reps: value.target_reps.try_into()?,
            suggested_weight: value
                .weight_lbs
                .map(domain::Weight::new)
                .transpose()
                .map_err(domain::SetError::from)?,
            rest_seconds: value.rest_seconds,
            reasoning: String::new(),
            notes: value.notes,
        })
    }
}

/// Target reps are written either as a number or as text such as `8-12` or `max`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TargetReps {
    Count(u32),
    Text(String),
}

impl From<domain::TargetReps> for TargetReps {
    fn from(value: domain::TargetReps) -> Self {
        match value {
            domain::TargetReps::Fixed(reps) => TargetReps::Count(reps),
            other => TargetReps::Text(other.to_string()),
        }
    }
}

impl TryFrom<TargetReps> for domain::TargetReps {
    type Error = domain::TargetRepsError;

    fn try_from(value: TargetReps) -> Result<Self, Self::Error> {
        match value {
            TargetReps::Count(reps) => Ok(domain::TargetReps::Fixed(reps)),
            TargetReps::Text(text) => text.parse(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidSet(#[from] domain::SetError),
    #[error(transparent)]
    InvalidTargetReps(#[from] domain::TargetRepsError),
    #[error(transparent)]
    InvalidWorkoutType(#[from] domain::WorkoutTypeError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{TEMPLATE, WORKOUT_LOG};

    use super::*;

    #[test]
    fn test_workout_log_try_from() {
        assert_eq!(
            domain::WorkoutLog::try_from(WorkoutLog::from(WORKOUT_LOG.clone())),
            Ok(WORKOUT_LOG.clone())
        );
    }

    #[test]
    fn test_workout_log_deserialize() {
        let value = json!({
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "date": "2024-06-03",
            "type": "Push",
            "template_id": "push_a",
            "exercises": [
                {
                    "name": "Barbell Bench Press",
                    "sets": [
                        {"reps": 8, "weight_lbs": 135.0, "rpe": 7},
                        {"reps": 6, "weight_lbs": 145.0}
                    ]
                },
                {"name": "Dips", "sets": [{"reps": 12}]}
            ],
            "warmup": {"type": "bike", "duration_min": 5},
            "supplementary_work": ["abs", "stretching"]
        });
        let log: WorkoutLog = serde_json::from_value(value).unwrap();
        let log = domain::WorkoutLog::try_from(log).unwrap();

        assert_eq!(log.workout_type, domain::WorkoutType::Push);
        assert_eq!(log.notes, "");
        assert!(log.completed);
        assert_eq!(
            log.supplementary,
            std::collections::BTreeSet::from([domain::Supplementary::Abs])
        );
        assert_eq!(log.exercises.len(), 2);
        assert_eq!(
            log.exercises[0].max_weight(),
            Some(domain::Weight::new(145.0).unwrap())
        );
        assert_eq!(log.exercises[1].sets, vec![domain::Set::new(12, None).unwrap()]);
    }

    #[rstest]
    #[case::cardio("Cardio", domain::WorkoutType::Other)]
    #[case::class("Class", domain::WorkoutType::Other)]
    #[case::legs("Legs", domain::WorkoutType::Legs)]
    fn test_workout_log_type(#[case] workout_type: &str, #[case] expected: domain::WorkoutType) {
        let log = WorkoutLog {
            workout_type: workout_type.to_string(),
            ..WorkoutLog::from(WORKOUT_LOG.clone())
        };
        assert_eq!(
            domain::WorkoutLog::try_from(log).unwrap().workout_type,
            expected
        );
    }

    #[rstest]
    #[case::empty_name(
        Exercise { name: " ".to_string(), sets: vec![] },
        RecordError::InvalidName(domain::NameError::Empty)
    )]
    #[case::negative_weight(
        Exercise {
            name: "Squat".to_string(),
            sets: vec![Set { reps: 5, weight_lbs: Some(-5.0) }],
        },
        RecordError::InvalidSet(domain::SetError::Weight(domain::WeightError::OutOfRange))
    )]
    fn test_exercise_try_from_invalid(#[case] exercise: Exercise, #[case] expected: RecordError) {
        assert_eq!(domain::Exercise::try_from(exercise), Err(expected));
    }

    #[test]
    fn test_template_try_from() {
        assert_eq!(
            domain::Template::try_from(Template::from(TEMPLATE.clone())),
            Ok(TEMPLATE.clone())
        );
    }

    #[rstest]
    #[case::count(json!(5), domain::TargetReps::Fixed(5))]
    #[case::range(json!("8-12"), domain::TargetReps::Range { low: 8, high: 12 })]
    #[case::max(json!("max"), domain::TargetReps::Max)]
    fn test_target_reps_deserialize(
        #[case] value: serde_json::Value,
        #[case] expected: domain::TargetReps,
    ) {
        let target_reps: TargetReps = serde_json::from_value(value).unwrap();
        assert_eq!(domain::TargetReps::try_from(target_reps), Ok(expected));
    }

    #[test]
    fn test_template_unknown_type() {
        let template = Template {
            workout_type: "Cardio".to_string(),
            ..Template::from(TEMPLATE.clone())
        };
        assert_eq!(
            domain::Template::try_from(template),
            Err(RecordError::InvalidWorkoutType(
                domain::WorkoutTypeError::Unknown("Cardio".to_string())
            ))
        );
    }
}
