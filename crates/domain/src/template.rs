use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{Name, Weight, WorkoutType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetReps {
    Fixed(u32),
    Range { low: u32, high: u32 },
    Max,
}

impl fmt::Display for TargetReps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetReps::Fixed(reps) => write!(f, "{reps}"),
            TargetReps::Range { low, high } => write!(f, "{low}-{high}"),
            TargetReps::Max => write!(f, "max"),
        }
    }
}

impl FromStr for TargetReps {
    type Err = TargetRepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if matches!(s.as_str(), "max" | "amrap" | "failure") {
            return Ok(TargetReps::Max);
        }
        let parse = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| TargetRepsError::Invalid(s.clone()))
        };
        match s.split_once(['-', '–']) {
            Some((low, high)) => {
                let (low, high) = (parse(low)?, parse(high)?);
                if low > high {
                    return Err(TargetRepsError::Invalid(s.clone()));
                }
                Ok(TargetReps::Range { low, high })
            }
            None => Ok(TargetReps::Fixed(parse(&s)?)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TargetRepsError {
    #[error("Invalid target reps: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrescribedExercise {
    pub name: Name,
    pub target_sets: u32,
    pub target_reps: TargetReps,
    pub suggested_weight: Option<Weight>,
    pub rest_seconds: u32,
    pub reasoning: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateMode {
    Static,
    Adaptive {
        generated_at: DateTime<Utc>,
        personalized: bool,
        adapted_at: Option<DateTime<Utc>>,
    },
    Express {
        estimated_minutes: u32,
    },
    Error(TemplateError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("No base template found for {0} workouts")]
    MissingBase(WorkoutType),
    #[error("Failed to read training history: {0}")]
    History(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub workout_type: WorkoutType,
    pub exercises: Vec<PrescribedExercise>,
    pub coaching_notes: Vec<String>,
    pub adaptations: Vec<String>,
    pub notes: Option<String>,
    pub mode: TemplateMode,
}

impl Template {
    /// An empty template that carries the reason why no template could be generated.
    #[must_use]
    pub fn error(workout_type: WorkoutType, error: TemplateError) -> Self {
        Self {
            id: format!("{}_unavailable", workout_type.key()),
            name: format!("{workout_type} Workout"),
            workout_type,
            exercises: vec![],
            coaching_notes: vec![],
            adaptations: vec![],
            notes: Some(error.to_string()),
            mode: TemplateMode::Error(error),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.mode, TemplateMode::Error(_))
    }

    #[must_use]
    pub fn is_adaptive(&self) -> bool {
        matches!(self.mode, TemplateMode::Adaptive { .. })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exercises.iter().any(|e| e.name.is_same(name))
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.target_sets).sum()
    }
}

/// Finds the base template for a workout type.
///
/// Tries the id `<type>_a`, then the id `<type>`, then the first template of that type.
#[must_use]
pub fn resolve_base_template(templates: &[Template], workout_type: WorkoutType) -> Option<&Template> {
    let key = workout_type.key();
    let primary = format!("{key}_a");
    templates
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(&primary))
        .or_else(|| templates.iter().find(|t| t.id.eq_ignore_ascii_case(key)))
        .or_else(|| {
            templates.iter().find(|t| {
                t.workout_type == workout_type || t.name.to_lowercase().contains(key)
            })
        })
}
