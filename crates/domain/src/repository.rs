use chrono::NaiveDate;

use crate::{Interval, Name, ReadError, Set, Template, Weight, WorkoutLog};

pub trait HistoryRepository {
    /// Workout logs dated within `interval`, in chronological order.
    fn read_logs(&self, interval: &Interval) -> Result<Vec<WorkoutLog>, ReadError>;

    fn read_exercise_history(
        &self,
        name: &str,
        interval: &Interval,
        name_match: NameMatch,
    ) -> Result<Vec<ExerciseHistoryEntry>, ReadError> {
        Ok(exercise_history(&self.read_logs(interval)?, name, name_match))
    }
}

pub trait TemplateRepository {
    fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Exact,
    /// Case-insensitive substring match.
    Contains,
}

impl NameMatch {
    #[must_use]
    pub fn matches(self, candidate: &Name, name: &str) -> bool {
        match self {
            NameMatch::Exact => candidate.is_same(name),
            NameMatch::Contains => candidate.contains(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistoryEntry {
    pub date: NaiveDate,
    pub exercise: Name,
    pub max_weight: Option<Weight>,
    pub sets: Vec<Set>,
}

/// Every occurrence of a matching exercise, ordered by date.
#[must_use]
pub fn exercise_history(
    logs: &[WorkoutLog],
    name: &str,
    name_match: NameMatch,
) -> Vec<ExerciseHistoryEntry> {
    let mut entries = logs
        .iter()
        .flat_map(|log| {
            log.exercises
                .iter()
                .filter(move |e| name_match.matches(&e.name, name))
                .map(move |e| ExerciseHistoryEntry {
                    date: log.date,
                    exercise: e.name.clone(),
                    max_weight: e.max_weight(),
                    sets: e.sets.clone(),
                })
        })
        .collect::<Vec<_>>();
    entries.sort_by_key(|e| e.date);
    entries
}
