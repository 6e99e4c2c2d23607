use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{
    Adaptation, Equipment, Exercise, ExerciseCatalog, PrescribedExercise, Template, WorkoutLog,
    WorkoutLogID, WorkoutType, infer_workout_type,
};

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl SessionID {
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

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    EquipmentExcluded,
    PlanAdapted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanAdjustment {
    pub timestamp: DateTime<Utc>,
    pub kind: AdjustmentKind,
    pub description: String,
}

/// A workout in progress.
///
/// The plan cursor points at the first planned exercise that has not been consumed yet. It only
/// moves forward, also when the remaining plan is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub id: SessionID,
    pub suggested_type: WorkoutType,
    pub actual_type: Option<WorkoutType>,
    pub started_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
    template: Template,
    cursor: usize,
    completed: Vec<Exercise>,
    equipment_unavailable: BTreeSet<Equipment>,
    adjustments: Vec<PlanAdjustment>,
}

impl SessionState {
    #[must_use]
    pub fn new(suggested_type: WorkoutType, template: Template, now: DateTime<Utc>) -> Self {
        Self {
            id: SessionID::random(),
            suggested_type,
            actual_type: None,
            started_at: now,
            last_activity_at: now,
            template,
            cursor: 0,
            completed: vec![],
            equipment_unavailable: BTreeSet::new(),
            adjustments: vec![],
        }
    }

    /// The workout type the session is currently following.
    #[must_use]
    pub fn active_type(&self) -> WorkoutType {
        self.actual_type.unwrap_or(self.suggested_type)
    }

    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn completed(&self) -> &[Exercise] {
        &self.completed
    }

    #[must_use]
    pub fn equipment_unavailable(&self) -> &BTreeSet<Equipment> {
        &self.equipment_unavailable
    }

    #[must_use]
    pub fn adjustments(&self) -> &[PlanAdjustment] {
        &self.adjustments
    }

    /// The planned exercise at the cursor together with its plan index.
    #[must_use]
    pub fn next_planned(&self) -> Option<(usize, &PrescribedExercise)> {
        self.template
            .exercises
            .get(self.cursor)
            .map(|exercise| (self.cursor, exercise))
    }

    /// Planned exercises that have not been consumed yet.
    #[must_use]
    pub fn remaining_plan(&self) -> &[PrescribedExercise] {
        self.template
            .exercises
            .get(self.cursor..)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_completed(&self, name: &str) -> bool {
        self.completed.iter().any(|e| e.name.is_same(name))
    }

    /// Checks whether an exercise needs equipment that is marked as unavailable.
    pub fn is_blocked<C: ExerciseCatalog>(&self, catalog: &C, name: &str) -> bool {
        !self.equipment_unavailable.is_empty()
            && !catalog
                .required_equipment(name)
                .is_disjoint(&self.equipment_unavailable)
    }

    /// Adds a performed exercise.
    ///
    /// With a plan index the cursor moves past that planned exercise, otherwise it moves by one.
    pub fn record_exercise(
        &mut self,
        exercise: Exercise,
        plan_index: Option<usize>,
        now: DateTime<Utc>,
    ) {
        let consumed = plan_index.map_or(self.cursor + 1, |index| (index + 1).max(self.cursor + 1));
        self.cursor = consumed.min(self.template.exercises.len()).max(self.cursor);
        debug!(
            "recorded {} in session {}, plan cursor at {}",
            exercise.name, *self.id, self.cursor
        );
        self.completed.push(exercise);
        self.last_activity_at = now;
    }

    /// Marks the equipment named in `text` as unavailable and returns the newly added items.
    pub fn exclude_equipment(&mut self, text: &str, now: DateTime<Utc>) -> BTreeSet<Equipment> {
        let added = Equipment::parse_list(text)
            .difference(&self.equipment_unavailable)
            .copied()
            .collect::<BTreeSet<_>>();
        if !added.is_empty() {
            self.equipment_unavailable.extend(added.iter().copied());
            self.adjustments.push(PlanAdjustment {
                timestamp: now,
                kind: AdjustmentKind::EquipmentExcluded,
                description: format!(
                    "Unavailable: {}",
                    added
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }
        self.last_activity_at = now;
        added
    }

    /// Replaces the unconsumed part of the plan by an adapted template.
    ///
    /// Consumed plan exercises are kept, so earlier plan indices stay valid.
    pub fn apply_adaptation(&mut self, adaptation: Adaptation) {
        let Adaptation {
            mut template,
            reason,
            new_type,
            timestamp,
            ..
        } = adaptation;
        let mut exercises = std::mem::take(&mut self.template.exercises);
        exercises.truncate(self.cursor);
        exercises.append(&mut template.exercises);
        template.exercises = exercises;

        self.template = template;
        self.actual_type = Some(new_type);
        self.adjustments.push(PlanAdjustment {
            timestamp,
            kind: AdjustmentKind::PlanAdapted,
            description: reason,
        });
        self.last_activity_at = timestamp;
    }

    /// Turns the session into a workout log, if any exercise was performed.
    #[must_use]
    pub fn finish(self, date: NaiveDate) -> Option<WorkoutLog> {
        if self.completed.is_empty() {
            return None;
        }
        let workout_type = self
            .actual_type
            .or(Some(self.suggested_type).filter(|t| *t != WorkoutType::Other))
            .or_else(|| infer_workout_type(self.completed.iter().map(|e| e.name.as_str())))
            .unwrap_or_default();
        let notes = self
            .adjustments
            .iter()
            .map(|a| a.description.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Some(WorkoutLog {
            id: WorkoutLogID::random(),
            date,
            workout_type,
            exercises: self.completed,
            notes,
            completed: true,
            supplementary: BTreeSet::new(),
        })
    }
}
