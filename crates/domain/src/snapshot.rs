use crate::{Clock, ExerciseCatalog, Policy, Template, WorkoutLog, WorkoutType, resolve_base_template};

/// An immutable view of the training history and configuration for one planning request.
///
/// Template generation, session planning and plan adaptation are computed from a snapshot.
/// Nothing here reads from a repository, so results depend only on the snapshot's content.
pub struct Snapshot<'a, C> {
    pub logs: &'a [WorkoutLog],
    pub templates: &'a [Template],
    pub catalog: &'a C,
    pub policy: &'a Policy,
    pub clock: Clock,
}

impl<'a, C: ExerciseCatalog> Snapshot<'a, C> {
    pub fn new(
        logs: &'a [WorkoutLog],
        templates: &'a [Template],
        catalog: &'a C,
        policy: &'a Policy,
        clock: Clock,
    ) -> Self {
        Self {
            logs,
            templates,
            catalog,
            policy,
            clock,
        }
    }

    #[must_use]
    pub fn base_template(&self, workout_type: WorkoutType) -> Option<&'a Template> {
        resolve_base_template(self.templates, workout_type)
    }

    #[must_use]
    pub fn workouts_of_type(&self, workout_type: WorkoutType) -> usize {
        self.logs
            .iter()
            .filter(|log| log.workout_type == workout_type)
            .count()
    }
}
