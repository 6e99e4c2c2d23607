use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::{Equipment, Exercise, ExerciseCatalog, Snapshot, Template, TemplateMode, WorkoutType};

/// A replacement for the remainder of a session's plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Adaptation {
    pub template: Template,
    pub reason: String,
    pub new_type: WorkoutType,
    pub exercises_completed: usize,
    pub timestamp: DateTime<Utc>,
}

impl<C: ExerciseCatalog> Snapshot<'_, C> {
    /// Regenerates the rest of a workout for a new workout type.
    ///
    /// Exercises already performed and exercises needing unavailable equipment are left out.
    #[must_use]
    pub fn adapt_plan(
        &self,
        completed: &[Exercise],
        new_type: WorkoutType,
        equipment_unavailable: &BTreeSet<Equipment>,
    ) -> Adaptation {
        let now = self.clock.now;
        let mut template = self.adaptive_template(new_type);

        if let TemplateMode::Error(err) = template.mode.clone() {
            warn!("failed to generate {new_type} template for adapted plan: {err}");
            template = Template {
                id: format!("adapted_{}", new_type.key()),
                name: format!("Adapted {new_type} Workout"),
                workout_type: new_type,
                exercises: vec![],
                coaching_notes: vec![format!("Plan adapted mid-workout to {new_type}")],
                adaptations: vec![],
                notes: Some(format!(
                    "No {new_type} exercises available ({err}). Continue with exercises of your choice."
                )),
                mode: TemplateMode::Adaptive {
                    generated_at: now,
                    personalized: false,
                    adapted_at: None,
                },
            };
        }

        template.exercises.retain(|exercise| {
            let name = exercise.name.as_str();
            !completed.iter().any(|c| c.name.is_same(name))
                && self
                    .catalog
                    .required_equipment(name)
                    .is_disjoint(equipment_unavailable)
        });
        if let TemplateMode::Adaptive { adapted_at, .. } = &mut template.mode {
            *adapted_at = Some(now);
        }

        let reason = adaptation_reason(completed, new_type);
        info!("{reason}, {} exercises remaining", template.exercises.len());

        Adaptation {
            template,
            reason,
            new_type,
            exercises_completed: completed.len(),
            timestamp: now,
        }
    }
}

fn adaptation_reason(completed: &[Exercise], new_type: WorkoutType) -> String {
    match completed {
        [] => format!("Plan adapted to {new_type}"),
        [exercise] => format!("Plan adapted to {new_type} after completing {}", exercise.name),
        [.., second_last, last] => format!(
            "Plan adapted to {new_type} after {} exercises ({}, {})",
            completed.len(),
            second_last.name,
            last.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        BuiltinCatalog, Policy, TemplateError,
        testing::{clock, exercise, templates},
    };

    fn names(template: &Template) -> Vec<&str> {
        template.exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_adapt_plan() {
        let policy = Policy::default();
        let templates = templates();
        let snapshot = Snapshot::new(&[], &templates, &BuiltinCatalog, &policy, clock());
        let completed = vec![exercise("squat", &[(5, Some(185.0))])];

        let adaptation = snapshot.adapt_plan(
            &completed,
            WorkoutType::Legs,
            &BTreeSet::from([Equipment::Barbell]),
        );

        assert_eq!(names(&adaptation.template), vec!["Leg Press", "Leg Curl", "Calf Raise"]);
        assert_eq!(adaptation.reason, "Plan adapted to Legs after completing squat");
        assert_eq!(adaptation.new_type, WorkoutType::Legs);
        assert_eq!(adaptation.exercises_completed, 1);
        assert_eq!(adaptation.timestamp, clock().now);
        assert_eq!(
            adaptation.template.mode,
            TemplateMode::Adaptive {
                generated_at: clock().now,
                personalized: false,
                adapted_at: Some(clock().now),
            }
        );
    }

    #[test]
    fn test_adapt_plan_without_base_template() {
        let policy = Policy::default();
        let templates = templates();
        let snapshot = Snapshot::new(&[], &templates, &BuiltinCatalog, &policy, clock());

        let adaptation = snapshot.adapt_plan(&[], WorkoutType::Upper, &BTreeSet::new());

        assert_eq!(adaptation.template.id, "adapted_upper");
        assert_eq!(adaptation.template.exercises, vec![]);
        assert!(!adaptation.template.is_error());
        assert_eq!(
            adaptation.template.notes,
            Some(format!(
                "No Upper exercises available ({}). Continue with exercises of your choice.",
                TemplateError::MissingBase(WorkoutType::Upper)
            ))
        );
        assert_eq!(adaptation.reason, "Plan adapted to Upper");
    }

    #[rstest]
    #[case::none(&[], "Plan adapted to Pull")]
    #[case::one(&["Barbell Row"], "Plan adapted to Pull after completing Barbell Row")]
    #[case::two(&["Barbell Row", "Lat Pulldown"], "Plan adapted to Pull after 2 exercises (Barbell Row, Lat Pulldown)")]
    #[case::three(
        &["Squat", "Barbell Row", "Lat Pulldown"],
        "Plan adapted to Pull after 3 exercises (Barbell Row, Lat Pulldown)"
    )]
    fn test_adaptation_reason(#[case] names: &[&str], #[case] expected: &str) {
        let completed = names
            .iter()
            .map(|name| exercise(name, &[(10, None)]))
            .collect::<Vec<_>>();

        assert_eq!(adaptation_reason(&completed, WorkoutType::Pull), expected);
    }
}
