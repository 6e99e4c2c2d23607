use log::debug;

use crate::{
    ExerciseCatalog, Lookback, Name, NameMatch, PrescribedExercise, SessionState, Snapshot,
    TargetReps, Weight, exercise_history,
};

const LOWER_BODY_KEYWORDS: [&str; 6] = ["squat", "leg", "deadlift", "calf", "lunge", "hip"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SourcePreference {
    /// Follow the plan while it has exercises left, then switch to adaptive suggestions.
    #[default]
    Auto,
    Plan,
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Plan,
    Adaptive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedExercise {
    pub name: Name,
    pub target_sets: u32,
    pub target_reps: TargetReps,
    pub suggested_weight: Option<Weight>,
    pub rest_seconds: u32,
    /// Position in the session's plan, if the suggestion comes from the plan.
    pub plan_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Exercise(SuggestedExercise),
    /// Every remaining planned exercise needs unavailable equipment.
    Blocked,
    PlanComplete,
    /// Nothing left to suggest, the user picks the next exercise.
    FreeChoice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub source: SuggestionSource,
    pub outcome: SuggestionOutcome,
    pub reasoning: String,
}

impl Suggestion {
    #[must_use]
    pub fn exercise(&self) -> Option<&SuggestedExercise> {
        match &self.outcome {
            SuggestionOutcome::Exercise(exercise) => Some(exercise),
            _ => None,
        }
    }
}

impl<C: ExerciseCatalog> Snapshot<'_, C> {
    /// Suggests the next exercise of a session.
    #[must_use]
    pub fn suggest_next(&self, session: &SessionState, preference: SourcePreference) -> Suggestion {
        let source = match preference {
            SourcePreference::Auto if session.next_planned().is_some() => SuggestionSource::Plan,
            SourcePreference::Plan => SuggestionSource::Plan,
            SourcePreference::Auto | SourcePreference::Adaptive => SuggestionSource::Adaptive,
        };
        let suggestion = match source {
            SuggestionSource::Plan => self.suggest_from_plan(session),
            SuggestionSource::Adaptive => self.suggest_adaptive(session),
        };
        debug!(
            "suggestion for session {}: {:?} ({})",
            *session.id, suggestion.outcome, suggestion.reasoning
        );
        suggestion
    }

    /// Weight for the next session of an exercise based on the most recent matching session.
    ///
    /// The heaviest weight of that session is increased by the lower or upper body increment.
    #[must_use]
    pub fn progressive_weight(&self, name: &str) -> Option<Weight> {
        let policy = &self.policy.planner;
        let interval = Lookback::Days(policy.lookback_days).interval(self.clock.today);
        let latest = exercise_history(self.logs, name, NameMatch::Contains)
            .into_iter()
            .rev()
            .find(|entry| interval.contains(entry.date))?;
        let max_weight = latest.max_weight?;
        let lower_case = name.to_lowercase();
        let increment = if LOWER_BODY_KEYWORDS.iter().any(|kw| lower_case.contains(kw)) {
            policy.lower_increment
        } else {
            policy.upper_increment
        };
        Some(Weight::rounded(max_weight.lbs() + increment))
    }

    fn suggest_from_plan(&self, session: &SessionState) -> Suggestion {
        let remaining = session.remaining_plan();
        if remaining.is_empty() {
            return Suggestion {
                source: SuggestionSource::Plan,
                outcome: SuggestionOutcome::PlanComplete,
                reasoning: "You've completed the planned workout".to_string(),
            };
        }

        let Some(offset) = remaining
            .iter()
            .position(|e| !session.is_blocked(self.catalog, e.name.as_str()))
        else {
            return Suggestion {
                source: SuggestionSource::Plan,
                outcome: SuggestionOutcome::Blocked,
                reasoning: format!(
                    "All remaining planned exercises need unavailable equipment: {}",
                    names(remaining)
                ),
            };
        };

        let exercise = &remaining[offset];
        let reasoning = if offset > 0 {
            format!(
                "{} skipped because of unavailable equipment",
                names(&remaining[..offset])
            )
        } else if exercise.reasoning.is_empty() {
            format!("Next from your {} plan", session.template().workout_type)
        } else {
            exercise.reasoning.clone()
        };

        Suggestion {
            source: SuggestionSource::Plan,
            outcome: SuggestionOutcome::Exercise(
                self.suggested_exercise(exercise, Some(session.cursor() + offset)),
            ),
            reasoning,
        }
    }

    fn suggest_adaptive(&self, session: &SessionState) -> Suggestion {
        let workout_type = session.active_type();
        let template = self.adaptive_template(workout_type);
        let next = template.exercises.iter().find(|e| {
            let name = e.name.as_str();
            !session.is_completed(name) && !session.is_blocked(self.catalog, name)
        });

        match next {
            Some(exercise) => Suggestion {
                source: SuggestionSource::Adaptive,
                outcome: SuggestionOutcome::Exercise(self.suggested_exercise(exercise, None)),
                reasoning: format!("Complementary {workout_type} exercise"),
            },
            None => Suggestion {
                source: SuggestionSource::Adaptive,
                outcome: SuggestionOutcome::FreeChoice,
                reasoning: "Great workout! Finish up or add an exercise of your own.".to_string(),
            },
        }
    }

    fn suggested_exercise(
        &self,
        exercise: &PrescribedExercise,
        plan_index: Option<usize>,
    ) -> SuggestedExercise {
        let name = exercise.name.as_str();
        SuggestedExercise {
            name: exercise.name.clone(),
            target_sets: exercise.target_sets,
            target_reps: exercise.target_reps,
            suggested_weight: exercise
                .suggested_weight
                .or_else(|| self.progressive_weight(name))
                .or_else(|| self.catalog.beginner_weight(name).weight),
            rest_seconds: exercise.rest_seconds,
            plan_index,
        }
    }
}

fn names(exercises: &[PrescribedExercise]) -> String {
    exercises
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        BuiltinCatalog, Policy, WorkoutLog, WorkoutType,
        testing::{clock, exercise, log, prescribed, template, templates},
    };

    fn push_session() -> SessionState {
        SessionState::new(WorkoutType::Push, templates().remove(0), clock().now)
    }

    fn history() -> Vec<WorkoutLog> {
        vec![
            log(
                "2024-03-01",
                WorkoutType::Push,
                &[("Barbell Bench Press", &[(8, Some(200.0))])],
            ),
            log(
                "2024-06-17",
                WorkoutType::Push,
                &[("Barbell Bench Press", &[(8, Some(145.0)), (6, Some(150.0))])],
            ),
            log(
                "2024-06-24",
                WorkoutType::Legs,
                &[("Squat", &[(5, Some(185.0))]), ("Leg Press", &[(10, None)])],
            ),
        ]
    }

    fn weight(value: f32) -> Option<Weight> {
        Some(Weight::rounded(value))
    }

    #[rstest]
    #[case::upper_body("Barbell Bench Press", weight(152.5))]
    #[case::substring("Bench Press", weight(152.5))]
    #[case::lower_body("Squat", weight(190.0))]
    #[case::without_weight("Leg Press", None)]
    #[case::outside_lookback("Incline Bench Press", None)]
    #[case::unknown("Lateral Raise", None)]
    fn test_progressive_weight(#[case] name: &str, #[case] expected: Option<Weight>) {
        let policy = Policy::default();
        let mut logs = history();
        logs.push(log(
            "2024-01-15",
            WorkoutType::Push,
            &[("Incline Bench Press", &[(8, Some(100.0))])],
        ));
        let snapshot = Snapshot::new(&logs, &[], &BuiltinCatalog, &policy, clock());

        assert_eq!(snapshot.progressive_weight(name), expected);
    }

    #[test]
    fn test_suggest_next_from_plan() {
        let policy = Policy::default();
        let logs = history();
        let snapshot = Snapshot::new(&logs, &[], &BuiltinCatalog, &policy, clock());
        let session = push_session();

        let suggestion = snapshot.suggest_next(&session, SourcePreference::Auto);

        assert_eq!(
            suggestion,
            Suggestion {
                source: SuggestionSource::Plan,
                outcome: SuggestionOutcome::Exercise(SuggestedExercise {
                    name: Name::new("Barbell Bench Press").unwrap(),
                    target_sets: 4,
                    target_reps: TargetReps::Range { low: 6, high: 8 },
                    suggested_weight: weight(152.5),
                    rest_seconds: 180,
                    plan_index: Some(0),
                }),
                reasoning: "Next from your Push plan".to_string(),
            }
        );
    }

    #[test]
    fn test_suggest_next_catalog_default() {
        let policy = Policy::default();
        let snapshot = Snapshot::new(&[], &[], &BuiltinCatalog, &policy, clock());
        let mut session = push_session();
        session.record_exercise(exercise("Barbell Bench Press", &[(8, None)]), Some(0), clock().now);

        let suggestion = snapshot.suggest_next(&session, SourcePreference::Auto);

        let exercise = suggestion.exercise().unwrap();
        assert_eq!(exercise.name.as_str(), "Overhead Press");
        assert_eq!(exercise.plan_index, Some(1));
        assert_eq!(exercise.suggested_weight, weight(45.0));
    }

    #[test]
    fn test_suggest_next_skips_unavailable_equipment() {
        let policy = Policy::default();
        let snapshot = Snapshot::new(&[], &[], &BuiltinCatalog, &policy, clock());
        let mut session = push_session();
        session.exclude_equipment("barbell", clock().now);

        let suggestion = snapshot.suggest_next(&session, SourcePreference::Auto);

        let exercise = suggestion.exercise().unwrap();
        assert_eq!(exercise.name.as_str(), "Incline Dumbbell Press");
        assert_eq!(exercise.plan_index, Some(2));
        assert_eq!(
            suggestion.reasoning,
            "Barbell Bench Press, Overhead Press skipped because of unavailable equipment"
        );
    }

    #[test]
    fn test_suggest_next_blocked() {
        let policy = Policy::default();
        let snapshot = Snapshot::new(&[], &[], &BuiltinCatalog, &policy, clock());
        let mut session = SessionState::new(
            WorkoutType::Push,
            template(
                "custom",
                WorkoutType::Push,
                vec![
                    prescribed("Barbell Bench Press", 3, "8", None, 120),
                    prescribed("Tricep Pushdown", 3, "12", None, 60),
                ],
            ),
            clock().now,
        );
        session.exclude_equipment("bb, cable machine", clock().now);

        let suggestion = snapshot.suggest_next(&session, SourcePreference::Auto);

        assert_eq!(suggestion.source, SuggestionSource::Plan);
        assert_eq!(suggestion.outcome, SuggestionOutcome::Blocked);
    }

    #[rstest]
    #[case::plan(SourcePreference::Plan, SuggestionSource::Plan)]
    #[case::auto(SourcePreference::Auto, SuggestionSource::Adaptive)]
    fn test_suggest_next_after_plan(
        #[case] preference: SourcePreference,
        #[case] expected: SuggestionSource,
    ) {
        let policy = Policy::default();
        let templates = templates();
        let snapshot = Snapshot::new(&[], &templates, &BuiltinCatalog, &policy, clock());
        let mut session = SessionState::new(
            WorkoutType::Push,
            template(
                "custom",
                WorkoutType::Push,
                vec![prescribed("Barbell Bench Press", 3, "8", None, 120)],
            ),
            clock().now,
        );
        session.record_exercise(exercise("Barbell Bench Press", &[(8, None)]), Some(0), clock().now);

        let suggestion = snapshot.suggest_next(&session, preference);

        assert_eq!(suggestion.source, expected);
        match expected {
            SuggestionSource::Plan => {
                assert_eq!(suggestion.outcome, SuggestionOutcome::PlanComplete);
            }
            SuggestionSource::Adaptive => {
                let exercise = suggestion.exercise().unwrap();
                assert_eq!(exercise.name.as_str(), "Overhead Press");
                assert_eq!(exercise.plan_index, None);
                assert_eq!(exercise.suggested_weight, weight(45.0));
                assert_eq!(suggestion.reasoning, "Complementary Push exercise");
            }
        }
    }

    #[test]
    fn test_suggest_next_free_choice() {
        let policy = Policy::default();
        let templates = templates();
        let snapshot = Snapshot::new(&[], &templates, &BuiltinCatalog, &policy, clock());
        let session = SessionState::new(
            WorkoutType::Upper,
            template("custom", WorkoutType::Upper, vec![]),
            clock().now,
        );

        let suggestion = snapshot.suggest_next(&session, SourcePreference::Auto);

        assert_eq!(suggestion.source, SuggestionSource::Adaptive);
        assert_eq!(suggestion.outcome, SuggestionOutcome::FreeChoice);
    }
}
