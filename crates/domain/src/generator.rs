use log::{debug, warn};

use crate::{
    Adherence, ExerciseCatalog, Lookback, PrescribedExercise, ProgressionSummary, Snapshot,
    SuggestedAction, Template, TemplateError, TemplateMode, VolumeTrend, Weight, WorkoutType,
    exercise_patterns, progression_velocity, text, volume_tolerance,
};

const COMPOUND_KEYWORDS: [&str; 14] = [
    "squat",
    "deadlift",
    "press",
    "row",
    "pull up",
    "pullup",
    "chin up",
    "chinup",
    "pulldown",
    "dip",
    "lunge",
    "hip thrust",
    "clean",
    "rdl",
];

/// Checks whether an exercise trains several joints, judged by its name.
#[must_use]
pub fn is_compound(name: &str) -> bool {
    text::contains_any(&text::words(name), &COMPOUND_KEYWORDS)
}

/// Estimated duration in minutes, assuming every set takes one minute plus the average rest.
#[must_use]
pub fn estimate_minutes(exercises: &[PrescribedExercise], overhead_minutes: f32) -> u32 {
    let total_sets = exercises.iter().map(|e| e.target_sets).sum::<u32>();
    #[allow(clippy::cast_precision_loss)]
    let avg_rest_seconds = if exercises.is_empty() {
        0.0
    } else {
        exercises.iter().map(|e| e.rest_seconds).sum::<u32>() as f32 / exercises.len() as f32
    };
    #[allow(clippy::cast_precision_loss)]
    let minutes = overhead_minutes + total_sets as f32 * (1.0 + avg_rest_seconds / 60.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = minutes.round().max(0.0) as u32;
    minutes
}

fn express_sets(sets: u32) -> u32 {
    match sets {
        4.. => 3,
        3 => 2,
        _ => sets,
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

impl<C: ExerciseCatalog> Snapshot<'_, C> {
    /// Personalizes the base template of a workout type using the whole training history.
    ///
    /// Generation never fails. A missing base template results in an empty template with mode
    /// `Error`.
    #[must_use]
    pub fn adaptive_template(&self, workout_type: WorkoutType) -> Template {
        let Some(base) = self.base_template(workout_type) else {
            warn!("no base template for {workout_type} workouts");
            return Template::error(workout_type, TemplateError::MissingBase(workout_type));
        };
        let policy = self.policy;
        let interval = Lookback::All.interval(self.clock.today);
        let patterns = exercise_patterns(self.logs, workout_type, &interval, &policy.patterns);
        let personalized = patterns.total_workouts >= policy.templates.min_history;

        let mut template = Template {
            id: format!("{}_adaptive", base.id),
            name: base.name.clone(),
            workout_type,
            exercises: vec![],
            coaching_notes: vec![],
            adaptations: vec![],
            notes: base.notes.clone(),
            mode: TemplateMode::Adaptive {
                generated_at: self.clock.now,
                personalized,
                adapted_at: None,
            },
        };

        if !personalized {
            debug!(
                "using base template {} for {workout_type}: {} of {} workouts logged",
                base.id, patterns.total_workouts, policy.templates.min_history
            );
            template.exercises = base
                .exercises
                .iter()
                .map(|e| self.with_beginner_weight(e))
                .collect();
            template.adaptations.push(format!(
                "Using base template: insufficient history to personalize ({} of {} {workout_type} workouts logged)",
                patterns.total_workouts, policy.templates.min_history
            ));
            return template;
        }

        let mut removed = vec![];
        let mut weights_suggested = 0;
        for exercise in &base.exercises {
            let name = exercise.name.as_str();
            let pattern = patterns.get(name);
            let frequency = pattern.map_or(0.0, |p| p.frequency);
            if policy.patterns.adherence(frequency) == Adherence::Rare {
                removed.push(name.to_string());
                continue;
            }

            let progression = progression_velocity(self.logs, name, &interval, &policy.progression);
            let (suggested_weight, reasoning) = match (
                progression.current_weight(),
                progression.next_weight(&policy.progression),
            ) {
                (Some(current), Some(next)) => {
                    weights_suggested += 1;
                    (Some(next), progression_reasoning(&progression, current, next))
                }
                _ => {
                    let beginner = self.catalog.beginner_weight(name);
                    (
                        beginner.weight.or(exercise.suggested_weight),
                        beginner.reasoning,
                    )
                }
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let target_sets = pattern
                .map(|p| p.avg_sets.round() as u32)
                .filter(|sets| *sets > 0)
                .unwrap_or(exercise.target_sets);

            template.exercises.push(PrescribedExercise {
                name: exercise.name.clone(),
                target_sets,
                target_reps: exercise.target_reps,
                suggested_weight,
                rest_seconds: exercise.rest_seconds,
                reasoning: format!(
                    "Part of {:.0}% of your {workout_type} workouts. {reasoning}",
                    frequency * 100.0
                ),
                notes: exercise.notes.clone(),
            });
        }

        let volume = volume_tolerance(self.logs, workout_type, &interval, &policy.volume);
        if let Some(change) = volume
            .change_pct()
            .filter(|change| *change > policy.volume.coaching_increase_pct)
        {
            template.coaching_notes.push(format!(
                "Volume is up {change:.0}% recently. Keep an eye on recovery."
            ));
        }
        if volume.trend == VolumeTrend::Decreasing {
            template.coaching_notes.push(
                "Volume has been trending down. Add a set where you feel fresh.".to_string(),
            );
        }

        if !removed.is_empty() {
            template.adaptations.push(format!(
                "Removed {} exercise{} you rarely do: {}",
                removed.len(),
                plural(removed.len()),
                removed.join(", ")
            ));
        }
        if weights_suggested > 0 {
            template.adaptations.push(format!(
                "Suggested weights for {weights_suggested} exercise{} from your progression",
                plural(weights_suggested)
            ));
        }
        template.adaptations.push(format!(
            "Typical volume: {:.0} sets across {:.1} exercises",
            volume.avg_total_sets, volume.avg_exercises_per_workout
        ));
        let added = patterns
            .frequently_added(base)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        if !added.is_empty() {
            template
                .adaptations
                .push(format!("You often add: {}", added.join(", ")));
        }

        debug!(
            "generated adaptive {workout_type} template with {} exercises ({} removed)",
            template.exercises.len(),
            removed.len()
        );
        template
    }

    /// Shortens a template to its most important exercises with fewer sets.
    ///
    /// Without an explicit base the base template of the workout type is used.
    #[must_use]
    pub fn express_template(&self, workout_type: WorkoutType, base: Option<&Template>) -> Template {
        let Some(base) = base.or_else(|| self.base_template(workout_type)) else {
            warn!("no base template for express {workout_type} workout");
            return Template::error(workout_type, TemplateError::MissingBase(workout_type));
        };
        if let TemplateMode::Error(_) = base.mode {
            return base.clone();
        }
        let policy = &self.policy.templates;

        let (compounds, accessories): (Vec<_>, Vec<_>) = base
            .exercises
            .iter()
            .partition(|e| is_compound(e.name.as_str()));
        let exercises = compounds
            .into_iter()
            .take(policy.express_compounds)
            .chain(accessories.into_iter().take(policy.express_accessories))
            .map(|e| PrescribedExercise {
                target_sets: express_sets(e.target_sets),
                ..e.clone()
            })
            .collect::<Vec<_>>();
        let estimated_minutes = estimate_minutes(&exercises, policy.express_overhead_minutes);

        Template {
            id: format!("{}_express", base.id),
            name: format!("{} (Express)", base.name),
            workout_type,
            adaptations: vec![format!(
                "Express version: {} of {} exercises with reduced sets, about {estimated_minutes} minutes",
                exercises.len(),
                base.exercises.len()
            )],
            exercises,
            coaching_notes: base.coaching_notes.clone(),
            notes: base.notes.clone(),
            mode: TemplateMode::Express { estimated_minutes },
        }
    }

    /// Chooses between the adaptive and the static template of a workout type.
    #[must_use]
    pub fn workout_template(&self, workout_type: WorkoutType, prefer_adaptive: bool) -> Template {
        if prefer_adaptive {
            let logged = self.workouts_of_type(workout_type);
            if logged >= self.policy.templates.adaptive_min_history {
                let template = self.adaptive_template(workout_type);
                if !template.is_error() {
                    return template;
                }
            } else {
                debug!(
                    "not enough {workout_type} workouts for an adaptive template ({logged} of {})",
                    self.policy.templates.adaptive_min_history
                );
            }
        }

        match self.base_template(workout_type) {
            Some(base) => Template {
                mode: TemplateMode::Static,
                ..base.clone()
            },
            None => Template::error(workout_type, TemplateError::MissingBase(workout_type)),
        }
    }

    fn with_beginner_weight(&self, exercise: &PrescribedExercise) -> PrescribedExercise {
        if exercise.suggested_weight.is_some() {
            return exercise.clone();
        }
        let beginner = self.catalog.beginner_weight(exercise.name.as_str());
        PrescribedExercise {
            suggested_weight: beginner.weight,
            reasoning: if exercise.reasoning.is_empty() {
                beginner.reasoning
            } else {
                exercise.reasoning.clone()
            },
            ..exercise.clone()
        }
    }
}

fn progression_reasoning(progression: &ProgressionSummary, current: Weight, next: Weight) -> String {
    match progression.suggested_action {
        SuggestedAction::Increase => format!(
            "Progressing {:.1} lb per week. Go for {next} lb.",
            progression.avg_weekly_delta
        ),
        SuggestedAction::Deload => format!(
            "Stuck at {current} lb for {} sessions. Deload to {next} lb and build back up.",
            progression.weeks_at_current_weight
        ),
        SuggestedAction::Maintain if progression.stalled => {
            format!("Holding at {current} lb. Aim for cleaner reps before adding weight.")
        }
        SuggestedAction::Maintain => format!("Last time you worked up to {current} lb. Match it."),
    }
}
