use log::{debug, error, info};

use crate::{
    Adaptation, BalanceReport, Clock, Deviation, Exercise, ExerciseCatalog, ExerciseHistoryEntry,
    ExerciseInfo, HistoryRepository, LastWorkout, Lookback, MuscleGroup, NameMatch,
    OvertrainingReport, PatternSummary, Policy, ProgressionSummary, ReadError, RecoverySummary,
    SessionState, Snapshot, SourcePreference, Suggestion, Template, TemplateError,
    TemplateRepository, VolumeSummary, WeeklySplitState, WeeklySplitStatus, WorkoutLog,
    WorkoutRecommendation, WorkoutType, detect_deviation, exercise_patterns, last_workout,
    muscle_balance, next_workout, overtraining_signals, progression_velocity, recovery_patterns,
    volume_tolerance, weekly_status,
};

/// Entry point for analyses and planning on top of a history store.
///
/// Every call reads the current history from the repository, so writes by the caller are
/// reflected immediately.
pub struct Coach<R> {
    repository: R,
    policy: Policy,
    clock: Option<Clock>,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoDataSource) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Coach<R>
where
    R: HistoryRepository + TemplateRepository + ExerciseCatalog,
{
    pub fn new(repository: R) -> Self {
        Self::with_policy(repository, Policy::default())
    }

    pub fn with_policy(repository: R, policy: Policy) -> Self {
        Self {
            repository,
            policy,
            clock: None,
        }
    }

    /// Fixes the current date and time instead of reading the system clock.
    #[must_use]
    pub fn at(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn clock(&self) -> Clock {
        self.clock.unwrap_or_else(Clock::system)
    }

    pub fn logs(&self, lookback: Lookback) -> Result<Vec<WorkoutLog>, ReadError> {
        log_on_error!(
            self.repository
                .read_logs(&lookback.interval(self.clock().today)),
            ReadError,
            "read",
            "workout logs"
        )
    }

    fn templates(&self) -> Result<Vec<Template>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "read",
            "templates"
        )
    }

    pub fn exercise_history(
        &self,
        name: &str,
        lookback: Lookback,
        name_match: NameMatch,
    ) -> Result<Vec<ExerciseHistoryEntry>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_history(
                name,
                &lookback.interval(self.clock().today),
                name_match
            ),
            ReadError,
            "read",
            "exercise history"
        )
    }

    pub fn exercise_patterns(
        &self,
        workout_type: WorkoutType,
        lookback: Lookback,
    ) -> Result<PatternSummary, ReadError> {
        let interval = lookback.interval(self.clock().today);
        Ok(exercise_patterns(
            &self.logs(lookback)?,
            workout_type,
            &interval,
            &self.policy.patterns,
        ))
    }

    pub fn volume_tolerance(
        &self,
        workout_type: WorkoutType,
        lookback: Lookback,
    ) -> Result<VolumeSummary, ReadError> {
        let interval = lookback.interval(self.clock().today);
        Ok(volume_tolerance(
            &self.logs(lookback)?,
            workout_type,
            &interval,
            &self.policy.volume,
        ))
    }

    pub fn recovery_patterns(
        &self,
        muscle_group: MuscleGroup,
        lookback: Lookback,
    ) -> Result<RecoverySummary, ReadError> {
        let interval = lookback.interval(self.clock().today);
        Ok(recovery_patterns(
            &self.logs(lookback)?,
            muscle_group,
            &interval,
        ))
    }

    pub fn overtraining_signals(&self) -> Result<OvertrainingReport, ReadError> {
        let lookback = Lookback::Days(self.policy.overtraining.lookback_days);
        let interval = lookback.interval(self.clock().today);
        Ok(overtraining_signals(
            &self.logs(lookback)?,
            &interval,
            &self.policy.overtraining,
        ))
    }

    pub fn progression_velocity(
        &self,
        exercise_name: &str,
        lookback: Lookback,
    ) -> Result<ProgressionSummary, ReadError> {
        let interval = lookback.interval(self.clock().today);
        Ok(progression_velocity(
            &self.logs(lookback)?,
            exercise_name,
            &interval,
            &self.policy.progression,
        ))
    }

    pub fn exercise_info(&self, name: &str) -> Result<ExerciseInfo, ReadError> {
        Ok(self
            .repository
            .exercise_info(name, &self.logs(Lookback::All)?))
    }

    pub fn adaptive_template(&self, workout_type: WorkoutType) -> Template {
        self.with_snapshot(workout_type, |snapshot| {
            snapshot.adaptive_template(workout_type)
        })
    }

    pub fn express_template(&self, workout_type: WorkoutType) -> Template {
        self.with_snapshot(workout_type, |snapshot| {
            snapshot.express_template(workout_type, None)
        })
    }

    pub fn workout_template(&self, workout_type: WorkoutType, prefer_adaptive: bool) -> Template {
        self.with_snapshot(workout_type, |snapshot| {
            snapshot.workout_template(workout_type, prefer_adaptive)
        })
    }

    /// Starts a session following the preferred template of a workout type.
    pub fn start_session(&self, workout_type: WorkoutType, prefer_adaptive: bool) -> SessionState {
        let template = self.workout_template(workout_type, prefer_adaptive);
        let session = SessionState::new(workout_type, template, self.clock().now);
        info!(
            "started {workout_type} session {} with {} planned exercises",
            *session.id,
            session.template().exercises.len()
        );
        session
    }

    pub fn suggest_next(
        &self,
        session: &SessionState,
        preference: SourcePreference,
    ) -> Result<Suggestion, ReadError> {
        let (logs, templates) = self.read_snapshot()?;
        Ok(self
            .snapshot(&logs, &templates)
            .suggest_next(session, preference))
    }

    /// Compares a performed exercise with the next planned exercise of a session.
    pub fn check_deviation(&self, session: &SessionState, actual: &str) -> Deviation {
        detect_deviation(
            actual,
            session.next_planned().map(|(_, e)| e.name.as_str()),
            session.active_type(),
            &self.policy.deviation,
        )
    }

    /// Records a performed exercise and reports how it relates to the plan.
    ///
    /// Every recorded exercise consumes the next planned exercise, a major deviation included.
    pub fn record_exercise(&self, session: &mut SessionState, exercise: Exercise) -> Deviation {
        let deviation = self.check_deviation(session, exercise.name.as_str());
        let plan_index = session.next_planned().map(|(index, _)| index);
        session.record_exercise(exercise, plan_index, self.clock().now);
        deviation
    }

    /// Replaces the remaining plan of a session by a plan for `new_type`.
    pub fn adapt_session(
        &self,
        session: &mut SessionState,
        new_type: WorkoutType,
    ) -> Result<Adaptation, ReadError> {
        let (logs, templates) = self.read_snapshot()?;
        let adaptation = self.snapshot(&logs, &templates).adapt_plan(
            session.completed(),
            new_type,
            session.equipment_unavailable(),
        );
        session.apply_adaptation(adaptation.clone());
        Ok(adaptation)
    }

    pub fn weekly_status(
        &self,
        state: &mut WeeklySplitState,
    ) -> Result<WeeklySplitStatus, ReadError> {
        let clock = self.clock();
        let logs = self.logs(Lookback::Days(7))?;
        Ok(weekly_status(state, &logs, &clock))
    }

    pub fn next_workout(
        &self,
        state: &mut WeeklySplitState,
    ) -> Result<WorkoutRecommendation, ReadError> {
        let clock = self.clock();
        let logs = self.logs(Lookback::Days(7))?;
        Ok(next_workout(state, &logs, &clock, &self.policy.catch_up))
    }

    /// The most recent workout of a type over the whole history.
    pub fn last_workout(
        &self,
        workout_type: WorkoutType,
    ) -> Result<Option<LastWorkout>, ReadError> {
        Ok(last_workout(
            &self.logs(Lookback::All)?,
            workout_type,
            self.clock().today,
        ))
    }

    pub fn muscle_balance(&self) -> Result<BalanceReport, ReadError> {
        let days = self.policy.catch_up.balance_days;
        Ok(muscle_balance(
            &self.logs(Lookback::Days(days))?,
            &self.clock(),
            days,
        ))
    }

    fn read_snapshot(&self) -> Result<(Vec<WorkoutLog>, Vec<Template>), ReadError> {
        Ok((self.logs(Lookback::All)?, self.templates()?))
    }

    fn snapshot<'a>(&'a self, logs: &'a [WorkoutLog], templates: &'a [Template]) -> Snapshot<'a, R> {
        Snapshot::new(logs, templates, &self.repository, &self.policy, self.clock())
    }

    fn with_snapshot(
        &self,
        workout_type: WorkoutType,
        generate: impl FnOnce(&Snapshot<R>) -> Template,
    ) -> Template {
        match self.read_snapshot() {
            Ok((logs, templates)) => generate(&self.snapshot(&logs, &templates)),
            Err(err) => Template::error(workout_type, TemplateError::History(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        CatalogMatch, Equipment, Interval, Risk, Severity, StorageError, SuggestionOutcome,
        TemplateMode, WeeklySplitConfig, lookup,
        testing::{clock, date, exercise, log, templates},
    };

    struct FakeRepository {
        logs: Vec<WorkoutLog>,
        templates: Vec<Template>,
        available: bool,
    }

    impl FakeRepository {
        fn new(logs: Vec<WorkoutLog>) -> Self {
            Self {
                logs,
                templates: templates(),
                available: true,
            }
        }

        fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::new(vec![])
            }
        }
    }

    impl HistoryRepository for FakeRepository {
        fn read_logs(&self, interval: &Interval) -> Result<Vec<WorkoutLog>, ReadError> {
            if !self.available {
                return Err(StorageError::NoDataSource.into());
            }
            Ok(self
                .logs
                .iter()
                .filter(|log| interval.contains(log.date))
                .cloned()
                .collect())
        }
    }

    impl TemplateRepository for FakeRepository {
        fn read_templates(&self) -> Result<Vec<Template>, ReadError> {
            if !self.available {
                return Err(StorageError::NoDataSource.into());
            }
            Ok(self.templates.clone())
        }
    }

    impl ExerciseCatalog for FakeRepository {
        fn lookup(&self, text: &str) -> Option<CatalogMatch<'_>> {
            lookup(text)
        }
    }

    fn legs_history() -> Vec<WorkoutLog> {
        ["2024-06-03", "2024-06-10", "2024-06-17", "2024-06-24"]
            .iter()
            .zip([175.0, 180.0, 185.0, 190.0])
            .map(|(day, squat)| {
                log(
                    day,
                    WorkoutType::Legs,
                    &[
                        ("Squat", &[(5, Some(squat)); 4]),
                        ("Leg Press", &[(10, Some(270.0)); 3]),
                    ],
                )
            })
            .collect()
    }

    #[test]
    fn test_analyses() {
        let coach = Coach::new(FakeRepository::new(legs_history())).at(clock());

        let patterns = coach
            .exercise_patterns(WorkoutType::Legs, Lookback::Days(90))
            .unwrap();
        let progression = coach
            .progression_velocity("Squat", Lookback::All)
            .unwrap();
        let history = coach
            .exercise_history("press", Lookback::All, NameMatch::Contains)
            .unwrap();
        let overtraining = coach.overtraining_signals().unwrap();

        assert_eq!(patterns.total_workouts, 4);
        assert_eq!(progression.current_weight().map(f32::from), Some(190.0));
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].date, date("2024-06-03"));
        assert_eq!(overtraining.risk, Risk::Low);
    }

    #[test]
    fn test_analyses_without_data_source() {
        let coach = Coach::new(FakeRepository::unavailable()).at(clock());

        assert!(matches!(
            coach.volume_tolerance(WorkoutType::Legs, Lookback::All),
            Err(ReadError::Storage(StorageError::NoDataSource))
        ));
        assert!(coach.muscle_balance().is_err());
    }

    #[test]
    fn test_template_without_data_source() {
        let coach = Coach::new(FakeRepository::unavailable()).at(clock());

        let template = coach.workout_template(WorkoutType::Push, true);

        assert_eq!(
            template.mode,
            TemplateMode::Error(TemplateError::History("no data source".to_string()))
        );
    }

    #[test]
    fn test_record_exercise_major_deviation_consumes_plan() {
        let coach = Coach::new(FakeRepository::new(legs_history())).at(clock());
        let mut session = coach.start_session(WorkoutType::Legs, false);

        let deviation = coach.record_exercise(
            &mut session,
            exercise("Barbell Bench Press", &[(8, Some(135.0)); 3]),
        );

        assert_eq!(deviation.severity, Severity::MajorDeviation);
        assert_eq!(session.cursor(), 1);
        assert_eq!(
            session.next_planned().map(|(i, e)| (i, e.name.as_str())),
            Some((1, "Romanian Deadlift"))
        );
    }

    #[test]
    fn test_session_flow() {
        let coach = Coach::new(FakeRepository::new(legs_history())).at(clock());
        let mut session = coach.start_session(WorkoutType::Legs, false);
        assert_eq!(session.template().id, "legs_a");

        let suggestion = coach
            .suggest_next(&session, SourcePreference::Auto)
            .unwrap();
        let suggested = suggestion.exercise().unwrap();
        assert_eq!(suggested.name.as_str(), "Squat");
        assert_eq!(suggested.suggested_weight.map(f32::from), Some(195.0));

        let deviation = coach.record_exercise(
            &mut session,
            exercise("Squat", &[(5, Some(195.0)); 4]),
        );
        assert_eq!(deviation.severity, Severity::None);
        assert_eq!(session.cursor(), 1);

        let deviation = coach.record_exercise(
            &mut session,
            exercise("Barbell Bench Press", &[(8, Some(135.0)); 3]),
        );
        assert_eq!(deviation.severity, Severity::MajorDeviation);
        assert_eq!(deviation.new_workout_type, Some(WorkoutType::Push));
        assert_eq!(session.cursor(), 2);

        session.exclude_equipment("barbell", clock().now);
        let adaptation = coach
            .adapt_session(&mut session, WorkoutType::Push)
            .unwrap();
        assert_eq!(
            adaptation.reason,
            "Plan adapted to Push after 2 exercises (Squat, Barbell Bench Press)"
        );
        assert_eq!(
            session
                .remaining_plan()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Incline Dumbbell Press", "Lateral Raise", "Tricep Pushdown", "Dips"]
        );
        assert_eq!(
            session.equipment_unavailable(),
            &BTreeSet::from([Equipment::Barbell])
        );

        let suggestion = coach
            .suggest_next(&session, SourcePreference::Auto)
            .unwrap();
        assert!(matches!(
            suggestion.outcome,
            SuggestionOutcome::Exercise(ref e) if e.name.as_str() == "Incline Dumbbell Press"
        ));

        let log = session.finish(clock().today).unwrap();
        assert_eq!(log.workout_type, WorkoutType::Push);
        assert_eq!(log.exercises.len(), 2);
    }

    #[test]
    fn test_next_workout() {
        let coach = Coach::new(FakeRepository::new(legs_history())).at(clock());
        let mut state = WeeklySplitState::new(WeeklySplitConfig::default(), date("2024-06-24"));

        let status = coach.weekly_status(&mut state).unwrap();
        let recommendation = coach.next_workout(&mut state).unwrap();

        assert_eq!(status.days_left, 1);
        assert_eq!(status.total_remaining(), 5);
        assert!(recommendation.is_catch_up());
    }

    #[test]
    fn test_last_workout() {
        let coach = Coach::new(FakeRepository::new(legs_history())).at(clock());

        let last = coach.last_workout(WorkoutType::Legs).unwrap().unwrap();

        assert_eq!(last.log.date, date("2024-06-24"));
        assert_eq!(last.days_since, 6);
        assert_eq!(
            last.log
                .exercises
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Squat", "Leg Press"]
        );
        assert_eq!(coach.last_workout(WorkoutType::Upper).unwrap(), None);
    }
}
