#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod adapter;
mod catalog;
mod classify;
mod deviation;
mod equipment;
mod error;
mod generator;
mod name;
mod patterns;
mod planner;
mod policy;
mod progression;
mod repository;
mod service;
mod session;
mod set;
mod snapshot;
mod split;
mod template;
pub mod text;
mod time;
mod workout;

#[cfg(test)]
mod testing;

use std::slice::Iter;

pub use adapter::Adaptation;
pub use catalog::{
    BeginnerWeight, BuiltinCatalog, CatalogEntry, CatalogMatch, Category, ExerciseCatalog,
    ExerciseInfo, MIN_SIMILARITY, MatchKind, MuscleGroup, MuscleGroupError, WeightClass, entries,
    lookup,
};
pub use classify::{Scores, classify, infer_workout_type};
pub use deviation::{Deviation, Severity, detect_deviation, exercise_similarity};
pub use equipment::Equipment;
pub use error::{PolicyError, ReadError, StorageError};
pub use generator::{estimate_minutes, is_compound};
pub use name::{Name, NameError};
pub use patterns::{
    Adherence, ExercisePattern, OvertrainingReport, PatternSummary, Recommendation,
    RecoverySummary, RestBucket, Risk, Signal, VolumeSummary, VolumeTrend, exercise_patterns,
    overtraining_signals, recovery_patterns, volume_tolerance,
};
pub use planner::{
    SourcePreference, SuggestedExercise, Suggestion, SuggestionOutcome, SuggestionSource,
};
pub use policy::{
    CatchUpPolicy, DeviationPolicy, OvertrainingPolicy, PatternPolicy, PlannerPolicy, Policy,
    ProgressionPolicy, TemplatePolicy, VolumePolicy,
};
pub use progression::{
    ProgressionPoint, ProgressionSummary, SuggestedAction, Velocity, progression_velocity,
};
pub use repository::{
    ExerciseHistoryEntry, HistoryRepository, NameMatch, TemplateRepository, exercise_history,
};
pub use service::Coach;
pub use session::{AdjustmentKind, PlanAdjustment, SessionID, SessionState};
pub use set::{Reps, RepsError, Set, SetError, Weight, WeightError};
pub use snapshot::Snapshot;
pub use split::{
    BalanceIssue, BalanceReport, Combo, SpacingCheck, SupplementaryStatus, SupplementaryTarget,
    WeeklyProgress, WeeklySplitConfig, WeeklySplitState, WeeklySplitStatus,
    WorkoutRecommendation, day_label, muscle_balance, next_workout, pack_combos,
    supplementary_spacing, weekly_status,
};
pub use template::{
    PrescribedExercise, TargetReps, TargetRepsError, Template, TemplateError, TemplateMode,
    resolve_base_template,
};
pub use time::{Clock, Interval, Lookback, week_start};
pub use workout::{
    Exercise, LastWorkout, Supplementary, SupplementaryError, WorkoutLog, WorkoutLogID,
    WorkoutType, WorkoutTypeError, last_workout,
};

/// A closed set of values with display names.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
