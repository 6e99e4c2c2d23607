//! Weekly split tracking and catch-up scheduling.

use std::{collections::BTreeMap, fmt};

use chrono::{Duration, NaiveDate};
use log::{debug, info};

use crate::{CatchUpPolicy, Clock, Supplementary, WorkoutLog, WorkoutType, week_start};

const PUSH_PULL_RATIO: f32 = 1.5;
const MIN_LEGS_SHARE: f32 = 0.3;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklySplitConfig {
    /// Workouts per week for each tracked workout type.
    pub targets: BTreeMap<WorkoutType, u32>,
    pub rotation: Vec<WorkoutType>,
    pub supplementary: BTreeMap<Supplementary, SupplementaryTarget>,
}

impl WeeklySplitConfig {
    #[must_use]
    pub fn tracks(&self, workout_type: WorkoutType) -> bool {
        self.targets.contains_key(&workout_type)
    }

    /// The rotation entry following `workout_type`, if it is part of the rotation.
    #[must_use]
    pub fn after(&self, workout_type: WorkoutType) -> Option<WorkoutType> {
        let index = self.rotation.iter().position(|t| *t == workout_type)?;
        self.rotation.get((index + 1) % self.rotation.len()).copied()
    }

    /// The first workout type from `start` on in rotation order that has workouts remaining.
    ///
    /// Returns `start` if every workout type of the rotation is done.
    fn next_with_remaining(
        &self,
        start: WorkoutType,
        remaining: &BTreeMap<WorkoutType, u32>,
    ) -> WorkoutType {
        let has_remaining =
            |workout_type: &WorkoutType| remaining.get(workout_type).is_some_and(|n| *n > 0);
        if has_remaining(&start) {
            return start;
        }
        let Some(position) = self.rotation.iter().position(|t| *t == start) else {
            return start;
        };
        self.rotation
            .iter()
            .cycle()
            .skip(position + 1)
            .take(self.rotation.len() - 1)
            .find(|t| has_remaining(*t))
            .copied()
            .unwrap_or(start)
    }

    fn first_in_rotation(&self) -> WorkoutType {
        self.rotation.first().copied().unwrap_or(WorkoutType::Push)
    }
}

impl Default for WeeklySplitConfig {
    fn default() -> Self {
        Self {
            targets: BTreeMap::from([
                (WorkoutType::Push, 1),
                (WorkoutType::Pull, 1),
                (WorkoutType::Legs, 2),
                (WorkoutType::Upper, 1),
                (WorkoutType::Lower, 1),
            ]),
            rotation: vec![
                WorkoutType::Push,
                WorkoutType::Pull,
                WorkoutType::Legs,
                WorkoutType::Upper,
                WorkoutType::Lower,
                WorkoutType::Legs,
            ],
            supplementary: BTreeMap::from([(Supplementary::Abs, SupplementaryTarget::default())]),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SupplementaryTarget {
    pub weekly_target: u32,
    /// Sessions must be more than this many days apart.
    pub min_spacing_days: u32,
}

impl Default for SupplementaryTarget {
    fn default() -> Self {
        Self {
            weekly_target: 2,
            min_spacing_days: 1,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeeklyProgress {
    pub week_start: NaiveDate,
    pub completed: BTreeMap<WorkoutType, u32>,
    pub next_in_rotation: WorkoutType,
    /// Days of the week on which supplementary work was done.
    #[serde(default)]
    pub supplementary: BTreeMap<Supplementary, Vec<NaiveDate>>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeeklySplitState {
    pub config: WeeklySplitConfig,
    pub progress: WeeklyProgress,
}

impl WeeklySplitState {
    #[must_use]
    pub fn new(config: WeeklySplitConfig, today: NaiveDate) -> Self {
        let progress = WeeklyProgress {
            week_start: week_start(today),
            completed: BTreeMap::new(),
            next_in_rotation: config.first_in_rotation(),
            supplementary: BTreeMap::new(),
        };
        Self { config, progress }
    }

    fn reset_if_outdated(&mut self, current_week_start: NaiveDate) {
        if self.progress.week_start < current_week_start {
            debug!("starting new week at {current_week_start}");
            self.progress = WeeklyProgress {
                week_start: current_week_start,
                completed: BTreeMap::new(),
                next_in_rotation: self.config.first_in_rotation(),
                supplementary: BTreeMap::new(),
            };
        }
    }

    /// Moves the rotation pointer past a logged workout of the current week and notes its
    /// supplementary work.
    pub fn record_workout(&mut self, log: &WorkoutLog, clock: &Clock) {
        let current_week_start = clock.week_start();
        self.reset_if_outdated(current_week_start);
        if log.date < current_week_start || !self.config.tracks(log.workout_type) {
            return;
        }
        *self.progress.completed.entry(log.workout_type).or_default() += 1;
        if let Some(next) = self.config.after(log.workout_type) {
            self.progress.next_in_rotation = next;
        }
        for kind in &log.supplementary {
            let dates = self.progress.supplementary.entry(*kind).or_default();
            if !dates.contains(&log.date) {
                dates.push(log.date);
            }
        }
    }
}

/// Whether supplementary work may be done on a day given the earlier sessions of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingCheck {
    pub allowed: bool,
    pub reason: String,
}

#[must_use]
pub fn supplementary_spacing(
    dates: &[NaiveDate],
    min_spacing_days: u32,
    day: NaiveDate,
) -> SpacingCheck {
    let Some(last) = dates.iter().max() else {
        return SpacingCheck {
            allowed: true,
            reason: "No previous sessions this week".to_string(),
        };
    };
    let days_since = (day - *last).num_days();
    if days_since <= i64::from(min_spacing_days) {
        SpacingCheck {
            allowed: false,
            reason: format!(
                "Too soon (last session was {days_since} day(s) ago, minimum spacing: {} days)",
                min_spacing_days + 1
            ),
        }
    } else {
        SpacingCheck {
            allowed: true,
            reason: format!("Ready ({days_since} days since last session)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementaryStatus {
    pub kind: Supplementary,
    pub dates: Vec<NaiveDate>,
    pub target: u32,
    pub days_since_last: Option<i64>,
    pub spacing: SpacingCheck,
}

impl SupplementaryStatus {
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.dates.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn on_track(&self) -> bool {
        self.count() >= self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySplitStatus {
    pub week_start: NaiveDate,
    pub completed: BTreeMap<WorkoutType, u32>,
    pub targets: BTreeMap<WorkoutType, u32>,
    pub remaining: BTreeMap<WorkoutType, u32>,
    pub next_suggested: WorkoutType,
    /// Days left in the week including today.
    pub days_left: u32,
    pub supplementary: BTreeMap<Supplementary, SupplementaryStatus>,
}

impl WeeklySplitStatus {
    #[must_use]
    pub fn total_remaining(&self) -> u32 {
        self.remaining.values().sum()
    }

    #[must_use]
    pub fn remaining_of(&self, workout_type: WorkoutType) -> u32 {
        self.remaining.get(&workout_type).copied().unwrap_or_default()
    }

    /// More workouts remain than days are left in the week.
    #[must_use]
    pub fn needs_catch_up(&self) -> bool {
        self.days_left > 0 && self.total_remaining() > self.days_left
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.targets
            .iter()
            .map(|(workout_type, target)| {
                let done = self.completed.get(workout_type).copied().unwrap_or_default();
                if done >= *target {
                    format!("{workout_type}: {done}/{target} done")
                } else {
                    format!("{workout_type}: {done}/{target}")
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Tallies the workouts of the current week against the weekly targets.
///
/// Progress stored for an earlier week is reset first.
pub fn weekly_status(
    state: &mut WeeklySplitState,
    logs: &[WorkoutLog],
    clock: &Clock,
) -> WeeklySplitStatus {
    let current_week_start = clock.week_start();
    state.reset_if_outdated(current_week_start);

    let mut completed = BTreeMap::new();
    let mut supplementary_dates = BTreeMap::<Supplementary, Vec<NaiveDate>>::new();
    for log in logs
        .iter()
        .filter(|log| current_week_start <= log.date && log.date <= clock.today)
        .filter(|log| state.config.tracks(log.workout_type))
    {
        *completed.entry(log.workout_type).or_default() += 1;
        for kind in &log.supplementary {
            let dates = supplementary_dates.entry(*kind).or_default();
            if !dates.contains(&log.date) {
                dates.push(log.date);
            }
        }
    }
    for dates in supplementary_dates.values_mut() {
        dates.sort_unstable();
    }
    state.progress.completed.clone_from(&completed);
    state.progress.supplementary.clone_from(&supplementary_dates);

    let supplementary = state
        .config
        .supplementary
        .iter()
        .map(|(kind, target)| {
            let dates = supplementary_dates.remove(kind).unwrap_or_default();
            let days_since_last = dates.last().map(|last| (clock.today - *last).num_days());
            let spacing = supplementary_spacing(&dates, target.min_spacing_days, clock.today);
            (
                *kind,
                SupplementaryStatus {
                    kind: *kind,
                    dates,
                    target: target.weekly_target,
                    days_since_last,
                    spacing,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    let remaining = state
        .config
        .targets
        .iter()
        .map(|(workout_type, target)| {
            let done = completed.get(workout_type).copied().unwrap_or_default();
            (*workout_type, target.saturating_sub(done))
        })
        .collect::<BTreeMap<_, _>>();

    let next_suggested = state
        .config
        .next_with_remaining(state.progress.next_in_rotation, &remaining);

    WeeklySplitStatus {
        week_start: current_week_start,
        completed,
        targets: state.config.targets.clone(),
        remaining,
        next_suggested,
        days_left: clock.days_left_in_week(),
        supplementary,
    }
}

/// Workouts scheduled for one day of a catch-up plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    /// Days from today.
    pub day: u32,
    pub types: Vec<WorkoutType>,
    pub duration_minutes: u32,
    pub rest_between_minutes: u32,
}

impl Combo {
    #[must_use]
    pub fn day_label(&self) -> String {
        day_label(self.day)
    }
}

#[must_use]
pub fn day_label(offset: u32) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => format!("Day {}", offset + 1),
    }
}

fn partners(workout_type: WorkoutType) -> &'static [WorkoutType] {
    match workout_type {
        WorkoutType::Legs => &[WorkoutType::Upper],
        WorkoutType::Upper => &[WorkoutType::Legs],
        WorkoutType::Push | WorkoutType::Pull => &[WorkoutType::Lower, WorkoutType::Legs],
        WorkoutType::Lower => &[WorkoutType::Push, WorkoutType::Pull],
        WorkoutType::Other => &[],
    }
}

/// Packs outstanding workouts into at most one combo per remaining day.
///
/// Each day pairs the first outstanding workout with a complementary one if possible. Workouts
/// that do not fit into the remaining days are added to the last day.
#[must_use]
pub fn pack_combos(needed: &[WorkoutType], days_left: u32, policy: &CatchUpPolicy) -> Vec<Combo> {
    let mut remaining = needed.to_vec();
    let mut combos = vec![];
    let mut day = 0;

    while !remaining.is_empty() && day < days_left {
        let first = remaining.remove(0);
        let partner = partners(first)
            .iter()
            .find_map(|partner| remaining.iter().position(|t| t == partner));
        combos.push(match partner {
            Some(index) => Combo {
                day,
                types: vec![first, remaining.remove(index)],
                duration_minutes: policy.paired_minutes,
                rest_between_minutes: policy.rest_between_minutes,
            },
            None => Combo {
                day,
                types: vec![first],
                duration_minutes: policy.solo_minutes,
                rest_between_minutes: 0,
            },
        });
        day += 1;
    }

    if !remaining.is_empty() {
        #[allow(clippy::cast_possible_truncation)]
        let overflow_minutes = remaining.len() as u32 * policy.solo_minutes;
        match combos.last_mut() {
            Some(last) => {
                last.types.append(&mut remaining);
                last.duration_minutes += overflow_minutes;
            }
            None => combos.push(Combo {
                day: 0,
                rest_between_minutes: if remaining.len() > 1 {
                    policy.rest_between_minutes
                } else {
                    0
                },
                types: remaining,
                duration_minutes: overflow_minutes,
            }),
        }
    }

    combos
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutRecommendation {
    Normal {
        workout_type: WorkoutType,
        reasons: Vec<String>,
        status: WeeklySplitStatus,
    },
    CatchUp {
        workout_type: WorkoutType,
        reason: String,
        combos: Vec<Combo>,
        needed: Vec<WorkoutType>,
        status: WeeklySplitStatus,
    },
}

impl WorkoutRecommendation {
    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutRecommendation::Normal { workout_type, .. }
            | WorkoutRecommendation::CatchUp { workout_type, .. } => *workout_type,
        }
    }

    #[must_use]
    pub fn status(&self) -> &WeeklySplitStatus {
        match self {
            WorkoutRecommendation::Normal { status, .. }
            | WorkoutRecommendation::CatchUp { status, .. } => status,
        }
    }

    #[must_use]
    pub fn is_catch_up(&self) -> bool {
        matches!(self, WorkoutRecommendation::CatchUp { .. })
    }
}

/// Recommends the next workout type from the rotation and the weekly progress.
///
/// If more workouts remain than days are left, the outstanding workouts are packed into combos
/// and the first workout of today's combo is recommended.
pub fn next_workout(
    state: &mut WeeklySplitState,
    logs: &[WorkoutLog],
    clock: &Clock,
    policy: &CatchUpPolicy,
) -> WorkoutRecommendation {
    let status = weekly_status(state, logs, clock);
    let suggested = status.next_suggested;

    if status.needs_catch_up() {
        let mut needed = vec![];
        for (workout_type, count) in &status.remaining {
            for _ in 0..*count {
                needed.push(*workout_type);
            }
        }
        needed.sort_by_key(|t| *t != suggested);
        let combos = pack_combos(&needed, status.days_left, policy);
        let workout_type = combos
            .first()
            .and_then(|combo| combo.types.first())
            .copied()
            .unwrap_or(suggested);
        let reason = format!(
            "Catch-up mode: {} workouts needed in {} day(s)",
            status.total_remaining(),
            status.days_left
        );
        info!("{reason}");
        return WorkoutRecommendation::CatchUp {
            workout_type,
            reason,
            combos,
            needed,
            status,
        };
    }

    let mut reasons = vec![];
    let remaining = status.remaining_of(suggested);
    if remaining > 0 {
        reasons.push(format!("{suggested} is next in rotation"));
        if remaining > 1 {
            reasons.push(format!(
                "You have {remaining} more {suggested} workouts to hit your target"
            ));
        }
    }
    let urgent = status
        .remaining
        .iter()
        .filter(|(_, count)| **count > 0 && **count >= status.days_left)
        .map(|(workout_type, _)| *workout_type)
        .collect::<Vec<_>>();
    if !urgent.is_empty() && !urgent.contains(&suggested) {
        reasons.push(format!(
            "Consider prioritizing: {}",
            urgent
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    if reasons.is_empty() {
        reasons.push("Next in standard rotation".to_string());
    }

    WorkoutRecommendation::Normal {
        workout_type: suggested,
        reasons,
        status,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceIssue {
    PushDominant,
    PullDominant,
    LegsUndertrained,
}

impl fmt::Display for BalanceIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BalanceIssue::PushDominant => write!(f, "More pushing than pulling, add more back work"),
            BalanceIssue::PullDominant => {
                write!(f, "More pulling than pushing, add more chest and shoulder work")
            }
            BalanceIssue::LegsUndertrained => {
                write!(f, "Legs are undertrained relative to upper body")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub period_days: u32,
    pub total_workouts: usize,
    pub counts: BTreeMap<WorkoutType, usize>,
    /// Push workouts with upper body workouts counted as half push.
    pub push: f32,
    /// Pull workouts with upper body workouts counted as half pull.
    pub pull: f32,
    pub legs: f32,
    pub issues: Vec<BalanceIssue>,
}

impl BalanceReport {
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn recommendation(&self) -> String {
        match (self.total_workouts, self.issues.first()) {
            (0, _) => "Any workout is a good workout!".to_string(),
            (_, Some(issue)) => issue.to_string(),
            (_, None) => "Keep up the good balance!".to_string(),
        }
    }
}

/// Compares pushing, pulling and leg work over the recent days.
#[must_use]
pub fn muscle_balance(logs: &[WorkoutLog], clock: &Clock, period_days: u32) -> BalanceReport {
    let first = clock.today - Duration::days(i64::from(period_days));
    let mut counts = BTreeMap::<WorkoutType, usize>::new();
    for log in logs
        .iter()
        .filter(|log| first <= log.date && log.date <= clock.today)
    {
        *counts.entry(log.workout_type).or_default() += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = |workout_type: WorkoutType| {
        counts.get(&workout_type).copied().unwrap_or_default() as f32
    };
    let push = count(WorkoutType::Push) + count(WorkoutType::Upper) * 0.5;
    let pull = count(WorkoutType::Pull) + count(WorkoutType::Upper) * 0.5;
    let legs = count(WorkoutType::Legs) + count(WorkoutType::Lower);
    let total_workouts = counts.values().sum();

    let mut issues = vec![];
    if total_workouts > 0 {
        if push > pull * PUSH_PULL_RATIO {
            issues.push(BalanceIssue::PushDominant);
        } else if pull > push * PUSH_PULL_RATIO {
            issues.push(BalanceIssue::PullDominant);
        }
        if legs < (push + pull) * MIN_LEGS_SHARE {
            issues.push(BalanceIssue::LegsUndertrained);
        }
    }

    BalanceReport {
        period_days,
        total_workouts,
        counts,
        push,
        pull,
        legs,
        issues,
    }
}
