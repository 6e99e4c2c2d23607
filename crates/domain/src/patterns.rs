use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use chrono::Duration;

use crate::{
    Interval, MuscleGroup, Name, OvertrainingPolicy, PatternPolicy, Template, VolumePolicy,
    WorkoutLog, WorkoutType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adherence {
    Common,
    Occasional,
    Rare,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePattern {
    pub name: Name,
    /// Share of matching workouts that contained the exercise.
    pub frequency: f32,
    pub avg_sets: f32,
    pub times_done: u32,
    pub adherence: Adherence,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternSummary {
    pub workout_type: WorkoutType,
    pub total_workouts: usize,
    pub exercises: Vec<ExercisePattern>,
}

impl PatternSummary {
    pub fn common(&self) -> impl Iterator<Item = &ExercisePattern> {
        self.exercises
            .iter()
            .filter(|e| e.adherence == Adherence::Common)
    }

    pub fn rarely_done(&self) -> impl Iterator<Item = &ExercisePattern> {
        self.exercises
            .iter()
            .filter(|e| e.adherence == Adherence::Rare)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExercisePattern> {
        self.exercises.iter().find(|e| e.name.is_same(name))
    }

    #[must_use]
    pub fn frequency_of(&self, name: &str) -> f32 {
        self.get(name).map_or(0.0, |e| e.frequency)
    }

    /// Common exercises that the base template does not contain.
    #[must_use]
    pub fn frequently_added(&self, base: &Template) -> Vec<&ExercisePattern> {
        self.common().filter(|e| !base.contains(e.name.as_str())).collect()
    }
}

#[must_use]
pub fn exercise_patterns(
    logs: &[WorkoutLog],
    workout_type: WorkoutType,
    interval: &Interval,
    policy: &PatternPolicy,
) -> PatternSummary {
    let workouts = matching(logs, workout_type, interval).collect::<Vec<_>>();

    // normalized name -> (first seen name, occurrences, total sets)
    let mut stats = BTreeMap::<String, (Name, u32, u32)>::new();
    for log in &workouts {
        let mut seen = BTreeSet::new();
        for exercise in &log.exercises {
            let key = exercise.name.normalized();
            let entry = stats
                .entry(key.clone())
                .or_insert_with(|| (exercise.name.clone(), 0, 0));
            if seen.insert(key) {
                entry.1 += 1;
            }
            entry.2 += exercise.num_sets();
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = workouts.len() as f32;
    let mut exercises = stats
        .into_values()
        .map(|(name, times_done, sets)| {
            #[allow(clippy::cast_precision_loss)]
            let frequency = (times_done as f32 / total).min(1.0);
            ExercisePattern {
                name,
                frequency,
                #[allow(clippy::cast_precision_loss)]
                avg_sets: sets as f32 / times_done as f32,
                times_done,
                adherence: policy.adherence(frequency),
            }
        })
        .collect::<Vec<_>>();
    exercises.sort_by(|a, b| {
        b.frequency
            .total_cmp(&a.frequency)
            .then_with(|| a.name.cmp(&b.name))
    });

    PatternSummary {
        workout_type,
        total_workouts: workouts.len(),
        exercises,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTrend {
    Increasing,
    Stable,
    Decreasing,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSummary {
    pub workout_type: WorkoutType,
    pub total_workouts: usize,
    pub avg_total_sets: f32,
    pub avg_sets_per_exercise: f32,
    pub avg_exercises_per_workout: f32,
    pub older_avg_sets: Option<f32>,
    pub recent_avg_sets: Option<f32>,
    pub trend: VolumeTrend,
}

impl VolumeSummary {
    /// Relative change of the recent half compared to the older half in percent.
    #[must_use]
    pub fn change_pct(&self) -> Option<f32> {
        match (self.older_avg_sets, self.recent_avg_sets) {
            (Some(older), Some(recent)) if older > 0.0 => Some((recent - older) / older * 100.0),
            _ => None,
        }
    }
}

#[must_use]
pub fn volume_tolerance(
    logs: &[WorkoutLog],
    workout_type: WorkoutType,
    interval: &Interval,
    policy: &VolumePolicy,
) -> VolumeSummary {
    let mut workouts = matching(logs, workout_type, interval).collect::<Vec<_>>();
    workouts.sort_by_key(|log| log.date);

    let total_sets = workouts.iter().map(|log| log.num_sets()).collect::<Vec<_>>();
    let non_empty = workouts
        .iter()
        .flat_map(|log| &log.exercises)
        .filter(|e| !e.sets.is_empty())
        .collect::<Vec<_>>();
    let num_exercises = workouts.iter().map(|log| log.exercises.len()).sum::<usize>();

    let (older_avg_sets, recent_avg_sets, trend) = if workouts.len() < 2 {
        (None, None, VolumeTrend::Unknown)
    } else {
        let (older, recent) = total_sets.split_at(total_sets.len() / 2);
        let older = mean(older);
        let recent = mean(recent);
        (Some(older), Some(recent), policy.trend(older, recent))
    };

    VolumeSummary {
        workout_type,
        total_workouts: workouts.len(),
        avg_total_sets: mean(&total_sets),
        #[allow(clippy::cast_precision_loss)]
        avg_sets_per_exercise: if non_empty.is_empty() {
            0.0
        } else {
            non_empty.iter().map(|e| e.num_sets()).sum::<u32>() as f32 / non_empty.len() as f32
        },
        #[allow(clippy::cast_precision_loss)]
        avg_exercises_per_workout: if workouts.is_empty() {
            0.0
        } else {
            num_exercises as f32 / workouts.len() as f32
        },
        older_avg_sets,
        recent_avg_sets,
        trend,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestBucket {
    /// Days between two consecutive workouts.
    pub rest_days: i64,
    pub samples: usize,
    pub avg_reps: f32,
    pub avg_weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecoverySummary {
    pub muscle_group: Option<MuscleGroup>,
    pub total_workouts: usize,
    pub avg_weekly_frequency: f32,
    pub buckets: Vec<RestBucket>,
    pub optimal_rest_days: Option<i64>,
}

impl RecoverySummary {
    #[must_use]
    pub fn empty(muscle_group: Option<MuscleGroup>) -> Self {
        Self {
            muscle_group,
            total_workouts: 0,
            avg_weekly_frequency: 0.0,
            buckets: vec![],
            optimal_rest_days: None,
        }
    }
}

#[must_use]
pub fn recovery_patterns(
    logs: &[WorkoutLog],
    muscle_group: MuscleGroup,
    interval: &Interval,
) -> RecoverySummary {
    let types = muscle_group.workout_types();
    let mut workouts = logs
        .iter()
        .filter(|log| types.contains(&log.workout_type) && interval.contains(log.date))
        .collect::<Vec<_>>();
    workouts.sort_by_key(|log| log.date);

    if workouts.len() < 2 {
        return RecoverySummary {
            total_workouts: workouts.len(),
            ..RecoverySummary::empty(Some(muscle_group))
        };
    }

    let span_days = interval
        .days()
        .unwrap_or_else(|| (interval.last - workouts[0].date).num_days());
    #[allow(clippy::cast_precision_loss)]
    let weeks = (span_days as f32 / 7.0).max(1.0);

    // rest days -> (reps averages, weight averages)
    let mut samples = BTreeMap::<i64, (Vec<f32>, Vec<f32>)>::new();
    for pair in workouts.windows(2) {
        if let Some((avg_reps, avg_weight)) = pair[1].weighted_set_averages() {
            let entry = samples
                .entry((pair[1].date - pair[0].date).num_days())
                .or_default();
            entry.0.push(avg_reps);
            entry.1.push(avg_weight);
        }
    }

    let buckets = samples
        .into_iter()
        .map(|(rest_days, (reps, weights))| RestBucket {
            rest_days,
            samples: reps.len(),
            avg_reps: mean(&reps),
            avg_weight: mean(&weights),
        })
        .collect::<Vec<_>>();

    let mut optimal: Option<&RestBucket> = None;
    for bucket in &buckets {
        if optimal.is_none_or(|o| bucket.avg_weight > o.avg_weight) {
            optimal = Some(bucket);
        }
    }

    RecoverySummary {
        muscle_group: Some(muscle_group),
        total_workouts: workouts.len(),
        #[allow(clippy::cast_precision_loss)]
        avg_weekly_frequency: workouts.len() as f32 / weeks,
        optimal_rest_days: optimal.map(|b| b.rest_days),
        buckets,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Risk {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Continue,
    Monitor,
    Deload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    HighFrequency { workouts: usize, days: u32 },
    ElevatedFrequency { workouts: usize, days: u32 },
    VolumeSpike { increase_pct: f32 },
    VolumeIncrease { increase_pct: f32 },
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Signal::HighFrequency { workouts, days } => {
                write!(f, "High frequency: {workouts} workouts in the last {days} days")
            }
            Signal::ElevatedFrequency { workouts, days } => {
                write!(f, "Elevated frequency: {workouts} workouts in the last {days} days")
            }
            Signal::VolumeSpike { increase_pct } => {
                write!(f, "Volume spike: total volume up {increase_pct:.0}%")
            }
            Signal::VolumeIncrease { increase_pct } => {
                write!(f, "Volume increase: total volume up {increase_pct:.0}%")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OvertrainingReport {
    pub risk: Risk,
    pub recommendation: Recommendation,
    pub score: u32,
    pub signals: Vec<Signal>,
    pub total_workouts: usize,
    pub recent_workouts: usize,
    pub volume_change_pct: Option<f32>,
}

/// Looks for signs of overtraining in the workouts within `interval`.
///
/// The frequency window ends on the last day of the interval.
#[must_use]
pub fn overtraining_signals(
    logs: &[WorkoutLog],
    interval: &Interval,
    policy: &OvertrainingPolicy,
) -> OvertrainingReport {
    let mut workouts = logs
        .iter()
        .filter(|log| interval.contains(log.date))
        .collect::<Vec<_>>();
    workouts.sort_by_key(|log| log.date);

    let window_start = interval.last - Duration::days(i64::from(policy.frequency_window_days));
    let recent_workouts = workouts.iter().filter(|log| log.date > window_start).count();

    if workouts.len() < policy.min_workouts {
        return OvertrainingReport {
            risk: Risk::Low,
            recommendation: Recommendation::Continue,
            score: 0,
            signals: vec![],
            total_workouts: workouts.len(),
            recent_workouts,
            volume_change_pct: None,
        };
    }

    let mut score = 0;
    let mut signals = vec![];

    let frequency = u32::try_from(recent_workouts).unwrap_or(u32::MAX);
    if frequency > policy.high_frequency {
        score += 2;
        signals.push(Signal::HighFrequency {
            workouts: recent_workouts,
            days: policy.frequency_window_days,
        });
    } else if frequency > policy.moderate_frequency {
        score += 1;
        signals.push(Signal::ElevatedFrequency {
            workouts: recent_workouts,
            days: policy.frequency_window_days,
        });
    }

    let (older, recent) = workouts.split_at(workouts.len() / 2);
    let older_volume = older.iter().map(|log| log.volume_load()).sum::<f32>();
    let recent_volume = recent.iter().map(|log| log.volume_load()).sum::<f32>();
    let volume_change_pct =
        (older_volume > 0.0).then(|| (recent_volume - older_volume) / older_volume * 100.0);
    if let Some(increase_pct) = volume_change_pct {
        if increase_pct > policy.high_volume_increase_pct {
            score += 2;
            signals.push(Signal::VolumeSpike { increase_pct });
        } else if increase_pct > policy.moderate_volume_increase_pct {
            score += 1;
            signals.push(Signal::VolumeIncrease { increase_pct });
        }
    }

    let (risk, recommendation) = if score >= policy.high_risk_score {
        (Risk::High, Recommendation::Deload)
    } else if score >= policy.moderate_risk_score {
        (Risk::Moderate, Recommendation::Monitor)
    } else {
        (Risk::Low, Recommendation::Continue)
    };

    OvertrainingReport {
        risk,
        recommendation,
        score,
        signals,
        total_workouts: workouts.len(),
        recent_workouts,
        volume_change_pct,
    }
}

fn matching<'a>(
    logs: &'a [WorkoutLog],
    workout_type: WorkoutType,
    interval: &'a Interval,
) -> impl Iterator<Item = &'a WorkoutLog> {
    logs.iter()
        .filter(move |log| log.workout_type == workout_type && interval.contains(log.date))
}

fn mean<T: Copy + Into<f64>>(values: &[T]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = values.iter().map(|v| Into::<f64>::into(*v)).sum::<f64>();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let result = (sum / values.len() as f64) as f32;
    result
}
