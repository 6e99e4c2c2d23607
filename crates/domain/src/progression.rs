use chrono::NaiveDate;

use crate::{Interval, ProgressionPolicy, Weight, WorkoutLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Velocity {
    Fast,
    Moderate,
    Slow,
    Plateau,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestedAction {
    Increase,
    Maintain,
    Deload,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionPoint {
    pub date: NaiveDate,
    pub max_weight: Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionSummary {
    pub exercise: String,
    pub points: Vec<ProgressionPoint>,
    pub velocity: Velocity,
    /// Change of the max weight per week in pounds.
    pub avg_weekly_delta: f32,
    pub stalled: bool,
    pub weeks_at_current_weight: u32,
    pub suggested_action: SuggestedAction,
}

impl ProgressionSummary {
    #[must_use]
    pub fn current_weight(&self) -> Option<Weight> {
        self.points.last().map(|p| p.max_weight)
    }

    /// Weight for the next session following the suggested action.
    #[must_use]
    pub fn next_weight(&self, policy: &ProgressionPolicy) -> Option<Weight> {
        let current = self.current_weight()?.lbs();
        Some(Weight::rounded(match self.suggested_action {
            SuggestedAction::Increase => current + policy.min_increment.max(self.avg_weekly_delta),
            SuggestedAction::Deload => current * policy.deload_factor,
            SuggestedAction::Maintain => current,
        }))
    }
}

/// Tracks the heaviest weight of an exercise across workouts.
///
/// Only workouts containing the exercise name with a positive weight contribute a point. Names
/// are compared ignoring case and punctuation, like the grouping of exercise patterns.
#[must_use]
pub fn progression_velocity(
    logs: &[WorkoutLog],
    exercise_name: &str,
    interval: &Interval,
    policy: &ProgressionPolicy,
) -> ProgressionSummary {
    let mut points = logs
        .iter()
        .filter(|log| interval.contains(log.date))
        .filter_map(|log| {
            log.max_weight_of(exercise_name)
                .map(|max_weight| ProgressionPoint {
                    date: log.date,
                    max_weight,
                })
        })
        .collect::<Vec<_>>();
    points.sort_by_key(|p| p.date);

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return insufficient(exercise_name, points, 0, policy);
    };
    if points.len() < 2 {
        return insufficient(exercise_name, points, 1, policy);
    }

    #[allow(clippy::cast_precision_loss)]
    let weeks = ((last.date - first.date).num_days() as f32 / 7.0).max(1.0);
    let avg_weekly_delta = (last.max_weight.lbs() - first.max_weight.lbs()) / weeks;
    let velocity = policy.velocity(avg_weekly_delta);

    let trailing = points
        .iter()
        .rev()
        .take_while(|p| p.max_weight == last.max_weight)
        .count();
    let stalled = points.len() >= policy.stall_sessions && trailing >= policy.stall_sessions;
    let weeks_at_current_weight = if points.len() < policy.stall_sessions {
        1
    } else {
        u32::try_from(trailing).unwrap_or(u32::MAX)
    };

    ProgressionSummary {
        exercise: exercise_name.to_string(),
        velocity,
        avg_weekly_delta,
        stalled,
        weeks_at_current_weight,
        suggested_action: policy.action(velocity, stalled, weeks_at_current_weight),
        points,
    }
}

fn insufficient(
    exercise_name: &str,
    points: Vec<ProgressionPoint>,
    weeks_at_current_weight: u32,
    policy: &ProgressionPolicy,
) -> ProgressionSummary {
    ProgressionSummary {
        exercise: exercise_name.to_string(),
        points,
        velocity: Velocity::InsufficientData,
        avg_weekly_delta: 0.0,
        stalled: false,
        weeks_at_current_weight,
        suggested_action: policy.action(Velocity::InsufficientData, false, weeks_at_current_weight),
    }
}
