//! Thresholds and tunables of all analyses, grouped by concern.
//!
//! Every section falls back to its defaults, so a policy document only needs to name the values
//! it changes.

use crate::{Adherence, PolicyError, Severity, SuggestedAction, Velocity, VolumeTrend};

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Policy {
    pub patterns: PatternPolicy,
    pub volume: VolumePolicy,
    pub overtraining: OvertrainingPolicy,
    pub progression: ProgressionPolicy,
    pub templates: TemplatePolicy,
    pub deviation: DeviationPolicy,
    pub planner: PlannerPolicy,
    pub catch_up: CatchUpPolicy,
}

impl Policy {
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Policy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        unit_interval("patterns.common_frequency", self.patterns.common_frequency)?;
        unit_interval("patterns.rare_frequency", self.patterns.rare_frequency)?;
        ordered(
            "patterns.rare_frequency",
            self.patterns.rare_frequency,
            "patterns.common_frequency",
            self.patterns.common_frequency,
        )?;
        unit_interval("volume.trend_threshold", self.volume.trend_threshold)?;
        unit_interval("deviation.none_threshold", self.deviation.none_threshold)?;
        unit_interval("deviation.minor_threshold", self.deviation.minor_threshold)?;
        unit_interval("deviation.core_overlap", self.deviation.core_overlap)?;
        unit_interval("deviation.variation_floor", self.deviation.variation_floor)?;
        ordered(
            "deviation.minor_threshold",
            self.deviation.minor_threshold,
            "deviation.none_threshold",
            self.deviation.none_threshold,
        )?;
        unit_interval("progression.deload_factor", self.progression.deload_factor)?;
        Ok(())
    }
}

fn unit_interval(field: &'static str, value: f32) -> Result<(), PolicyError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PolicyError::OutOfRange {
            field,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn ordered(
    lower: &'static str,
    lower_value: f32,
    upper: &'static str,
    upper_value: f32,
) -> Result<(), PolicyError> {
    if lower_value <= upper_value {
        Ok(())
    } else {
        Err(PolicyError::Inverted { lower, upper })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PatternPolicy {
    pub common_frequency: f32,
    pub rare_frequency: f32,
}

impl PatternPolicy {
    #[must_use]
    pub fn adherence(&self, frequency: f32) -> Adherence {
        if frequency >= self.common_frequency {
            Adherence::Common
        } else if frequency < self.rare_frequency {
            Adherence::Rare
        } else {
            Adherence::Occasional
        }
    }
}

impl Default for PatternPolicy {
    fn default() -> Self {
        Self {
            common_frequency: 0.6,
            rare_frequency: 0.3,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VolumePolicy {
    /// Relative change between the older and the recent half that counts as a trend.
    pub trend_threshold: f32,
    /// Volume increase in percent above which a coaching warning is added.
    pub coaching_increase_pct: f32,
}

impl VolumePolicy {
    #[must_use]
    pub fn trend(&self, older: f32, recent: f32) -> VolumeTrend {
        if recent > older * (1.0 + self.trend_threshold) {
            VolumeTrend::Increasing
        } else if recent < older * (1.0 - self.trend_threshold) {
            VolumeTrend::Decreasing
        } else {
            VolumeTrend::Stable
        }
    }
}

impl Default for VolumePolicy {
    fn default() -> Self {
        Self {
            trend_threshold: 0.1,
            coaching_increase_pct: 15.0,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OvertrainingPolicy {
    pub lookback_days: u32,
    pub min_workouts: usize,
    pub frequency_window_days: u32,
    pub high_frequency: u32,
    pub moderate_frequency: u32,
    pub high_volume_increase_pct: f32,
    pub moderate_volume_increase_pct: f32,
    pub high_risk_score: u32,
    pub moderate_risk_score: u32,
}

impl Default for OvertrainingPolicy {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            min_workouts: 4,
            frequency_window_days: 7,
            high_frequency: 6,
            moderate_frequency: 5,
            high_volume_increase_pct: 25.0,
            moderate_volume_increase_pct: 15.0,
            high_risk_score: 3,
            moderate_risk_score: 2,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProgressionPolicy {
    pub fast_weekly_delta: f32,
    pub moderate_weekly_delta: f32,
    /// Number of trailing sessions at one weight that count as a stall.
    pub stall_sessions: usize,
    pub deload_after_weeks: u32,
    pub deload_factor: f32,
    pub min_increment: f32,
}

impl ProgressionPolicy {
    #[must_use]
    pub fn velocity(&self, avg_weekly_delta: f32) -> Velocity {
        if avg_weekly_delta > self.fast_weekly_delta {
            Velocity::Fast
        } else if avg_weekly_delta > self.moderate_weekly_delta {
            Velocity::Moderate
        } else if avg_weekly_delta > 0.0 {
            Velocity::Slow
        } else {
            Velocity::Plateau
        }
    }

    #[must_use]
    pub fn action(
        &self,
        velocity: Velocity,
        stalled: bool,
        weeks_at_current_weight: u32,
    ) -> SuggestedAction {
        if stalled && weeks_at_current_weight >= self.deload_after_weeks {
            SuggestedAction::Deload
        } else if matches!(velocity, Velocity::Moderate | Velocity::Fast) && !stalled {
            SuggestedAction::Increase
        } else {
            SuggestedAction::Maintain
        }
    }
}

impl Default for ProgressionPolicy {
    fn default() -> Self {
        Self {
            fast_weekly_delta: 3.0,
            moderate_weekly_delta: 1.0,
            stall_sessions: 3,
            deload_after_weeks: 4,
            deload_factor: 0.9,
            min_increment: 2.5,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TemplatePolicy {
    /// Workouts of a type needed to personalize a template.
    pub min_history: usize,
    /// Workouts of a type needed before an adaptive template is preferred over the static one.
    pub adaptive_min_history: usize,
    pub default_sets: u32,
    pub default_rest_seconds: u32,
    pub express_compounds: usize,
    pub express_accessories: usize,
    pub express_overhead_minutes: f32,
}

impl Default for TemplatePolicy {
    fn default() -> Self {
        Self {
            min_history: 3,
            adaptive_min_history: 5,
            default_sets: 3,
            default_rest_seconds: 90,
            express_compounds: 4,
            express_accessories: 2,
            express_overhead_minutes: 5.0,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DeviationPolicy {
    pub none_threshold: f32,
    pub minor_threshold: f32,
    /// Share of core words two names must have in common to count as variations.
    pub core_overlap: f32,
    /// Similarity assigned to variations that differ only in equipment.
    pub variation_floor: f32,
}

impl DeviationPolicy {
    #[must_use]
    pub fn severity(&self, similarity: f32) -> Severity {
        if similarity >= self.none_threshold {
            Severity::None
        } else if similarity >= self.minor_threshold {
            Severity::MinorVariation
        } else {
            Severity::MajorDeviation
        }
    }
}

impl Default for DeviationPolicy {
    fn default() -> Self {
        Self {
            none_threshold: 0.85,
            minor_threshold: 0.5,
            core_overlap: 0.5,
            variation_floor: 0.6,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlannerPolicy {
    pub lookback_days: u32,
    pub upper_increment: f32,
    pub lower_increment: f32,
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        Self {
            lookback_days: 90,
            upper_increment: 2.5,
            lower_increment: 5.0,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CatchUpPolicy {
    pub solo_minutes: u32,
    pub paired_minutes: u32,
    pub rest_between_minutes: u32,
    pub balance_days: u32,
}

impl Default for CatchUpPolicy {
    fn default() -> Self {
        Self {
            solo_minutes: 35,
            paired_minutes: 70,
            rest_between_minutes: 5,
            balance_days: 14,
        }
    }
}
