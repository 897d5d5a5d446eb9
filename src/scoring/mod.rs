//! Scoring rules for a daily check-in.
//!
//! [score_check_in] is a pure function of the configuration, the check-in and the message
//! picker. It never touches storage; persisting the outcome is the caller's job.

pub mod messages;
pub mod picker;
pub mod tiers;

use serde::{Deserialize, Serialize};

use messages::{scoldings, Occasion, EASTER_EGG_BELOW};
use picker::{pick_from, MessagePicker};
use tiers::{tier_for, Severity, Tier};

/// Immutable scoring parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// A day counts as met when at least this many tasks are completed.
    pub target_task_count: u32,
    /// Unmet streak length from which the penalty is applied.
    pub max_continuous_unmet: u32,
    pub experience_per_task: i64,
    pub experience_penalty: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_task_count: 5,
            max_continuous_unmet: 3,
            experience_per_task: 10,
            experience_penalty: 30,
        }
    }
}

/// Everything the engine needs to know about a single check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckIn {
    pub completed: u32,
    pub task_count: u32,
    pub prior_streak: u32,
    pub prior_total: i64,
}

impl CheckIn {
    pub fn is_in_range(&self) -> bool {
        self.completed <= self.task_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStatus {
    /// Target met, streak reset to zero.
    Met,
    /// Target missed, streak still below the penalty limit.
    Warning,
    /// Target missed and the penalty was applied.
    Penalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gain {
    Loss,
    Nothing,
    Earned,
}

impl Gain {
    fn of(delta: i64) -> Gain {
        match delta.signum() {
            -1 => Gain::Loss,
            0 => Gain::Nothing,
            _ => Gain::Earned,
        }
    }
}

/// Tier for a non-negative total, or a scolding for a negative one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assessment {
    Tier {
        tier: &'static Tier,
    },
    Negative {
        severity: Severity,
        message: &'static str,
        easter_egg: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInOutcome {
    pub completed: u32,
    pub new_streak: u32,
    pub streak_status: StreakStatus,
    /// Penalty subtracted from this check-in, zero when none.
    pub penalty: i64,
    pub delta: i64,
    pub gain: Gain,
    pub new_total: i64,
    pub assessment: Assessment,
}

/// Classifies a total. Negative totals pick a random scolding from their severity band.
pub fn assess(total: i64, occasion: Occasion, picker: &mut dyn MessagePicker) -> Assessment {
    if let Some(tier) = tier_for(total) {
        return Assessment::Tier { tier };
    }
    // tier_for only fails for negative totals, which always have a severity.
    let severity = Severity::for_total(total).unwrap_or(Severity::Heavy);
    Assessment::Negative {
        severity,
        message: pick_from(picker, scoldings(severity)),
        easter_egg: (total < EASTER_EGG_BELOW).then(|| occasion.easter_egg()),
    }
}

/// Applies one check-in.
pub fn score_check_in(
    config: &ScoringConfig,
    check_in: CheckIn,
    picker: &mut dyn MessagePicker,
) -> CheckInOutcome {
    let met = check_in.completed >= config.target_task_count;
    let new_streak = if met {
        0
    } else {
        check_in.prior_streak.saturating_add(1)
    };

    let penalized = new_streak >= config.max_continuous_unmet;
    let penalty = if penalized { config.experience_penalty } else { 0 };
    let delta = i64::from(check_in.completed)
        .saturating_mul(config.experience_per_task)
        .saturating_sub(penalty);
    let new_total = check_in.prior_total.saturating_add(delta);

    let streak_status = match (met, penalized) {
        (true, _) => StreakStatus::Met,
        (false, false) => StreakStatus::Warning,
        (false, true) => StreakStatus::Penalized,
    };

    CheckInOutcome {
        completed: check_in.completed,
        new_streak,
        streak_status,
        penalty,
        delta,
        gain: Gain::of(delta),
        new_total,
        assessment: assess(new_total, Occasion::CheckIn, picker),
    }
}
