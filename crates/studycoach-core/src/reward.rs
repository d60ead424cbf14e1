//! Reward calculation for completed activities.
//!
//! Pure functions mapping a completed focus session or quiz to XP/coin
//! deltas and a focus-quality score. No state, no randomness, no side
//! effects; callers decide what to do with the deltas.

use serde::{Deserialize, Serialize};

/// XP granted per correctly answered quiz question.
pub const XP_PER_CORRECT: u64 = 50;
/// Coins granted per correctly answered quiz question.
pub const COINS_PER_CORRECT: u64 = 25;
/// Focus-score penalty per recorded distraction.
pub const DISTRACTION_PENALTY: u32 = 10;
/// Ceiling of the per-session focus score.
pub const MAX_FOCUS_SCORE: u32 = 100;

/// A completed focus session as reported by the timer collaborator.
///
/// Emitted exactly once per session, consumed once, not retained. XP and
/// coins are whatever the timer granted for the session; the core does not
/// second-guess them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Session length in seconds, > 0.
    pub duration_secs: u64,
    pub xp_earned: u64,
    pub coins_earned: u64,
    /// Times the user broke focus during the session.
    pub distractions: u32,
}

/// A finished quiz as reported by the quiz session on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Correct answers, 0..=10.
    pub score: u32,
    pub xp_earned: u64,
    pub coins_earned: u64,
}

/// Reward derived from a completed focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReward {
    pub xp: u64,
    pub coins: u64,
    /// Focus quality in [0, 100].
    pub focus_score: u32,
}

/// Reward derived from a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReward {
    pub xp: u64,
    pub coins: u64,
}

/// Per-session focus quality, derived from the distraction count.
///
/// Each distraction costs [`DISTRACTION_PENALTY`] points off a
/// [`MAX_FOCUS_SCORE`] ceiling, floored at zero. Ten or more distractions
/// always score 0.
pub fn focus_score(distractions: u32) -> u32 {
    MAX_FOCUS_SCORE.saturating_sub(distractions.saturating_mul(DISTRACTION_PENALTY))
}

/// Reward for a completed focus session.
///
/// XP and coins pass through from the timer collaborator unchanged; only
/// the focus score is derived here.
pub fn from_session(result: &SessionResult) -> SessionReward {
    SessionReward {
        xp: result.xp_earned,
        coins: result.coins_earned,
        focus_score: focus_score(result.distractions),
    }
}

/// Reward for a completed quiz: [`XP_PER_CORRECT`] XP and
/// [`COINS_PER_CORRECT`] coins per correct answer.
pub fn from_quiz(correct_count: u32) -> QuizReward {
    QuizReward {
        xp: u64::from(correct_count) * XP_PER_CORRECT,
        coins: u64::from(correct_count) * COINS_PER_CORRECT,
    }
}
