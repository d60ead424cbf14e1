//! Daily statistics for StudyCoach
//!
//! This module owns today's rolling aggregates (session count, focus time,
//! running average focus score, best streak, XP tally) and the insight
//! engine that reads them. Quiz completions do not fold in here; quizzes
//! are not focus sessions and feed the progression ledger only.

mod insights;

pub use insights::{
    format_duration, motivation, Insight, InsightCategory, InsightEngine, InsightThresholds,
    MOTIVATIONAL_QUOTES,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reward::SessionResult;

/// Default daily focus goal in seconds (one hour of focused study).
pub const DEFAULT_DAILY_GOAL_SECS: u64 = 3600;

/// Rolling statistics for a single day.
///
/// The average focus score is a streaming mean with integer rounding at
/// each fold. Recomputing the mean from scratch over the full history can
/// differ by a point; that drift is accepted since raw per-session scores
/// are not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day these stats were started. Resetting on a calendar boundary is
    /// the caller's scheduling concern, not performed here.
    pub date: NaiveDate,
    pub sessions_completed: u32,
    pub total_focus_secs: u64,
    /// Equal-weighted running mean of per-session focus scores, in [0, 100].
    pub average_focus_score: u32,
    /// Longest single session recorded today, in seconds.
    pub best_streak_secs: u64,
    pub xp_earned: u64,
}

impl DailyStats {
    /// Zeroed stats stamped with the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sessions_completed: 0,
            total_focus_secs: 0,
            average_focus_score: 0,
            best_streak_secs: 0,
            xp_earned: 0,
        }
    }

    /// Zeroed stats stamped with the current UTC day.
    pub fn today() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }

    /// Fold one completed session into the rolling aggregates.
    ///
    /// The focus score comes from the reward calculation for the same
    /// session; folding and rewarding consume the one `SessionResult`
    /// together, exactly once.
    pub fn fold_session(&mut self, result: &SessionResult, focus_score: u32) {
        let folded = self.sessions_completed;
        self.sessions_completed = folded.saturating_add(1);
        self.total_focus_secs = self.total_focus_secs.saturating_add(result.duration_secs);
        self.xp_earned = self.xp_earned.saturating_add(result.xp_earned);
        self.average_focus_score = if folded == 0 {
            focus_score
        } else {
            let prior = u64::from(self.average_focus_score) * u64::from(folded);
            let sum = prior + u64::from(focus_score);
            ((sum as f64) / f64::from(folded + 1)).round() as u32
        };
        self.best_streak_secs = self.best_streak_secs.max(result.duration_secs);
    }

    /// Mean session length in seconds; 0 on an empty day.
    pub fn average_session_secs(&self) -> u64 {
        if self.sessions_completed == 0 {
            return 0;
        }
        self.total_focus_secs / u64::from(self.sessions_completed)
    }

    /// Progress toward a daily focus goal, as a percentage capped at 100.
    pub fn goal_progress(&self, goal_secs: u64) -> u32 {
        if goal_secs == 0 {
            return 0;
        }
        let pct = (self.total_focus_secs as f64 / goal_secs as f64 * 100.0).round() as u64;
        pct.min(100) as u32
    }

    /// Start a new day: zero everything and stamp the new date.
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::new(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn session(duration_secs: u64, xp: u64) -> SessionResult {
        SessionResult {
            duration_secs,
            xp_earned: xp,
            coins_earned: xp / 2,
            distractions: 0,
        }
    }

    #[test]
    fn first_fold_sets_every_aggregate() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(1800, 50), 80);
        assert_eq!(stats.sessions_completed, 1);
        assert_eq!(stats.total_focus_secs, 1800);
        assert_eq!(stats.average_focus_score, 80);
        assert_eq!(stats.best_streak_secs, 1800);
        assert_eq!(stats.xp_earned, 50);
    }

    #[test]
    fn average_is_equal_weighted_not_duration_weighted() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(60, 10), 100);
        stats.fold_session(&session(7200, 10), 50);
        assert_eq!(stats.average_focus_score, 75);
    }

    #[test]
    fn average_rounds_at_each_step() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(600, 0), 100);
        stats.fold_session(&session(600, 0), 91);
        // (100 + 91) / 2 = 95.5, rounds to 96
        assert_eq!(stats.average_focus_score, 96);
        stats.fold_session(&session(600, 0), 0);
        // streaming: (96*2 + 0) / 3 = 64; from-scratch would give 63.67 -> 64
        assert_eq!(stats.average_focus_score, 64);
    }

    #[test]
    fn best_streak_keeps_the_longest_session() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(1200, 0), 90);
        stats.fold_session(&session(3600, 0), 90);
        stats.fold_session(&session(900, 0), 90);
        assert_eq!(stats.best_streak_secs, 3600);
    }

    #[test]
    fn average_session_length_guards_empty_day() {
        let stats = DailyStats::new(day());
        assert_eq!(stats.average_session_secs(), 0);
    }

    #[test]
    fn goal_progress_caps_at_one_hundred() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(1800, 0), 90);
        assert_eq!(stats.goal_progress(DEFAULT_DAILY_GOAL_SECS), 50);
        stats.fold_session(&session(7200, 0), 90);
        assert_eq!(stats.goal_progress(DEFAULT_DAILY_GOAL_SECS), 100);
        assert_eq!(stats.goal_progress(0), 0);
    }

    #[test]
    fn reset_zeroes_and_restamps() {
        let mut stats = DailyStats::new(day());
        stats.fold_session(&session(1800, 50), 80);
        let next = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        stats.reset(next);
        assert_eq!(stats, DailyStats::new(next));
    }
}
