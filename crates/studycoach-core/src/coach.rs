//! The coach: one facade over the ledger, daily stats, and insights.
//!
//! Completion reports arrive here exactly once per activity; the coach
//! rewards the ledger and folds the daily aggregates in a single step so
//! the two can never drift apart. Feeding the same result twice
//! double-credits, so callers deliver each report at most once.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::progression::UserState;
use crate::reward::{self, QuizResult, SessionResult};
use crate::stats::{DailyStats, Insight, InsightEngine};

/// Facade bundling the user ledger with today's statistics.
#[derive(Debug, Clone)]
pub struct Coach {
    user: UserState,
    today: DailyStats,
    insights: InsightEngine,
}

/// Serializable view of the coach's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachSnapshot {
    pub user: UserState,
    pub today: DailyStats,
}

impl Coach {
    /// Fresh coach: new-user ledger, zeroed stats stamped with today.
    pub fn new() -> Self {
        Self::with_state(UserState::new(), DailyStats::today())
    }

    /// Coach resuming from existing state.
    pub fn with_state(user: UserState, today: DailyStats) -> Self {
        Self {
            user,
            today,
            insights: InsightEngine::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn today(&self) -> &DailyStats {
        &self.today
    }

    /// Today's insights, one per dimension in fixed order.
    pub fn insights(&self) -> Vec<Insight> {
        self.insights.analyze(&self.today)
    }

    pub fn snapshot(&self) -> CoachSnapshot {
        CoachSnapshot {
            user: self.user.clone(),
            today: self.today.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────────

    /// Record a completed focus session: credit the ledger and fold the
    /// daily aggregates together.
    pub fn complete_session(&mut self, result: &SessionResult) -> Event {
        let reward = reward::from_session(result);
        self.user.apply_reward(reward.xp, reward.coins);
        self.today.fold_session(result, reward.focus_score);
        Event::SessionRecorded {
            duration_secs: result.duration_secs,
            xp: reward.xp,
            coins: reward.coins,
            focus_score: reward.focus_score,
            level: self.user.level,
            at: Utc::now(),
        }
    }

    /// Record a completed quiz: credit the ledger. Quizzes are not focus
    /// sessions and leave the daily aggregates untouched.
    pub fn complete_quiz(&mut self, result: &QuizResult) -> Event {
        self.user.apply_reward(result.xp_earned, result.coins_earned);
        Event::QuizRecorded {
            score: result.score,
            xp: result.xp_earned,
            coins: result.coins_earned,
            level: self.user.level,
            at: Utc::now(),
        }
    }

    /// Start a new day. Zeroes the daily aggregates; the ledger carries
    /// over. Calendar scheduling is the caller's concern.
    pub fn start_day(&mut self, date: NaiveDate) {
        self.today.reset(date);
    }
}

impl Default for Coach {
    fn default() -> Self {
        Self::new()
    }
}
