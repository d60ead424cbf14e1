use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shop::ItemCategory;

/// Every state-changing operation in the pipeline produces an Event.
/// Display collaborators render them; integrations and tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A focus session went through the full pipeline: focus score derived,
    /// reward applied to the ledger, daily stats folded.
    SessionRecorded {
        duration_secs: u64,
        xp: u64,
        coins: u64,
        focus_score: u32,
        level: u32,
        at: DateTime<Utc>,
    },
    /// A finished quiz was credited to the ledger.
    QuizRecorded {
        score: u32,
        xp: u64,
        coins: u64,
        level: u32,
        at: DateTime<Utc>,
    },
    /// A quiz session drew its question sample and became answerable.
    QuizStarted {
        question_count: usize,
        at: DateTime<Utc>,
    },
    AnswerSubmitted {
        question_index: usize,
        selected: usize,
        correct: bool,
        score: u32,
        at: DateTime<Utc>,
    },
    /// Moved on to the next question after the settle delay.
    QuizAdvanced {
        question_index: usize,
        at: DateTime<Utc>,
    },
    /// Terminal quiz transition; carries the reward the ledger will apply.
    QuizCompleted {
        score: u32,
        xp: u64,
        coins: u64,
        at: DateTime<Utc>,
    },
    /// The coin-spend event: a purchase charged the wallet.
    ItemPurchased {
        item_id: String,
        price: u64,
        remaining_coins: u64,
        at: DateTime<Utc>,
    },
    ItemEquipped {
        item_id: String,
        category: ItemCategory,
        at: DateTime<Utc>,
    },
    TeamCreated {
        team_id: String,
        name: String,
        invite_code: String,
        at: DateTime<Utc>,
    },
}
