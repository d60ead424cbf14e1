//! # StudyCoach Core Library
//!
//! This library provides the core business logic for the StudyCoach study
//! companion. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Reward pipeline**: Pure reward math plus a progression ledger that
//!   turns completed sessions and quizzes into XP, coins, and levels
//! - **Daily stats**: Rolling per-day aggregates and a threshold-ladder
//!   insight engine that reads them
//! - **Quiz engine**: A fixed 40-question bank and a seeded-shuffle quiz
//!   session state machine
//! - **Shop & community**: Cosmetic catalog with a coin ledger hookup, and
//!   leaderboard/team views
//!
//! ## Key Components
//!
//! - [`Coach`]: Facade tying the ledger and daily stats together
//! - [`UserState`]: XP, coin, level, and streak ledger
//! - [`QuizSession`]: Quiz state machine
//! - [`Config`]: Application configuration management

pub mod coach;
pub mod community;
pub mod config;
pub mod error;
pub mod events;
pub mod progression;
pub mod quiz;
pub mod reward;
pub mod shop;
pub mod stats;

pub use coach::{Coach, CoachSnapshot};
pub use config::Config;
pub use error::{CommunityError, ConfigError, CoreError, LedgerError, ShopError};
pub use events::Event;
pub use progression::UserState;
pub use quiz::{QuizSession, QuizState};
pub use reward::{QuizResult, SessionResult};
pub use shop::{ItemCategory, Shop, ShopItem};
pub use stats::{DailyStats, Insight, InsightCategory, InsightEngine};
