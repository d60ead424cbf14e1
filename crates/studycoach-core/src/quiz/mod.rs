//! Quiz engine for StudyCoach
//!
//! A quiz is a short-lived state machine over a sample of 10 distinct
//! questions drawn without replacement from the static 40-question bank.
//! Rewards exist only at the terminal state; an abandoned quiz grants
//! nothing.

mod bank;
mod session;

pub use bank::{question_bank, Question, BANK_SIZE, SAMPLE_SIZE};
pub use session::{QuizSession, QuizState};
