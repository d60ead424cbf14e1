//! Quiz session state machine.
//!
//! A session walks a 10-question sample one question at a time. It has no
//! internal timing; the presentation layer owns the settle delay between
//! `submit()` and `advance()`, and the session only requires that advance
//! happens eventually. Invalid commands are silent no-ops, never errors.
//!
//! ## State Transitions
//!
//! ```text
//! Loading -> InProgress(index 0..=9) -> Complete
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut quiz = QuizSession::new();
//! quiz.begin(&mut rng);
//! quiz.select_answer(2);
//! quiz.submit();
//! quiz.advance(); // after the UI settle delay
//! ```

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bank::{question_bank, Question, SAMPLE_SIZE};
use crate::events::Event;
use crate::reward::{self, QuizResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizState {
    /// Session exists but the question sample has not been drawn yet.
    Loading,
    /// Walking the sample; the question cursor lives on the session.
    InProgress,
    /// Terminal. Immutable until the caller discards or resets the session.
    Complete,
}

/// Short-lived quiz state machine.
///
/// Owns its question sample and per-question bookkeeping. Rewards exist
/// only at the terminal transition; a session dropped mid-way grants
/// nothing to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    state: QuizState,
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<usize>,
    answered: bool,
    score: u32,
    answers: Vec<Option<usize>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// Create a session in `Loading`. No sample is drawn until [`begin`].
    ///
    /// [`begin`]: QuizSession::begin
    pub fn new() -> Self {
        Self {
            state: QuizState::Loading,
            questions: Vec::new(),
            current_index: 0,
            selected_answer: None,
            answered: false,
            score: 0,
            answers: vec![None; SAMPLE_SIZE],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// 0.0 .. 100.0 progress across the sample.
    pub fn progress_pct(&self) -> f64 {
        match self.state {
            QuizState::Loading => 0.0,
            QuizState::InProgress => {
                ((self.current_index + 1) as f64 / SAMPLE_SIZE as f64) * 100.0
            }
            QuizState::Complete => 100.0,
        }
    }

    /// The terminal result, available only once `Complete` is reached.
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            QuizState::Complete => {
                let reward = reward::from_quiz(self.score);
                Some(QuizResult {
                    score: self.score,
                    xp_earned: reward.xp,
                    coins_earned: reward.coins,
                })
            }
            _ => None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Draw the question sample and enter `InProgress` at question 0.
    ///
    /// Fisher-Yates shuffle of the full bank, then the first
    /// [`SAMPLE_SIZE`] questions. Sampling is without replacement, so ids
    /// never repeat within a session.
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Event> {
        match self.state {
            QuizState::Loading => {
                let mut bank = question_bank();
                bank.shuffle(rng);
                bank.truncate(SAMPLE_SIZE);
                self.questions = bank;
                self.state = QuizState::InProgress;
                Some(Event::QuizStarted {
                    question_count: self.questions.len(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Choose an option for the current question.
    ///
    /// Allowed only before [`submit`]; re-selection after answering and
    /// out-of-range indices are silent no-ops. Returns whether the
    /// selection was taken.
    ///
    /// [`submit`]: QuizSession::submit
    pub fn select_answer(&mut self, option_index: usize) -> bool {
        if self.state != QuizState::InProgress || self.answered {
            return false;
        }
        let in_range = self
            .questions
            .get(self.current_index)
            .is_some_and(|q| option_index < q.options.len());
        if !in_range {
            return false;
        }
        self.selected_answer = Some(option_index);
        true
    }

    /// Lock in the selected answer for the current question.
    ///
    /// Requires a selection; records it, scores it, and waits for
    /// [`advance`]. Submitting with no selection or twice for the same
    /// question is a silent no-op.
    ///
    /// [`advance`]: QuizSession::advance
    pub fn submit(&mut self) -> Option<Event> {
        if self.state != QuizState::InProgress || self.answered {
            return None;
        }
        let selected = self.selected_answer?;
        let question = self.questions.get(self.current_index)?;
        let correct = selected == question.correct_index;
        self.answers[self.current_index] = Some(selected);
        if correct {
            self.score += 1;
        }
        self.answered = true;
        Some(Event::AnswerSubmitted {
            question_index: self.current_index,
            selected,
            correct,
            score: self.score,
            at: Utc::now(),
        })
    }

    /// Move past an answered question once the settle delay has run.
    ///
    /// Advances to the next question with a clean slate, or completes the
    /// session after the last one and emits the terminal reward event.
    pub fn advance(&mut self) -> Option<Event> {
        if self.state != QuizState::InProgress || !self.answered {
            return None;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.answered = false;
            Some(Event::QuizAdvanced {
                question_index: self.current_index,
                at: Utc::now(),
            })
        } else {
            self.state = QuizState::Complete;
            let reward = reward::from_quiz(self.score);
            Some(Event::QuizCompleted {
                score: self.score,
                xp: reward.xp,
                coins: reward.coins,
                at: Utc::now(),
            })
        }
    }

    /// Discard everything and return to `Loading`.
    ///
    /// An in-progress session grants nothing when reset; call [`begin`]
    /// again to redraw a fresh sample.
    ///
    /// [`begin`]: QuizSession::begin
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;
    use std::collections::HashSet;

    fn rng(seed: u64) -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(seed)
    }

    fn started(seed: u64) -> QuizSession {
        let mut quiz = QuizSession::new();
        quiz.begin(&mut rng(seed));
        quiz
    }

    /// Answer the current question with the given option and settle.
    fn answer_and_settle(quiz: &mut QuizSession, option: usize) -> Option<Event> {
        assert!(quiz.select_answer(option));
        quiz.submit();
        quiz.advance()
    }

    #[test]
    fn begin_draws_ten_distinct_questions() {
        let quiz = started(42);
        assert_eq!(quiz.state(), QuizState::InProgress);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.questions().len(), SAMPLE_SIZE);
        let ids: HashSet<u32> = quiz.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), SAMPLE_SIZE);
    }

    #[test]
    fn begin_is_deterministic_per_seed() {
        let a = started(7);
        let b = started(7);
        let ids = |quiz: &QuizSession| quiz.questions().iter().map(|q| q.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn begin_twice_is_a_no_op() {
        let mut quiz = started(1);
        let before: Vec<u32> = quiz.questions().iter().map(|q| q.id).collect();
        assert!(quiz.begin(&mut rng(2)).is_none());
        let after: Vec<u32> = quiz.questions().iter().map(|q| q.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn select_rejects_out_of_range_and_loading() {
        let mut fresh = QuizSession::new();
        assert!(!fresh.select_answer(0));

        let mut quiz = started(3);
        assert!(!quiz.select_answer(4));
        assert!(quiz.select_answer(3));
        assert_eq!(quiz.selected_answer(), Some(3));
    }

    #[test]
    fn submit_without_selection_is_silent() {
        let mut quiz = started(3);
        assert!(quiz.submit().is_none());
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.answered());
    }

    #[test]
    fn submit_scores_correct_answers_only() {
        let mut quiz = started(9);
        let correct = quiz.current_question().unwrap().correct_index;
        let wrong = (correct + 1) % 4;

        assert!(quiz.select_answer(wrong));
        let event = quiz.submit().unwrap();
        match event {
            Event::AnswerSubmitted { correct, score, .. } => {
                assert!(!correct);
                assert_eq!(score, 0);
            }
            other => panic!("expected AnswerSubmitted, got {other:?}"),
        }
        assert_eq!(quiz.answers()[0], Some(wrong));
    }

    #[test]
    fn answered_question_locks_selection_and_resubmission() {
        let mut quiz = started(9);
        assert!(quiz.select_answer(0));
        assert!(quiz.submit().is_some());
        assert!(!quiz.select_answer(1));
        assert!(quiz.submit().is_none());
        assert_eq!(quiz.selected_answer(), Some(0));
    }

    #[test]
    fn advance_requires_an_answered_question() {
        let mut quiz = started(5);
        assert!(quiz.advance().is_none());
        assert!(quiz.select_answer(0));
        quiz.submit();
        let event = quiz.advance().unwrap();
        match event {
            Event::QuizAdvanced { question_index, .. } => assert_eq!(question_index, 1),
            other => panic!("expected QuizAdvanced, got {other:?}"),
        }
        assert!(!quiz.answered());
        assert_eq!(quiz.selected_answer(), None);
    }

    #[test]
    fn perfect_run_completes_with_full_reward() {
        let mut quiz = started(11);
        for _ in 0..SAMPLE_SIZE {
            let correct = quiz.current_question().unwrap().correct_index;
            answer_and_settle(&mut quiz, correct);
        }
        assert_eq!(quiz.state(), QuizState::Complete);
        let result = quiz.result().unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(result.xp_earned, 500);
        assert_eq!(result.coins_earned, 250);
    }

    #[test]
    fn score_matches_recorded_answers() {
        let mut quiz = started(13);
        // Alternate right and wrong answers across the walk.
        for step in 0..SAMPLE_SIZE {
            let correct = quiz.current_question().unwrap().correct_index;
            let pick = if step % 2 == 0 { correct } else { (correct + 1) % 4 };
            answer_and_settle(&mut quiz, pick);
        }
        assert_eq!(quiz.state(), QuizState::Complete);
        let recount = quiz
            .answers()
            .iter()
            .zip(quiz.questions())
            .filter(|(answer, question)| **answer == Some(question.correct_index))
            .count() as u32;
        assert_eq!(quiz.score(), recount);
        assert_eq!(quiz.score(), 5);
    }

    #[test]
    fn complete_state_is_immutable() {
        let mut quiz = started(17);
        for _ in 0..SAMPLE_SIZE {
            answer_and_settle(&mut quiz, 0);
        }
        assert_eq!(quiz.state(), QuizState::Complete);
        let score = quiz.score();
        assert!(!quiz.select_answer(1));
        assert!(quiz.submit().is_none());
        assert!(quiz.advance().is_none());
        assert_eq!(quiz.score(), score);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn reset_returns_to_loading_and_grants_nothing() {
        let mut quiz = started(19);
        answer_and_settle(&mut quiz, 0);
        quiz.reset();
        assert_eq!(quiz.state(), QuizState::Loading);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.result().is_none());
        assert!(quiz.questions().is_empty());
    }

    #[test]
    fn progress_tracks_the_walk() {
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.progress_pct(), 0.0);
        quiz.begin(&mut rng(23));
        assert_eq!(quiz.progress_pct(), 10.0);
        for _ in 0..SAMPLE_SIZE {
            answer_and_settle(&mut quiz, 0);
        }
        assert_eq!(quiz.progress_pct(), 100.0);
    }
}
