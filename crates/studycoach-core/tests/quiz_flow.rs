//! Integration tests for the quiz engine.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use studycoach_core::events::Event;
use studycoach_core::quiz::{QuizSession, QuizState, BANK_SIZE, SAMPLE_SIZE};
use studycoach_core::Coach;

fn rng(seed: u64) -> Mcg128Xsl64 {
    Mcg128Xsl64::seed_from_u64(seed)
}

#[test]
fn test_perfect_run_start_to_finish() {
    let mut quiz = QuizSession::new();
    quiz.begin(&mut rng(7));
    assert_eq!(quiz.state(), QuizState::InProgress);

    for _ in 0..SAMPLE_SIZE {
        let correct = quiz.current_question().unwrap().correct_index;
        assert!(quiz.select_answer(correct));
        assert!(quiz.submit().is_some());
        assert!(quiz.advance().is_some());
    }

    assert_eq!(quiz.state(), QuizState::Complete);
    let result = quiz.result().unwrap();
    assert_eq!(result.score, 10);
    assert_eq!(result.xp_earned, 500);
    assert_eq!(result.coins_earned, 250);
}

#[test]
fn test_all_wrong_completes_with_nothing() {
    let mut quiz = QuizSession::new();
    quiz.begin(&mut rng(11));

    for _ in 0..SAMPLE_SIZE {
        let correct = quiz.current_question().unwrap().correct_index;
        quiz.select_answer((correct + 1) % 4);
        quiz.submit();
        quiz.advance();
    }

    assert_eq!(quiz.state(), QuizState::Complete);
    let result = quiz.result().unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.xp_earned, 0);
    assert_eq!(result.coins_earned, 0);
}

#[test]
fn test_completion_event_carries_the_reward() {
    let mut quiz = QuizSession::new();
    quiz.begin(&mut rng(3));

    let mut last = None;
    for _ in 0..SAMPLE_SIZE {
        let correct = quiz.current_question().unwrap().correct_index;
        quiz.select_answer(correct);
        quiz.submit();
        last = quiz.advance();
    }

    match last {
        Some(Event::QuizCompleted {
            score, xp, coins, ..
        }) => {
            assert_eq!(score, 10);
            assert_eq!(xp, 500);
            assert_eq!(coins, 250);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_completed_quiz_feeds_the_coach() {
    let mut quiz = QuizSession::new();
    quiz.begin(&mut rng(5));
    for _ in 0..SAMPLE_SIZE {
        let correct = quiz.current_question().unwrap().correct_index;
        quiz.select_answer(correct);
        quiz.submit();
        quiz.advance();
    }
    let result = quiz.result().unwrap();

    let mut coach = Coach::new();
    coach.complete_quiz(&result);
    assert_eq!(coach.user().total_xp, 500);
    assert_eq!(coach.user().coins, 2250);
    assert_eq!(coach.today().sessions_completed, 0);
}

#[test]
fn test_every_seed_draws_ten_distinct_bank_questions() {
    for seed in 0..25 {
        let mut quiz = QuizSession::new();
        quiz.begin(&mut rng(seed));

        let ids: HashSet<u32> = quiz.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), SAMPLE_SIZE, "seed {seed} drew duplicates");
        assert!(
            ids.iter().all(|&id| id >= 1 && id <= BANK_SIZE as u32),
            "seed {seed} drew ids outside the bank"
        );
    }
}

#[test]
fn test_draw_is_deterministic_per_seed() {
    let mut a = QuizSession::new();
    let mut b = QuizSession::new();
    a.begin(&mut rng(42));
    b.begin(&mut rng(42));

    let order = |quiz: &QuizSession| quiz.questions().iter().map(|q| q.id).collect::<Vec<_>>();
    assert_eq!(order(&a), order(&b));
}

#[test]
fn test_answers_cannot_change_after_settling() {
    let mut quiz = QuizSession::new();
    quiz.begin(&mut rng(9));

    let correct = quiz.current_question().unwrap().correct_index;
    quiz.select_answer(correct);
    quiz.submit();

    // Locked while the result is shown; nothing re-scores
    assert!(!quiz.select_answer((correct + 1) % 4));
    assert!(quiz.submit().is_none());
    assert_eq!(quiz.score(), 1);
}
