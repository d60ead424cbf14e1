use clap::Subcommand;
use rand::Rng;
use studycoach_core::events::Event;
use studycoach_core::quiz::{question_bank, QuizSession, SAMPLE_SIZE};

use super::rng_for;

#[derive(Subcommand)]
pub enum QuizAction {
    /// Walk a full ten-question quiz
    Run {
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Scripted answers as comma-separated option indexes (0-3);
        /// remaining questions are answered randomly
        #[arg(long, value_delimiter = ',')]
        answers: Vec<usize>,
        /// Print the event stream as JSON instead of progress lines
        #[arg(long)]
        json: bool,
    },
    /// Draw and print a ten-question sample
    Sample {
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the whole question bank
    Bank,
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Run {
            seed,
            answers,
            json,
        } => run_quiz(seed, &answers, json),
        QuizAction::Sample { seed } => {
            let mut session = QuizSession::new();
            session.begin(&mut rng_for(seed));
            for (number, question) in session.questions().iter().enumerate() {
                println!("[{}/{SAMPLE_SIZE}] {}", number + 1, question.prompt);
            }
            Ok(())
        }
        QuizAction::Bank => {
            for question in question_bank() {
                println!("Q{:02} {}", question.id, question.prompt);
                for (index, option) in question.options.iter().enumerate() {
                    let marker = if index == question.correct_index { "*" } else { " " };
                    println!("   {marker} {option}");
                }
            }
            Ok(())
        }
    }
}

fn run_quiz(
    seed: Option<u64>,
    answers: &[usize],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rng_for(seed);
    let mut session = QuizSession::new();
    let mut events = Vec::new();
    events.extend(session.begin(&mut rng));

    let mut index = 0;
    while let Some(question) = session.current_question() {
        let prompt = question.prompt.clone();
        let options = question.options.clone();
        let choice = answers
            .get(index)
            .copied()
            .filter(|&answer| answer < options.len())
            .unwrap_or_else(|| rng.gen_range(0..options.len()));

        session.select_answer(choice);
        let submitted = session.submit();
        if !json {
            if let Some(Event::AnswerSubmitted {
                correct, score, ..
            }) = &submitted
            {
                let verdict = if *correct { "correct" } else { "wrong" };
                println!("[{}/{SAMPLE_SIZE}] {prompt}", index + 1);
                println!("      answer: {} - {verdict} (score {score})", options[choice]);
            }
        }
        events.extend(submitted);
        events.extend(session.advance());
        index += 1;
    }

    let result = session
        .result()
        .ok_or("quiz did not reach completion")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        println!(
            "\nScore {}/{SAMPLE_SIZE}: +{} XP, +{} coins",
            result.score, result.xp_earned, result.coins_earned
        );
    }
    Ok(())
}
