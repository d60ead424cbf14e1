use clap::Subcommand;
use rand::Rng;
use serde::Serialize;
use studycoach_core::events::Event;
use studycoach_core::quiz::QuizSession;
use studycoach_core::stats::{format_duration, motivation, Insight, DEFAULT_DAILY_GOAL_SECS};
use studycoach_core::{Coach, CoachSnapshot};

use super::{parse_session_spec, rng_for};

#[derive(Subcommand)]
pub enum SimulateAction {
    /// Run a whole study day through one coach
    Day {
        /// Comma-separated MINUTES:DISTRACTIONS session specs
        #[arg(long, value_delimiter = ',', required = true)]
        sessions: Vec<String>,
        /// Close the day with a randomly answered quiz
        #[arg(long)]
        quiz: bool,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DayReport {
    events: Vec<Event>,
    snapshot: CoachSnapshot,
    insights: Vec<Insight>,
    quote: String,
}

pub fn run(action: SimulateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SimulateAction::Day {
            sessions,
            quiz,
            seed,
            json,
        } => {
            let mut rng = rng_for(seed);
            let mut coach = Coach::new();
            let mut events = Vec::new();

            for spec in &sessions {
                let result = parse_session_spec(spec)?;
                events.push(coach.complete_session(&result));
            }

            if quiz {
                let mut session = QuizSession::new();
                events.extend(session.begin(&mut rng));
                while session.current_question().is_some() {
                    session.select_answer(rng.gen_range(0..4));
                    events.extend(session.submit());
                    events.extend(session.advance());
                }
                if let Some(result) = session.result() {
                    events.push(coach.complete_quiz(&result));
                }
            }

            let report = DayReport {
                events,
                snapshot: coach.snapshot(),
                insights: coach.insights(),
                quote: motivation(&mut rng).to_string(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }
    Ok(())
}

fn print_report(report: &DayReport) {
    for event in &report.events {
        match event {
            Event::SessionRecorded {
                duration_secs,
                xp,
                coins,
                focus_score,
                ..
            } => println!(
                "Session: {} -> focus {}, +{} XP, +{} coins",
                format_duration(*duration_secs),
                focus_score,
                xp,
                coins
            ),
            Event::QuizRecorded {
                score, xp, coins, ..
            } => println!("Quiz: {score}/10 correct, +{xp} XP, +{coins} coins"),
            _ => {}
        }
    }

    let user = &report.snapshot.user;
    let today = &report.snapshot.today;
    println!(
        "\nLevel {} | {} total XP | {} coins",
        user.level, user.total_xp, user.coins
    );
    println!(
        "Today: {} session(s), {} focused, avg focus {}, goal {}%",
        today.sessions_completed,
        format_duration(today.total_focus_secs),
        today.average_focus_score,
        today.goal_progress(DEFAULT_DAILY_GOAL_SECS)
    );

    println!("\nInsights:");
    for insight in &report.insights {
        println!("  [{}] {}", insight.category.label(), insight.title);
        println!("      {}", insight.description);
    }

    println!("\n\"{}\"", report.quote);
}
