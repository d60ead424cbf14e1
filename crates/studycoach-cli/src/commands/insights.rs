use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use studycoach_core::stats::{format_duration, motivation, Insight};
use studycoach_core::Coach;

use super::{parse_session_spec, rng_for};

#[derive(Args)]
pub struct InsightsArgs {
    /// Sessions to fold in first, as comma-separated MINUTES:DISTRACTIONS specs
    #[arg(long, value_delimiter = ',')]
    sessions: Vec<String>,
    /// RNG seed for the closing quote
    #[arg(long)]
    seed: Option<u64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct InsightReport {
    date: NaiveDate,
    insights: Vec<Insight>,
    quote: String,
}

pub fn run(args: InsightsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut coach = Coach::new();
    for spec in &args.sessions {
        let result = parse_session_spec(spec)?;
        coach.complete_session(&result);
    }

    let today = coach.today();
    let report = InsightReport {
        date: today.date,
        insights: coach.insights(),
        quote: motivation(&mut rng_for(args.seed)).to_string(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Insights for {} ({} session(s), {} focused)\n",
        report.date,
        today.sessions_completed,
        format_duration(today.total_focus_secs)
    );
    for insight in &report.insights {
        println!("[{}] {}", insight.category.label(), insight.title);
        println!("  {}", insight.description);
        println!("  Tip: {}\n", insight.tip);
    }
    println!("\"{}\"", report.quote);
    Ok(())
}
