use clap::Args;
use studycoach_core::community::{standings_for, weekly_standings_for};
use studycoach_core::progression::UserState;
use studycoach_core::Config;

#[derive(Args)]
pub struct LeaderboardArgs {
    /// Rank by this week's XP instead of lifetime XP
    #[arg(long)]
    weekly: bool,
    /// Print the standings as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: LeaderboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let user = UserState::new();
    let rows = if args.weekly {
        weekly_standings_for(&user, &config.profile.name)
    } else {
        standings_for(&user, &config.profile.name)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:>2} {:<20} {:>5} {:>7} {:>6} {:>7}",
        "#", "Name", "Level", "XP", "Streak", "Weekly"
    );
    for row in rows {
        println!(
            "{:>2} {:<20} {:>5} {:>7} {:>6} {:>7}  {}",
            row.rank, row.name, row.level, row.total_xp, row.streak, row.weekly_xp, row.country
        );
    }
    Ok(())
}
