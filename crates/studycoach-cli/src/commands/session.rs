use clap::Subcommand;
use studycoach_core::reward::SessionResult;
use studycoach_core::stats::format_duration;
use studycoach_core::Coach;

use super::{COINS_PER_MINUTE, XP_PER_MINUTE};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record one completed focus session
    Complete {
        /// Session length in minutes
        #[arg(long)]
        minutes: u64,
        /// XP granted by the timer (defaults to the demo rate)
        #[arg(long)]
        xp: Option<u64>,
        /// Coins granted by the timer (defaults to the demo rate)
        #[arg(long)]
        coins: Option<u64>,
        /// Times focus broke during the session
        #[arg(long, default_value = "0")]
        distractions: u32,
        /// Print the event and snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Complete {
            minutes,
            xp,
            coins,
            distractions,
            json,
        } => {
            if minutes == 0 {
                return Err("session length must be positive".into());
            }
            let result = SessionResult {
                duration_secs: minutes * 60,
                xp_earned: xp.unwrap_or(minutes * XP_PER_MINUTE),
                coins_earned: coins.unwrap_or(minutes * COINS_PER_MINUTE),
                distractions,
            };

            let mut coach = Coach::new();
            let event = coach.complete_session(&result);

            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
                println!("{}", serde_json::to_string_pretty(&coach.snapshot())?);
            } else {
                let user = coach.user();
                let today = coach.today();
                println!(
                    "Session recorded: {} with {} distraction(s), focus score {}",
                    format_duration(result.duration_secs),
                    distractions,
                    today.average_focus_score
                );
                println!("  +{} XP, +{} coins", result.xp_earned, result.coins_earned);
                println!(
                    "  Level {} ({} XP into level, {} to next) | {} coins",
                    user.level,
                    user.xp_into_level(),
                    user.xp_for_next_level(),
                    user.coins
                );
            }
        }
    }
    Ok(())
}
