use clap::Subcommand;
use studycoach_core::community::{create_team, team_directory, TeamKind};
use studycoach_core::progression::UserState;
use studycoach_core::Config;

use super::rng_for;

#[derive(Subcommand)]
pub enum TeamsAction {
    /// Browse the team directory
    List {
        /// Print the directory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a team locally, with you as its leader
    Create {
        /// Team name
        name: String,
        /// Make the team invite-only
        #[arg(long)]
        private: bool,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
        /// Print the created team as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TeamsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TeamsAction::List { json } => {
            let teams = team_directory();
            if json {
                println!("{}", serde_json::to_string_pretty(&teams)?);
                return Ok(());
            }
            for team in teams {
                let kind = match team.kind {
                    TeamKind::Private => "private",
                    TeamKind::Public => "public",
                };
                println!(
                    "{:<16} {:<7} {:>2} members, level {:>2}, {:>6} XP, led by {}",
                    team.name, kind, team.member_count, team.level, team.total_xp, team.leader
                );
                println!("  {}", team.description);
            }
        }
        TeamsAction::Create {
            name,
            private,
            description,
            json,
        } => {
            let config = Config::load_or_default();
            let kind = if private {
                TeamKind::Private
            } else {
                TeamKind::Public
            };
            let team = create_team(
                &name,
                kind,
                &description,
                &UserState::new(),
                &config.profile.name,
                &mut rng_for(None),
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&team)?);
                return Ok(());
            }
            println!("Team created: {}", team.name);
            println!("  id: {}", team.id);
            println!("  invite code: {}", team.invite_code);
            println!("  leader: {}", team.members[0].name);
            println!("{}", serde_json::to_string_pretty(&team.created_event())?);
        }
    }
    Ok(())
}
