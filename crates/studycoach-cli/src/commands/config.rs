use clap::Subcommand;
use studycoach_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Set the profile display name
    SetName {
        /// New display name
        name: String,
    },
    /// Set the daily focus goal in minutes
    SetGoal {
        /// Goal in minutes
        minutes: u64,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetName { name } => {
            let mut config = Config::load()?;
            config.set_name(&name)?;
            println!("ok");
        }
        ConfigAction::SetGoal { minutes } => {
            let mut config = Config::load()?;
            config.set_daily_goal_minutes(minutes)?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
