use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studycoach-cli", version, about = "StudyCoach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record completed focus sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Drive a simulated study day through the pipeline
    Simulate {
        #[command(subcommand)]
        action: commands::simulate::SimulateAction,
    },
    /// Quiz runs, samples, and the question bank
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Daily insight report
    Insights(commands::insights::InsightsArgs),
    /// Shop catalog browsing and purchase demos
    Shop {
        #[command(subcommand)]
        action: commands::shop::ShopAction,
    },
    /// Leaderboard standings
    Leaderboard(commands::leaderboard::LeaderboardArgs),
    /// Team directory and local team creation
    Teams {
        #[command(subcommand)]
        action: commands::teams::TeamsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action),
        Commands::Simulate { action } => commands::simulate::run(action),
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Insights(args) => commands::insights::run(args),
        Commands::Shop { action } => commands::shop::run(action),
        Commands::Leaderboard(args) => commands::leaderboard::run(args),
        Commands::Teams { action } => commands::teams::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "studycoach-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
