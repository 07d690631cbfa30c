use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tomatin", version, about = "Tomatin Pomodoro timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer in the foreground
    Run {
        /// Stop after this many completed phases
        #[arg(long)]
        phases: Option<u32>,
    },
    /// Print current timer state as JSON
    Status,
    /// Timer mode management
    Mode {
        #[command(subcommand)]
        action: commands::mode::ModeAction,
    },
    /// All-time statistics
    Stats,
    /// Alarm sound settings
    Sound {
        #[command(subcommand)]
        action: commands::sound::SoundAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { phases } => commands::run::run(phases),
        Commands::Status => commands::status::run(),
        Commands::Mode { action } => commands::mode::run(action),
        Commands::Stats => commands::stats::run(),
        Commands::Sound { action } => commands::sound::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
