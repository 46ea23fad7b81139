use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "networth-cli", version, about = "Net-worth target countdown CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live countdown to a target date
    Countdown(commands::countdown::CountdownArgs),
    /// Calendar breakdown between two timestamps
    Diff(commands::calc::DiffArgs),
    /// Add calendar months to a timestamp
    AddMonths(commands::calc::AddMonthsArgs),
    /// Projection results returned by the server
    Projection {
        #[command(subcommand)]
        action: commands::projection::ProjectionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("NETWORTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown(args) => commands::countdown::run(args),
        Commands::Diff(args) => commands::calc::run_diff(args),
        Commands::AddMonths(args) => commands::calc::run_add_months(args),
        Commands::Projection { action } => commands::projection::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
