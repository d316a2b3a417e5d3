use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use crossrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for crossrate::AppCommand {
    fn from(cmd: Commands) -> crossrate::AppCommand {
        match cmd {
            Commands::Currencies => crossrate::AppCommand::Currencies,
            Commands::Crosses => crossrate::AppCommand::Crosses,
            Commands::Rates { json } => crossrate::AppCommand::Rates { json },
            Commands::Convert {
                cross,
                currency,
                amount,
            } => crossrate::AppCommand::Convert {
                cross,
                currency,
                amount,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List configured currencies
    Currencies,
    /// Display all currency crosses and their rates
    Crosses,
    /// Display specified exchange rates
    Rates {
        /// Print rates as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount using a cross rate
    Convert {
        /// Cross to convert with, e.g. USDEUR
        #[arg(long)]
        cross: String,
        /// Currency the amount is expressed in
        #[arg(long)]
        currency: String,
        /// Amount to convert
        #[arg(long)]
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let result = match cli.command {
        Some(Commands::Setup) => crossrate::cli::setup::setup(),
        Some(cmd) => crossrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
