use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "hikescout")]
#[command(about = "Find this weekend's guided hikes across operator websites")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every configured site and print the hike report (default)
    Run(RunArgs),
    /// List the configured sites and the strategy used for each
    Sites {
        /// YAML sites file; overrides HIKESCOUT_SITES_PATH
        #[arg(long)]
        sites: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Args)]
struct RunArgs {
    /// YAML sites file; overrides HIKESCOUT_SITES_PATH
    #[arg(long)]
    sites: Option<PathBuf>,

    /// File holding the target date phrase; overrides HIKESCOUT_DATES_PATH
    #[arg(long)]
    dates: Option<PathBuf>,
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match hikescout_core::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            if init_tracing("info").is_ok() {
                tracing::error!(error = %e, "failed to load configuration");
            } else {
                eprintln!("failed to load configuration: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("invalid log filter '{}': {e}", config.log_level);
        return ExitCode::FAILURE;
    }

    let outcome = match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            run::run_scrape(&config, args.sites.as_deref(), args.dates.as_deref()).await
        }
        Commands::Sites { sites } => run::list_sites(&config, sites.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
