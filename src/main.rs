//! launchdeck - Entry Point

use clap::Parser;
use launchdeck::model::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// launchdeck - browse spaceflight launch records in the terminal
#[derive(Parser, Debug)]
#[command(name = "launchdeck")]
#[command(version)]
#[command(about = "TUI application for browsing spaceflight launch records")]
pub struct Args {
    /// Launch API endpoint (overrides config and LAUNCHDECK_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Serve launches from a local JSON array instead of the API
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Start with a mission-name search applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Launches requested per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "launchdeck exited with an error");
            eprintln!("launchdeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = launchdeck::config::load_config_with_precedence(args.config.clone())?;
        let merged = launchdeck::config::merge_config(config_file);
        let with_env = launchdeck::config::apply_env_overrides(merged);
        launchdeck::config::apply_cli_overrides(with_env, args.base_url.clone(), args.page_size)
    };

    let _log_guard = launchdeck::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = launchdeck::source::detect_launch_source(
        args.fixture.clone(),
        &config.base_url,
        config.request_timeout(),
    )?;

    let color = launchdeck::view::ColorConfig::from_env_and_args(args.no_color);
    let cli_args = launchdeck::view::CliArgs::new(config.page_size, args.search, color);

    launchdeck::view::run_with_source(source, cli_args)?;

    Ok(())
}
