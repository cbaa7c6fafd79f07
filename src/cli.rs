//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use raffle_checker::config::Settings;
use raffle_checker::output::OutputMode;

/// raffle-checker - check raffle tickets against this year's Saturday draws
#[derive(Parser, Debug)]
#[command(
    name = "raffle-checker",
    version,
    about = "Check raffle ticket numbers against this year's winning draws",
    long_about = "Fetches this year's draw results, then reads ticket numbers from stdin.\n\n\
                  Enter one 3-digit ticket per line and press ENTER on an empty line to check them.\n\
                  At the prompt: A lists every winning number, H shows help, Q quits."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print reports as JSON (prompts go to stderr)
    #[arg(long)]
    pub json: bool,

    /// Load settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the draw-results API endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        settings = settings.with_api_url(api_url);
    }

    commands::check(&settings, output_mode)
}
