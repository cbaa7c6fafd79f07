//! Check command - fetch draws and run the interactive ticket session

use std::io;

use raffle_checker::adapters::HttpDrawSource;
use raffle_checker::config::Settings;
use raffle_checker::output::OutputMode;
use raffle_checker::runner::{self, Console};

/// Run one interactive session against the configured API
pub fn check(settings: &Settings, output_mode: OutputMode) -> anyhow::Result<()> {
    let source = HttpDrawSource::new(settings.api_url.as_str())?;
    let now = chrono::Local::now();

    let stdin = io::stdin();
    let mut out = io::stdout();
    // Keep stdout parseable in JSON mode.
    let mut prompt: Box<dyn io::Write> = if output_mode == OutputMode::Json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    runner::run(
        &source,
        settings,
        &now,
        Console {
            input: stdin.lock(),
            out: &mut out,
            prompt: prompt.as_mut(),
        },
        output_mode,
    )?;

    Ok(())
}
