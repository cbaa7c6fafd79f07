//! Session driver
//!
//! Runs the whole pipeline once: build the query, fetch and decode the draws,
//! keep the Saturday ones, run the interactive session, and print the report
//! the session asked for. Every fatal error is returned to the caller.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::{DateTime, Datelike, TimeZone};
use log::{info, warn};

use crate::api::{GameQuery, decode_response, draws};
use crate::config::Settings;
use crate::core::models::WinningSet;
use crate::core::ports::DrawSource;
use crate::core::services::{filter_draws, find_matches};
use crate::output::{CheckReport, OutputMode, WinningNumbersReport};
use crate::session::{Session, SessionOutcome, banner};

/// Where the driver reads and writes
///
/// Reports go to `out`; banner, usage, and prompts go to `prompt`.
pub struct Console<'a, R> {
    /// Operator input
    pub input: R,
    /// Report output
    pub out: &'a mut dyn Write,
    /// Interactive chatter
    pub prompt: &'a mut dyn Write,
}

impl<R> std::fmt::Debug for Console<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// Fetch, decode, and filter this year's draws
pub fn load_winning_set<S, Tz>(
    source: &S,
    settings: &Settings,
    now: &DateTime<Tz>,
) -> anyhow::Result<WinningSet>
where
    S: DrawSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let query = GameQuery::year_to_date(settings.game_code.as_str(), now);

    let body = source
        .fetch(&query)
        .with_context(|| format!("failed to fetch draw results from {}", source.describe()))?;
    let envelopes = decode_response(&body).context("failed to decode draw results")?;

    let total = draws(&envelopes).count();
    let outcome = filter_draws(draws(&envelopes));
    for skipped in &outcome.skipped {
        warn!("Skipping draw {:?}: {}", skipped.date_key, skipped.reason);
    }
    info!(
        "Fetched {} draws between {} and {}, kept {} Saturday draws",
        total,
        query.variables.start_date_string,
        query.variables.end_date_string,
        outcome.winning_set.len()
    );

    Ok(outcome.winning_set)
}

/// Run one complete session
pub fn run<S, Tz, R>(
    source: &S,
    settings: &Settings,
    now: &DateTime<Tz>,
    console: Console<'_, R>,
    mode: OutputMode,
) -> anyhow::Result<SessionOutcome>
where
    S: DrawSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
    R: BufRead,
{
    let winning_set = load_winning_set(source, settings, now)?;

    let Console { input, out, prompt } = console;
    write!(prompt, "{}", banner(now.year(), &settings.raffle_name))?;

    let outcome = Session::new(&mut *prompt).run(input).context("failed to read input")?;

    match &outcome {
        SessionOutcome::ListAll => {
            WinningNumbersReport::from_set(&winning_set).render(mode, out)?;
        },
        SessionOutcome::Quit => {},
        SessionOutcome::Check(tickets) => {
            let matches = find_matches(tickets, &winning_set);
            info!("{} of {} tickets won", matches.len(), tickets.len());
            CheckReport::new(tickets, &matches).render(mode, out)?;
            write!(prompt, "\n\n")?;
        },
    }
    prompt.flush()?;
    out.flush()?;

    Ok(outcome)
}
