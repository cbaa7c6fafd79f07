//! Output formatting for human and JSON modes
//!
//! This module provides structured reports that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Ticket, WinningSet};
use crate::core::services::MatchResult;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Every winning draw, oldest first
#[derive(Debug, Serialize)]
pub struct WinningNumbersReport {
    /// One line per draw
    pub draws: Vec<DrawLine>,
}

/// A winning draw as listed by [`WinningNumbersReport`]
#[derive(Debug, Serialize)]
pub struct DrawLine {
    /// RFC3339 date string from the API
    pub date_key: String,
    /// Date as shown to the operator
    pub date: String,
    /// Draw sequence number
    pub sequence: u32,
    /// Drawn numbers
    pub numbers: [u32; 3],
    /// Numbers concatenated without separators
    pub combination: String,
}

/// Outcome of checking the entered tickets
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Tickets that were checked
    pub tickets: Vec<Ticket>,
    /// Whether any ticket won
    pub won: bool,
    /// Winning tickets, oldest draw first
    pub matches: Vec<MatchLine>,
}

/// A winning ticket as listed by [`CheckReport`]
#[derive(Debug, Serialize)]
pub struct MatchLine {
    /// RFC3339 date string of the draw
    pub date_key: String,
    /// Draw date as shown to the operator
    pub date: String,
    /// The winning ticket
    pub ticket: Ticket,
}

impl WinningNumbersReport {
    /// Build the report from a winning set
    #[must_use]
    pub fn from_set(winning_set: &WinningSet) -> Self {
        let draws = winning_set
            .iter()
            .map(|(date_key, draw)| DrawLine {
                date_key: date_key.to_string(),
                date: draw.display_date(),
                sequence: draw.sequence,
                numbers: draw.combination.numbers(),
                combination: draw.combination.concatenated(),
            })
            .collect();
        Self { draws }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => render_json(self, out),
        }
    }

    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The winning numbers are:")?;
        for line in &self.draws {
            writeln!(out, "{}  --|--> {}", line.date, line.combination)?;
        }
        Ok(())
    }
}

impl CheckReport {
    /// Build the report from the checked tickets and their matches
    #[must_use]
    pub fn new(tickets: &[Ticket], matches: &MatchResult) -> Self {
        let matches: Vec<MatchLine> = matches
            .iter()
            .map(|(date_key, m)| MatchLine {
                date_key: date_key.clone(),
                date: m.draw.display_date(),
                ticket: m.ticket.clone(),
            })
            .collect();

        Self {
            tickets: tickets.to_vec(),
            won: !matches.is_empty(),
            matches,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => render_json(self, out),
        }
    }

    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.matches.is_empty() {
            writeln!(out, "\n\t\t    ¯\\_(ツ)_/¯   ")?;
            return writeln!(out, "\t{}", "~~~You have no winning numbers!~~~".yellow());
        }

        if self.matches.len() > 1 {
            writeln!(out, "\t{}", "~~~~~Wowsers, you won multiple times!!~~~~~".bold())?;
        }
        writeln!(out, "\t\t{}", "~~~~~Congratulations!~~~~~".green().bold())?;
        for m in &self.matches {
            writeln!(out, "\t[!] Your ticket #{} won on {}!", m.ticket, m.date)?;
        }
        Ok(())
    }
}

fn render_json<T: Serialize>(report: &T, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(report).unwrap_or_default())
}
