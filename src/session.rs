//! Interactive ticket-entry session
//!
//! A line-driven state machine with a single waiting state. Each line either
//! keeps the session waiting (help, ticket entry, rejected input) or finishes
//! it with a [`SessionOutcome`] for the caller to act on.
//!
//! | Line            | Effect                                   |
//! |-----------------|------------------------------------------|
//! | `A` / `a`       | finish with [`SessionOutcome::ListAll`]  |
//! | `Q` / `q`       | print `Goodbye!`, finish with `Quit`     |
//! | `H` / `h`       | reprint usage, keep waiting              |
//! | blank / EOF     | finish with `Check(tickets)`             |
//! | anything else   | validate as a ticket, keep waiting       |

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::models::{Ticket, TicketError};

/// Usage text shown at start and on `H`
pub const USAGE: &str = "[*] Usage: \n\
[*] A: Shows all winning numbers and draw dates for the lottery as of today.\n\
[*] Q: Exits the program immediately.\n\
[*] H: Shows this help menu.\n\
[*]\n\
[*]\n\
[*] Checking your numbers: \n\
[*] \tSearching the database to see if you have a winning number is easy.\n\
[*] \tEnter each of your numbers 1 at a time, followed by pressing ENTER.\n\
[*] \tWhen you are finished entering your numbers, press the ENTER to proceed.\n\n";

/// Prompt printed after the usage text
pub const PROMPT: &str =
    "\n[*] Enter a number, or enter 'A' to view all numbers.\n[*] Press ENTER when finished.";

/// Printed after a ticket is accepted
pub const NEXT_PROMPT: &str = "[*] Enter your next number, or press ENTER to search the database.";

/// Printed on `Q`
pub const FAREWELL: &str = "Goodbye!";

const NOT_NUMERIC_HINT: &str = "[*] Oops, you typed a letter or a space.  Your ticket number \
should be a 3 digit number. Enter each 3 digit number once and without spaces. \n\
[*] Type 'H' for help, or enter a valid ticket number.";

const WRONG_LENGTH_HINT: &str = "[*] Um, that's not quite right. Your ticket number should be \
a 3 digit number. \n[*] Type 'H' for help, or enter a valid ticket number.";

/// Start-of-session banner naming this year's raffle
#[must_use]
pub fn banner(year: i32, raffle_name: &str) -> String {
    format!(
        "[*][*][*]\n\
         This tool was created to check your raffle ticket number(s) against the winning \
         numbers in the \n\
         {year} {raffle_name}.\n\
         [*][*][*]\n\n"
    )
}

/// A line of operator input, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// List every winning number
    ListAll,
    /// Leave immediately
    Quit,
    /// Show usage again
    Help,
    /// Stop entering tickets and check them
    Finish,
    /// Candidate ticket number
    Entry(&'a str),
}

impl<'a> Command<'a> {
    /// Classify one input line (without its terminator)
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line {
            "" => Self::Finish,
            "A" | "a" => Self::ListAll,
            "Q" | "q" => Self::Quit,
            "H" | "h" => Self::Help,
            other => Self::Entry(other),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operator asked for every winning number
    ListAll,
    /// The operator quit
    Quit,
    /// The operator finished entering tickets
    Check(Vec<Ticket>),
}

/// Session state after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Waiting for the next line
    AwaitingInput,
    /// Terminal: the session is over
    Finished(SessionOutcome),
}

/// Ticket-entry session writing prompts to `out`
#[derive(Debug)]
pub struct Session<W> {
    out: W,
    tickets: Vec<Ticket>,
}

impl<W: Write> Session<W> {
    /// Create a session with no tickets
    pub const fn new(out: W) -> Self {
        Self {
            out,
            tickets: Vec::new(),
        }
    }

    /// Tickets accepted so far
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Print the usage text and the first prompt
    pub fn print_usage(&mut self) -> io::Result<()> {
        write!(self.out, "{USAGE}")?;
        writeln!(self.out, "{PROMPT}")
    }

    /// Feed one line to the state machine; `None` means end of input
    pub fn step(&mut self, line: Option<&str>) -> io::Result<State> {
        let command = line.map_or(Command::Finish, Command::parse);

        match command {
            Command::ListAll => Ok(State::Finished(SessionOutcome::ListAll)),
            Command::Quit => {
                writeln!(self.out, "{FAREWELL}")?;
                Ok(State::Finished(SessionOutcome::Quit))
            },
            Command::Help => {
                self.print_usage()?;
                Ok(State::AwaitingInput)
            },
            Command::Finish => {
                if line.is_some() {
                    writeln!(self.out)?;
                }
                Ok(State::Finished(SessionOutcome::Check(std::mem::take(&mut self.tickets))))
            },
            Command::Entry(entry) => {
                match Ticket::parse(entry) {
                    Ok(ticket) => {
                        debug!("Accepted ticket {ticket}");
                        self.tickets.push(ticket);
                        writeln!(self.out, "{NEXT_PROMPT}")?;
                    },
                    Err(TicketError::NotNumeric(_)) => writeln!(self.out, "{NOT_NUMERIC_HINT}")?,
                    Err(TicketError::WrongLength(_)) => writeln!(self.out, "{WRONG_LENGTH_HINT}")?,
                }
                Ok(State::AwaitingInput)
            },
        }
    }

    /// Print usage, then read lines until the session finishes
    ///
    /// Lines that are not valid UTF-8 are decoded lossily, so they are
    /// rejected as non-numeric entries rather than ending the session.
    pub fn run<R: BufRead>(mut self, mut input: R) -> io::Result<SessionOutcome> {
        self.print_usage()?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            let line = if input.read_until(b'\n', &mut raw)? == 0 {
                None
            } else {
                Some(decode_line(&raw))
            };
            if let State::Finished(outcome) = self.step(line.as_deref())? {
                return Ok(outcome);
            }
        }
    }
}

/// Strip `\n` or `\r\n` and decode the rest
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
