//! Draw-results query payload
//!
//! The endpoint speaks GraphQL over a batched transport: the body is a JSON
//! array holding one query object.

use std::fmt::Display;

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone};
use serde::Serialize;

/// Operation name sent alongside the query
pub const OPERATION_NAME: &str = "Game";

/// Query selecting every draw of one game between two dates
pub const GAME_QUERY: &str = "query Game($gameCode: String!, $startDateString: String!, \
$endDateString: String!) {
  gameByCode(code: $gameCode) {
    logicalGameIdentifier
    drawResultsBetweenDates(startDateString: $startDateString, endDateString: $endDateString) {
      drawDate
      drawSequence
      hasPayoutData
      winningNumbers {
        drawNumbers
        powerball
        powerplay
        megaball
        megaplier
        luckyball
        __typename
      }
      __typename
    }
    __typename
  }
}
";

/// Hour of day used for the January 1 start bound
const START_HOUR: u32 = 10;

/// Inclusive range of draw dates, as RFC3339 strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Start of the range
    pub start: String,
    /// End of the range
    pub end: String,
}

impl DateRange {
    /// January 1 of `now`'s year (10:00, same time zone) through `now`
    #[must_use]
    pub fn year_to_date<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        // A skipped local hour on Jan 1 is not expected; fall back to `now`.
        let start = now
            .timezone()
            .with_ymd_and_hms(now.year(), 1, 1, START_HOUR, 0, 0)
            .earliest()
            .unwrap_or_else(|| now.clone());

        Self {
            start: start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Variables bound into [`GAME_QUERY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVariables {
    /// Game identifier on the lottery side
    pub game_code: String,
    /// RFC3339 start bound
    pub start_date_string: String,
    /// RFC3339 end bound
    pub end_date_string: String,
}

/// One GraphQL request for a game's draw results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQuery {
    /// GraphQL document
    pub query: String,
    /// Bound variables
    pub variables: GameVariables,
    /// Operation to run from the document
    pub operation_name: String,
}

impl GameQuery {
    /// Build the query for `game_code` over `range`
    #[must_use]
    pub fn new(game_code: impl Into<String>, range: DateRange) -> Self {
        Self {
            query: GAME_QUERY.to_string(),
            variables: GameVariables {
                game_code: game_code.into(),
                start_date_string: range.start,
                end_date_string: range.end,
            },
            operation_name: OPERATION_NAME.to_string(),
        }
    }

    /// Build the year-to-date query for `game_code`
    #[must_use]
    pub fn year_to_date<Tz: TimeZone>(game_code: impl Into<String>, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self::new(game_code, DateRange::year_to_date(now))
    }

    /// Batched request body: a one-element JSON array
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!([self])
    }
}
