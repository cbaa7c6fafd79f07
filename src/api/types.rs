//! Draw-results response types
//!
//! Mirrors the JSON the endpoint returns: an array of `{ "data": { "gameByCode": ... } }`
//! envelopes, one per batched query.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// One entry of the batched response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnvelope {
    /// Query result
    pub data: GameData,
}

/// `data` member of a response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    /// The requested game
    pub game_by_code: GameByCode,
}

/// A game and its draws within the requested window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameByCode {
    /// Lottery-side game identifier
    #[serde(default)]
    pub logical_game_identifier: Option<String>,
    /// Draws between the query's start and end dates
    #[serde(default)]
    pub draw_results_between_dates: Vec<DrawResultRecord>,
    /// GraphQL type name
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
}

/// A single draw as reported by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResultRecord {
    /// RFC3339 draw timestamp; empty when the endpoint omits it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub draw_date: String,
    /// Sequence number of the draw
    #[serde(default)]
    pub draw_sequence: u32,
    /// Whether payout data has been published
    #[serde(default)]
    pub has_payout_data: bool,
    /// Drawn numbers; shape depends on the game
    #[serde(default)]
    pub winning_numbers: WinningNumbers,
    /// GraphQL type name
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
}

/// Winning-number record
///
/// Number-array games fill `draw_numbers`; single-ball games fill the named
/// ball fields instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningNumbers {
    /// Plain numeric draw
    #[serde(default)]
    pub draw_numbers: Option<Vec<u32>>,
    /// Powerball value
    #[serde(default)]
    pub powerball: Option<String>,
    /// Power Play multiplier
    #[serde(default)]
    pub powerplay: Option<String>,
    /// Mega Ball value
    #[serde(default)]
    pub megaball: Option<String>,
    /// Megaplier multiplier
    #[serde(default)]
    pub megaplier: Option<String>,
    /// Lucky Ball value
    #[serde(default)]
    pub luckyball: Option<String>,
    /// GraphQL type name
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
}

impl WinningNumbers {
    /// The drawn numbers, or an empty slice for single-ball games
    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        self.draw_numbers.as_deref().unwrap_or_default()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a raw response body into its envelopes
pub fn decode_response(body: &[u8]) -> Result<Vec<GameEnvelope>, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Iterate over every draw in every envelope
pub fn draws(envelopes: &[GameEnvelope]) -> impl Iterator<Item = &DrawResultRecord> {
    envelopes
        .iter()
        .flat_map(|envelope| envelope.data.game_by_code.draw_results_between_dates.iter())
}
