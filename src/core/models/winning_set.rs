//! The set of winning Saturday draws
//!
//! Keyed by the draw date string exactly as the endpoint sent it. RFC3339
//! strings from one source sort lexicographically in date order, so iteration
//! order is chronological.

use std::collections::BTreeMap;

use super::draw::WinningDraw;

/// Winning draws keyed by their original RFC3339 date string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinningSet {
    draws: BTreeMap<String, WinningDraw>,
}

impl WinningSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draws: BTreeMap::new(),
        }
    }

    /// Insert a draw; a later draw with the same key replaces the earlier one
    pub fn insert(&mut self, date_key: impl Into<String>, draw: WinningDraw) -> Option<WinningDraw> {
        self.draws.insert(date_key.into(), draw)
    }

    /// Look up a draw by its date key
    #[must_use]
    pub fn get(&self, date_key: &str) -> Option<&WinningDraw> {
        self.draws.get(date_key)
    }

    /// Number of draws
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Whether there are no draws
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Draws in ascending date-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WinningDraw)> {
        self.draws.iter().map(|(key, draw)| (key.as_str(), draw))
    }
}

impl<'a> IntoIterator for &'a WinningSet {
    type Item = (&'a String, &'a WinningDraw);
    type IntoIter = std::collections::btree_map::Iter<'a, String, WinningDraw>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}
