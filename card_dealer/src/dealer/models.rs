//! Dealer models.

use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroUsize, str::FromStr};

use super::errors::DealError;
use crate::cards::Hand;

/// Validated number of players, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct PlayerCount(NonZeroUsize);

impl PlayerCount {
    /// Parse a textual player count.
    ///
    /// Surrounding whitespace is ignored. Anything other than a positive
    /// base-10 integer is rejected, including `"4.0"`, `"+4"` and `"0x4"`.
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidInput` if `raw` is not a positive integer.
    pub fn parse(raw: &str) -> Result<Self, DealError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DealError::InvalidInput(raw.to_string()));
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| DealError::InvalidInput(raw.to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for PlayerCount {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for PlayerCount {
    type Error = DealError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| DealError::InvalidInput(value.to_string()))
    }
}

impl From<NonZeroUsize> for PlayerCount {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.get()
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one distribution: the hands plus the echoed player count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub number_of_people: PlayerCount,
}

impl Deal {
    /// One comma-joined token string per player, in seat order.
    pub fn distributed_cards(&self) -> Vec<String> {
        self.hands.iter().map(Hand::token_string).collect()
    }

    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::len).collect()
    }

    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }
}
