//! Dealer error types.

use thiserror::Error;

/// Message shown to users for any rejected player count.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid input.";

/// Message shown to users when dealing fails for operational reasons.
pub const OPERATIONAL_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Dealer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// Player count is missing, non-numeric, fractional, zero or negative
    #[error("Invalid number of people: {0}")]
    InvalidInput(String),

    /// Player count is above the configured cap
    #[error("Too many people: requested {requested}, maximum {max}")]
    TooManyPlayers { requested: usize, max: usize },

    /// OS entropy source failed while seeding the shuffle
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    /// Dealt hands do not partition the deck
    #[error("Irregular distribution: {dealt} cards dealt, {distinct} distinct")]
    Irregularity { dealt: usize, distinct: usize },
}

impl DealError {
    /// Whether the caller supplied bad input, as opposed to an internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DealError::InvalidInput(_) | DealError::TooManyPlayers { .. }
        )
    }

    /// HTTP-style status code: 400 for validation failures, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        if self.is_validation() { 400 } else { 500 }
    }

    /// Get a client-safe error message
    ///
    /// Internal details (entropy errors, card counts) are never exposed.
    pub fn client_message(&self) -> &'static str {
        if self.is_validation() {
            INVALID_INPUT_MESSAGE
        } else {
            OPERATIONAL_ERROR_MESSAGE
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DealError::InvalidInput(_) => "invalid_input",
            DealError::TooManyPlayers { .. } => "too_many_players",
            DealError::Entropy(_) => "entropy",
            DealError::Irregularity { .. } => "irregularity",
        }
    }
}

/// Result type for dealer operations
pub type DealResult<T> = Result<T, DealError>;
