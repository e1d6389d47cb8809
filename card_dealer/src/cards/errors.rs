//! Card token parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Token is not of the form `<suit>-<rank>`
    #[error("Malformed card token: {0:?}")]
    MalformedToken(String),

    #[error("Unknown suit symbol: {0:?}")]
    UnknownSuit(String),

    #[error("Unknown rank symbol: {0:?}")]
    UnknownRank(String),
}
