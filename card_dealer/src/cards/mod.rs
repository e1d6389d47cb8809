//! Standard 52-card deck model.
//!
//! Cards are identified by a `"<suit>-<rank>"` token: suit is one of `S`, `H`,
//! `D`, `C` and rank is `A`, `2`..`9`, `X` (ten), `J`, `Q` or `K`.

pub mod display;
pub mod entities;
pub mod errors;

pub use display::parse_hand;
pub use entities::{Card, DECK_SIZE, Deck, HAND_SEPARATOR, Hand, Rank, Suit, TOKEN_SEPARATOR};
pub use errors::CardParseError;
