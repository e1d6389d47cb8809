//! # Card Dealer
//!
//! Shuffles a standard 52-card deck and deals it round-robin to a number of
//! players.
//!
//! ## Core Modules
//!
//! - [`cards`]: Suits, ranks, cards, hands, the deck and display mapping
//! - [`dealer`]: Player count validation, shuffle source and distribution
//!
//! ## Example
//!
//! ```
//! use card_dealer::{PlayerCount, deal};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let players = PlayerCount::parse("3").unwrap();
//! let dealt = deal(players, &mut StdRng::seed_from_u64(1)).unwrap();
//!
//! assert_eq!(dealt.hand_sizes(), vec![18, 17, 17]);
//! assert_eq!(dealt.total_cards(), 52);
//! ```

/// Card, hand and deck entities.
pub mod cards;
pub use cards::{Card, DECK_SIZE, Deck, Hand, Rank, Suit};

/// Player count validation and deck distribution.
pub mod dealer;
pub use dealer::{Deal, DealError, DealResult, Dealer, DealerConfig, PlayerCount, RngFactory, ShuffleSource, deal};
