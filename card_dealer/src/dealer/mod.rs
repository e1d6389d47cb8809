//! Dealer: validates a player count, shuffles a fresh deck and deals it.
//!
//! ## Example
//!
//! ```
//! use card_dealer::dealer::{Dealer, DealerConfig};
//!
//! let dealer = Dealer::new(DealerConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! });
//!
//! let dealt = dealer.distribute_raw("4").unwrap();
//! assert_eq!(dealt.hand_sizes(), vec![13, 13, 13, 13]);
//!
//! let err = dealer.distribute_raw("0").unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! ```

pub mod config;
pub mod errors;
pub mod manager;
pub mod models;

pub use config::{DEFAULT_MAX_PLAYERS, DealerConfig, ShuffleSource};
pub use errors::{DealError, DealResult, INVALID_INPUT_MESSAGE, OPERATIONAL_ERROR_MESSAGE};
pub use manager::{Dealer, RngFactory, deal};
pub use models::{Deal, PlayerCount};
