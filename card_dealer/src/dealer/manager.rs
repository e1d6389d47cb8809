//! Deck distribution.

use log::{debug, warn};
use rand::{Rng, rngs::StdRng};
use std::{collections::HashSet, fmt, sync::Arc};

use super::{
    config::{DealerConfig, ShuffleSource},
    errors::{DealError, DealResult},
    models::{Deal, PlayerCount},
};
use crate::cards::{DECK_SIZE, Deck, Hand};

/// Shuffle a fresh deck with `rng` and deal it round-robin to `players`.
///
/// The card at shuffled position `i` goes to hand `i % players`, so hand
/// sizes differ by at most one and each hand keeps the shuffle order. With
/// more players than cards the trailing hands are empty.
///
/// # Errors
///
/// Returns `DealError::Irregularity` if the hands do not partition the deck.
pub fn deal<R: Rng + ?Sized>(players: PlayerCount, rng: &mut R) -> DealResult<Deal> {
    let mut deck = Deck::default();
    deck.shuffle(rng);

    let seats = players.get();
    let mut hands = vec![Hand::default(); seats];
    for (position, card) in deck.into_iter().enumerate() {
        hands[position % seats].push(card);
    }

    verify_partition(&hands)?;

    Ok(Deal {
        hands,
        number_of_people: players,
    })
}

/// Every card of the deck must appear exactly once across `hands`.
fn verify_partition(hands: &[Hand]) -> DealResult<()> {
    let dealt: usize = hands.iter().map(Hand::len).sum();
    let distinct = hands.iter().flatten().collect::<HashSet<_>>().len();

    if dealt != DECK_SIZE || distinct != DECK_SIZE {
        return Err(DealError::Irregularity { dealt, distinct });
    }
    Ok(())
}

/// Builds the generator for a single deal.
pub type RngFactory = Arc<dyn Fn() -> DealResult<StdRng> + Send + Sync>;

/// Deals for incoming requests using a configured shuffle source.
#[derive(Clone)]
pub struct Dealer {
    config: DealerConfig,
    rng_factory: Option<RngFactory>,
}

impl Dealer {
    pub fn new(config: DealerConfig) -> Self {
        Self {
            config,
            rng_factory: None,
        }
    }

    /// Dealer that seeds every deal from `factory` instead of the configured
    /// [`ShuffleSource`]. The player cap still comes from `config`.
    pub fn with_rng_factory(config: DealerConfig, factory: RngFactory) -> Self {
        Self {
            config,
            rng_factory: Some(factory),
        }
    }

    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    pub fn shuffle_source(&self) -> ShuffleSource {
        self.config.shuffle_source()
    }

    /// Validate a textual player count and deal.
    ///
    /// # Errors
    ///
    /// Validation errors (`InvalidInput`, `TooManyPlayers`) are returned
    /// before any deck work; `Entropy` and `Irregularity` abort the deal.
    pub fn distribute_raw(&self, raw: &str) -> DealResult<Deal> {
        let players = PlayerCount::parse(raw)?;
        self.distribute(players)
    }

    /// Deal to an already validated player count.
    ///
    /// # Errors
    ///
    /// See [`Dealer::distribute_raw`].
    pub fn distribute(&self, players: PlayerCount) -> DealResult<Deal> {
        if players.get() > self.config.max_players {
            return Err(DealError::TooManyPlayers {
                requested: players.get(),
                max: self.config.max_players,
            });
        }

        let mut rng = self.seed_rng().inspect_err(|e| {
            warn!("Could not seed shuffle: {e}");
        })?;

        let result = deal(players, &mut rng);
        match &result {
            Ok(dealt) => debug!(
                "Dealt {} cards to {} people ({})",
                dealt.total_cards(),
                players,
                self.shuffle_source()
            ),
            Err(e) => warn!("Distribution aborted: {e}"),
        }
        result
    }

    fn seed_rng(&self) -> DealResult<StdRng> {
        match &self.rng_factory {
            Some(factory) => factory(),
            None => self.shuffle_source().rng(),
        }
    }
}

impl fmt::Debug for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dealer")
            .field("config", &self.config)
            .field("custom_rng", &self.rng_factory.is_some())
            .finish()
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DealerConfig::default())
    }
}
