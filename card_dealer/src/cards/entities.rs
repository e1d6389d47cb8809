use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::CardParseError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Separator between the suit and rank symbols of a card token.
pub const TOKEN_SEPARATOR: char = '-';

/// Separator between card tokens of a hand string.
pub const HAND_SEPARATOR: char = ',';

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// Suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub fn symbol(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Heart => 'H',
            Self::Diamond => 'D',
            Self::Club => 'C',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "S" => Some(Self::Spade),
            "H" => Some(Self::Heart),
            "D" => Some(Self::Diamond),
            "C" => Some(Self::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank value, ace=1 ... king=13.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Returns `None` outside of 1..=13.
    pub fn new(value: u8) -> Option<Self> {
        (1..=13).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Ranks in deck construction order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1u8..=13).map(Rank)
    }

    pub fn symbol(self) -> char {
        match self.0 {
            1 => 'A',
            10 => 'X',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            // 2..=9 are single digits
            v => char::from(b'0' + v),
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "A" => Some(Self::ACE),
            "X" => Some(Self::TEN),
            "J" => Some(Self::JACK),
            "Q" => Some(Self::QUEEN),
            "K" => Some(Self::KING),
            s if s.len() == 1 => s
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .map(Self),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card. Serialized as its `"<suit>-<rank>"` token, e.g. `S-A`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{TOKEN_SEPARATOR}{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = token
            .split_once(TOKEN_SEPARATOR)
            .ok_or_else(|| CardParseError::MalformedToken(token.to_string()))?;
        let suit = Suit::from_symbol(suit).ok_or_else(|| CardParseError::UnknownSuit(suit.to_string()))?;
        let rank = Rank::from_symbol(rank).ok_or_else(|| CardParseError::UnknownRank(rank.to_string()))?;
        Ok(Self { suit, rank })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

/// The cards assigned to one player, in dealing order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined card tokens; an empty hand yields an empty string.
    pub fn token_string(&self) -> String {
        self.0
            .iter()
            .map(Card::token)
            .collect::<Vec<_>>()
            .join(&HAND_SEPARATOR.to_string())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fisher-Yates shuffle driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    /// Spades, hearts, diamonds then clubs, each ace through king.
    fn default() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
