//! The multi-deck shoe cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyShoeError;

/// Remaining-card threshold at or below which the shoe must be replaced
/// before the next round is dealt.
pub const PENETRATION: usize = 52;

/// A shuffled multi-deck shoe.
///
/// The shoe owns its RNG, so cloning yields an independent copy that deals
/// the identical remaining sequence; cloning never reshuffles. Reshuffling
/// replaces the contents with a fresh `decks * 52` set rather than topping
/// up, so the full-deck composition is guaranteed after every reshuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe with the given number of decks, shuffled with the
    /// given seed.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::fresh(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates a shoe with a fixed deal order. The last element of `cards`
    /// is the top of the shoe and is dealt first.
    ///
    /// Intended for deterministic replays and tests; no shuffle is applied.
    /// `decks` only matters if the shoe is later reshuffled.
    #[must_use]
    pub fn from_cards(decks: u8, cards: Vec<Card>) -> Self {
        Self {
            cards,
            decks,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Lays out `decks` full 52-card sets in suit-major, rank-minor order,
    /// then applies one uniform Fisher-Yates shuffle.
    fn fresh(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe is exhausted. The round engine
    /// reshuffles before dealing, so this surfacing mid-round indicates an
    /// internal invariant violation.
    pub fn deal(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns whether the remaining count has reached the penetration
    /// threshold.
    ///
    /// The round engine checks this at round start only; the shoe is never
    /// replaced mid-hand.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() <= PENETRATION
    }

    /// Replaces the contents with a freshly shuffled full set of
    /// `decks * 52` cards.
    pub fn reshuffle(&mut self) {
        self.cards = Self::fresh(self.decks, &mut self.rng);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks this shoe reshuffles to.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}
