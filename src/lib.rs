//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] value that manages one round at a time:
//! betting, the initial deal, the player's turn, dealer auto-play, and
//! payout settlement against the bankroll. Every transition is a pure step
//! `(state, intent) -> Result<new state, error>`: the prior [`Game`] is
//! never mutated, and a rejected bet or action leaves it fully intact.
//!
//! The presentation layer stays outside the engine; after each transition it
//! renders the [`Snapshot`] the engine derives (hands, totals, bankroll, and
//! the outcome message).
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 1000, 42);
//! let game = game.submit_bet(15).expect("bet within table limits");
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.player_hands[0].cards.len(), 2);
//! assert_eq!(snapshot.dealer_cards.len() < 2, !game.dealer.hand().is_hole_revealed());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{EmptyShoeError, EngineError, IllegalActionError, InvalidBetError};
pub use game::{Action, Game, RoundState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{GameOptions, RoundingMode};
pub use player::{Dealer, Player};
pub use result::{HandOutcome, HandResult, HandView, RoundResult, Snapshot};
pub use shoe::{PENETRATION, Shoe};
