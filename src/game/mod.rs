//! The round state machine.
//!
//! [`Game`] is an owned value: every transition ([`Game::submit_bet`],
//! [`Game::player_action`]) clones the current state, mutates the clone, and
//! returns it. A rejected intent returns an error and leaves the original
//! untouched, so the shoe, hands, and bankroll can never be partially
//! mutated.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::{HandView, RoundResult, Snapshot};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, RoundState};

/// A single-player blackjack round engine.
///
/// The engine owns the shoe, the player, and the dealer, and advances one
/// synchronous intent at a time. Construct it once per session; each
/// accepted bet starts a new round over the same shoe and bankroll.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table configuration.
    pub options: GameOptions,
    /// The shoe cards are dealt from.
    pub shoe: Shoe,
    /// The betting player.
    pub player: Player,
    /// The house dealer.
    pub dealer: Dealer,
    /// Current round state.
    pub state: RoundState,
    /// Index of the player hand currently awaiting an action.
    pub current_hand: usize,
    /// Outcome message of the last settled round; empty while a round is
    /// ongoing.
    pub message: String,
    /// Structured settlement of the last round, if any.
    pub outcome: Option<RoundResult>,
}

impl Game {
    /// Creates a new engine with the given table options, starting
    /// bankroll, and shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 1000, 42);
    /// assert_eq!(game.player.bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, bankroll: usize, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);

        Self {
            options,
            shoe,
            player: Player::new(bankroll),
            dealer: Dealer::new(),
            state: RoundState::Betting,
            current_hand: 0,
            message: String::new(),
            outcome: None,
        }
    }

    /// Returns the settlement of the last round, if one has resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<&RoundResult> {
        self.outcome.as_ref()
    }

    /// Builds the read-only view the presentation layer renders after every
    /// transition.
    ///
    /// The dealer's hole card is excluded while the player's turn is active
    /// and included once it has been revealed.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let player_hands: Vec<HandView> = self
            .player
            .hands()
            .iter()
            .map(|hand| HandView {
                cards: hand.cards().to_vec(),
                bet: hand.bet(),
            })
            .collect();

        let current = self
            .player
            .hand(self.current_hand)
            .or_else(|| self.player.hand(0));

        Snapshot {
            player_hands,
            dealer_cards: self.dealer.hand().visible_cards().to_vec(),
            player_total: current.map_or(0, Hand::value),
            dealer_total: self.dealer.visible_value(),
            player_turn_active: self.state == RoundState::PlayerTurn,
            bankroll: self.player.bankroll(),
            message: self.message.clone(),
        }
    }
}
