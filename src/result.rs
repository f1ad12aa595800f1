//! Settlement results and the read-only presentation snapshot.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Outcome of a single hand at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie); the bet is returned.
    Push,
    /// Player wins with a natural blackjack at the blackjack payout.
    Blackjack,
}

/// Settlement of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index.
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand (after any double).
    pub bet: usize,
    /// The payout credited back to the bankroll (0 on a loss, the bet on a
    /// push, twice the bet on a win).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

/// Settlement of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand.
    pub hands: Vec<HandResult>,
    /// Total payout credited to the bankroll.
    pub total_payout: usize,
    /// Net bankroll delta for the round (positive = profit).
    pub net: isize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Renders the round outcome as a message for the table display.
    #[must_use]
    pub fn message(&self) -> String {
        let Some(first) = self.hands.first() else {
            return String::new();
        };

        match first.outcome {
            HandOutcome::Blackjack => String::from("You have blackjack! You win!"),
            HandOutcome::Push if self.dealer_blackjack => {
                String::from("Push! Both you and the dealer have blackjack!")
            }
            HandOutcome::Push => String::from("Push! Your bet is returned."),
            HandOutcome::Win if self.dealer_bust => String::from("Dealer busts! You win!"),
            HandOutcome::Win => String::from("You win!"),
            HandOutcome::Lose if self.dealer_blackjack => {
                String::from("Dealer has blackjack! You lose.")
            }
            HandOutcome::Lose if first.player_value > 21 => String::from("Bust! You lose."),
            HandOutcome::Lose => String::from("Dealer wins. You lose."),
        }
    }
}

/// A player hand as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand, in deal order.
    pub cards: Vec<Card>,
    /// The bet riding on the hand.
    pub bet: usize,
}

/// A read-only view of the engine after a transition.
///
/// The dealer fields cover only the face-up cards while the player's turn is
/// active; once the hole card is revealed they cover the full hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player's hands (cards plus bet).
    pub player_hands: Vec<HandView>,
    /// The dealer's face-up cards.
    pub dealer_cards: Vec<Card>,
    /// The player's current hand total.
    pub player_total: u8,
    /// The dealer's visible (or final) total.
    pub dealer_total: u8,
    /// Whether the player turn is currently active.
    pub player_turn_active: bool,
    /// The player's current bankroll.
    pub bankroll: usize,
    /// The outcome message; empty while the round is ongoing.
    pub message: String,
}
