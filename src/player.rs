//! Round participants: the betting player and the house dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{EmptyShoeError, IllegalActionError, InvalidBetError};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::shoe::Shoe;

/// The betting participant: one or more hands and a bankroll.
///
/// The bankroll is debited when a bet is placed or a hand doubles, and
/// credited at settlement. The engine currently deals a single hand per
/// round; all hand operations take an index so the layout stays ready for
/// splits.
#[derive(Debug, Clone)]
pub struct Player {
    hands: Vec<Hand>,
    bankroll: usize,
}

impl Player {
    /// Creates a player with the given starting bankroll and no hands.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            hands: Vec::new(),
            bankroll,
        }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Adds a settled payout to the bankroll.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at the given index.
    #[must_use]
    pub fn hand(&self, hand_index: usize) -> Option<&Hand> {
        self.hands.get(hand_index)
    }

    /// Discards all hands. Called at the start of each betting phase; the
    /// next [`Self::place_bet`] creates the round's hand.
    pub fn clear_hands(&mut self) {
        self.hands.clear();
    }

    /// Places a bet, creating a new empty hand carrying it.
    ///
    /// The bet is debited from the bankroll immediately.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBetError`] if the amount is below the table minimum
    /// or above the bankroll; nothing is debited on rejection.
    pub fn place_bet(&mut self, amount: usize, minimum: usize) -> Result<(), InvalidBetError> {
        if amount < minimum {
            return Err(InvalidBetError::BelowMinimum { amount, minimum });
        }
        if amount > self.bankroll {
            return Err(InvalidBetError::ExceedsBankroll {
                amount,
                bankroll: self.bankroll,
            });
        }

        self.bankroll -= amount;
        self.hands.push(Hand::new(amount));
        Ok(())
    }

    /// Appends a dealt card to the specified hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist or is no longer active.
    pub fn hit(&mut self, card: Card, hand_index: usize) -> Result<(), IllegalActionError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(IllegalActionError::HandNotFound)?;

        if hand.status() != HandStatus::Active {
            return Err(IllegalActionError::HandNotActive);
        }

        hand.add_card(card);
        Ok(())
    }

    /// Marks the specified hand as standing.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist or is no longer active.
    pub fn stand(&mut self, hand_index: usize) -> Result<(), IllegalActionError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(IllegalActionError::HandNotFound)?;

        if hand.status() != HandStatus::Active {
            return Err(IllegalActionError::HandNotActive);
        }

        hand.set_status(HandStatus::Stand);
        Ok(())
    }

    /// Doubles down on the specified hand: re-debits the original bet,
    /// doubles it, takes exactly one card, and forces the hand to stand
    /// unless it busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, is not active, is not an
    /// untouched two-card hand, has already doubled, or the bankroll cannot
    /// cover the additional bet.
    pub fn double_down(&mut self, hand_index: usize, card: Card) -> Result<(), IllegalActionError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(IllegalActionError::HandNotFound)?;

        if hand.status() != HandStatus::Active {
            return Err(IllegalActionError::HandNotActive);
        }
        if !hand.can_double() {
            return Err(IllegalActionError::CannotDouble);
        }

        let bet = hand.bet();
        if self.bankroll < bet {
            return Err(IllegalActionError::InsufficientBankroll);
        }

        self.bankroll -= bet;
        hand.double_bet();
        hand.add_card(card);

        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        Ok(())
    }

    /// Returns whether the specified hand is a natural blackjack.
    #[must_use]
    pub fn has_blackjack(&self, hand_index: usize) -> bool {
        self.hands
            .get(hand_index)
            .is_some_and(|hand| hand.status() == HandStatus::Blackjack)
    }

    /// Returns whether any hand is still standing (not busted and not a
    /// natural), which is what obliges the dealer to draw.
    #[must_use]
    pub fn any_standing_hand(&self) -> bool {
        self.hands
            .iter()
            .any(|hand| matches!(hand.status(), HandStatus::Stand | HandStatus::Active))
    }
}

/// The house dealer: a single hand with a hole card and no bankroll.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: DealerHand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: DealerHand::new(),
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &DealerHand {
        &self.hand
    }

    /// Appends a dealt card. The second card is the hole card.
    pub fn take_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hand.reveal_hole();
    }

    /// Clears the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Returns whether the dealer holds a natural blackjack.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns the total of the dealer's face-up cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        self.hand.visible_value()
    }

    /// Draws from the shoe until the house rule says stop: stand at hard 17
    /// or anything above, hit below 17, and hit soft 17 unless
    /// `stand_on_soft_17` is set. Returns the drawn cards.
    ///
    /// The hole card must already be revealed; this only plays out the draw.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe runs out while the dealer must
    /// draw.
    pub fn auto_play(
        &mut self,
        shoe: &mut Shoe,
        stand_on_soft_17: bool,
    ) -> Result<Vec<Card>, EmptyShoeError> {
        let mut drawn = Vec::new();

        loop {
            let value = self.hand.value();
            let is_soft = self.hand.is_soft();

            if value > 17 {
                break;
            }
            if value == 17 && (!is_soft || stand_on_soft_17) {
                break;
            }

            let card = shoe.deal()?;
            self.hand.add_card(card);
            drawn.push(card);
        }

        Ok(drawn)
    }
}
