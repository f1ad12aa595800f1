use crate::error::{EngineError, IllegalActionError};
use crate::hand::HandStatus;

use super::{Action, Game, RoundState};

impl Game {
    /// Applies one player action to the current hand.
    ///
    /// `Hit` draws one card and, on bust, moves on; `Stand` ends the hand;
    /// `Double` doubles the bet, draws exactly one card, and forces a stand.
    /// When no active hand remains the dealer's turn and settlement run
    /// synchronously, so the returned state is already `Resolved`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalActionError`] for an action submitted outside the
    /// player's turn or not valid for the current hand (for example a second
    /// double-down), and [`crate::EmptyShoeError`] if the shoe runs dry
    /// mid-round. Either way the prior state is returned untouched.
    pub fn player_action(&self, action: Action) -> Result<Self, EngineError> {
        if self.state != RoundState::PlayerTurn {
            return Err(IllegalActionError::OutsideTurn.into());
        }

        let mut next = self.clone();

        match action {
            Action::Hit => {
                let card = next.shoe.deal()?;
                next.player.hit(card, next.current_hand)?;

                let busted = next
                    .player
                    .hand(next.current_hand)
                    .is_none_or(|hand| hand.status() != HandStatus::Active);
                if busted {
                    next.advance_hand()?;
                }
            }
            Action::Stand => {
                next.player.stand(next.current_hand)?;
                next.advance_hand()?;
            }
            Action::Double => {
                let card = next.shoe.deal()?;
                next.player.double_down(next.current_hand, card)?;
                next.advance_hand()?;
            }
        }

        Ok(next)
    }

    /// Moves to the next active player hand; when none remains, hands the
    /// round to the dealer.
    fn advance_hand(&mut self) -> Result<(), EngineError> {
        while let Some(hand) = self.player.hand(self.current_hand) {
            if hand.status() == HandStatus::Active {
                return Ok(());
            }
            self.current_hand += 1;
        }

        self.run_dealer_turn()
    }
}
