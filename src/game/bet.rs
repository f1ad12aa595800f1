use crate::error::{EngineError, InvalidBetError};

use super::{Game, RoundState};

impl Game {
    /// Submits a bet and, if accepted, deals the initial hands.
    ///
    /// Accepted between rounds only (`Betting` or `Resolved`). A worn shoe
    /// is replaced before any card is dealt, never mid-hand. Cards go out
    /// alternating player, dealer, player, dealer; the dealer's second card
    /// is the hole card. Naturals resolve the round immediately: both sides
    /// push, a dealer-only natural loses the bet, a player-only natural pays
    /// at the configured blackjack ratio. Otherwise the round enters
    /// `PlayerTurn`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBetError`] if a round is in progress or the amount
    /// falls outside the table minimum and the bankroll. The prior state is
    /// returned untouched in that case.
    pub fn submit_bet(&self, amount: usize) -> Result<Self, EngineError> {
        if !matches!(self.state, RoundState::Betting | RoundState::Resolved) {
            return Err(InvalidBetError::RoundInProgress.into());
        }

        let mut next = self.clone();
        next.message.clear();
        next.outcome = None;
        next.current_hand = 0;
        next.player.clear_hands();
        next.dealer.clear_hand();

        if next.shoe.needs_reshuffle() {
            next.shoe.reshuffle();
        }

        next.player
            .place_bet(amount, next.options.table_minimum)?;

        next.state = RoundState::Dealing;
        next.deal_initial()?;

        if next.player.has_blackjack(0) || next.dealer.has_blackjack() {
            next.run_dealer_turn()?;
        } else {
            next.state = RoundState::PlayerTurn;
        }

        Ok(next)
    }

    /// Deals two cards each, alternating player, dealer, player, dealer.
    fn deal_initial(&mut self) -> Result<(), EngineError> {
        for _ in 0..2 {
            let card = self.shoe.deal()?;
            self.player.hit(card, 0)?;

            let card = self.shoe.deal()?;
            self.dealer.take_card(card);
        }
        Ok(())
    }
}
