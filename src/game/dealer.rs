use alloc::vec::Vec;

use crate::error::EngineError;
use crate::hand::HandStatus;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, RoundState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Plays out the dealer's turn and settles the round.
    ///
    /// Reveals the hole card, draws per the house rule only if at least one
    /// player hand is still standing (an all-bust or natural round needs no
    /// draw), then settles every hand and credits the bankroll.
    pub(super) fn run_dealer_turn(&mut self) -> Result<(), EngineError> {
        self.state = RoundState::DealerTurn;
        self.dealer.reveal_hole();

        if self.player.any_standing_hand() {
            self.dealer
                .auto_play(&mut self.shoe, self.options.stand_on_soft_17)?;
        }

        self.settle();
        Ok(())
    }

    /// Extra winnings for a natural blackjack, on top of the returned bet.
    fn blackjack_winnings(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * self.options.blackjack_pays;
        round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Compares every player hand to the dealer's final hand, credits the
    /// total payout, and records the outcome.
    ///
    /// A busted player hand loses outright regardless of the dealer; a live
    /// hand wins automatically when the dealer busts. Only the two-card
    /// natural earns the blackjack payout, and naturals on both sides push.
    fn settle(&mut self) {
        let dealer_value = self.dealer.hand().value();
        let dealer_bust = self.dealer.hand().is_bust();
        let dealer_blackjack = self.dealer.has_blackjack();

        let mut hands = Vec::new();
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for (hand_index, hand) in self.player.hands().iter().enumerate() {
            let bet = hand.bet();
            total_bet += bet;
            let player_value = hand.value();

            let (outcome, payout) = match hand.status() {
                HandStatus::Bust => (HandOutcome::Lose, 0),
                HandStatus::Blackjack => {
                    if dealer_blackjack {
                        (HandOutcome::Push, bet)
                    } else {
                        (HandOutcome::Blackjack, bet + self.blackjack_winnings(bet))
                    }
                }
                HandStatus::Stand | HandStatus::Active => {
                    if dealer_bust || player_value > dealer_value {
                        (HandOutcome::Win, bet * 2)
                    } else if player_value < dealer_value {
                        (HandOutcome::Lose, 0)
                    } else {
                        (HandOutcome::Push, bet)
                    }
                }
            };

            total_payout += payout;

            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        self.player.credit(total_payout);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        let result = RoundResult {
            hands,
            total_payout,
            net,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        };

        self.message = result.message();
        self.outcome = Some(result);
        self.state = RoundState::Resolved;
    }
}
