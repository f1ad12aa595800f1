//! Engine integration tests.

use twentyone::{
    Action, Card, DECK_SIZE, Dealer, DealerHand, EmptyShoeError, EngineError, Game, GameOptions,
    Hand, HandOutcome, HandStatus, IllegalActionError, InvalidBetError, RoundState, RoundingMode,
    Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a shoe that deals `draws` in order, padded underneath so the
/// round-start reshuffle check never replaces it.
fn stacked_shoe(draws: &[Card]) -> Shoe {
    let mut cards = vec![card(Suit::Clubs, 2); 53];
    cards.extend(draws.iter().rev().copied());
    Shoe::from_cards(1, cards)
}

fn game_with(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), 1000, 0);
    game.shoe = stacked_shoe(draws);
    game
}

#[test]
fn aces_count_high_then_downgrade() {
    let mut hand = Hand::new(0);
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Clubs, 6));
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());

    // Second ace must be forced to 1, never double-counted
    hand.add_card(card(Suit::Spades, 1));
    assert_eq!(hand.value(), 18);
    assert!(hand.is_soft());

    let mut hard = Hand::new(0);
    hard.add_card(card(Suit::Hearts, 1));
    hard.add_card(card(Suit::Clubs, 9));
    hard.add_card(card(Suit::Spades, 5));
    assert_eq!(hard.value(), 15);
    assert!(!hard.is_soft());
}

#[test]
fn natural_blackjack_is_two_cards_only() {
    let mut natural = Hand::new(10);
    natural.add_card(card(Suit::Hearts, 1));
    natural.add_card(card(Suit::Spades, 13));
    assert_eq!(natural.value(), 21);
    assert_eq!(natural.status(), HandStatus::Blackjack);

    let mut built = Hand::new(10);
    built.add_card(card(Suit::Hearts, 7));
    built.add_card(card(Suit::Clubs, 7));
    built.add_card(card(Suit::Spades, 7));
    assert_eq!(built.value(), 21);
    assert_eq!(built.status(), HandStatus::Active);
    assert!(!built.is_blackjack());
}

#[test]
fn bust_uses_minimal_ace_total() {
    let mut hand = Hand::new(5);
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_card(card(Suit::Spades, 10));
    hand.add_card(card(Suit::Diamonds, 2));
    assert_eq!(hand.status(), HandStatus::Bust);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards().len(), 1);
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards().len(), 2);
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn fresh_shoe_has_full_composition() {
    let mut shoe = Shoe::new(1, 3);
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let mut seen = Vec::new();
    while let Ok(dealt) = shoe.deal() {
        seen.push(dealt);
    }
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let count = seen
                .iter()
                .filter(|c| c.suit == suit && c.rank == rank)
                .count();
            assert_eq!(count, 1, "expected exactly one {rank} of {suit:?}");
        }
    }

    assert_eq!(shoe.deal().unwrap_err(), EmptyShoeError);
}

#[test]
fn penetration_threshold_is_fifty_two() {
    let at_threshold = Shoe::from_cards(6, vec![card(Suit::Hearts, 4); 52]);
    assert!(at_threshold.needs_reshuffle());

    let above_threshold = Shoe::from_cards(6, vec![card(Suit::Hearts, 4); 53]);
    assert!(!above_threshold.needs_reshuffle());
}

#[test]
fn reshuffle_replaces_full_shoe() {
    let mut shoe = Shoe::from_cards(6, vec![card(Suit::Hearts, 4); 10]);
    shoe.reshuffle();
    assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
}

#[test]
fn cloned_shoe_deals_identical_sequence() {
    let original = Shoe::new(2, 9);
    let mut a = original.clone();
    let mut b = original;

    for _ in 0..20 {
        assert_eq!(a.deal().unwrap(), b.deal().unwrap());
    }
}

#[test]
fn dealing_preserves_order_and_count() {
    let draws = [
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 8),
        card(Suit::Spades, 7),
    ];
    let mut shoe = stacked_shoe(&draws);
    let before = shoe.remaining();

    let mut dealt = Vec::new();
    for _ in 0..draws.len() {
        dealt.push(shoe.deal().unwrap());
    }

    assert_eq!(dealt, draws);
    assert_eq!(shoe.remaining(), before - draws.len());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(8)
        .with_table_minimum(25)
        .with_blackjack_pays(1.2)
        .with_stand_on_soft_17(true)
        .with_rounding_blackjack(RoundingMode::Up);

    assert_eq!(options.decks, 8);
    assert_eq!(options.table_minimum, 25);
    assert!(options.stand_on_soft_17);
    assert_eq!(options.rounding_blackjack, RoundingMode::Up);
}

#[test]
fn rejected_bet_leaves_everything_untouched() {
    let game = game_with(&[]);
    let shoe_before = game.shoe.remaining();

    let err = game.submit_bet(10).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidBet(InvalidBetError::BelowMinimum {
            amount: 10,
            minimum: 15,
        })
    );

    let err = game.submit_bet(2000).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidBet(InvalidBetError::ExceedsBankroll {
            amount: 2000,
            bankroll: 1000,
        })
    );

    assert_eq!(game.player.bankroll(), 1000);
    assert_eq!(game.shoe.remaining(), shoe_before);
    assert!(game.player.hands().is_empty());
    assert_eq!(game.state, RoundState::Betting);
}

#[test]
fn bet_rejected_mid_round() {
    let game = game_with(&[
        card(Suit::Hearts, 9),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 7),   // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();
    assert_eq!(game.state, RoundState::PlayerTurn);

    let err = game.submit_bet(20).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidBet(InvalidBetError::RoundInProgress)
    );
    assert_eq!(game.player.bankroll(), 985);
}

#[test]
fn composition_invariant_after_deal() {
    let game = Game::new(GameOptions::default(), 1000, 5);
    let game = game.submit_bet(15).unwrap();

    let in_hands: usize =
        game.player.hands().iter().map(Hand::len).sum::<usize>() + game.dealer.hand().len();
    assert_eq!(in_hands + game.shoe.remaining(), 6 * DECK_SIZE);
}

#[test]
fn worn_shoe_replaced_at_round_start_only() {
    let mut game = Game::new(GameOptions::default(), 1000, 2);
    game.shoe = Shoe::from_cards(6, vec![card(Suit::Hearts, 5); 52]);
    assert!(game.shoe.needs_reshuffle());

    let game = game.submit_bet(15).unwrap();
    assert_eq!(game.shoe.remaining(), 6 * DECK_SIZE - 4);
}

#[test]
fn both_naturals_push() {
    let game = game_with(&[
        card(Suit::Hearts, 1),    // player
        card(Suit::Spades, 1),    // dealer up
        card(Suit::Diamonds, 12), // player
        card(Suit::Clubs, 13),    // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    assert_eq!(game.player.bankroll(), 1000);
    assert_eq!(
        game.message,
        "Push! Both you and the dealer have blackjack!"
    );

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.hands[0].outcome, HandOutcome::Push);
    assert_eq!(outcome.net, 0);
}

#[test]
fn dealer_natural_wins_immediately() {
    let game = game_with(&[
        card(Suit::Hearts, 9),   // player
        card(Suit::Spades, 1),   // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Clubs, 13),   // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    assert_eq!(game.player.bankroll(), 985);
    assert_eq!(game.message, "Dealer has blackjack! You lose.");

    // Hole card is revealed in the resolved snapshot
    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.dealer_total, 21);
    assert!(!snapshot.player_turn_active);
}

#[test]
fn player_natural_pays_three_to_two() {
    let game = game_with(&[
        card(Suit::Hearts, 1),   // player
        card(Suit::Spades, 9),   // dealer up
        card(Suit::Diamonds, 13), // player
        card(Suit::Clubs, 8),    // dealer hole
    ]);
    let game = game.submit_bet(20).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    // 20 returned plus 20 * 1.5 winnings
    assert_eq!(game.player.bankroll(), 1030);
    assert_eq!(game.message, "You have blackjack! You win!");

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(outcome.hands[0].payout, 50);
}

#[test]
fn blackjack_payout_rounding_mode() {
    let draws = [
        card(Suit::Hearts, 1),    // player
        card(Suit::Spades, 9),    // dealer up
        card(Suit::Diamonds, 13), // player
        card(Suit::Clubs, 8),     // dealer hole
    ];

    // 15 * 1.5 = 22.5: rounds down by default
    let game = game_with(&draws);
    let game = game.submit_bet(15).unwrap();
    assert_eq!(game.player.bankroll(), 1022);

    let mut game = Game::new(
        GameOptions::default().with_rounding_blackjack(RoundingMode::Up),
        1000,
        0,
    );
    game.shoe = stacked_shoe(&draws);
    let game = game.submit_bet(15).unwrap();
    assert_eq!(game.player.bankroll(), 1023);
}

#[test]
fn stand_on_seventeen_pushes() {
    let game = game_with(&[
        card(Suit::Hearts, 9),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 7),   // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();

    assert_eq!(game.state, RoundState::PlayerTurn);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.player_total, 17);
    assert_eq!(snapshot.dealer_cards.len(), 1);
    assert_eq!(snapshot.dealer_total, 10);
    assert_eq!(snapshot.bankroll, 985);
    assert!(snapshot.player_turn_active);
    assert!(snapshot.message.is_empty());

    let game = game.player_action(Action::Stand).unwrap();
    assert_eq!(game.state, RoundState::Resolved);
    assert_eq!(game.player.bankroll(), 1000);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer_cards.len(), 2);
    assert_eq!(snapshot.dealer_total, 17);
    assert_eq!(snapshot.message, "Push! Your bet is returned.");
}

#[test]
fn hit_into_bust_loses_without_dealer_draw() {
    let game = game_with(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 6), // player
        card(Suit::Spades, 7),   // dealer hole
        card(Suit::Hearts, 10),  // player hit -> 26
    ]);
    let game = game.submit_bet(15).unwrap();
    let game = game.player_action(Action::Hit).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    assert_eq!(game.player.bankroll(), 985);
    assert_eq!(game.message, "Bust! You lose.");
    // No standing hand, so the dealer keeps the two-card hand
    assert_eq!(game.dealer.hand().len(), 2);
}

#[test]
fn twenty_one_from_hit_is_not_a_natural() {
    let game = game_with(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Diamonds, 6), // player
        card(Suit::Spades, 8),   // dealer hole
        card(Suit::Hearts, 5),   // player hit -> 21
    ]);
    let game = game.submit_bet(15).unwrap();
    let game = game.player_action(Action::Hit).unwrap();

    // 21 by hitting keeps the turn; the player still has to stand
    assert_eq!(game.state, RoundState::PlayerTurn);

    let game = game.player_action(Action::Stand).unwrap();
    assert_eq!(game.state, RoundState::Resolved);
    // Plain win at even money, not the blackjack payout
    assert_eq!(game.player.bankroll(), 1015);
    assert_eq!(game.outcome().unwrap().hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_bust_pays_live_hands() {
    let game = game_with(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 6),   // dealer hole
        card(Suit::Hearts, 10),  // dealer draw -> 26
    ]);
    let game = game.submit_bet(15).unwrap();
    let game = game.player_action(Action::Stand).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    assert_eq!(game.player.bankroll(), 1015);
    assert_eq!(game.message, "Dealer busts! You win!");
    assert!(game.outcome().unwrap().dealer_bust);
}

#[test]
fn double_down_doubles_bet_and_takes_one_card() {
    let game = game_with(&[
        card(Suit::Hearts, 5),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 6), // player
        card(Suit::Spades, 9),   // dealer hole -> 19
        card(Suit::Hearts, 10),  // double draw -> 21
    ]);
    let game = game.submit_bet(15).unwrap();
    let game = game.player_action(Action::Double).unwrap();

    assert_eq!(game.state, RoundState::Resolved);
    let hand = &game.player.hands()[0];
    assert_eq!(hand.bet(), 30);
    assert_eq!(hand.len(), 3);
    assert!(hand.has_doubled());
    // 1000 - 15 - 15 + 60
    assert_eq!(game.player.bankroll(), 1030);

    // A second double on the settled round is an illegal action
    let err = game.player_action(Action::Double).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalAction(IllegalActionError::OutsideTurn)
    );
}

#[test]
fn double_down_rejected_after_hit() {
    let game = game_with(&[
        card(Suit::Hearts, 2),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 3), // player
        card(Suit::Spades, 9),   // dealer hole
        card(Suit::Hearts, 5),   // player hit -> 10
    ]);
    let game = game.submit_bet(15).unwrap();
    let game = game.player_action(Action::Hit).unwrap();

    let err = game.player_action(Action::Double).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalAction(IllegalActionError::CannotDouble)
    );

    // The rejected intent changed nothing
    assert_eq!(game.state, RoundState::PlayerTurn);
    assert_eq!(game.player.hands()[0].bet(), 15);
    assert_eq!(game.player.hands()[0].len(), 3);
    assert_eq!(game.player.bankroll(), 985);
}

#[test]
fn double_down_rejected_without_funds() {
    let mut game = Game::new(GameOptions::default(), 20, 0);
    game.shoe = stacked_shoe(&[
        card(Suit::Hearts, 5),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 6), // player
        card(Suit::Spades, 9),   // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();

    let err = game.player_action(Action::Double).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalAction(IllegalActionError::InsufficientBankroll)
    );
    assert_eq!(game.player.bankroll(), 5);
    assert_eq!(game.player.hands()[0].bet(), 15);
}

#[test]
fn dealer_draws_to_seventeen_and_stops() {
    let mut dealer = Dealer::new();
    dealer.take_card(card(Suit::Hearts, 10));
    dealer.take_card(card(Suit::Clubs, 6));
    dealer.reveal_hole();

    let mut shoe = stacked_shoe(&[card(Suit::Spades, 5)]);
    let drawn = dealer.auto_play(&mut shoe, false).unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(dealer.hand().value(), 21);

    let mut dealer = Dealer::new();
    dealer.take_card(card(Suit::Hearts, 10));
    dealer.take_card(card(Suit::Clubs, 7));
    dealer.reveal_hole();

    let mut shoe = stacked_shoe(&[card(Suit::Spades, 5)]);
    let drawn = dealer.auto_play(&mut shoe, false).unwrap();
    assert!(drawn.is_empty());
}

#[test]
fn dealer_hits_soft_seventeen_by_default() {
    let mut dealer = Dealer::new();
    dealer.take_card(card(Suit::Hearts, 1));
    dealer.take_card(card(Suit::Clubs, 6));
    dealer.reveal_hole();

    let mut shoe = stacked_shoe(&[card(Suit::Spades, 4)]);
    let drawn = dealer.auto_play(&mut shoe, false).unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(dealer.hand().value(), 21);

    let mut standing = Dealer::new();
    standing.take_card(card(Suit::Hearts, 1));
    standing.take_card(card(Suit::Clubs, 6));
    standing.reveal_hole();

    let mut shoe = stacked_shoe(&[card(Suit::Spades, 4)]);
    let drawn = standing.auto_play(&mut shoe, true).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(standing.hand().value(), 17);
}

#[test]
fn action_outside_player_turn_is_rejected() {
    let game = Game::new(GameOptions::default(), 1000, 1);
    let err = game.player_action(Action::Hit).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalAction(IllegalActionError::OutsideTurn)
    );
}

#[test]
fn new_bet_clears_previous_outcome() {
    let game = game_with(&[
        card(Suit::Hearts, 9),   // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 7),   // dealer hole
    ]);
    let game = game.submit_bet(15).unwrap();
    let mut game = game.player_action(Action::Stand).unwrap();
    assert!(game.outcome().is_some());
    assert!(!game.message.is_empty());

    game.shoe = stacked_shoe(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 8),
        card(Suit::Spades, 7),
    ]);
    let game = game.submit_bet(15).unwrap();
    assert_eq!(game.state, RoundState::PlayerTurn);
    assert!(game.outcome().is_none());
    assert!(game.message.is_empty());
    assert_eq!(game.player.hands().len(), 1);
}
