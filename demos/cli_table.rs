//! Interactive CLI table driving the engine through snapshots.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Action, Game, GameOptions, Snapshot};

fn main() {
    println!("Blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), 1000, seed);

    loop {
        let minimum = game.options.table_minimum;
        let bankroll = game.snapshot().bankroll;
        if bankroll < minimum {
            println!("Bankroll below the table minimum. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount ({minimum}-{bankroll}, 0 to quit): "))
        else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        game = match game.submit_bet(bet) {
            Ok(next) => next,
            Err(err) => {
                println!("Bet rejected: {err}");
                continue;
            }
        };

        while game.snapshot().player_turn_active {
            print_table(&game.snapshot());

            let action = match prompt_line("Action ([h]it / [s]tand / [d]ouble): ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match game.player_action(action) {
                Ok(next) => game = next,
                Err(err) => println!("Action rejected: {err}"),
            }
        }

        print_table(&game.snapshot());
        if let Some(result) = game.outcome() {
            println!("Payout: {} (net {})", result.total_payout, result.net);
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    let mut dealer: Vec<String> = snapshot
        .dealer_cards
        .iter()
        .map(ToString::to_string)
        .collect();
    if snapshot.player_turn_active && !dealer.is_empty() {
        dealer.push("??".to_string());
    }
    println!("\nDealer: {} (value {})", dealer.join(" "), snapshot.dealer_total);

    for hand in &snapshot.player_hands {
        let cards: Vec<String> = hand.cards.iter().map(ToString::to_string).collect();
        println!(
            "You:    {} | value {} | bet {}",
            cards.join(" "),
            snapshot.player_total,
            hand.bet
        );
    }

    println!("Bankroll: {}", snapshot.bankroll);
    if !snapshot.message.is_empty() {
        println!("{}", snapshot.message);
    }
}
