//! Deal Cards Example
//!
//! Deals a seeded deck to a number of people and prints each hand.
//!
//! ```text
//! cargo run --example deal_cards -- 5
//! ```

use card_dealer::{Dealer, DealerConfig};

fn main() {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "4".to_string());

    let dealer = Dealer::new(DealerConfig {
        seed: Some(2024),
        ..Default::default()
    });

    println!("=== Dealing to {raw} people ===\n");

    match dealer.distribute_raw(&raw) {
        Ok(deal) => {
            for (index, (hand, tokens)) in deal
                .hands
                .iter()
                .zip(deal.distributed_cards())
                .enumerate()
            {
                println!("Person {} ({} cards): {tokens}", index + 1, hand.len());
                let labels: Vec<String> = hand.cards().iter().map(|c| c.display_value()).collect();
                if !labels.is_empty() {
                    println!("  {}", labels.join(", "));
                }
            }
        }
        Err(e) => {
            eprintln!("{} ({e})", e.client_message());
            std::process::exit(1);
        }
    }
}
