//! Walks through the deck and vector protocols, printing each result.

#![allow(clippy::missing_docs_in_private_items)]

use std::error::Error;
use std::io::{self, Write};

use datamodel::{Card, FrenchDeck, Rank, Suit, Vector};

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    walkthrough(&mut stdout.lock())
}

pub fn walkthrough(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let deck = FrenchDeck::new();
    writeln!(out, "{}", deck.len())?;
    writeln!(out, "{}", deck[0])?;
    writeln!(out, "{}", format_cards(deck.at(..3)?))?;
    for card in &deck {
        writeln!(out, "{card}")?;
    }
    writeln!(out, "{}", deck.contains(&Card::new(Rank::Queen, Suit::Hearts)))?;

    let v1 = Vector::new(2.0, 4.0);
    let v2 = Vector::new(2.0, 1.0);
    writeln!(out, "{}", v1 + v2)?;
    let v = Vector::new(3.0, 4.0);
    writeln!(out, "{:?}", v.magnitude())?;
    writeln!(out, "{}", v * 3.0)?;
    writeln!(out, "{:?}", (v * 3.0).magnitude())?;

    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    let items: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
