//! Checks the full output of the `data_model` demo.

#[allow(dead_code)]
#[path = "../demos/data_model.rs"]
mod data_model;

use datamodel::FrenchDeck;

#[test]
fn walkthrough_prints_the_fixed_script() {
    let mut out = Vec::new();
    data_model::walkthrough(&mut out).expect("walkthrough");
    let text = String::from_utf8(out).expect("utf-8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3 + 52 + 5);
    assert_eq!(lines[0], "52");
    assert_eq!(lines[1], "Card(rank=2, suit=spades)");
    assert_eq!(
        lines[2],
        "[Card(rank=2, suit=spades), Card(rank=3, suit=spades), Card(rank=4, suit=spades)]"
    );

    let deck = FrenchDeck::new();
    for (line, card) in lines[3..55].iter().zip(&deck) {
        assert_eq!(*line, card.to_string());
    }
    assert_eq!(lines[3], "Card(rank=2, suit=spades)");
    assert_eq!(lines[54], "Card(rank=A, suit=hearts)");

    assert_eq!(
        lines[55..],
        ["true", "Vector(4, 5)", "5.0", "Vector(9, 12)", "15.0"]
    );
}
