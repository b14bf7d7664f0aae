use crate::{Card, GolfGame, COLS, ROWS};

fn pile(cards: &[Card]) -> String {
    let mut result = String::from("|");
    for card in cards {
        result += &format!("{}|", card);
    }
    result
}

/// Renders the piles and every player's hand, side by side.
///
/// Face-down cards in the hands are drawn as card backs. The piles are shown
/// bottom to top.
pub fn visualize_game(game: &GolfGame) -> String {
    let hands = game.hands();
    let mut result = format!("Current player: {}\n", game.current_player() + 1);
    result += "▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔\n";
    result += &format!("  Deck: {}\n\n", pile(game.deck()));

    let mut line = String::from("  ");
    for p in 0..hands.len() {
        line += &format!(" Player {:<6}", format!("{}:", p + 1));
    }
    result += line.trim_end();
    result += "\n";
    for row in 0..ROWS {
        let mut line = String::from("  ");
        for hand in hands {
            line += &pile(&hand.cards[row * COLS..(row + 1) * COLS]);
            line += "  ";
        }
        result += line.trim_end();
        result += "\n";
    }

    result += &format!("\n  Discard: {}", pile(game.discard()));
    result
}
