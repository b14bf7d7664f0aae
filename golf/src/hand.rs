use serde::{Deserialize, Serialize};

use crate::Card;

pub const ROWS: usize = 2;
pub const COLS: usize = 3;
pub const HAND_SIZE: usize = ROWS * COLS;

/// One player's 2×3 grid of cards.
///
/// Slots are addressed by `col + row * COLS`, so indices `0..3` are the top
/// row and `3..6` the bottom row. Indexing outside `0..HAND_SIZE` panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn slot(row: usize, col: usize) -> usize {
        assert!(row < ROWS && col < COLS, "({row}, {col}) is not a hand slot");
        col + row * COLS
    }

    /// The cards of one column, top to bottom.
    pub fn column(&self, col: usize) -> [Card; ROWS] {
        std::array::from_fn(|row| self.cards[Hand::slot(row, col)])
    }

    /// Puts `card` into the slot at `index` and returns the card that was there.
    pub fn replace(&mut self, index: usize, card: Card) -> Card {
        std::mem::replace(&mut self.cards[index], card)
    }

    pub fn flip(&mut self, index: usize) {
        self.cards[index].face_up = true;
    }

    /// Turns every card face-up.
    pub fn reveal(&mut self) {
        for card in self.cards.iter_mut() {
            card.face_up = true;
        }
    }

    pub fn all_face_up(&self) -> bool {
        self.cards.iter().all(|card| card.face_up)
    }

    pub fn num_face_up(&self) -> usize {
        self.cards.iter().filter(|card| card.face_up).count()
    }

    /// Scores the hand, face-down cards included.
    ///
    /// Each column adds up its cards, except that a column whose cards all
    /// share one rank contributes nothing.
    pub fn score(&self) -> i32 {
        (0..COLS)
            .map(|col| {
                let column = self.column(col);
                if column.iter().all(|card| card.rank == column[0].rank) {
                    0
                } else {
                    column.iter().map(Card::score).sum()
                }
            })
            .sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl std::ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl std::ops::IndexMut<usize> for Hand {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
