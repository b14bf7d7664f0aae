use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::Card;

/// The draw pile and the discard pile. The top of each pile is the back of
/// its vector.
#[derive(Clone, Debug, Default)]
pub struct Piles {
    pub deck: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Piles {
    /// Shuffles `cards` into a fresh draw pile with an empty discard pile.
    pub fn shuffled(mut cards: Vec<Card>, rng: &mut StdRng) -> Self {
        cards.shuffle(rng);
        Self::stacked(cards)
    }

    /// Uses `cards` as the draw pile as-is.
    pub fn stacked(deck: Vec<Card>) -> Self {
        let discard = Vec::with_capacity(deck.len());
        Self { deck, discard }
    }

    pub fn len(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty() && self.discard.is_empty()
    }

    /// Takes the top card of the draw pile.
    ///
    /// Panics if the draw pile is empty.
    pub fn draw(&mut self) -> Card {
        self.deck
            .pop()
            .expect("Tried to draw a card from an empty deck")
    }

    pub fn can_draw_from_discard(&self) -> bool {
        !self.discard.is_empty()
    }

    /// Takes the top card of the discard pile.
    ///
    /// Panics if the discard pile is empty.
    pub fn draw_from_discard(&mut self) -> Card {
        self.discard
            .pop()
            .expect("Tried to draw a card from an empty discard pile")
    }

    pub fn top_of_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Puts a card face-up on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card.turned_up());
    }

    /// If the draw pile ran out, the discard pile is shuffled and becomes the
    /// new draw pile. Returns whether that happened.
    pub fn recycle_if_exhausted(&mut self, rng: &mut StdRng) -> bool {
        if !self.deck.is_empty() {
            return false;
        }
        std::mem::swap(&mut self.deck, &mut self.discard);
        self.deck.shuffle(rng);
        debug!(deck = self.deck.len(), "Recycled the discard pile into the deck");
        true
    }
}
