use std::cell::RefCell;
use std::rc::Rc;

use crate::GolfGame;

/// A participant in a game of golf.
///
/// The engine calls `setup` once while dealing and `play` once per turn. Both
/// may only change the game through the public card operations of
/// [`GolfGame`], and only for the player whose turn it is.
pub trait Player {
    /// Called right after this player's hand was dealt face-down. Expected to
    /// turn up some starting cards with [`GolfGame::flip_card`].
    fn setup(&mut self, game: &mut GolfGame);

    /// Performs exactly one card exchange: draw from the deck and then place
    /// or discard that card, or draw from the discard pile and place it.
    fn play(&mut self, game: &mut GolfGame);

    /// Receives this player's settled score at the end of a game.
    fn add_score(&mut self, score: i32);
}

/// Players outlive single games and may be shared with a roster outside the
/// game, so the engine only holds handles to them.
pub type PlayerHandle = Rc<RefCell<dyn Player>>;

/// Wraps a player into a [`PlayerHandle`].
pub fn handle<P: Player + 'static>(player: P) -> PlayerHandle {
    Rc::new(RefCell::new(player))
}

/// The history of scores a player received, one per game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub scores: Vec<i32>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, score: i32) {
        self.scores.push(score);
    }

    pub fn total(&self) -> i32 {
        self.scores.iter().sum()
    }

    pub fn games(&self) -> usize {
        self.scores.len()
    }

    pub fn mean(&self) -> Option<f64> {
        (!self.scores.is_empty()).then(|| f64::from(self.total()) / self.scores.len() as f64)
    }
}
