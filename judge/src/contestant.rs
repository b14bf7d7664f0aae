use std::cell::RefCell;
use std::rc::Rc;

use golf::{PlayerHandle, ScoreCard};
use golf_bots::{GreedyPlayer, RandomPlayer};
use rand::rngs::StdRng;

/// The strategies that can take a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    Random,
    Greedy,
}

/// A seat at the table. Keeps the concrete player around so the judge can
/// read its score card after the games.
pub enum Contestant {
    Random(Rc<RefCell<RandomPlayer>>),
    Greedy(Rc<RefCell<GreedyPlayer>>),
}

impl Contestant {
    pub fn new(strategy: Strategy, rng: StdRng) -> Self {
        match strategy {
            Strategy::Random => Contestant::Random(Rc::new(RefCell::new(RandomPlayer::new(rng)))),
            Strategy::Greedy => Contestant::Greedy(Rc::new(RefCell::new(GreedyPlayer::new(rng)))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Contestant::Random(_) => "random",
            Contestant::Greedy(_) => "greedy",
        }
    }

    pub fn handle(&self) -> PlayerHandle {
        match self {
            Contestant::Random(player) => player.clone(),
            Contestant::Greedy(player) => player.clone(),
        }
    }

    pub fn scores(&self) -> ScoreCard {
        match self {
            Contestant::Random(player) => player.borrow().scores.clone(),
            Contestant::Greedy(player) => player.borrow().scores.clone(),
        }
    }
}
