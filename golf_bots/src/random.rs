use golf::{GolfGame, Player, ScoreCard, COLS, HAND_SIZE};
use rand::rngs::StdRng;
use rand::Rng;

/// Flips one card per row at the start and then makes coin-flip decisions.
pub struct RandomPlayer {
    rng: StdRng,
    pub scores: ScoreCard,
}

impl RandomPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            scores: ScoreCard::new(),
        }
    }
}

impl Player for RandomPlayer {
    fn setup(&mut self, game: &mut GolfGame) {
        game.flip_card(self.rng.gen_range(0..COLS));
        game.flip_card(self.rng.gen_range(COLS..HAND_SIZE));
    }

    fn play(&mut self, game: &mut GolfGame) {
        if !game.can_draw_from_discard() || self.rng.gen() {
            let card = game.draw_card();
            if self.rng.gen() {
                game.place_card(card, self.rng.gen_range(0..HAND_SIZE));
            } else {
                game.discard_card(card);
            }
        } else {
            // Cards from the discard pile must be kept
            let card = game.draw_from_discard();
            game.place_card(card, self.rng.gen_range(0..HAND_SIZE));
        }
    }

    fn add_score(&mut self, score: i32) {
        self.scores.add(score);
    }
}
