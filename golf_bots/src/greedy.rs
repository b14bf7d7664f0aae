use golf::{Card, GolfGame, Hand, Player, ScoreCard, COLS, HAND_SIZE, ROWS};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// What a face-down card is assumed to be worth.
const UNKNOWN_VALUE: i32 = 5;

/// Estimates the score of a hand from its face-up cards only.
pub fn estimate_hand(hand: &Hand) -> i32 {
    (0..COLS)
        .map(|col| {
            let column = hand.column(col);
            let all_known = column.iter().all(|card| card.face_up);
            if all_known && column.iter().all(|card| card.rank == column[0].rank) {
                0
            } else {
                column
                    .iter()
                    .map(|card| if card.face_up { card.score() } else { UNKNOWN_VALUE })
                    .sum()
            }
        })
        .sum()
}

/// The slots where putting `card` lowers the estimated score the most,
/// together with that improvement. Face-down slots win ties, since turning
/// them up brings the player closer to going out.
fn best_slots(hand: &Hand, card: Card) -> (Vec<usize>, i32) {
    let before = estimate_hand(hand);
    let mut top_choices = Vec::new();
    let mut top_gain = i32::MIN;
    for slot in 0..HAND_SIZE {
        let mut after = *hand;
        after.replace(slot, card.turned_up());
        // Scaled so that a face-down slot breaks ties
        let gain = 2 * (before - estimate_hand(&after)) + i32::from(!hand[slot].face_up);
        match gain.cmp(&top_gain) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => top_choices.push(slot),
            std::cmp::Ordering::Greater => {
                top_choices = vec![slot];
                top_gain = gain;
            }
        }
    }
    (top_choices, top_gain)
}

/// Takes whichever card improves its visible hand the most.
pub struct GreedyPlayer {
    rng: StdRng,
    pub scores: ScoreCard,
}

impl GreedyPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            scores: ScoreCard::new(),
        }
    }

    fn choose_slot(&mut self, slots: &[usize]) -> usize {
        *slots
            .choose(&mut self.rng)
            .expect("A hand always has a slot to choose")
    }
}

impl Player for GreedyPlayer {
    fn setup(&mut self, game: &mut GolfGame) {
        // Two cards of one column, hoping for a pair
        let col = self.rng.gen_range(0..COLS);
        for row in 0..ROWS {
            game.flip_card(Hand::slot(row, col));
        }
    }

    fn play(&mut self, game: &mut GolfGame) {
        if let Some(&top) = game.discard().last() {
            let (slots, gain) = best_slots(game.hand(), top);
            if gain > 1 {
                let slot = self.choose_slot(&slots);
                trace!(card = %top, slot, "Taking from the discard pile");
                let card = game.draw_from_discard();
                game.place_card(card, slot);
                return;
            }
        }

        let card = game.draw_card();
        let (slots, gain) = best_slots(game.hand(), card);
        if gain > 0 {
            let slot = self.choose_slot(&slots);
            trace!(%card, slot, "Placing the drawn card");
            game.place_card(card, slot);
        } else {
            game.discard_card(card);
        }
    }

    fn add_score(&mut self, score: i32) {
        self.scores.add(score);
    }
}

#[cfg(test)]
mod tests {
    use golf::{card, handle, PlayerHandle};
    use rand::SeedableRng;

    use super::*;

    fn hand(codes: [&str; HAND_SIZE]) -> Hand {
        Hand::new(codes.map(|code| code.parse::<Card>().unwrap()))
    }

    #[test]
    fn estimate_uses_only_face_up_cards() {
        let mut h = hand(["9♣", "K♣", "4♣", "9♦", "2♦", "Q♦"]);
        assert_eq!(estimate_hand(&h), h.score());
        h[0].face_up = false;
        // The pair of nines is no longer known
        assert_eq!(estimate_hand(&h), UNKNOWN_VALUE + 9 + 2 + 14);
        h[5].face_up = false;
        assert_eq!(estimate_hand(&h), UNKNOWN_VALUE + 9 + 2 + 4 + UNKNOWN_VALUE);
    }

    #[test]
    fn completes_a_pair() {
        let h = hand(["9♣", "K♣", "4♣", "3♦", "2♦", "Q♦"]);
        let (slots, _) = best_slots(&h, card!("Q♥"));
        assert_eq!(slots, vec![2]);
        let (slots, _) = best_slots(&h, card!("9♥"));
        assert_eq!(slots, vec![3]);
    }

    #[test]
    fn prefers_face_down_slots_on_ties() {
        let mut h = hand(["K♣", "5♦", "K♥", "K♠", "A♦", "K♦"]);
        h[1].face_up = false;
        // A five is worth as much as an unknown card
        let (slots, gain) = best_slots(&h, card!("5♠"));
        assert_eq!(slots, vec![1]);
        assert_eq!(gain, 1);
    }

    #[test]
    fn greedy_beats_random_on_average() {
        let greedy = std::rc::Rc::new(std::cell::RefCell::new(GreedyPlayer::new(
            StdRng::seed_from_u64(1),
        )));
        let random = std::rc::Rc::new(std::cell::RefCell::new(crate::RandomPlayer::new(
            StdRng::seed_from_u64(2),
        )));
        for seed in 0..200 {
            let players = vec![greedy.clone() as PlayerHandle, random.clone() as PlayerHandle];
            let mut game = GolfGame::new(players, StdRng::seed_from_u64(seed)).unwrap();
            game.play_to_end();
        }
        assert_eq!(greedy.borrow().scores.games(), 200);
        assert!(greedy.borrow().scores.total() < random.borrow().scores.total());
    }

    #[test]
    fn setup_flips_one_column() {
        let players: Vec<PlayerHandle> = vec![
            handle(GreedyPlayer::new(StdRng::seed_from_u64(3))),
            handle(GreedyPlayer::new(StdRng::seed_from_u64(4))),
        ];
        let game = GolfGame::new(players, StdRng::seed_from_u64(0)).unwrap();
        for hand in game.hands() {
            let flipped: Vec<usize> = (0..HAND_SIZE).filter(|&i| hand[i].face_up).collect();
            assert_eq!(flipped.len(), 2);
            assert_eq!(flipped[1], flipped[0] + COLS);
        }
    }
}
