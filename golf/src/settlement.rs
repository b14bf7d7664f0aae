use serde::{Deserialize, Serialize};

use crate::Hand;

/// Added to the score of the player who went out if some opponent did at
/// least as well.
pub const GO_OUT_PENALTY: i32 = 10;

/// How a finished game was settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The settled score of every player, by player index.
    pub scores: Vec<i32>,
    pub go_out_player: usize,
    /// The score the going-out player posted when their hand was completed.
    pub go_out_score: i32,
    pub penalized: bool,
    pub winner: usize,
    /// The winner's hand scored as it lies now. For a penalized going-out
    /// player this differs from their settled score.
    pub winner_hand_score: i32,
}

/// Settles a game from the final hands.
///
/// Every opponent of `go_out_player` is scored from their hand. If any of them
/// scored at most `go_out_score`, the going-out player is penalized and the
/// first opponent holding the lowest score below `go_out_score` wins. If no
/// opponent is below `go_out_score`, player 0 is named the winner. Otherwise
/// the going-out player wins with `go_out_score`.
pub fn settle(hands: &[Hand], go_out_player: usize, go_out_score: i32) -> GameResult {
    let mut scores = vec![0; hands.len()];
    let mut min_score = i32::MAX;
    let mut winner = 0;

    for (p, hand) in hands.iter().enumerate() {
        if p == go_out_player {
            continue;
        }
        let score = hand.score();
        if score < min_score {
            min_score = score;
            if score < go_out_score {
                winner = p;
            }
        }
        scores[p] = score;
    }

    let penalized = min_score <= go_out_score;
    scores[go_out_player] = if penalized {
        go_out_score + GO_OUT_PENALTY
    } else {
        winner = go_out_player;
        go_out_score
    };

    GameResult {
        scores,
        go_out_player,
        go_out_score,
        penalized,
        winner,
        winner_hand_score: hands[winner].score(),
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scores: ")?;
        for (p, score) in self.scores.iter().enumerate() {
            if p > 0 {
                write!(f, ", ")?;
            }
            write!(f, "Player {} ({})", p + 1, score)?;
        }
        write!(
            f,
            "\nWinner: Player {} ({})",
            self.winner + 1,
            self.winner_hand_score
        )
    }
}
