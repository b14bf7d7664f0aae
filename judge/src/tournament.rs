use golf::{GolfGame, PlayerHandle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::{Contestant, GameRecording, Recorder};

/// Counts of game outcomes per seat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    pub wins: Vec<usize>,
    /// How often each seat went out and was penalized for it.
    pub penalties: Vec<usize>,
    pub games: usize,
}

/// Plays `num_games` games with the same seating. Scores accumulate on the
/// contestants' score cards.
///
/// Returns an error if the table cannot be seated or a recording fails.
pub fn play_match(
    contestants: &[Contestant],
    num_games: usize,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Standings> {
    let mut standings = Standings {
        wins: vec![0; contestants.len()],
        penalties: vec![0; contestants.len()],
        games: 0,
    };
    let names: Vec<String> = contestants.iter().map(|c| c.name().to_string()).collect();

    for game_idx in 0..num_games {
        let players: Vec<PlayerHandle> = contestants.iter().map(Contestant::handle).collect();
        let mut game = GolfGame::new(players, StdRng::seed_from_u64(rng.gen()))?;
        let result = game.play_to_end();
        debug!(
            game_idx,
            winner = result.winner,
            go_out_player = result.go_out_player,
            penalized = result.penalized
        );

        standings.wins[result.winner] += 1;
        if result.penalized {
            standings.penalties[result.go_out_player] += 1;
        }
        standings.games += 1;

        if let Some(rec) = recorder {
            rec.write_game_recording(&GameRecording {
                players: names.clone(),
                result,
            })?;
        }
    }
    Ok(standings)
}
