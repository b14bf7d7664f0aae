use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use golf::GameResult;
use serde::{Deserialize, Serialize};

/// Writes the result of every game into its own JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Writes `game_NNNNNN.json` and returns its path.
    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    /// Strategy names, by seat.
    pub players: Vec<String>,
    pub result: GameResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_directory() {
        let dir = std::env::temp_dir().join("golf-judge-recording-does-not-exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("golf-judge-recording-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let mut recorder = Recorder::new(dir.clone())?;
        let recording = GameRecording {
            players: vec![String::from("random"), String::from("greedy")],
            result: GameResult {
                scores: vec![12, 3],
                go_out_player: 1,
                go_out_score: 3,
                penalized: false,
                winner: 1,
                winner_hand_score: 3,
            },
        };
        let first = recorder.write_game_recording(&recording)?;
        let second = recorder.write_game_recording(&recording)?;
        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));

        let read_back: GameRecording = serde_json::from_str(&std::fs::read_to_string(&second)?)?;
        assert_eq!(read_back, recording);
        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
