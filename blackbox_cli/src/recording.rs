use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use blackbox::{GameSession, GameSummary, Position, Request, Response};
use serde::{Deserialize, Serialize};

/// Collects the requests and responses of a session and writes them to a
/// numbered JSON file when the session is over.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    exchanges: Vec<Exchange>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            exchanges: Vec::new(),
        })
    }

    pub fn store_exchange(&mut self, request: Request, response: Response) {
        self.exchanges.push(Exchange { request, response });
    }

    /// Writes everything stored since the last recording, and returns the file path.
    pub fn write_session_recording(&mut self, game: &GameSession) -> anyhow::Result<PathBuf> {
        let recording = SessionRecording {
            atoms: game.grid().atoms().iter().map(|atom| atom.position()).collect(),
            exchanges: std::mem::take(&mut self.exchanges),
            summary: game.summary(),
        };
        let filepath = self.directory.join(format!("session_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

/// The contents of one recording file.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionRecording {
    pub atoms: Vec<Position>,
    pub exchanges: Vec<Exchange>,
    /// The state at the end of the session.
    pub summary: GameSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Exchange {
    pub request: Request,
    pub response: Response,
}

#[cfg(test)]
mod tests {
    use blackbox::GameStatus;

    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        assert!(Recorder::new(PathBuf::from("/this/directory/does/not/exist")).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = std::env::temp_dir().join(format!("blackbox_recorder_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();
        let mut game = GameSession::new(&[Position::new(4, 4)]).unwrap();
        game.guess_atom(Position::new(4, 4)).unwrap();
        recorder.store_exchange(Request::GuessAtom { row: 4, column: 4 }, Response::Okay);

        let first = recorder.write_session_recording(&game).unwrap();
        assert_eq!(first, dir.join("session_000001.json"));
        let recording: SessionRecording =
            serde_json::from_reader(File::open(&first).unwrap()).unwrap();
        assert_eq!(recording.atoms, vec![Position::new(4, 4)]);
        assert_eq!(recording.exchanges.len(), 1);
        assert_eq!(recording.summary.status, GameStatus::Won);

        let second = recorder.write_session_recording(&game).unwrap();
        assert_eq!(second, dir.join("session_000002.json"));
        let recording: SessionRecording =
            serde_json::from_reader(File::open(&second).unwrap()).unwrap();
        assert!(recording.exchanges.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
