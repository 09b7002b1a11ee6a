use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Persistence contract for the high score.
///
/// Queried once at startup and written during the restart transition
/// whenever the finished game beat the record.
pub trait HighScoreStore {
    /// Loads the stored high score.
    fn load(&self) -> io::Result<u32>;

    /// Persists a new high score.
    fn save(&mut self, score: u32) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// High-score store backed by a JSON file in the platform data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at the platform-correct default path.
    #[must_use]
    pub fn at_default_path() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);

        Self { path: base }
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub fn at_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HighScoreStore for FileStore {
    /// Returns `Ok(0)` when the score file does not yet exist (first run).
    /// Returns `Err` when the file exists but cannot be read or parsed, so
    /// the caller can surface a warning before entering raw terminal mode.
    fn load(&self) -> io::Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.high_score)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

        fs::write(&self.path, json)
    }
}

/// In-memory store for tests and embedding.
///
/// Clones share one value cell, so a test can hand the game a clone and
/// observe what the restart transition persisted. `Rc` is enough: the
/// whole simulation is single-threaded and cooperative.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<u32>>,
}

impl MemoryStore {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    /// Returns the currently stored high score.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> io::Result<u32> {
        Ok(self.value.get())
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.value.set(score);
        Ok(())
    }
}
