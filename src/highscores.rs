//! High score persistence
//!
//! The best score is a single non-negative integer. Anything that goes wrong
//! while reading it yields 0; failing to write it is reported to the caller,
//! which logs and carries on.

use std::io;
use std::path::{Path, PathBuf};

/// Load/save surface for the persisted best score
pub trait HighScoreStore {
    /// Read the stored high score (0 when absent or unreadable)
    fn load(&mut self) -> u64;

    /// Overwrite the stored high score with `score`
    fn save(&mut self, score: u64) -> io::Result<()>;
}

/// Parse stored contents, tolerating surrounding whitespace
pub fn parse_high_score(contents: &str) -> Option<u64> {
    contents.trim().parse().ok()
}

/// High score kept as plain decimal text in a file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> u64 {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read high score {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match parse_high_score(&contents) {
            Some(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            None => {
                log::warn!("Unparsable high score in {}, using 0", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        // Whole-value replace: write aside, then rename over the old file
        let tmp = self.tmp_path();
        std::fs::write(&tmp, score.to_string())?;
        std::fs::rename(&tmp, &self.path)?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store, records every save
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub value: u64,
    pub saves: Vec<u64>,
    /// Make every save fail (exercises the degrade-and-continue path)
    pub fail_saves: bool,
}

impl MemoryHighScoreStore {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Default::default()
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> u64 {
        self.value
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        if self.fail_saves {
            return Err(io::Error::other("high score storage unavailable"));
        }
        self.value = score;
        self.saves.push(score);
        Ok(())
    }
}
