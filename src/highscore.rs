use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Somewhere to keep the high score between runs
pub(crate) trait HighScoreStore: fmt::Debug {
    /// Read the stored high score.  A store with nothing in it yet reports
    /// 0.
    fn load(&mut self) -> Result<u32, LoadError>;

    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// A high score kept only for the life of the process
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore {
    score: u32,
}

impl MemoryStore {
    pub(crate) fn new(score: u32) -> Self {
        MemoryStore { score }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, LoadError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.score = score;
        Ok(())
    }
}

/// A high score kept in a JSON file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        let record =
            serde_json::from_slice::<HighScoreRecord>(&src).map_err(LoadError::deserialize)?;
        log::info!("Loaded high score {} from {}", record.high_score, self.path.display());
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let record = HighScoreRecord { high_score: score };
        let mut src = serde_json::to_string(&record).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        log::debug!("Saved high score {score} to {}", self.path.display());
        Ok(())
    }
}

/// On-disk layout: a single score under a fixed key
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreRecord {
    #[serde(rename = "high-score")]
    high_score: u32,
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}
