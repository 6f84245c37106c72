use crate::consts;
use crate::game::Bounds;
use crate::highscore::{FileStore, HighScoreStore, MemoryStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!("No config file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return where the high score should be kept.  If saving is turned off,
    /// or no file path is configured and the default path could not be
    /// computed, the high score lives only in memory.
    pub(crate) fn high_score_store(&self) -> Box<dyn HighScoreStore> {
        if !self.files.save_high_score {
            return Box::new(MemoryStore::new(0));
        }
        let path = self
            .files
            .high_score_file
            .clone()
            .or_else(FileStore::default_path);
        if let Some(path) = path {
            log::debug!("Keeping high score in {}", path.display());
            Box::new(FileStore::new(path))
        } else {
            log::warn!("Could not determine local data directory; high score will not be saved");
            Box::new(MemoryStore::new(0))
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Grid width in cells
    width: u16,

    /// Grid height in cells
    height: u16,

    /// Whether to ring the terminal bell on eating & crashing
    pub(crate) sound: bool,

    /// Whether to also ring the bell each time the snake turns
    pub(crate) turn_sound: bool,
}

impl GameConfig {
    /// The configured grid size, clamped to
    /// [`MIN_GRID_SIZE`][consts::MIN_GRID_SIZE]..=[`MAX_GRID_SIZE`][consts::MAX_GRID_SIZE]
    pub(crate) fn bounds(&self) -> Bounds {
        let clamp = |n: u16| n.clamp(consts::MIN_GRID_SIZE, consts::MAX_GRID_SIZE);
        Bounds::new(clamp(self.width), clamp(self.height))
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: consts::DEFAULT_GRID_SIZE,
            height: consts::DEFAULT_GRID_SIZE,
            sound: true,
            turn_sound: false,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_allowed() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config::load(&tmp.path().join("config.toml"), true).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.bounds(), Bounds::new(20, 20));
        assert!(cfg.game.sound);
        assert!(!cfg.game.turn_sound);
    }

    #[test]
    fn missing_file_not_allowed() {
        let tmp = tempfile::tempdir().unwrap();
        let r = Config::load(&tmp.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "[game]\n",
                "width = 12\n",
                "height = 9\n",
                "sound = false\n",
                "turn-sound = true\n",
                "\n",
                "[files]\n",
                "high-score-file = \"/tmp/snake.json\"\n",
                "save-high-score = false\n",
            )
        )
        .unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(
            cfg,
            Config {
                game: GameConfig {
                    width: 12,
                    height: 9,
                    sound: false,
                    turn_sound: true,
                },
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/tmp/snake.json")),
                    save_high_score: false,
                },
            }
        );
        assert_eq!(cfg.game.bounds(), Bounds::new(12, 9));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nheight = 15").unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(cfg.game.bounds(), Bounds::new(20, 15));
        assert!(cfg.game.sound);
        assert_eq!(cfg.files, FileConfig::default());
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nwidth = 2\nheight = 500").unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(cfg.game.bounds(), Bounds::new(5, 30));
    }

    #[test]
    fn bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game\nwidth = 2").unwrap();
        let r = Config::load(file.path(), false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]\nwraparound = true").unwrap();
        let cfg = Config::load(file.path(), false).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn configured_file_keeps_score_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("score.json");
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(path.clone()),
                save_high_score: true,
            },
            ..Config::default()
        };
        cfg.high_score_store().save(70).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.high_score_store().load().unwrap(), 70);
    }

    #[test]
    fn disabled_saving_keeps_score_in_memory() {
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(PathBuf::from("/nonexistent/dir/score.json")),
                save_high_score: false,
            },
            ..Config::default()
        };
        let mut store = cfg.high_score_store();
        store.save(90).unwrap();
        assert_eq!(store.load().unwrap(), 90);
    }
}
