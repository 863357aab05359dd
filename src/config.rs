use crate::consts;
use crate::game::{BoardConfig, TickIntervals};
use crate::highscore::{HighScoreFile, LoadError, SaveError};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Board dimensions
    #[serde(default)]
    pub board: BoardConfig,

    /// Time between steps for each AI mode
    #[serde(default)]
    pub intervals: IntervalConfig,

    /// Settings about data files
    #[serde(default)]
    pub files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    ///
    /// # Errors
    ///
    /// Returns `Err` if the local configuration directory could not be
    /// determined.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
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
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the file in which the high score should be stored: the file
    /// given in the configuration or, if that is not set, the default high
    /// score file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    fn high_score_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| HighScoreFile::default_path().map(Cow::from))
    }

    /// Load the high score from its file.  Returns `None` if there is no
    /// high score yet.
    ///
    /// If `self.files.save_high_score` is `false`, nothing is read from disk
    /// and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be located, read, or parsed.
    pub fn load_high_score(&self) -> Result<Option<u32>, LoadError> {
        if !self.files.save_high_score {
            Ok(None)
        } else if let Some(p) = self.high_score_file() {
            HighScoreFile::new(p.into_owned()).load()
        } else {
            Err(LoadError::no_path())
        }
    }

    /// Save the given high score to its file.
    ///
    /// If `self.files.save_high_score` is `false`, nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be located or written.
    pub fn save_high_score(&self, score: u32) -> Result<(), SaveError> {
        if !self.files.save_high_score {
            return Ok(());
        }
        if let Some(p) = self.high_score_file() {
            HighScoreFile::new(p.into_owned()).save(score)
        } else {
            Err(SaveError::no_path())
        }
    }
}

/// Milliseconds between steps for each AI mode
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub struct IntervalConfig {
    pub human: u64,
    pub greedy: u64,
    pub lookahead: u64,
}

impl IntervalConfig {
    pub fn to_intervals(self) -> TickIntervals {
        TickIntervals::new(
            Duration::from_millis(self.human),
            Duration::from_millis(self.greedy),
            Duration::from_millis(self.lookahead),
        )
    }
}

impl Default for IntervalConfig {
    fn default() -> IntervalConfig {
        IntervalConfig {
            human: millis(consts::HUMAN_TICK_PERIOD),
            greedy: millis(consts::GREEDY_TICK_PERIOD),
            lookahead: millis(consts::LOOKAHEAD_TICK_PERIOD),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub struct FileConfig {
    /// Path at which the high score should be stored.  A leading `~` is
    /// expanded to the user's home directory when read from a file.
    pub high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            high_score_file: value
                .high_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            save_high_score: value.save_high_score,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
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
    use crate::AiMode;
    use std::io::Write;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.board, BoardConfig::default());
        assert_eq!(cfg.intervals.to_intervals(), TickIntervals::default());
        assert!(cfg.files.save_high_score);
    }

    #[test]
    fn full_config() {
        let src = concat!(
            "[board]\n",
            "width = 400\n",
            "height = 300\n",
            "cell-size = 10\n",
            "\n",
            "[intervals]\n",
            "human = 150\n",
            "lookahead = 20\n",
            "\n",
            "[files]\n",
            "high-score-file = \"/tmp/gridsnake/high-score.txt\"\n",
            "save-high-score = false\n",
        );
        let cfg = toml::from_str::<Config>(src).unwrap();
        pretty_assertions::assert_eq!(
            cfg,
            Config {
                board: BoardConfig {
                    width: 400,
                    height: 300,
                    cell_size: 10,
                },
                intervals: IntervalConfig {
                    human: 150,
                    greedy: 60,
                    lookahead: 20,
                },
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/tmp/gridsnake/high-score.txt")),
                    save_high_score: false,
                },
            }
        );
        let intervals = cfg.intervals.to_intervals();
        assert_eq!(intervals.get(AiMode::None), Duration::from_millis(150));
        assert_eq!(intervals.get(AiMode::Lookahead), Duration::from_millis(20));
    }

    #[test]
    fn high_score_file_under_home() {
        let src = "[files]\nhigh-score-file = \"~/gridsnake/high-score.txt\"\n";
        let cfg = toml::from_str::<Config>(src).unwrap();
        let path = cfg.files.high_score_file.unwrap();
        assert!(!path.starts_with("~"), "{} was not expanded", path.display());
        assert!(path.is_absolute());
        assert!(path.ends_with("gridsnake/high-score.txt"));
        assert!(cfg.files.save_high_score);
    }

    #[test]
    fn empty_files_section() {
        let cfg = toml::from_str::<Config>("[files]\n").unwrap();
        assert_eq!(cfg.files, FileConfig::default());
    }

    #[test]
    fn negative_dimension_rejected() {
        let r = toml::from_str::<Config>("[board]\nwidth = -800\n");
        assert!(r.is_err());
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_invalid() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[board]\nwidth = \"wide\"").unwrap();
        tmpfile.flush().unwrap();
        assert!(matches!(
            Config::load(tmpfile.path(), true),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn high_score_round_trip() {
        let tmpdir = tempfile::tempdir().unwrap();
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(tmpdir.path().join("scores").join("high-score.txt")),
                save_high_score: true,
            },
            ..Config::default()
        };
        assert_eq!(cfg.load_high_score().unwrap(), None);
        cfg.save_high_score(120).unwrap();
        assert_eq!(cfg.load_high_score().unwrap(), Some(120));
    }

    #[test]
    fn high_score_disabled() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("high-score.txt");
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(path.clone()),
                save_high_score: false,
            },
            ..Config::default()
        };
        cfg.save_high_score(120).unwrap();
        assert!(!path.exists());
        assert_eq!(cfg.load_high_score().unwrap(), None);
    }
}
