use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file holding a single high score as decimal text
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path }
    }

    /// Return the default high score file path, or `None` if the local data
    /// directory could not be determined
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("high-score.txt"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the high score.  Returns `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or did not contain a
    /// nonnegative integer.
    pub fn load(&self) -> Result<Option<u32>, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::read(e)),
        };
        src.trim().parse::<u32>().map(Some).map_err(LoadError::parse)
    }

    /// Write the high score, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `Err` if the parent directories could not be created or the
    /// file could not be written.
    pub fn save(&self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(&self.path, format!("{score}\n")).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    pub(crate) fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] ParseIntError),
}
