use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError
{
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read word file {path}: {source}")]
    WordFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid round timing: {0}")]
    InvalidTiming(String),
}
