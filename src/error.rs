use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid log directory: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Error reading log file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No matching 'customGameNotification' entries found in {}", path.display())]
    NoMatchingLogEntry { path: PathBuf },

    #[error("Failed to parse JSON data: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Session message is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("No players found in the session message")]
    EmptyRoster,

    #[error("Environment variable {0} is not set")]
    MissingEnvironment(&'static str),

    #[error("Lobby of {size} players is too large to balance exhaustively (max {max})")]
    RosterTooLarge { size: usize, max: usize },
}
