use crate::error::{Error, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const LOG_FILE_NAME: &str = "Full_Log.log";
pub const SESSION_MESSAGE_MARKER: &str = "[BACKEND] Parsed session message:";
pub const CUSTOM_GAME_MARKER: &str = "\"customGameNotification\"";
const PAYLOAD_DELIMITER: &str = ": ";

/// Name of the subdirectory of `log_root` created most recently.
pub fn find_latest_log_folder(log_root: &Path) -> Result<String> {
    let not_found = || Error::DirectoryNotFound {
        path: log_root.to_path_buf(),
    };
    let entries = fs::read_dir(log_root).map_err(|_| not_found())?;

    let mut latest: Option<(SystemTime, String)> = None;
    for entry in entries.flatten() {
        // fs::metadata follows symlinks, so a linked log folder still counts
        let Ok(metadata) = fs::metadata(entry.path()) else {
            continue;
        };
        if !metadata.is_dir() {
            continue;
        }
        let Some(created) = metadata.created().or_else(|_| metadata.modified()).ok() else {
            continue;
        };
        let candidate = (created, entry.file_name().to_string_lossy().into_owned());
        // ties go to the greater name so the pick doesn't depend on read_dir order
        if latest.as_ref().is_none_or(|current| candidate > *current) {
            latest = Some(candidate);
        }
    }

    latest.map(|(_, name)| name).ok_or_else(not_found)
}

/// Full path of the log folder to read. `None` picks the newest folder.
pub fn resolve_log_folder(log_root: &Path, folder_name: Option<&str>) -> Result<PathBuf> {
    let folder_name = match folder_name {
        Some(name) => name.to_string(),
        None => find_latest_log_folder(log_root)?,
    };

    let folder = log_root.join(&folder_name);
    if !folder.is_dir() {
        return Err(Error::DirectoryNotFound { path: folder });
    }
    Ok(folder)
}

/// Payload of the last line containing both markers, with everything up to and
/// including the first `": "` removed.
pub fn extract_last_matching_line(log_path: &Path, marker_a: &str, marker_b: &str) -> Result<String> {
    let read_error = |source| Error::FileRead {
        path: log_path.to_path_buf(),
        source,
    };
    let file = File::open(log_path).map_err(read_error)?;

    let mut last_match = None;
    let mut match_count = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_error)?;
        if !line.contains(marker_a) || !line.contains(marker_b) {
            continue;
        }
        if let Some((_, payload)) = line.split_once(PAYLOAD_DELIMITER) {
            match_count += 1;
            last_match = Some(payload.to_string());
        }
    }
    debug!("{} matching lines in {}", match_count, log_path.display());

    last_match.ok_or_else(|| Error::NoMatchingLogEntry {
        path: log_path.to_path_buf(),
    })
}

/// The most recent custom game session message logged in `log_folder`.
pub fn find_last_session_message(log_folder: &Path) -> Result<String> {
    extract_last_matching_line(
        &log_folder.join(LOG_FILE_NAME),
        SESSION_MESSAGE_MARKER,
        CUSTOM_GAME_MARKER,
    )
}
