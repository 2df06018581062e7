use crate::balancer::{balance, BalanceResult};
use crate::config::Config;
use crate::error::Result;
use crate::lobby::parse_roster;
use crate::log_reader::{find_last_session_message, resolve_log_folder};
use log::info;

/// Reads the newest lobby from the configured log folder and splits it into teams.
pub fn sort_lobby_into_teams(config: &Config) -> Result<BalanceResult> {
    let log_folder = resolve_log_folder(&config.log_root, config.folder.name())?;
    if let Some(folder_name) = log_folder.file_name() {
        info!("Processing log folder: {}", folder_name.to_string_lossy());
    }

    let session_message = find_last_session_message(&log_folder)?;
    let roster = parse_roster(&session_message)?;
    balance(&roster)
}
