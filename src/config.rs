use crate::error::{Error, Result};
use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;

pub const LATEST_FOLDER: &str = "latest";
pub const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";
const LOG_SUBPATH: [&str; 3] = ["LunchboxEntertainment", "Sirocco", "Logs"];

#[derive(Debug, Parser)]
#[command(name = "lobby-teams", version, about = "Parse log file and sort players into teams.")]
pub struct Args {
    /// Directory name for lobby logs
    #[arg(default_value = LATEST_FOLDER)]
    pub log_folder: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FolderSelection {
    Latest,
    Named(String),
}

impl FolderSelection {
    pub fn name(&self) -> Option<&str> {
        match self {
            FolderSelection::Latest => None,
            FolderSelection::Named(name) => Some(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_root: PathBuf,
    pub folder: FolderSelection,
}

/// The game logs under LocalLow, next to the Local app data directory.
pub fn log_root_from_local_app_data(local_app_data: &OsStr) -> PathBuf {
    let local_low = local_app_data.to_string_lossy().replace("Local", "LocalLow");
    LOG_SUBPATH
        .iter()
        .fold(PathBuf::from(local_low), |path, part| path.join(part))
}

pub fn parse_config(args: Args, local_app_data: Option<&OsStr>) -> Result<Config> {
    let local_app_data = local_app_data.ok_or(Error::MissingEnvironment(LOCAL_APP_DATA_VAR))?;
    let folder = match args.log_folder.as_str() {
        LATEST_FOLDER => FolderSelection::Latest,
        name => FolderSelection::Named(name.to_string()),
    };

    Ok(Config {
        log_root: log_root_from_local_app_data(local_app_data),
        folder,
    })
}
