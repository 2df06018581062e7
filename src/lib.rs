pub mod balancer;
pub mod config;
pub mod error;
pub mod lobby;
pub mod log_reader;
pub mod report;
pub mod team_sorting;

pub use balancer::{balance, BalanceResult, PlayerRecord};
pub use error::{Error, Result};
