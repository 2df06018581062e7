use clap::Parser;
use env_logger::{Builder, Target};
use log::{error, LevelFilter};
use lobby_teams::config::{parse_config, Args, LOCAL_APP_DATA_VAR};
use lobby_teams::report::report;
use lobby_teams::team_sorting::sort_lobby_into_teams;
use std::env;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut builder = Builder::new();
    builder
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    let args = Args::parse();
    let result = parse_config(args, env::var_os(LOCAL_APP_DATA_VAR).as_deref())
        .and_then(|config| sort_lobby_into_teams(&config));

    match result {
        Ok(teams) => {
            report(&teams);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
