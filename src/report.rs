use crate::balancer::{BalanceResult, PlayerRecord};
use log::info;

const RULE_WIDTH: usize = 40;
const NAME_WIDTH: usize = 20;

pub fn format_team(team_name: &str, avg_rating: i64, team: &[PlayerRecord]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let rows: Vec<String> = team
        .iter()
        .map(|player| {
            format!(
                "{:<width$.width$} | MMR: {:<5}",
                player.name,
                player.rating,
                width = NAME_WIDTH
            )
        })
        .collect();

    format!(
        "\n{} - Avg MMR: {}\n{}\n{}\n{}",
        team_name,
        avg_rating,
        rule,
        rows.join("\n"),
        rule
    )
}

pub fn format_teams(result: &BalanceResult) -> [String; 2] {
    [
        format_team("Team A", result.avg_rating_a, &result.team_a),
        format_team("Team B", result.avg_rating_b, &result.team_b),
    ]
}

pub fn report(result: &BalanceResult) {
    for team in format_teams(result) {
        info!("{}", team);
    }
}
