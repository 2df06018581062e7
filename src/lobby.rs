use crate::balancer::PlayerRecord;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;

// Every level is optional so an absent (or null) field can be reported by name
// instead of surfacing as a generic deserialization error.

#[derive(Clone, Deserialize, Debug)]
pub struct SessionMessage {
    pub notification: Option<Notification>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub custom_game_notification: Option<CustomGameNotification>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CustomGameNotification {
    pub custom_game_event: Option<CustomGameEvent>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct CustomGameEvent {
    pub lobby: Option<Lobby>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Lobby {
    pub players: Option<Vec<LobbyPlayer>>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LobbyPlayer {
    pub display_name: Option<String>,
    pub mmr: Option<i64>,
}

impl LobbyPlayer {
    fn into_record(self) -> Result<PlayerRecord> {
        Ok(PlayerRecord {
            name: self.display_name.ok_or(Error::MissingField("displayName"))?,
            rating: self.mmr.ok_or(Error::MissingField("mmr"))?,
        })
    }
}

impl SessionMessage {
    pub fn into_players(self) -> Result<Vec<LobbyPlayer>> {
        self.notification
            .ok_or(Error::MissingField("notification"))?
            .custom_game_notification
            .ok_or(Error::MissingField("customGameNotification"))?
            .custom_game_event
            .ok_or(Error::MissingField("customGameEvent"))?
            .lobby
            .ok_or(Error::MissingField("lobby"))?
            .players
            .ok_or(Error::MissingField("players"))
    }
}

/// Lobby roster from a session message payload, in lobby order.
pub fn parse_roster(payload: &str) -> Result<Vec<PlayerRecord>> {
    let message: SessionMessage = serde_json::from_str(payload)?;

    let roster = message
        .into_players()?
        .into_iter()
        .map(LobbyPlayer::into_record)
        .collect::<Result<Vec<PlayerRecord>>>()?;

    if roster.is_empty() {
        return Err(Error::EmptyRoster);
    }
    debug!("Parsed {} players from lobby", roster.len());
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOBBY_PAYLOAD: &str = r#"{
        "notification": {
            "customGameNotification": {
                "customGameEvent": {
                    "type": "lobbyUpdated",
                    "lobby": {
                        "lobbyId": "a1b2",
                        "players": [
                            {"displayName": "Diyu", "mmr": 1712, "team": 1, "ready": true},
                            {"displayName": "Harpoon", "mmr": 1388, "team": 2},
                            {"displayName": "Diyu", "mmr": 1712}
                        ]
                    }
                }
            }
        }
    }"#;

    #[test]
    fn extracts_name_and_rating_in_lobby_order() {
        let roster = parse_roster(LOBBY_PAYLOAD).unwrap();
        assert_eq!(
            roster,
            vec![
                PlayerRecord::new("Diyu", 1712),
                PlayerRecord::new("Harpoon", 1388),
                PlayerRecord::new("Diyu", 1712),
            ]
        );
    }

    #[test]
    fn missing_players_field_is_named() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"lobbyId": "x"}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::MissingField("players"))));
    }

    #[test]
    fn missing_envelope_is_named() {
        assert!(matches!(parse_roster("{}"), Err(Error::MissingField("notification"))));
        let payload = r#"{"notification": {"customGameNotification": null}}"#;
        assert!(matches!(
            parse_roster(payload),
            Err(Error::MissingField("customGameNotification"))
        ));
    }

    #[test]
    fn player_without_rating_is_rejected() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": [{"displayName": "NoMmr"}]}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::MissingField("mmr"))));
    }

    #[test]
    fn player_without_name_is_rejected() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": [{"displayName": "Diyu", "mmr": 1712}, {"mmr": 1400}]}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::MissingField("displayName"))));
    }

    #[test]
    fn fractional_rating_is_malformed() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": [{"displayName": "Diyu", "mmr": 1500.0}]}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn huge_ratings_parse_and_balance() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": [{"displayName": "A", "mmr": 5000000000000000000}, {"displayName": "B", "mmr": 5000000000000000000}]}}}}}"#;
        let roster = parse_roster(payload).unwrap();
        let result = crate::balancer::balance(&roster).unwrap();
        assert_eq!(result.rating_diff, 0);
        assert_eq!(result.avg_rating_b, 5_000_000_000_000_000_000);
    }

    #[test]
    fn empty_player_list_is_an_error() {
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": []}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::EmptyRoster)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_roster("{\"notification\": "), Err(Error::MalformedPayload(_))));
        let payload = r#"{"notification": {"customGameNotification": {"customGameEvent": {"lobby": {"players": [{"displayName": "A", "mmr": "high"}]}}}}}"#;
        assert!(matches!(parse_roster(payload), Err(Error::MalformedPayload(_))));
    }
}
