pub mod schema;

use serde::{Serialize, Deserialize};

use crate::api::{method_url, url_encode};
use crate::mapping::envelope;

/// Request parameters of the owned games method
///
/// They're sent through the `input_json` query parameter,
/// serialized into one json object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGamesParams {
    pub steamid: u64,
    pub include_appinfo: bool,
    pub include_played_free_games: bool
}

impl OwnedGamesParams {
    /// Default parameters: include app names and icons, and games
    /// which are free to play
    pub fn new(steamid: u64) -> Self {
        Self {
            steamid,
            include_appinfo: true,
            include_played_free_games: true
        }
    }
}

/// Fetch the library of the given user
///
/// Private profiles are not an error. The API responds to them
/// with an empty object, which becomes an empty library here
#[tracing::instrument(level = "trace", skip(api_key))]
pub fn owned_games(api_key: &str, params: OwnedGamesParams) -> anyhow::Result<schema::OwnedGames> {
    tracing::trace!("Fetching owned games");

    let url = format!(
        "{}?key={}&input_json={}",
        method_url("IPlayerService", "GetOwnedGames", 1),
        api_key,
        url_encode(&serde_json::to_string(&params)?)
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::object_of(&response.json::<serde_json::Value>()?, "response")?)
}

/// Fetch the games the user played during the last two weeks
///
/// `count = 0` means "all of them". Private profiles respond
/// with an empty object, which becomes an empty list here
#[tracing::instrument(level = "trace", skip(api_key))]
pub fn recently_played_games(api_key: &str, steamid: u64, count: u32) -> anyhow::Result<schema::RecentlyPlayed> {
    tracing::trace!("Fetching recently played games");

    let url = format!(
        "{}?key={}&steamid={}&count={}",
        method_url("IPlayerService", "GetRecentlyPlayedGames", 1),
        api_key,
        steamid,
        count
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::object_of(&response.json::<serde_json::Value>()?, "response")?)
}

#[test]
fn test_input_json_serialization() {
    let params = OwnedGamesParams::new(76561198006409530);
    let input = serde_json::to_string(&params).unwrap();

    assert_eq!(
        input,
        r#"{"steamid":76561198006409530,"include_appinfo":true,"include_played_free_games":true}"#
    );

    assert_eq!(
        url_encode(&input),
        "%7B%22steamid%22%3A76561198006409530%2C%22include_appinfo%22%3Atrue%2C%22include_played_free_games%22%3Atrue%7D"
    );
}
