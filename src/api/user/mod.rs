pub mod schema;

use crate::api::{method_url, join_ids};
use crate::mapping::envelope;

/// Fetch profile summaries of the given steam ids
///
/// Up to 100 ids per request. Duplicates are removed and the
/// ids are sorted before they go into the query string
#[tracing::instrument(level = "trace", skip(api_key))]
pub fn player_summaries(api_key: &str, steamids: &[u64]) -> anyhow::Result<Vec<schema::PlayerSummary>> {
    tracing::trace!("Fetching player summaries");

    let url = format!(
        "{}?key={}&steamids={}",
        method_url("ISteamUser", "GetPlayerSummaries", 2),
        api_key,
        join_ids(steamids)
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::list_of(&response.json::<serde_json::Value>()?, "response", "players")?)
}

/// Fetch the friend list of the given user
///
/// Only works when the user's profile is public
#[tracing::instrument(level = "trace", skip(api_key))]
pub fn friend_list(api_key: &str, steamid: u64) -> anyhow::Result<Vec<schema::Friend>> {
    tracing::trace!("Fetching friend list");

    let url = format!(
        "{}?key={}&steamid={}&relationship=friend",
        method_url("ISteamUser", "GetFriendList", 1),
        api_key,
        steamid
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::list_of(&response.json::<serde_json::Value>()?, "friendslist", "friends")?)
}
