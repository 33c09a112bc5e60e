pub mod schema;

use crate::api::method_url;
use crate::mapping::{envelope, record};

/// Fetch the user's achievements in the given game
///
/// This method reports failures inside its own namespace instead
/// of with an HTTP status. A closed profile, or a game without
/// achievements, comes back as `"success": false` and turns into
/// `Ok(None)` here
#[tracing::instrument(level = "trace", skip(api_key))]
pub fn player_achievements(api_key: &str, steamid: u64, appid: u32) -> anyhow::Result<Option<schema::PlayerStats>> {
    tracing::trace!("Fetching player achievements");

    let url = format!(
        "{}?key={}&steamid={}&appid={}&l=english",
        method_url("ISteamUserStats", "GetPlayerAchievements", 1),
        api_key,
        steamid,
        appid
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    let body = response.json::<serde_json::Value>()?;
    let stats = envelope::nested(&body, "playerstats")?;

    if !record::optional(stats, "success")?.unwrap_or(false) {
        if let Some(error) = stats.get("error").and_then(|error| error.as_str()) {
            tracing::trace!("Achievements not available: {error}");
        }

        return Ok(None);
    }

    Ok(Some(envelope::object_of(&body, "playerstats")?))
}

/// Fetch the global unlock rates of a game's achievements
///
/// Doesn't need an API key
#[tracing::instrument(level = "trace")]
pub fn global_achievement_percentages(gameid: u32) -> anyhow::Result<Vec<schema::GlobalAchievement>> {
    tracing::trace!("Fetching global achievement percentages");

    let url = format!(
        "{}?gameid={}",
        method_url("ISteamUserStats", "GetGlobalAchievementPercentagesForApp", 2),
        gameid
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::list_of(&response.json::<serde_json::Value>()?, "achievementpercentages", "achievements")?)
}
