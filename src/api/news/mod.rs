pub mod schema;

use crate::api::method_url;
use crate::mapping::envelope;

/// Fetch the latest news entries of the given app
///
/// `max_length = 0` returns full article bodies, any other value
/// truncates them to that many characters. Doesn't need an API key
#[tracing::instrument(level = "trace")]
pub fn app_news(appid: u32, count: u32, max_length: u32) -> anyhow::Result<schema::AppNews> {
    tracing::trace!("Fetching app news");

    let url = format!(
        "{}?appid={}&count={}&maxlength={}",
        method_url("ISteamNews", "GetNewsForApp", 2),
        appid,
        count,
        max_length
    );

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::object_of(&response.json::<serde_json::Value>()?, "appnews")?)
}
