pub mod schema;

use crate::api::method_url;
use crate::mapping::envelope;

/// Fetch the full list of public apps
///
/// The list is huge, over a hundred thousand entries, and the
/// method has no pagination. Doesn't need an API key
#[tracing::instrument(level = "trace")]
pub fn app_list() -> anyhow::Result<Vec<schema::App>> {
    tracing::trace!("Fetching app list");

    let response = minreq::get(method_url("ISteamApps", "GetAppList", 2))
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::list_of(&response.json::<serde_json::Value>()?, "applist", "apps")?)
}
