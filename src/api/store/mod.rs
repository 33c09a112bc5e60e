pub mod schema;

use crate::mapping::envelope;

/// Fetch the storefront page data of the given app
///
/// This endpoint lives on the storefront host rather than the
/// web API one and wraps its response differently: the payload
/// is keyed by the requested app id. An unknown or delisted app
/// is `"success": false`, which turns into `Ok(None)` here
#[tracing::instrument(level = "trace")]
pub fn app_details(appid: u32) -> anyhow::Result<Option<schema::AppDetails>> {
    tracing::trace!("Fetching app details");

    let url = format!("{}/api/appdetails?appids={}", crate::consts::STORE_API_URI, appid);

    let response = minreq::get(url)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    Ok(envelope::keyed_data(&response.json::<serde_json::Value>()?)?)
}
