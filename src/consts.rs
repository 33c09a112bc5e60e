/// Base URI of the Steam Web API
pub static WEB_API_URI: &str = "https://api.steampowered.com";

/// Base URI of the storefront API
///
/// Not officially a part of the Web API. Lives on its own host
/// and wraps its responses differently. No key needed
pub static STORE_API_URI: &str = "https://store.steampowered.com";
