pub mod consts;
pub mod mapping;
pub mod api;

#[cfg(test)]
mod tests;

// Needed by the json_record! macro expansions
pub use serde_json;

pub mod prelude {
    pub use super::consts::*;

    pub use super::mapping::{
        FromJson,
        FromJsonLenient,
        ToJson,
        MappingError
    };

    pub use super::mapping::{envelope, record};

    pub use super::api::{method_url, join_ids};
}

lazy_static::lazy_static! {
    /// Timeout of the HTTP requests, in seconds
    ///
    /// Can be overridden with the `STEAM_WEB_REQUESTS_TIMEOUT`
    /// environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var("STEAM_WEB_REQUESTS_TIMEOUT")
        .ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(8);
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
