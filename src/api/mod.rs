pub mod apps;
pub mod news;
pub mod player_service;
pub mod store;
pub mod user;
pub mod user_stats;

/// Build the URL of a web API method:
/// `https://api.steampowered.com/<interface>/<method>/v<version>/`
pub fn method_url(interface: &str, method: &str, version: u8) -> String {
    format!("{}/{}/{}/v{}/", crate::consts::WEB_API_URI, interface, method, version)
}

/// Join steam ids into the form the API expects:
/// sorted, deduplicated, comma separated
pub fn join_ids(ids: &[u64]) -> String {
    let mut ids = ids.to_vec();

    ids.sort_unstable();
    ids.dedup();

    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Percent-encode a query parameter value
///
/// Needed for the `input_json` parameter, whose value is a
/// serialized json object. Everything outside the unreserved
/// set is escaped
pub fn url_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' |
            b'-' | b'.' | b'_' | b'~' => encoded.push(byte as char),

            _ => encoded.push_str(&format!("%{:02X}", byte))
        }
    }

    encoded
}

#[test]
fn test_ids_joining() {
    assert_eq!(join_ids(&[5, 3, 5, 1]), "1,3,5");
    assert_eq!(join_ids(&[76561198006409530]), "76561198006409530");
    assert_eq!(join_ids(&[]), "");
}

#[test]
fn test_url_building() {
    assert_eq!(
        method_url("ISteamUser", "GetPlayerSummaries", 2),
        "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/"
    );

    assert_eq!(url_encode(r#"{"steamid":1}"#), "%7B%22steamid%22%3A1%7D");
}
