use serde_json::{Map, Value};

use crate::json_record;
use crate::mapping::{FromJson, ToJson, MappingError, record};

json_record! {
    /// Entry of a user's game library
    ///
    /// `name` and `img_icon_url` are only filled when the request
    /// asked for app info. Playtimes are in minutes
    pub struct OwnedGame {
        appid: u32 => required "appid",
        name: Option<String> => optional "name",
        playtime_forever: Option<u32> => optional "playtime_forever",
        playtime_2weeks: Option<u32> => optional "playtime_2weeks",
        playtime_windows_forever: Option<u32> => optional "playtime_windows_forever",
        playtime_mac_forever: Option<u32> => optional "playtime_mac_forever",
        playtime_linux_forever: Option<u32> => optional "playtime_linux_forever",
        rtime_last_played: Option<u64> => optional "rtime_last_played",
        img_icon_url: Option<String> => optional "img_icon_url"
    }
}

/// A user's game library
///
/// Private profiles respond with `{"response": {}}`, without
/// either of the keys, so this record can't be a plain mapping
/// table. Both fields fall back to an empty library
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedGames {
    pub game_count: u32,
    pub games: Vec<OwnedGame>
}

impl FromJson for OwnedGames {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
        let object = record::as_object(key, value)?;

        Ok(Self {
            game_count: record::optional(object, "game_count")?.unwrap_or(0),
            games: record::optional(object, "games")?.unwrap_or_default()
        })
    }
}

impl ToJson for OwnedGames {
    fn to_json(&self) -> Value {
        let mut object = Map::new();

        object.insert(String::from("game_count"), self.game_count.to_json());
        object.insert(String::from("games"), self.games.to_json());

        Value::Object(object)
    }
}

json_record! {
    /// Entry of a user's recent playtime report
    pub struct RecentlyPlayedGame {
        appid: u32 => required "appid",
        name: Option<String> => optional "name",
        playtime_2weeks: Option<u32> => optional "playtime_2weeks",
        playtime_forever: Option<u32> => optional "playtime_forever",
        img_icon_url: Option<String> => optional "img_icon_url"
    }
}

/// Games a user played during the last two weeks
///
/// Shares the private profile behavior of [`OwnedGames`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecentlyPlayed {
    pub total_count: u32,
    pub games: Vec<RecentlyPlayedGame>
}

impl FromJson for RecentlyPlayed {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
        let object = record::as_object(key, value)?;

        Ok(Self {
            total_count: record::optional(object, "total_count")?.unwrap_or(0),
            games: record::optional(object, "games")?.unwrap_or_default()
        })
    }
}

impl ToJson for RecentlyPlayed {
    fn to_json(&self) -> Value {
        let mut object = Map::new();

        object.insert(String::from("total_count"), self.total_count.to_json());
        object.insert(String::from("games"), self.games.to_json());

        Value::Object(object)
    }
}
