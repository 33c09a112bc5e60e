use crate::json_record;

json_record! {
    /// One achievement of one user
    ///
    /// `name` and `description` are only present when the request
    /// asked for a language. `unlocktime` can be absent, and is `0`
    /// for achievements which were never unlocked
    pub struct PlayerAchievement {
        apiname: String => required "apiname",
        achieved: u8 => required "achieved",
        unlock_time: Option<u64> => optional "unlocktime",
        name: Option<String> => optional "name",
        description: Option<String> => optional "description"
    }
}

json_record! {
    /// A user's achievement state in one game
    ///
    /// This interface is older than the others and uses camel case
    /// keys. The in-band `success` flag is handled by the request
    /// function and isn't carried here
    pub struct PlayerStats {
        steamid: u64 => lenient "steamID",
        game_name: String => required "gameName",
        achievements: Vec<PlayerAchievement> => required "achievements"
    }
}

json_record! {
    /// Global unlock rate of one achievement
    ///
    /// Older versions of this method sent the percent as a string,
    /// and some games still do
    pub struct GlobalAchievement {
        name: String => required "name",
        percent: f64 => lenient "percent"
    }
}
