use crate::json_record;

json_record! {
    /// Public part of a user's profile
    ///
    /// Fields after the avatars are only present when the profile
    /// is public, or when the requesting key belongs to a friend
    pub struct PlayerSummary {
        steamid: u64 => lenient "steamid",
        persona_name: String => required "personaname",
        profile_url: String => required "profileurl",
        avatar: String => required "avatar",
        avatar_medium: String => required "avatarmedium",
        avatar_full: String => required "avatarfull",
        persona_state: u8 => required "personastate",
        visibility_state: u8 => required "communityvisibilitystate",
        profile_state: Option<u8> => optional "profilestate",
        last_logoff: Option<u64> => optional "lastlogoff",
        comment_permission: Option<u8> => optional "commentpermission",
        real_name: Option<String> => optional "realname",
        primary_clan_id: Option<u64> => lenient_optional "primaryclanid",
        time_created: Option<u64> => optional "timecreated",
        game_id: Option<u64> => lenient_optional "gameid",
        game_extra_info: Option<String> => optional "gameextrainfo",
        game_server_ip: Option<String> => optional "gameserverip",
        loc_country_code: Option<String> => optional "loccountrycode",
        loc_state_code: Option<String> => optional "locstatecode",
        loc_city_id: Option<u32> => optional "loccityid"
    }
}

json_record! {
    /// Entry of a user's friend list
    pub struct Friend {
        steamid: u64 => lenient "steamid",
        relationship: String => required "relationship",
        friend_since: u64 => required "friend_since"
    }
}
