use serde_json::json;

use crate::mapping::{FromJson, envelope};

use crate::api::user::schema::PlayerSummary;
use crate::api::player_service::schema::{OwnedGames, RecentlyPlayed};
use crate::api::user_stats::schema::{PlayerStats, GlobalAchievement};
use crate::api::news::schema::AppNews;
use crate::api::apps::schema::App;
use crate::api::store::schema::AppDetails;

// Trimmed capture of GetPlayerSummaries for one public profile
pub const PLAYER_SUMMARIES: &str = r#"{
    "response": {
        "players": [
            {
                "steamid": "76561197960435530",
                "communityvisibilitystate": 3,
                "profilestate": 1,
                "personaname": "Robin",
                "profileurl": "https://steamcommunity.com/id/robinwalker/",
                "avatar": "https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c.jpg",
                "avatarmedium": "https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c_medium.jpg",
                "avatarfull": "https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c_full.jpg",
                "lastlogoff": 1738105714,
                "personastate": 0,
                "realname": "Robin Walker",
                "primaryclanid": "103582791429521412",
                "timecreated": 1063407589,
                "gameid": "440",
                "loccountrycode": "US",
                "locstatecode": "WA"
            }
        ]
    }
}"#;

#[test]
fn test_player_summaries() {
    let body = serde_json::from_str(PLAYER_SUMMARIES).unwrap();
    let players = envelope::list_of::<PlayerSummary>(&body, "response", "players").unwrap();

    assert_eq!(players.len(), 1);

    let player = &players[0];

    assert_eq!(player.steamid, 76561197960435530);
    assert_eq!(player.persona_name, "Robin");
    assert_eq!(player.primary_clan_id, Some(103582791429521412));
    assert_eq!(player.game_id, Some(440));
    assert_eq!(player.real_name.as_deref(), Some("Robin Walker"));
    assert_eq!(player.loc_city_id, None);
}

#[test]
fn test_owned_games() {
    let body = json!({
        "response": {
            "game_count": 2,
            "games": [
                { "appid": 10, "name": "A" },
                { "appid": 20 }
            ]
        }
    });

    let library: OwnedGames = envelope::object_of(&body, "response").unwrap();

    assert_eq!(library.game_count, 2);
    assert_eq!(library.games.len(), 2);
    assert_eq!(library.games[0].name.as_deref(), Some("A"));
    assert_eq!(library.games[1].appid, 20);
    assert_eq!(library.games[1].name, None);
    assert_eq!(library.games[1].playtime_forever, None);
}

#[test]
fn test_private_profiles_have_empty_libraries() {
    // Both player service methods degenerate to an empty response
    // object when the profile is private
    let body = json!({"response": {}});

    let library: OwnedGames = envelope::object_of(&body, "response").unwrap();

    assert_eq!(library.game_count, 0);
    assert!(library.games.is_empty());

    let recent: RecentlyPlayed = envelope::object_of(&body, "response").unwrap();

    assert_eq!(recent.total_count, 0);
    assert!(recent.games.is_empty());
}

#[test]
fn test_player_stats() {
    // This interface uses camel case keys and carries an in-band
    // success flag, which the record must ignore
    let body = json!({
        "steamID": "76561197972495328",
        "gameName": "Half-Life 2",
        "achievements": [
            { "apiname": "HL2_HIT_CANCOP_WITHCAN", "achieved": 1, "unlocktime": 1584843504 },
            { "apiname": "HL2_BEAT_ROUTEKANAL", "achieved": 0, "unlocktime": 0 }
        ],
        "success": true
    });

    let stats = PlayerStats::from_json("playerstats", &body).unwrap();

    assert_eq!(stats.game_name, "Half-Life 2");
    assert_eq!(stats.achievements.len(), 2);
    assert_eq!(stats.achievements[0].achieved, 1);
    assert_eq!(stats.achievements[1].unlock_time, Some(0));
    assert_eq!(stats.achievements[1].name, None);
}

#[test]
fn test_global_achievement_percentages() {
    // Percents arrive as strings from some games and as numbers
    // from others, within the same array
    let body = json!({
        "achievementpercentages": {
            "achievements": [
                { "name": "HL2_HIT_CANCOP_WITHCAN", "percent": "87.7" },
                { "name": "HL2_BEAT_GAME", "percent": 34.5 }
            ]
        }
    });

    let percentages = envelope::list_of::<GlobalAchievement>(&body, "achievementpercentages", "achievements").unwrap();

    assert_eq!(percentages[0].percent, 87.7);
    assert_eq!(percentages[1].percent, 34.5);
}

#[test]
fn test_app_news() {
    let body = json!({
        "appnews": {
            "appid": 440,
            "newsitems": [
                {
                    "gid": "5239720972968822556",
                    "title": "Team Fortress 2 Update Released",
                    "url": "https://store.steampowered.com/news/226572",
                    "is_external_url": false,
                    "author": "Valve",
                    "contents": "An update to Team Fortress 2 has been released.",
                    "feedlabel": "Product Update",
                    "date": 1721224859,
                    "feedname": "steam_updates",
                    "feed_type": 1,
                    "appid": 440
                }
            ],
            "count": 2717
        }
    });

    let news: AppNews = envelope::object_of(&body, "appnews").unwrap();

    assert_eq!(news.appid, 440);
    assert_eq!(news.count, 2717);
    assert_eq!(news.newsitems[0].gid, 5239720972968822556);
    assert_eq!(news.newsitems[0].feed_label.as_deref(), Some("Product Update"));
}

#[test]
fn test_app_list() {
    let body = json!({
        "applist": {
            "apps": [
                { "appid": 10, "name": "Counter-Strike" },
                { "appid": 20, "name": "Team Fortress Classic" }
            ]
        }
    });

    let apps = envelope::list_of::<App>(&body, "applist", "apps").unwrap();

    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].name, "Counter-Strike");
}

// Trimmed capture of the storefront details of a free game, with
// its usual inconsistencies kept: a string required_age, a null
// website and string genre ids next to numeric category ids
pub const APP_DETAILS: &str = r#"{
    "440": {
        "success": true,
        "data": {
            "type": "game",
            "name": "Team Fortress 2",
            "steam_appid": 440,
            "required_age": "0",
            "is_free": true,
            "detailed_description": "<p>One of the most popular online action games of all time</p>",
            "about_the_game": "<p>One of the most popular online action games of all time</p>",
            "short_description": "Nine distinct classes provide a broad range of tactical abilities.",
            "supported_languages": "English, French, German",
            "header_image": "https://shared.steamstatic.com/store_item_assets/steam/apps/440/header.jpg",
            "website": null,
            "developers": ["Valve"],
            "publishers": ["Valve"],
            "platforms": { "windows": true, "mac": true, "linux": true },
            "metacritic": { "score": 92, "url": "https://www.metacritic.com/game/pc/team-fortress-2" },
            "categories": [
                { "id": 1, "description": "Multi-player" },
                { "id": 8, "description": "Valve Anti-Cheat enabled" }
            ],
            "genres": [
                { "id": "1", "description": "Action" }
            ],
            "screenshots": [
                {
                    "id": 0,
                    "path_thumbnail": "https://shared.steamstatic.com/store_item_assets/steam/apps/440/ss_1.600x338.jpg",
                    "path_full": "https://shared.steamstatic.com/store_item_assets/steam/apps/440/ss_1.1920x1080.jpg"
                }
            ],
            "recommendations": { "total": 997802 },
            "achievements": {
                "total": 520,
                "highlighted": [
                    { "name": "Head of the Class", "path": "https://steamcdn-a.akamaihd.net/steamcommunity/public/images/apps/440/tf_play_game_everyclass.jpg" }
                ]
            },
            "release_date": { "coming_soon": false, "date": "10 Oct, 2007" }
        }
    }
}"#;

#[test]
fn test_app_details() {
    let body = serde_json::from_str(APP_DETAILS).unwrap();
    let details = envelope::keyed_data::<AppDetails>(&body).unwrap().unwrap();

    assert_eq!(details.app_type, "game");
    assert_eq!(details.name, "Team Fortress 2");
    assert_eq!(details.required_age, 0);
    assert!(details.is_free);
    assert_eq!(details.website, None);
    assert_eq!(details.price_overview, None);
    assert!(details.platforms.linux);
    assert_eq!(details.metacritic.map(|metacritic| metacritic.score), Some(92));
    assert_eq!(details.categories.as_ref().and_then(|categories| categories.first()).map(|category| category.id), Some(1));
    assert_eq!(details.genres.as_ref().and_then(|genres| genres.first()).map(|genre| genre.id), Some(1));
    assert_eq!(details.release_date.date, "10 Oct, 2007");
}

#[test]
fn test_app_details_not_found() {
    let body = json!({"12345": {"success": false}});

    assert_eq!(envelope::keyed_data::<AppDetails>(&body), Ok(None));
}
