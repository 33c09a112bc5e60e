use serde_json::json;

use crate::json_record;
use crate::mapping::{MappingError, envelope};

json_record! {
    struct Player {
        steamid: u64 => lenient "steamid",
        name: String => required "personaname"
    }
}

#[test]
fn test_list_envelope() {
    let body = json!({
        "response": {
            "players": [
                { "steamid": "76561198006409530", "personaname": "gabe" },
                { "steamid": "76561197960287930", "personaname": "robin" }
            ]
        }
    });

    let players = envelope::list_of::<Player>(&body, "response", "players").unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "gabe");
    assert_eq!(players[1].steamid, 76561197960287930);
}

#[test]
fn test_list_envelope_missing_keys() {
    assert_eq!(
        envelope::list_of::<Player>(&json!({}), "response", "players"),
        Err(MappingError::KeyMissing(String::from("response")))
    );

    assert_eq!(
        envelope::list_of::<Player>(&json!({"response": {}}), "response", "players"),
        Err(MappingError::KeyMissing(String::from("response.players")))
    );
}

#[test]
fn test_list_envelope_wrong_shapes() {
    assert_eq!(
        envelope::list_of::<Player>(&json!([]), "response", "players"),
        Err(MappingError::TypeMismatch {
            key: String::from("<response root>"),
            expected: String::from("object"),
            found: String::from("array")
        })
    );

    // A broken element reports its position along the dotted path
    // and fails the whole call
    assert_eq!(
        envelope::list_of::<Player>(
            &json!({"response": {"players": [{"steamid": 1, "personaname": "a"}, 42]}}),
            "response",
            "players"
        ),
        Err(MappingError::TypeMismatch {
            key: String::from("response.players[1]"),
            expected: String::from("object"),
            found: String::from("number")
        })
    );
}

#[test]
fn test_keyed_envelope() {
    let body = json!({
        "440": {
            "success": true,
            "data": { "steamid": 1, "personaname": "placeholder" }
        }
    });

    let player = envelope::keyed_data::<Player>(&body).unwrap();

    assert_eq!(player.map(|player| player.name).as_deref(), Some("placeholder"));
}

#[test]
fn test_keyed_envelope_no_data() {
    // "success": false is an answer, not an error
    assert_eq!(envelope::keyed_data::<Player>(&json!({"12345": {"success": false}})), Ok(None));
    assert_eq!(envelope::keyed_data::<Player>(&json!({})), Ok(None));

    // A success without a payload is a malformed response though
    assert_eq!(
        envelope::keyed_data::<Player>(&json!({"12345": {"success": true}})),
        Err(MappingError::KeyMissing(String::from("12345.data")))
    );
}

#[test]
fn test_nested_access() {
    let body = json!({"playerstats": {"success": false, "error": "Profile is not public"}});
    let stats = envelope::nested(&body, "playerstats").unwrap();

    assert_eq!(stats.get("success"), Some(&json!(false)));

    assert_eq!(
        envelope::nested(&body, "response").unwrap_err(),
        MappingError::KeyMissing(String::from("response"))
    );
}
