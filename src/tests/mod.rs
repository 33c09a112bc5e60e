use serde_json::json;

use crate::prelude::*;
use crate::json_record;

mod envelope;
mod schemas;

json_record! {
    struct Entry {
        id: u64 => lenient "id",
        label: Option<String> => optional "label"
    }
}

#[test]
fn test_record_round_trip() {
    let entry = Entry::from_json("entry", &json!({
        "id": "76561198006409530",
        "label": "test"
    })).unwrap();

    assert_eq!(entry.id, 76561198006409530);
    assert_eq!(entry.label.as_deref(), Some("test"));

    // Serialization emits the canonical encoding, so the lenient
    // id comes back as a number. The records stay equal
    assert_eq!(Entry::from_json("entry", &entry.to_json()), Ok(entry));
}
