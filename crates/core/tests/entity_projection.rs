//! Black-box test of the public entity surface: a message-like kind with a
//! nested author, wide-integer flags, and an id list, projected end to end.

use aviary_core::{
    Entity, EntityTag, FieldValue, Snowflake, Timestamp, ToPlain, inspect, to_plain_data,
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Author {
    id: Option<Snowflake>,
    username: Option<String>,
}

impl Entity for Author {
    fn kind(&self) -> &'static str {
        "user"
    }

    fn id(&self) -> Option<&Snowflake> {
        self.id.as_ref()
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["username"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => self.username.clone().map(FieldValue::from),
            _ => None,
        }
    }
}

/// Nested entities serialize themselves through their own projection.
impl ToPlain for Author {
    fn to_plain(&self) -> Value {
        Value::Object(to_plain_data(self, &["username"]))
    }
}

#[derive(Debug)]
struct Message {
    id: Option<Snowflake>,
    content: Option<String>,
    author: Option<Author>,
    flags: Option<u64>,
    mention_ids: Option<Vec<u64>>,
    attachment: Option<Value>,
}

impl Entity for Message {
    fn kind(&self) -> &'static str {
        "message"
    }

    fn id(&self) -> Option<&Snowflake> {
        self.id.as_ref()
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["content", "author", "flags", "mention_ids", "attachment"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "content" => self.content.clone().map(FieldValue::from),
            "author" => self.author.clone().map(FieldValue::projected),
            "flags" => self.flags.map(FieldValue::from),
            "mention_ids" => self.mention_ids.clone().map(FieldValue::sequence),
            "attachment" => self.attachment.clone().map(FieldValue::from),
            _ => None,
        }
    }
}

fn sample_message() -> Message {
    Message {
        id: Snowflake::new("175928847299117063"),
        content: Some("o/".to_owned()),
        author: Some(Author {
            id: Snowflake::new("80351110224678912"),
            username: Some("nelly".to_owned()),
        }),
        flags: Some(9_007_199_254_740_997),
        mention_ids: Some(vec![80351110224678912, 103735883630395392]),
        attachment: Some(json!({"filename": "cat.png", "size": 1024})),
    }
}

#[test]
fn full_serialization_round_trip() {
    let message = sample_message();
    let out = to_plain_data(
        &message,
        &["content", "author", "flags", "mention_ids", "attachment"],
    );

    let keys: Vec<&str> = out.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["id", "createdAt", "content", "author", "flags", "mention_ids", "attachment"]
    );

    assert_eq!(out["id"], json!("175928847299117063"));
    assert_eq!(out["createdAt"], json!(1_462_015_105_796_i64));
    assert_eq!(out["content"], json!("o/"));
    assert_eq!(
        out["author"],
        json!({
            "id": "80351110224678912",
            "createdAt": 1_439_227_597_529_i64,
            "username": "nelly",
        })
    );
    assert_eq!(out["flags"], json!("9007199254740997"));
    assert_eq!(
        out["mention_ids"],
        json!(["80351110224678912", "103735883630395392"])
    );
    assert_eq!(out["attachment"], json!({"filename": "cat.png", "size": 1024}));
}

#[test]
fn serialization_skips_absent_fields_without_error() {
    let mut message = sample_message();
    message.author = None;
    message.attachment = None;

    let out = to_plain_data(
        &message,
        &["content", "author", "flags", "mention_ids", "attachment"],
    );
    let keys: Vec<&str> = out.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "createdAt", "content", "flags", "mention_ids"]);
}

#[test]
fn draft_message_serializes_to_requested_fields_only() {
    let message = Message {
        id: None,
        content: Some("draft".to_owned()),
        author: None,
        flags: None,
        mention_ids: None,
        attachment: None,
    };

    let out = to_plain_data(&message, &["content"]);
    assert_eq!(Value::Object(out), json!({"content": "draft"}));
}

#[test]
fn inspection_matches_wire_values_for_shared_fields() {
    let message = sample_message();
    let inspected = inspect(&message);
    let serialized = to_plain_data(&message, &["content", "flags"]);

    assert_eq!(inspected["content"], serialized["content"]);
    assert_eq!(inspected["flags"], serialized["flags"]);
    // The creation instant is derived, so only the wire view carries it.
    assert!(inspected.get("createdAt").is_none());
    assert!(serialized.get("createdAt").is_some());
}

#[test]
fn display_forms_are_stable() {
    let message = sample_message();
    assert_eq!(message.tag().to_string(), "[message 175928847299117063]");
    assert_eq!(
        EntityTag(&message as &dyn Entity).to_string(),
        "[message 175928847299117063]"
    );
}

#[test]
fn created_at_agrees_with_the_documented_decode() {
    let message = sample_message();
    assert_eq!(
        message.created_at(),
        Timestamp::from_millis(1_462_015_105_796.0)
    );
    assert_eq!(
        message.created_at().to_datetime().unwrap().to_rfc3339(),
        "2016-04-30T11:18:25.796+00:00"
    );
}
