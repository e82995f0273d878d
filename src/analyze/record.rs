//! Best-effort extraction of the profiled fields from a single JSONL record.
//!
//! Records look like `{"content_type": ..., "chat_type": ..., "payload": {"bodies": [{"type": ...}]}}`.
//! Every field is optional; missing fields fall back to [`UNKNOWN`], and a record without a
//! first body is tallied as [`EMPTY_BODIES`].

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};
use std::io;
use thiserror::Error;

/// Label used for a missing field.
pub const UNKNOWN: &str = "unknown";

/// Body type label used for a record without `payload.bodies[0]`.
pub const EMPTY_BODIES: &str = "(empty)";

/// Errors that make a line unusable as a record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record is not a JSON object")]
    NotAnObject,
}

/// The fields of one record that end up in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub content_type: String,
    pub chat_type: String,

    /// `payload.bodies[0]`, if the record has one.
    pub first_body: Option<BodyFields>,
}

/// The fields of the first body object of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyFields {
    pub body_type: String,

    /// Length in bytes of the body serialized with `", "` / `": "` separators.
    pub serialized_len: u64,
}

/// Parses a line and extracts the profiled fields.
pub fn extract_fields(line: &str) -> Result<RecordFields, RecordError> {
    let value: Value = serde_json::from_str(line)?;
    let Value::Object(record) = value else {
        return Err(RecordError::NotAnObject);
    };

    let first_body = first_body(&record).map(|body| BodyFields {
        body_type: label_of(body.get("type")),
        serialized_len: spaced_json_len(body),
    });

    Ok(RecordFields {
        content_type: label_of(record.get("content_type")),
        chat_type: label_of(record.get("chat_type")),
        first_body,
    })
}

fn first_body(record: &Map<String, Value>) -> Option<&Value> {
    record
        .get("payload")?
        .as_object()?
        .get("bodies")?
        .as_array()?
        .first()
}

/// Strings are used as-is, other JSON values by their JSON text.
fn label_of(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Byte length of `value` serialized with a space after every `,` and `:`.
///
/// Object keys keep their input order and non-ASCII text is written unescaped.
pub fn spaced_json_len(value: &Value) -> u64 {
    let mut counter = ByteCounter(0);
    let mut serializer = Serializer::with_formatter(&mut counter, SpacedFormatter);

    match value.serialize(&mut serializer) {
        Ok(()) => counter.0,
        Err(_) => 0,
    }
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

struct ByteCounter(u64);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn extracts_all_fields() {
        let fields = extract_fields(
            r#"{"content_type":"chat","chat_type":"groupchat","payload":{"bodies":[{"type":"txt","msg":"hi"},{"type":"img"}]}}"#,
        )
        .unwrap();

        assert_eq!(fields.content_type, "chat");
        assert_eq!(fields.chat_type, "groupchat");
        assert_eq!(
            fields.first_body,
            Some(BodyFields {
                body_type: "txt".to_string(),
                serialized_len: 28,
            })
        );
    }

    #[rstest(line,
        case::no_fields(r#"{}"#),
        case::empty_bodies(r#"{"payload":{"bodies":[]}}"#),
        case::payload_not_object(r#"{"payload":[1,2]}"#),
        case::bodies_not_array(r#"{"payload":{"bodies":{"type":"txt"}}}"#)
    )]
    fn missing_fields_fall_back(line: &str) {
        let fields = extract_fields(line).unwrap();
        assert_eq!(fields.content_type, UNKNOWN);
        assert_eq!(fields.chat_type, UNKNOWN);
        assert_eq!(fields.first_body, None);
    }

    #[test]
    fn body_without_type_is_unknown() {
        let fields = extract_fields(r#"{"payload":{"bodies":[{"msg":"x"}]}}"#).unwrap();
        assert_eq!(fields.first_body.unwrap().body_type, UNKNOWN);
    }

    #[test]
    fn non_string_labels_use_json_text() {
        let fields = extract_fields(r#"{"content_type":7,"chat_type":null}"#).unwrap();
        assert_eq!(fields.content_type, "7");
        assert_eq!(fields.chat_type, "null");
    }

    #[rstest(line,
        case::truncated(r#"{"content_type":"#),
        case::not_json("hello world"),
        case::array("[1,2,3]"),
        case::string(r#""text""#)
    )]
    fn unusable_lines_are_errors(line: &str) {
        assert!(extract_fields(line).is_err());
    }

    #[test]
    fn spaced_length_matches_spaced_serialization() {
        // {"type": "img", "meta": {"w": 1, "h": [1, 2]}, "msg": "你好"}
        let body = json!({"type": "img", "meta": {"w": 1, "h": [1, 2]}, "msg": "你好"});
        assert_eq!(spaced_json_len(&body), 63);
        assert_eq!(spaced_json_len(&json!({})), 2);
        assert_eq!(spaced_json_len(&json!([])), 2);
    }
}
