//! JSON wire encoding shared by every request and response.
//!
//! Field names go on the wire exactly as declared on the Rust structs, and
//! unknown inbound fields are dropped. Schemas must never opt into
//! `deny_unknown_fields` or `rename_all`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ClientError;

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(value).map_err(ClientError::Encode)
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

/// Best-effort `message` field of an error body; empty when absent or unparseable.
pub fn extract_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_default()
}

/// 64-bit integers travel as JSON strings; numbers are accepted on input too.
///
/// Use with `#[serde(default, with = "crate::transport::codec::int64")]`.
pub mod int64 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(i64),
        Str(String),
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(n),
            Repr::Str(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Key {
        #[serde(default)]
        organization_id: String,
        #[serde(default, with = "int64")]
        created_at: i64,
    }

    #[test]
    fn field_names_are_not_recased() {
        let body = encode(&Key {
            organization_id: "o-1".into(),
            created_at: 42,
        })
        .unwrap();
        let text = String::from_utf8(body).unwrap();
        assert_eq!(text, r#"{"organization_id":"o-1","created_at":"42"}"#);
    }

    #[test]
    fn unknown_fields_are_dropped_and_missing_fields_default() {
        let key: Key = decode(br#"{"organization_id":"o-1","extra":{"a":1}}"#).unwrap();
        assert_eq!(key.organization_id, "o-1");
        assert_eq!(key.created_at, 0);
    }

    #[test]
    fn int64_accepts_string_and_number() {
        let a: Key = decode(br#"{"created_at":"1700000000"}"#).unwrap();
        let b: Key = decode(br#"{"created_at":1700000000}"#).unwrap();
        assert_eq!(a.created_at, 1_700_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn int64_rejects_garbage() {
        let err = decode::<Key>(br#"{"created_at":"soon"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(extract_error_message(br#"{"message":"denied","code":7}"#), "denied");
        assert_eq!(extract_error_message(br#"{"code":7}"#), "");
        assert_eq!(extract_error_message(br#"{"message":7}"#), "");
        assert_eq!(extract_error_message(b"<html>bad gateway</html>"), "");
        assert_eq!(extract_error_message(b""), "");
    }
}
