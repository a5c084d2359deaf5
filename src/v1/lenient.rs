//! Schema directed coercion for flat parameter values.
//!
//! Command line values arrive as text and values built in code may be typed
//! loosely (`Int(123456)` for a password). Request members declare
//! `deserialize_with = "lenient::deserialize"` and get the value converted to
//! their own type: scalars to text, numeric or boolean text to numbers and
//! flags, a single scalar to a one element list.

use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// A member type a loose JSON value can be converted into.
pub trait Lenient: Sized {
    fn from_loose(value: Value) -> Result<Self, String>;
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => T::from_loose(value).map(Some).map_err(D::Error::custom),
    }
}

fn scalar_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("invalid type: {}, expected a string", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}

impl Lenient for String {
    fn from_loose(value: Value) -> Result<Self, String> {
        scalar_text(value)
    }
}

impl Lenient for i32 {
    fn from_loose(value: Value) -> Result<Self, String> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| format!("invalid value: {}, expected a 32-bit integer", n)),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid value: \"{}\", expected a 32-bit integer", s)),
            other => Err(format!(
                "invalid type: {}, expected a 32-bit integer",
                kind(&other)
            )),
        }
    }
}

impl Lenient for bool {
    fn from_loose(value: Value) -> Result<Self, String> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            Value::String(s) => Err(format!("invalid value: \"{}\", expected true or false", s)),
            other => Err(format!("invalid type: {}, expected a boolean", kind(&other))),
        }
    }
}

impl Lenient for Vec<String> {
    fn from_loose(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => items.into_iter().map(scalar_text).collect(),
            scalar => scalar_text(scalar).map(|item| vec![item]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, Default, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Members {
        #[serde(default, deserialize_with = "deserialize")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize")]
        port: Option<i32>,
        #[serde(default, deserialize_with = "deserialize")]
        enabled: Option<bool>,
        #[serde(default, deserialize_with = "deserialize")]
        ids: Option<Vec<String>>,
    }

    #[test]
    fn scalars_become_text() {
        let members: Members = serde_json::from_value(json!({"Name": 123456})).unwrap();
        assert_eq!(members.name.as_deref(), Some("123456"));
        let members: Members = serde_json::from_value(json!({"Name": false})).unwrap();
        assert_eq!(members.name.as_deref(), Some("false"));
    }

    #[test]
    fn text_becomes_numbers_and_flags() {
        let members: Members =
            serde_json::from_value(json!({"Port": "5439", "Enabled": "TRUE"})).unwrap();
        assert_eq!(members.port, Some(5439));
        assert_eq!(members.enabled, Some(true));
        assert!(serde_json::from_value::<Members>(json!({"Port": "fast"})).is_err());
        assert!(serde_json::from_value::<Members>(json!({"Port": 4_294_967_296i64})).is_err());
        assert!(serde_json::from_value::<Members>(json!({"Enabled": "yes"})).is_err());
    }

    #[test]
    fn single_scalar_becomes_a_list() {
        let members: Members = serde_json::from_value(json!({"Ids": "sg-1"})).unwrap();
        assert_eq!(members.ids, Some(vec!["sg-1".to_string()]));
        let members: Members = serde_json::from_value(json!({"Ids": ["sg-1", 2]})).unwrap();
        assert_eq!(members.ids, Some(vec!["sg-1".to_string(), "2".to_string()]));
    }

    #[test]
    fn missing_and_null_members_stay_unset() {
        assert_eq!(
            serde_json::from_value::<Members>(json!({"Name": null})).unwrap(),
            Members::default()
        );
        assert_eq!(
            serde_json::from_value::<Members>(json!({})).unwrap(),
            Members::default()
        );
        assert!(serde_json::from_value::<Members>(json!({"Name": {"A": 1}})).is_err());
    }
}
