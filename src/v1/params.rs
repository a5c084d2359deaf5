use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single user supplied value. Command line scalars and enum typed API
/// members travel as `Text`; the request member decides the final type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Int(i64),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Tags(Vec<Tag>),
    Filters(Vec<Filter>),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl ToString, value: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(name: impl ToString, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Sparse set of named optional parameters, keyed by dot delimited field path
/// (`RedshiftSettings.Port`). A path mapped to `None` was named but not
/// supplied and never reaches the request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterSet {
    inner: BTreeMap<String, Option<ParamValue>>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.inner.insert(path.into(), Some(value.into()));
        self
    }
    pub fn set_opt<V: Into<ParamValue>>(
        &mut self,
        path: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.inner.insert(path.into(), value.map(Into::into));
        self
    }
    pub fn with(mut self, path: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(path, value);
        self
    }
    pub fn get(&self, path: &str) -> Option<&ParamValue> {
        self.inner.get(path).and_then(Option::as_ref)
    }
    pub fn is_set(&self, path: &str) -> bool {
        self.get(path).is_some()
    }
    /// Paths that carry a value, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.iter().map(|(path, _)| path).collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner
            .iter()
            .filter_map(|(path, value)| value.as_ref().map(|v| (path.as_str(), v)))
    }
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: Into<String>, V: Into<ParamValue>> FromIterator<(P, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (path, value) in iter {
            params.set(path, value);
        }
        params
    }
}

impl ParamValue {
    pub fn to_json(&self) -> Result<Value, ParamError> {
        match self {
            ParamValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .ok_or(ParamError::NonFiniteNumber(*n)),
            other => serde_json::to_value(other).map_err(ParamError::Json),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(v) => write!(f, "{}", v),
            ParamValue::Flag(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Number(v) => write!(f, "{}", v),
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => write!(f, "{:?}", other),
            },
        }
    }
}

/// Command line grammar: a JSON string array, tag list or filter list takes
/// that type. Any other value is kept as text, a JSON string losing its
/// quotes, and is converted to the member's type when the request is mapped.
impl FromStr for ParamValue {
    type Err = ParamError;
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParamError::Empty);
        }
        let json = match serde_json::from_str::<Value>(trimmed) {
            Ok(json) => json,
            Err(_) => return Ok(ParamValue::Text(raw.to_string())),
        };
        match json {
            Value::Bool(_) | Value::Number(_) => Ok(ParamValue::Text(raw.to_string())),
            Value::String(s) => Ok(ParamValue::Text(s)),
            Value::Array(items) if items.iter().all(Value::is_string) => {
                Ok(ParamValue::List(
                    items
                        .into_iter()
                        .filter_map(|v| v.as_str().map(str::to_owned))
                        .collect(),
                ))
            }
            Value::Array(items) => {
                let is_filter = items.iter().all(|item| item.get("Name").is_some());
                let array = Value::Array(items);
                if is_filter {
                    serde_json::from_value(array)
                        .map(ParamValue::Filters)
                        .map_err(ParamError::Json)
                } else {
                    serde_json::from_value(array)
                        .map(ParamValue::Tags)
                        .map_err(ParamError::Json)
                }
            }
            Value::Null => Err(ParamError::Empty),
            Value::Object(_) => Err(ParamError::Unsupported(raw.to_string())),
        }
    }
}

/// Parses `Path=Value` as given on the command line.
pub fn parse_assignment(raw: &str) -> Result<(String, ParamValue), ParamError> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| ParamError::MissingAssignment(raw.to_string()))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(ParamError::MissingAssignment(raw.to_string()));
    }
    Ok((path.to_string(), value.parse()?))
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}
impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}
impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}
impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}
impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}
impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Number(v)
    }
}
impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}
impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::List(v.into_iter().map(str::to_owned).collect())
    }
}
impl From<Vec<Tag>> for ParamValue {
    fn from(v: Vec<Tag>) -> Self {
        ParamValue::Tags(v)
    }
}
impl From<Vec<Filter>> for ParamValue {
    fn from(v: Vec<Filter>) -> Self {
        ParamValue::Filters(v)
    }
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Expected Path=Value, got: {0}")]
    MissingAssignment(String),
    #[error("Empty parameter value")]
    Empty,
    #[error("Unsupported parameter value: {0}")]
    Unsupported(String),
    #[error("Number is not finite: {0}")]
    NonFiniteNumber(f64),
    #[error("Invalid structured value: {0}")]
    Json(#[from] serde_json::Error),
}
