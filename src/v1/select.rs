use std::{fmt, str::FromStr};

use serde_json::Value;

use super::params::ParameterSet;

/// Chooses what part of an operation result is surfaced to the caller.
///
/// Textual form: `*` for the whole response, `^Name` to echo the input
/// parameter `Name`, anything else is a dot path into the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSelector {
    Response,
    Field(String),
    Parameter(String),
}

impl ResponseSelector {
    pub fn field(path: impl ToString) -> Self {
        Self::Field(path.to_string())
    }
    pub fn parameter(name: impl ToString) -> Self {
        Self::Parameter(name.to_string())
    }

    /// Missing fields and unset parameters select `null`.
    pub fn select(&self, response: &Value, params: &ParameterSet) -> Value {
        match self {
            ResponseSelector::Response => response.clone(),
            ResponseSelector::Field(path) => path
                .split('.')
                .try_fold(response, |node, key| node.get(key))
                .cloned()
                .unwrap_or(Value::Null),
            ResponseSelector::Parameter(name) => params
                .get(name)
                .and_then(|value| value.to_json().ok())
                .unwrap_or(Value::Null),
        }
    }
}

impl FromStr for ResponseSelector {
    type Err = String;
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        match raw {
            "" => Err("Empty selector".to_string()),
            "*" => Ok(ResponseSelector::Response),
            _ => match raw.strip_prefix('^') {
                Some("") => Err("Parameter selector needs a name: ^Name".to_string()),
                Some(name) => Ok(ResponseSelector::parameter(name)),
                None => Ok(ResponseSelector::field(raw)),
            },
        }
    }
}

impl fmt::Display for ResponseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseSelector::Response => write!(f, "*"),
            ResponseSelector::Field(path) => write!(f, "{}", path),
            ResponseSelector::Parameter(name) => write!(f, "^{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> Value {
        json!({
            "Endpoint": {
                "EndpointArn": "arn:aws:dms:us-east-2:123456789012:endpoint:ABC",
                "Port": 5439
            }
        })
    }

    #[test]
    fn whole_response_is_stable() {
        let params = ParameterSet::new();
        let response = response();
        let first = ResponseSelector::Response.select(&response, &params);
        let second = ResponseSelector::Response.select(&response, &params);
        assert_eq!(first, response);
        assert_eq!(first, second);
    }

    #[test]
    fn field_paths_walk_nested_objects() {
        let params = ParameterSet::new();
        assert_eq!(
            ResponseSelector::field("Endpoint.Port").select(&response(), &params),
            json!(5439)
        );
        assert_eq!(
            ResponseSelector::field("Endpoint.Missing").select(&response(), &params),
            Value::Null
        );
    }

    #[test]
    fn parameter_selector_echoes_input() {
        let params = ParameterSet::new().with("ResourceArn", "arn:res");
        assert_eq!(
            ResponseSelector::parameter("ResourceArn").select(&json!({}), &params),
            json!("arn:res")
        );
        assert_eq!(
            ResponseSelector::parameter("Other").select(&json!({}), &params),
            Value::Null
        );
    }

    #[test]
    fn textual_forms_round_trip() {
        for raw in ["*", "^EndpointArn", "Endpoint.Port"] {
            let selector: ResponseSelector = raw.parse().unwrap();
            assert_eq!(selector.to_string(), raw);
        }
        assert!("^".parse::<ResponseSelector>().is_err());
        assert!(" ".parse::<ResponseSelector>().is_err());
    }
}
