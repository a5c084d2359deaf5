//! Flat parameters to nested request objects.
//!
//! A dot delimited path names a leaf inside a tree of optional groups. Only
//! supplied leaves are written, and a group only exists when at least one of
//! its descendants was supplied. Cross field consistency is not checked here.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use super::params::{ParamError, ParameterSet};

/// A named optional cluster of request members.
pub trait SettingsGroup {
    /// Wire names of the members that carry a value.
    fn populated(&self) -> Vec<&'static str>;
    fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }
}

/// Implemented by requests that own settings groups.
pub trait Prune {
    fn prune(&mut self);
}

/// Drops a group that has no populated member.
pub fn prune<G: SettingsGroup>(group: &mut Option<G>) {
    if group.as_ref().is_some_and(|g| g.is_empty()) {
        *group = None;
    }
}

pub fn unflatten(params: &ParameterSet) -> Result<Value, MapperError> {
    let mut root = Map::new();
    for (path, value) in params.iter() {
        let segments = split_path(path)?;
        let (leaf, groups) = segments
            .split_last()
            .ok_or_else(|| MapperError::InvalidPath(path.to_string()))?;
        let mut node = &mut root;
        for (depth, group) in groups.iter().enumerate() {
            let entry = node
                .entry(group.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = match entry {
                Value::Object(map) => map,
                _ => {
                    return Err(MapperError::PathConflict(segments[..=depth].join(".")));
                }
            };
        }
        if node.contains_key(*leaf) {
            return Err(MapperError::PathConflict(path.to_string()));
        }
        let value = value.to_json().map_err(|source| MapperError::InvalidValue {
            path: path.to_string(),
            source,
        })?;
        node.insert(leaf.to_string(), value);
    }
    Ok(Value::Object(root))
}

/// Builds a typed request. Unknown paths and mistyped values are rejected by
/// the request's schema.
pub fn map_request<T: DeserializeOwned>(params: &ParameterSet) -> Result<T, MapperError> {
    let tree = unflatten(params)?;
    serde_json::from_value(tree).map_err(|e| MapperError::Schema(e.to_string()))
}

fn split_path(path: &str) -> Result<Vec<&str>, MapperError> {
    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(MapperError::InvalidPath(path.to_string()));
    }
    Ok(segments)
}

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Invalid parameter path: '{0}'")]
    InvalidPath(String),
    #[error("Parameter path '{0}' is used both as a value and as a group")]
    PathConflict(String),
    #[error("Invalid value for '{path}': {source}")]
    InvalidValue { path: String, source: ParamError },
    #[error("Parameters do not match the request: {0}")]
    Schema(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::params::{ParamValue, Tag};
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn groups_only_exist_with_a_populated_leaf() {
        let mut params = ParameterSet::new();
        params
            .set("EndpointIdentifier", "warehouse")
            .set("RedshiftSettings.Port", 5439)
            .set_opt::<String>("RedshiftSettings.BucketName", None)
            .set_opt::<bool>("S3Settings.CdcInsertsOnly", None);
        assert_eq!(
            unflatten(&params).unwrap(),
            json!({
                "EndpointIdentifier": "warehouse",
                "RedshiftSettings": { "Port": 5439 }
            })
        );
    }

    #[test]
    fn empty_set_maps_to_empty_object() {
        assert_eq!(unflatten(&ParameterSet::new()).unwrap(), json!({}));
    }

    #[test]
    fn deep_paths_create_intermediate_groups() {
        let params: ParameterSet = vec![
            ("A.B.C", ParamValue::Flag(true)),
            ("A.B.D", ParamValue::Int(2)),
            ("A.E", ParamValue::Tags(vec![Tag::new("k", "v")])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            unflatten(&params).unwrap(),
            json!({
                "A": {
                    "B": { "C": true, "D": 2 },
                    "E": [{ "Key": "k", "Value": "v" }]
                }
            })
        );
    }

    #[test]
    fn leaf_and_group_on_same_path_conflict() {
        let params = ParameterSet::new().with("A", 1).with("A.B", 2);
        assert!(matches!(
            unflatten(&params),
            Err(MapperError::PathConflict(path)) if path == "A"
        ));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for path in ["", ".Port", "RedshiftSettings.", "A..B"] {
            let params = ParameterSet::new().with(path, 1);
            assert!(
                matches!(unflatten(&params), Err(MapperError::InvalidPath(_))),
                "{path}"
            );
        }
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Group {
        port: Option<i32>,
        server_name: Option<String>,
    }

    impl SettingsGroup for Group {
        fn populated(&self) -> Vec<&'static str> {
            let mut fields = vec![];
            if self.port.is_some() {
                fields.push("Port");
            }
            if self.server_name.is_some() {
                fields.push("ServerName");
            }
            fields
        }
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Request {
        name: Option<String>,
        group: Option<Group>,
    }

    #[test]
    fn typed_requests_keep_absent_groups_absent() {
        let request: Request = map_request(&ParameterSet::new().with("Name", "n")).unwrap();
        assert_eq!(
            request,
            Request {
                name: Some("n".to_string()),
                group: None
            }
        );
        let request: Request = map_request(&ParameterSet::new().with("Group.Port", 1)).unwrap();
        assert_eq!(request.group.unwrap().populated(), vec!["Port"]);
    }

    #[test]
    fn unknown_paths_and_wrong_types_fail_the_schema() {
        let unknown = map_request::<Request>(&ParameterSet::new().with("Group.Nope", 1));
        assert!(matches!(unknown, Err(MapperError::Schema(_))));
        let mistyped = map_request::<Request>(&ParameterSet::new().with("Group.Port", "x"));
        assert!(matches!(mistyped, Err(MapperError::Schema(_))));
    }

    #[test]
    fn prune_drops_only_empty_groups() {
        let mut empty = Some(Group::default());
        prune(&mut empty);
        assert!(empty.is_none());

        let mut populated = Some(Group {
            port: Some(1),
            ..Default::default()
        });
        prune(&mut populated);
        assert!(populated.is_some());
    }
}
