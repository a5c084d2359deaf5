use std::marker::PhantomData;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::{
    aws::{
        dms::{endpoint, replication_instance, replication_task, tags},
        OperationKind,
    },
    manager::{Dispatch, DispatchError, Operation},
    mapper::{map_request, MapperError, Prune},
    params::ParameterSet,
    select::ResponseSelector,
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Mapper(#[from] MapperError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("Could not serialize response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single invocation of `O` built from flat parameters.
pub struct Command<O: Operation> {
    params: ParameterSet,
    selector: ResponseSelector,
    _phantom: PhantomData<O>,
}

impl<O: Operation> Command<O> {
    pub fn new(params: ParameterSet) -> Self {
        Self {
            params,
            selector: O::default_selector(),
            _phantom: PhantomData,
        }
    }
    pub fn with_selector(mut self, selector: ResponseSelector) -> Self {
        self.selector = selector;
        self
    }
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }
    pub fn request(&self) -> Result<O::Input, CommandError> {
        debug!(operation = %O::KIND, paths = ?self.params.paths(), "Mapping parameters");
        let mut input: O::Input = map_request(&self.params)?;
        input.prune();
        Ok(input)
    }
    pub fn invoke(&self, dispatcher: &impl Dispatch) -> Result<Value, CommandError> {
        let input = self.request()?;
        let output = dispatcher.dispatch::<O>(input)?;
        let response = compact(serde_json::to_value(&output)?);
        Ok(self.selector.select(&response, &self.params))
    }
    pub fn preview(&self) -> Result<Value, CommandError> {
        Ok(compact(serde_json::to_value(self.request()?)?))
    }
}

/// Drops `null` object members so unset optional fields do not show up.
pub fn compact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, compact(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(compact).collect()),
        other => other,
    }
}

macro_rules! with_operation {
    ($kind:expr, $op:ident => $body:expr) => {
        match $kind {
            OperationKind::CreateEndpoint => {
                type $op = endpoint::CreateEndpoint;
                $body
            }
            OperationKind::ModifyEndpoint => {
                type $op = endpoint::ModifyEndpoint;
                $body
            }
            OperationKind::DeleteEndpoint => {
                type $op = endpoint::DeleteEndpoint;
                $body
            }
            OperationKind::DescribeEndpoints => {
                type $op = endpoint::DescribeEndpoints;
                $body
            }
            OperationKind::TestConnection => {
                type $op = endpoint::TestConnection;
                $body
            }
            OperationKind::CreateReplicationInstance => {
                type $op = replication_instance::CreateReplicationInstance;
                $body
            }
            OperationKind::DeleteReplicationInstance => {
                type $op = replication_instance::DeleteReplicationInstance;
                $body
            }
            OperationKind::CreateReplicationTask => {
                type $op = replication_task::CreateReplicationTask;
                $body
            }
            OperationKind::StartReplicationTask => {
                type $op = replication_task::StartReplicationTask;
                $body
            }
            OperationKind::StopReplicationTask => {
                type $op = replication_task::StopReplicationTask;
                $body
            }
            OperationKind::DeleteReplicationTask => {
                type $op = replication_task::DeleteReplicationTask;
                $body
            }
            OperationKind::AddTagsToResource => {
                type $op = tags::AddTagsToResource;
                $body
            }
            OperationKind::RemoveTagsFromResource => {
                type $op = tags::RemoveTagsFromResource;
                $body
            }
            OperationKind::ListTagsForResource => {
                type $op = tags::ListTagsForResource;
                $body
            }
        }
    };
}

pub fn default_selector(kind: OperationKind) -> ResponseSelector {
    with_operation!(kind, Op => Op::default_selector())
}

/// Runs the operation named by `kind`. `selector` falls back to the
/// operation's default.
pub fn invoke(
    kind: OperationKind,
    params: &ParameterSet,
    selector: Option<ResponseSelector>,
    dispatcher: &impl Dispatch,
) -> Result<Value, CommandError> {
    with_operation!(kind, Op => {
        let mut command = Command::<Op>::new(params.clone());
        if let Some(selector) = selector {
            command = command.with_selector(selector);
        }
        command.invoke(dispatcher)
    })
}

/// The request `invoke` would send, without sending it.
pub fn preview(kind: OperationKind, params: &ParameterSet) -> Result<Value, CommandError> {
    with_operation!(kind, Op => Command::<Op>::new(params.clone()).preview())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_drops_nulls_at_every_depth() {
        let value = json!({
            "Endpoint": {"Port": 5439, "Status": null, "Tags": [{"Key": "a", "Value": null}]},
            "Marker": null
        });
        assert_eq!(
            compact(value),
            json!({"Endpoint": {"Port": 5439, "Tags": [{"Key": "a"}]}})
        );
    }

    #[test]
    fn default_selectors_follow_the_catalog() {
        assert_eq!(
            default_selector(OperationKind::CreateEndpoint),
            ResponseSelector::field("Endpoint")
        );
        assert_eq!(
            default_selector(OperationKind::AddTagsToResource),
            ResponseSelector::parameter("ResourceArn")
        );
        assert_eq!(
            default_selector(OperationKind::ListTagsForResource),
            ResponseSelector::field("TagList")
        );
    }

    #[test]
    fn preview_shows_only_supplied_members() {
        let params = ParameterSet::new()
            .with("EndpointIdentifier", "warehouse")
            .with("EndpointType", "target")
            .with("EngineName", "redshift")
            .with("RedshiftSettings.Port", 5439);
        assert_eq!(
            preview(OperationKind::CreateEndpoint, &params).unwrap(),
            json!({
                "EndpointIdentifier": "warehouse",
                "EndpointType": "target",
                "EngineName": "redshift",
                "RedshiftSettings": {"Port": 5439}
            })
        );
    }

    #[test]
    fn preview_reports_unknown_paths() {
        let params = ParameterSet::new().with("RedshiftSettings.Nope", 1);
        assert!(matches!(
            preview(OperationKind::CreateEndpoint, &params),
            Err(CommandError::Mapper(MapperError::Schema(_)))
        ));
    }
}
