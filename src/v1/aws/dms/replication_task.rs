use aws_sdk_databasemigration::{
    operation::{
        create_replication_task::builders::CreateReplicationTaskFluentBuilder,
        start_replication_task::builders::StartReplicationTaskFluentBuilder,
    },
    types::{self, MigrationTypeValue, StartReplicationTaskTypeValue},
    Client,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{from_utc, sdk_tags, to_utc};
use crate::v1::{
    aws::{DmsManager, OperationKind},
    lenient,
    manager::{DispatchError, Operation},
    mapper::Prune,
    params::Tag,
    select::ResponseSelector,
};

pub struct CreateReplicationTask;
pub struct StartReplicationTask;
pub struct StopReplicationTask;
pub struct DeleteReplicationTask;

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableCreateReplicationTaskInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_task_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub source_endpoint_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub target_endpoint_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_instance_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub migration_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub table_mappings: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_task_settings: Option<String>,
    pub cdc_start_time: Option<chrono::DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub cdc_start_position: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub cdc_stop_position: Option<String>,
    pub tags: Option<Vec<Tag>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub task_data: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_identifier: Option<String>,
}

impl Prune for SerializableCreateReplicationTaskInput {
    fn prune(&mut self) {}
}

impl SerializableCreateReplicationTaskInput {
    pub fn to_aws_input(self, client: &Client) -> CreateReplicationTaskFluentBuilder {
        client
            .create_replication_task()
            .set_replication_task_identifier(self.replication_task_identifier)
            .set_source_endpoint_arn(self.source_endpoint_arn)
            .set_target_endpoint_arn(self.target_endpoint_arn)
            .set_replication_instance_arn(self.replication_instance_arn)
            .set_migration_type(self.migration_type.as_deref().map(MigrationTypeValue::from))
            .set_table_mappings(self.table_mappings)
            .set_replication_task_settings(self.replication_task_settings)
            .set_cdc_start_time(self.cdc_start_time.map(from_utc))
            .set_cdc_start_position(self.cdc_start_position)
            .set_cdc_stop_position(self.cdc_stop_position)
            .set_tags(sdk_tags(self.tags))
            .set_task_data(self.task_data)
            .set_resource_identifier(self.resource_identifier)
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableStartReplicationTaskInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_task_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub start_replication_task_type: Option<String>,
    pub cdc_start_time: Option<chrono::DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub cdc_start_position: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub cdc_stop_position: Option<String>,
}

impl Prune for SerializableStartReplicationTaskInput {
    fn prune(&mut self) {}
}

impl SerializableStartReplicationTaskInput {
    pub fn to_aws_input(self, client: &Client) -> StartReplicationTaskFluentBuilder {
        client
            .start_replication_task()
            .set_replication_task_arn(self.replication_task_arn)
            .set_start_replication_task_type(
                self.start_replication_task_type
                    .as_deref()
                    .map(StartReplicationTaskTypeValue::from),
            )
            .set_cdc_start_time(self.cdc_start_time.map(from_utc))
            .set_cdc_start_position(self.cdc_start_position)
            .set_cdc_stop_position(self.cdc_stop_position)
    }
}

/// Stop and delete take nothing but the task ARN.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableReplicationTaskArnInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_task_arn: Option<String>,
}

impl Prune for SerializableReplicationTaskArnInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableReplicationTask {
    pub replication_task_identifier: Option<String>,
    pub source_endpoint_arn: Option<String>,
    pub target_endpoint_arn: Option<String>,
    pub replication_instance_arn: Option<String>,
    pub migration_type: Option<String>,
    pub table_mappings: Option<String>,
    pub replication_task_settings: Option<String>,
    pub status: Option<String>,
    pub last_failure_message: Option<String>,
    pub stop_reason: Option<String>,
    pub replication_task_creation_date: Option<chrono::DateTime<Utc>>,
    pub replication_task_start_date: Option<chrono::DateTime<Utc>>,
    pub cdc_start_position: Option<String>,
    pub cdc_stop_position: Option<String>,
    pub recovery_checkpoint: Option<String>,
    pub replication_task_arn: Option<String>,
    pub task_data: Option<String>,
    pub target_replication_instance_arn: Option<String>,
}

impl From<types::ReplicationTask> for SerializableReplicationTask {
    fn from(task: types::ReplicationTask) -> Self {
        Self {
            replication_task_identifier: task.replication_task_identifier,
            source_endpoint_arn: task.source_endpoint_arn,
            target_endpoint_arn: task.target_endpoint_arn,
            replication_instance_arn: task.replication_instance_arn,
            migration_type: task.migration_type.map(|v| v.as_str().to_string()),
            table_mappings: task.table_mappings,
            replication_task_settings: task.replication_task_settings,
            status: task.status,
            last_failure_message: task.last_failure_message,
            stop_reason: task.stop_reason,
            replication_task_creation_date: task.replication_task_creation_date.and_then(to_utc),
            replication_task_start_date: task.replication_task_start_date.and_then(to_utc),
            cdc_start_position: task.cdc_start_position,
            cdc_stop_position: task.cdc_stop_position,
            recovery_checkpoint: task.recovery_checkpoint,
            replication_task_arn: task.replication_task_arn,
            task_data: task.task_data,
            target_replication_instance_arn: task.target_replication_instance_arn,
        }
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableReplicationTaskOutput {
    pub replication_task: Option<SerializableReplicationTask>,
}

impl Operation for CreateReplicationTask {
    const KIND: OperationKind = OperationKind::CreateReplicationTask;
    type Input = SerializableCreateReplicationTaskInput;
    type Output = SerializableReplicationTaskOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationTask")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            input
                .to_aws_input(manager.client())
                .send()
                .await
                .map(|response| SerializableReplicationTaskOutput {
                    replication_task: response.replication_task.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for StartReplicationTask {
    const KIND: OperationKind = OperationKind::StartReplicationTask;
    type Input = SerializableStartReplicationTaskInput;
    type Output = SerializableReplicationTaskOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationTask")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            input
                .to_aws_input(manager.client())
                .send()
                .await
                .map(|response| SerializableReplicationTaskOutput {
                    replication_task: response.replication_task.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for StopReplicationTask {
    const KIND: OperationKind = OperationKind::StopReplicationTask;
    type Input = SerializableReplicationTaskArnInput;
    type Output = SerializableReplicationTaskOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationTask")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .stop_replication_task()
                .set_replication_task_arn(input.replication_task_arn)
                .send()
                .await
                .map(|response| SerializableReplicationTaskOutput {
                    replication_task: response.replication_task.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for DeleteReplicationTask {
    const KIND: OperationKind = OperationKind::DeleteReplicationTask;
    type Input = SerializableReplicationTaskArnInput;
    type Output = SerializableReplicationTaskOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationTask")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .delete_replication_task()
                .set_replication_task_arn(input.replication_task_arn)
                .send()
                .await
                .map(|response| SerializableReplicationTaskOutput {
                    replication_task: response.replication_task.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::{mapper::map_request, params::ParameterSet};
    use chrono::TimeZone;

    #[test]
    fn cdc_start_time_parses_from_rfc3339_text() {
        let input: SerializableStartReplicationTaskInput = map_request(
            &ParameterSet::new()
                .with("ReplicationTaskArn", "arn:task")
                .with("StartReplicationTaskType", "start-replication")
                .with("CdcStartTime", "2024-05-01T12:30:00Z"),
        )
        .unwrap();
        assert_eq!(
            input.cdc_start_time,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn malformed_timestamps_are_rejected() {
        assert!(map_request::<SerializableCreateReplicationTaskInput>(
            &ParameterSet::new().with("CdcStartTime", "yesterday")
        )
        .is_err());
    }

    #[test]
    fn task_projection_keeps_migration_type_as_text() {
        let task = types::ReplicationTask::builder()
            .replication_task_arn("arn:task")
            .migration_type(MigrationTypeValue::FullLoadAndCdc)
            .build();
        let task = SerializableReplicationTask::from(task);
        assert_eq!(task.migration_type.as_deref(), Some("full-load-and-cdc"));
        assert_eq!(task.replication_task_arn.as_deref(), Some("arn:task"));
    }
}
