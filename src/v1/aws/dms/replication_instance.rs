use aws_sdk_databasemigration::{
    operation::create_replication_instance::builders::CreateReplicationInstanceFluentBuilder,
    types, Client,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{sdk_tags, to_utc};
use crate::v1::{
    aws::{DmsManager, OperationKind},
    lenient,
    manager::{DispatchError, Operation},
    mapper::Prune,
    params::Tag,
    select::ResponseSelector,
};

pub struct CreateReplicationInstance;
pub struct DeleteReplicationInstance;

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableCreateReplicationInstanceInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_instance_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub allocated_storage: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_instance_class: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub availability_zone: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_subnet_group_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(rename = "MultiAZ", default, deserialize_with = "lenient::deserialize")]
    pub multi_az: Option<bool>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub engine_version: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub auto_minor_version_upgrade: Option<bool>,
    pub tags: Option<Vec<Tag>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub kms_key_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub publicly_accessible: Option<bool>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub dns_name_servers: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub network_type: Option<String>,
}

impl Prune for SerializableCreateReplicationInstanceInput {
    fn prune(&mut self) {}
}

impl SerializableCreateReplicationInstanceInput {
    pub fn to_aws_input(self, client: &Client) -> CreateReplicationInstanceFluentBuilder {
        client
            .create_replication_instance()
            .set_replication_instance_identifier(self.replication_instance_identifier)
            .set_allocated_storage(self.allocated_storage)
            .set_replication_instance_class(self.replication_instance_class)
            .set_vpc_security_group_ids(self.vpc_security_group_ids)
            .set_availability_zone(self.availability_zone)
            .set_replication_subnet_group_identifier(self.replication_subnet_group_identifier)
            .set_preferred_maintenance_window(self.preferred_maintenance_window)
            .set_multi_az(self.multi_az)
            .set_engine_version(self.engine_version)
            .set_auto_minor_version_upgrade(self.auto_minor_version_upgrade)
            .set_tags(sdk_tags(self.tags))
            .set_kms_key_id(self.kms_key_id)
            .set_publicly_accessible(self.publicly_accessible)
            .set_dns_name_servers(self.dns_name_servers)
            .set_resource_identifier(self.resource_identifier)
            .set_network_type(self.network_type)
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableDeleteReplicationInstanceInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_instance_arn: Option<String>,
}

impl Prune for SerializableDeleteReplicationInstanceInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableReplicationInstance {
    pub replication_instance_identifier: Option<String>,
    pub replication_instance_class: Option<String>,
    pub replication_instance_status: Option<String>,
    pub instance_create_time: Option<chrono::DateTime<Utc>>,
    pub availability_zone: Option<String>,
    pub secondary_availability_zone: Option<String>,
    pub engine_version: Option<String>,
    pub kms_key_id: Option<String>,
    pub replication_instance_arn: Option<String>,
    pub replication_instance_public_ip_addresses: Option<Vec<String>>,
    pub replication_instance_private_ip_addresses: Option<Vec<String>>,
    pub dns_name_servers: Option<String>,
    pub free_until: Option<chrono::DateTime<Utc>>,
    pub network_type: Option<String>,
}

impl From<types::ReplicationInstance> for SerializableReplicationInstance {
    fn from(instance: types::ReplicationInstance) -> Self {
        Self {
            replication_instance_identifier: instance.replication_instance_identifier,
            replication_instance_class: instance.replication_instance_class,
            replication_instance_status: instance.replication_instance_status,
            instance_create_time: instance.instance_create_time.and_then(to_utc),
            availability_zone: instance.availability_zone,
            secondary_availability_zone: instance.secondary_availability_zone,
            engine_version: instance.engine_version,
            kms_key_id: instance.kms_key_id,
            replication_instance_arn: instance.replication_instance_arn,
            replication_instance_public_ip_addresses: instance
                .replication_instance_public_ip_addresses,
            replication_instance_private_ip_addresses: instance
                .replication_instance_private_ip_addresses,
            dns_name_servers: instance.dns_name_servers,
            free_until: instance.free_until.and_then(to_utc),
            network_type: instance.network_type,
        }
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableReplicationInstanceOutput {
    pub replication_instance: Option<SerializableReplicationInstance>,
}

impl Operation for CreateReplicationInstance {
    const KIND: OperationKind = OperationKind::CreateReplicationInstance;
    type Input = SerializableCreateReplicationInstanceInput;
    type Output = SerializableReplicationInstanceOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationInstance")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            input
                .to_aws_input(manager.client())
                .send()
                .await
                .map(|response| SerializableReplicationInstanceOutput {
                    replication_instance: response.replication_instance.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for DeleteReplicationInstance {
    const KIND: OperationKind = OperationKind::DeleteReplicationInstance;
    type Input = SerializableDeleteReplicationInstanceInput;
    type Output = SerializableReplicationInstanceOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("ReplicationInstance")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .delete_replication_instance()
                .set_replication_instance_arn(input.replication_instance_arn)
                .send()
                .await
                .map(|response| SerializableReplicationInstanceOutput {
                    replication_instance: response.replication_instance.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::{mapper::map_request, params::ParameterSet};
    use serde_json::json;

    #[test]
    fn multi_az_keeps_its_api_spelling() {
        let input: SerializableCreateReplicationInstanceInput = map_request(
            &ParameterSet::new()
                .with("ReplicationInstanceIdentifier", "ri-1")
                .with("ReplicationInstanceClass", "dms.t3.medium")
                .with("MultiAZ", true)
                .with("VpcSecurityGroupIds", vec!["sg-1", "sg-2"]),
        )
        .unwrap();
        assert_eq!(input.multi_az, Some(true));
        assert_eq!(
            input.vpc_security_group_ids,
            Some(vec!["sg-1".to_string(), "sg-2".to_string()])
        );
        assert!(map_request::<SerializableCreateReplicationInstanceInput>(
            &ParameterSet::new().with("MultiAz", true)
        )
        .is_err());
    }

    #[test]
    fn instance_output_serializes_times_as_rfc3339() {
        let instance = types::ReplicationInstance::builder()
            .replication_instance_identifier("ri-1")
            .instance_create_time(aws_sdk_databasemigration::primitives::DateTime::from_secs(
                1_714_566_600,
            ))
            .build();
        let output = SerializableReplicationInstanceOutput {
            replication_instance: Some(instance.into()),
        };
        let value = serde_json::to_value(output).unwrap();
        assert_eq!(
            value["ReplicationInstance"]["InstanceCreateTime"],
            json!("2024-05-01T12:30:00Z")
        );
        assert_eq!(
            value["ReplicationInstance"]["ReplicationInstanceIdentifier"],
            json!("ri-1")
        );
    }
}
