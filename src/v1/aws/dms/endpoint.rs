use aws_sdk_databasemigration::{
    operation::{
        create_endpoint::builders::CreateEndpointFluentBuilder,
        describe_endpoints::builders::DescribeEndpointsFluentBuilder,
        modify_endpoint::builders::ModifyEndpointFluentBuilder,
    },
    types::{self, DmsSslModeValue, ReplicationEndpointTypeValue},
    Client,
};
use serde::{Deserialize, Serialize};

use super::{
    sdk_tags,
    settings::{
        SerializableDmsTransferSettings, SerializableDocDbSettings, SerializableGcpMySqlSettings,
        SerializableIbmDb2Settings, SerializableKafkaSettings, SerializableKinesisSettings,
        SerializableMicrosoftSqlServerSettings, SerializableMongoDbSettings,
        SerializableMySqlSettings, SerializableOracleSettings, SerializablePostgreSqlSettings,
        SerializableRedshiftSettings, SerializableS3Settings, SerializableSybaseSettings,
    },
};
use crate::v1::{
    aws::{DmsManager, OperationKind},
    lenient,
    manager::{DispatchError, Operation},
    mapper::{prune, Prune},
    params::{Filter, Tag},
    select::ResponseSelector,
};

pub struct CreateEndpoint;
pub struct ModifyEndpoint;
pub struct DeleteEndpoint;
pub struct DescribeEndpoints;
pub struct TestConnection;

// The create and modify builders share every settings setter.
macro_rules! set_endpoint_settings {
    ($builder:expr, $input:expr) => {
        $builder
            .set_redshift_settings($input.redshift_settings.map(Into::into))
            .set_postgre_sql_settings($input.postgre_sql_settings.map(Into::into))
            .set_my_sql_settings($input.my_sql_settings.map(Into::into))
            .set_gcp_my_sql_settings($input.gcp_my_sql_settings.map(Into::into))
            .set_oracle_settings($input.oracle_settings.map(Into::into))
            .set_microsoft_sql_server_settings($input.microsoft_sql_server_settings.map(Into::into))
            .set_sybase_settings($input.sybase_settings.map(Into::into))
            .set_ibm_db2_settings($input.ibm_db2_settings.map(Into::into))
            .set_mongo_db_settings($input.mongo_db_settings.map(Into::into))
            .set_doc_db_settings($input.doc_db_settings.map(Into::into))
            .set_kinesis_settings($input.kinesis_settings.map(Into::into))
            .set_kafka_settings($input.kafka_settings.map(Into::into))
            .set_s3_settings($input.s3_settings.map(Into::into))
            .set_dms_transfer_settings($input.dms_transfer_settings.map(Into::into))
    };
}

macro_rules! prune_endpoint_settings {
    ($input:expr) => {
        prune(&mut $input.redshift_settings);
        prune(&mut $input.postgre_sql_settings);
        prune(&mut $input.my_sql_settings);
        prune(&mut $input.gcp_my_sql_settings);
        prune(&mut $input.oracle_settings);
        prune(&mut $input.microsoft_sql_server_settings);
        prune(&mut $input.sybase_settings);
        prune(&mut $input.ibm_db2_settings);
        prune(&mut $input.mongo_db_settings);
        prune(&mut $input.doc_db_settings);
        prune(&mut $input.kinesis_settings);
        prune(&mut $input.kafka_settings);
        prune(&mut $input.s3_settings);
        prune(&mut $input.dms_transfer_settings);
    };
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableCreateEndpointInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub engine_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub server_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub port: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub database_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub extra_connection_attributes: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub kms_key_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub certificate_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub ssl_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub service_access_role_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub external_table_definition: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub resource_identifier: Option<String>,
    pub redshift_settings: Option<SerializableRedshiftSettings>,
    #[serde(rename = "PostgreSQLSettings")]
    pub postgre_sql_settings: Option<SerializablePostgreSqlSettings>,
    #[serde(rename = "MySQLSettings")]
    pub my_sql_settings: Option<SerializableMySqlSettings>,
    #[serde(rename = "GcpMySQLSettings")]
    pub gcp_my_sql_settings: Option<SerializableGcpMySqlSettings>,
    pub oracle_settings: Option<SerializableOracleSettings>,
    #[serde(rename = "MicrosoftSQLServerSettings")]
    pub microsoft_sql_server_settings: Option<SerializableMicrosoftSqlServerSettings>,
    pub sybase_settings: Option<SerializableSybaseSettings>,
    #[serde(rename = "IBMDb2Settings")]
    pub ibm_db2_settings: Option<SerializableIbmDb2Settings>,
    pub mongo_db_settings: Option<SerializableMongoDbSettings>,
    pub doc_db_settings: Option<SerializableDocDbSettings>,
    pub kinesis_settings: Option<SerializableKinesisSettings>,
    pub kafka_settings: Option<SerializableKafkaSettings>,
    pub s3_settings: Option<SerializableS3Settings>,
    pub dms_transfer_settings: Option<SerializableDmsTransferSettings>,
}

impl Prune for SerializableCreateEndpointInput {
    fn prune(&mut self) {
        prune_endpoint_settings!(self);
    }
}

impl SerializableCreateEndpointInput {
    pub fn to_aws_input(self, client: &Client) -> CreateEndpointFluentBuilder {
        let builder = client
            .create_endpoint()
            .set_endpoint_identifier(self.endpoint_identifier)
            .set_endpoint_type(
                self.endpoint_type
                    .as_deref()
                    .map(ReplicationEndpointTypeValue::from),
            )
            .set_engine_name(self.engine_name)
            .set_username(self.username)
            .set_password(self.password)
            .set_server_name(self.server_name)
            .set_port(self.port)
            .set_database_name(self.database_name)
            .set_extra_connection_attributes(self.extra_connection_attributes)
            .set_kms_key_id(self.kms_key_id)
            .set_tags(sdk_tags(self.tags))
            .set_certificate_arn(self.certificate_arn)
            .set_ssl_mode(self.ssl_mode.as_deref().map(DmsSslModeValue::from))
            .set_service_access_role_arn(self.service_access_role_arn)
            .set_external_table_definition(self.external_table_definition)
            .set_resource_identifier(self.resource_identifier);
        set_endpoint_settings!(builder, self)
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableModifyEndpointInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub engine_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub server_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub port: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub database_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub extra_connection_attributes: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub certificate_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub ssl_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub service_access_role_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub external_table_definition: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub exact_settings: Option<bool>,
    pub redshift_settings: Option<SerializableRedshiftSettings>,
    #[serde(rename = "PostgreSQLSettings")]
    pub postgre_sql_settings: Option<SerializablePostgreSqlSettings>,
    #[serde(rename = "MySQLSettings")]
    pub my_sql_settings: Option<SerializableMySqlSettings>,
    #[serde(rename = "GcpMySQLSettings")]
    pub gcp_my_sql_settings: Option<SerializableGcpMySqlSettings>,
    pub oracle_settings: Option<SerializableOracleSettings>,
    #[serde(rename = "MicrosoftSQLServerSettings")]
    pub microsoft_sql_server_settings: Option<SerializableMicrosoftSqlServerSettings>,
    pub sybase_settings: Option<SerializableSybaseSettings>,
    #[serde(rename = "IBMDb2Settings")]
    pub ibm_db2_settings: Option<SerializableIbmDb2Settings>,
    pub mongo_db_settings: Option<SerializableMongoDbSettings>,
    pub doc_db_settings: Option<SerializableDocDbSettings>,
    pub kinesis_settings: Option<SerializableKinesisSettings>,
    pub kafka_settings: Option<SerializableKafkaSettings>,
    pub s3_settings: Option<SerializableS3Settings>,
    pub dms_transfer_settings: Option<SerializableDmsTransferSettings>,
}

impl Prune for SerializableModifyEndpointInput {
    fn prune(&mut self) {
        prune_endpoint_settings!(self);
    }
}

impl SerializableModifyEndpointInput {
    pub fn to_aws_input(self, client: &Client) -> ModifyEndpointFluentBuilder {
        let builder = client
            .modify_endpoint()
            .set_endpoint_arn(self.endpoint_arn)
            .set_endpoint_identifier(self.endpoint_identifier)
            .set_endpoint_type(
                self.endpoint_type
                    .as_deref()
                    .map(ReplicationEndpointTypeValue::from),
            )
            .set_engine_name(self.engine_name)
            .set_username(self.username)
            .set_password(self.password)
            .set_server_name(self.server_name)
            .set_port(self.port)
            .set_database_name(self.database_name)
            .set_extra_connection_attributes(self.extra_connection_attributes)
            .set_certificate_arn(self.certificate_arn)
            .set_ssl_mode(self.ssl_mode.as_deref().map(DmsSslModeValue::from))
            .set_service_access_role_arn(self.service_access_role_arn)
            .set_external_table_definition(self.external_table_definition)
            .set_exact_settings(self.exact_settings);
        set_endpoint_settings!(builder, self)
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableDeleteEndpointInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_arn: Option<String>,
}

impl Prune for SerializableDeleteEndpointInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableDescribeEndpointsInput {
    pub filters: Option<Vec<Filter>>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub max_records: Option<i32>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub marker: Option<String>,
}

impl Prune for SerializableDescribeEndpointsInput {
    fn prune(&mut self) {}
}

impl SerializableDescribeEndpointsInput {
    pub fn to_aws_input(self, client: &Client) -> anyhow::Result<DescribeEndpointsFluentBuilder> {
        let filters = self
            .filters
            .map(|filters| {
                filters
                    .into_iter()
                    .map(types::Filter::try_from)
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .transpose()?;
        Ok(client
            .describe_endpoints()
            .set_filters(filters)
            .set_max_records(self.max_records)
            .set_marker(self.marker))
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SerializableTestConnectionInput {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub replication_instance_arn: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub endpoint_arn: Option<String>,
}

impl Prune for SerializableTestConnectionInput {
    fn prune(&mut self) {}
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableEndpoint {
    pub endpoint_identifier: Option<String>,
    pub endpoint_type: Option<String>,
    pub engine_name: Option<String>,
    pub engine_display_name: Option<String>,
    pub username: Option<String>,
    pub server_name: Option<String>,
    pub port: Option<i32>,
    pub database_name: Option<String>,
    pub extra_connection_attributes: Option<String>,
    pub status: Option<String>,
    pub kms_key_id: Option<String>,
    pub endpoint_arn: Option<String>,
    pub certificate_arn: Option<String>,
    pub ssl_mode: Option<String>,
    pub service_access_role_arn: Option<String>,
    pub external_table_definition: Option<String>,
    pub external_id: Option<String>,
    pub redshift_settings: Option<SerializableRedshiftSettings>,
    #[serde(rename = "PostgreSQLSettings")]
    pub postgre_sql_settings: Option<SerializablePostgreSqlSettings>,
    #[serde(rename = "MySQLSettings")]
    pub my_sql_settings: Option<SerializableMySqlSettings>,
    #[serde(rename = "GcpMySQLSettings")]
    pub gcp_my_sql_settings: Option<SerializableGcpMySqlSettings>,
    pub oracle_settings: Option<SerializableOracleSettings>,
    #[serde(rename = "MicrosoftSQLServerSettings")]
    pub microsoft_sql_server_settings: Option<SerializableMicrosoftSqlServerSettings>,
    pub sybase_settings: Option<SerializableSybaseSettings>,
    #[serde(rename = "IBMDb2Settings")]
    pub ibm_db2_settings: Option<SerializableIbmDb2Settings>,
    pub mongo_db_settings: Option<SerializableMongoDbSettings>,
    pub doc_db_settings: Option<SerializableDocDbSettings>,
    pub kinesis_settings: Option<SerializableKinesisSettings>,
    pub kafka_settings: Option<SerializableKafkaSettings>,
    pub s3_settings: Option<SerializableS3Settings>,
    pub dms_transfer_settings: Option<SerializableDmsTransferSettings>,
}

impl From<types::Endpoint> for SerializableEndpoint {
    fn from(endpoint: types::Endpoint) -> Self {
        Self {
            endpoint_identifier: endpoint.endpoint_identifier,
            endpoint_type: endpoint.endpoint_type.map(|v| v.as_str().to_string()),
            engine_name: endpoint.engine_name,
            engine_display_name: endpoint.engine_display_name,
            username: endpoint.username,
            server_name: endpoint.server_name,
            port: endpoint.port,
            database_name: endpoint.database_name,
            extra_connection_attributes: endpoint.extra_connection_attributes,
            status: endpoint.status,
            kms_key_id: endpoint.kms_key_id,
            endpoint_arn: endpoint.endpoint_arn,
            certificate_arn: endpoint.certificate_arn,
            ssl_mode: endpoint.ssl_mode.map(|v| v.as_str().to_string()),
            service_access_role_arn: endpoint.service_access_role_arn,
            external_table_definition: endpoint.external_table_definition,
            external_id: endpoint.external_id,
            redshift_settings: endpoint.redshift_settings.map(Into::into),
            postgre_sql_settings: endpoint.postgre_sql_settings.map(Into::into),
            my_sql_settings: endpoint.my_sql_settings.map(Into::into),
            gcp_my_sql_settings: endpoint.gcp_my_sql_settings.map(Into::into),
            oracle_settings: endpoint.oracle_settings.map(Into::into),
            microsoft_sql_server_settings: endpoint.microsoft_sql_server_settings.map(Into::into),
            sybase_settings: endpoint.sybase_settings.map(Into::into),
            ibm_db2_settings: endpoint.ibm_db2_settings.map(Into::into),
            mongo_db_settings: endpoint.mongo_db_settings.map(Into::into),
            doc_db_settings: endpoint.doc_db_settings.map(Into::into),
            kinesis_settings: endpoint.kinesis_settings.map(Into::into),
            kafka_settings: endpoint.kafka_settings.map(Into::into),
            s3_settings: endpoint.s3_settings.map(Into::into),
            dms_transfer_settings: endpoint.dms_transfer_settings.map(Into::into),
        }
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableEndpointOutput {
    pub endpoint: Option<SerializableEndpoint>,
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableDescribeEndpointsOutput {
    pub endpoints: Option<Vec<SerializableEndpoint>>,
    pub marker: Option<String>,
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableConnection {
    pub replication_instance_arn: Option<String>,
    pub endpoint_arn: Option<String>,
    pub status: Option<String>,
    pub last_failure_message: Option<String>,
    pub endpoint_identifier: Option<String>,
    pub replication_instance_identifier: Option<String>,
}

impl From<types::Connection> for SerializableConnection {
    fn from(connection: types::Connection) -> Self {
        Self {
            replication_instance_arn: connection.replication_instance_arn,
            endpoint_arn: connection.endpoint_arn,
            status: connection.status,
            last_failure_message: connection.last_failure_message,
            endpoint_identifier: connection.endpoint_identifier,
            replication_instance_identifier: connection.replication_instance_identifier,
        }
    }
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SerializableTestConnectionOutput {
    pub connection: Option<SerializableConnection>,
}

impl Operation for CreateEndpoint {
    const KIND: OperationKind = OperationKind::CreateEndpoint;
    type Input = SerializableCreateEndpointInput;
    type Output = SerializableEndpointOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("Endpoint")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            input
                .to_aws_input(manager.client())
                .send()
                .await
                .map(|response| SerializableEndpointOutput {
                    endpoint: response.endpoint.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for ModifyEndpoint {
    const KIND: OperationKind = OperationKind::ModifyEndpoint;
    type Input = SerializableModifyEndpointInput;
    type Output = SerializableEndpointOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("Endpoint")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            input
                .to_aws_input(manager.client())
                .send()
                .await
                .map(|response| SerializableEndpointOutput {
                    endpoint: response.endpoint.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for DeleteEndpoint {
    const KIND: OperationKind = OperationKind::DeleteEndpoint;
    type Input = SerializableDeleteEndpointInput;
    type Output = SerializableEndpointOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("Endpoint")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .delete_endpoint()
                .set_endpoint_arn(input.endpoint_arn)
                .send()
                .await
                .map(|response| SerializableEndpointOutput {
                    endpoint: response.endpoint.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for DescribeEndpoints {
    const KIND: OperationKind = OperationKind::DescribeEndpoints;
    type Input = SerializableDescribeEndpointsInput;
    type Output = SerializableDescribeEndpointsOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("Endpoints")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        let request = input
            .to_aws_input(manager.client())
            .map_err(|e| DispatchError::Request(format!("{:#}", e)))?;
        manager.block_on(async {
            request
                .send()
                .await
                .map(|response| SerializableDescribeEndpointsOutput {
                    endpoints: response
                        .endpoints
                        .map(|list| list.into_iter().map(Into::into).collect()),
                    marker: response.marker,
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

impl Operation for TestConnection {
    const KIND: OperationKind = OperationKind::TestConnection;
    type Input = SerializableTestConnectionInput;
    type Output = SerializableTestConnectionOutput;
    fn default_selector() -> ResponseSelector {
        ResponseSelector::field("Connection")
    }
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError> {
        manager.block_on(async {
            manager
                .client()
                .test_connection()
                .set_replication_instance_arn(input.replication_instance_arn)
                .set_endpoint_arn(input.endpoint_arn)
                .send()
                .await
                .map(|response| SerializableTestConnectionOutput {
                    connection: response.connection.map(Into::into),
                })
                .map_err(|e| manager.classify(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::{mapper::map_request, params::ParameterSet};

    #[test]
    fn redshift_port_alone_yields_a_single_member_group() {
        let input: SerializableCreateEndpointInput = map_request(
            &ParameterSet::new()
                .with("EndpointIdentifier", "warehouse")
                .with("EndpointType", "target")
                .with("EngineName", "redshift")
                .with("RedshiftSettings.Port", 5439),
        )
        .unwrap();
        assert_eq!(
            input.redshift_settings,
            Some(SerializableRedshiftSettings {
                port: Some(5439),
                ..Default::default()
            })
        );
        assert!(input.postgre_sql_settings.is_none());
        assert!(input.s3_settings.is_none());
    }

    #[test]
    fn api_model_names_select_the_groups() {
        let input: SerializableModifyEndpointInput = map_request(
            &ParameterSet::new()
                .with("EndpointArn", "arn:ep")
                .with("PostgreSQLSettings.SlotName", "dms_slot")
                .with("MicrosoftSQLServerSettings.ReadBackupOnly", true)
                .with("IBMDb2Settings.CurrentLsn", "0001"),
        )
        .unwrap();
        assert_eq!(
            input.postgre_sql_settings.unwrap().slot_name.as_deref(),
            Some("dms_slot")
        );
        assert_eq!(
            input.microsoft_sql_server_settings.unwrap().read_backup_only,
            Some(true)
        );
        assert_eq!(input.ibm_db2_settings.unwrap().current_lsn.as_deref(), Some("0001"));
    }

    #[test]
    fn groups_built_in_code_are_pruned_when_empty() {
        let mut input = SerializableCreateEndpointInput {
            endpoint_identifier: Some("source".to_string()),
            my_sql_settings: Some(Default::default()),
            kafka_settings: Some(SerializableKafkaSettings {
                topic: Some("cdc".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        input.prune();
        assert!(input.my_sql_settings.is_none());
        assert!(input.kafka_settings.is_some());
    }

    #[test]
    fn sdk_endpoint_projects_settings_and_enums() {
        let endpoint = types::Endpoint::builder()
            .endpoint_identifier("warehouse")
            .endpoint_type(ReplicationEndpointTypeValue::Target)
            .ssl_mode(DmsSslModeValue::Require)
            .port(5439)
            .redshift_settings(types::RedshiftSettings::builder().port(5439).build())
            .build();
        let endpoint = SerializableEndpoint::from(endpoint);
        assert_eq!(endpoint.endpoint_type.as_deref(), Some("target"));
        assert_eq!(endpoint.ssl_mode.as_deref(), Some("require"));
        assert_eq!(endpoint.redshift_settings.unwrap().port, Some(5439));
        assert!(endpoint.s3_settings.is_none());
    }
}
