//! Engine specific endpoint settings.
//!
//! Each group is declared once as a list of `field: kind = "WireName" =>
//! sdk_setter` entries; the macro derives the serde shape, the populated
//! field report and both conversions to and from the SDK type. Kinds are
//! `text`, `flag`, `int` and `choice(SdkEnum)` for enum members, which travel
//! as their string value.

use aws_sdk_databasemigration::types::{
    self, AuthMechanismValue, AuthTypeValue, CharLengthSemantics, CompressionTypeValue,
    DataFormatValue, DatabaseMode, EncryptionModeValue, KafkaSecurityProtocol, MessageFormatValue,
    NestingLevelValue, PluginNameValue, SafeguardPolicy, TargetDbType,
};
use serde::{Deserialize, Serialize};

use crate::v1::mapper::SettingsGroup;

macro_rules! settings_group {
    (@ty text) => { String };
    (@ty flag) => { bool };
    (@ty int) => { i32 };
    (@ty choice) => { String };

    (@to_sdk choice $sdk_enum:ty, $value:expr) => {
        $value.as_deref().map(<$sdk_enum>::from)
    };
    (@to_sdk $kind:ident, $value:expr) => { $value };

    (@from_sdk choice $sdk_enum:ty, $value:expr) => {
        $value.map(|v| v.as_str().to_string())
    };
    (@from_sdk $kind:ident, $value:expr) => { $value };

    (
        $(#[$meta:meta])*
        $name:ident => $sdk:ident {
            $(
                $field:ident: $kind:ident $(($sdk_enum:ty))? = $wire:literal => $setter:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                #[serde(
                    rename = $wire,
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::v1::lenient::deserialize"
                )]
                pub $field: Option<settings_group!(@ty $kind)>,
            )*
        }

        impl SettingsGroup for $name {
            fn populated(&self) -> Vec<&'static str> {
                let mut fields = vec![];
                $(
                    if self.$field.is_some() {
                        fields.push($wire);
                    }
                )*
                fields
            }
        }

        impl From<$name> for types::$sdk {
            fn from(group: $name) -> Self {
                types::$sdk::builder()
                    $(
                        .$setter(settings_group!(@to_sdk $kind $($sdk_enum)?, group.$field))
                    )*
                    .build()
            }
        }

        impl From<types::$sdk> for $name {
            fn from(settings: types::$sdk) -> Self {
                Self {
                    $(
                        $field: settings_group!(@from_sdk $kind $($sdk_enum)?, settings.$field),
                    )*
                }
            }
        }
    };
}

settings_group! {
    /// Amazon Redshift target.
    SerializableRedshiftSettings => RedshiftSettings {
        accept_any_date: flag = "AcceptAnyDate" => set_accept_any_date,
        after_connect_script: text = "AfterConnectScript" => set_after_connect_script,
        bucket_folder: text = "BucketFolder" => set_bucket_folder,
        bucket_name: text = "BucketName" => set_bucket_name,
        case_sensitive_names: flag = "CaseSensitiveNames" => set_case_sensitive_names,
        comp_update: flag = "CompUpdate" => set_comp_update,
        connection_timeout: int = "ConnectionTimeout" => set_connection_timeout,
        database_name: text = "DatabaseName" => set_database_name,
        date_format: text = "DateFormat" => set_date_format,
        empty_as_null: flag = "EmptyAsNull" => set_empty_as_null,
        encryption_mode: choice(EncryptionModeValue) = "EncryptionMode" => set_encryption_mode,
        explicit_ids: flag = "ExplicitIds" => set_explicit_ids,
        file_transfer_upload_streams: int = "FileTransferUploadStreams" => set_file_transfer_upload_streams,
        load_timeout: int = "LoadTimeout" => set_load_timeout,
        max_file_size: int = "MaxFileSize" => set_max_file_size,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        remove_quotes: flag = "RemoveQuotes" => set_remove_quotes,
        replace_invalid_chars: text = "ReplaceInvalidChars" => set_replace_invalid_chars,
        replace_chars: text = "ReplaceChars" => set_replace_chars,
        server_name: text = "ServerName" => set_server_name,
        service_access_role_arn: text = "ServiceAccessRoleArn" => set_service_access_role_arn,
        server_side_encryption_kms_key_id: text = "ServerSideEncryptionKmsKeyId" => set_server_side_encryption_kms_key_id,
        time_format: text = "TimeFormat" => set_time_format,
        trim_blanks: flag = "TrimBlanks" => set_trim_blanks,
        truncate_columns: flag = "TruncateColumns" => set_truncate_columns,
        username: text = "Username" => set_username,
        write_buffer_size: int = "WriteBufferSize" => set_write_buffer_size,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
        map_boolean_as_boolean: flag = "MapBooleanAsBoolean" => set_map_boolean_as_boolean,
    }
}

settings_group! {
    /// PostgreSQL source or target.
    SerializablePostgreSqlSettings => PostgreSqlSettings {
        after_connect_script: text = "AfterConnectScript" => set_after_connect_script,
        capture_ddls: flag = "CaptureDdls" => set_capture_ddls,
        max_file_size: int = "MaxFileSize" => set_max_file_size,
        database_name: text = "DatabaseName" => set_database_name,
        ddl_artifacts_schema: text = "DdlArtifactsSchema" => set_ddl_artifacts_schema,
        execute_timeout: int = "ExecuteTimeout" => set_execute_timeout,
        fail_tasks_on_lob_truncation: flag = "FailTasksOnLobTruncation" => set_fail_tasks_on_lob_truncation,
        heartbeat_enable: flag = "HeartbeatEnable" => set_heartbeat_enable,
        heartbeat_schema: text = "HeartbeatSchema" => set_heartbeat_schema,
        heartbeat_frequency: int = "HeartbeatFrequency" => set_heartbeat_frequency,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        server_name: text = "ServerName" => set_server_name,
        username: text = "Username" => set_username,
        slot_name: text = "SlotName" => set_slot_name,
        plugin_name: choice(PluginNameValue) = "PluginName" => set_plugin_name,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
        trim_space_in_char: flag = "TrimSpaceInChar" => set_trim_space_in_char,
        map_boolean_as_boolean: flag = "MapBooleanAsBoolean" => set_map_boolean_as_boolean,
        map_jsonb_as_clob: flag = "MapJsonbAsClob" => set_map_jsonb_as_clob,
        database_mode: choice(DatabaseMode) = "DatabaseMode" => set_database_mode,
        babelfish_database_name: text = "BabelfishDatabaseName" => set_babelfish_database_name,
    }
}

settings_group! {
    /// MySQL compatible source or target.
    SerializableMySqlSettings => MySqlSettings {
        after_connect_script: text = "AfterConnectScript" => set_after_connect_script,
        clean_source_metadata_on_mismatch: flag = "CleanSourceMetadataOnMismatch" => set_clean_source_metadata_on_mismatch,
        database_name: text = "DatabaseName" => set_database_name,
        events_poll_interval: int = "EventsPollInterval" => set_events_poll_interval,
        target_db_type: choice(TargetDbType) = "TargetDbType" => set_target_db_type,
        max_file_size: int = "MaxFileSize" => set_max_file_size,
        parallel_load_threads: int = "ParallelLoadThreads" => set_parallel_load_threads,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        server_name: text = "ServerName" => set_server_name,
        server_timezone: text = "ServerTimezone" => set_server_timezone,
        username: text = "Username" => set_username,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
        execute_timeout: int = "ExecuteTimeout" => set_execute_timeout,
    }
}

settings_group! {
    /// MySQL on Google Cloud SQL.
    SerializableGcpMySqlSettings => GcpMySqlSettings {
        after_connect_script: text = "AfterConnectScript" => set_after_connect_script,
        clean_source_metadata_on_mismatch: flag = "CleanSourceMetadataOnMismatch" => set_clean_source_metadata_on_mismatch,
        database_name: text = "DatabaseName" => set_database_name,
        events_poll_interval: int = "EventsPollInterval" => set_events_poll_interval,
        target_db_type: choice(TargetDbType) = "TargetDbType" => set_target_db_type,
        max_file_size: int = "MaxFileSize" => set_max_file_size,
        parallel_load_threads: int = "ParallelLoadThreads" => set_parallel_load_threads,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        server_name: text = "ServerName" => set_server_name,
        server_timezone: text = "ServerTimezone" => set_server_timezone,
        username: text = "Username" => set_username,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
    }
}

settings_group! {
    /// Oracle source or target.
    SerializableOracleSettings => OracleSettings {
        add_supplemental_logging: flag = "AddSupplementalLogging" => set_add_supplemental_logging,
        archived_log_dest_id: int = "ArchivedLogDestId" => set_archived_log_dest_id,
        additional_archived_log_dest_id: int = "AdditionalArchivedLogDestId" => set_additional_archived_log_dest_id,
        allow_select_nested_tables: flag = "AllowSelectNestedTables" => set_allow_select_nested_tables,
        parallel_asm_read_threads: int = "ParallelAsmReadThreads" => set_parallel_asm_read_threads,
        read_ahead_blocks: int = "ReadAheadBlocks" => set_read_ahead_blocks,
        access_alternate_directly: flag = "AccessAlternateDirectly" => set_access_alternate_directly,
        use_alternate_folder_for_online: flag = "UseAlternateFolderForOnline" => set_use_alternate_folder_for_online,
        oracle_path_prefix: text = "OraclePathPrefix" => set_oracle_path_prefix,
        use_path_prefix: text = "UsePathPrefix" => set_use_path_prefix,
        replace_path_prefix: flag = "ReplacePathPrefix" => set_replace_path_prefix,
        enable_homogenous_tablespace: flag = "EnableHomogenousTablespace" => set_enable_homogenous_tablespace,
        direct_path_no_log: flag = "DirectPathNoLog" => set_direct_path_no_log,
        archived_logs_only: flag = "ArchivedLogsOnly" => set_archived_logs_only,
        asm_password: text = "AsmPassword" => set_asm_password,
        asm_server: text = "AsmServer" => set_asm_server,
        asm_user: text = "AsmUser" => set_asm_user,
        char_length_semantics: choice(CharLengthSemantics) = "CharLengthSemantics" => set_char_length_semantics,
        database_name: text = "DatabaseName" => set_database_name,
        direct_path_parallel_load: flag = "DirectPathParallelLoad" => set_direct_path_parallel_load,
        fail_tasks_on_lob_truncation: flag = "FailTasksOnLobTruncation" => set_fail_tasks_on_lob_truncation,
        number_datatype_scale: int = "NumberDatatypeScale" => set_number_datatype_scale,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        read_table_space_name: flag = "ReadTableSpaceName" => set_read_table_space_name,
        retry_interval: int = "RetryInterval" => set_retry_interval,
        security_db_encryption: text = "SecurityDbEncryption" => set_security_db_encryption,
        security_db_encryption_name: text = "SecurityDbEncryptionName" => set_security_db_encryption_name,
        server_name: text = "ServerName" => set_server_name,
        standby_delay_time: int = "StandbyDelayTime" => set_standby_delay_time,
        username: text = "Username" => set_username,
        use_b_file: flag = "UseBFile" => set_use_b_file,
        use_direct_path_full_load: flag = "UseDirectPathFullLoad" => set_use_direct_path_full_load,
        use_logminer_reader: flag = "UseLogminerReader" => set_use_logminer_reader,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
        trim_space_in_char: flag = "TrimSpaceInChar" => set_trim_space_in_char,
    }
}

settings_group! {
    /// Microsoft SQL Server source or target.
    SerializableMicrosoftSqlServerSettings => MicrosoftSqlServerSettings {
        port: int = "Port" => set_port,
        bcp_packet_size: int = "BcpPacketSize" => set_bcp_packet_size,
        database_name: text = "DatabaseName" => set_database_name,
        control_tables_file_group: text = "ControlTablesFileGroup" => set_control_tables_file_group,
        password: text = "Password" => set_password,
        query_single_always_on_node: flag = "QuerySingleAlwaysOnNode" => set_query_single_always_on_node,
        read_backup_only: flag = "ReadBackupOnly" => set_read_backup_only,
        safeguard_policy: choice(SafeguardPolicy) = "SafeguardPolicy" => set_safeguard_policy,
        server_name: text = "ServerName" => set_server_name,
        username: text = "Username" => set_username,
        use_bcp_full_load: flag = "UseBcpFullLoad" => set_use_bcp_full_load,
        use_third_party_backup_device: flag = "UseThirdPartyBackupDevice" => set_use_third_party_backup_device,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
        trim_space_in_char: flag = "TrimSpaceInChar" => set_trim_space_in_char,
    }
}

settings_group! {
    /// SAP ASE (Sybase) source or target.
    SerializableSybaseSettings => SybaseSettings {
        database_name: text = "DatabaseName" => set_database_name,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        server_name: text = "ServerName" => set_server_name,
        username: text = "Username" => set_username,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
    }
}

settings_group! {
    /// IBM Db2 LUW source.
    SerializableIbmDb2Settings => IbmDb2Settings {
        database_name: text = "DatabaseName" => set_database_name,
        password: text = "Password" => set_password,
        port: int = "Port" => set_port,
        server_name: text = "ServerName" => set_server_name,
        set_data_capture_changes: flag = "SetDataCaptureChanges" => set_set_data_capture_changes,
        current_lsn: text = "CurrentLsn" => set_current_lsn,
        max_k_bytes_per_read: int = "MaxKBytesPerRead" => set_max_k_bytes_per_read,
        username: text = "Username" => set_username,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
    }
}

settings_group! {
    /// MongoDB source.
    SerializableMongoDbSettings => MongoDbSettings {
        username: text = "Username" => set_username,
        password: text = "Password" => set_password,
        server_name: text = "ServerName" => set_server_name,
        port: int = "Port" => set_port,
        database_name: text = "DatabaseName" => set_database_name,
        auth_type: choice(AuthTypeValue) = "AuthType" => set_auth_type,
        auth_mechanism: choice(AuthMechanismValue) = "AuthMechanism" => set_auth_mechanism,
        nesting_level: choice(NestingLevelValue) = "NestingLevel" => set_nesting_level,
        extract_doc_id: text = "ExtractDocId" => set_extract_doc_id,
        docs_to_investigate: text = "DocsToInvestigate" => set_docs_to_investigate,
        auth_source: text = "AuthSource" => set_auth_source,
        kms_key_id: text = "KmsKeyId" => set_kms_key_id,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
    }
}

settings_group! {
    /// Amazon DocumentDB source.
    SerializableDocDbSettings => DocDbSettings {
        username: text = "Username" => set_username,
        password: text = "Password" => set_password,
        server_name: text = "ServerName" => set_server_name,
        port: int = "Port" => set_port,
        database_name: text = "DatabaseName" => set_database_name,
        nesting_level: choice(NestingLevelValue) = "NestingLevel" => set_nesting_level,
        extract_doc_id: flag = "ExtractDocId" => set_extract_doc_id,
        docs_to_investigate: int = "DocsToInvestigate" => set_docs_to_investigate,
        kms_key_id: text = "KmsKeyId" => set_kms_key_id,
        secrets_manager_access_role_arn: text = "SecretsManagerAccessRoleArn" => set_secrets_manager_access_role_arn,
        secrets_manager_secret_id: text = "SecretsManagerSecretId" => set_secrets_manager_secret_id,
    }
}

settings_group! {
    /// Amazon Kinesis Data Streams target.
    SerializableKinesisSettings => KinesisSettings {
        stream_arn: text = "StreamArn" => set_stream_arn,
        message_format: choice(MessageFormatValue) = "MessageFormat" => set_message_format,
        service_access_role_arn: text = "ServiceAccessRoleArn" => set_service_access_role_arn,
        include_transaction_details: flag = "IncludeTransactionDetails" => set_include_transaction_details,
        include_partition_value: flag = "IncludePartitionValue" => set_include_partition_value,
        partition_include_schema_table: flag = "PartitionIncludeSchemaTable" => set_partition_include_schema_table,
        include_table_alter_operations: flag = "IncludeTableAlterOperations" => set_include_table_alter_operations,
        include_control_details: flag = "IncludeControlDetails" => set_include_control_details,
        include_null_and_empty: flag = "IncludeNullAndEmpty" => set_include_null_and_empty,
        no_hex_prefix: flag = "NoHexPrefix" => set_no_hex_prefix,
    }
}

settings_group! {
    /// Apache Kafka target.
    SerializableKafkaSettings => KafkaSettings {
        broker: text = "Broker" => set_broker,
        topic: text = "Topic" => set_topic,
        message_format: choice(MessageFormatValue) = "MessageFormat" => set_message_format,
        include_transaction_details: flag = "IncludeTransactionDetails" => set_include_transaction_details,
        include_partition_value: flag = "IncludePartitionValue" => set_include_partition_value,
        partition_include_schema_table: flag = "PartitionIncludeSchemaTable" => set_partition_include_schema_table,
        include_table_alter_operations: flag = "IncludeTableAlterOperations" => set_include_table_alter_operations,
        include_control_details: flag = "IncludeControlDetails" => set_include_control_details,
        message_max_bytes: int = "MessageMaxBytes" => set_message_max_bytes,
        include_null_and_empty: flag = "IncludeNullAndEmpty" => set_include_null_and_empty,
        security_protocol: choice(KafkaSecurityProtocol) = "SecurityProtocol" => set_security_protocol,
        ssl_client_certificate_arn: text = "SslClientCertificateArn" => set_ssl_client_certificate_arn,
        ssl_client_key_arn: text = "SslClientKeyArn" => set_ssl_client_key_arn,
        ssl_client_key_password: text = "SslClientKeyPassword" => set_ssl_client_key_password,
        ssl_ca_certificate_arn: text = "SslCaCertificateArn" => set_ssl_ca_certificate_arn,
        sasl_username: text = "SaslUsername" => set_sasl_username,
        sasl_password: text = "SaslPassword" => set_sasl_password,
        no_hex_prefix: flag = "NoHexPrefix" => set_no_hex_prefix,
    }
}

settings_group! {
    /// Amazon S3 source or target.
    SerializableS3Settings => S3Settings {
        service_access_role_arn: text = "ServiceAccessRoleArn" => set_service_access_role_arn,
        external_table_definition: text = "ExternalTableDefinition" => set_external_table_definition,
        csv_row_delimiter: text = "CsvRowDelimiter" => set_csv_row_delimiter,
        csv_delimiter: text = "CsvDelimiter" => set_csv_delimiter,
        bucket_folder: text = "BucketFolder" => set_bucket_folder,
        bucket_name: text = "BucketName" => set_bucket_name,
        compression_type: choice(CompressionTypeValue) = "CompressionType" => set_compression_type,
        encryption_mode: choice(EncryptionModeValue) = "EncryptionMode" => set_encryption_mode,
        server_side_encryption_kms_key_id: text = "ServerSideEncryptionKmsKeyId" => set_server_side_encryption_kms_key_id,
        data_format: choice(DataFormatValue) = "DataFormat" => set_data_format,
        dict_page_size_limit: int = "DictPageSizeLimit" => set_dict_page_size_limit,
        row_group_length: int = "RowGroupLength" => set_row_group_length,
        data_page_size: int = "DataPageSize" => set_data_page_size,
        enable_statistics: flag = "EnableStatistics" => set_enable_statistics,
        include_op_for_full_load: flag = "IncludeOpForFullLoad" => set_include_op_for_full_load,
        cdc_inserts_only: flag = "CdcInsertsOnly" => set_cdc_inserts_only,
        timestamp_column_name: text = "TimestampColumnName" => set_timestamp_column_name,
        parquet_timestamp_in_millisecond: flag = "ParquetTimestampInMillisecond" => set_parquet_timestamp_in_millisecond,
        cdc_inserts_and_updates: flag = "CdcInsertsAndUpdates" => set_cdc_inserts_and_updates,
        date_partition_enabled: flag = "DatePartitionEnabled" => set_date_partition_enabled,
        preserve_transactions: flag = "PreserveTransactions" => set_preserve_transactions,
        cdc_path: text = "CdcPath" => set_cdc_path,
        add_column_name: flag = "AddColumnName" => set_add_column_name,
        cdc_max_batch_interval: int = "CdcMaxBatchInterval" => set_cdc_max_batch_interval,
        cdc_min_file_size: int = "CdcMinFileSize" => set_cdc_min_file_size,
        csv_null_value: text = "CsvNullValue" => set_csv_null_value,
        ignore_header_rows: int = "IgnoreHeaderRows" => set_ignore_header_rows,
        max_file_size: int = "MaxFileSize" => set_max_file_size,
        rfc4180: flag = "Rfc4180" => set_rfc4180,
        date_partition_timezone: text = "DatePartitionTimezone" => set_date_partition_timezone,
        expected_bucket_owner: text = "ExpectedBucketOwner" => set_expected_bucket_owner,
    }
}

settings_group! {
    /// Bucket used for DMS transfers.
    SerializableDmsTransferSettings => DmsTransferSettings {
        service_access_role_arn: text = "ServiceAccessRoleArn" => set_service_access_role_arn,
        bucket_name: text = "BucketName" => set_bucket_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_supplied_members_serialize() {
        let settings = SerializableRedshiftSettings {
            port: Some(5439),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({ "Port": 5439 }));
        assert_eq!(settings.populated(), vec!["Port"]);
        assert!(SerializableRedshiftSettings::default().is_empty());
    }

    #[test]
    fn wire_names_follow_the_api_model() {
        let settings: SerializableIbmDb2Settings = serde_json::from_value(json!({
            "SetDataCaptureChanges": true,
            "MaxKBytesPerRead": 64
        }))
        .unwrap();
        assert_eq!(settings.set_data_capture_changes, Some(true));
        assert_eq!(settings.max_k_bytes_per_read, Some(64));
        assert!(serde_json::from_value::<SerializableIbmDb2Settings>(json!({
            "set_data_capture_changes": true
        }))
        .is_err());
    }

    #[test]
    fn enum_members_reach_the_sdk_type() {
        let sdk = types::S3Settings::from(SerializableS3Settings {
            bucket_name: Some("landing".to_string()),
            data_format: Some("parquet".to_string()),
            ..Default::default()
        });
        assert_eq!(sdk.bucket_name(), Some("landing"));
        assert_eq!(sdk.data_format(), Some(&DataFormatValue::Parquet));
        assert_eq!(sdk.bucket_folder(), None);

        let back = SerializableS3Settings::from(sdk);
        assert_eq!(back.data_format.as_deref(), Some("parquet"));
        assert_eq!(back.populated(), vec!["BucketName", "DataFormat"]);
    }

    #[test]
    fn sdk_round_trip_keeps_unset_members_unset() {
        let group = SerializableKafkaSettings {
            broker: Some("b-1:9092".to_string()),
            security_protocol: Some("sasl-ssl".to_string()),
            message_max_bytes: Some(1_000_000),
            ..Default::default()
        };
        let back = SerializableKafkaSettings::from(types::KafkaSettings::from(group.clone()));
        assert_eq!(back, group);
    }
}
