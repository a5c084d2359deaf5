pub mod dms;

use std::{error::Error, fmt, future::Future};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_databasemigration::{
    error::{DisplayErrorContext, SdkError},
    Client,
};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use tokio::runtime::Handle;
use tracing::{info, warn};

use super::{
    config::DmsConfig,
    manager::{Dispatch, DispatchError, Operation},
};

/// Operations exposed by the crate, addressable by name from the command line.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum OperationKind {
    CreateEndpoint,
    ModifyEndpoint,
    DeleteEndpoint,
    DescribeEndpoints,
    TestConnection,
    CreateReplicationInstance,
    DeleteReplicationInstance,
    CreateReplicationTask,
    StartReplicationTask,
    StopReplicationTask,
    DeleteReplicationTask,
    AddTagsToResource,
    RemoveTagsFromResource,
    ListTagsForResource,
}

pub struct DmsManager {
    client: Client,
    handle: Handle,
    config: SdkConfig,
}

impl DmsManager {
    pub fn new(handle: &Handle, config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
            handle: handle.clone(),
            config: config.clone(),
        }
    }
    pub fn from_config(handle: &Handle, config: &DmsConfig) -> Self {
        let sdk_config = handle.block_on(load_sdk_config(config));
        Self::new(handle, &sdk_config)
    }
    pub fn client(&self) -> &Client {
        &self.client
    }
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }
    /// Where requests go: the endpoint override when set, otherwise the
    /// regional service host.
    pub fn target(&self) -> String {
        match (self.config.endpoint_url(), self.config.region()) {
            (Some(url), _) => url.to_string(),
            (None, Some(region)) => format!("dms.{}.amazonaws.com", region),
            (None, None) => "dms (no region configured)".to_string(),
        }
    }
    pub fn classify<E, R>(&self, err: SdkError<E, R>) -> DispatchError
    where
        E: Error + Send + Sync + 'static,
        R: fmt::Debug + Send + Sync + 'static,
    {
        classify(&self.target(), err)
    }
}

/// Connector I/O failures and timeouts mean the service was never reached.
/// Everything else is passed through as the service reported it.
pub fn classify<E, R>(target: &str, err: SdkError<E, R>) -> DispatchError
where
    E: Error + Send + Sync + 'static,
    R: fmt::Debug + Send + Sync + 'static,
{
    let unreachable = match &err {
        SdkError::DispatchFailure(failure) => failure.is_io() || failure.is_timeout(),
        SdkError::TimeoutError(_) => true,
        _ => false,
    };
    if unreachable {
        DispatchError::Unreachable {
            target: target.to_string(),
            reason: format!("{}", DisplayErrorContext(&err)),
        }
    } else {
        match err.into_source() {
            Ok(source) => DispatchError::service(source),
            Err(err) => DispatchError::service(err),
        }
    }
}

impl Dispatch for DmsManager {
    fn dispatch<O: Operation>(&self, input: O::Input) -> Result<O::Output, DispatchError> {
        let target = self.target();
        info!(operation = %O::KIND, %target, "Sending request");
        match O::send(self, input) {
            Ok(output) => {
                info!(operation = %O::KIND, "Request completed");
                Ok(output)
            }
            Err(err) => {
                if err.is_unreachable() {
                    warn!(operation = %O::KIND, %target, "DMS endpoint unreachable");
                } else {
                    warn!(operation = %O::KIND, error = %err, "Request failed");
                }
                Err(err)
            }
        }
    }
}

pub async fn load_sdk_config(config: &DmsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(url) = &config.endpoint_url {
        loader = loader.endpoint_url(url);
    }
    loader.load().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_databasemigration::{
        operation::describe_endpoints::DescribeEndpointsError,
        types::error::ResourceNotFoundFault,
    };
    use aws_smithy_runtime_api::client::{
        orchestrator::HttpResponse, result::ConnectorError,
    };
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    type TestError = SdkError<DescribeEndpointsError, HttpResponse>;

    #[test]
    fn io_dispatch_failures_are_unreachable() {
        let err: TestError =
            SdkError::dispatch_failure(ConnectorError::io("dns error: no such host".into()));
        match classify("dms.us-east-2.amazonaws.com", err) {
            DispatchError::Unreachable { target, reason } => {
                assert_eq!(target, "dms.us-east-2.amazonaws.com");
                assert!(reason.contains("no such host"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn timeouts_are_unreachable() {
        let err: TestError = SdkError::timeout_error("operation timed out");
        assert!(classify("dms.eu-west-1.amazonaws.com", err).is_unreachable());
        let err: TestError =
            SdkError::dispatch_failure(ConnectorError::timeout("read timed out".into()));
        assert!(classify("dms.eu-west-1.amazonaws.com", err).is_unreachable());
    }

    #[test]
    fn other_failures_pass_through() {
        let err: TestError = SdkError::construction_failure("missing EndpointArn");
        let classified = classify("dms.us-east-2.amazonaws.com", err);
        assert!(!classified.is_unreachable());
        assert!(classified.to_string().contains("missing EndpointArn"));

        let err: TestError = SdkError::dispatch_failure(ConnectorError::other(
            "tls handshake rejected".into(),
            None,
        ));
        assert!(matches!(
            classify("dms.us-east-2.amazonaws.com", err),
            DispatchError::Service(_)
        ));
    }

    #[test]
    fn service_errors_keep_the_typed_fault() {
        let fault = DescribeEndpointsError::ResourceNotFoundFault(
            ResourceNotFoundFault::builder()
                .message("Endpoint not found")
                .build(),
        );
        let err = SdkError::<DescribeEndpointsError, ()>::service_error(fault, ());
        let classified = classify("dms.us-east-2.amazonaws.com", err);

        assert!(!classified.is_unreachable());
        let message = classified.to_string();
        assert!(message.contains("ResourceNotFoundFault"), "{}", message);
        assert!(message.contains("Endpoint not found"), "{}", message);
        assert!(!message.contains("Ok("), "{}", message);
        assert!(matches!(
            classified.downcast_ref::<DescribeEndpointsError>(),
            Some(DescribeEndpointsError::ResourceNotFoundFault(_))
        ));
    }

    #[test]
    fn unreachable_message_names_the_target() {
        let err = DispatchError::Unreachable {
            target: "http://localhost:4566".to_string(),
            reason: "connection refused".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("http://localhost:4566"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn operation_names_are_case_insensitive() {
        assert_eq!(
            OperationKind::from_str("createendpoint").unwrap(),
            OperationKind::CreateEndpoint
        );
        assert_eq!(
            OperationKind::from_str("ListTagsForResource").unwrap(),
            OperationKind::ListTagsForResource
        );
        assert!(OperationKind::from_str("DropDatabase").is_err());
        assert_eq!(OperationKind::iter().count(), 14);
    }
}
