use std::{error::Error as StdError, fmt, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::{
    aws::{DmsManager, OperationKind},
    mapper::Prune,
    select::ResponseSelector,
};

/// One remote DMS operation: a typed request, a serializable result and the
/// single SDK call that connects them.
pub trait Operation {
    const KIND: OperationKind;
    type Input: DeserializeOwned + Serialize + Prune + fmt::Debug;
    type Output: DeserializeOwned + Serialize + fmt::Debug;
    fn default_selector() -> ResponseSelector;
    fn send(manager: &DmsManager, input: Self::Input) -> Result<Self::Output, DispatchError>;
}

/// Issues exactly one request per call. No retries.
pub trait Dispatch {
    fn dispatch<O: Operation>(&self, input: O::Input) -> Result<O::Output, DispatchError>;
}

#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error(
        "Could not reach the DMS endpoint {target}. Check network connectivity, \
         DNS resolution and the configured region or endpoint URL. Cause: {reason}"
    )]
    Unreachable { target: String, reason: String },
    /// The service's own error, unchanged. Downcast to the operation's SDK
    /// error type to match on the fault.
    #[error(transparent)]
    Service(Arc<dyn StdError + Send + Sync + 'static>),
    #[error("Could not build request: {0}")]
    Request(String),
}

impl DispatchError {
    pub fn service(source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        DispatchError::Service(Arc::from(source.into()))
    }
    pub fn is_unreachable(&self) -> bool {
        matches!(self, DispatchError::Unreachable { .. })
    }
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            DispatchError::Service(source) => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}
