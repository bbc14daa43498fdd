use serde_json::{Map, Value};

use crate::Call;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a facade call can surface.
///
/// Facades never recover, translate or swallow errors: whatever the
/// transport reports is handed to the caller unchanged, through the blocking
/// return value or through the rejected [`Pending`](crate::Pending) handle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The round trip itself failed: network, timeout, or a payload that
    /// could not be encoded or decoded.
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// The remote service executed the call and reported an application
    /// failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The remote service rejected the parameters. The SDK itself never
    /// performs validation; this kind only ever originates remotely.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Transport-level invocation failure.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("transport failure calling `{service}::{method}`: {source}")]
    Transport {
        service: String,
        method: String,
        #[source]
        source: BoxError,
    },
    #[error("call to `{service}::{method}` timed out")]
    Timeout { service: String, method: String },
    #[error("connection closed before `{service}::{method}` completed")]
    ChannelClosed { service: String, method: String },
    #[error("could not encode argument {index} of `{service}::{method}`: {source}")]
    Encode {
        service: String,
        method: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not decode response of `{service}::{method}`: {source}")]
    Decode {
        service: String,
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    pub fn transport(call: &Call, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            service: call.service.to_string(),
            method: call.method.to_string(),
            source: source.into(),
        }
    }

    pub fn timeout(call: &Call) -> Self {
        Self::Timeout {
            service: call.service.to_string(),
            method: call.method.to_string(),
        }
    }

    pub fn channel_closed(call: &Call) -> Self {
        Self::ChannelClosed {
            service: call.service.to_string(),
            method: call.method.to_string(),
        }
    }

    pub(crate) fn encode(
        service: &str,
        method: &str,
        index: usize,
        source: serde_json::Error,
    ) -> Self {
        Self::Encode {
            service: service.to_string(),
            method: method.to_string(),
            index,
            source,
        }
    }

    pub(crate) fn decode(service: &str, method: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            service: service.to_string(),
            method: method.to_string(),
            source,
        }
    }
}

/// Application-level failure reported by a remote service.
///
/// Carries the remote message plus the optional structured context and error
/// code the platform attaches to its logic exceptions, so callers can branch
/// on `code` rather than on message content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            context: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }
}

/// Parameter violation enforced and reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("invalid `{field}`: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
