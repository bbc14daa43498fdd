use serde_json::Value;

use crate::{Call, Result};

pub type BoxFuture<T> = futures::future::BoxFuture<'static, T>;

/// The dispatcher performing the actual network round trip.
///
/// This is the sole wire-adjacent boundary of the SDK; the protocol behind it
/// (framing, serialization, endpoint resolution) is pluggable. Implementations
/// must map remote application failures to [`Error::Domain`] or
/// [`Error::Validation`] and everything transport-shaped to [`Error::Remote`];
/// the facade layer passes all of them through untouched. Any retry or
/// caching policy lives behind this trait, never in front of it.
///
/// Implementations are shared across facades and clones of a
/// [`Client`](crate::Client), so they must be safe to call concurrently.
///
/// [`Error::Domain`]: crate::Error::Domain
/// [`Error::Validation`]: crate::Error::Validation
/// [`Error::Remote`]: crate::Error::Remote
pub trait Transport: Send + Sync {
    /// Performs the round trip for `call`, blocking the caller until the
    /// decoded result (or failure) is available.
    fn request(&self, call: &Call) -> Result<Value>;

    /// Starts the round trip for `call` and returns immediately. The future
    /// resolves to the same result `request` would have produced, with the
    /// same error taxonomy. Dropping it abandons the call.
    fn request_deferred(&self, call: Call) -> BoxFuture<Result<Value>>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn request(&self, call: &Call) -> Result<Value> {
        (**self).request(call)
    }

    fn request_deferred(&self, call: Call) -> BoxFuture<Result<Value>> {
        (**self).request_deferred(call)
    }
}
