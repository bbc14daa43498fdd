use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::ready;

use crate::transport::BoxFuture;
use crate::{Error, Result};

/// Deferred handle to an in-flight remote call.
///
/// Returned by the `_async` variant of every facade method, unresolved at
/// the moment of return. It resolves (or rejects, with the same error
/// taxonomy as the blocking variant) wherever the caller chooses to await
/// it; dropping the handle abandons the call. The SDK adds no timeout or
/// cancellation of its own on top of the handle.
#[must_use = "a Pending does nothing until awaited; dropping it abandons the call"]
pub struct Pending<T> {
    inner: BoxFuture<Result<T>>,
}

impl<T: Send + 'static> Pending<T> {
    pub(crate) fn new(fut: impl Future<Output = Result<T>> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(fut),
        }
    }

    /// A handle that is already rejected, used to surface argument encoding
    /// failures through the deferred path.
    pub fn failed(err: Error) -> Self {
        Self {
            inner: Box::pin(ready(Err(err))),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}
