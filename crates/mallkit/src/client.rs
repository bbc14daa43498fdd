use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RemoteError;
use crate::{Call, Pending, Result, Transport};

/// Shared handle to the dispatcher, and the root of every facade.
///
/// A `Client` is constructed once per transport at application start and
/// passed (or cloned, cheaply) to whoever needs a facade; every facade
/// obtained from it and from its clones dispatches through the same
/// transport. The client itself holds no other state and no locks.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport this client and all its facades dispatch through.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Dispatches `call` and blocks until the decoded result is available.
    pub fn invoke<R: DeserializeOwned>(&self, call: Call) -> Result<R> {
        log::debug!("invoking {}::{}", call.service, call.method);
        let raw = self.transport.request(&call)?;
        decode(call.service, call.method, raw)
    }

    /// Dispatches `call` on the deferred path and returns the handle without
    /// resolving it.
    pub fn invoke_async<R: DeserializeOwned + Send + 'static>(&self, call: Call) -> Pending<R> {
        log::debug!("invoking {}::{} (deferred)", call.service, call.method);
        let (service, method) = (call.service, call.method);
        let fut = self.transport.request_deferred(call);
        Pending::new(async move { decode(service, method, fut.await?) })
    }
}

fn decode<R: DeserializeOwned>(service: &str, method: &str, raw: Value) -> Result<R> {
    serde_json::from_value(raw).map_err(|source| RemoteError::decode(service, method, source).into())
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::BoxFuture;
    use crate::Error;

    struct Fixed(Value);

    impl Transport for Fixed {
        fn request(&self, _call: &Call) -> Result<Value> {
            Ok(self.0.clone())
        }

        fn request_deferred(&self, _call: Call) -> BoxFuture<Result<Value>> {
            let value = self.0.clone();
            Box::pin(async move { Ok(value) })
        }
    }

    #[test]
    fn invoke_decodes_into_the_declared_type() {
        let client = Client::new(Fixed(json!(42)));
        let call = Call::to("cart/cart", "getMaxCount").finish().unwrap();
        let count: i64 = client.invoke(call).unwrap();
        assert_eq!(count, 42);
    }

    #[test]
    fn mistyped_response_surfaces_as_remote_decode_error() {
        let client = Client::new(Fixed(json!("not a number")));
        let call = Call::to("cart/cart", "getMaxCount").finish().unwrap();
        let err = client.invoke::<i64>(call).unwrap_err();
        assert!(matches!(
            err,
            Error::Remote(RemoteError::Decode { ref service, ref method, .. })
                if service == "cart/cart" && method == "getMaxCount"
        ));
    }

    #[test]
    fn clones_share_the_transport() {
        let client = Client::new(Fixed(Value::Null));
        let clone = client.clone();
        assert!(Arc::ptr_eq(client.transport(), clone.transport()));
    }
}
