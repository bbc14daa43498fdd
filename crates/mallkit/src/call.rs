use serde::Serialize;
use serde_json::Value;

use crate::error::RemoteError;
use crate::Result;

/// A single remote invocation: `(service, method, positional arguments)`.
///
/// The blocking and deferred variants of a facade method build their `Call`
/// through the same table entry, so both modes always hand the transport an
/// identical tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub service: &'static str,
    pub method: &'static str,
    pub args: Vec<Value>,
}

impl Call {
    pub fn to(service: &'static str, method: &'static str) -> CallBuilder {
        CallBuilder {
            call: Call {
                service,
                method,
                args: Vec::new(),
            },
            err: None,
        }
    }
}

/// Serializes arguments positionally, in declaration order.
///
/// An absent optional value (e.g. a missing identity) serializes to an
/// explicit JSON `null`; the argument is never elided, so the dispatcher can
/// tell "no explicit identity" apart from a shorter argument list.
#[derive(Debug)]
pub struct CallBuilder {
    call: Call,
    err: Option<RemoteError>,
}

impl CallBuilder {
    #[must_use]
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        if self.err.is_some() {
            return self;
        }
        match serde_json::to_value(value) {
            Ok(value) => self.call.args.push(value),
            Err(source) => {
                self.err = Some(RemoteError::encode(
                    self.call.service,
                    self.call.method,
                    self.call.args.len(),
                    source,
                ));
            }
        }
        self
    }

    pub fn finish(self) -> Result<Call> {
        match self.err {
            None => Ok(self.call),
            Some(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Identity;

    #[test]
    fn args_keep_declaration_order() {
        let call = Call::to("cart/cart", "addCart")
            .arg(&27767)
            .arg(&["xl"])
            .arg(&true)
            .finish()
            .unwrap();

        assert_eq!(call.service, "cart/cart");
        assert_eq!(call.method, "addCart");
        assert_eq!(call.args, vec![json!(27767), json!(["xl"]), json!(true)]);
    }

    #[test]
    fn missing_identity_becomes_explicit_null() {
        let user: Option<&Identity> = None;
        let call = Call::to("cart/cart", "listCart")
            .arg(&user)
            .finish()
            .unwrap();

        assert_eq!(call.args, vec![Value::Null]);
    }

    #[test]
    fn present_identity_serializes_in_place() {
        let user = Identity::new(148086, "molimoq");
        let call = Call::to("cart/cart", "getCartCount")
            .arg(&Some(&user))
            .finish()
            .unwrap();

        assert_eq!(
            call.args,
            vec![json!({"uid": 148086, "username": "molimoq"})]
        );
    }
}
