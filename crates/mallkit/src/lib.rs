//! Typed client SDK for the mall e-commerce RPC platform.
//!
//! Every facade method forwards its arguments, positionally and in
//! declaration order, to a shared [`Transport`] and returns whatever the
//! remote service produced. The SDK performs no validation, no retries and
//! no caching; it only gives each remote operation a typed local signature
//! with a blocking and a deferred entry point.

mod call;
mod client;
mod error;
mod identity;
mod pending;
mod transport;

pub mod api;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub use call::{Call, CallBuilder};
pub use client::Client;
pub use error::{DomainError, Error, RemoteError, ValidationError};
pub use identity::Identity;
pub use pending::Pending;
pub use transport::{BoxFuture, Transport};
