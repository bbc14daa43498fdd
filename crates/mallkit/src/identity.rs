use serde::{Deserialize, Serialize};

/// Caller identity forwarded as the trailing argument of every operation
/// that needs an authenticated actor.
///
/// Passing `None` forwards an explicit `null`, letting the dispatcher
/// resolve an ambient identity (e.g. from the surrounding request context).
/// Facades never read or mutate the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: i64,
    pub username: String,
}

impl Identity {
    pub fn new(uid: i64, username: impl Into<String>) -> Self {
        Self {
            uid,
            username: username.into(),
        }
    }
}
