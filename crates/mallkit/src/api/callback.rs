use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::remote_service;

remote_service! {
    /// Payment callback records (`pay/callback`).
    pub struct Callback as callback ("pay/callback") {
        /// Fetches one callback record.
        getCallback => fn get_callback / get_callback_async(callback_id: i64) -> CallbackRecord;

        /// Stores a callback payload received from a payment channel.
        addCallback => fn add_callback / add_callback_async(data: &Value) -> bool;

        /// Updates a stored callback record.
        updateCallback => fn update_callback / update_callback_async(
            callback_id: i64,
            data: &Value,
        ) -> bool;

        /// Deletes a callback record.
        deleteCallback => fn delete_callback / delete_callback_async(callback_id: i64) -> bool;

        /// Pages callback records matching `condition`.
        listCallbackPage => fn list_callback_page / list_callback_page_async(
            condition: &Value,
            current_page: i64,
            limit: i64,
        ) -> Value;
    }
}

/// Stored payment-channel callback: identifier plus the raw notified payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallbackRecord {
    pub callback_id: i64,
    pub content: Value,
    pub created_time: i64,
}
