use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::remote_service;

remote_service! {
    /// Account recharge records (`pay/recharge`).
    pub struct Recharge as recharge ("pay/recharge") {
        /// Fetches one recharge record.
        getRecharge => fn get_recharge / get_recharge_async(recharge_id: i64) -> RechargeRecord;

        /// Creates a recharge record.
        addRecharge => fn add_recharge / add_recharge_async(data: &Value) -> bool;

        /// Updates a recharge record.
        updateRecharge => fn update_recharge / update_recharge_async(
            recharge_id: i64,
            data: &Value,
        ) -> bool;

        /// Deletes a recharge record.
        deleteRecharge => fn delete_recharge / delete_recharge_async(recharge_id: i64) -> bool;

        /// Pages recharge records matching `condition`.
        listRechargePage => fn list_recharge_page / list_recharge_page_async(
            condition: &Value,
            current_page: i64,
            limit: i64,
        ) -> Value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RechargeRecord {
    pub recharge_id: i64,
    pub user_id: i64,
    /// Amount in cents.
    pub money: i64,
    pub status: i64,
    pub created_time: i64,
}
