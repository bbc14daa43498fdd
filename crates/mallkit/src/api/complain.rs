use serde_json::Value;

use super::remote_service;
use crate::Identity;

remote_service! {
    /// Store complaint operations (`store/complain`).
    ///
    /// `dimension` selects the complaint target: 1 store, 2 trade, 3 goods.
    pub struct Complain as complain ("store/complain") {
        /// Files a complaint against a store, trade or goods item;
        /// `complain_data` carries `storeId`, `dimension`, `type`, `itemId`
        /// and the complainant contact fields.
        addStoreComplain => fn add_store_complain / add_store_complain_async(
            complain_data: &Value,
            user: Option<&Identity>,
        ) -> bool;

        /// Withdraws a filed complaint.
        deleteStoreComplain => fn delete_store_complain / delete_store_complain_async(
            complain_id: i64,
            user: Option<&Identity>,
        ) -> bool;

        /// Pages the complaints filed against a store within one dimension.
        listStoreComplainPage => fn list_store_complain_page / list_store_complain_page_async(
            store_id: i64,
            dimension: i64,
            page: i64,
            limit: i64,
            user: Option<&Identity>,
        ) -> Value;
    }
}
