use serde_json::Value;

use super::remote_service;
use crate::Identity;

remote_service! {
    /// Contact blacklist operations (`contact/black`).
    ///
    /// `from_type`/`source` name the originating system: 1 factory app,
    /// 2 store app, 3 CRM, 4 cloud-store app.
    pub struct Black as black ("contact/black") {
        /// Number of blacklisted contacts for the given source system.
        getBlackCount => fn get_black_count / get_black_count_async(
            from_type: i64,
            user: Option<&Identity>,
        ) -> i64;

        /// Blacklist entries for the given source system.
        getBlack => fn get_black / get_black_async(
            source: i64,
            user: Option<&Identity>,
        ) -> Value;

        /// Blacklists a contact; `data` carries `userId`, `fromType` and
        /// `userType`.
        addBlack => fn add_black / add_black_async(
            data: &Value,
            user: Option<&Identity>,
        ) -> bool;

        /// Removes blacklist entries by their record ids.
        delete => fn delete / delete_async(cb_ids: &[i64], user: Option<&Identity>) -> bool;
    }
}
