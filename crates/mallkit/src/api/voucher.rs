use serde_json::Value;

use super::remote_service;

remote_service! {
    /// Payment voucher records (`pay/voucher`).
    pub struct Voucher as voucher ("pay/voucher") {
        /// Creates a voucher record.
        addVoucher => fn add_voucher / add_voucher_async(data: &Value) -> bool;

        /// Pages voucher records matching `condition`.
        listVoucherPage => fn list_voucher_page / list_voucher_page_async(
            condition: &Value,
            current_page: i64,
            limit: i64,
        ) -> Value;
    }
}
