use serde_json::Value;

use super::remote_service;
use crate::Identity;

remote_service! {
    /// Withdrawal applications (`pay/applyWithdraw`).
    pub struct ApplyWithdraw as apply_withdraw ("pay/applyWithdraw") {
        /// Prefills the withdrawal form for a store: balance, bound bank
        /// cards, fee schedule.
        prepareApplyForm => fn prepare_apply_form / prepare_apply_form_async(
            store_id: i64,
            user: Option<&Identity>,
        ) -> Value;

        /// Applies for a withdrawal to a bound bank card. `money` is in
        /// cents.
        applyForBank => fn apply_for_bank / apply_for_bank_async(
            pa_id: i64,
            pb_id: i64,
            money: i64,
            pay_password: &str,
            user: Option<&Identity>,
        ) -> bool;

        /// Advances the processing status of a withdrawal.
        updateWithdrawStatus => fn update_withdraw_status / update_withdraw_status_async(
            pw_id: i64,
            status: i64,
            remark: &str,
        ) -> bool;
    }
}
