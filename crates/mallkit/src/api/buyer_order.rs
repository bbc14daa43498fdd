use serde_json::Value;

use super::remote_service;

remote_service! {
    /// Buyer-side applet order operations (`order/buyerOrder`).
    ///
    /// This service resolves the acting buyer ambiently on the dispatcher
    /// side, so no identity argument is forwarded.
    pub struct BuyerOrder as buyer_order ("order/buyerOrder") {
        /// Pages the buyer's applet orders; `tab` selects the status filter.
        listAppletOrder => fn list_applet_order / list_applet_order_async(
            tab: i64,
            page: i64,
            limit: i64,
        ) -> Value;

        /// Per-status order counters for the buyer's "mine" page.
        myAppletOrderStats => fn my_applet_order_stats / my_applet_order_stats_async() -> Value;

        /// Detail view of one applet order.
        appletOrderDetail => fn applet_order_detail / applet_order_detail_async(
            order_id: i64,
        ) -> Value;

        /// Confirms receipt of an order on behalf of `uid`.
        confirmReceivedOrder => fn confirm_received_order / confirm_received_order_async(
            order_id: i64,
            uid: i64,
        ) -> bool;
    }
}
