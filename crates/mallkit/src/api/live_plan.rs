use super::remote_service;

remote_service! {
    /// Live-streaming plan administration (`live/livePlan`).
    pub struct LivePlan as live_plan ("live/livePlan") {
        /// Sets the lifecycle status of a plan.
        setStatus => fn set_status / set_status_async(plan_id: i64, status: i64) -> bool;

        /// Updates the payment flag and room size of a plan.
        updatePlan => fn update_plan / update_plan_async(
            plan_id: i64,
            is_pay: i64,
            room_size: i64,
        ) -> bool;
    }
}
