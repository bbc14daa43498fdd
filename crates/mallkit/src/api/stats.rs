use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::remote_service;

remote_service! {
    /// Live-streaming statistics (`live/stats`).
    pub struct Stats as stats ("live/stats") {
        /// Records praise events; `data` carries `liveId` and `praise`.
        addStatsPraise => fn add_stats_praise / add_stats_praise_async(data: &Value) -> bool;

        /// Per-stream counters for a batch of live stream ids.
        getStatsByLiveIds => fn get_stats_by_live_ids / get_stats_by_live_ids_async(
            live_ids: &[i64],
        ) -> Vec<LiveStats>;
    }
}

/// Counters of one live stream. The remote reports every counter as a
/// string, so the record mirrors that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiveStats {
    pub live_id: String,
    /// Viewers counted through chat-room entries.
    pub view: String,
    pub praise: String,
    /// Follows gained during the stream window.
    pub follow: String,
}
