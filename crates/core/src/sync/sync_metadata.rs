//! Last-sync bookkeeping shown in the settings screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When this device last completed a sync for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMetadata {
    pub user_id: String,
    pub device_id: String,
    pub last_synced: Option<DateTime<Utc>>,
}

/// Human-readable age of the last sync.
pub fn format_sync_info(last_synced: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last_synced) = last_synced else {
        return "Not synced yet".to_string();
    };

    // Minutes are rounded first; hours and days cascade from the rounded value.
    let minutes = ((now - last_synced).num_milliseconds() as f64 / 60_000.0).round() as i64;
    if minutes < 1 {
        return "Synced just now".to_string();
    }
    if minutes < 60 {
        return synced_ago(minutes, "minute");
    }

    let hours = (minutes as f64 / 60.0).round() as i64;
    if hours < 24 {
        return synced_ago(hours, "hour");
    }

    synced_ago((hours as f64 / 24.0).round() as i64, "day")
}

/// `format_sync_info` followed by the device that performed the sync.
///
/// A device that never completed a sync reads as plain "Not synced yet".
pub fn describe_device_sync(meta: &SyncMetadata, now: DateTime<Utc>) -> String {
    if meta.last_synced.is_none() {
        return format_sync_info(None, now);
    }
    let device = if meta.device_id.is_empty() {
        "unknown device"
    } else {
        meta.device_id.as_str()
    };
    format!("{} ({})", format_sync_info(meta.last_synced, now), device)
}

fn synced_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("Synced 1 {} ago", unit)
    } else {
        format!("Synced {} {}s ago", count, unit)
    }
}
