use std::collections::BTreeSet;

use chrono::Duration;
use log::*;
use lunch_pool_engine::{events::EventProducers, OrderPoolApi, SqliteDatabase};
use tokio::task::JoinHandle;

/// Starts the live-refresh worker. Do not await the returned JoinHandle, as it will run indefinitely.
///
/// Every tick performs one full idempotent read of the pool (the same read the `/api/status` handler does) and
/// logs eligibility flips and conflict-set changes since the previous tick. The previous-tick
/// state exists only for logging; nothing here is a cache, and no HTTP read is ever served from it.
pub fn start_refresh_worker(db: SqliteDatabase, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = std::time::Duration::from_secs(interval.num_seconds().max(1) as u64);
        let mut timer = tokio::time::interval(period);
        let api = OrderPoolApi::new(db, EventProducers::default());
        info!("🕰️ Live-refresh worker started ({}s cadence)", period.as_secs());
        let mut last_eligible: BTreeSet<String> = BTreeSet::new();
        let mut last_conflicted: Vec<String> = Vec::new();
        loop {
            timer.tick().await;
            match api.pool_status().await {
                Ok(status) => {
                    let eligible: BTreeSet<String> =
                        status.aggregates.iter().filter(|a| a.eligible).map(|a| a.store_name.clone()).collect();
                    for name in eligible.difference(&last_eligible) {
                        info!("🕰️ '{name}' has reached its minimum order amount");
                    }
                    for name in last_eligible.difference(&eligible) {
                        info!("🕰️ '{name}' has dropped back below its minimum order amount");
                    }
                    let conflicted: Vec<String> =
                        status.conflicts.eater_names().into_iter().map(String::from).collect();
                    if conflicted != last_conflicted {
                        if conflicted.is_empty() {
                            info!("🕰️ All double-bookings resolved");
                        } else {
                            warn!("🕰️ Double-booked in eligible stores: {}", conflicted.join(", "));
                        }
                    }
                    trace!(
                        "🕰️ Tick: {} lines, {} eligible stores, grand total {}",
                        status.lines.len(),
                        eligible.len(),
                        status.grand_total
                    );
                    last_eligible = eligible;
                    last_conflicted = conflicted;
                },
                Err(e) => {
                    error!("🕰️ Error refreshing pool status: {e}");
                },
            }
        }
    })
}
