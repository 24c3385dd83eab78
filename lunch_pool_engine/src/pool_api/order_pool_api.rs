use std::fmt::Debug;

use log::*;
use lpg_common::Won;

use crate::{
    db_types::{NewOrderLine, OrderLine, StorePopularity},
    events::{EventProducers, OrderAddedEvent, PoolClearedEvent},
    pool_api::{
        aggregation,
        conflict,
        objects::{ConflictReport, PoolStatus},
    },
    traits::{OrderPoolDatabase, OrderPoolError},
};

/// `OrderPoolApi` is the primary API for the shared order pool: adding lines, reading the aggregated status, and
/// driving the conflict-resolution workflow through single-line retractions.
///
/// Every read recomputes totals, eligibility and conflicts from the rows as they are *right now*. The API holds no
/// snapshot between calls; two sessions acting on the same observation can race, and the next read is where they
/// converge.
pub struct OrderPoolApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for OrderPoolApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderPoolApi")
    }
}

impl<B> OrderPoolApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }

    pub fn db(&self) -> &B {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut B {
        &mut self.db
    }
}

impl<B> OrderPoolApi<B>
where B: OrderPoolDatabase
{
    /// Adds a new line to the pool.
    ///
    /// Validation failures leave the pool untouched. A store or menu reference that doesn't resolve is *not* an
    /// error here: the line is stored and simply never appears in the joined views.
    pub async fn add_order(&self, line: NewOrderLine) -> Result<OrderLine, OrderPoolError> {
        validate_new_line(&line)?;
        let stored = self.db.insert_order_line(line).await?;
        debug!("🔄️🍱️ Line [{}] added: menu #{} x{} for {}", stored.id, stored.menu_id, stored.quantity, stored.eater_name);
        for producer in &self.producers.order_added_producer {
            producer.publish_event(OrderAddedEvent::new(stored.clone())).await;
        }
        Ok(stored)
    }

    /// One full pool snapshot: lines, per-store aggregates, the grand total and the conflict report, all derived
    /// from a fresh read.
    pub async fn pool_status(&self) -> Result<PoolStatus, OrderPoolError> {
        let lines = self.db.fetch_order_lines().await?;
        let aggregates = aggregation::build_aggregates(self.db.fetch_store_totals().await?);
        let eligible = aggregation::eligible_store_names(&aggregates);
        let conflicts = conflict::detect(&lines, &eligible);
        let grand_total = aggregation::grand_total(&lines);
        trace!(
            "🔄️🍱️ Pool status: {} lines, {} stores, {} eligible, {} conflicted eaters",
            lines.len(),
            aggregates.len(),
            eligible.len(),
            conflicts.conflicted.len()
        );
        Ok(PoolStatus { lines, aggregates, grand_total, conflicts })
    }

    /// Just the conflict report. Equivalent to `pool_status().conflicts` but skips assembling the rest.
    pub async fn conflicts(&self) -> Result<ConflictReport, OrderPoolError> {
        let lines = self.db.fetch_order_lines().await?;
        let aggregates = aggregation::build_aggregates(self.db.fetch_store_totals().await?);
        let eligible = aggregation::eligible_store_names(&aggregates);
        Ok(conflict::detect(&lines, &eligible))
    }

    /// Retracts exactly one line by id: the conflict-resolution workflow's single atomic step. Callers re-read
    /// pool status afterwards; this method does not return the recomputed state.
    pub async fn retract_line(&self, id: i64) -> Result<OrderLine, OrderPoolError> {
        let removed = self.db.delete_order_line(id).await?.ok_or(OrderPoolError::LineNotFound(id))?;
        debug!("🔄️🍱️ Line [{}] retracted ({} gives up {})", removed.id, removed.eater_name, removed.total());
        Ok(removed)
    }

    /// Retracts every line in `ids`. Ids that no longer exist are skipped, not errors: another session may have
    /// got there first, and everyone converges on the next read either way.
    pub async fn retract_lines(&self, ids: &[i64]) -> Result<u64, OrderPoolError> {
        let removed = self.db.delete_order_lines(ids).await?;
        debug!("🔄️🍱️ {removed} of {} selected lines retracted", ids.len());
        Ok(removed)
    }

    /// The tuple fallback for callers without a line id: removes at most one line matching (eater, store, menu)
    /// exactly. Errors if nothing matched.
    pub async fn retract_line_by_match(&self, eater: &str, store: &str, menu: &str) -> Result<(), OrderPoolError> {
        let removed = self.db.delete_order_line_by_match(eater, store, menu).await?;
        if removed == 0 {
            return Err(OrderPoolError::NoMatchingLine(eater.to_string(), store.to_string(), menu.to_string()));
        }
        debug!("🔄️🍱️ {eater} gave up their {menu} order at {store}");
        Ok(())
    }

    /// Unconditionally empties the pool, starting a new session. Irreversible.
    pub async fn clear_pool(&self) -> Result<u64, OrderPoolError> {
        let removed = self.db.clear_order_lines().await?;
        info!("🔄️🍱️ Pool cleared: {removed} lines removed. New session open.");
        for producer in &self.producers.pool_cleared_producer {
            producer.publish_event(PoolClearedEvent { lines_removed: removed }).await;
        }
        Ok(removed)
    }

    /// Order-count ranking per store.
    pub async fn popularity(&self) -> Result<Vec<StorePopularity>, OrderPoolError> {
        self.db.fetch_popular_store_counts().await
    }
}

fn validate_new_line(line: &NewOrderLine) -> Result<(), OrderPoolError> {
    if line.eater_name.trim().is_empty() {
        return Err(OrderPoolError::InvalidOrder("The eater name is required".to_string()));
    }
    if line.quantity < 1 {
        return Err(OrderPoolError::InvalidOrder(format!("Quantity must be at least 1, not {}", line.quantity)));
    }
    if line.price < Won::from(0) {
        return Err(OrderPoolError::InvalidOrder(format!("The unit price cannot be negative ({})", line.price)));
    }
    Ok(())
}
