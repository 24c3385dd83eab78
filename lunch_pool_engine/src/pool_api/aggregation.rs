//! Per-store aggregation and minimum-order eligibility.
//!
//! The inputs are the raw total rows the store computed from the *current* order lines; nothing here is cached or
//! carried between calls. Running aggregation twice with no intervening mutation yields identical output.
use std::collections::BTreeSet;

use lpg_common::Won;

use crate::{
    db_types::{OrderLineDetail, StoreTotalRow},
    pool_api::objects::StoreAggregate,
};

/// A store may place the pooled order once its total meets its minimum.
pub fn eligible(total: Won, minimum: Won) -> bool {
    total >= minimum
}

/// Turns the aggregation rows into store aggregates, preserving the rows' order (total descending, name as the
/// tie-break).
pub fn build_aggregates(rows: Vec<StoreTotalRow>) -> Vec<StoreAggregate> {
    rows.into_iter()
        .map(|row| {
            let is_eligible = eligible(row.total, row.min_order_amount);
            let shortfall = if is_eligible { Won::from(0) } else { row.min_order_amount - row.total };
            StoreAggregate {
                store_name: row.store_name,
                total: row.total,
                min_order_amount: row.min_order_amount,
                eligible: is_eligible,
                shortfall,
            }
        })
        .collect()
}

/// The names of the currently eligible stores: the conflict detector's "success" set.
pub fn eligible_store_names(aggregates: &[StoreAggregate]) -> BTreeSet<String> {
    aggregates.iter().filter(|a| a.eligible).map(|a| a.store_name.clone()).collect()
}

/// Sum over every line in the pool, across all stores.
pub fn grand_total(lines: &[OrderLineDetail]) -> Won {
    lines.iter().map(|line| line.total).sum()
}
