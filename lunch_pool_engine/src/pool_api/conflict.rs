//! Double-booking detection.
//!
//! An eater who has lines at two or more *different* eligible stores is paying for two lunches the moment both
//! pools close. Two lines at the same eligible store are fine. The detector re-runs on every refresh because
//! eligibility itself moves as lines are added and retracted; a store flipping eligible → ineligible can dissolve a
//! conflict without anybody touching the conflicted eater's lines.
use std::collections::{BTreeMap, BTreeSet};

use crate::{
    db_types::OrderLineDetail,
    pool_api::objects::{ConflictReport, ConflictedEater},
};

/// Finds every eater whose lines span at least two distinct eligible stores.
///
/// Output is deterministic for a given input: eaters sorted lexicographically, each eater's store set sorted, and
/// their offending lines in the order they appear in `lines`.
pub fn detect(lines: &[OrderLineDetail], eligible_stores: &BTreeSet<String>) -> ConflictReport {
    let mut stores_per_eater: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for line in lines.iter().filter(|l| eligible_stores.contains(&l.store_name)) {
        stores_per_eater.entry(&line.eater_name).or_default().insert(&line.store_name);
    }
    let conflicted = stores_per_eater
        .into_iter()
        .filter(|(_, stores)| stores.len() >= 2)
        .map(|(eater, stores)| ConflictedEater {
            eater_name: eater.to_string(),
            stores: stores.into_iter().map(String::from).collect(),
            lines: lines
                .iter()
                .filter(|l| l.eater_name == eater && eligible_stores.contains(&l.store_name))
                .cloned()
                .collect(),
        })
        .collect();
    ConflictReport { conflicted }
}
