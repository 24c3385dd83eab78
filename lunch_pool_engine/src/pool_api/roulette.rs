//! Pickup-duty selection.
//!
//! Every distinct participant at the target store gets exactly one slot in the draw; ordering the same item three
//! times buys lunch, not immunity. The draw is a single uniform sample with no memory: spinning again over the same
//! pool can pick the same person.
use rand::Rng;

use crate::db_types::OrderLineDetail;

/// The distinct eaters with at least one line at `store_name`, in the order they first appear in `lines`.
pub fn candidate_pool(lines: &[OrderLineDetail], store_name: &str) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for line in lines.iter().filter(|l| l.store_name == store_name) {
        if !pool.iter().any(|name| name == &line.eater_name) {
            pool.push(line.eater_name.clone());
        }
    }
    pool
}

/// One uniform draw from the pool. `None` when the pool is empty.
pub fn draw<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool[index].as_str())
}
