use lpg_common::Won;
use serde::{Deserialize, Serialize};

use crate::db_types::OrderLineDetail;

//--------------------------------------  StoreAggregate  ------------------------------------------------------------
/// A store's derived standing in the current pool. Never persisted; rebuilt from the order rows on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAggregate {
    pub store_name: String,
    /// Sum of `price × quantity` over exactly this store's current lines.
    pub total: Won,
    pub min_order_amount: Won,
    /// `total >= min_order_amount`.
    pub eligible: bool,
    /// How much is still missing when ineligible; zero otherwise.
    pub shortfall: Won,
}

//--------------------------------------   PoolStatus     ------------------------------------------------------------
/// One full snapshot of the shared pool: every line, every store aggregate, the grand total and the current
/// conflict report. A snapshot is only guaranteed to be internally consistent at the moment it was read; any other
/// session may have mutated the pool since.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatus {
    pub lines: Vec<OrderLineDetail>,
    pub aggregates: Vec<StoreAggregate>,
    pub grand_total: Won,
    pub conflicts: ConflictReport,
}

//-------------------------------------- ConflictedEater  ------------------------------------------------------------
/// One double-booked participant: present in the order sets of two or more simultaneously eligible stores, together
/// with every offending line (for display and deletion targeting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictedEater {
    pub eater_name: String,
    /// The eligible stores this eater has lines at, sorted. Always two or more entries.
    pub stores: Vec<String>,
    pub lines: Vec<OrderLineDetail>,
}

//-------------------------------------- ConflictReport   ------------------------------------------------------------
/// The conflict detector's output. Eaters are sorted lexicographically so that repeated runs over the same pool
/// produce identical reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicted: Vec<ConflictedEater>,
}

impl ConflictReport {
    /// True when nobody is double-booked. This is the state the resolution workflow drives toward before the session can
    /// close.
    pub fn is_clear(&self) -> bool {
        self.conflicted.is_empty()
    }

    pub fn eater_names(&self) -> Vec<&str> {
        self.conflicted.iter().map(|c| c.eater_name.as_str()).collect()
    }
}

//-------------------------------------- RouletteOutcome  ------------------------------------------------------------
/// The result of one roulette spin. Each spin is an independent uniform draw; there is no fairness memory across
/// rounds and a repeat winner is possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteOutcome {
    pub store_name: String,
    pub winner: String,
    /// The distinct participants the draw was made from, in first-order order.
    pub candidates: Vec<String>,
    /// The message that was posted to chat on the winner's behalf.
    pub announcement: String,
}
