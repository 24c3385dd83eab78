//! Lunch Pool Engine
//!
//! The Lunch Pool Engine is the core of a shared lunch-ordering coordination service. A group of colleagues pools
//! individual orders into one shared pot; the engine aggregates those line items into per-store totals, works out
//! which stores have cleared their minimum-order threshold, flags anyone who has committed to more than one
//! "successful" store at the same time, and runs the pickup-duty roulette.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the supported backend. You should never need to
//!    access the database directly. Instead, use the public API provided by the engine. The exception is the data
//!    types used in the database. These are defined in the `db_types` module and are public.
//! 2. The engine public API ([`mod@pool_api`]). This provides the public-facing functionality of the engine: the
//!    order pool, the store/menu catalog, the shared chat, and the roulette. Specific backends need to implement the
//!    traits in the [`mod@traits`] module in order to act as a backend for the Lunch Pool Server.
//!
//! The engine deliberately holds no state between calls. Every read recomputes totals, eligibility and conflicts
//! from the current order rows, because any other session may add or retract lines between two reads. That re-read
//! discipline *is* the concurrency model (polling clients converge on the next tick); backends must not cache
//! aggregates or wrap multi-call sequences in long-lived transactions.
//!
//! The engine also provides a set of events that can be subscribed to. These events are emitted when certain actions
//! occur within the engine, for example when the roulette has picked a winner. A simple handler framework is used so
//! that you can hook into these events and perform custom actions.
pub mod db_types;
pub mod events;
pub mod helpers;
mod pool_api;
mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

pub use pool_api::{
    aggregation,
    conflict,
    objects,
    roulette,
    CatalogApi,
    ChatApi,
    OrderPoolApi,
    RouletteApi,
    RouletteError,
};
pub use traits::{CatalogError, CatalogManagement, ChatError, ChatManagement, OrderPoolDatabase, OrderPoolError};
