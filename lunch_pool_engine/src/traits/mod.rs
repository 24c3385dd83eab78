//! Database backend contracts.
//!
//! This module provides the interfaces that define the contracts of the engine database *backends*.
//!
//! * [`OrderPoolDatabase`] owns the shared order pool: inserting lines, the aggregate/conflict source reads, and the
//!   retraction and clear operations.
//! * [`CatalogManagement`] provides the store/menu catalog: browsing by category and registration.
//! * [`ChatManagement`] provides the shared chat: windowed reads and appends.
//!
//! Backends must keep every method a short-lived, independent interaction with the store. The engine's visibility
//! model is poll-driven and eventually consistent; a backend that adds its own locking or caching changes
//! user-visible timing and breaks that contract.
mod catalog_management;
mod chat_management;
mod order_pool_database;

pub use catalog_management::{CatalogError, CatalogManagement};
pub use chat_management::{ChatError, ChatManagement};
pub use order_pool_database::{OrderPoolDatabase, OrderPoolError};
