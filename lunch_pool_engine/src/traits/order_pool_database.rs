use thiserror::Error;

use crate::db_types::{NewOrderLine, OrderLine, OrderLineDetail, StorePopularity, StoreTotalRow};

/// The order-pool backend contract.
///
/// The pool is the system's single shared mutable aggregate. Reads return ground truth at the moment of the query
/// and nothing else; there is no snapshot isolation between two reads, and callers must not assume a line observed
/// by one call still exists by the next. All aggregate views (`fetch_store_totals`, `fetch_order_lines`) are
/// recomputed by the store on every invocation.
#[allow(async_fn_in_trait)]
pub trait OrderPoolDatabase {
    /// The URL of the database.
    fn url(&self) -> &str;

    /// Appends a new line to the pool and returns the stored row.
    ///
    /// The backend does not validate the referenced store or menu: a dangling reference simply never shows up in
    /// the joined reads. Field validation (non-empty eater, positive quantity) happens in the API layer before this
    /// is called.
    async fn insert_order_line(&self, line: NewOrderLine) -> Result<OrderLine, OrderPoolError>;

    /// All current lines joined with store and menu names, newest first. Lines with orphaned store or menu
    /// references are excluded rather than reported.
    async fn fetch_order_lines(&self) -> Result<Vec<OrderLineDetail>, OrderPoolError>;

    /// Per-store pooled totals with each store's minimum-order threshold, largest total first (ties broken by store
    /// name). Only stores referenced by at least one live line appear.
    async fn fetch_store_totals(&self) -> Result<Vec<StoreTotalRow>, OrderPoolError>;

    /// Deletes exactly the line with the given id. Returns the removed row, or `None` if no such line existed.
    async fn delete_order_line(&self, id: i64) -> Result<Option<OrderLine>, OrderPoolError>;

    /// Deletes every line whose id is in `ids`. Returns the number of rows removed.
    async fn delete_order_lines(&self, ids: &[i64]) -> Result<u64, OrderPoolError>;

    /// Fallback retraction for callers that don't hold a line id: deletes **at most one** line matching the exact
    /// (eater, store name, menu name) tuple. When the same eater ordered the same item twice at the same store,
    /// which duplicate goes is unspecified.
    async fn delete_order_line_by_match(&self, eater: &str, store: &str, menu: &str) -> Result<u64, OrderPoolError>;

    /// Unconditionally empties the pool, starting a fresh session. Returns the number of lines removed.
    async fn clear_order_lines(&self) -> Result<u64, OrderPoolError>;

    /// Order-count ranking per store, most orders first.
    async fn fetch_popular_store_counts(&self) -> Result<Vec<StorePopularity>, OrderPoolError>;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), OrderPoolError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error)]
pub enum OrderPoolError {
    #[error("We have an internal database engine error: {0}")]
    DatabaseError(String),
    #[error("The requested order line (id {0}) does not exist")]
    LineNotFound(i64),
    #[error("No order line matches ({0}, {1}, {2})")]
    NoMatchingLine(String, String, String),
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl From<sqlx::Error> for OrderPoolError {
    fn from(e: sqlx::Error) -> Self {
        OrderPoolError::DatabaseError(e.to_string())
    }
}
