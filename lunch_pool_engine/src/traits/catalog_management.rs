use thiserror::Error;

use crate::db_types::{MenuItem, NewMenuItem, NewStore, Store, StoreCategory, StoreSummary};

/// The store/menu catalog backend contract.
///
/// The catalog is a read-mostly collaborator of the order pool: stores and menus are registered once and are
/// read-only inputs to the core thereafter.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// The distinct categories that currently have at least one registered store, sorted.
    async fn fetch_categories(&self) -> Result<Vec<StoreCategory>, CatalogError>;

    /// Stores registered under the given category, sorted by name.
    async fn fetch_stores_in_category(&self, category: StoreCategory) -> Result<Vec<StoreSummary>, CatalogError>;

    async fn fetch_store_by_id(&self, store_id: i64) -> Result<Option<Store>, CatalogError>;

    async fn fetch_store_by_name(&self, name: &str) -> Result<Option<Store>, CatalogError>;

    /// The menu of the given store, in registration order.
    async fn fetch_menus_for_store(&self, store_id: i64) -> Result<Vec<MenuItem>, CatalogError>;

    /// Registers a new store. Store names are unique; re-using one is an error.
    async fn insert_store(&self, store: NewStore) -> Result<Store, CatalogError>;

    /// Registers a new menu item for an existing store.
    async fn insert_menu(&self, menu: NewMenuItem) -> Result<MenuItem, CatalogError>;
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("We have an internal database engine error: {0}")]
    DatabaseError(String),
    #[error("A store named '{0}' is already registered")]
    DuplicateStoreName(String),
    #[error("The requested store (id {0}) does not exist")]
    StoreNotFound(i64),
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        CatalogError::DatabaseError(e.to_string())
    }
}
