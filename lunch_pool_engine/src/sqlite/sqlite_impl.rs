//! `SqliteDatabase` is a concrete implementation of a lunch pool engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module. Every method acquires a short-lived connection from the pool and performs a single independent
//! interaction: there is deliberately no transaction spanning a read-aggregate-then-act sequence, because the
//! system's visibility model is poll-driven (see the crate docs).
use std::fmt::Debug;

use chrono::Duration;
use sqlx::SqlitePool;

use super::db::{catalog, chat, db_url, new_pool, orders};
use crate::{
    db_types::{
        ChatMessage,
        MenuItem,
        NewChatMessage,
        NewMenuItem,
        NewOrderLine,
        NewStore,
        OrderLine,
        OrderLineDetail,
        Store,
        StoreCategory,
        StorePopularity,
        StoreSummary,
        StoreTotalRow,
    },
    traits::{CatalogError, CatalogManagement, ChatError, ChatManagement, OrderPoolDatabase, OrderPoolError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new connection pool using the database URL from the environment (`LPG_DATABASE_URL`), or the
    /// default if it is not set.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        Self::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl OrderPoolDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn insert_order_line(&self, line: NewOrderLine) -> Result<OrderLine, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::insert_order_line(line, &mut conn).await
    }

    async fn fetch_order_lines(&self) -> Result<Vec<OrderLineDetail>, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_lines(&mut conn).await
    }

    async fn fetch_store_totals(&self) -> Result<Vec<StoreTotalRow>, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_store_totals(&mut conn).await
    }

    async fn delete_order_line(&self, id: i64) -> Result<Option<OrderLine>, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::delete_order_line(id, &mut conn).await
    }

    async fn delete_order_lines(&self, ids: &[i64]) -> Result<u64, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::delete_order_lines(ids, &mut conn).await
    }

    async fn delete_order_line_by_match(&self, eater: &str, store: &str, menu: &str) -> Result<u64, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::delete_order_line_by_match(eater, store, menu, &mut conn).await
    }

    async fn clear_order_lines(&self) -> Result<u64, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::clear_order_lines(&mut conn).await
    }

    async fn fetch_popular_store_counts(&self) -> Result<Vec<StorePopularity>, OrderPoolError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_popular_store_counts(&mut conn).await
    }

    async fn close(&mut self) -> Result<(), OrderPoolError> {
        self.pool.close().await;
        Ok(())
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn fetch_categories(&self) -> Result<Vec<StoreCategory>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::fetch_categories(&mut conn).await
    }

    async fn fetch_stores_in_category(&self, category: StoreCategory) -> Result<Vec<StoreSummary>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::fetch_stores_in_category(category, &mut conn).await
    }

    async fn fetch_store_by_id(&self, store_id: i64) -> Result<Option<Store>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::fetch_store_by_id(store_id, &mut conn).await
    }

    async fn fetch_store_by_name(&self, name: &str) -> Result<Option<Store>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::fetch_store_by_name(name, &mut conn).await
    }

    async fn fetch_menus_for_store(&self, store_id: i64) -> Result<Vec<MenuItem>, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::fetch_menus_for_store(store_id, &mut conn).await
    }

    async fn insert_store(&self, store: NewStore) -> Result<Store, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::insert_store(store, &mut conn).await
    }

    async fn insert_menu(&self, menu: NewMenuItem) -> Result<MenuItem, CatalogError> {
        let mut conn = self.pool.acquire().await?;
        catalog::insert_menu(menu, &mut conn).await
    }
}

impl ChatManagement for SqliteDatabase {
    async fn fetch_recent_messages(&self, window: Duration) -> Result<Vec<ChatMessage>, ChatError> {
        let mut conn = self.pool.acquire().await?;
        chat::fetch_recent_messages(window, &mut conn).await
    }

    async fn insert_chat_message(&self, message: NewChatMessage) -> Result<ChatMessage, ChatError> {
        let mut conn = self.pool.acquire().await?;
        chat::insert_chat_message(message, &mut conn).await
    }
}
