use log::{debug, warn};
use sqlx::SqliteConnection;

use crate::{
    db_types::{MenuItem, NewMenuItem, NewStore, Store, StoreCategory, StoreSummary},
    traits::CatalogError,
};

/// The distinct categories with at least one registered store, sorted. Category values that no longer parse
/// (e.g. written by a newer schema) are skipped with a warning rather than failing the read.
pub async fn fetch_categories(conn: &mut SqliteConnection) -> Result<Vec<StoreCategory>, CatalogError> {
    let rows: Vec<String> =
        sqlx::query_scalar("SELECT DISTINCT category FROM stores ORDER BY category").fetch_all(conn).await?;
    let categories = rows
        .into_iter()
        .filter_map(|raw| match raw.parse::<StoreCategory>() {
            Ok(cat) => Some(cat),
            Err(e) => {
                warn!("🏪️ Skipping unknown category in stores table: {e}");
                None
            },
        })
        .collect();
    Ok(categories)
}

pub async fn fetch_stores_in_category(
    category: StoreCategory,
    conn: &mut SqliteConnection,
) -> Result<Vec<StoreSummary>, CatalogError> {
    let stores =
        sqlx::query_as("SELECT id, name, min_order_amount FROM stores WHERE category = $1 ORDER BY name ASC")
            .bind(category)
            .fetch_all(conn)
            .await?;
    Ok(stores)
}

pub async fn fetch_store_by_id(store_id: i64, conn: &mut SqliteConnection) -> Result<Option<Store>, CatalogError> {
    let store = sqlx::query_as("SELECT * FROM stores WHERE id = $1").bind(store_id).fetch_optional(conn).await?;
    Ok(store)
}

pub async fn fetch_store_by_name(name: &str, conn: &mut SqliteConnection) -> Result<Option<Store>, CatalogError> {
    let store = sqlx::query_as("SELECT * FROM stores WHERE name = $1").bind(name).fetch_optional(conn).await?;
    Ok(store)
}

pub async fn fetch_menus_for_store(
    store_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<MenuItem>, CatalogError> {
    let menus = sqlx::query_as("SELECT id, store_id, menu_name, price FROM menus WHERE store_id = $1 ORDER BY id ASC")
        .bind(store_id)
        .fetch_all(conn)
        .await?;
    Ok(menus)
}

/// Inserts a new store, mapping the UNIQUE(name) violation onto [`CatalogError::DuplicateStoreName`].
pub async fn insert_store(store: NewStore, conn: &mut SqliteConnection) -> Result<Store, CatalogError> {
    let name = store.name.clone();
    let result: Result<Store, sqlx::Error> = sqlx::query_as(
        r#"
            INSERT INTO stores (
                name,
                category,
                rating,
                min_order_amount,
                working_days,
                open_time,
                close_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *;
        "#,
    )
    .bind(store.name)
    .bind(store.category)
    .bind(store.rating)
    .bind(store.min_order_amount)
    .bind(store.working_days)
    .bind(store.open_time)
    .bind(store.close_time)
    .fetch_one(conn)
    .await;
    match result {
        Ok(store) => {
            debug!("🏪️ Store '{}' registered with id {}", store.name, store.id);
            Ok(store)
        },
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(CatalogError::DuplicateStoreName(name)),
        Err(e) => Err(e.into()),
    }
}

pub async fn insert_menu(menu: NewMenuItem, conn: &mut SqliteConnection) -> Result<MenuItem, CatalogError> {
    let item: MenuItem = sqlx::query_as(
        "INSERT INTO menus (store_id, menu_name, price) VALUES ($1, $2, $3) RETURNING id, store_id, menu_name, price",
    )
    .bind(menu.store_id)
    .bind(menu.name)
    .bind(menu.price)
    .fetch_one(conn)
    .await?;
    debug!("🏪️ Menu item '{}' registered for store #{}", item.name, item.store_id);
    Ok(item)
}
