use log::{debug, trace};
use sqlx::{QueryBuilder, SqliteConnection};

use crate::{
    db_types::{NewOrderLine, OrderLine, OrderLineDetail, StorePopularity, StoreTotalRow},
    traits::OrderPoolError,
};

/// Appends a new order line to the pool using the given connection.
pub async fn insert_order_line(
    line: NewOrderLine,
    conn: &mut SqliteConnection,
) -> Result<OrderLine, OrderPoolError> {
    let line: OrderLine = sqlx::query_as(
        r#"
            INSERT INTO orders (
                eater_name,
                store_id,
                menu_id,
                price,
                quantity
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING *;
        "#,
    )
    .bind(line.eater_name)
    .bind(line.store_id)
    .bind(line.menu_id)
    .bind(line.price)
    .bind(line.quantity)
    .fetch_one(conn)
    .await?;
    debug!("🍱️ Order line [{}] saved for {} at store #{}", line.id, line.eater_name, line.store_id);
    Ok(line)
}

/// Returns every current line joined with its store and menu names, newest lines first.
///
/// The inner joins silently drop lines whose store or menu no longer exists. The `id DESC` tie-break keeps the
/// ordering stable when several lines share a creation timestamp.
pub async fn fetch_order_lines(conn: &mut SqliteConnection) -> Result<Vec<OrderLineDetail>, OrderPoolError> {
    let lines = sqlx::query_as(
        r#"
        SELECT
            o.id,
            o.eater_name,
            s.name AS store_name,
            m.menu_name,
            o.price,
            o.quantity,
            (o.price * o.quantity) AS total,
            o.created_at
        FROM orders o
        JOIN stores s ON o.store_id = s.id
        JOIN menus m ON o.menu_id = m.id
        ORDER BY o.created_at DESC, o.id DESC
    "#,
    )
    .fetch_all(conn)
    .await?;
    trace!("🍱️ fetch_order_lines returned {} rows", lines.len());
    Ok(lines)
}

/// Per-store pooled totals. Recomputed from the full line set on every call, never cached, because lines can be
/// added or retracted by another session between any two reads.
pub async fn fetch_store_totals(conn: &mut SqliteConnection) -> Result<Vec<StoreTotalRow>, OrderPoolError> {
    let totals = sqlx::query_as(
        r#"
        SELECT
            s.name AS store_name,
            SUM(o.price * o.quantity) AS total,
            s.min_order_amount
        FROM orders o
        JOIN stores s ON o.store_id = s.id
        GROUP BY s.id, s.name, s.min_order_amount
        ORDER BY total DESC, s.name ASC
    "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(totals)
}

/// Deletes the line with the given id, returning the removed row if it existed.
pub async fn delete_order_line(id: i64, conn: &mut SqliteConnection) -> Result<Option<OrderLine>, OrderPoolError> {
    let removed = sqlx::query_as("DELETE FROM orders WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(removed)
}

/// Deletes every line whose id is in `ids`. Returns the number of rows removed.
pub async fn delete_order_lines(ids: &[i64], conn: &mut SqliteConnection) -> Result<u64, OrderPoolError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let mut builder = QueryBuilder::new("DELETE FROM orders WHERE id IN (");
    let mut id_list = builder.separated(", ");
    for id in ids {
        id_list.push_bind(*id);
    }
    builder.push(")");
    trace!("🍱️ Executing query: {}", builder.sql());
    let result = builder.build().execute(conn).await?;
    Ok(result.rows_affected())
}

/// Deletes at most one line matching the exact (eater, store name, menu name) tuple.
///
/// SQLite builds don't universally enable `DELETE … LIMIT`, so the single-row cap goes through an id subselect.
/// Which of several identical rows is removed is unspecified.
pub async fn delete_order_line_by_match(
    eater: &str,
    store: &str,
    menu: &str,
    conn: &mut SqliteConnection,
) -> Result<u64, OrderPoolError> {
    let result = sqlx::query(
        r#"
        DELETE FROM orders WHERE id IN (
            SELECT o.id
            FROM orders o
            JOIN stores s ON o.store_id = s.id
            JOIN menus m ON o.menu_id = m.id
            WHERE o.eater_name = $1 AND s.name = $2 AND m.menu_name = $3
            LIMIT 1
        )
    "#,
    )
    .bind(eater)
    .bind(store)
    .bind(menu)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Empties the pool in a single statement. Concurrent readers either see the old pool or the empty one.
pub async fn clear_order_lines(conn: &mut SqliteConnection) -> Result<u64, OrderPoolError> {
    let result = sqlx::query("DELETE FROM orders").execute(conn).await?;
    debug!("🍱️ Order pool cleared. {} lines removed", result.rows_affected());
    Ok(result.rows_affected())
}

/// Order-count ranking per store, most orders first.
pub async fn fetch_popular_store_counts(
    conn: &mut SqliteConnection,
) -> Result<Vec<StorePopularity>, OrderPoolError> {
    let counts = sqlx::query_as(
        r#"
        SELECT s.name AS store_name, COUNT(*) AS order_count
        FROM orders o
        JOIN stores s ON o.store_id = s.id
        GROUP BY s.id, s.name
        ORDER BY order_count DESC, s.name ASC
    "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(counts)
}
