use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::Utc;
use lpg_common::Won;
use lunch_pool_engine::{
    db_types::{OrderLine, OrderLineDetail, StoreTotalRow},
    events::EventProducers,
    OrderPoolApi,
};
use serde_json::{json, Value};

use super::{
    helpers::{delete_request, get_request, post_request},
    mocks::MockOrderPool,
};
use crate::{
    data_objects::NewOrderRequest,
    routes::{AddOrderRoute, ClearOrdersRoute, DeleteOrderRoute, PoolStatusRoute},
};

fn detail(id: i64, eater: &str, store: &str, price: i64) -> OrderLineDetail {
    OrderLineDetail {
        id,
        eater_name: eater.to_string(),
        store_name: store.to_string(),
        menu_name: "Lunch set".to_string(),
        price: Won::from(price),
        quantity: 1,
        total: Won::from(price),
        created_at: Utc::now(),
    }
}

fn total_row(store: &str, total: i64, minimum: i64) -> StoreTotalRow {
    StoreTotalRow { store_name: store.to_string(), total: Won::from(total), min_order_amount: Won::from(minimum) }
}

#[actix_web::test]
async fn empty_pool_status() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/status", configure_empty_pool).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["lines"], json!([]));
    assert_eq!(value["aggregates"], json!([]));
    assert_eq!(value["grand_total"], json!(0));
    assert_eq!(value["conflicts"]["conflicted"], json!([]));
}

fn configure_empty_pool(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_fetch_order_lines().returning(|| Ok(vec![]));
    mock.expect_fetch_store_totals().returning(|| Ok(vec![]));
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(PoolStatusRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn status_reports_eligibility_and_conflicts() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/status", configure_conflicted_pool).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["aggregates"][0]["eligible"], json!(true));
    assert_eq!(value["aggregates"][1]["eligible"], json!(true));
    assert_eq!(value["grand_total"], json!(26_000));
    let conflicted = value["conflicts"]["conflicted"].as_array().unwrap();
    assert_eq!(conflicted.len(), 1);
    assert_eq!(conflicted[0]["eater_name"], json!("Kim"));
    assert_eq!(conflicted[0]["stores"], json!(["Chicken Town", "Cutlet Corner"]));
}

fn configure_conflicted_pool(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_fetch_order_lines().returning(|| {
        Ok(vec![
            detail(3, "Kim", "Cutlet Corner", 9_000),
            detail(2, "Lee", "Chicken Town", 11_000),
            detail(1, "Kim", "Chicken Town", 6_000),
        ])
    });
    mock.expect_fetch_store_totals().returning(|| {
        Ok(vec![total_row("Chicken Town", 17_000, 10_000), total_row("Cutlet Corner", 9_000, 8_000)])
    });
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(PoolStatusRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn add_order_stores_the_line() {
    let _ = env_logger::try_init().ok();
    let request = NewOrderRequest {
        eater_name: "Kim".to_string(),
        store_id: 1,
        menu_id: 2,
        price: Won::from(6_000),
        quantity: 1,
    };
    let (status, body) = post_request("/orders", &request, configure_add_order).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["id"], json!(7));
    assert_eq!(value["eater_name"], json!("Kim"));
}

fn configure_add_order(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_insert_order_line().withf(|line| line.eater_name == "Kim" && line.quantity == 1).returning(|line| {
        Ok(OrderLine {
            id: 7,
            eater_name: line.eater_name,
            store_id: line.store_id,
            menu_id: line.menu_id,
            price: line.price,
            quantity: line.quantity,
            created_at: Utc::now(),
        })
    });
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(AddOrderRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn add_order_with_blank_eater_never_reaches_the_store() {
    let _ = env_logger::try_init().ok();
    let request =
        NewOrderRequest { eater_name: "  ".to_string(), store_id: 1, menu_id: 2, price: Won::from(6_000), quantity: 1 };
    // No insert expectation is configured: reaching the backend would panic the mock
    let err = post_request("/orders", &request, configure_add_order_rejection).await.expect_err("Expected error");
    assert_eq!(err, "Invalid request: The eater name is required");
}

#[actix_web::test]
async fn add_order_with_zero_quantity_never_reaches_the_store() {
    let _ = env_logger::try_init().ok();
    let request =
        NewOrderRequest { eater_name: "Kim".to_string(), store_id: 1, menu_id: 2, price: Won::from(6_000), quantity: 0 };
    let err = post_request("/orders", &request, configure_add_order_rejection).await.expect_err("Expected error");
    assert_eq!(err, "Invalid request: Quantity must be at least 1, not 0");
}

fn configure_add_order_rejection(cfg: &mut ServiceConfig) {
    let mock = MockOrderPool::new();
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(AddOrderRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn delete_order_returns_the_removed_line() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/orders/42", configure_delete_order).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["id"], json!(42));
}

fn configure_delete_order(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_delete_order_line().withf(|id| *id == 42).returning(|id| {
        Ok(Some(OrderLine {
            id,
            eater_name: "Kim".to_string(),
            store_id: 1,
            menu_id: 2,
            price: Won::from(6_000),
            quantity: 1,
            created_at: Utc::now(),
        }))
    });
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(DeleteOrderRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn delete_missing_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let err = delete_request("/orders/42", configure_delete_missing).await.expect_err("Expected error");
    assert_eq!(err, "The data was not found. The requested order line (id 42) does not exist");
}

fn configure_delete_missing(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_delete_order_line().returning(|_| Ok(None));
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(DeleteOrderRoute::<MockOrderPool>::new());
}

#[actix_web::test]
async fn clear_orders_reports_the_count() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/orders/clear", &json!({}), configure_clear).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["message"], json!("Pool cleared. 3 order lines removed"));
}

fn configure_clear(cfg: &mut ServiceConfig) {
    let mut mock = MockOrderPool::new();
    mock.expect_clear_order_lines().returning(|| Ok(3));
    let api = OrderPoolApi::new(mock, EventProducers::default());
    cfg.app_data(web::Data::new(api)).service(ClearOrdersRoute::<MockOrderPool>::new());
}
