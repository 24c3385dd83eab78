use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::NaiveTime;
use lpg_common::Won;
use lunch_pool_engine::{
    db_types::{MenuItem, NewStore, Store, StoreCategory, StoreSummary, WorkingDays},
    CatalogApi,
    CatalogError,
};
use serde_json::{json, Value};

use super::{
    helpers::{get_request, post_request},
    mocks::MockCatalog,
};
use crate::routes::{CategoriesRoute, MenusForStoreRoute, RegisterStoreRoute, StoresInCategoryRoute};

fn new_store(name: &str) -> NewStore {
    NewStore {
        name: name.to_string(),
        category: StoreCategory::Pizza,
        rating: 4.5,
        min_order_amount: Won::from(12_000),
        working_days: WorkingDays::default(),
        open_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        close_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    }
}

#[actix_web::test]
async fn categories_are_listed() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/categories", configure_categories).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, json!(["chicken", "pizza"]));
}

fn configure_categories(cfg: &mut ServiceConfig) {
    let mut mock = MockCatalog::new();
    mock.expect_fetch_categories().returning(|| Ok(vec![StoreCategory::Chicken, StoreCategory::Pizza]));
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(CategoriesRoute::<MockCatalog>::new());
}

#[actix_web::test]
async fn stores_in_a_category() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/stores/chicken", configure_stores).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value[0]["name"], json!("Chicken Town"));
    assert_eq!(value[0]["min_order_amount"], json!(10_000));
}

#[actix_web::test]
async fn an_unknown_category_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    let err = get_request("/stores/sushi", configure_stores).await.expect_err("Expected error");
    assert_eq!(err, "Could not read request path: Invalid store category: sushi");
}

fn configure_stores(cfg: &mut ServiceConfig) {
    let mut mock = MockCatalog::new();
    mock.expect_fetch_stores_in_category().withf(|c| *c == StoreCategory::Chicken).returning(|_| {
        Ok(vec![StoreSummary { id: 1, name: "Chicken Town".to_string(), min_order_amount: Won::from(10_000) }])
    });
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(StoresInCategoryRoute::<MockCatalog>::new());
}

#[actix_web::test]
async fn menus_for_a_missing_store_are_not_found() {
    let _ = env_logger::try_init().ok();
    let err = get_request("/menus/99", configure_menus_missing_store).await.expect_err("Expected error");
    assert_eq!(err, "The data was not found. The requested store (id 99) does not exist");
}

fn configure_menus_missing_store(cfg: &mut ServiceConfig) {
    let mut mock = MockCatalog::new();
    mock.expect_fetch_store_by_id().returning(|_| Ok(None));
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(MenusForStoreRoute::<MockCatalog>::new());
}

#[actix_web::test]
async fn menus_are_listed_for_an_existing_store() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/menus/1", configure_menus).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value[0]["name"], json!("Fried whole"));
    assert_eq!(value[0]["price"], json!(19_000));
}

fn configure_menus(cfg: &mut ServiceConfig) {
    let mut mock = MockCatalog::new();
    mock.expect_fetch_store_by_id().returning(|id| {
        let template = new_store("Chicken Town");
        Ok(Some(Store {
            id,
            name: template.name,
            category: template.category,
            rating: template.rating,
            min_order_amount: template.min_order_amount,
            working_days: template.working_days,
            open_time: template.open_time,
            close_time: template.close_time,
            created_at: chrono::Utc::now(),
        }))
    });
    mock.expect_fetch_menus_for_store().returning(|store_id| {
        Ok(vec![MenuItem { id: 5, store_id, name: "Fried whole".to_string(), price: Won::from(19_000) }])
    });
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(MenusForStoreRoute::<MockCatalog>::new());
}

#[actix_web::test]
async fn registering_a_duplicate_store_name_conflicts() {
    let _ = env_logger::try_init().ok();
    let err = post_request("/stores", &new_store("Chicken Town"), configure_duplicate_store)
        .await
        .expect_err("Expected error");
    assert_eq!(
        err,
        "The request cannot proceed in the pool's current state. A store named 'Chicken Town' is already registered"
    );
}

fn configure_duplicate_store(cfg: &mut ServiceConfig) {
    let mut mock = MockCatalog::new();
    mock.expect_insert_store().returning(|store| Err(CatalogError::DuplicateStoreName(store.name)));
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(RegisterStoreRoute::<MockCatalog>::new());
}

#[actix_web::test]
async fn registering_a_store_with_a_silly_rating_is_rejected() {
    let _ = env_logger::try_init().ok();
    let mut store = new_store("Chicken Town");
    store.rating = 9.5;
    let err = post_request("/stores", &store, configure_register_rejection).await.expect_err("Expected error");
    assert_eq!(err, "Invalid request: The rating must be between 0 and 5, not 9.5");
}

fn configure_register_rejection(cfg: &mut ServiceConfig) {
    let mock = MockCatalog::new();
    let api = CatalogApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(RegisterStoreRoute::<MockCatalog>::new());
}
