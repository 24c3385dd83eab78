use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::Utc;
use lunch_pool_engine::{db_types::ChatMessage, helpers::RESERVED_BOT_NAME, ChatApi};
use serde_json::{json, Value};

use super::{
    helpers::{get_request, post_request},
    mocks::MockChat,
};
use crate::{
    config::ServerConfig,
    data_objects::ChatPostRequest,
    routes::{ChatMessagesRoute, PostChatMessageRoute},
};

#[actix_web::test]
async fn recent_messages_use_the_configured_window() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/chat", configure_messages).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["username"], json!("Kim"));
    assert_eq!(value[1]["username"], json!(RESERVED_BOT_NAME));
}

#[actix_web::test]
async fn window_can_be_overridden_per_request() {
    let _ = env_logger::try_init().ok();
    let (status, _) = get_request("/chat?window_secs=300", configure_messages).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
}

fn configure_messages(cfg: &mut ServiceConfig) {
    let mut mock = MockChat::new();
    mock.expect_fetch_recent_messages().withf(|window| window.num_seconds() == 3600 || window.num_seconds() == 300).returning(
        |_| {
            Ok(vec![
                ChatMessage { id: 1, username: "Kim".to_string(), message: "Who's in?".to_string(), created_at: Utc::now() },
                ChatMessage {
                    id: 2,
                    username: RESERVED_BOT_NAME.to_string(),
                    message: "🎉 [roulette] Kim won the draw for 'Slice Bros' — enjoy the pickup run! 🏃".to_string(),
                    created_at: Utc::now(),
                },
            ])
        },
    );
    let api = ChatApi::new(mock);
    cfg.app_data(web::Data::new(api))
        .app_data(web::Data::new(ServerConfig::default()))
        .service(ChatMessagesRoute::<MockChat>::new());
}

#[actix_web::test]
async fn posting_as_a_reserved_nickname_is_rejected_before_storage() {
    let _ = env_logger::try_init().ok();
    let request = ChatPostRequest { username: "admin".to_string(), message: "hello".to_string() };
    // The mock has no insert expectation; a write reaching it would panic
    let err = post_request("/chat", &request, configure_post_rejection).await.expect_err("Expected error");
    assert_eq!(err, "Invalid request: The nickname 'admin' is reserved for the system");
}

#[actix_web::test]
async fn posting_as_the_bot_is_rejected_before_storage() {
    let _ = env_logger::try_init().ok();
    let request = ChatPostRequest { username: RESERVED_BOT_NAME.to_string(), message: "I win".to_string() };
    let err = post_request("/chat", &request, configure_post_rejection).await.expect_err("Expected error");
    assert_eq!(err, format!("Invalid request: The nickname '{RESERVED_BOT_NAME}' impersonates the roulette bot"));
}

fn configure_post_rejection(cfg: &mut ServiceConfig) {
    let mock = MockChat::new();
    let api = ChatApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(PostChatMessageRoute::<MockChat>::new());
}

#[actix_web::test]
async fn an_ordinary_post_is_stored() {
    let _ = env_logger::try_init().ok();
    let request = ChatPostRequest { username: "Kim".to_string(), message: "Chicken at noon?".to_string() };
    let (status, body) = post_request("/chat", &request, configure_post).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["username"], json!("Kim"));
    assert_eq!(value["message"], json!("Chicken at noon?"));
}

fn configure_post(cfg: &mut ServiceConfig) {
    let mut mock = MockChat::new();
    mock.expect_insert_chat_message().withf(|msg| msg.username == "Kim").returning(|msg| {
        Ok(ChatMessage { id: 10, username: msg.username, message: msg.message, created_at: Utc::now() })
    });
    let api = ChatApi::new(mock);
    cfg.app_data(web::Data::new(api)).service(PostChatMessageRoute::<MockChat>::new());
}
