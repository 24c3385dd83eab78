use chrono::Duration;
use thiserror::Error;

use crate::{
    db_types::{ChatMessage, NewChatMessage},
    helpers::NicknameError,
};

/// The shared-chat backend contract.
#[allow(async_fn_in_trait)]
pub trait ChatManagement {
    /// Messages no older than `window`, oldest first. Older rows stay in storage; they just fall out of view.
    async fn fetch_recent_messages(&self, window: Duration) -> Result<Vec<ChatMessage>, ChatError>;

    /// Appends a message. Identity checks (the nickname denylist) happen in the API layer; the backend stores
    /// whatever it is given.
    async fn insert_chat_message(&self, message: NewChatMessage) -> Result<ChatMessage, ChatError>;
}

#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("We have an internal database engine error: {0}")]
    DatabaseError(String),
    #[error("{0}")]
    ForbiddenNickname(#[from] NicknameError),
    #[error("Chat messages cannot be empty")]
    EmptyMessage,
}

impl From<sqlx::Error> for ChatError {
    fn from(e: sqlx::Error) -> Self {
        ChatError::DatabaseError(e.to_string())
    }
}
