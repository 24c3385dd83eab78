use chrono::Duration;
use log::*;

use crate::{
    db_types::{ChatMessage, NewChatMessage},
    helpers::{validate_nickname, RESERVED_BOT_NAME},
    traits::{ChatError, ChatManagement},
};

/// The shared chat. The nickname denylist is enforced here, before anything touches storage. It is the only
/// identity control in the whole system.
#[derive(Debug, Clone)]
pub struct ChatApi<B> {
    db: B,
}

impl<B> ChatApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> ChatApi<B>
where B: ChatManagement
{
    /// Messages within the rolling display window, oldest first.
    pub async fn recent_messages(&self, window: Duration) -> Result<Vec<ChatMessage>, ChatError> {
        self.db.fetch_recent_messages(window).await
    }

    /// Posts a message as an ordinary user. Reserved nicknames and bot impersonations are rejected with no row
    /// written.
    pub async fn post_message(&self, username: &str, message: &str) -> Result<ChatMessage, ChatError> {
        validate_nickname(username)?;
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let stored = self.db.insert_chat_message(NewChatMessage::new(username.trim(), message)).await?;
        trace!("💬️ {} posted message [{}]", stored.username, stored.id);
        Ok(stored)
    }

    /// Posts as the reserved roulette-bot identity. Internal callers only; ordinary users can never claim this
    /// name because [`validate_nickname`] rejects it.
    pub async fn announce(&self, message: &str) -> Result<ChatMessage, ChatError> {
        let stored = self.db.insert_chat_message(NewChatMessage::new(RESERVED_BOT_NAME, message)).await?;
        debug!("💬️ Announcement posted: {message}");
        Ok(stored)
    }
}
