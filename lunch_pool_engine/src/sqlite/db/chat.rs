use chrono::Duration;
use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{ChatMessage, NewChatMessage},
    traits::ChatError,
};

/// Messages no older than `window`, oldest first. Rows outside the window are not deleted; they simply fall out
/// of view.
pub async fn fetch_recent_messages(
    window: Duration,
    conn: &mut SqliteConnection,
) -> Result<Vec<ChatMessage>, ChatError> {
    let messages = sqlx::query_as(
        format!(
            "SELECT * FROM chat_messages WHERE (unixepoch(CURRENT_TIMESTAMP) - unixepoch(created_at)) <= {} \
             ORDER BY created_at ASC, id ASC",
            window.num_seconds()
        )
        .as_str(),
    )
    .fetch_all(conn)
    .await?;
    trace!("💬️ fetch_recent_messages returned {} rows", messages.len());
    Ok(messages)
}

pub async fn insert_chat_message(
    message: NewChatMessage,
    conn: &mut SqliteConnection,
) -> Result<ChatMessage, ChatError> {
    let stored = sqlx::query_as("INSERT INTO chat_messages (username, message) VALUES ($1, $2) RETURNING *")
        .bind(message.username)
        .bind(message.message)
        .fetch_one(conn)
        .await?;
    Ok(stored)
}
