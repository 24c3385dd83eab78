//! Chat identity rules.
//!
//! There is no authentication anywhere in the system; nicknames are free text. The only identity control is this
//! denylist, enforced at the chat boundary: nobody may post as the system, as an operator, or as the roulette bot
//! that announces pickup-duty winners.
use thiserror::Error;

/// The identity the engine itself posts under when announcing roulette results.
pub const RESERVED_BOT_NAME: &str = "🎲 roulette-bot";

/// Nicknames containing this marker impersonate the announcement bot and are rejected.
const BOT_MARKER: &str = "roulette-bot";

/// Compared case-insensitively against the trimmed nickname. The last three entries are the localized equivalents
/// of admin/operator/notice.
const RESERVED_NICKNAMES: [&str; 7] = ["system", "admin", "administrator", "root", "관리자", "운영자", "공지"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("A nickname is required before posting")]
    Empty,
    #[error("The nickname '{0}' is reserved for the system")]
    Reserved(String),
    #[error("The nickname '{0}' impersonates the roulette bot")]
    BotImpersonation(String),
}

/// Checks a user-supplied nickname against the reserved-word rules. Rejection happens before anything is written
/// to chat storage.
pub fn validate_nickname(nickname: &str) -> Result<(), NicknameError> {
    let trimmed = nickname.trim();
    if trimmed.is_empty() {
        return Err(NicknameError::Empty);
    }
    let folded = trimmed.to_lowercase();
    if RESERVED_NICKNAMES.contains(&folded.as_str()) {
        return Err(NicknameError::Reserved(trimmed.to_string()));
    }
    if folded.contains(BOT_MARKER) {
        return Err(NicknameError::BotImpersonation(trimmed.to_string()));
    }
    Ok(())
}
