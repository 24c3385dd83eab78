use thiserror::Error;

use crate::traits::{CatalogError, ChatError, OrderPoolError};

#[derive(Debug, Clone, Error)]
pub enum RouletteError {
    #[error("There is no store named '{0}'")]
    StoreNotFound(String),
    #[error("Store '{0}' has not reached its minimum order amount, so there is nothing to pick up yet")]
    StoreNotEligible(String),
    #[error("No participants have ordered at '{0}'")]
    NoParticipants(String),
    #[error("{0}")]
    PoolError(#[from] OrderPoolError),
    #[error("{0}")]
    CatalogError(#[from] CatalogError),
    #[error("{0}")]
    ChatError(#[from] ChatError),
}
