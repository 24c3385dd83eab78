use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use lunch_pool_engine::{CatalogError, ChatError, OrderPoolError, RouletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("Could not read request path: {0}")]
    InvalidRequestPath(String),
    #[error("Invalid request: {0}")]
    ValidationError(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("The request cannot proceed in the pool's current state. {0}")]
    PreconditionFailed(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequestPath(_) => StatusCode::BAD_REQUEST,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::PreconditionFailed(_) => StatusCode::CONFLICT,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<OrderPoolError> for ServerError {
    fn from(e: OrderPoolError) -> Self {
        match e {
            OrderPoolError::DatabaseError(msg) => Self::BackendError(msg),
            OrderPoolError::LineNotFound(_) => Self::NoRecordFound(e.to_string()),
            OrderPoolError::NoMatchingLine(..) => Self::NoRecordFound(e.to_string()),
            OrderPoolError::InvalidOrder(msg) => Self::ValidationError(msg),
        }
    }
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::DatabaseError(msg) => Self::BackendError(msg),
            CatalogError::DuplicateStoreName(_) => Self::PreconditionFailed(e.to_string()),
            CatalogError::StoreNotFound(_) => Self::NoRecordFound(e.to_string()),
            CatalogError::InvalidRegistration(msg) => Self::ValidationError(msg),
        }
    }
}

impl From<ChatError> for ServerError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::DatabaseError(msg) => Self::BackendError(msg),
            ChatError::ForbiddenNickname(_) => Self::ValidationError(e.to_string()),
            ChatError::EmptyMessage => Self::ValidationError(e.to_string()),
        }
    }
}

impl From<RouletteError> for ServerError {
    fn from(e: RouletteError) -> Self {
        match e {
            RouletteError::StoreNotFound(_) => Self::NoRecordFound(e.to_string()),
            RouletteError::StoreNotEligible(_) => Self::PreconditionFailed(e.to_string()),
            RouletteError::NoParticipants(_) => Self::PreconditionFailed(e.to_string()),
            RouletteError::PoolError(inner) => inner.into(),
            RouletteError::CatalogError(inner) => inner.into(),
            RouletteError::ChatError(inner) => inner.into(),
        }
    }
}
