use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::QueryRejection;
use murmur_core::feed::PageError;
use murmur_core::validate::InvalidField;
use murmur_types::api::ErrorResponse;
use thiserror::Error;
use tracing::{debug, error};

/// Every way a request can fail. Rendered as `{"reason": ...}` with the
/// matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, unknown and expired tokens all look the same.
    #[error("The token does not exist or is invalid.")]
    Unauthorized,

    #[error("No user with this login and password.")]
    BadCredentials,

    #[error("The old password is incorrect.")]
    WrongPassword,

    #[error("Access to this profile is denied.")]
    Forbidden,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Login, email or phone is already taken.")]
    Conflict,

    #[error("Request data does not match the expected format: {0}.")]
    InvalidInput(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::WrongPassword | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match &self {
            Self::Internal(e) => {
                error!("Internal error: {:#}", e);
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { reason })).into_response()
    }
}

impl From<InvalidField> for ApiError {
    fn from(err: InvalidField) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected JSON body: {}", rejection.body_text());
        Self::InvalidInput("malformed request body".to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query string: {:?}", rejection);
        Self::InvalidInput("malformed query string".to_string())
    }
}
