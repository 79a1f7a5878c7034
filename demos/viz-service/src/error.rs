use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mosaic::MarshalError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rendering failed: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Service overloaded, please try again later")]
    ServiceOverloaded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "InvalidRequest", self.to_string())
            }
            Self::Marshal(MarshalError::Encode(ref e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EncodeError",
                e.to_string(),
            ),
            Self::Marshal(ref e @ MarshalError::Serialize { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SerializeError",
                e.to_string(),
            ),
            Self::ServiceOverloaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceOverloaded",
                self.to_string(),
            ),
            Self::Marshal(_) | Self::Internal(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
