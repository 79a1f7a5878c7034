pub mod health;
pub mod marshal_handler;
pub mod viz_handler;

pub use health::health_check;
pub use marshal_handler::marshal;
pub use viz_handler::{demo_slice, demo_struct, viz};

use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use mosaic::Value;

/// Renders `value` on the blocking pool and wraps the document in a response.
pub(crate) async fn render_svg(state: &AppState, value: Value, size: f64) -> Result<Response> {
    let _permit = state
        .render_semaphore
        .acquire()
        .await
        .map_err(|_| ServiceError::ServiceOverloaded)?;

    let marshaller = state.marshaller.clone();
    let svg = tokio::task::spawn_blocking(move || marshaller.marshal_value(&value, size))
        .await
        .map_err(|e| ServiceError::Internal(format!("render task failed: {}", e)))??;

    tracing::debug!("Rendered {} byte document at size {}", svg.len(), size);

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

/// Converts a serializable demo value, mapping failures to a service error.
pub(crate) fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value> {
    mosaic::to_value(value).map_err(|e| ServiceError::Internal(e.to_string()))
}
