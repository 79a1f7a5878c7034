use super::{render_svg, to_value};
use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{extract::State, response::Response, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MarshalRequest {
    pub size: Option<f64>,
    pub data: serde_json::Value,
}

/// Renders an arbitrary JSON document.
pub async fn marshal(
    State(state): State<AppState>,
    Json(req): Json<MarshalRequest>,
) -> Result<Response> {
    let render = &state.config.render;
    let size = req.size.unwrap_or(render.default_size);
    if size > render.max_size {
        return Err(ServiceError::InvalidRequest(format!(
            "size {} exceeds the maximum of {}",
            size, render.max_size
        )));
    }

    tracing::info!("Marshal request at size {}", size);
    let value = to_value(&req.data)?;
    render_svg(&state, value, size).await
}
