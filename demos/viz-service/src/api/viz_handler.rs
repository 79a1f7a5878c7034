use super::{render_svg, to_value};
use crate::demo;
use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VizQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub v: Option<String>,
}

/// Renders a single scalar literal.
pub async fn viz(State(state): State<AppState>, Query(query): Query<VizQuery>) -> Result<Response> {
    let kind = query
        .kind
        .ok_or_else(|| ServiceError::InvalidRequest("missing 'type' parameter".to_string()))?;
    let literal = query.v.unwrap_or_default();

    let value = demo::parse_literal(&kind, &literal)?;
    tracing::info!("Rendering {} literal '{}'", kind, literal);

    let size = state.config.render.default_size;
    render_svg(&state, value, size).await
}

pub async fn demo_struct(State(state): State<AppState>) -> Result<Response> {
    let value = to_value(&demo::sample())?;
    let size = state.config.render.demo_size;
    render_svg(&state, value, size).await
}

pub async fn demo_slice(State(state): State<AppState>) -> Result<Response> {
    let value = to_value(&demo::slice())?;
    let size = state.config.render.slice_size;
    render_svg(&state, value, size).await
}
