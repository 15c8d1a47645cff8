use app_core::utils::generate_short_id;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{Instrument, debug, info_span};

use crate::{core::domain::models::AppError, infrastructure::app_state::AppState};

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn get_object(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let span = info_span!("get_object", request_id = %generate_short_id(8), %id);

    async move {
        let body = state
            .routing_service
            .get_object(&id, state.request_timeout)
            .await?;
        debug!(size = body.len(), "object served");

        Ok::<_, AppError>((StatusCode::OK, body))
    }
    .instrument(span)
    .await
}

pub async fn put_object(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let span = info_span!("put_object", request_id = %generate_short_id(8), %id);

    async move {
        let size = body.len();
        let node = state
            .routing_service
            .put_object(&id, body, state.request_timeout)
            .await?;
        debug!(size, %node, "object stored");

        Ok::<_, AppError>((StatusCode::CREATED, "Object created"))
    }
    .instrument(span)
    .await
}
