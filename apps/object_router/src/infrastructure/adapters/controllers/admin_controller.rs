use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::domain::models::{AppError, InstanceDetails},
    infrastructure::app_state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PutInstanceBody {
    pub name: String,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub network_address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingEntryResponse {
    pub position: u64,
    pub name: String,
    pub status: String,
}

pub async fn put_instance(
    State(state): State<AppState>,
    Path(instance_ref): Path<String>,
    Json(body): Json<PutInstanceBody>,
) -> Result<impl IntoResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("Instance name is empty".to_string()));
    }

    state.registry.register(
        &instance_ref,
        InstanceDetails {
            name: body.name,
            running: true,
            env: body.env,
            network_address: body.network_address,
        },
    );

    Ok(StatusCode::ACCEPTED)
}

pub async fn delete_instance(
    State(state): State<AppState>,
    Path(instance_ref): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.registry.deregister(&instance_ref) {
        return Err(AppError::UnknownInstance(instance_ref));
    }

    Ok(StatusCode::ACCEPTED)
}

pub async fn ring_snapshot(State(state): State<AppState>) -> Json<Vec<RingEntryResponse>> {
    let entries = state
        .node_provider
        .snapshot()
        .into_iter()
        .map(|entry| RingEntryResponse {
            position: entry.position,
            name: entry.name.to_string(),
            status: entry.status.as_str().to_string(),
        })
        .collect();

    Json(entries)
}
