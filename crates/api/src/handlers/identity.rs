use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Static identification payload.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub full_name: String,
}

/// GET /identity
pub async fn identity(State(state): State<AppState>) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        full_name: state.config.identity_name.clone(),
    })
}
