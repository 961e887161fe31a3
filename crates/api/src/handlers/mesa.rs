//! Handlers for the `/mesas` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mesas_core::error::CoreError;
use mesas_core::mesa::{self, ENTITY};
use mesas_core::types::DbId;
use mesas_db::models::mesa::{CreateMesa, Mesa, UpdateMesa};
use mesas_db::repositories::MesaRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /mesas
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMesa>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Mesa>)> {
    let Json(input) = payload?;
    let fields = mesa::validate_create(
        input.name.as_deref(),
        input.capacity,
        input.status.as_deref(),
    )?;
    let mesa = MesaRepo::create(&state.pool, &fields).await?;
    tracing::info!(mesa_id = mesa.id, name = %mesa.name, "Mesa created");
    Ok((StatusCode::CREATED, Json(mesa)))
}

/// GET /mesas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mesa>>> {
    let mesas = MesaRepo::list(&state.pool).await?;
    Ok(Json(mesas))
}

/// GET /mesas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Mesa>> {
    let Path(id) = path?;
    let mesa = MesaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(mesa))
}

/// PUT /mesas/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateMesa>, JsonRejection>,
) -> AppResult<Json<Mesa>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let fields = mesa::validate_update(
        input.name.as_deref(),
        input.capacity,
        input.status.as_deref(),
    )?;
    let mesa = MesaRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(mesa_id = id, status = %mesa.status, "Mesa updated");
    Ok(Json(mesa))
}

/// DELETE /mesas/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if MesaRepo::delete(&state.pool, id).await? {
        tracing::info!(mesa_id = id, "Mesa deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
