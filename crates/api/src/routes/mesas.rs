//! Route definitions for the `/mesas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mesa;
use crate::state::AppState;

/// Routes mounted at `/mesas`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mesa::list).post(mesa::create))
        .route(
            "/{id}",
            get(mesa::get_by_id).put(mesa::update).delete(mesa::delete),
        )
}
