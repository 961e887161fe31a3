use axum::routing::get;
use axum::Router;

use crate::handlers::identity;
use crate::state::AppState;

/// Mount the diagnostic identity route at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/identity", get(identity::identity))
}
