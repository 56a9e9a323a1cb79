//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Dashboard with link table, creation form, and delete actions
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}
