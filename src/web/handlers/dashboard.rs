//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// Maximum number of links rendered on the dashboard.
const DASHBOARD_PAGE_SIZE: i64 = 100;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with the link table (short URL,
/// target, click count, creation time), a creation form, and per-row
/// delete actions wired to the JSON API.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub links: Vec<DashboardLink>,
}

/// Row data for the dashboard link table.
pub struct DashboardLink {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub clicks: i64,
    pub created_at: String,
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the link list cannot be loaded.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.list_links(0, DASHBOARD_PAGE_SIZE).await?;

    let links = links
        .into_iter()
        .map(|link| DashboardLink {
            short_url: state.link_service.get_short_url(&state.base_url, &link.code),
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect();

    Ok(DashboardTemplate { links })
}
