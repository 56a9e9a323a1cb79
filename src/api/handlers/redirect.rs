//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use metrics::counter;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Counting
///
/// A [`ClickEvent`] is sent to a bounded channel for async processing; the
/// response never waits on the counter update. If the queue is full, the
/// click is dropped (fire-and-forget).
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.get_link(&code).await?;

    if state.click_sender.try_send(ClickEvent::new(&code)).is_err() {
        counter!("clicks_dropped_total").increment(1);
        debug!(code = %code, "Click queue full, dropping event");
    }

    counter!("redirects_total").increment(1);

    Ok(Redirect::temporary(&link.target_url))
}
