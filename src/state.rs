//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::PgLinkRepository;

/// Application state shared across handlers.
///
/// Cheap to clone: services are behind `Arc` and the click sender is a
/// channel handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public base URL prefixed onto short codes in responses.
    pub base_url: String,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        link_service: Arc<LinkService<PgLinkRepository>>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            click_sender,
            base_url,
        }
    }
}
