//! Asynchronous click counting worker.
//!
//! Drains the click event channel and persists counter updates with
//! retry, so the redirect path never blocks on the database.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Maximum retry attempts per click event after the initial failure.
const MAX_RETRIES: usize = 3;

/// Exponential backoff base in milliseconds (10ms, 100ms, 1s).
const RETRY_BASE_MILLIS: u64 = 10;

/// Runs the click counting worker until the channel closes.
///
/// For each received [`ClickEvent`], increments the link's click counter
/// via the repository. Transient failures are retried with jittered
/// exponential backoff; after [`MAX_RETRIES`] attempts the event is
/// dropped and counted in the `clicks_failed_total` metric. Clicks for
/// codes that were deleted between redirect and processing are discarded
/// silently.
///
/// The worker exits when all senders are dropped, which happens during
/// graceful shutdown.
pub async fn run_click_worker<R>(mut rx: mpsc::Receiver<ClickEvent>, repository: Arc<R>)
where
    R: LinkRepository + ?Sized + 'static,
{
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MILLIS)
            .map(jitter)
            .take(MAX_RETRIES);

        let repo = repository.clone();
        let code = event.code.clone();

        let result = Retry::spawn(strategy, move || {
            let repo = repo.clone();
            let code = code.clone();
            async move { repo.increment_clicks(&code).await }
        })
        .await;

        match result {
            Ok(true) => {
                counter!("clicks_recorded_total").increment(1);
            }
            Ok(false) => {
                debug!(code = %event.code, "Click for missing link dropped");
            }
            Err(e) => {
                counter!("clicks_failed_total").increment(1);
                warn!(code = %event.code, error = %e, "Failed to record click after retries");
            }
        }
    }

    info!("Click worker stopped: channel closed");
}
