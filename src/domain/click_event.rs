//! Click event model for asynchronous click counting.

/// An in-memory click notification passed from HTTP handlers to the
/// background worker via a channel.
///
/// Decouples the redirect response from the counter update, keeping
/// redirects fast regardless of database latency. Only the short code is
/// carried; no client metadata is collected.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler
/// 2. Sent to the channel with `try_send` (a full queue drops the event)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for the given short code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
