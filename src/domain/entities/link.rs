//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// Represents the mapping between a short code and a target URL, together
/// with the running click count maintained by the redirect path.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `clicks` starts at zero and `created_at` is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
