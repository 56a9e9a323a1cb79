//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to shorten. A missing protocol is tolerated; the server
    /// prepends `https://` before validating.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds a response from a domain entity and its computed short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Paginated list of links.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<LinkResponse>,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}
