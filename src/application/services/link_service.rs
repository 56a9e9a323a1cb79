//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_short_code};
use crate::utils::url_normalizer::format_url;
use crate::utils::url_validator::is_valid_url;
use serde_json::json;

/// Service for creating and managing shortened links.
///
/// Handles URL normalization, validation, and code minting so that
/// handlers only deal with HTTP concerns.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for a submitted URL.
    ///
    /// The input is normalized first (`https://` is prepended when no
    /// protocol is present), then validated. A random code is minted with
    /// collision retry against the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute
    /// HTTP(S) URL after normalization.
    ///
    /// Returns [`AppError::Internal`] if no unique code could be generated.
    pub async fn create_link(&self, submitted_url: String) -> Result<Link, AppError> {
        let target_url = format_url(&submitted_url);

        if !is_valid_url(&target_url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "url": submitted_url }),
            ));
        }

        let code = self.generate_unique_code().await?;

        let new_link = NewLink { code, target_url };

        self.repository.create(new_link).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists links ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Counts the total number of links.
    ///
    /// Used for pagination metadata and health checks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Deletes a link by code.
    ///
    /// Returns `Ok(true)` if the link existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        self.repository.delete(code).await
    }

    /// Constructs the full short URL from the configured base URL and a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Generates a unique short code with collision retry.
    ///
    /// Attempts up to 10 times before failing. With a 57-character
    /// alphabet and 6-character codes, collisions are vanishingly rare at
    /// this service's scale.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_short_code(DEFAULT_CODE_LENGTH)
                .map_err(|e| AppError::internal(e.to_string(), json!({})))?;

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
