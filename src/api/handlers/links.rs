//! Handlers for link management endpoints (create, read, list, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse, ListLinksResponse, PaginationMeta};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// The URL is normalized (`https://` prepended when no protocol is
/// present) and validated before a code is minted.
///
/// # Response
///
/// `201 Created` with the new link:
///
/// ```json
/// {
///   "code": "xK3mP9",
///   "target_url": "https://example.com/some/page",
///   "short_url": "https://tiny.example.com/xK3mP9",
///   "clicks": 0,
///   "created_at": "2026-08-06T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty, oversized, or not a valid
/// HTTP(S) URL after normalization.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(payload.url).await?;
    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, short_url)),
    ))
}

/// Lists links with their click counts, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 100)
///
/// # Performance
///
/// Uses `tokio::try_join!` to run the page query and total count query
/// concurrently.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(25);

    let (links, total_items) = tokio::try_join!(
        state.link_service.list_links(offset, limit),
        state.link_service.count_links()
    )?;

    let total_pages = ((total_items + limit - 1) / limit) as u32;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.get_short_url(&state.base_url, &link.code);
            LinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(ListLinksResponse {
        pagination: PaginationMeta {
            page,
            page_size,
            total_items,
            total_pages,
        },
        items,
    }))
}

/// Retrieves a single link with its click count.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;
    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}

/// Deletes a link by its short code.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// The row is removed permanently; subsequent redirects for the code
/// return 404.
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.link_service.delete_link(&code).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
