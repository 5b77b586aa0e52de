//! Handlers for the HTML pages: index, gallery creation, image detail.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Form;
use galleria_backend::{forwarded_headers, parse_http_url};
use galleria_backend::hal::HalResource;
use galleria_core::gallery::{Gallery, Item};
use galleria_core::links::REL_GALLERIES;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Query parameters for `GET /image`.
#[derive(Debug, Deserialize)]
pub struct ImageParams {
    pub link: Option<String>,
}

/// GET /
pub async fn index() -> Html<String> {
    Html(views::index::index_page(&Gallery::default()).into_string())
}

/// POST /
///
/// Discover the gallery collection from the API root, then POST the
/// submitted gallery there. Backend failures propagate to the error page.
pub async fn create_gallery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(gallery): Form<Gallery>,
) -> AppResult<Html<String>> {
    let forwarded = forwarded_headers(&headers);

    let galleries = state
        .hal
        .resolve_relation(&state.config.api_root_url, REL_GALLERIES, &forwarded)
        .await?;

    state.hal.post_json(galleries.clone(), &gallery, &forwarded).await?;
    tracing::info!(name = %gallery.name, collection = %galleries, "Created gallery");

    Ok(Html(views::index::index_page(&Gallery::default()).into_string()))
}

/// GET /image?link=<uri>
///
/// Fetch the HAL record at `link` once and render it with its navigation
/// links.
pub async fn view_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ImageParams>,
) -> AppResult<Html<String>> {
    let link = params
        .link
        .filter(|l| !l.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'link' query parameter".into()))?;

    let url = parse_http_url(&link).map_err(|e| AppError::InvalidLink {
        link: link.clone(),
        reason: e.to_string(),
    })?;

    let resource: HalResource<Item> = state
        .hal
        .fetch_resource(url, &forwarded_headers(&headers))
        .await?;

    let links = views::image::image_links(&resource.content, &link);
    let page = views::image::image_page(&resource.content, &state.config.hashtag, &links);
    Ok(Html(page.into_string()))
}
