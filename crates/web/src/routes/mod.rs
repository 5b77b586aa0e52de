pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page and admin route tree.
///
/// ```text
/// GET  /          index page
/// POST /          create gallery, then index page
/// GET  /image     image detail (?link=<uri>)
/// POST /reset     reset file services (admin)
/// ```
pub fn frontend_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::pages::index).post(handlers::pages::create_gallery),
        )
        .route("/image", get(handlers::pages::view_image))
        .route("/reset", post(handlers::reset::reset))
}
