#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Router;
use galleria_backend::ResetTarget;
use galleria_web::auth::jwt::{generate_access_token, JwtConfig};
use galleria_web::config::ServerConfig;
use galleria_web::router::build_app_router;
use galleria_web::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Frontend under test
// ---------------------------------------------------------------------------

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` pointing at the given backends.
pub fn test_config(api_root_url: &str, reset_targets: Vec<ResetTarget>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        backend_timeout_secs: 5,
        hashtag: "#devnexus".to_string(),
        api_root_url: api_root_url.to_string(),
        reset_targets,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, exactly
/// as the binary does.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState::new(config).expect("state should build");
    build_app_router(state)
}

/// A `Bearer` header value for a fresh token with the given role.
pub fn bearer_for(config: &ServerConfig, principal: &str, role: &str) -> String {
    let token = generate_access_token(principal, role, &config.jwt).expect("token should encode");
    format!("Bearer {token}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    form: Option<&str>,
) -> Response {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    let body = match form {
        Some(form) => {
            builder = builder.header("content-type", "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, authorization: &str) -> Response {
    send(app, Method::GET, uri, Some(authorization), None).await
}

pub async fn post_form(app: Router, uri: &str, form: &str, authorization: Option<&str>) -> Response {
    send(app, Method::POST, uri, authorization, Some(form)).await
}

pub async fn post(app: Router, uri: &str, authorization: Option<&str>) -> Response {
    send(app, Method::POST, uri, authorization, None).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fake backends
// ---------------------------------------------------------------------------

pub use galleria_backend::test_support::{closed_port, spawn_backend, Recorded, Recorder};

/// Fake gallery REST API.
///
/// - `GET /api` -- root with a templated `galleries` relation
/// - `POST /api/galleries` -- answers `galleries_status`
/// - `GET /api/items/42` -- an image record
pub fn gallery_api(galleries_status: StatusCode) -> Router {
    use axum::routing::{get, post};
    use axum::Json;
    use serde_json::json;

    Router::new()
        .route(
            "/api",
            get(|| async {
                Json(json!({
                    "_links": {
                        "galleries": { "href": "/api/galleries{?page,size,sort}", "templated": true },
                        "items": { "href": "/api/items{?page,size,sort}", "templated": true }
                    }
                }))
            }),
        )
        .route("/api/galleries", post(move || async move { galleries_status }))
        .route(
            "/api/items/42",
            get(|| async {
                Json(json!({
                    "image": "http://cdn.example/42.png",
                    "name": "Sunset",
                    "_links": { "self": { "href": "/api/items/42" } }
                }))
            }),
        )
}
