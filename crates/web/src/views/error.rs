use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout::base_document;

/// Generic error page.
pub fn error_page(status: StatusCode, code: &str, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    base_document(
        title,
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            p.error-code { (code) }
            a href="/" { "Back to galleries" }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_and_code() {
        let page = error_page(StatusCode::BAD_GATEWAY, "BACKEND_ERROR", "down").into_string();
        assert!(page.contains("502 Bad Gateway"));
        assert!(page.contains("BACKEND_ERROR"));
        assert!(page.contains("<p>down</p>"));
    }
}
