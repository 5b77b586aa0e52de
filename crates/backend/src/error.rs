/// Errors from calls to backend services.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend returned HTTP {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        /// Raw response body for debugging.
        body: String,
    },

    /// The fetched resource has no link with the requested relation.
    #[error("Resource {url} has no '{rel}' link")]
    MissingRelation { rel: String, url: String },

    /// A configured or discovered URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
