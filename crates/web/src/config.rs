use std::str::FromStr;

use galleria_backend::{parse_http_url, ResetTarget};

use crate::auth::jwt::JwtConfig;

/// Hashtag shown on image pages when `HASHTAG` is unset.
pub const DEFAULT_HASHTAG: &str = "#devnexus";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Most backend calls made one after another by a single request
/// (discovery + create, or the two reset calls).
pub const MAX_SEQUENTIAL_BACKEND_CALLS: u64 = 2;

pub const DEFAULT_MONGO_RESET_URL: &str = "http://mongodb-fileservice/reset";
pub const DEFAULT_S3_RESET_URL: &str = "http://s3-fileservice/reset";

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the API root and the JWT secret has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for each outbound backend call in seconds (default: `10`).
    pub backend_timeout_secs: u64,
    /// Hashtag rendered on image pages.
    pub hashtag: String,
    /// Absolute URL of the gallery REST API root resource.
    pub api_root_url: String,
    /// File services reset by `POST /reset`, called in this order.
    pub reset_targets: Vec<ResetTarget>,
    /// JWT validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                       | Default                            |
    /// |-------------------------------|------------------------------------|
    /// | `HOST`                        | `0.0.0.0`                          |
    /// | `PORT`                        | `3000`                             |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                               |
    /// | `BACKEND_TIMEOUT_SECS`        | `10`                               |
    /// | `HASHTAG`                     | `#devnexus`                        |
    /// | `GALLERY_API_URL`             | required                           |
    /// | `MONGO_FILESERVICE_RESET_URL` | `http://mongodb-fileservice/reset` |
    /// | `S3_FILESERVICE_RESET_URL`    | `http://s3-fileservice/reset`      |
    ///
    /// `REQUEST_TIMEOUT_SECS` must exceed twice `BACKEND_TIMEOUT_SECS`, so
    /// a request whose first backend call hangs still gets to make its
    /// second one before the inbound timeout fires.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(lookup, "PORT", 3000u16)?;
        let request_timeout_secs =
            parse_var(lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let backend_timeout_secs =
            parse_var(lookup, "BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS)?;
        let backend_budget = backend_timeout_secs.saturating_mul(MAX_SEQUENTIAL_BACKEND_CALLS);
        if request_timeout_secs <= backend_budget {
            return Err(ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                reason: format!(
                    "must exceed {MAX_SEQUENTIAL_BACKEND_CALLS} x BACKEND_TIMEOUT_SECS \
                     ({backend_timeout_secs}s), got {request_timeout_secs}s"
                ),
            });
        }
        let hashtag = lookup("HASHTAG").unwrap_or_else(|| DEFAULT_HASHTAG.into());

        let api_root_url = lookup("GALLERY_API_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("GALLERY_API_URL"))?;
        http_url("GALLERY_API_URL", &api_root_url)?;

        let mongo = lookup("MONGO_FILESERVICE_RESET_URL")
            .unwrap_or_else(|| DEFAULT_MONGO_RESET_URL.into());
        http_url("MONGO_FILESERVICE_RESET_URL", &mongo)?;

        let s3 = lookup("S3_FILESERVICE_RESET_URL").unwrap_or_else(|| DEFAULT_S3_RESET_URL.into());
        http_url("S3_FILESERVICE_RESET_URL", &s3)?;

        let jwt = JwtConfig::from_lookup(lookup)?;

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            backend_timeout_secs,
            hashtag,
            api_root_url,
            reset_targets: vec![
                ResetTarget::new("mongodb-fileservice", mongo),
                ResetTarget::new("s3-fileservice", s3),
            ],
            jwt,
        })
    }
}

/// Parse `var` if set, otherwise return `default`.
pub(crate) fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn http_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    parse_http_url(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(&|k: &str| env.get(k).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("GALLERY_API_URL", "http://gateway/api"),
        ("JWT_SECRET", "secret"),
    ];

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.backend_timeout_secs, 10);
        assert_eq!(config.hashtag, "#devnexus");
        assert_eq!(config.api_root_url, "http://gateway/api");
        assert_eq!(
            config.reset_targets,
            vec![
                ResetTarget::new("mongodb-fileservice", DEFAULT_MONGO_RESET_URL),
                ResetTarget::new("s3-fileservice", DEFAULT_S3_RESET_URL),
            ]
        );
    }

    #[test]
    fn api_url_is_required() {
        assert_matches!(
            load(&[("JWT_SECRET", "secret")]),
            Err(ConfigError::Missing("GALLERY_API_URL"))
        );
    }

    #[test]
    fn api_url_must_be_http() {
        let result = load(&[("GALLERY_API_URL", "/api"), ("JWT_SECRET", "secret")]);
        assert_matches!(result, Err(ConfigError::Invalid { var: "GALLERY_API_URL", .. }));
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "eighty"));
        assert_matches!(load(&pairs), Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn request_timeout_must_cover_two_backend_calls() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([("REQUEST_TIMEOUT_SECS", "30"), ("BACKEND_TIMEOUT_SECS", "30")]);
        assert_matches!(
            load(&pairs),
            Err(ConfigError::Invalid { var: "REQUEST_TIMEOUT_SECS", .. })
        );

        let mut pairs = REQUIRED.to_vec();
        pairs.extend([("REQUEST_TIMEOUT_SECS", "20"), ("BACKEND_TIMEOUT_SECS", "10")]);
        assert_matches!(
            load(&pairs),
            Err(ConfigError::Invalid { var: "REQUEST_TIMEOUT_SECS", .. })
        );

        let mut pairs = REQUIRED.to_vec();
        pairs.extend([("REQUEST_TIMEOUT_SECS", "21"), ("BACKEND_TIMEOUT_SECS", "10")]);
        let config = load(&pairs).unwrap();
        assert_eq!(config.request_timeout_secs, 21);
        assert_eq!(config.backend_timeout_secs, 10);
    }

    #[test]
    fn overrides_are_honoured() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("HASHTAG", "#rustconf"),
            ("PORT", "8080"),
            ("S3_FILESERVICE_RESET_URL", "http://s3:9000/reset"),
        ]);
        let config = load(&pairs).unwrap();

        assert_eq!(config.hashtag, "#rustconf");
        assert_eq!(config.port, 8080);
        assert_eq!(config.reset_targets[1].url, "http://s3:9000/reset");
    }
}
