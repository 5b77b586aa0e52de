//! HAL client for the gallery REST API.
//!
//! Relations are resolved on every call; nothing discovered here is
//! cached, so the backend is free to move its collections between deploys.

use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BackendError;
use crate::hal::{Document, HalResource, HAL_JSON};

/// `Accept` value sent on every GET: HAL first, plain JSON as fallback.
const ACCEPT_HAL: &str = "application/hal+json, application/json;q=0.9";

/// Build the HTTP client shared by all backend calls.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, BackendError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Select the inbound request headers that are propagated to backends.
///
/// Only `Authorization` travels; everything else (host, content length of
/// the inbound form, cookies) belongs to the inbound hop.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::new();
    for value in inbound.get_all(AUTHORIZATION) {
        forwarded.append(AUTHORIZATION, value.clone());
    }
    forwarded
}

/// Parse an absolute `http`/`https` URL.
pub fn parse_http_url(url: &str) -> Result<Url, BackendError> {
    let parsed = Url::parse(url).map_err(|e| BackendError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(BackendError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// HTTP client speaking HAL to the gallery REST API.
#[derive(Debug, Clone)]
pub struct HalClient {
    client: reqwest::Client,
}

impl HalClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `entry_point` and return the target of its `rel` link.
    ///
    /// Issues exactly one GET. Relative targets are resolved against
    /// `entry_point` and templated targets are expanded with no variables.
    pub async fn resolve_relation(
        &self,
        entry_point: &str,
        rel: &str,
        headers: &HeaderMap,
    ) -> Result<Url, BackendError> {
        let base = parse_http_url(entry_point)?;
        let root: HalResource<Document> = self.get_hal(base.clone(), headers).await?;
        let target = root.resolve(rel, &base)?;

        tracing::debug!(entry_point, rel, href = %target, "Resolved hypermedia relation");
        Ok(target)
    }

    /// Fetch a single HAL resource and decode its content as `T`.
    pub async fn fetch_resource<T: DeserializeOwned>(
        &self,
        url: Url,
        headers: &HeaderMap,
    ) -> Result<HalResource<T>, BackendError> {
        self.get_hal(url, headers).await
    }

    /// POST `body` as JSON. Any 2xx status is success; the response body is
    /// not interpreted.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
        headers: &HeaderMap,
    ) -> Result<(), BackendError> {
        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    async fn get_hal<T: DeserializeOwned>(
        &self,
        url: Url,
        headers: &HeaderMap,
    ) -> Result<HalResource<T>, BackendError> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .header(ACCEPT, ACCEPT_HAL)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            if !content_type.as_bytes().starts_with(HAL_JSON.as_bytes()) {
                tracing::debug!(url = %response.url(), ?content_type, "Backend answered without HAL media type");
            }
        }
        Ok(response.json().await?)
    }
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`BackendError::Status`] with the status and
/// body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(BackendError::Status {
            status: status.as_u16(),
            url,
            body,
        });
    }
    Ok(response)
}
