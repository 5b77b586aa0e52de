//! Best-effort reset of the file-storage services.
//!
//! Every target is called once, in order, whatever happened to the
//! previous one. Failures are logged and recorded in the [`ResetReport`];
//! [`ResetFanout::reset_all`] itself never fails.

use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::client::ensure_success;
use crate::error::BackendError;

/// A backend exposing a `POST` reset endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTarget {
    /// Short name used in logs (e.g. `mongodb-fileservice`).
    pub name: String,
    pub url: String,
}

impl ResetTarget {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Result of one reset call.
#[derive(Debug)]
pub struct ResetOutcome {
    pub target: String,
    pub result: Result<(), BackendError>,
}

/// Per-target outcomes of a reset, in call order.
#[derive(Debug, Default)]
pub struct ResetReport {
    pub outcomes: Vec<ResetOutcome>,
}

impl ResetReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

pub struct ResetFanout {
    client: reqwest::Client,
    targets: Vec<ResetTarget>,
}

impl ResetFanout {
    pub fn new(client: reqwest::Client, targets: Vec<ResetTarget>) -> Self {
        Self { client, targets }
    }

    /// POST to every target sequentially, forwarding `authorization`
    /// verbatim when present.
    pub async fn reset_all(&self, authorization: Option<&HeaderValue>) -> ResetReport {
        let mut outcomes = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let result = self.reset_one(target, authorization).await;
            match &result {
                Ok(()) => {
                    tracing::info!(service = %target.name, url = %target.url, "Reset succeeded");
                }
                Err(e) => {
                    tracing::error!(service = %target.name, url = %target.url, error = %e, "Reset failed");
                }
            }
            outcomes.push(ResetOutcome {
                target: target.name.clone(),
                result,
            });
        }

        ResetReport { outcomes }
    }

    async fn reset_one(
        &self,
        target: &ResetTarget,
        authorization: Option<&HeaderValue>,
    ) -> Result<(), BackendError> {
        let mut request = self.client.post(&target.url);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value.clone());
        }

        let response = request.send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
