//! HAL (`application/hal+json`) document model.
//!
//! A HAL document is a JSON object whose `_links` member maps relation
//! names to link objects. Everything else is resource content and is
//! flattened into `T`.

use std::collections::HashMap;

use galleria_core::links::expand_template;
use reqwest::Url;
use serde::Deserialize;

use crate::error::BackendError;

pub const HAL_JSON: &str = "application/hal+json";

/// Resource content with no expected fields, used when only the links of a
/// document matter (e.g. the API root).
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A single HAL link object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HalLink {
    pub href: String,
    #[serde(default)]
    pub templated: bool,
    #[serde(default)]
    pub title: Option<String>,
}

/// A relation maps to one link object or an array of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HalLinks {
    One(HalLink),
    Many(Vec<HalLink>),
}

impl HalLinks {
    /// The link to follow: the only one, or the first of an array.
    pub fn first(&self) -> Option<&HalLink> {
        match self {
            HalLinks::One(link) => Some(link),
            HalLinks::Many(links) => links.first(),
        }
    }
}

/// A HAL resource with typed content.
#[derive(Debug, Clone, Deserialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, HalLinks>,
}

impl<T> HalResource<T> {
    pub fn link(&self, rel: &str) -> Option<&HalLink> {
        self.links.get(rel).and_then(HalLinks::first)
    }

    /// Resolve the target of `rel` against `base`, the URL this document
    /// was fetched from.
    pub fn resolve(&self, rel: &str, base: &Url) -> Result<Url, BackendError> {
        let link = self
            .link(rel)
            .ok_or_else(|| BackendError::MissingRelation {
                rel: rel.to_string(),
                url: base.to_string(),
            })?;

        let href = if link.templated {
            expand_template(&link.href)
        } else {
            link.href.clone()
        };

        base.join(&href).map_err(|e| BackendError::InvalidUrl {
            url: href,
            reason: e.to_string(),
        })
    }
}
