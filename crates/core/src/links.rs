//! Hypermedia links and relation names.

use serde::Serialize;

/// Relation on the API root that points at the gallery collection.
pub const REL_GALLERIES: &str = "galleries";
/// Standard HAL self relation.
pub const REL_SELF: &str = "self";

pub const REL_NEW_GALLERY: &str = "New Gallery";
pub const REL_ALL_IMAGES: &str = "All Images";
pub const REL_RAW_IMAGE: &str = "Raw Image";
pub const REL_HAL_RECORD: &str = "HAL record";

/// A (relation, target) pair rendered into pages or discovered on a
/// HAL resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Expand an RFC 6570 URI template with no variables bound.
///
/// Every `{...}` expression expands to the empty string, which is what an
/// undefined variable produces for all operators. An unterminated `{` is
/// kept verbatim.
pub fn expand_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }

    out.push_str(rest);
    out
}
