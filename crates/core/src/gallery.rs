//! Gallery and image payloads exchanged with the gallery REST API.

use serde::{Deserialize, Serialize};

/// A named collection of images.
///
/// Submitted by the index page form and posted to the backend's
/// `galleries` collection. The backend assigns `id`; the frontend never
/// stores a gallery itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl Gallery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A single image resource as served by the gallery REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Location of the raw image (URL or `data:` URI).
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gallery_serializes_without_id() {
        let json = serde_json::to_value(Gallery::named("Vacation")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Vacation" }));
    }

    #[test]
    fn gallery_form_defaults_to_empty_name() {
        let gallery: Gallery = serde_json::from_str("{}").unwrap();
        assert_eq!(gallery, Gallery::default());
    }

    #[test]
    fn item_ignores_unknown_fields() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "image": "http://cdn/cat.png",
            "gallery": null,
            "user": "greg",
        }))
        .unwrap();
        assert_eq!(item.image, "http://cdn/cat.png");
        assert_eq!(item.name, None);
    }

    #[test]
    fn item_without_image_is_rejected() {
        let result: Result<Item, _> = serde_json::from_value(serde_json::json!({ "name": "x" }));
        assert!(result.is_err());
    }
}
