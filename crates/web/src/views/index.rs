use galleria_core::gallery::Gallery;
use galleria_core::links::{Link, REL_NEW_GALLERY};
use maud::{html, Markup};

use super::layout::base_document;

/// Link to the gallery creation action.
pub fn new_gallery_link() -> Link {
    Link::new("/", REL_NEW_GALLERY)
}

/// Index page: the gallery creation form, pre-filled from `gallery`.
pub fn index_page(gallery: &Gallery) -> Markup {
    let new_gallery = new_gallery_link();

    base_document(
        "Galleries",
        html! {
            h1 { "Galleries" }
            form.new-gallery method="post" action=(new_gallery.href) data-rel=(new_gallery.rel) {
                label for="name" { "Name" }
                input id="name" type="text" name="name" value=(gallery.name);
                button type="submit" { (new_gallery.rel) }
            }
        },
    )
}
