use galleria_core::gallery::Item;
use galleria_core::links::{Link, REL_ALL_IMAGES, REL_HAL_RECORD, REL_RAW_IMAGE};
use maud::{html, Markup};

use super::layout::base_document;

/// Navigation links of an image page, in display order: index, raw image,
/// then the HAL record the page was built from.
pub fn image_links(item: &Item, record: &str) -> Vec<Link> {
    vec![
        Link::new("/", REL_ALL_IMAGES),
        Link::new(item.image.clone(), REL_RAW_IMAGE),
        Link::new(record, REL_HAL_RECORD),
    ]
}

pub fn image_page(item: &Item, hashtag: &str, links: &[Link]) -> Markup {
    let title = item.name.as_deref().unwrap_or("Image");

    base_document(
        title,
        html! {
            h1 { (title) }
            img.item src=(item.image) alt=(title);
            p.hashtag { (hashtag) }
            nav.links {
                @for link in links {
                    a href=(link.href) rel=(link.rel) { (link.rel) }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item {
            image: "http://cdn/42.png".to_string(),
            name: None,
        }
    }

    #[test]
    fn links_are_index_image_record_in_order() {
        let links = image_links(&item(), "http://api/items/42");
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/", "http://cdn/42.png", "http://api/items/42"]);
        let rels: Vec<&str> = links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, ["All Images", "Raw Image", "HAL record"]);
    }

    #[test]
    fn page_shows_image_and_hashtag() {
        let item = item();
        let links = image_links(&item, "http://api/items/42");
        let page = image_page(&item, "#devnexus", &links).into_string();
        assert!(page.contains(r#"src="http://cdn/42.png""#));
        assert!(page.contains("#devnexus"));
        assert!(page.contains(r#"href="http://api/items/42" rel="HAL record""#));
    }

    #[test]
    fn record_link_is_escaped() {
        let item = item();
        let links = image_links(&item, "http://api/x?a=1&b=\"2\"");
        let page = image_page(&item, "", &links).into_string();
        assert!(page.contains("a=1&amp;b=&quot;2&quot;"));
    }
}
