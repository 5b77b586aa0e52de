use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }\
nav.links a { margin-right: 1rem; }\
img.item { max-width: 100%; }\
.error-code { color: #888; font-family: monospace; }";

/// Renders the base HTML document structure.
pub fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                (content)
            }
        }
    }
}
