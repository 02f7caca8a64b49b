//! Snippet text extraction
//!
//! Search snippets arrive as HTML fragments with highlight markup. The markup
//! comes from the server without any sanitization guarantee, so it is never
//! interpreted here: the fragment is parsed and reduced to its visible text
//! content before anything reaches the screen.

use scraper::Html;

/// Extract the plain text of an HTML snippet fragment.
///
/// Tags are dropped, entities are decoded, script and style bodies are
/// skipped, and runs of whitespace collapse to single spaces.
pub fn plain_text(snippet: &str) -> String {
    let fragment = Html::parse_fragment(snippet);

    let mut out = String::new();
    for node in fragment.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .map(|element| matches!(element.name(), "script" | "style"))
                .unwrap_or(false);
            if !hidden {
                out.push_str(&text.text);
            }
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_input_passes_through() {
        assert_eq!(plain_text("hello world"), "hello world");
    }

    #[test]
    fn highlight_tags_are_stripped() {
        assert_eq!(plain_text("<b>hi</b>"), "hi");
        assert_eq!(
            plain_text("Rust <em>async</em> runtimes in <b>2024</b>"),
            "Rust async runtimes in 2024"
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(plain_text("fish &amp; chips"), "fish & chips");
        assert_eq!(plain_text("1 &lt; 2"), "1 < 2");
    }

    #[test]
    fn script_and_style_bodies_are_dropped() {
        assert_eq!(plain_text("<script>alert('x')</script>safe"), "safe");
        assert_eq!(plain_text("<style>b { color: red }</style>text"), "text");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(plain_text("  a \n  <b> b </b>  c  "), "a b c");
    }

    #[test]
    fn empty_snippet_yields_empty_text() {
        assert_eq!(plain_text(""), "");
        assert_eq!(plain_text("<b></b>"), "");
    }
}
