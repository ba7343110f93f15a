//! HTML text extraction
//!
//! Walks a parsed HTML tree and collects visible text, dropping the
//! subtrees of tags that never render. Whitespace is collapsed so the
//! result is a single line of space-separated words, ready for indexing.

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree carries no visible text
const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Extracts visible text from an HTML document
///
/// # Arguments
///
/// * `html` - Raw HTML to distill
///
/// # Returns
///
/// The document's visible text with all whitespace runs collapsed to
/// single spaces. Parsing is tolerant, so inputs with no extractable text
/// come back as an empty string rather than an error.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces: Vec<String> = Vec::new();
    collect_text(document.root_element(), &mut pieces);

    let joined = pieces.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Appends the trimmed text of every descendant, skipping non-visible tags
fn collect_text(element: ElementRef, pieces: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, pieces);
                }
            }
            _ => {}
        }
    }
}
