//! HTML parsing support.
//!
//! Converts scraper's parse tree to the [`Node`] structure the converter
//! consumes.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::utilities::is_inline;

/// Tags whose whitespace-only text is content rather than layout
const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea"];

/// Parse a full HTML document into a Node tree rooted at `<html>`.
///
/// Use this for documents carrying a `<body>`, so that its class list can
/// switch the assembler to dialog mode.
///
/// # Example
///
/// ```rust
/// use slackdown::{parse_html, SlackdownService};
///
/// let root = parse_html("<body><section><h1>Hello</h1></section></body>");
/// let message = SlackdownService::new().assemble(&root).unwrap();
/// assert_eq!(message.as_attachments().unwrap()[0].text, "*Hello*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element(), false)
}

/// Parse an HTML fragment. The fragment's top-level nodes become children of
/// the returned `<html>` element.
pub fn parse_fragment(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element(), false)
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Whitespace-only text between tags is indentation, not content, unless it
/// separates two inline siblings, where it collapses to a single space.
/// Inside `<pre>` and `<textarea>` it is kept verbatim.
fn scraper_to_node(element: ElementRef, preserve: bool) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let preserve = preserve || PRESERVE_WHITESPACE.contains(&tag);

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    let children: Vec<_> = element.children().collect();
    for (idx, child) in children.iter().enumerate() {
        match child.value() {
            ScraperNode::Text(text) => {
                if preserve || !text.text.trim().is_empty() {
                    node.add_child(Node::text(&*text.text));
                } else if idx > 0
                    && idx + 1 < children.len()
                    && flows_inline(children[idx - 1].value())
                    && flows_inline(children[idx + 1].value())
                {
                    node.add_child(Node::text(" "));
                }
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(*child) {
                    node.add_child(scraper_to_node(child_element, preserve));
                }
            }
            _ => {}
        }
    }

    node
}

/// Whether a sibling takes part in inline flow: visible text or an inline tag
fn flows_inline(node: &ScraperNode) -> bool {
    match node {
        ScraperNode::Text(text) => !text.text.trim().is_empty(),
        ScraperNode::Element(element) => is_inline(element.name()),
        _ => false,
    }
}
