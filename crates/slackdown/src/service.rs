//! SlackdownService - the main entry point for HTML to mrkdwn conversion.

use slackdown_core::MrkdwnOptions;

use crate::node::{Element, Node};
use crate::rules::{Rule, Rules};
use crate::utilities::{escape_mrkdwn, is_ignored, is_inline};

/// Renders node trees to mrkdwn and assembles them into Slack messages.
///
/// Rendering is a pure function of the tree and the options; the service can
/// be shared between threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct SlackdownService {
    options: MrkdwnOptions,
    rules: Rules,
}

impl SlackdownService {
    /// Create a new SlackdownService with default options
    pub fn new() -> Self {
        Self {
            options: MrkdwnOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a SlackdownService with custom options
    pub fn with_options(options: MrkdwnOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Get the current options
    pub fn options(&self) -> &MrkdwnOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut MrkdwnOptions {
        &mut self.options
    }

    /// Add a custom rule, replacing the built-in one for that tag if any
    pub fn add_rule(&mut self, tag: &str, rule: Rule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Remove the rule for a tag so it falls back to plain recursion
    pub fn remove_rule(&mut self, tag: &str) -> &mut Self {
        self.rules.remove(tag);
        self
    }

    /// Render any node to mrkdwn
    pub fn render(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => self.render_text(text),
            Node::Element(element) => self.render_element(element),
        }
    }

    /// Plain strings pass through untouched, so already rendered mrkdwn
    /// renders to itself.
    pub fn render_str(&self, text: &str) -> String {
        text.to_string()
    }

    /// Render an element and its subtree to mrkdwn
    pub fn render_element(&self, element: &Element) -> String {
        // dl and button content only surfaces through the fields and actions
        if is_ignored(&element.tag_name) {
            return String::new();
        }

        let rule = self.rules.for_tag(&element.tag_name);
        if rule.is_none() && element.children.is_empty() {
            return element.text_content();
        }

        let content = self.render_children(element);
        match rule {
            Some(rule) => rule.replace(&content, element, &self.options),
            None => content,
        }
    }

    /// Parse an HTML fragment and render it to mrkdwn
    #[cfg(feature = "html")]
    pub fn render_html(&self, html: &str) -> String {
        self.render(&crate::html::parse_fragment(html))
    }

    /// Children flow inline when all of them are text or inline elements,
    /// otherwise each one goes on its own line.
    fn render_children(&self, element: &Element) -> String {
        let separator = if element.children.iter().all(is_inline_node) {
            ""
        } else {
            "\n"
        };

        element
            .children
            .iter()
            .map(|child| self.render(child))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn render_text(&self, text: &str) -> String {
        if self.options.escape_entities {
            escape_mrkdwn(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for SlackdownService {
    fn default() -> Self {
        Self::new()
    }
}

fn is_inline_node(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Element(element) => is_inline(&element.tag_name),
    }
}
