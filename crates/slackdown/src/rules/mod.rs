//! Rule system for HTML to mrkdwn conversion.

mod list;
mod mrkdwn;
mod rule;
mod table;

pub use list::{Numbering, OrderedList, UnorderedList};
pub use mrkdwn::mrkdwn_rules;
pub use rule::{Format, Rule};
pub use table::{Align, Table};

use indexmap::IndexMap;

/// Formatting rules keyed by lower-cased tag name.
///
/// Tags without a rule fall back to the renderer's generic inline/block
/// recursion.
#[derive(Debug, Clone)]
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in mrkdwn rules
    pub fn new() -> Self {
        let mut rules = Self::empty();
        for (tags, rule) in mrkdwn_rules() {
            rules.add_for_tags(tags, rule);
        }
        rules
    }

    /// A registry without any rules
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add a rule for one tag, replacing any existing rule
    pub fn add(&mut self, tag: &str, rule: Rule) {
        self.rules.insert(tag.to_lowercase(), rule);
    }

    /// Add the same rule for several tags
    pub fn add_for_tags(&mut self, tags: &[&str], rule: Rule) {
        for tag in tags {
            self.add(tag, rule.clone());
        }
    }

    /// Remove the rule for a tag
    pub fn remove(&mut self, tag: &str) -> Option<Rule> {
        self.rules.shift_remove(tag.to_lowercase().as_str())
    }

    /// Find the rule for a tag
    pub fn for_tag(&self, tag: &str) -> Option<&Rule> {
        self.rules.get(tag)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
