//! Rule and Format types for HTML conversion.

use std::sync::Arc;

use slackdown_core::MrkdwnOptions;

use crate::node::Element;

/// A formatting strategy for one kind of element.
///
/// `content` is the element's children already rendered to mrkdwn. Inline
/// rules wrap it; structural rules (lists, tables) ignore it and walk
/// `element` themselves.
pub trait Format: Send + Sync {
    fn format(&self, content: &str, element: &Element, options: &MrkdwnOptions) -> String;
}

impl<F> Format for F
where
    F: Fn(&str, &Element, &MrkdwnOptions) -> String + Send + Sync,
{
    fn format(&self, content: &str, element: &Element, options: &MrkdwnOptions) -> String {
        self(content, element, options)
    }
}

/// A rule defines how to convert a matched HTML element to mrkdwn
#[derive(Clone)]
pub struct Rule {
    format: Arc<dyn Format>,
}

impl Rule {
    /// Create a new rule from a replacement function
    pub fn new<F>(replacement: F) -> Self
    where
        F: Fn(&str, &Element, &MrkdwnOptions) -> String + Send + Sync + 'static,
    {
        Self::from_format(replacement)
    }

    /// Create a rule from a formatting strategy
    pub fn from_format<F>(format: F) -> Self
    where
        F: Format + 'static,
    {
        Self {
            format: Arc::new(format),
        }
    }

    /// Apply this rule's replacement
    pub fn replace(&self, content: &str, element: &Element, options: &MrkdwnOptions) -> String {
        self.format.format(content, element, options)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
