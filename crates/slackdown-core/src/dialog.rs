//! Interactive dialog model

use indexmap::IndexMap;
use serde::Serialize;

/// Maximum length of a dialog title or submit label
pub const DIALOG_TITLE_MAX: usize = 23;

/// Maximum length of a dialog element label
pub const DIALOG_LABEL_MAX: usize = 24;

/// A modal dialog built from an HTML form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dialog {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    pub submit_label: String,

    pub elements: Vec<DialogElement>,
}

/// A dialog input, tagged by its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DialogElement {
    Text(TextElement),
    Textarea(TextElement),
    Select(SelectElement),
}

impl DialogElement {
    pub fn label(&self) -> &str {
        match self {
            DialogElement::Text(e) | DialogElement::Textarea(e) => &e.label,
            DialogElement::Select(e) => &e.label,
        }
    }
}

/// Single-line or multi-line text input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub label: String,

    /// `email`, `number`, `tel` or `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    pub optional: bool,

    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,
}

/// Drop-down menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectElement {
    pub label: String,

    pub optional: bool,

    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_groups: Option<Vec<OptionGroup>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
}
