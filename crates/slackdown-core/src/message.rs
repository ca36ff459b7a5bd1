//! Message attachments, fields and button actions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dialog::Dialog;

/// Attachment color used when a section does not set one.
pub const DEFAULT_COLOR: &str = "good";

/// Attachment keys Slack should parse as mrkdwn.
pub const MRKDWN_IN: [&str; 3] = ["text", "pretext", "fields"];

/// Keys owned by the typed attachment slots; same-named HTML attributes never override them.
const RESERVED_KEYS: [&str; 4] = ["fields", "actions", "text", "mrkdwn_in"];

/// The converted output of one document.
///
/// Serializes either as `{ "attachments": [...] }` or as a bare dialog object,
/// so the JSON can be handed to the matching Slack API call unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SlackMessage {
    /// Regular message, one attachment per section
    Attachments { attachments: Vec<Attachment> },
    /// Modal dialog built from a form
    Dialog(Dialog),
}

impl SlackMessage {
    pub fn attachments(attachments: Vec<Attachment>) -> Self {
        SlackMessage::Attachments { attachments }
    }

    pub fn dialog(dialog: Dialog) -> Self {
        SlackMessage::Dialog(dialog)
    }

    /// The attachments, if this is a regular message
    pub fn as_attachments(&self) -> Option<&[Attachment]> {
        match self {
            SlackMessage::Attachments { attachments } => Some(attachments),
            SlackMessage::Dialog(_) => None,
        }
    }

    /// The dialog, if this is a modal
    pub fn as_dialog(&self) -> Option<&Dialog> {
        match self {
            SlackMessage::Dialog(dialog) => Some(dialog),
            SlackMessage::Attachments { .. } => None,
        }
    }
}

/// A Slack message attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub color: String,

    /// Attribute-mapped keys from the source section (`author_name`, `pretext`, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,

    pub text: String,

    pub mrkdwn_in: Vec<String>,
}

impl Attachment {
    /// Create an attachment with the default color and the given mrkdwn text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            extra: IndexMap::new(),
            fields: None,
            actions: None,
            text: text.into(),
            mrkdwn_in: MRKDWN_IN.iter().map(|key| key.to_string()).collect(),
        }
    }

    /// Merge attribute-mapped keys into the attachment.
    ///
    /// `color` overrides the default color. Keys backed by typed slots
    /// (`fields`, `actions`, `text`, `mrkdwn_in`) are dropped. Everything else
    /// lands in `extra`, later values replacing earlier ones.
    pub fn apply_attributes(&mut self, attributes: IndexMap<String, String>) {
        for (key, value) in attributes {
            if key == "color" {
                self.color = value;
            } else if !RESERVED_KEYS.contains(&key.as_str()) {
                self.extra.insert(key, value);
            }
        }
    }
}

/// A title/value pair shown in the attachment's field grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Visual style of an interactive button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Primary,
    Danger,
    Normal,
}

impl ActionStyle {
    /// Recognized styles in priority order
    pub const ALL: [ActionStyle; 3] = [ActionStyle::Primary, ActionStyle::Danger, ActionStyle::Normal];

    /// The class name selecting this style
    pub fn class_name(self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Danger => "danger",
            ActionStyle::Normal => "normal",
        }
    }
}

/// An attachment button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Turns the button into a link button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirmation>,

    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
}

impl Action {
    /// A plain button with the given label
    pub fn button(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: None,
            value: None,
            url: None,
            confirm: None,
            action_type: "button".to_string(),
            style: None,
        }
    }
}

/// Confirmation popup shown before a button action runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub text: String,

    #[serde(
        default,
        alias = "confirm_label",
        alias = "confirm-label",
        skip_serializing_if = "Option::is_none"
    )]
    pub ok_text: Option<String>,

    #[serde(
        default,
        alias = "deny_label",
        alias = "deny-label",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_text: Option<String>,
}
