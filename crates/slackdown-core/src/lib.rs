//! slackdown-core - Slack message model and rendering options
//!
//! This crate provides the output data structures produced by `slackdown`:
//! message attachments (with fields and button actions) and interactive
//! dialogs. Everything here is plain data that serializes to the JSON shape
//! Slack's APIs expect.
//!
//! # Architecture
//!
//! ```text
//!                            ┌──────────────┐ ──▶ { "attachments": [...] }
//! HTML Node Tree ───────────▶│ SlackMessage │
//!                            └──────────────┘ ──▶ { "title": ..., "elements": [...] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use slackdown_core::{Attachment, SlackMessage, to_json};
//!
//! let mut attachment = Attachment::new("*Deploy* finished");
//! attachment.color = "danger".to_string();
//!
//! let message = SlackMessage::attachments(vec![attachment]);
//! let json = to_json(&message, false).unwrap();
//! assert!(json.contains("\"color\":\"danger\""));
//! ```

mod dialog;
mod message;
mod options;
mod serialize;

pub use dialog::{
    Dialog, DialogElement, OptionGroup, SelectElement, SelectOption, TextElement, DIALOG_LABEL_MAX,
    DIALOG_TITLE_MAX,
};
pub use message::{
    Action, ActionStyle, Attachment, Confirmation, Field, SlackMessage, DEFAULT_COLOR, MRKDWN_IN,
};
pub use options::{MrkdwnOptions, TableStyle, TableTheme};
pub use serialize::{to_json, to_value};
