//! # slackdown
//!
//! Convert HTML node trees to Slack mrkdwn, message attachments and dialogs.
//!
//! ## Design
//!
//! The converter works on a small [`Node`] tree rather than on HTML strings.
//! Any parser can produce that tree; the optional `html` feature (on by
//! default) adapts [scraper](https://docs.rs/scraper)'s output.
//!
//! - **Rendering**: each tag with a [`Rule`] is formatted by it, everything
//!   else is walked recursively, inline children joined on one line and block
//!   children on separate lines.
//! - **Assembly**: every `<section>` becomes an attachment with its `<dl>` as
//!   fields and its `<button>`s as actions. A `<body class="modal">` becomes a
//!   dialog built from its `<form>`.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use slackdown::{Node, SlackdownService};
//!
//! let service = SlackdownService::new();
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! assert_eq!(service.render(&h1), "*Hello World*");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use slackdown::SlackdownService;
//!
//! let service = SlackdownService::new();
//! let message = service
//!     .assemble_html("<body><section><p>Hello <em>World</em></p></section></body>")
//!     .unwrap();
//! assert_eq!(message.as_attachments().unwrap()[0].text, "Hello _World_");
//! ```

mod attachments;
mod attributes;
mod buttons;
mod dialog;
mod fields;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;
mod utilities;

pub use attachments::MODAL_CLASS;
pub use attributes::map_attributes;
pub use buttons::extract_buttons;
pub use dialog::build_dialog;
#[cfg(feature = "html")]
pub use html::{parse_fragment, parse_html};
pub use node::{Element, Node};
pub use rules::{Align, Format, Numbering, OrderedList, Rule, Rules, Table, UnorderedList};
pub use service::SlackdownService;
pub use utilities::{escape_mrkdwn, is_ignored, is_inline, truncate_chars};

pub use slackdown_core::{
    Action, ActionStyle, Attachment, Confirmation, Dialog, DialogElement, Field, MrkdwnOptions,
    SlackMessage, TableStyle,
};

/// Error type for slackdown operations
#[derive(Debug, thiserror::Error)]
pub enum SlackdownError {
    #[error("form has no <input type=\"submit\">")]
    MissingSubmit,

    #[error("form has no <header>")]
    MissingHeader,

    #[error("modal body has no <form>")]
    MissingForm,

    #[error("malformed {attribute} attribute on <{tag}>: {source}")]
    MalformedAttribute {
        tag: String,
        attribute: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlackdownError>;
