//! Document to Slack message: one attachment per `<section>`, or a dialog
//! when the body is a modal.

use slackdown_core::{Attachment, SlackMessage};

use crate::attributes::map_attributes;
use crate::buttons::extract_buttons;
use crate::dialog::build_dialog;
use crate::node::{Element, Node};
use crate::service::SlackdownService;
use crate::{Result, SlackdownError};

/// Body class that turns the document into a dialog
pub const MODAL_CLASS: &str = "modal";

impl SlackdownService {
    /// Assemble a parsed document into a Slack message.
    ///
    /// When the `<body>` (or the root itself, for trees without one) has the
    /// `modal` class, its `<form>` becomes a dialog. Otherwise every
    /// `<section>` becomes one attachment, in document order.
    pub fn assemble(&self, root: &Node) -> Result<SlackMessage> {
        let Some(root) = root.as_element() else {
            return Ok(SlackMessage::attachments(Vec::new()));
        };
        let body = if root.tag_name == "body" {
            root
        } else {
            root.find("body").unwrap_or(root)
        };

        if body.has_class(MODAL_CLASS) {
            let form = body.find("form").ok_or(SlackdownError::MissingForm)?;
            return Ok(SlackMessage::dialog(build_dialog(form)?));
        }

        let attachments = body
            .find_all("section")
            .into_iter()
            .map(|section| self.section_to_attachment(section))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = attachments.len(), "assembled attachments");

        Ok(SlackMessage::attachments(attachments))
    }

    /// Parse an HTML document and assemble it
    #[cfg(feature = "html")]
    pub fn assemble_html(&self, html: &str) -> Result<SlackMessage> {
        self.assemble(&crate::html::parse_html(html))
    }

    /// Parse, assemble and serialize an HTML document in one go
    #[cfg(feature = "html")]
    pub fn assemble_json(&self, html: &str, pretty: bool) -> Result<String> {
        let message = self.assemble_html(html)?;
        Ok(slackdown_core::to_json(&message, pretty)?)
    }

    fn section_to_attachment(&self, section: &Element) -> Result<Attachment> {
        let mut attachment = Attachment::new(self.render_element(section));
        attachment.apply_attributes(map_attributes(section));
        attachment.fields = self.extract_fields(section);
        attachment.actions = extract_buttons(section)?;
        Ok(attachment)
    }
}
