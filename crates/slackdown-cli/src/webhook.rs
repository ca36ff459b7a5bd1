//! Delivery to a Slack incoming webhook.
//!
//! Delivery is best effort: failures are logged and reported as `false`,
//! never as errors, so a bad webhook can't lose the converted output.

use serde::Serialize;
use serde_json::json;
use slackdown::SlackMessage;

/// Posts JSON payloads to one incoming webhook URL
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Post attachments or a dialog
    pub fn post_message(&self, message: &SlackMessage) -> bool {
        self.post(message)
    }

    /// Post a plain `{"text": ...}` message
    pub fn post_text(&self, text: &str) -> bool {
        self.post(&json!({ "text": text }))
    }

    fn post<T: Serialize>(&self, body: &T) -> bool {
        match ureq::post(&self.url).send_json(body) {
            Ok(response) => {
                tracing::info!(url = %self.url, status = %response.status(), "posted to webhook");
                true
            }
            Err(err) => {
                tracing::error!(url = %self.url, error = %err, "webhook delivery failed");
                false
            }
        }
    }
}
