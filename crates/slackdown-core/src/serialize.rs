//! JSON serialization of converted messages

use crate::message::SlackMessage;

/// Serialize a message to the JSON body expected by Slack
pub fn to_json(message: &SlackMessage, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(message)
    } else {
        serde_json::to_string(message)
    }
}

/// Serialize a message to a JSON value
pub fn to_value(message: &SlackMessage) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(message)
}
