//! `<button>` elements to attachment actions.

use slackdown_core::{Action, ActionStyle, Confirmation};

use crate::node::Element;
use crate::{Result, SlackdownError};

/// Convert every `<button>` under `element` to a Slack action.
///
/// Returns `Ok(None)` when there is no button. Fails only when a `confirm`
/// attribute is not a valid confirmation object.
pub fn extract_buttons(element: &Element) -> Result<Option<Vec<Action>>> {
    let buttons = element.find_all("button");
    if buttons.is_empty() {
        return Ok(None);
    }

    let actions = buttons
        .into_iter()
        .map(button_to_action)
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(actions))
}

fn button_to_action(button: &Element) -> Result<Action> {
    let mut action = Action::button(button.text_content().trim());

    action.name = button.attr("name").map(str::to_string);
    action.value = button
        .attr("value")
        .or_else(|| button.attr("name"))
        .map(str::to_string);
    action.url = button.attr("href").map(str::to_string);
    action.confirm = button.attr("confirm").map(parse_confirm).transpose()?;
    action.style = button_style(button);

    Ok(action)
}

fn parse_confirm(raw: &str) -> Result<Confirmation> {
    serde_json::from_str(raw).map_err(|source| SlackdownError::MalformedAttribute {
        tag: "button".to_string(),
        attribute: "confirm".to_string(),
        source,
    })
}

/// First of primary, danger, normal found in the class list
fn button_style(button: &Element) -> Option<ActionStyle> {
    ActionStyle::ALL
        .into_iter()
        .find(|style| button.has_class(style.class_name()))
}
