//! `<form>` to Slack dialog.
//!
//! ```html
//! <form action="callback">
//!   <header>Dialog title</header>
//!   <label>
//!     Email
//!     <input type="email" name="email" required>
//!   </label>
//!   <input type="submit" value="Send">
//! </form>
//! ```

use indexmap::IndexMap;
use slackdown_core::{
    Dialog, DialogElement, OptionGroup, SelectElement, SelectOption, TextElement,
    DIALOG_LABEL_MAX, DIALOG_TITLE_MAX,
};

use crate::attributes::map_attributes;
use crate::node::Element;
use crate::utilities::truncate_chars;
use crate::{Result, SlackdownError};

/// Attributes consumed by the builder instead of copied onto the element
const CONSUMED_ATTRIBUTES: &[&str] = &["type", "required"];

/// Keys owned by the typed element fields
const RESERVED_KEYS: &[&str] = &["label", "optional", "subtype", "options", "option_groups"];

/// Build a dialog from a `<form>`.
///
/// The form needs an `<input type="submit">` and a `<header>`. Each outermost
/// `<label>` holding an input, select or textarea becomes one element; other
/// labels are skipped.
pub fn build_dialog(form: &Element) -> Result<Dialog> {
    let submit = form
        .find_all("input")
        .into_iter()
        .find(|input| input.attr("type") == Some("submit"))
        .ok_or(SlackdownError::MissingSubmit)?;
    let header = form.find("header").ok_or(SlackdownError::MissingHeader)?;

    let action = form.attr("action").map(str::to_string);

    let elements: Vec<DialogElement> = form
        .find_outermost("label")
        .into_iter()
        .filter_map(label_to_element)
        .collect();

    let dialog = Dialog {
        title: truncate_chars(header.text_content().trim(), DIALOG_TITLE_MAX),
        callback_id: action.clone(),
        state: action,
        submit_label: submit
            .attr("value")
            .map(|value| truncate_chars(value, DIALOG_TITLE_MAX))
            .unwrap_or_default(),
        elements,
    };

    tracing::debug!(
        title = %dialog.title,
        elements = dialog.elements.len(),
        "built dialog"
    );

    Ok(dialog)
}

fn label_to_element(label: &Element) -> Option<DialogElement> {
    let text = label_text(label);

    if let Some(input) = label.find("input") {
        return Some(DialogElement::Text(text_element(input, text, false)));
    }
    if let Some(select) = label.find("select") {
        return Some(DialogElement::Select(select_element(select, text)));
    }
    if let Some(textarea) = label.find("textarea") {
        return Some(DialogElement::Textarea(text_element(textarea, text, true)));
    }

    tracing::debug!(label = %text, "label without a form control, skipping");
    None
}

/// The label's own first text node, not the control's
fn label_text(label: &Element) -> String {
    label
        .first_text_child()
        .map(|text| truncate_chars(text.trim(), DIALOG_LABEL_MAX))
        .unwrap_or_default()
}

fn control_attributes(control: &Element) -> IndexMap<String, String> {
    map_attributes(control)
        .into_iter()
        .filter(|(key, _)| {
            !CONSUMED_ATTRIBUTES.contains(&key.as_str()) && !RESERVED_KEYS.contains(&key.as_str())
        })
        .collect()
}

/// An `<input>`'s `type="text"` is the default and gets no subtype; any
/// `type` on a `<textarea>` is kept.
fn text_element(control: &Element, label: String, keep_text_type: bool) -> TextElement {
    let subtype = control
        .attr("type")
        .filter(|kind| keep_text_type || *kind != "text")
        .map(str::to_string);

    TextElement {
        label,
        subtype,
        optional: !control.has_attr("required"),
        attributes: control_attributes(control),
    }
}

fn select_element(select: &Element, label: String) -> SelectElement {
    let mut attributes = control_attributes(select);
    if let Some(selected) = select
        .find_all("option")
        .into_iter()
        .find(|option| option.has_attr("selected"))
    {
        attributes.insert("value".to_string(), option_value(selected));
    }

    let groups: Vec<&Element> = select.find_all("optgroup");
    let (options, option_groups) = if groups.is_empty() {
        let options = select
            .element_children()
            .filter(|child| child.tag_name == "option")
            .map(select_option)
            .collect();
        (Some(options), None)
    } else {
        let groups = groups
            .into_iter()
            .map(|group| OptionGroup {
                label: group.attr("label").map(str::to_string),
                options: group.find_all("option").into_iter().map(select_option).collect(),
            })
            .collect();
        (None, Some(groups))
    };

    SelectElement {
        label,
        optional: !select.has_attr("required"),
        attributes,
        options,
        option_groups,
    }
}

/// An option without `value` submits its text
fn option_value(option: &Element) -> String {
    option
        .attr("value")
        .map(str::to_string)
        .unwrap_or_else(|| option.text_content().trim().to_string())
}

fn select_option(option: &Element) -> SelectOption {
    SelectOption {
        value: option_value(option),
        label: option.text_content().trim().to_string(),
    }
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use serde_json::json;

    fn dialog(html: &str) -> Result<Dialog> {
        let root = parse_fragment(html);
        let form = root.as_element().unwrap().find("form").unwrap();
        build_dialog(form)
    }

    #[test]
    fn test_action_header_and_submit() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>Title of your sextape</header>
              <label>
                Email
                <input type="email" required="required"/>
              </label>
              <input type="submit" value="bar"/>
            </form>"#,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "title": "Title of your sextape",
                "callback_id": "foo",
                "state": "foo",
                "submit_label": "bar",
                "elements": [
                    { "type": "text", "label": "Email", "subtype": "email", "optional": false }
                ]
            })
        );
    }

    #[test]
    fn test_text_inputs() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>A fine form for fun</header>
              <label>
                Example label
                <input type="text" name="foo" value="bar" placeholder="baz" hint="quz"/>
              </label>
              <label>Email input <input type="email" name="foo" required="required"/></label>
              <label>Number input <input type="number" name="foo"/></label>
              <label>Telephone input <input type="tel" name="foo"/></label>
              <label>URL input <input type="url" name="foo" max-length="20"/></label>
              <input type="submit" value="bar"/>
            </form>"#,
        )
        .unwrap();

        let elements = serde_json::to_value(&output.elements).unwrap();
        assert_eq!(
            elements[0],
            json!({
                "type": "text",
                "label": "Example label",
                "optional": true,
                "name": "foo",
                "value": "bar",
                "placeholder": "baz",
                "hint": "quz"
            })
        );
        assert_eq!(elements[1]["optional"], json!(false));
        assert_eq!(elements[1]["subtype"], json!("email"));
        assert_eq!(elements[2]["subtype"], json!("number"));
        assert_eq!(elements[3]["subtype"], json!("tel"));
        assert_eq!(elements[4]["subtype"], json!("url"));
        assert_eq!(elements[4]["max_length"], json!("20"));
        assert_eq!(elements[4]["type"], json!("text"));
    }

    #[test]
    fn test_select_with_options() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>Title of your sextape</header>
              <label>
                Select input
                <select name="foo">
                  <option value="1" selected="selected">Some label</option>
                  <option value="2">Another label</option>
                </select>
              </label>
              <input type="submit" value="bar"/>
            </form>"#,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&output.elements[0]).unwrap(),
            json!({
                "type": "select",
                "label": "Select input",
                "optional": true,
                "name": "foo",
                "value": "1",
                "options": [
                    { "value": "1", "label": "Some label" },
                    { "value": "2", "label": "Another label" }
                ]
            })
        );
    }

    #[test]
    fn test_select_with_option_groups() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>Title of your sextape</header>
              <label>
                Select input
                <select name="foo">
                  <optgroup label="First group">
                    <option value="1">Some label</option>
                    <option value="2">Another label</option>
                  </optgroup>
                  <optgroup label="Second group">
                    <option value="3">A final label</option>
                  </optgroup>
                </select>
              </label>
              <input type="submit" value="bar"/>
            </form>"#,
        )
        .unwrap();

        let DialogElement::Select(select) = &output.elements[0] else {
            panic!("expected a select element");
        };
        assert!(select.options.is_none());
        let groups = select.option_groups.as_ref().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label.as_deref(), Some("First group"));
        assert_eq!(
            groups[0].options,
            vec![
                SelectOption { value: "1".into(), label: "Some label".into() },
                SelectOption { value: "2".into(), label: "Another label".into() },
            ]
        );
        assert_eq!(groups[1].label.as_deref(), Some("Second group"));
        assert_eq!(
            groups[1].options,
            vec![SelectOption { value: "3".into(), label: "A final label".into() }]
        );
    }

    #[test]
    fn test_textareas() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>Title of your sextape</header>
              <label>Text area <textarea min-length="5" max-length="10"></textarea></label>
              <label>Email version <textarea type="email" required></textarea></label>
              <input type="submit" value="bar"/>
            </form>"#,
        )
        .unwrap();

        let elements = serde_json::to_value(&output.elements).unwrap();
        assert_eq!(
            elements[0],
            json!({
                "type": "textarea",
                "label": "Text area",
                "optional": true,
                "min_length": "5",
                "max_length": "10"
            })
        );
        assert_eq!(
            elements[1],
            json!({
                "type": "textarea",
                "label": "Email version",
                "subtype": "email",
                "optional": false
            })
        );
    }

    #[test]
    fn test_labels_without_controls_are_ignored() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>Title of your sextape</header>
              <label>
                A useless label
                <p>A useless paragraph</p>
              </label>
              <input type="submit"/>
            </form>"#,
        )
        .unwrap();
        assert!(output.elements.is_empty());
        assert_eq!(output.submit_label, "");
    }

    #[test]
    fn test_missing_submit() {
        let err = dialog("<form><header>Title</header></form>").unwrap_err();
        assert!(matches!(err, SlackdownError::MissingSubmit));
    }

    #[test]
    fn test_missing_header() {
        let err = dialog(r#"<form><input type="submit" value="Go"></form>"#).unwrap_err();
        assert!(matches!(err, SlackdownError::MissingHeader));
    }

    #[test]
    fn test_no_action_means_no_callback() {
        let output = dialog(r#"<form><header>T</header><input type="submit"></form>"#).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("callback_id").is_none());
        assert!(value.get("state").is_none());
    }

    #[test]
    fn test_truncation() {
        let output = dialog(
            r#"
            <form action="foo">
              <header>A header that is much too long for Slack</header>
              <label>A label that is also far too long here <input name="x"></label>
              <label>Exactly twenty-four char <input name="y"></label>
              <label>Short <input name="z"></label>
              <input type="submit" value="A submit label that goes on"/>
            </form>"#,
        )
        .unwrap();

        assert_eq!(output.title, "A header that is much t");
        assert_eq!(output.title.chars().count(), DIALOG_TITLE_MAX);
        assert_eq!(output.submit_label, "A submit label that goe");
        assert_eq!(output.elements[0].label(), "A label that is also far");
        assert_eq!(output.elements[0].label().chars().count(), DIALOG_LABEL_MAX);
        assert_eq!(output.elements[1].label(), "Exactly twenty-four char");
        assert_eq!(output.elements[2].label(), "Short");
    }
}
