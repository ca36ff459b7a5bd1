//! Slack mrkdwn rules for HTML to mrkdwn conversion.
//!
//! See <https://slack.com/help/articles/202288908-Format-your-messages>.

use super::{OrderedList, Rule, Table, UnorderedList};

const STRONG: &[&str] = &["strong", "b", "h1", "h2", "h3", "h4", "h5", "h6"];
const EMPHASIS: &[&str] = &["em", "i"];
const STRIKE: &[&str] = &["strike", "s", "del"];
const INLINE_QUOTE: &[&str] = &["q"];
const MULTILINE_QUOTE: &[&str] = &["textarea"];
const BLOCKQUOTE: &[&str] = &["blockquote"];
const CODE: &[&str] = &["code"];
const CODE_BLOCK: &[&str] = &["pre"];
const LINK: &[&str] = &["a"];
const LINE_BREAK: &[&str] = &["br"];
const UNORDERED_LIST: &[&str] = &["ul"];
const ORDERED_LIST: &[&str] = &["ol"];
const TABLE: &[&str] = &["table"];

/// Create all built-in rules, each with the tags it applies to
pub fn mrkdwn_rules() -> Vec<(&'static [&'static str], Rule)> {
    vec![
        (STRONG, strong_rule()),
        (EMPHASIS, emphasis_rule()),
        (STRIKE, strike_rule()),
        (INLINE_QUOTE, inline_quote_rule()),
        (MULTILINE_QUOTE, multiline_quote_rule()),
        (BLOCKQUOTE, blockquote_rule()),
        (CODE, code_rule()),
        (CODE_BLOCK, code_block_rule()),
        (LINK, link_rule()),
        (LINE_BREAK, line_break_rule()),
        (UNORDERED_LIST, Rule::from_format(UnorderedList)),
        (ORDERED_LIST, Rule::from_format(OrderedList)),
        (TABLE, Rule::from_format(Table)),
    ]
}

/// *bold*
fn strong_rule() -> Rule {
    Rule::new(|content, _, _| format!("*{}*", content))
}

/// _italic_
fn emphasis_rule() -> Rule {
    Rule::new(|content, _, _| format!("_{}_", content))
}

/// ~strikethrough~
fn strike_rule() -> Rule {
    Rule::new(|content, _, _| format!("~{}~", content))
}

fn inline_quote_rule() -> Rule {
    Rule::new(|content, _, _| format!(">{}", content))
}

/// `>>>` quotes everything after it, line breaks included
fn multiline_quote_rule() -> Rule {
    Rule::new(|content, _, _| format!(">>>{}", content))
}

/// Slack's `>` only spans one line, so each line gets its own marker
fn blockquote_rule() -> Rule {
    Rule::new(|content, _, _| {
        content
            .trim()
            .split('\n')
            .map(|line| format!(">{}", line))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn code_rule() -> Rule {
    Rule::new(|content, _, _| format!("`{}`", content))
}

fn code_block_rule() -> Rule {
    Rule::new(|content, _, options| format!("{}{}{}", options.fence, content, options.fence))
}

/// <https://destination|Label>, also <@user|Name> and <#channel|Name>
fn link_rule() -> Rule {
    Rule::new(|content, element, _| match element.attr("href") {
        Some(href) => format!("<{}|{}>", href, content),
        None => content.to_string(),
    })
}

fn line_break_rule() -> Rule {
    Rule::new(|_, _, _| "\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, Node};
    use slackdown_core::MrkdwnOptions;

    fn apply(tag: &str, content: &str) -> String {
        apply_to(Element::new(tag), content)
    }

    fn apply_to(element: Element, content: &str) -> String {
        let rules = mrkdwn_rules();
        let (_, rule) = rules
            .iter()
            .find(|(tags, _)| tags.contains(&element.tag_name.as_str()))
            .unwrap();
        rule.replace(content, &element, &MrkdwnOptions::default())
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(apply("b", "Bold"), "*Bold*");
        assert_eq!(apply("strong", "Bold"), "*Bold*");
        assert_eq!(apply("h3", "Heading"), "*Heading*");
        assert_eq!(apply("i", "Italic"), "_Italic_");
        assert_eq!(apply("em", "Italic"), "_Italic_");
        assert_eq!(apply("strike", "Strike"), "~Strike~");
        assert_eq!(apply("del", "Gone"), "~Gone~");
        assert_eq!(apply("code", "Code"), "`Code`");
        assert_eq!(apply("q", "Some inline quote"), ">Some inline quote");
    }

    #[test]
    fn test_multiline_formatting() {
        assert_eq!(apply("textarea", "Line 1\nLine 2"), ">>>Line 1\nLine 2");
        assert_eq!(apply("blockquote", "Line 1\nLine 2\nLine 3\n"), ">Line 1\n>Line 2\n>Line 3");
        assert_eq!(apply("pre", "let a = 1;\nlet b = a;"), "```let a = 1;\nlet b = a;```");
    }

    #[test]
    fn test_link() {
        let a = Node::element_with_attrs("a", vec![("href", "https://destination")]);
        let a = a.as_element().unwrap().clone();
        assert_eq!(apply_to(a, "Label"), "<https://destination|Label>");
        assert_eq!(apply("a", "No target"), "No target");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(apply("br", ""), "\n");
    }
}
