//! Unordered and ordered lists.

use slackdown_core::MrkdwnOptions;

use super::Format;
use crate::node::Element;
use crate::utilities::{char_len, escape_mrkdwn};

/// Renders `<ul>` as one `• item` line per `<li>`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnorderedList;

/// Renders `<ol>` with the numbering selected by its `type` attribute
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedList;

/// Numbering scheme of an ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// `type="1"`: 1, 2, 3
    Decimal,
    /// `type="A"`: A, B, ..., Z, AA
    UpperAlpha,
    /// `type="a"`
    LowerAlpha,
    /// `type="I"`: I, II, III
    UpperRoman,
    /// `type="i"`
    LowerRoman,
}

impl Numbering {
    /// Numbering for an `<ol type>` value; unknown values number with decimals
    pub fn from_type(list_type: Option<&str>) -> Self {
        match list_type {
            Some("A") => Numbering::UpperAlpha,
            Some("a") => Numbering::LowerAlpha,
            Some("I") => Numbering::UpperRoman,
            Some("i") => Numbering::LowerRoman,
            _ => Numbering::Decimal,
        }
    }

    /// Prefix for the item at zero-based `index`
    pub fn prefix(self, index: usize) -> String {
        match self {
            Numbering::Decimal => (index + 1).to_string(),
            Numbering::UpperAlpha => to_letters(index),
            Numbering::LowerAlpha => to_letters(index).to_lowercase(),
            Numbering::UpperRoman => to_roman(index + 1),
            Numbering::LowerRoman => to_roman(index + 1).to_lowercase(),
        }
    }

    pub fn is_roman(self) -> bool {
        matches!(self, Numbering::UpperRoman | Numbering::LowerRoman)
    }
}

/// Zero-based index to A, B, ..., Z, AA, AB, ...
fn to_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn to_roman(mut n: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

fn item_text(li: &Element, options: &MrkdwnOptions) -> String {
    let text = li.text_content();
    if options.escape_entities {
        escape_mrkdwn(&text)
    } else {
        text
    }
}

impl Format for UnorderedList {
    fn format(&self, _: &str, element: &Element, options: &MrkdwnOptions) -> String {
        element
            .find_all("li")
            .into_iter()
            .map(|li| format!("{} {}", options.bullet, item_text(li, options)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Format for OrderedList {
    fn format(&self, _: &str, element: &Element, options: &MrkdwnOptions) -> String {
        let numbering = Numbering::from_type(element.attr("type"));
        let items = element.find_all("li");

        if numbering.is_roman() {
            // Right-align the numerals so the periods line up; inline code
            // keeps Slack from collapsing the padding.
            let width = (0..items.len())
                .map(|idx| char_len(&numbering.prefix(idx)))
                .max()
                .unwrap_or(0);

            items
                .iter()
                .enumerate()
                .map(|(idx, li)| {
                    format!(
                        "`{:>width$}.` {}",
                        numbering.prefix(idx),
                        item_text(li, options),
                        width = width
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            items
                .iter()
                .enumerate()
                .map(|(idx, li)| format!("{}. {}", numbering.prefix(idx), item_text(li, options)))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
