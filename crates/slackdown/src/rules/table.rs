//! Fixed-width tables inside a code block.
//!
//! ```text
//! | Some content | is short             | but                        |
//! |--------------|----------------------|----------------------------|
//! |     But      | some is              | absurdly and stupidly long |
//! |--------------|----------------------|----------------------------|
//! |    It's also | cool to align on the |                      right |
//! ```

use slackdown_core::MrkdwnOptions;

use super::Format;
use crate::node::Element;
use crate::utilities::{char_len, escape_mrkdwn};

/// Renders `<table>` rows and cells as a padded pseudo-table
#[derive(Debug, Clone, Copy, Default)]
pub struct Table;

/// Horizontal alignment of a cell, from its `align` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Alignment for an `align` value; missing or unknown values align left
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("right") => Align::Right,
            Some("center") => Align::Center,
            _ => Align::Left,
        }
    }

    /// Pad `text` with spaces to `width` characters
    pub fn pad(self, text: &str, width: usize) -> String {
        let gap = width.saturating_sub(char_len(text));
        match self {
            Align::Left => format!("{}{}", text, " ".repeat(gap)),
            Align::Right => format!("{}{}", " ".repeat(gap), text),
            Align::Center => {
                let before = gap / 2;
                let after = gap - before;
                format!("{}{}{}", " ".repeat(before), text, " ".repeat(after))
            }
        }
    }
}

fn cells(row: &Element) -> Vec<&Element> {
    row.element_children()
        .filter(|cell| cell.tag_name == "td" || cell.tag_name == "th")
        .collect()
}

/// Text of the cell's first child, the part that gets aligned
fn cell_text(cell: &Element) -> String {
    cell.children
        .first()
        .map(|child| child.text_content())
        .unwrap_or_default()
}

impl Format for Table {
    fn format(&self, _: &str, element: &Element, options: &MrkdwnOptions) -> String {
        let rows: Vec<Vec<&Element>> = element.find_all("tr").into_iter().map(cells).collect();
        if rows.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = Vec::new();
        for row in &rows {
            for (idx, cell) in row.iter().enumerate() {
                let len = char_len(&cell.text_content());
                match widths.get_mut(idx) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }

        let theme = options.table_style.theme();

        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                let formatted: Vec<String> = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| {
                        let padded = Align::from_attr(cell.attr("align")).pad(&cell_text(cell), *width);
                        if options.escape_entities {
                            escape_mrkdwn(&padded)
                        } else {
                            padded
                        }
                    })
                    .collect();
                format!(
                    "{}{}{}\n",
                    theme.row_prefix,
                    formatted.join(theme.column_separator),
                    theme.row_suffix
                )
            })
            .collect();

        let separator = format!(
            "{}{}{}\n",
            theme.line_prefix,
            widths
                .iter()
                .map(|width| theme.line_pad.repeat(*width))
                .collect::<Vec<_>>()
                .join(theme.line_separator),
            theme.line_suffix
        );

        format!("{}{}{}", options.fence, lines.join(&separator), options.fence)
    }
}
