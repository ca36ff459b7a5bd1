//! Configuration options for mrkdwn rendering

/// Table drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Markdown-like pipes and dashes
    #[default]
    Ascii,
    /// Box-drawing characters
    Unicode,
}

/// The strings a table is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTheme {
    pub row_prefix: &'static str,
    pub row_suffix: &'static str,
    pub column_separator: &'static str,
    pub line_prefix: &'static str,
    pub line_suffix: &'static str,
    pub line_pad: &'static str,
    pub line_separator: &'static str,
}

impl TableStyle {
    pub fn theme(self) -> TableTheme {
        match self {
            TableStyle::Ascii => TableTheme {
                row_prefix: "| ",
                row_suffix: " |",
                column_separator: " | ",
                line_prefix: "|-",
                line_suffix: "-|",
                line_pad: "-",
                line_separator: "-|-",
            },
            TableStyle::Unicode => TableTheme {
                row_prefix: "║ ",
                row_suffix: " ║",
                column_separator: " ┃ ",
                line_prefix: "╟─",
                line_suffix: "─╢",
                line_pad: "─",
                line_separator: "─╂─",
            },
        }
    }
}

/// Options for mrkdwn rendering
#[derive(Debug, Clone)]
pub struct MrkdwnOptions {
    /// Unordered list marker
    pub bullet: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Escape `&`, `<` and `>` in text leaves
    pub escape_entities: bool,

    /// Table drawing style
    pub table_style: TableStyle,
}

impl Default for MrkdwnOptions {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            fence: "```".to_string(),
            escape_entities: true,
            table_style: TableStyle::Ascii,
        }
    }
}
