//! Command-line arguments and their mapping to rendering options.

use std::path::PathBuf;

use clap::Parser;
use slackdown::{MrkdwnOptions, TableStyle};

#[derive(Debug, Parser)]
#[command(name = "slackdown")]
#[command(version, about = "Render HTML as Slack attachments or dialogs", long_about = None)]
pub struct Cli {
    /// HTML document to convert
    pub input: PathBuf,

    /// Incoming webhook URL to post the result to
    #[arg(long, env = "SLACK_WEBHOOK")]
    pub webhook: Option<String>,

    /// Print the JSON on one line
    #[arg(long)]
    pub compact: bool,

    /// Render the document as a single mrkdwn text instead of attachments
    #[arg(long)]
    pub mrkdwn: bool,

    /// Leave &, < and > unescaped
    #[arg(long)]
    pub no_escape: bool,

    /// Unordered list marker
    #[arg(long)]
    pub bullet: Option<String>,

    /// Table border style: ascii or unicode
    #[arg(long, value_name = "STYLE")]
    pub table_style: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl From<&Cli> for MrkdwnOptions {
    fn from(cli: &Cli) -> Self {
        let mut result = MrkdwnOptions::default();

        if cli.no_escape {
            result.escape_entities = false;
        }

        if let Some(bullet) = &cli.bullet {
            result.bullet = bullet.clone();
        }

        if let Some(style) = &cli.table_style {
            result.table_style = match style.to_lowercase().as_str() {
                "unicode" => TableStyle::Unicode,
                _ => TableStyle::Ascii,
            };
        }

        result
    }
}
