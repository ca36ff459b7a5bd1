//! slackdown CLI - render an HTML document as a Slack message

mod config;
mod webhook;

use std::fs;

use anyhow::Context;
use clap::Parser;
use slackdown::{MrkdwnOptions, SlackdownService};
use tracing_subscriber::EnvFilter;

use crate::config::Cli;
use crate::webhook::WebhookClient;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let service = SlackdownService::with_options(MrkdwnOptions::from(&cli));
    let webhook = cli.webhook.as_deref().map(WebhookClient::new);

    if cli.mrkdwn {
        let text = service.render_html(&html);
        println!("{}", text);
        if let Some(webhook) = &webhook {
            webhook.post_text(&text);
        }
        return Ok(());
    }

    let message = service
        .assemble_html(&html)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    let json = slackdown_core::to_json(&message, !cli.compact)
        .context("failed to serialize message")?;
    println!("{}", json);

    if let Some(webhook) = &webhook {
        webhook.post_message(&message);
    }

    Ok(())
}
