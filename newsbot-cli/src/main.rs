//! Keyword news digest bot
//!
//! Performs one run: search, filter, analyze, mail. Scheduling is left to
//! an external trigger (cron, CI schedule).

mod config;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsbot_news::NaverNewsClient;
use newsbot_services::{DigestPipeline, PipelineConfig, SmtpMailer};

use crate::config::BotConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    for file in [".env.local", ".env"] {
        if let Err(e) = dotenvy::from_filename(file) {
            // Not an error if the file doesn't exist
            if !matches!(e, dotenvy::Error::Io(_)) {
                eprintln!("Warning: Failed to load {}: {}", file, e);
            }
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsbot=debug")),
        )
        .init();

    // Validate configuration before touching the network
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let pipeline_config = PipelineConfig::default();
    info!(
        "Starting news digest: keyword='{}', recipient={}",
        pipeline_config.keyword, config.to_email
    );

    let source = NaverNewsClient::new(config.naver_client_id, config.naver_client_secret)
        .context("Failed to create Naver News client")?;
    let mailer = SmtpMailer::new(config.gmail_user, config.gmail_app_password);
    let pipeline = DigestPipeline::new(source, mailer, pipeline_config)
        .context("Invalid pipeline configuration")?;

    let report = pipeline
        .run(&config.to_email)
        .await
        .context("News digest run failed")?;
    info!(
        "Digest delivered to {}: {} fetched, {} recent, {} unique, {} keywords",
        report.recipient, report.fetched, report.recent, report.unique, report.keywords
    );

    Ok(())
}
