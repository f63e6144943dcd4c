//! Digest services for the keyword news bot
//!
//! This crate wires the news source, the batch analysis and the mail
//! delivery into a single run.

pub mod digest;
pub mod mailer;
pub mod pipeline;

pub use digest::{render_html, render_subject};
pub use mailer::{DigestDelivery, MailError, SmtpMailer};
pub use pipeline::{DigestPipeline, PipelineConfig, RunReport};
