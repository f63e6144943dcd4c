//! Core types for the keyword news digest bot
//!
//! This crate defines the shared data structures used across the bot,
//! including the fetched article record, category labels, extracted
//! keywords and the assembled digest.

pub mod article;
pub mod category;
pub mod digest;
pub mod error;

pub use article::{Article, SortMode};
pub use category::Category;
pub use digest::{Digest, DigestEntry, Keyword};
pub use error::{NewsbotError, NewsbotResult};
