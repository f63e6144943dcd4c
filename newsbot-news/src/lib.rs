//! News search clients for the keyword digest bot
//!
//! This crate provides:
//! - `NaverNewsClient`: keyword search against the Naver News Search API
//! - `NewsSource`: the fetch boundary the pipeline depends on, which never
//!   fails and degrades to an empty batch instead

pub mod error;
pub mod naver;
pub mod source;
pub mod types;

pub use error::NewsError;
pub use naver::{NaverNewsClient, MAX_DISPLAY};
pub use source::NewsSource;
pub use types::{NaverNewsItem, NaverSearchResponse};
