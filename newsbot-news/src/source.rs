//! Fetch boundary used by the digest pipeline

use async_trait::async_trait;

use newsbot_core::{Article, SortMode};

/// A source of keyword news articles
///
/// Implementations log and swallow transport/API failures and return an
/// empty batch instead; the pipeline never sees a fetch error.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch at most `display` articles for `keyword`
    async fn fetch_articles(&self, keyword: &str, display: usize, sort: SortMode) -> Vec<Article>;
}
