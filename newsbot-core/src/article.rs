//! Article data structures for keyword news search results

use serde::{Deserialize, Serialize};

/// A news article as returned by the search API
///
/// Text fields are kept exactly as fetched (they may still contain markup);
/// normalization happens in the analysis stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier (hash of the link)
    pub id: String,
    /// Article title, possibly containing `<b>` highlight markup
    pub title: String,
    /// Short description/excerpt, possibly containing markup
    pub description: String,
    /// Link to the article (portal or publisher)
    pub link: String,
    /// Link to the original publisher, when the portal provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_link: Option<String>,
    /// Publication timestamp in the source's RFC 2822 style format,
    /// e.g. "Tue, 17 Feb 2026 14:30:00 +0900"
    pub pub_date: String,
}

impl Article {
    /// Create an article with an explicit identifier
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        pub_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            original_link: None,
            pub_date: pub_date.into(),
        }
    }

    /// Attach the original publisher link
    pub fn with_original_link(mut self, link: impl Into<String>) -> Self {
        self.original_link = Some(link.into());
        self
    }
}

/// Result ordering requested from the search API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest first
    #[default]
    Date,
    /// Most relevant first
    Sim,
}

impl SortMode {
    /// Query parameter value understood by the search API
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Date => "date",
            SortMode::Sim => "sim",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_query_value() {
        assert_eq!(SortMode::default().as_str(), "date");
        assert_eq!(SortMode::Sim.to_string(), "sim");
    }

    #[test]
    fn test_article_serializes_without_missing_original_link() {
        let article = Article::new(
            "abc",
            "title",
            "desc",
            "https://n.news.naver.com/1",
            "Tue, 17 Feb 2026 14:30:00 +0900",
        );
        let json = serde_json::to_string(&article).unwrap();
        assert!(!json.contains("original_link"));

        let json = serde_json::to_string(&article.with_original_link("https://example.com/1"))
            .unwrap();
        assert!(json.contains("\"original_link\":\"https://example.com/1\""));
    }
}
