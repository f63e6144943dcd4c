//! Naver News Search API client
//!
//! Issues one keyword search per call and converts the results into
//! `Article` records. Markup in titles/descriptions is left untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};

use newsbot_core::{Article, SortMode};

use crate::error::NewsError;
use crate::source::NewsSource;
use crate::types::{NaverNewsItem, NaverSearchResponse};

/// Largest page size the search API accepts
pub const MAX_DISPLAY: usize = 100;

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/v1/search/news.json";

/// Naver News Search API client
pub struct NaverNewsClient {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
}

impl NaverNewsClient {
    /// Create a new client from the application credentials
    pub fn new(client_id: String, client_secret: String) -> Result<Self, NewsError> {
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(NewsError::InvalidConfig(
                "Naver client id and secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent("newsbot/0.1")
                .build()
                .unwrap_or_else(|_| Client::new()),
            client_id,
            client_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search news articles for a keyword
    ///
    /// `count` is clamped into `1..=MAX_DISPLAY`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn search_news(
        &self,
        keyword: &str,
        count: usize,
        sort: SortMode,
    ) -> Result<Vec<Article>, NewsError> {
        let page_size = page_size(count);
        let display_param = page_size.to_string();

        info!(
            "Searching Naver News: query='{}', display={}, sort={}",
            keyword, page_size, sort
        );

        let response = self
            .client
            .get(&self.base_url)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[
                ("query", keyword),
                ("display", display_param.as_str()),
                ("sort", sort.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search: NaverSearchResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        debug!(
            "Naver reported {} total matches, returned {}",
            search.total,
            search.items.len()
        );

        Ok(search.items.into_iter().map(into_article).collect())
    }
}

#[async_trait]
impl NewsSource for NaverNewsClient {
    async fn fetch_articles(&self, keyword: &str, count: usize, sort: SortMode) -> Vec<Article> {
        match self.search_news(keyword, count, sort).await {
            Ok(articles) => {
                info!("Fetched {} articles from Naver News", articles.len());
                articles
            }
            Err(e) => {
                warn!("Naver News search failed, continuing with an empty batch: {}", e);
                Vec::new()
            }
        }
    }
}

/// Page size actually requested for `count` articles
fn page_size(count: usize) -> usize {
    count.clamp(1, MAX_DISPLAY)
}

/// Convert a raw search result into an article
fn into_article(item: NaverNewsItem) -> Article {
    let link = if item.link.is_empty() {
        item.original_link.clone()
    } else {
        item.link
    };

    let id = {
        let mut hasher = Sha256::new();
        hasher.update(link.as_bytes());
        hex::encode(&hasher.finalize()[..8])
    };

    let article = Article::new(id, item.title, item.description, link, item.pub_date);
    if item.original_link.is_empty() {
        article
    } else {
        article.with_original_link(item.original_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str, original_link: &str) -> NaverNewsItem {
        NaverNewsItem {
            title: "<b>웰컴저축은행</b> 소식".to_string(),
            original_link: original_link.to_string(),
            link: link.to_string(),
            description: "설명".to_string(),
            pub_date: "Tue, 17 Feb 2026 14:30:00 +0900".to_string(),
        }
    }

    #[test]
    fn test_into_article_keeps_markup_and_hashes_link() {
        let article = into_article(item(
            "https://n.news.naver.com/1",
            "https://news.example.co.kr/1",
        ));
        assert_eq!(article.title, "<b>웰컴저축은행</b> 소식");
        assert_eq!(article.link, "https://n.news.naver.com/1");
        assert_eq!(
            article.original_link.as_deref(),
            Some("https://news.example.co.kr/1")
        );
        assert_eq!(article.id.len(), 16);

        let again = into_article(item(
            "https://n.news.naver.com/1",
            "https://news.example.co.kr/1",
        ));
        assert_eq!(article.id, again.id);
    }

    #[test]
    fn test_into_article_falls_back_to_original_link() {
        let article = into_article(item("", "https://news.example.co.kr/2"));
        assert_eq!(article.link, "https://news.example.co.kr/2");
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(page_size(0), 1);
        assert_eq!(page_size(10), 10);
        assert_eq!(page_size(MAX_DISPLAY), MAX_DISPLAY);
        assert_eq!(page_size(500), MAX_DISPLAY);
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let result = NaverNewsClient::new(String::new(), "secret".to_string());
        assert!(matches!(result, Err(NewsError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_batch() {
        // Nothing listens on the discard port, so the request fails at connect time
        let client = NaverNewsClient::new("id".to_string(), "secret".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9/v1/search/news.json");

        let direct = client.search_news("웰컴저축은행", 10, SortMode::Date).await;
        assert!(matches!(direct, Err(NewsError::RequestFailed(_))));

        let articles = client
            .fetch_articles("웰컴저축은행", 10, SortMode::Date)
            .await;
        assert!(articles.is_empty());
    }
}
