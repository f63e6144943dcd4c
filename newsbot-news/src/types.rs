//! API-specific types for the Naver News Search API

use serde::Deserialize;

/// Naver news search response
#[derive(Debug, Deserialize)]
pub struct NaverSearchResponse {
    /// Total number of matching articles
    #[serde(default)]
    pub total: u64,
    /// Index of the first returned result
    #[serde(default)]
    pub start: u64,
    /// Number of returned results
    #[serde(default)]
    pub display: u64,
    /// Search results
    #[serde(default)]
    pub items: Vec<NaverNewsItem>,
}

/// A single news search result
#[derive(Debug, Deserialize)]
pub struct NaverNewsItem {
    /// Title with `<b>` highlight markup around matched terms
    #[serde(default)]
    pub title: String,
    /// Original publisher URL
    #[serde(rename = "originallink", default)]
    pub original_link: String,
    /// Naver News URL (falls back to the publisher URL)
    #[serde(default)]
    pub link: String,
    /// Excerpt with highlight markup
    #[serde(default)]
    pub description: String,
    /// Publication date, e.g. "Tue, 17 Feb 2026 14:30:00 +0900"
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"
        {
            "lastBuildDate": "Tue, 17 Feb 2026 14:35:12 +0900",
            "total": 1520,
            "start": 1,
            "display": 1,
            "items": [
                {
                    "title": "<b>웰컴저축은행</b>, 신규 적금 출시",
                    "originallink": "https://news.example.co.kr/article/1",
                    "link": "https://n.news.naver.com/mnews/article/001/1",
                    "description": "<b>웰컴저축은행</b>이 고금리 적금을 내놨다.",
                    "pubDate": "Tue, 17 Feb 2026 14:30:00 +0900"
                }
            ]
        }
        "#;

        let response: NaverSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 1520);
        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.original_link, "https://news.example.co.kr/article/1");
        assert_eq!(item.pub_date, "Tue, 17 Feb 2026 14:30:00 +0900");
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let response: NaverSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }
}
