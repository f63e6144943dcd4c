//! Markup stripping and document construction

use std::sync::LazyLock;

use regex::Regex;

use newsbot_core::Article;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("token pattern is valid"));

/// A complete `<...>` tag on a single line
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>\n]*>").expect("tag pattern is valid"));

/// Strip HTML tags and decode the entities the search API emits
///
/// Only complete tags are removed; a stray `<` is kept as text. Whitespace
/// runs are collapsed to a single space.
pub fn strip_markup(html: &str) -> String {
    let result = TAG_PATTERN.replace_all(html, "");

    result
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased word tokens of `text`
///
/// A token is a maximal run of Unicode word characters; single-character
/// tokens are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The unit fed into the vector space model: normalized title + description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the document for an article
    pub fn from_article(article: &Article) -> Self {
        Self::new(format!(
            "{} {}",
            strip_markup(&article.title),
            strip_markup(&article.description)
        ))
    }

    /// One document per article, in order
    pub fn from_articles(articles: &[Article]) -> Vec<Self> {
        articles.iter().map(Self::from_article).collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>Hello <b>world</b>!</p>"), "Hello world!");
        assert_eq!(
            strip_markup("<b>웰컴저축은행</b>, &quot;디지털&quot; 전환"),
            "웰컴저축은행, \"디지털\" 전환"
        );
        assert_eq!(strip_markup("a &amp;lt; b"), "a &lt; b");
        assert_eq!(strip_markup("  spaced \n  out  "), "spaced out");
    }

    #[test]
    fn test_strip_markup_keeps_unmatched_angle_brackets() {
        assert_eq!(strip_markup("금리 < 3% 상품 출시"), "금리 < 3% 상품 출시");
        assert_eq!(strip_markup("<b>금리</b> 3% > 2%"), "금리 3% > 2%");
        assert_eq!(strip_markup("a < b <i>c</i>"), "a c");
        // Tags do not span lines
        assert_eq!(strip_markup("x <br\n> y"), "x <br > y");
    }

    #[test]
    fn test_tokenize_lowercases_and_keeps_single_chars() {
        let tokens = tokenize("AI 기반 B2B 서비스, a new_app!");
        assert_eq!(tokens, vec!["ai", "기반", "b2b", "서비스", "a", "new_app"]);
    }

    #[test]
    fn test_document_from_article() {
        let article = Article::new(
            "1",
            "<b>웰컴저축은행</b> 적금",
            "고금리 <i>상품</i> 출시",
            "https://example.com",
            "",
        );
        let doc = Document::from_article(&article);
        assert_eq!(doc.text(), "웰컴저축은행 적금 고금리 상품 출시");
        assert_eq!(doc.tokens().len(), 5);
    }
}
