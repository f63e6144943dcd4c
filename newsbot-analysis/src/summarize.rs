//! Leading-sentence extractive summaries

use std::sync::LazyLock;

use regex::Regex;

use newsbot_core::Article;

use crate::text::strip_markup;

/// Sentence terminator followed by whitespace
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

/// Sentences of this many characters or fewer are ignored
const MIN_SENTENCE_CHARS: usize = 10;

/// Length of the truncated fallback summary
const FALLBACK_CHARS: usize = 100;

/// Summarize `text` with its first `max_sentences` sentences
///
/// Text with no usable sentence is returned as is, cut to 100 characters.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(max_sentences.max(1))
        .collect();

    let Some(last) = sentences.last() else {
        if text.chars().count() > FALLBACK_CHARS {
            let head: String = text.chars().take(FALLBACK_CHARS).collect();
            return format!("{}...", head);
        }
        return text.to_string();
    };

    let mut summary = sentences.join(" ");
    if !last.ends_with('.') {
        summary.push('.');
    }
    summary
}

/// Summary of an article's normalized title and description
pub fn summarize_article(article: &Article, max_sentences: usize) -> String {
    let text = format!(
        "{}. {}",
        strip_markup(&article.title),
        strip_markup(&article.description)
    );
    summarize(&text, max_sentences)
}
