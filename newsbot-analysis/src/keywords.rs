//! Corpus-level keyword extraction
//!
//! Scores every term of the pruned vocabulary by its mean TF-IDF weight over
//! the batch and returns the best ones.

use tracing::debug;

use newsbot_core::Keyword;

use crate::text::Document;
use crate::vector_space::{VectorSpaceModel, VectorizerOptions};

/// Number of keywords shown in the digest
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

/// Extracts representative terms from a batch of documents
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    model: VectorSpaceModel,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(VectorizerOptions::extraction())
    }
}

impl KeywordExtractor {
    pub fn new(options: VectorizerOptions) -> Self {
        Self {
            model: VectorSpaceModel::new(options),
        }
    }

    /// Top `top_n` terms by mean weight, best first
    ///
    /// Ties keep vocabulary order. Single-character terms are never
    /// returned. A degenerate batch yields no keywords.
    pub fn extract(&self, documents: &[Document], top_n: usize) -> Vec<Keyword> {
        if documents.is_empty() || top_n == 0 {
            return Vec::new();
        }

        let vectors = self.model.build(documents);
        if vectors.is_empty() {
            return Vec::new();
        }

        let means = vectors.mean_weights();
        let mut scored: Vec<(&str, f64)> = vectors
            .vocabulary()
            .iter()
            .map(String::as_str)
            .zip(means.iter().copied())
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let keywords: Vec<Keyword> = scored
            .into_iter()
            .filter(|(term, _)| term.chars().count() > 1)
            .take(top_n)
            .map(|(term, score)| Keyword::new(term, score))
            .collect();

        debug!(
            "Extracted {} keywords from {} documents",
            keywords.len(),
            documents.len()
        );

        keywords
    }
}
