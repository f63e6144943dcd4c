//! TF-IDF vector space over a batch of documents
//!
//! Weights follow the smoothed formulation:
//!
//! weight(d, t) = count(d, t) × (ln((1 + n) / (1 + df(t))) + 1)
//!
//! after which every document row is L2-normalized. The vocabulary is
//! ordered lexicographically and rebuilt on every call.

use std::collections::{BTreeMap, HashMap};

use ndarray::{Array1, Array2, ArrayView1, Axis};
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::text::Document;

/// Vocabulary pruning options
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerOptions {
    /// Keep only this many terms, ranked by total corpus frequency
    pub max_features: Option<usize>,
    /// Minimum number of documents a term must occur in
    pub min_df: usize,
    /// Maximum fraction of documents a term may occur in
    pub max_df: f64,
}

impl VectorizerOptions {
    /// Options used for the similarity matrix: no pruning at all
    pub fn similarity() -> Self {
        Self {
            max_features: None,
            min_df: 1,
            max_df: 1.0,
        }
    }

    /// Options used for keyword extraction
    pub fn extraction() -> Self {
        Self {
            max_features: Some(100),
            min_df: 2,
            max_df: 0.8,
        }
    }
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self::similarity()
    }
}

/// One weight vector per document over a shared vocabulary
#[derive(Debug, Clone)]
pub struct TermVectors {
    vocabulary: Vec<String>,
    /// documents × vocabulary
    weights: Array2<f64>,
}

impl TermVectors {
    /// No documents, no vocabulary
    pub fn empty() -> Self {
        Self {
            vocabulary: Vec::new(),
            weights: Array2::zeros((0, 0)),
        }
    }

    /// Whether there is any similarity information at all
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty() || self.weights.nrows() == 0
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.weights.nrows()
    }

    /// Shared vocabulary in lexicographic order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Weight vector of one document
    pub fn vector(&self, document: usize) -> ArrayView1<'_, f64> {
        self.weights.row(document)
    }

    /// Weight of `term` in `document`; 0.0 for terms outside the vocabulary
    pub fn weight(&self, document: usize, term: &str) -> f64 {
        match self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)) {
            Ok(idx) => self.weights[[document, idx]],
            Err(_) => 0.0,
        }
    }

    /// Mean weight of every vocabulary term across all documents
    pub fn mean_weights(&self) -> Array1<f64> {
        self.weights
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.vocabulary.len()))
    }
}

/// Builds term vectors for a batch of documents
#[derive(Debug, Clone, Default)]
pub struct VectorSpaceModel {
    options: VectorizerOptions,
}

impl VectorSpaceModel {
    pub fn new(options: VectorizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &VectorizerOptions {
        &self.options
    }

    /// Build term vectors, degrading to an empty set on a degenerate batch
    pub fn build(&self, documents: &[Document]) -> TermVectors {
        match self.fit(documents) {
            Ok(vectors) => vectors,
            Err(e) => {
                warn!("Vectorization failed, no similarity information: {}", e);
                TermVectors::empty()
            }
        }
    }

    /// Build term vectors, reporting why a batch is degenerate
    pub fn fit(&self, documents: &[Document]) -> Result<TermVectors> {
        if documents.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }

        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for token in doc.tokens() {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // term -> (document frequency, corpus frequency), ordered by term
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for tf in &counts {
            for (term, count) in tf {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count;
            }
        }

        if stats.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let n_docs = documents.len();
        let max_doc_count = self.options.max_df * n_docs as f64;
        let mut kept: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .filter(|(_, (df, _))| *df >= self.options.min_df && (*df as f64) <= max_doc_count)
            .map(|(term, (df, cf))| (term, df, cf))
            .collect();

        if let Some(limit) = self.options.max_features {
            if kept.len() > limit {
                // Stable: ties keep lexicographic order
                kept.sort_by(|a, b| b.2.cmp(&a.2));
                kept.truncate(limit);
                kept.sort_by(|a, b| a.0.cmp(b.0));
            }
        }

        if kept.is_empty() {
            return Err(AnalysisError::NoTermsRemain {
                min_df: self.options.min_df,
                max_df: self.options.max_df,
            });
        }

        let index: HashMap<&str, usize> = kept
            .iter()
            .enumerate()
            .map(|(i, (term, _, _))| (*term, i))
            .collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|(_, df, _)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let mut weights = Array2::<f64>::zeros((n_docs, kept.len()));
        for (d, tf) in counts.iter().enumerate() {
            for (term, count) in tf {
                if let Some(&t) = index.get(term.as_str()) {
                    weights[[d, t]] = *count as f64 * idf[t];
                }
            }
        }

        for mut row in weights.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|w| w / norm);
            }
        }

        let vocabulary: Vec<String> = kept.iter().map(|(term, _, _)| term.to_string()).collect();

        debug!(
            "Built term vectors: {} documents, {} terms",
            n_docs,
            vocabulary.len()
        );

        Ok(TermVectors {
            vocabulary,
            weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts.iter().map(|t| Document::new(*t)).collect()
    }

    #[test]
    fn test_vocabulary_is_sorted_and_rows_are_unit_length() {
        let model = VectorSpaceModel::default();
        let vectors = model.build(&docs(&["the cat sat", "the dog sat down", "a bird"]));

        assert_eq!(vectors.len(), 3);
        let vocab = vectors.vocabulary();
        let mut sorted = vocab.to_vec();
        sorted.sort();
        assert_eq!(vocab, sorted.as_slice());
        assert!(vocab.contains(&"a".to_string()));

        for d in 0..vectors.len() {
            let row = vectors.vector(d);
            let norm = row.dot(&row).sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "row {} has norm {}", d, norm);
        }
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common_ones() {
        let vectors = VectorSpaceModel::default().build(&docs(&["apple banana", "apple cherry"]));
        // "apple" appears everywhere, "banana" only once
        assert!(vectors.weight(0, "banana") > vectors.weight(0, "apple"));
        assert_eq!(vectors.weight(0, "cherry"), 0.0);
        assert_eq!(vectors.weight(0, "missing"), 0.0);
    }

    #[test]
    fn test_smoothed_idf_values() {
        let vectors = VectorSpaceModel::default().build(&docs(&["x y", "x"]));
        // idf(x) = ln(3/3) + 1 = 1, idf(y) = ln(3/2) + 1
        let idf_y = (3.0f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + idf_y * idf_y).sqrt();
        assert!((vectors.weight(0, "x") - 1.0 / norm).abs() < 1e-12);
        assert!((vectors.weight(0, "y") - idf_y / norm).abs() < 1e-12);
        assert!((vectors.weight(1, "x") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_document_frequency_pruning() {
        let options = VectorizerOptions {
            max_features: None,
            min_df: 2,
            max_df: 0.8,
        };
        let vectors = VectorSpaceModel::new(options).build(&docs(&[
            "common shared alpha",
            "common shared beta",
            "common gamma",
            "common delta",
            "common epsilon",
        ]));
        // "common" is in 100% of documents, single-document terms are dropped
        assert_eq!(vectors.vocabulary(), &["shared".to_string()]);
    }

    #[test]
    fn test_max_features_keeps_most_frequent_terms() {
        let options = VectorizerOptions {
            max_features: Some(2),
            min_df: 1,
            max_df: 1.0,
        };
        let vectors =
            VectorSpaceModel::new(options).build(&docs(&["b b b a c", "c c d", "a"]));
        // corpus frequency: b=3, c=3, a=2, d=1
        assert_eq!(vectors.vocabulary(), &["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_degenerate_batches_return_empty() {
        let model = VectorSpaceModel::default();
        assert!(model.build(&[]).is_empty());
        assert!(model.build(&docs(&["", "  ", "!!"])).is_empty());
        assert!(matches!(
            model.fit(&docs(&["", "?"])),
            Err(AnalysisError::EmptyVocabulary)
        ));

        let pruned = VectorSpaceModel::new(VectorizerOptions::extraction());
        assert!(matches!(
            pruned.fit(&docs(&["only one document"])),
            Err(AnalysisError::NoTermsRemain { .. })
        ));
    }

    #[test]
    fn test_document_without_terms_keeps_zero_row() {
        let vectors = VectorSpaceModel::default().build(&docs(&["news today", "..."]));
        assert_eq!(vectors.len(), 2);
        assert!(vectors.vector(1).iter().all(|w| *w == 0.0));
    }
}
