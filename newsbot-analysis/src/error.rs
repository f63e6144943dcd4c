//! Error types for batch analysis
//!
//! None of these are fatal to a run: callers log them and fall back to
//! "no similarity information", "no keywords" or "article excluded".

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Empty batch: no documents to vectorize")]
    EmptyBatch,

    #[error("Empty vocabulary: documents contain no terms")]
    EmptyVocabulary,

    #[error("No terms remain after pruning (min_df={min_df}, max_df={max_df})")]
    NoTermsRemain { min_df: usize, max_df: f64 },

    #[error("Invalid publication timestamp '{raw}': {source}")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}
