//! Batch analysis for the keyword news digest
//!
//! Everything here operates on the single batch fetched in one run and is
//! rebuilt from scratch on every call; nothing is cached between runs.
//!
//! ## Features
//! - Strip markup and build one document per article
//! - Weight terms (TF-IDF) over a batch-relative vocabulary
//! - Pairwise cosine similarity and greedy earliest-wins duplicate removal
//! - Corpus-level keyword extraction
//! - Rule-based topic categorization
//! - Fail-closed recency filtering
//! - Leading-sentence summaries

pub mod categorize;
pub mod dedup;
pub mod error;
pub mod keywords;
pub mod recency;
pub mod similarity;
pub mod summarize;
pub mod text;
pub mod vector_space;

pub use categorize::{Categorizer, CategoryRule, CategoryTable};
pub use dedup::{dedupe, remove_duplicates, DEFAULT_SIMILARITY_THRESHOLD};
pub use error::{AnalysisError, Result};
pub use keywords::{KeywordExtractor, DEFAULT_TOP_KEYWORDS};
pub use recency::{filter_recent, filter_recent_at, parse_pub_date, DEFAULT_WINDOW_HOURS};
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use summarize::{summarize, summarize_article};
pub use text::{strip_markup, Document};
pub use vector_space::{TermVectors, VectorSpaceModel, VectorizerOptions};
