//! Greedy near-duplicate removal
//!
//! Articles are scanned in input order. Each surviving article removes every
//! later, not-yet-removed article whose similarity to it reaches the
//! threshold. A removed article is never compared again, so among a cluster
//! of near-duplicates the earliest one wins.
//!
//! This is not a clustering: when B is removed as a duplicate of A, a later
//! C that only resembles B survives. Chains of near-duplicates are therefore
//! not guaranteed to collapse fully.

use tracing::{debug, info, warn};

use newsbot_core::Article;

use crate::similarity::SimilarityMatrix;
use crate::text::{strip_markup, Document};

/// Similarity at or above which a later article counts as a duplicate
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Number of title characters shown when logging a removal
const LOG_TITLE_CHARS: usize = 30;

/// Indices of articles that survive greedy earliest-wins elimination
fn surviving_indices(similarity: &SimilarityMatrix, threshold: f64) -> Vec<usize> {
    let n = similarity.len();
    let mut removed = vec![false; n];
    let mut kept = Vec::with_capacity(n);

    for i in 0..n {
        if removed[i] {
            continue;
        }
        kept.push(i);

        for j in (i + 1)..n {
            if !removed[j] && similarity.get(i, j) >= threshold {
                removed[j] = true;
            }
        }
    }

    kept
}

/// Remove near-duplicates using a precomputed similarity matrix
///
/// The result keeps the original relative order. A matrix whose size does
/// not match the batch carries no usable information and leaves the batch
/// untouched.
pub fn dedupe(
    articles: Vec<Article>,
    similarity: &SimilarityMatrix,
    threshold: f64,
) -> Vec<Article> {
    if articles.is_empty() {
        return articles;
    }

    if similarity.len() != articles.len() {
        warn!(
            "Similarity matrix covers {} articles but batch has {}, skipping deduplication",
            similarity.len(),
            articles.len()
        );
        return articles;
    }

    let kept = surviving_indices(similarity, threshold);
    let original_count = articles.len();
    let mut keep = vec![false; original_count];
    for &i in &kept {
        keep[i] = true;
    }

    let unique: Vec<Article> = articles
        .into_iter()
        .zip(keep)
        .filter_map(|(article, keep)| {
            if !keep {
                info!(
                    "Removed similar article: '{}...'",
                    strip_markup(&article.title)
                        .chars()
                        .take(LOG_TITLE_CHARS)
                        .collect::<String>()
                );
            }
            keep.then_some(article)
        })
        .collect();

    debug!(
        "Deduplication kept {} of {} articles (threshold: {:.2})",
        unique.len(),
        original_count,
        threshold
    );

    unique
}

/// Build the similarity matrix for `articles` and remove near-duplicates
pub fn remove_duplicates(articles: Vec<Article>, threshold: f64) -> Vec<Article> {
    if articles.is_empty() {
        return articles;
    }

    let documents = Document::from_articles(&articles);
    let similarity = SimilarityMatrix::from_documents(&documents);
    dedupe(articles, &similarity, threshold)
}
