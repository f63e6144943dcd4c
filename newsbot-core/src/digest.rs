//! Digest data structures assembled at the end of a run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Article, Category};

/// A representative term extracted from the batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The term, lowercased
    pub term: String,
    /// Mean term weight across the batch
    pub score: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// An article together with the annotations carried into the digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestEntry {
    pub article: Article,
    pub category: Category,
    /// Short extractive summary
    pub summary: String,
}

/// Everything the delivery step needs to render one email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// Search keyword the batch was fetched for
    pub keyword: String,
    /// When the digest was assembled
    pub generated_at: DateTime<Utc>,
    /// Length of the trailing time window in hours
    pub window_hours: u32,
    /// Final articles in original order
    pub entries: Vec<DigestEntry>,
    /// Extracted representative keywords, best first
    pub keywords: Vec<Keyword>,
}

impl Digest {
    /// Number of articles in the digest
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no articles survived filtering
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
