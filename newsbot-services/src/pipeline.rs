//! One digest run
//!
//! fetch → recency filter → near-duplicate removal → keyword extraction →
//! categorization and summaries → delivery. Every stage except delivery
//! degrades instead of failing; a delivery failure fails the run.

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, instrument};

use newsbot_analysis::{
    filter_recent, remove_duplicates, summarize_article, Categorizer, CategoryTable, Document,
    KeywordExtractor, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_KEYWORDS, DEFAULT_WINDOW_HOURS,
};
use newsbot_core::{Digest, DigestEntry, NewsbotError, NewsbotResult, SortMode};
use newsbot_news::{NewsSource, MAX_DISPLAY};

use crate::mailer::DigestDelivery;

/// Sentences kept in each article summary
const SUMMARY_SENTENCES: usize = 2;

/// Parameters of a single run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Search keyword
    pub keyword: String,
    /// Number of articles requested from the source
    pub display: usize,
    pub sort: SortMode,
    /// Recency window in hours
    pub window_hours: u32,
    /// Similarity at or above which a later article is dropped
    pub similarity_threshold: f64,
    /// Keywords extracted for the digest header
    pub top_keywords: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keyword: "웰컴저축은행".to_string(),
            display: MAX_DISPLAY,
            sort: SortMode::Date,
            window_hours: DEFAULT_WINDOW_HOURS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_keywords: DEFAULT_TOP_KEYWORDS,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> NewsbotResult<()> {
        if self.keyword.trim().is_empty() {
            return Err(NewsbotError::config("search keyword must not be empty"));
        }
        if self.display == 0 || self.display > MAX_DISPLAY {
            return Err(NewsbotError::config(format!(
                "display must be between 1 and {}, got {}",
                MAX_DISPLAY, self.display
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(NewsbotError::config(format!(
                "similarity threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

/// Counts observed during one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub fetched: usize,
    pub recent: usize,
    pub unique: usize,
    pub keywords: usize,
    pub recipient: String,
}

/// Runs the digest for one keyword and one recipient
pub struct DigestPipeline<S, D> {
    source: S,
    delivery: D,
    categories: CategoryTable,
    extractor: KeywordExtractor,
    config: PipelineConfig,
}

impl<S: NewsSource, D: DigestDelivery> DigestPipeline<S, D> {
    pub fn new(source: S, delivery: D, config: PipelineConfig) -> NewsbotResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            delivery,
            categories: CategoryTable::builtin(),
            extractor: KeywordExtractor::default(),
            config,
        })
    }

    /// Replace the built-in category table
    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch, filter and analyze the batch addressed to `recipient`
    /// without delivering it
    pub async fn build_digest(&self, recipient: &str) -> (Digest, RunReport) {
        let cfg = &self.config;

        let fetched = self
            .source
            .fetch_articles(&cfg.keyword, cfg.display, cfg.sort)
            .await;
        let fetched_count = fetched.len();
        info!("Fetched {} articles for '{}'", fetched_count, cfg.keyword);

        let recent = filter_recent(fetched, cfg.window_hours);
        let recent_count = recent.len();
        info!(
            "{} articles published within the last {}h",
            recent_count, cfg.window_hours
        );

        let unique = remove_duplicates(recent, cfg.similarity_threshold);
        info!("{} articles left after duplicate removal", unique.len());

        let documents = Document::from_articles(&unique);
        let keywords = self.extractor.extract(&documents, cfg.top_keywords);
        if keywords.is_empty() {
            info!("No keywords extracted");
        } else {
            let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
            info!("Extracted keywords: {}", terms.join(", "));
        }

        let categorizer = Categorizer::new(&self.categories);
        let entries: Vec<DigestEntry> = unique
            .into_iter()
            .map(|article| DigestEntry {
                category: categorizer.categorize(&article),
                summary: summarize_article(&article, SUMMARY_SENTENCES),
                article,
            })
            .collect();

        let report = RunReport {
            fetched: fetched_count,
            recent: recent_count,
            unique: entries.len(),
            keywords: keywords.len(),
            recipient: recipient.to_string(),
        };

        let digest = Digest {
            keyword: cfg.keyword.clone(),
            generated_at: Utc::now(),
            window_hours: cfg.window_hours,
            entries,
            keywords,
        };

        (digest, report)
    }

    /// Build the digest and deliver it to `recipient`
    ///
    /// An empty digest is still delivered.
    #[instrument(skip(self), fields(keyword = %self.config.keyword))]
    pub async fn run(&self, recipient: &str) -> NewsbotResult<RunReport> {
        let (digest, report) = self.build_digest(recipient).await;

        if let Err(e) = self.delivery.deliver(recipient, &digest).await {
            error!("Failed to deliver digest to {}: {}", recipient, e);
            return Err(NewsbotError::delivery(e.to_string()));
        }

        info!(
            "Run complete: fetched={}, recent={}, unique={}, keywords={}",
            report.fetched, report.recent, report.unique, report.keywords
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.keyword, "웰컴저축은행");
        assert_eq!(config.display, 100);
        assert_eq!(config.sort, SortMode::Date);
        assert_eq!(config.window_hours, 2);
        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.top_keywords, 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let blank = PipelineConfig {
            keyword: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(blank.validate(), Err(NewsbotError::Config(_))));

        let too_many = PipelineConfig {
            display: 101,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());

        let threshold = PipelineConfig {
            similarity_threshold: 1.5,
            ..Default::default()
        };
        assert!(threshold.validate().is_err());
    }
}
