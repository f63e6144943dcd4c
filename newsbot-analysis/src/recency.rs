//! Publication-time window filter
//!
//! Keeps only articles published within the last `window_hours`. An article
//! whose timestamp cannot be parsed is excluded (fail closed).

use chrono::{DateTime, Duration, FixedOffset, Utc, Weekday};
use tracing::{debug, warn};

use newsbot_core::Article;

use crate::error::{AnalysisError, Result};
use crate::text::strip_markup;

/// RFC 2822 style timestamp as published by the search API
///
/// e.g. `Mon, 16 Feb 2026 14:30:00 +0900`
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// `PUB_DATE_FORMAT` after the leading weekday
const PUB_DATE_BODY_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

/// Default look-back window
pub const DEFAULT_WINDOW_HOURS: u32 = 2;

/// Number of title characters shown when logging a stale article
const LOG_TITLE_CHARS: usize = 50;

/// Parse a publication timestamp, keeping its offset
///
/// The weekday must be a valid name but is not checked against the date.
pub fn parse_pub_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    let parsed = match trimmed.split_once(", ") {
        Some((weekday, body)) if weekday.parse::<Weekday>().is_ok() => {
            DateTime::parse_from_str(body, PUB_DATE_BODY_FORMAT)
        }
        _ => DateTime::parse_from_str(trimmed, PUB_DATE_FORMAT),
    };

    parsed.map_err(|source| {
        AnalysisError::InvalidTimestamp {
            raw: raw.to_string(),
            source,
        }
    })
}

/// Keep articles published within the last `window_hours`, relative to now
pub fn filter_recent(articles: Vec<Article>, window_hours: u32) -> Vec<Article> {
    filter_recent_at(articles, window_hours, Utc::now())
}

/// Keep articles published at or after `now - window_hours`
///
/// Instants are compared in UTC, so the source offset of each timestamp
/// is honored. Input order is preserved.
pub fn filter_recent_at(
    articles: Vec<Article>,
    window_hours: u32,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let cutoff = now - Duration::hours(i64::from(window_hours));
    let total = articles.len();

    let recent: Vec<Article> = articles
        .into_iter()
        .filter(|article| match parse_pub_date(&article.pub_date) {
            Ok(published) => {
                let keep = published.with_timezone(&Utc) >= cutoff;
                if !keep {
                    debug!(
                        "Skipping stale article '{}' ({})",
                        strip_markup(&article.title)
                            .chars()
                            .take(LOG_TITLE_CHARS)
                            .collect::<String>(),
                        article.pub_date
                    );
                }
                keep
            }
            Err(e) => {
                warn!("Excluding article {}: {}", article.id, e);
                false
            }
        })
        .collect();

    debug!(
        "Recency filter kept {} of {} articles (window: {}h)",
        recent.len(),
        total,
        window_hours
    );

    recent
}
