//! Email rendering for a digest
//!
//! Produces the subject line and a self-contained HTML body. Article-derived
//! text is escaped; markup is stripped first so highlight tags from the
//! search API never reach the mail client.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Utc};

use newsbot_analysis::strip_markup;
use newsbot_core::{Digest, DigestEntry};

/// Keyword badges shown at most
const MAX_KEYWORD_BADGES: usize = 5;

const KST_OFFSET_SECS: i32 = 9 * 3600;

const GENERATED_AT_FORMAT: &str = "%Y년 %m월 %d일 %H시 %M분";

const STYLE: &str = r#"
body {
    font-family: -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f5f5f5;
}
.header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 30px;
    border-radius: 10px;
    margin-bottom: 20px;
}
.header h1 { margin: 0 0 10px 0; font-size: 24px; }
.summary, .keywords-section, .news-item, .no-news {
    background: white;
    padding: 16px 20px;
    border-radius: 8px;
    margin-bottom: 15px;
}
.keyword-badge {
    display: inline-block;
    background: #e3f2fd;
    color: #1565c0;
    padding: 4px 12px;
    border-radius: 15px;
    margin: 3px;
    font-size: 13px;
}
.news-title { font-size: 17px; margin-bottom: 8px; }
.news-title a { color: #1a0dab; text-decoration: none; }
.category-badge {
    display: inline-block;
    background: #fff3e0;
    color: #e65100;
    padding: 2px 10px;
    border-radius: 12px;
    font-size: 12px;
    margin-left: 8px;
}
.news-summary {
    background: #f3f8ff;
    border-left: 4px solid #667eea;
    padding: 8px 12px;
    margin: 8px 0;
}
.news-description { color: #555; font-size: 14px; }
.news-meta { color: #999; font-size: 12px; margin-top: 8px; }
.no-news { text-align: center; color: #777; }
.footer { text-align: center; color: #999; font-size: 12px; margin-top: 30px; }
"#;

/// Subject line: keyword and article count
pub fn render_subject(digest: &Digest) -> String {
    format!("[뉴스봇] {} 최신 뉴스 ({}건)", digest.keyword, digest.len())
}

/// Generation time in Korea Standard Time
fn format_generated_at(generated_at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(KST_OFFSET_SECS) {
        Some(kst) => generated_at
            .with_timezone(&kst)
            .format(GENERATED_AT_FORMAT)
            .to_string(),
        None => generated_at.format(GENERATED_AT_FORMAT).to_string(),
    }
}

/// Escape text for use in HTML content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full HTML body
pub fn render_html(digest: &Digest) -> String {
    let keyword = escape_html(&digest.keyword);
    let mut html = String::with_capacity(4096 + digest.len() * 1024);

    // Writing into a String cannot fail
    let _ = write!(
        html,
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"header\">\n<h1>📰 {keyword} 뉴스 알림</h1>\n\
         <p>{} 기준 최근 {}시간 이내 뉴스</p>\n</div>\n\
         <div class=\"summary\"><strong>📊 검색 결과:</strong> \
         총 {}건의 새로운 기사가 발견되었습니다.</div>\n",
        format_generated_at(digest.generated_at),
        digest.window_hours,
        digest.len(),
    );

    if !digest.keywords.is_empty() {
        let badges: Vec<String> = digest
            .keywords
            .iter()
            .take(MAX_KEYWORD_BADGES)
            .map(|k| format!("<span class=\"keyword-badge\">{}</span>", escape_html(&k.term)))
            .collect();
        let _ = write!(
            html,
            "<div class=\"keywords-section\">\n<strong>🔑 주요 키워드:</strong>\n\
             <div style=\"margin-top: 10px;\">{}</div>\n</div>\n",
            badges.join(" ")
        );
    }

    if digest.is_empty() {
        let _ = write!(
            html,
            "<div class=\"no-news\">\n<p>😴 최근 {}시간 동안 새로운 기사가 없습니다.</p>\n</div>\n",
            digest.window_hours
        );
    } else {
        for (idx, entry) in digest.entries.iter().enumerate() {
            render_entry(&mut html, idx + 1, entry);
        }
    }

    html.push_str(
        "<div class=\"footer\">\n<p>🤖 이 메일은 뉴스봇이 자동으로 발송했습니다.</p>\n</div>\n\
         </body>\n</html>\n",
    );

    html
}

fn render_entry(html: &mut String, index: usize, entry: &DigestEntry) {
    let article = &entry.article;
    let title = escape_html(&strip_markup(&article.title));
    let description = escape_html(&strip_markup(&article.description));
    let link = if article.link.trim().is_empty() {
        "#".to_string()
    } else {
        escape_html(&article.link)
    };
    let pub_date = if article.pub_date.trim().is_empty() {
        "날짜 미상".to_string()
    } else {
        escape_html(&article.pub_date)
    };

    let _ = write!(
        html,
        "<div class=\"news-item\">\n\
         <div class=\"news-title\"><strong>{index}.</strong> \
         <a href=\"{link}\" target=\"_blank\">{title}</a>\
         <span class=\"category-badge\">{}</span></div>\n\
         <div class=\"news-summary\">💡 <strong>요약:</strong> {}</div>\n\
         <div class=\"news-description\">{description}</div>\n\
         <div class=\"news-meta\"><span>🕐 {pub_date}</span></div>\n\
         </div>\n",
        entry.category.label(),
        escape_html(&entry.summary),
    );
}
