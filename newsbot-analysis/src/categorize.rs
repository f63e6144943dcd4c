//! Rule-based topic categorization
//!
//! Each category owns a list of trigger keywords. An article scores one
//! point per distinct trigger found (case-insensitive substring) in its
//! normalized title and description; the best-scoring category wins, ties
//! going to the category declared first.

use newsbot_core::{Article, Category};

use crate::text::strip_markup;

/// Trigger keywords of one category, stored lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        let mut lowered: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if !keyword.is_empty() && !lowered.contains(&keyword) {
                lowered.push(keyword);
            }
        }
        Self {
            category,
            keywords: lowered,
        }
    }

    /// Number of distinct trigger keywords contained in `text`
    ///
    /// `text` must already be lowercased.
    pub fn score(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .count()
    }
}

/// Ordered, read-only category table
///
/// Built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Categories for savings-bank news
    pub fn builtin() -> Self {
        Self::new(vec![
            CategoryRule::new(
                Category::Finance,
                &[
                    "금융", "은행", "대출", "적금", "예금", "금리", "이자", "저축", "투자", "펀드",
                    "주식", "채권",
                ],
            ),
            CategoryRule::new(
                Category::Corporate,
                &[
                    "기업", "회사", "사업", "경영", "CEO", "임원", "지점", "영업", "매출", "실적",
                ],
            ),
            CategoryRule::new(
                Category::FinancialProduct,
                &["상품", "카드", "보험", "연금", "ISA", "CMA", "청약", "통장"],
            ),
            CategoryRule::new(
                Category::RealEstate,
                &["부동산", "아파트", "주택", "건물", "분양", "입주", "임대"],
            ),
            CategoryRule::new(
                Category::Regulation,
                &[
                    "금감원", "규제", "제재", "법원", "판결", "소송", "처벌", "과징금", "검찰",
                    "경찰",
                ],
            ),
            CategoryRule::new(
                Category::It,
                &["IT", "디지털", "앱", "모바일", "시스템", "플랫폼", "AI", "빅데이터"],
            ),
            CategoryRule::new(
                Category::Personnel,
                &["인사", "임명", "발령", "승진", "신임", "취임"],
            ),
            CategoryRule::new(
                Category::Earnings,
                &["실적", "수익", "손실", "영업이익", "순이익", "매출", "분기"],
            ),
        ])
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Assigns one category per article from a borrowed table
#[derive(Debug, Clone, Copy)]
pub struct Categorizer<'a> {
    table: &'a CategoryTable,
}

impl<'a> Categorizer<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    /// Category for an article; the fallback when nothing matches
    pub fn categorize(&self, article: &Article) -> Category {
        let text = format!(
            "{} {}",
            strip_markup(&article.title),
            strip_markup(&article.description)
        )
        .to_lowercase();

        self.categorize_text(&text)
    }

    fn categorize_text(&self, text: &str) -> Category {
        let mut best: Option<(Category, usize)> = None;

        for rule in self.table.rules() {
            let score = rule.score(text);
            // Strictly greater: earlier categories win ties
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((rule.category, score));
            }
        }

        best.map(|(category, _)| category)
            .unwrap_or_else(Category::fallback)
    }
}
