//! Topic categories assigned to digest articles

use serde::{Deserialize, Serialize};

/// Topic category of an article
///
/// `General` is the fallback used when no category's trigger keywords match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Finance,
    Corporate,
    FinancialProduct,
    RealEstate,
    Regulation,
    It,
    Personnel,
    Earnings,
    General,
}

impl Category {
    /// Display label used in the digest badge
    pub fn label(&self) -> &'static str {
        match self {
            Category::Finance => "💰 금융",
            Category::Corporate => "🏢 기업",
            Category::FinancialProduct => "💳 금융상품",
            Category::RealEstate => "📊 부동산",
            Category::Regulation => "⚖️ 규제",
            Category::It => "🔧 IT",
            Category::Personnel => "👥 인사",
            Category::Earnings => "📈 실적",
            Category::General => "📰 일반",
        }
    }

    /// Fallback label for articles that match no trigger keywords
    pub fn fallback() -> Self {
        Category::General
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
