//! Table-driven account-to-category mapping.
//!
//! Classification is configuration, not code: new account types are added by
//! editing the rule table. Labels are matched case-insensitively on their
//! trimmed form; exact rules win over prefix rules, and among prefix rules
//! the longest pattern wins.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;

/// How a rule pattern is compared against an account label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The label must equal the pattern.
    #[default]
    Exact,
    /// The label must start with the pattern.
    Prefix,
}

/// A single mapping rule from an account label pattern to a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRule {
    /// Pattern to match (normalized on load).
    pub pattern: String,
    /// Comparison mode for the pattern.
    #[serde(default)]
    pub matcher: MatchKind,
    /// Category assigned on a match.
    pub category: Category,
}

impl AccountRule {
    /// Creates an exact-match rule.
    #[must_use]
    pub fn exact(pattern: &str, category: Category) -> Self {
        Self {
            pattern: pattern.to_string(),
            matcher: MatchKind::Exact,
            category,
        }
    }

    /// Creates a prefix-match rule.
    #[must_use]
    pub fn prefix(pattern: &str, category: Category) -> Self {
        Self {
            pattern: pattern.to_string(),
            matcher: MatchKind::Prefix,
            category,
        }
    }
}

/// Errors raised while loading a rule table from a file.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The rules file could not be read.
    #[error("Failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// The rules file is not valid JSON for the expected shape.
    #[error("Failed to parse rules file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a rules file.
#[derive(Debug, Deserialize)]
struct RulesFile {
    rules: Vec<AccountRule>,
    #[serde(default)]
    fallback: Option<Category>,
}

/// The classification table: an ordered rule list plus an optional fallback.
///
/// Immutable after construction; passed explicitly to the classifier so
/// per-request overrides and tests never touch global state.
#[derive(Debug, Clone)]
pub struct AccountRules {
    rules: Vec<AccountRule>,
    fallback: Option<Category>,
}

/// Normalizes an account label for matching.
pub(crate) fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

impl AccountRules {
    /// Builds a table from rules, normalizing every pattern.
    #[must_use]
    pub fn new(rules: Vec<AccountRule>, fallback: Option<Category>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| AccountRule {
                pattern: normalize(&rule.pattern),
                ..rule
            })
            .collect();
        Self { rules, fallback }
    }

    /// Loads a rule table from a JSON file.
    ///
    /// The file holds `{"rules": [{"pattern", "matcher", "category"}, ...],
    /// "fallback": "..."}` with `matcher` defaulting to `exact`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)?;
        let file: RulesFile = serde_json::from_str(&content)?;
        Ok(Self::new(file.rules, file.fallback))
    }

    /// The built-in mapping for common ledger accounts: sales and service
    /// income, COGS, the usual operating expense accounts, and the standard
    /// balance sheet account families.
    #[must_use]
    pub fn standard() -> Self {
        let rules = vec![
            AccountRule::exact("sales", Category::Revenue),
            AccountRule::exact("service income", Category::Revenue),
            AccountRule::prefix("revenue", Category::Revenue),
            AccountRule::exact("cogs", Category::CostOfGoodsSold),
            AccountRule::exact("cost of goods sold", Category::CostOfGoodsSold),
            AccountRule::exact("rent", Category::OperatingExpense),
            AccountRule::exact("salaries", Category::OperatingExpense),
            AccountRule::exact("wages", Category::OperatingExpense),
            AccountRule::exact("utilities", Category::OperatingExpense),
            AccountRule::exact("insurance", Category::OperatingExpense),
            AccountRule::prefix("depreciation", Category::Depreciation),
            AccountRule::exact("interest income", Category::OtherIncome),
            AccountRule::exact("interest expense", Category::OtherExpense),
            AccountRule::prefix("income tax", Category::IncomeTax),
            AccountRule::prefix("cash", Category::Asset),
            AccountRule::prefix("accounts receivable", Category::Asset),
            AccountRule::exact("inventory", Category::Asset),
            AccountRule::prefix("prepaid", Category::Asset),
            AccountRule::exact("equipment", Category::Asset),
            AccountRule::exact("buildings", Category::Asset),
            AccountRule::exact("land", Category::Asset),
            AccountRule::prefix("accounts payable", Category::Liability),
            AccountRule::prefix("accrued", Category::Liability),
            AccountRule::prefix("loan", Category::Liability),
            AccountRule::prefix("notes payable", Category::Liability),
            AccountRule::exact("owner's capital", Category::Equity),
            AccountRule::exact("retained earnings", Category::Equity),
            AccountRule::exact("common stock", Category::Equity),
            AccountRule::prefix("equipment purchase", Category::Investing),
            AccountRule::prefix("asset sale", Category::Investing),
            AccountRule::prefix("loan proceeds", Category::Financing),
            AccountRule::prefix("dividend", Category::Financing),
        ];
        Self::new(rules, None)
    }

    /// Sets the category assigned when no rule matches.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Option<Category>) -> Self {
        self.fallback = fallback;
        self
    }

    /// The configured fallback category, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<Category> {
        self.fallback
    }

    /// Looks up the category for an account label via the rule table alone,
    /// without applying the fallback.
    ///
    /// Exact rules win over prefix rules; the longest matching prefix wins.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<Category> {
        let normalized = normalize(label);
        let mut best_prefix: Option<&AccountRule> = None;

        for rule in &self.rules {
            match rule.matcher {
                MatchKind::Exact => {
                    if normalized == rule.pattern {
                        return Some(rule.category);
                    }
                }
                MatchKind::Prefix => {
                    if normalized.starts_with(&rule.pattern)
                        && best_prefix.is_none_or(|b| rule.pattern.len() > b.pattern.len())
                    {
                        best_prefix = Some(rule);
                    }
                }
            }
        }

        best_prefix.map(|rule| rule.category)
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for AccountRules {
    fn default() -> Self {
        Self::standard()
    }
}
