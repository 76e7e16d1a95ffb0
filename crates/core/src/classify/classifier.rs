//! Batch classification of transaction entries.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::rules::AccountRules;
use crate::ingest::TransactionEntry;

/// A transaction entry with its assigned category.
///
/// Created once per classification pass and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// The underlying transaction entry.
    pub entry: TransactionEntry,
    /// The category assigned by the rule table.
    pub category: Category,
}

/// Warning recorded for a row whose account label matched no rule.
///
/// The row is excluded from aggregation; the batch continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownAccount {
    /// 1-based position of the row in the batch.
    pub row: usize,
    /// The unmapped account label as it appeared.
    pub account: String,
}

impl std::fmt::Display for UnknownAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: unknown account '{}'", self.row, self.account)
    }
}

/// Outcome of classifying a batch: kept entries plus skipped-row warnings.
#[derive(Debug, Clone)]
pub struct ClassifiedBatch {
    /// Classified entries in original input order.
    pub entries: Vec<ClassifiedEntry>,
    /// One warning per skipped row, in input order.
    pub unknown: Vec<UnknownAccount>,
}

/// Classifier over an immutable rule table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rules: &'a AccountRules,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier borrowing the given rule table.
    #[must_use]
    pub fn new(rules: &'a AccountRules) -> Self {
        Self { rules }
    }

    /// Resolves an account label to a category, applying the configured
    /// fallback when no rule matches.
    #[must_use]
    pub fn classify(&self, account: &str) -> Option<Category> {
        self.rules.lookup(account).or(self.rules.fallback())
    }

    /// Classifies a whole batch, preserving input order.
    ///
    /// Rows with unmapped accounts are skipped and reported, never fatal.
    #[must_use]
    pub fn classify_batch(&self, entries: Vec<TransactionEntry>) -> ClassifiedBatch {
        let mut classified = Vec::with_capacity(entries.len());
        let mut unknown = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match self.classify(&entry.account) {
                Some(category) => classified.push(ClassifiedEntry { entry, category }),
                None => unknown.push(UnknownAccount {
                    row: index + 1,
                    account: entry.account,
                }),
            }
        }

        ClassifiedBatch {
            entries: classified,
            unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rules::AccountRule;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entry(account: &str, debit: Decimal, credit: Decimal) -> TransactionEntry {
        TransactionEntry::new(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            "",
            account,
            debit,
            credit,
            Decimal::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn test_classify_batch_preserves_order() {
        let rules = AccountRules::standard();
        let classifier = Classifier::new(&rules);
        let batch = classifier.classify_batch(vec![
            entry("Sales", Decimal::ZERO, dec!(50000)),
            entry("Rent", dec!(10000), Decimal::ZERO),
            entry("Salaries", dec!(15000), Decimal::ZERO),
        ]);

        assert!(batch.unknown.is_empty());
        let categories: Vec<Category> = batch.entries.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Revenue,
                Category::OperatingExpense,
                Category::OperatingExpense
            ]
        );
    }

    #[test]
    fn test_unknown_account_is_skipped_and_reported() {
        let rules = AccountRules::standard();
        let classifier = Classifier::new(&rules);
        let batch = classifier.classify_batch(vec![
            entry("Sales", Decimal::ZERO, dec!(50000)),
            entry("Unobtainium", dec!(123), Decimal::ZERO),
        ]);

        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.unknown.len(), 1);
        assert_eq!(batch.unknown[0].row, 2);
        assert_eq!(batch.unknown[0].account, "Unobtainium");
    }

    #[test]
    fn test_fallback_classifies_unmapped_rows() {
        let rules = AccountRules::new(
            vec![AccountRule::exact("sales", Category::Revenue)],
            Some(Category::OperatingExpense),
        );
        let classifier = Classifier::new(&rules);
        let batch = classifier.classify_batch(vec![entry("Misc Supplies", dec!(7), Decimal::ZERO)]);

        assert!(batch.unknown.is_empty());
        assert_eq!(batch.entries[0].category, Category::OperatingExpense);
    }

    #[test]
    fn test_unknown_account_display() {
        let warning = UnknownAccount {
            row: 4,
            account: "Unobtainium".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "row 4: unknown account 'Unobtainium'"
        );
    }
}
