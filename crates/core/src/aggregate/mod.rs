//! Category aggregation with normal-balance sign conventions.
//!
//! Totals are plain sums on each category's normal side, so they are
//! associative and independent of entry order. The per-category breakdown
//! keeps original input order for report detail display. Opening balance
//! rows (both sides zero) contribute their carried balance to balance sheet
//! categories so account lines show opening plus movements; they never touch
//! flow categories.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::{Category, ClassifiedEntry};

/// An account-level line folded from a category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLine {
    /// Account label as it appeared in the ledger.
    pub account: String,
    /// Signed amount on the category's normal side.
    pub amount: Decimal,
}

/// Opening balance carried on a row with both sides zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningBalance {
    /// Account label.
    pub account: String,
    /// Category the account classified to.
    pub category: Category,
    /// Opening amount, stated on the category's normal side.
    pub amount: Decimal,
}

/// Signed totals and ordered breakdowns per category for one batch.
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    totals: BTreeMap<Category, Decimal>,
    breakdown: BTreeMap<Category, Vec<ClassifiedEntry>>,
    opening: Vec<OpeningBalance>,
}

impl CategoryTotals {
    /// Aggregates a classified batch.
    #[must_use]
    pub fn from_entries(entries: &[ClassifiedEntry]) -> Self {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        let mut breakdown: BTreeMap<Category, Vec<ClassifiedEntry>> = BTreeMap::new();
        let mut opening = Vec::new();

        for classified in entries {
            let category = classified.category;
            if classified.entry.is_opening_balance() {
                let amount = classified.entry.balance;
                opening.push(OpeningBalance {
                    account: classified.entry.account.clone(),
                    category,
                    amount,
                });
                if category.is_balance_sheet() {
                    *totals.entry(category).or_default() += amount;
                }
                continue;
            }

            let amount = category.signed_amount(classified.entry.debit, classified.entry.credit);
            *totals.entry(category).or_default() += amount;
            breakdown.entry(category).or_default().push(classified.clone());
        }

        Self {
            totals,
            breakdown,
            opening,
        }
    }

    /// Signed total for a category, zero when the category never appeared.
    #[must_use]
    pub fn total(&self, category: Category) -> Decimal {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Movement entries for a category in original input order.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[ClassifiedEntry] {
        self.breakdown.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Returns true if any entry (movement or opening) touched the category.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.totals.contains_key(&category)
            || self.breakdown.contains_key(&category)
            || self.opening.iter().any(|o| o.category == category)
    }

    /// Returns true if the batch aggregated to nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty() && self.breakdown.is_empty() && self.opening.is_empty()
    }

    /// Opening balance rows in input order.
    #[must_use]
    pub fn opening_balances(&self) -> &[OpeningBalance] {
        &self.opening
    }

    /// Returns true if the batch carried at least one opening balance row.
    #[must_use]
    pub fn has_opening_balances(&self) -> bool {
        !self.opening.is_empty()
    }

    /// Account-level lines for a category, folded by label in
    /// first-appearance order. Opening balances seed the fold so balance
    /// sheet lines show opening plus movements.
    #[must_use]
    pub fn account_lines(&self, category: Category) -> Vec<AccountLine> {
        let mut lines: Vec<AccountLine> = Vec::new();

        let mut add = |account: &str, amount: Decimal| {
            match lines.iter_mut().find(|line| line.account == account) {
                Some(line) => line.amount += amount,
                None => lines.push(AccountLine {
                    account: account.to_string(),
                    amount,
                }),
            }
        };

        for opening in self.opening.iter().filter(|o| o.category == category) {
            if category.is_balance_sheet() {
                add(&opening.account, opening.amount);
            }
        }
        for classified in self.entries(category) {
            let amount = category.signed_amount(classified.entry.debit, classified.entry.credit);
            add(&classified.entry.account, amount);
        }

        lines
    }
}

#[cfg(test)]
mod props;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::TransactionEntry;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn classified(
        account: &str,
        category: Category,
        debit: Decimal,
        credit: Decimal,
    ) -> ClassifiedEntry {
        ClassifiedEntry {
            entry: TransactionEntry::new(
                NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                "",
                account,
                debit,
                credit,
                Decimal::ZERO,
            )
            .unwrap(),
            category,
        }
    }

    fn opening(account: &str, category: Category, balance: Decimal) -> ClassifiedEntry {
        let mut entry = classified(account, category, Decimal::ZERO, Decimal::ZERO);
        entry.entry.balance = balance;
        entry
    }

    #[test]
    fn test_totals_follow_normal_side() {
        let totals = CategoryTotals::from_entries(&[
            classified("Sales", Category::Revenue, Decimal::ZERO, dec!(50000)),
            classified("Rent", Category::OperatingExpense, dec!(10000), Decimal::ZERO),
            classified("Salaries", Category::OperatingExpense, dec!(15000), Decimal::ZERO),
        ]);

        assert_eq!(totals.total(Category::Revenue), dec!(50000));
        assert_eq!(totals.total(Category::OperatingExpense), dec!(25000));
        assert_eq!(totals.total(Category::Asset), Decimal::ZERO);
        assert!(!totals.has_category(Category::Asset));
    }

    #[test]
    fn test_opening_rows_feed_balance_sheet_totals_only() {
        let totals = CategoryTotals::from_entries(&[
            opening("Cash", Category::Asset, dec!(20000)),
            classified("Cash", Category::Asset, dec!(5000), Decimal::ZERO),
        ]);

        assert_eq!(totals.total(Category::Asset), dec!(25000));
        assert!(totals.has_opening_balances());
        assert_eq!(totals.opening_balances().len(), 1);
        // The opening row is not a movement.
        assert_eq!(totals.entries(Category::Asset).len(), 1);
    }

    #[test]
    fn test_account_lines_fold_in_first_appearance_order() {
        let totals = CategoryTotals::from_entries(&[
            classified("Rent", Category::OperatingExpense, dec!(10000), Decimal::ZERO),
            classified("Salaries", Category::OperatingExpense, dec!(15000), Decimal::ZERO),
            classified("Rent", Category::OperatingExpense, dec!(2000), Decimal::ZERO),
        ]);

        let lines = totals.account_lines(Category::OperatingExpense);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].account, "Rent");
        assert_eq!(lines[0].amount, dec!(12000));
        assert_eq!(lines[1].account, "Salaries");
        assert_eq!(lines[1].amount, dec!(15000));
    }

    #[test]
    fn test_account_lines_include_opening_balances() {
        let totals = CategoryTotals::from_entries(&[
            opening("Cash", Category::Asset, dec!(20000)),
            classified("Cash", Category::Asset, Decimal::ZERO, dec!(3000)),
        ]);

        let lines = totals.account_lines(Category::Asset);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].amount, dec!(17000));
    }

    #[test]
    fn test_empty_batch() {
        let totals = CategoryTotals::from_entries(&[]);
        assert_eq!(totals.total(Category::Revenue), Decimal::ZERO);
        assert!(totals.account_lines(Category::Asset).is_empty());
        assert!(!totals.has_opening_balances());
    }
}
