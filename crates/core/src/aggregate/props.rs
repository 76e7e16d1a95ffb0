//! Property-based tests for aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::CategoryTotals;
use crate::classify::{Category, ClassifiedEntry};
use crate::ingest::TransactionEntry;

const CATEGORIES: [Category; 12] = [
    Category::Revenue,
    Category::CostOfGoodsSold,
    Category::OperatingExpense,
    Category::OtherIncome,
    Category::OtherExpense,
    Category::IncomeTax,
    Category::Depreciation,
    Category::Asset,
    Category::Liability,
    Category::Equity,
    Category::Investing,
    Category::Financing,
];

fn build_entries(raw: &[(u8, u16, bool)]) -> Vec<ClassifiedEntry> {
    raw.iter()
        .enumerate()
        .map(|(i, &(selector, amount, is_debit))| {
            let amount = Decimal::from(amount);
            let (debit, credit) = if is_debit {
                (amount, Decimal::ZERO)
            } else {
                (Decimal::ZERO, amount)
            };
            ClassifiedEntry {
                entry: TransactionEntry::new(
                    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                    format!("entry {i}"),
                    format!("Account {}", selector % 7),
                    debit,
                    credit,
                    Decimal::ZERO,
                )
                .unwrap(),
                category: CATEGORIES[usize::from(selector) % CATEGORIES.len()],
            }
        })
        .collect()
}

proptest! {
    /// Shuffling a batch never changes any category total: aggregation is
    /// summation only, so it must be order-independent.
    #[test]
    fn test_totals_are_order_independent(
        (original, shuffled) in prop::collection::vec(any::<(u8, u16, bool)>(), 0..40)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let lhs = CategoryTotals::from_entries(&build_entries(&original));
        let rhs = CategoryTotals::from_entries(&build_entries(&shuffled));

        for category in CATEGORIES {
            prop_assert_eq!(lhs.total(category), rhs.total(category));
        }
    }

    /// Account-line amounts always sum to the category total.
    #[test]
    fn test_account_lines_sum_to_total(
        raw in prop::collection::vec(any::<(u8, u16, bool)>(), 0..40)
    ) {
        let totals = CategoryTotals::from_entries(&build_entries(&raw));

        for category in CATEGORIES {
            let folded: Decimal = totals
                .account_lines(category)
                .iter()
                .map(|line| line.amount)
                .sum();
            prop_assert_eq!(folded, totals.total(category));
        }
    }
}
