//! Cash flow statement builder (indirect method).
//!
//! Operating cash is net income with depreciation added back; investing and
//! financing sections list their tagged entries with signed cash totals.
//! Beginning cash comes from the batch's opening balance rows on cash
//! accounts, so a batch without any opening balance cannot produce a
//! meaningful statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::CategoryTotals;
use crate::classify::rules::normalize;
use crate::classify::Category;

use super::error::StatementError;
use super::types::{NetIncome, Section, StatementContext, StatementLine};

/// Account label patterns identifying cash accounts.
///
/// Matched as case-insensitive substrings, mirroring how ledgers name cash
/// accounts ("Cash", "Cash at Bank", "Petty Cash").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashAccounts {
    patterns: Vec<String>,
}

impl CashAccounts {
    /// Builds a matcher from label patterns, normalizing each.
    #[must_use]
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns: patterns.into_iter().map(|p| normalize(&p)).collect(),
        }
    }

    /// Returns true if the label names a cash account.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        let normalized = normalize(label);
        self.patterns.iter().any(|p| normalized.contains(p))
    }

    /// The configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for CashAccounts {
    fn default() -> Self {
        Self::new(vec!["cash".to_string()])
    }
}

/// The cash flow statement for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Header context (currency, period).
    pub context: StatementContext,
    /// Net income carried from the income statement.
    pub net_income: Decimal,
    /// Depreciation added back as a non-cash item.
    pub depreciation_addback: Decimal,
    /// Net cash from operating activities.
    pub operating: Decimal,
    /// Investing activity lines with signed cash total.
    pub investing: Section,
    /// Financing activity lines with signed cash total.
    pub financing: Section,
    /// Sum of the three sections.
    pub net_change: Decimal,
    /// Cash at the start of the period, from opening balance rows.
    pub beginning_cash: Decimal,
    /// Beginning cash plus net change.
    pub ending_cash: Decimal,
}

impl CashFlowStatement {
    /// Ordered presentation rows.
    #[must_use]
    pub fn lines(&self) -> Vec<StatementLine> {
        let mut lines = Vec::new();

        lines.push(StatementLine::header("OPERATING ACTIVITIES"));
        lines.push(StatementLine::detail("Net income", self.net_income));
        lines.push(StatementLine::detail(
            "Add: Depreciation",
            self.depreciation_addback,
        ));
        lines.push(StatementLine::subtotal(
            "Net cash from operating activities",
            self.operating,
        ));

        lines.push(StatementLine::header("INVESTING ACTIVITIES"));
        self.investing.push_details(&mut lines);
        lines.push(StatementLine::subtotal(
            "Net cash from investing activities",
            self.investing.total,
        ));

        lines.push(StatementLine::header("FINANCING ACTIVITIES"));
        self.financing.push_details(&mut lines);
        lines.push(StatementLine::subtotal(
            "Net cash from financing activities",
            self.financing.total,
        ));

        lines.push(StatementLine::total(
            "Net increase (decrease) in cash",
            self.net_change,
        ));
        lines.push(StatementLine::detail("Cash at beginning", self.beginning_cash));
        lines.push(StatementLine::total("Cash at end", self.ending_cash));

        lines
    }
}

/// Builds the cash flow statement from aggregated totals.
///
/// # Errors
///
/// Returns [`StatementError::MissingNetIncome`] when the income statement
/// was omitted, and [`StatementError::MissingOpeningBalance`] when a
/// non-empty batch carries no opening balance row. A fully empty batch
/// trivially yields an all-zero statement.
pub fn build(
    totals: &CategoryTotals,
    net_income: Option<NetIncome>,
    cash_accounts: &CashAccounts,
    context: &StatementContext,
) -> Result<CashFlowStatement, StatementError> {
    let net_income = net_income.ok_or(StatementError::MissingNetIncome)?.amount();

    if !totals.has_opening_balances() && !totals.is_empty() {
        return Err(StatementError::MissingOpeningBalance);
    }

    let beginning_cash: Decimal = totals
        .opening_balances()
        .iter()
        .filter(|o| o.category == Category::Asset && cash_accounts.matches(&o.account))
        .map(|o| o.amount)
        .sum();

    let depreciation_addback = totals.total(Category::Depreciation);
    let operating = net_income + depreciation_addback;

    let investing = Section::from_lines(totals.account_lines(Category::Investing));
    let financing = Section::from_lines(totals.account_lines(Category::Financing));

    let net_change = operating + investing.total + financing.total;
    let ending_cash = beginning_cash + net_change;

    Ok(CashFlowStatement {
        context: context.clone(),
        net_income,
        depreciation_addback,
        operating,
        investing,
        financing,
        net_change,
        beginning_cash,
        ending_cash,
    })
}
