//! Cross-statement reconciliation.
//!
//! Figures that appear on two statements must agree: net income on the
//! income statement and in the balance sheet equity section, and ending
//! cash on the cash flow statement against the balance sheet cash lines.
//! Mismatches are warnings, never fatal, and are always returned with the
//! statements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance_sheet::{BalanceSheet, NET_INCOME_LABEL};
use super::cash_flow::{CashAccounts, CashFlowStatement};
use super::income::IncomeStatement;

/// A figure computed independently on two statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciledFigure {
    /// Net income (income statement vs balance sheet equity line).
    NetIncome,
    /// Ending cash (cash flow statement vs balance sheet cash lines).
    EndingCash,
}

impl std::fmt::Display for ReconciledFigure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NetIncome => "net income",
            Self::EndingCash => "ending cash",
        };
        write!(f, "{name}")
    }
}

/// A cross-statement figure that failed to reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationMismatch {
    /// Which figure disagreed.
    pub figure: ReconciledFigure,
    /// The first statement's value.
    pub left: Decimal,
    /// The second statement's value.
    pub right: Decimal,
    /// Left minus right.
    pub difference: Decimal,
}

impl std::fmt::Display for ReconciliationMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} does not reconcile: {} vs {} (difference {})",
            self.figure, self.left, self.right, self.difference
        )
    }
}

fn check(figure: ReconciledFigure, left: Decimal, right: Decimal) -> Option<ReconciliationMismatch> {
    (left != right).then(|| ReconciliationMismatch {
        figure,
        left,
        right,
        difference: left - right,
    })
}

/// Reconciles whatever statements were generated.
///
/// Omitted statements are skipped, not errors. Returns one mismatch per
/// disagreeing figure.
#[must_use]
pub fn reconcile(
    income: Option<&IncomeStatement>,
    balance_sheet: Option<&BalanceSheet>,
    cash_flow: Option<&CashFlowStatement>,
    cash_accounts: &CashAccounts,
) -> Vec<ReconciliationMismatch> {
    let mut mismatches = Vec::new();

    if let (Some(income), Some(sheet)) = (income, balance_sheet) {
        let carried = sheet
            .equity
            .accounts
            .iter()
            .find(|line| line.account == NET_INCOME_LABEL)
            .map_or(Decimal::ZERO, |line| line.amount);
        mismatches.extend(check(
            ReconciledFigure::NetIncome,
            income.net_income,
            carried,
        ));
    }

    if let (Some(cash_flow), Some(sheet)) = (cash_flow, balance_sheet) {
        let sheet_cash = sheet.asset_total_matching(cash_accounts.patterns());
        mismatches.extend(check(
            ReconciledFigure::EndingCash,
            cash_flow.ending_cash,
            sheet_cash,
        ));
    }

    mismatches
}
