//! Statement output types shared by all report builders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finstat_shared::ReportingPeriod;

use crate::aggregate::AccountLine;
use crate::classify::UnknownAccount;

use super::balance_sheet::BalanceMismatch;
use super::reconcile::ReconciliationMismatch;

/// Visual emphasis of a statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Section heading, no amount.
    Header,
    /// A detail row.
    Detail,
    /// A section subtotal.
    Subtotal,
    /// A statement-level total.
    Total,
}

/// One row of a rendered statement.
///
/// The presentation layer consumes these as-is: `level` is the indent depth,
/// `kind` the emphasis, `amount` is absent on headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Row label.
    pub label: String,
    /// Signed amount; `None` on headings.
    pub amount: Option<Decimal>,
    /// Indent depth (0 = flush left).
    pub level: u8,
    /// Row emphasis.
    pub kind: LineKind,
}

impl StatementLine {
    /// A section heading row.
    #[must_use]
    pub fn header(label: &str) -> Self {
        Self {
            label: label.to_string(),
            amount: None,
            level: 0,
            kind: LineKind::Header,
        }
    }

    /// An indented detail row.
    #[must_use]
    pub fn detail(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount: Some(amount),
            level: 1,
            kind: LineKind::Detail,
        }
    }

    /// A section subtotal row.
    #[must_use]
    pub fn subtotal(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount: Some(amount),
            level: 0,
            kind: LineKind::Subtotal,
        }
    }

    /// A statement-level total row.
    #[must_use]
    pub fn total(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount: Some(amount),
            level: 0,
            kind: LineKind::Total,
        }
    }
}

/// A labelled group of account lines with its total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Account lines in first-appearance order.
    pub accounts: Vec<AccountLine>,
    /// Section total.
    pub total: Decimal,
}

impl Section {
    /// Builds a section from account lines, totalling them.
    #[must_use]
    pub fn from_lines(accounts: Vec<AccountLine>) -> Self {
        let total = accounts.iter().map(|line| line.amount).sum();
        Self { accounts, total }
    }

    /// Appends each account as a detail row onto `lines`.
    pub fn push_details(&self, lines: &mut Vec<StatementLine>) {
        for account in &self.accounts {
            lines.push(StatementLine::detail(&account.account, account.amount));
        }
    }
}

/// Header context shared by every statement in a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementContext {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Period the batch spans, when the batch is non-empty.
    pub period: Option<ReportingPeriod>,
}

impl Default for StatementContext {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            period: None,
        }
    }
}

/// Which statement a bundle-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// The income statement.
    Income,
    /// The balance sheet.
    BalanceSheet,
    /// The cash flow statement.
    CashFlow,
    /// The depreciation report.
    Depreciation,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Income => "income statement",
            Self::BalanceSheet => "balance sheet",
            Self::CashFlow => "cash flow statement",
            Self::Depreciation => "depreciation report",
        };
        write!(f, "{name}")
    }
}

/// Net income carried explicitly between statement builders.
///
/// Passing the figure as a value (rather than recomputing it per statement)
/// keeps the income statement, balance sheet, and cash flow statement from
/// ever drifting apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetIncome(pub Decimal);

impl NetIncome {
    /// The carried amount.
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }
}

/// Warnings delivered alongside generated statements, never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Warning {
    /// A row was skipped because its account label has no mapping.
    UnknownAccount(UnknownAccount),
    /// The balance sheet equation check failed.
    BalanceMismatch(BalanceMismatch),
    /// Two statements disagree on a shared figure.
    Reconciliation(ReconciliationMismatch),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAccount(w) => write!(f, "{w}"),
            Self::BalanceMismatch(w) => write!(f, "{w}"),
            Self::Reconciliation(w) => write!(f, "{w}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_section_from_lines_totals() {
        let section = Section::from_lines(vec![
            AccountLine {
                account: "Rent".to_string(),
                amount: dec!(10000),
            },
            AccountLine {
                account: "Salaries".to_string(),
                amount: dec!(15000),
            },
        ]);
        assert_eq!(section.total, dec!(25000));
    }

    #[test]
    fn test_statement_line_constructors() {
        let header = StatementLine::header("REVENUE");
        assert_eq!(header.kind, LineKind::Header);
        assert!(header.amount.is_none());

        let detail = StatementLine::detail("Sales", dec!(50000));
        assert_eq!(detail.level, 1);
        assert_eq!(detail.amount, Some(dec!(50000)));

        let total = StatementLine::total("NET INCOME", dec!(25000));
        assert_eq!(total.kind, LineKind::Total);
        assert_eq!(total.level, 0);
    }
}
