//! Balance sheet builder.
//!
//! Assets and liabilities are partitioned into current / non-current / other
//! subsections via an explicit pattern table, never inferred from free-text
//! heuristics. The equity section closes with the net income figure carried
//! from the income statement. The accounting equation is checked, not
//! enforced: source data may be incomplete, so a mismatch is a warning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AccountLine, CategoryTotals};
use crate::classify::rules::normalize;
use crate::classify::Category;

use super::types::{NetIncome, Section, StatementContext, StatementLine};

/// Subsection classification rules for balance sheet accounts.
///
/// Patterns are matched as case-insensitive substrings of the account label;
/// labels matching no pattern land in the declared "other" bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRules {
    /// Patterns marking current assets.
    pub current_assets: Vec<String>,
    /// Patterns marking non-current assets.
    pub noncurrent_assets: Vec<String>,
    /// Patterns marking current liabilities.
    pub current_liabilities: Vec<String>,
    /// Patterns marking non-current liabilities.
    pub noncurrent_liabilities: Vec<String>,
}

impl Default for SectionRules {
    fn default() -> Self {
        let strings = |patterns: &[&str]| patterns.iter().map(ToString::to_string).collect();
        Self {
            current_assets: strings(&["cash", "receivable", "inventory", "prepaid", "short-term"]),
            noncurrent_assets: strings(&[
                "property",
                "plant",
                "equipment",
                "building",
                "machinery",
                "land",
                "long-term",
                "intangible",
                "goodwill",
            ]),
            current_liabilities: strings(&["payable", "accrued", "current portion", "short-term"]),
            noncurrent_liabilities: strings(&["loan", "bond", "mortgage", "long-term"]),
        }
    }
}

fn matches_any(patterns: &[String], label: &str) -> bool {
    let normalized = normalize(label);
    patterns.iter().any(|p| normalized.contains(&normalize(p)))
}

impl SectionRules {
    fn partition(
        &self,
        lines: Vec<AccountLine>,
        current: &[String],
        noncurrent: &[String],
    ) -> SectionGroup {
        let mut current_lines = Vec::new();
        let mut noncurrent_lines = Vec::new();
        let mut other_lines = Vec::new();

        for line in lines {
            if matches_any(current, &line.account) {
                current_lines.push(line);
            } else if matches_any(noncurrent, &line.account) {
                noncurrent_lines.push(line);
            } else {
                other_lines.push(line);
            }
        }

        SectionGroup::new(
            Section::from_lines(current_lines),
            Section::from_lines(noncurrent_lines),
            Section::from_lines(other_lines),
        )
    }

    /// Partitions asset lines into current / non-current / other.
    #[must_use]
    pub fn partition_assets(&self, lines: Vec<AccountLine>) -> SectionGroup {
        self.partition(lines, &self.current_assets, &self.noncurrent_assets)
    }

    /// Partitions liability lines into current / non-current / other.
    #[must_use]
    pub fn partition_liabilities(&self, lines: Vec<AccountLine>) -> SectionGroup {
        self.partition(lines, &self.current_liabilities, &self.noncurrent_liabilities)
    }
}

/// Current / non-current / other subsections with their combined total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    /// Current subsection.
    pub current: Section,
    /// Non-current subsection.
    pub noncurrent: Section,
    /// Everything matching neither pattern set.
    pub other: Section,
    /// Combined total across subsections.
    pub total: Decimal,
}

impl SectionGroup {
    fn new(current: Section, noncurrent: Section, other: Section) -> Self {
        let total = current.total + noncurrent.total + other.total;
        Self {
            current,
            noncurrent,
            other,
            total,
        }
    }

    /// All account lines across the three subsections.
    pub fn all_accounts(&self) -> impl Iterator<Item = &AccountLine> {
        self.current
            .accounts
            .iter()
            .chain(&self.noncurrent.accounts)
            .chain(&self.other.accounts)
    }
}

/// Label used for the carried net income equity line.
pub const NET_INCOME_LABEL: &str = "Net Income";

/// Label used for the contra-asset accumulated depreciation line.
pub const ACCUMULATED_DEPRECIATION_LABEL: &str = "Accumulated Depreciation";

/// The balance sheet for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Header context (currency, period).
    pub context: StatementContext,
    /// Asset subsections.
    pub assets: SectionGroup,
    /// Liability subsections.
    pub liabilities: SectionGroup,
    /// Equity lines, net income included.
    pub equity: Section,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity.
    pub is_balanced: bool,
}

/// The balance sheet equation check failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceMismatch {
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities plus total equity.
    pub liabilities_and_equity: Decimal,
    /// Assets minus liabilities-and-equity.
    pub difference: Decimal,
}

impl std::fmt::Display for BalanceMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "balance sheet out of balance: assets {} vs liabilities + equity {} (difference {})",
            self.total_assets, self.liabilities_and_equity, self.difference
        )
    }
}

impl BalanceSheet {
    /// Total of asset lines whose label matches any of the given patterns
    /// (case-insensitive substring). Used to tie out cash against the cash
    /// flow statement.
    #[must_use]
    pub fn asset_total_matching(&self, patterns: &[String]) -> Decimal {
        self.assets
            .all_accounts()
            .filter(|line| matches_any(patterns, &line.account))
            .map(|line| line.amount)
            .sum()
    }

    /// Ordered presentation rows.
    #[must_use]
    pub fn lines(&self) -> Vec<StatementLine> {
        let mut lines = Vec::new();

        lines.push(StatementLine::header("ASSETS"));
        push_group(&mut lines, &self.assets, "Asset");
        lines.push(StatementLine::total("TOTAL ASSETS", self.total_assets));

        lines.push(StatementLine::header("LIABILITIES"));
        push_group(&mut lines, &self.liabilities, "Liability");
        lines.push(StatementLine::total(
            "TOTAL LIABILITIES",
            self.total_liabilities,
        ));

        lines.push(StatementLine::header("EQUITY"));
        self.equity.push_details(&mut lines);
        lines.push(StatementLine::total("TOTAL EQUITY", self.total_equity));
        lines.push(StatementLine::total(
            "TOTAL LIABILITIES & EQUITY",
            self.liabilities_and_equity,
        ));

        lines
    }
}

fn push_group(lines: &mut Vec<StatementLine>, group: &SectionGroup, noun: &str) {
    let subsections = [
        (format!("Current {noun}s"), &group.current),
        (format!("Non-current {noun}s"), &group.noncurrent),
        (format!("Other {noun}s"), &group.other),
    ];
    for (label, section) in subsections {
        if section.accounts.is_empty() {
            continue;
        }
        lines.push(StatementLine::header(&label));
        section.push_details(lines);
        lines.push(StatementLine::subtotal(
            &format!("Total {label}"),
            section.total,
        ));
    }
}

/// Builds the balance sheet from aggregated totals.
///
/// `net_income` is the figure carried from the income statement; when the
/// income statement was omitted the equity line is skipped and the equation
/// check will surface the gap. The aggregated depreciation total feeds the
/// accumulated depreciation contra-asset line. Returns the sheet plus the
/// mismatch warning when assets do not equal liabilities plus equity.
#[must_use]
pub fn build(
    totals: &CategoryTotals,
    net_income: Option<NetIncome>,
    rules: &SectionRules,
    context: &StatementContext,
) -> (BalanceSheet, Option<BalanceMismatch>) {
    let mut asset_lines = totals.account_lines(Category::Asset);
    let accumulated = totals.total(Category::Depreciation);
    if !accumulated.is_zero() {
        asset_lines.push(AccountLine {
            account: ACCUMULATED_DEPRECIATION_LABEL.to_string(),
            amount: -accumulated,
        });
    }
    let assets = rules.partition_assets(asset_lines);

    let liabilities = rules.partition_liabilities(totals.account_lines(Category::Liability));

    let mut equity_lines = totals.account_lines(Category::Equity);
    if let Some(net_income) = net_income {
        equity_lines.push(AccountLine {
            account: NET_INCOME_LABEL.to_string(),
            amount: net_income.amount(),
        });
    }
    let equity = Section::from_lines(equity_lines);

    let total_assets = assets.total;
    let total_liabilities = liabilities.total;
    let total_equity = equity.total;
    let liabilities_and_equity = total_liabilities + total_equity;
    let is_balanced = total_assets == liabilities_and_equity;

    let mismatch = (!is_balanced).then(|| BalanceMismatch {
        total_assets,
        liabilities_and_equity,
        difference: total_assets - liabilities_and_equity,
    });

    let sheet = BalanceSheet {
        context: context.clone(),
        assets,
        liabilities,
        equity,
        total_assets,
        total_liabilities,
        total_equity,
        liabilities_and_equity,
        is_balanced,
    };

    (sheet, mismatch)
}
