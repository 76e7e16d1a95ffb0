//! Depreciation report builder and straight-line schedule generator.
//!
//! The report lists every depreciation-tagged entry individually, grouped by
//! asset description with a running accumulated figure. The schedule
//! generator covers the other direction: given asset master data it produces
//! the straight-line expense and the yearly journal lines.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::CategoryTotals;
use crate::classify::Category;

use super::types::{StatementContext, StatementLine};

/// One depreciation charge with its running accumulated total for the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationLine {
    /// Date of the charge.
    pub date: NaiveDate,
    /// Charge amount.
    pub amount: Decimal,
    /// Accumulated depreciation for the asset up to and including this line.
    pub accumulated: Decimal,
}

/// All charges for one asset, grouped by its entry description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDepreciation {
    /// Asset description as it appeared on the entries.
    pub asset: String,
    /// Charges in original entry order.
    pub lines: Vec<DepreciationLine>,
    /// Total accumulated depreciation for the asset.
    pub total: Decimal,
}

/// The depreciation report for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationReport {
    /// Header context (currency, period).
    pub context: StatementContext,
    /// Per-asset groups in first-appearance order.
    pub assets: Vec<AssetDepreciation>,
    /// Total depreciation across all assets.
    pub total: Decimal,
}

impl DepreciationReport {
    /// Ordered presentation rows.
    #[must_use]
    pub fn lines(&self) -> Vec<StatementLine> {
        let mut lines = Vec::new();
        for asset in &self.assets {
            lines.push(StatementLine::header(&asset.asset));
            for line in &asset.lines {
                lines.push(StatementLine::detail(
                    &format!("{}", line.date),
                    line.amount,
                ));
            }
            lines.push(StatementLine::subtotal(
                &format!("Accumulated - {}", asset.asset),
                asset.total,
            ));
        }
        lines.push(StatementLine::total("TOTAL DEPRECIATION", self.total));
        lines
    }
}

/// Builds the depreciation report from aggregated totals.
///
/// Entries group by description (the asset name on a depreciation row);
/// rows with a blank description fall back to the account label. An empty
/// batch yields an empty report, not an error.
#[must_use]
pub fn build(totals: &CategoryTotals, context: &StatementContext) -> DepreciationReport {
    let mut assets: Vec<AssetDepreciation> = Vec::new();
    let mut total = Decimal::ZERO;

    for classified in totals.entries(Category::Depreciation) {
        let entry = &classified.entry;
        let name = if entry.description.trim().is_empty() {
            entry.account.as_str()
        } else {
            entry.description.as_str()
        };
        let amount = Category::Depreciation.signed_amount(entry.debit, entry.credit);
        total += amount;

        if !assets.iter().any(|a| a.asset == name) {
            assets.push(AssetDepreciation {
                asset: name.to_string(),
                lines: Vec::new(),
                total: Decimal::ZERO,
            });
        }
        if let Some(group) = assets.iter_mut().find(|a| a.asset == name) {
            group.total += amount;
            group.lines.push(DepreciationLine {
                date: entry.date,
                amount,
                accumulated: group.total,
            });
        }
    }

    DepreciationReport {
        context: context.clone(),
        assets,
        total,
    }
}

/// Asset master data for straight-line depreciation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationAsset {
    /// Asset name.
    pub name: String,
    /// Acquisition cost.
    pub cost: Decimal,
    /// Salvage value at end of life.
    pub salvage: Decimal,
    /// Useful life in years; zero is treated as one year.
    pub life_years: u32,
}

impl DepreciationAsset {
    /// Straight-line expense per year: `(cost - salvage) / life`, floored at
    /// zero when salvage exceeds cost.
    #[must_use]
    pub fn annual_expense(&self) -> Decimal {
        let life = Decimal::from(self.life_years.max(1));
        ((self.cost - self.salvage) / life).max(Decimal::ZERO)
    }
}

/// One generated depreciation journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationJournalEntry {
    /// Calendar year of the charge.
    pub period: i32,
    /// Account debited.
    pub debit_account: String,
    /// Account credited.
    pub credit_account: String,
    /// Charge amount.
    pub amount: Decimal,
    /// Human-readable narration.
    pub narration: String,
}

/// Generates yearly straight-line journal lines for a set of assets.
///
/// Each asset contributes one entry per year of life starting at
/// `start_year`, debiting depreciation expense against accumulated
/// depreciation.
#[must_use]
pub fn straight_line_schedule(
    assets: &[DepreciationAsset],
    start_year: i32,
) -> Vec<DepreciationJournalEntry> {
    let mut journal = Vec::new();

    for asset in assets {
        let expense = asset.annual_expense();
        for offset in 0..asset.life_years.max(1) {
            #[allow(clippy::cast_possible_wrap)]
            let period = start_year + offset as i32;
            journal.push(DepreciationJournalEntry {
                period,
                debit_account: "Depreciation Expense".to_string(),
                credit_account: "Accumulated Depreciation".to_string(),
                amount: expense,
                narration: format!(
                    "Straight-line depreciation for {} - year {}",
                    asset.name, period
                ),
            });
        }
    }

    journal
}
