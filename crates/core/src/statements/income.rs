//! Income statement builder.
//!
//! Follows the detailed layout: revenue and COGS sections to gross profit,
//! operating expenses (depreciation included) to operating income, other
//! income/(expense) to income before tax, then income tax to net income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::CategoryTotals;
use crate::classify::Category;

use super::error::StatementError;
use super::types::{NetIncome, Section, StatementContext, StatementLine};

/// The income statement for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Header context (currency, period).
    pub context: StatementContext,
    /// Revenue account lines.
    pub revenue: Section,
    /// Cost of goods sold account lines.
    pub cost_of_goods_sold: Section,
    /// Revenue minus COGS.
    pub gross_profit: Decimal,
    /// Operating expense account lines, depreciation included.
    pub operating_expenses: Section,
    /// Gross profit minus operating expenses.
    pub operating_income: Decimal,
    /// Other income account lines.
    pub other_income: Section,
    /// Other expense account lines.
    pub other_expense: Section,
    /// Other income minus other expense.
    pub net_other_income: Decimal,
    /// Operating income plus net other income.
    pub income_before_tax: Decimal,
    /// Income tax expense.
    pub income_tax: Decimal,
    /// Income before tax minus income tax.
    pub net_income: Decimal,
}

impl IncomeStatement {
    /// The bottom-line figure as a carryable value.
    #[must_use]
    pub fn net_income(&self) -> NetIncome {
        NetIncome(self.net_income)
    }

    /// Ordered presentation rows.
    #[must_use]
    pub fn lines(&self) -> Vec<StatementLine> {
        let mut lines = Vec::new();

        lines.push(StatementLine::header("REVENUE"));
        self.revenue.push_details(&mut lines);
        lines.push(StatementLine::subtotal("Total Revenue", self.revenue.total));

        lines.push(StatementLine::header("COST OF GOODS SOLD"));
        self.cost_of_goods_sold.push_details(&mut lines);
        lines.push(StatementLine::subtotal(
            "Total COGS",
            self.cost_of_goods_sold.total,
        ));

        lines.push(StatementLine::total("GROSS PROFIT", self.gross_profit));

        lines.push(StatementLine::header("OPERATING EXPENSES"));
        self.operating_expenses.push_details(&mut lines);
        lines.push(StatementLine::subtotal(
            "Total Operating Expenses",
            self.operating_expenses.total,
        ));

        lines.push(StatementLine::total("OPERATING INCOME", self.operating_income));

        lines.push(StatementLine::header("OTHER INCOME / (EXPENSE)"));
        self.other_income.push_details(&mut lines);
        for account in &self.other_expense.accounts {
            lines.push(StatementLine::detail(&account.account, -account.amount));
        }
        lines.push(StatementLine::subtotal(
            "Net Other Income (Expense)",
            self.net_other_income,
        ));

        lines.push(StatementLine::subtotal(
            "INCOME BEFORE TAX",
            self.income_before_tax,
        ));
        lines.push(StatementLine::detail("Income Tax Expense", self.income_tax));
        lines.push(StatementLine::total("NET INCOME", self.net_income));

        lines
    }
}

/// Builds the income statement from aggregated totals.
///
/// An entirely absent revenue category is treated as zero; in strict mode it
/// is an error instead, since zero revenue and missing data are then
/// indistinguishable.
///
/// # Errors
///
/// Returns [`StatementError::MissingRevenue`] in strict mode when no entry
/// classified as revenue.
pub fn build(
    totals: &CategoryTotals,
    strict: bool,
    context: &StatementContext,
) -> Result<IncomeStatement, StatementError> {
    if strict && !totals.has_category(Category::Revenue) {
        return Err(StatementError::MissingRevenue);
    }

    let revenue = Section::from_lines(totals.account_lines(Category::Revenue));
    let cost_of_goods_sold = Section::from_lines(totals.account_lines(Category::CostOfGoodsSold));
    let gross_profit = revenue.total - cost_of_goods_sold.total;

    // Depreciation entries report under operating expenses.
    let mut operating_lines = totals.account_lines(Category::OperatingExpense);
    operating_lines.extend(totals.account_lines(Category::Depreciation));
    let operating_expenses = Section::from_lines(operating_lines);
    let operating_income = gross_profit - operating_expenses.total;

    let other_income = Section::from_lines(totals.account_lines(Category::OtherIncome));
    let other_expense = Section::from_lines(totals.account_lines(Category::OtherExpense));
    let net_other_income = other_income.total - other_expense.total;

    let income_before_tax = operating_income + net_other_income;
    let income_tax = totals.total(Category::IncomeTax);
    let net_income = income_before_tax - income_tax;

    Ok(IncomeStatement {
        context: context.clone(),
        revenue,
        cost_of_goods_sold,
        gross_profit,
        operating_expenses,
        operating_income,
        other_income,
        other_expense,
        net_other_income,
        income_before_tax,
        income_tax,
        net_income,
    })
}
