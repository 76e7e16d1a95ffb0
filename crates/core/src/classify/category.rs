//! Account categories and normal balance sides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The side of the ledger on which an account type's balance increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// Balance grows with debits.
    Debit,
    /// Balance grows with credits.
    Credit,
}

/// Report category assigned to a transaction entry.
///
/// `Investing` and `Financing` tag cash flow activity rather than an account
/// type; their aggregates are signed as cash impact (credit minus debit), so
/// an outflow such as an equipment purchase aggregates negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sales and service income.
    Revenue,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Operating expenses (rent, salaries, utilities, ...).
    OperatingExpense,
    /// Income outside the main business (interest earned, gains).
    OtherIncome,
    /// Expenses outside operations (interest paid, losses).
    OtherExpense,
    /// Income tax expense.
    IncomeTax,
    /// Depreciation expense entries.
    Depreciation,
    /// Balance sheet assets.
    Asset,
    /// Balance sheet liabilities.
    Liability,
    /// Balance sheet equity.
    Equity,
    /// Cash flow investing activity.
    Investing,
    /// Cash flow financing activity.
    Financing,
}

impl Category {
    /// Side on which this category's balance normally increases.
    #[must_use]
    pub fn normal_balance(self) -> BalanceSide {
        match self {
            Self::CostOfGoodsSold
            | Self::OperatingExpense
            | Self::OtherExpense
            | Self::IncomeTax
            | Self::Depreciation
            | Self::Asset => BalanceSide::Debit,
            Self::Revenue
            | Self::OtherIncome
            | Self::Liability
            | Self::Equity
            | Self::Investing
            | Self::Financing => BalanceSide::Credit,
        }
    }

    /// Returns true for categories reported on the balance sheet.
    #[must_use]
    pub fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Signed amount of a debit/credit pair on this category's normal side.
    #[must_use]
    pub fn signed_amount(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self.normal_balance() {
            BalanceSide::Debit => debit - credit,
            BalanceSide::Credit => credit - debit,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Revenue => "revenue",
            Self::CostOfGoodsSold => "cost_of_goods_sold",
            Self::OperatingExpense => "operating_expense",
            Self::OtherIncome => "other_income",
            Self::OtherExpense => "other_expense",
            Self::IncomeTax => "income_tax",
            Self::Depreciation => "depreciation",
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Investing => "investing",
            Self::Financing => "financing",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" => Ok(Self::Revenue),
            "cost_of_goods_sold" | "cogs" => Ok(Self::CostOfGoodsSold),
            "operating_expense" => Ok(Self::OperatingExpense),
            "other_income" => Ok(Self::OtherIncome),
            "other_expense" => Ok(Self::OtherExpense),
            "income_tax" => Ok(Self::IncomeTax),
            "depreciation" => Ok(Self::Depreciation),
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "investing" => Ok(Self::Investing),
            "financing" => Ok(Self::Financing),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(Category::Revenue, BalanceSide::Credit)]
    #[case(Category::OtherIncome, BalanceSide::Credit)]
    #[case(Category::Liability, BalanceSide::Credit)]
    #[case(Category::Equity, BalanceSide::Credit)]
    #[case(Category::Investing, BalanceSide::Credit)]
    #[case(Category::Financing, BalanceSide::Credit)]
    #[case(Category::Asset, BalanceSide::Debit)]
    #[case(Category::CostOfGoodsSold, BalanceSide::Debit)]
    #[case(Category::OperatingExpense, BalanceSide::Debit)]
    #[case(Category::OtherExpense, BalanceSide::Debit)]
    #[case(Category::Depreciation, BalanceSide::Debit)]
    #[case(Category::IncomeTax, BalanceSide::Debit)]
    fn test_normal_balance_sides(#[case] category: Category, #[case] side: BalanceSide) {
        assert_eq!(category.normal_balance(), side);
    }

    #[test]
    fn test_signed_amount_follows_normal_side() {
        assert_eq!(
            Category::Revenue.signed_amount(dec!(0), dec!(500)),
            dec!(500)
        );
        assert_eq!(
            Category::OperatingExpense.signed_amount(dec!(200), dec!(0)),
            dec!(200)
        );
        // Investing outflow (debit) aggregates negative cash impact.
        assert_eq!(
            Category::Investing.signed_amount(dec!(5000), dec!(0)),
            dec!(-5000)
        );
    }

    #[test]
    fn test_balance_sheet_categories() {
        assert!(Category::Asset.is_balance_sheet());
        assert!(Category::Liability.is_balance_sheet());
        assert!(Category::Equity.is_balance_sheet());
        assert!(!Category::Revenue.is_balance_sheet());
        assert!(!Category::Investing.is_balance_sheet());
    }

    #[test]
    fn test_from_str_round_trip() {
        for category in [
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
        ] {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(Category::from_str("gibberish").is_err());
    }
}
