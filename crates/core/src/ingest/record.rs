//! Transaction entry domain types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// A single ledger row: one dated account movement with its running balance.
///
/// Invariant, enforced on construction: at most one of debit/credit is
/// non-zero. A row with both sides zero is an opening balance marker whose
/// `balance` field carries the account's opening amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Account label as it appears in the ledger.
    pub account: String,
    /// Debit amount (zero when the credit side is used).
    pub debit: Decimal,
    /// Credit amount (zero when the debit side is used).
    pub credit: Decimal,
    /// Running balance carried on the row.
    pub balance: Decimal,
}

impl TransactionEntry {
    /// Creates a validated entry; the single-record ingestion path.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when an amount is negative or both sides
    /// are non-zero.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        account: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
        balance: Decimal,
    ) -> Result<Self, RecordError> {
        if debit < Decimal::ZERO {
            return Err(RecordError::NegativeAmount { column: "debit" });
        }
        if credit < Decimal::ZERO {
            return Err(RecordError::NegativeAmount { column: "credit" });
        }
        if !debit.is_zero() && !credit.is_zero() {
            return Err(RecordError::BothSidesNonZero);
        }
        Ok(Self {
            date,
            description: description.into(),
            account: account.into(),
            debit,
            credit,
            balance,
        })
    }

    /// True if this row is an opening balance marker (both sides zero).
    #[must_use]
    pub fn is_opening_balance(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// Unvalidated row as it arrives from a tabular file or an entry form.
///
/// Field names follow the export header; the capitalized aliases accept
/// spreadsheet-style headers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    /// ISO date string.
    #[serde(alias = "Date")]
    pub date: String,
    /// Free-text description.
    #[serde(default, alias = "Description")]
    pub description: String,
    /// Account label.
    #[serde(alias = "Account")]
    pub account: String,
    /// Debit amount; blank means zero.
    #[serde(default, alias = "Debit")]
    pub debit: String,
    /// Credit amount; blank means zero.
    #[serde(default, alias = "Credit")]
    pub credit: String,
    /// Running balance; blank means zero.
    #[serde(default, alias = "Balance")]
    pub balance: String,
}

fn parse_amount(column: &'static str, raw: &str) -> Result<Decimal, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(trimmed).map_err(|_| RecordError::InvalidAmount {
        column,
        value: raw.to_string(),
    })
}

impl RawRecord {
    /// Validates the raw fields into a [`TransactionEntry`].
    ///
    /// Blank debit/credit/balance cells parse as zero; anything else must be
    /// a valid decimal. Dates must be ISO (`YYYY-MM-DD`).
    pub fn into_entry(self) -> Result<TransactionEntry, RecordError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| RecordError::InvalidDate(self.date.clone()))?;
        let debit = parse_amount("debit", &self.debit)?;
        let credit = parse_amount("credit", &self.credit)?;
        let balance = parse_amount("balance", &self.balance)?;

        TransactionEntry::new(
            date,
            self.description.trim().to_string(),
            self.account.trim().to_string(),
            debit,
            credit,
            balance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_accepts_single_sided_entry() {
        let entry = TransactionEntry::new(
            d(2025, 10, 1),
            "October sales",
            "Sales",
            Decimal::ZERO,
            dec!(50000),
            dec!(50000),
        )
        .unwrap();
        assert!(!entry.is_opening_balance());
        assert_eq!(entry.credit, dec!(50000));
    }

    #[test]
    fn test_new_rejects_negative_amounts() {
        let err = TransactionEntry::new(
            d(2025, 10, 1),
            "",
            "Sales",
            dec!(-1),
            Decimal::ZERO,
            Decimal::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::NegativeAmount { column: "debit" });
    }

    #[test]
    fn test_new_rejects_both_sides_non_zero() {
        let err = TransactionEntry::new(
            d(2025, 10, 1),
            "",
            "Sales",
            dec!(10),
            dec!(10),
            Decimal::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::BothSidesNonZero);
    }

    #[test]
    fn test_opening_balance_row() {
        let entry = TransactionEntry::new(
            d(2025, 10, 1),
            "Opening balance",
            "Cash",
            Decimal::ZERO,
            Decimal::ZERO,
            dec!(20000),
        )
        .unwrap();
        assert!(entry.is_opening_balance());
        assert_eq!(entry.balance, dec!(20000));
    }

    #[test]
    fn test_raw_record_blank_amounts_are_zero() {
        let raw = RawRecord {
            date: "2025-10-03".to_string(),
            description: "Office rent".to_string(),
            account: " Rent ".to_string(),
            debit: "10000".to_string(),
            credit: String::new(),
            balance: String::new(),
        };
        let entry = raw.into_entry().unwrap();
        assert_eq!(entry.account, "Rent");
        assert_eq!(entry.debit, dec!(10000));
        assert_eq!(entry.credit, Decimal::ZERO);
    }

    #[test]
    fn test_raw_record_rejects_bad_date() {
        let raw = RawRecord {
            date: "10/03/2025".to_string(),
            account: "Rent".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(
            raw.into_entry().unwrap_err(),
            RecordError::InvalidDate("10/03/2025".to_string())
        );
    }

    #[test]
    fn test_raw_record_rejects_bad_amount() {
        let raw = RawRecord {
            date: "2025-10-03".to_string(),
            account: "Rent".to_string(),
            debit: "ten thousand".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(
            raw.into_entry().unwrap_err(),
            RecordError::InvalidAmount {
                column: "debit",
                value: "ten thousand".to_string(),
            }
        );
    }
}
