//! Ingestion error types.
//!
//! A malformed row aborts the whole batch: callers get either every entry
//! or an error naming the first offending row, never a partial batch.

use thiserror::Error;

/// Validation failure for a single record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The date field is not an ISO calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// An amount field is not a valid decimal number.
    #[error("invalid {column} amount '{value}'")]
    InvalidAmount {
        /// Which column failed to parse.
        column: &'static str,
        /// The raw field value.
        value: String,
    },

    /// Debit and credit amounts must be non-negative.
    #[error("{column} amount cannot be negative")]
    NegativeAmount {
        /// Which column carried the negative amount.
        column: &'static str,
    },

    /// At most one of debit/credit may be non-zero per entry.
    #[error("both debit and credit are non-zero")]
    BothSidesNonZero,
}

/// Errors that abort a batch ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A row failed validation; the row number is 1-based over data rows.
    #[error("row {row}: {source}")]
    Row {
        /// 1-based data row number.
        row: usize,
        /// The underlying validation failure.
        #[source]
        source: RecordError,
    },

    /// The underlying CSV reader failed (malformed file, I/O error).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_display_includes_row_number() {
        let err = IngestError::Row {
            row: 3,
            source: RecordError::InvalidDate("2025-13-40".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "row 3: invalid date '2025-13-40', expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::InvalidAmount {
            column: "debit",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid debit amount 'abc'");

        let err = RecordError::NegativeAmount { column: "credit" };
        assert_eq!(err.to_string(), "credit amount cannot be negative");
    }
}
