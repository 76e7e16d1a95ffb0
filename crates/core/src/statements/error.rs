//! Statement-level error types.
//!
//! A statement that cannot be computed meaningfully is omitted from the
//! bundle; the other statements proceed. These errors are never raised for
//! merely-empty sections, only for data the arithmetic cannot do without.

use thiserror::Error;

/// Reasons a single statement is omitted from the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// Strict mode is enabled and no entry classified as revenue.
    #[error("revenue category is absent and strict mode is enabled")]
    MissingRevenue,

    /// The batch carries no opening balance row, so beginning cash is unknown.
    #[error("no opening balance row in batch; beginning cash is unknown")]
    MissingOpeningBalance,

    /// Net income is unavailable because the income statement was omitted.
    #[error("net income unavailable; income statement was not generated")]
    MissingNetIncome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StatementError::MissingRevenue.to_string(),
            "revenue category is absent and strict mode is enabled"
        );
        assert_eq!(
            StatementError::MissingOpeningBalance.to_string(),
            "no opening balance row in batch; beginning cash is unknown"
        );
    }
}
