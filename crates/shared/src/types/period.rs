//! Reporting period derived from a transaction batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range a set of statements covers.
///
/// Derived from the earliest and latest entry dates in a batch; statements
/// carry it so the presentation layer can label the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period, swapping the bounds if they arrive reversed.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Derives the period spanned by a set of dates, or `None` when empty.
    pub fn from_dates<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut iter = dates.into_iter();
        let first = iter.next()?;
        let (start, end) = iter.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { start, end })
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_swaps_reversed_bounds() {
        let period = ReportingPeriod::new(d(2025, 12, 31), d(2025, 1, 1));
        assert_eq!(period.start, d(2025, 1, 1));
        assert_eq!(period.end, d(2025, 12, 31));
    }

    #[test]
    fn test_from_dates_spans_extremes() {
        let period = ReportingPeriod::from_dates(vec![
            d(2025, 10, 3),
            d(2025, 10, 1),
            d(2025, 10, 5),
        ])
        .unwrap();
        assert_eq!(period.start, d(2025, 10, 1));
        assert_eq!(period.end, d(2025, 10, 5));
    }

    #[test]
    fn test_from_dates_empty() {
        assert!(ReportingPeriod::from_dates(Vec::new()).is_none());
    }

    #[rstest]
    #[case(2025, 10, 1, true)]
    #[case(2025, 10, 15, true)]
    #[case(2025, 10, 31, true)]
    #[case(2025, 9, 30, false)]
    #[case(2025, 11, 1, false)]
    fn test_contains(#[case] y: i32, #[case] m: u32, #[case] day: u32, #[case] expected: bool) {
        let period = ReportingPeriod::new(d(2025, 10, 1), d(2025, 10, 31));
        assert_eq!(period.contains(d(y, m, day)), expected);
    }

    #[test]
    fn test_display() {
        let period = ReportingPeriod::new(d(2025, 10, 1), d(2025, 10, 31));
        assert_eq!(period.to_string(), "2025-10-01 to 2025-10-31");
    }
}
