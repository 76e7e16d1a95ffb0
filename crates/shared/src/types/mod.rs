//! Common types used across the application.

pub mod period;

pub use period::ReportingPeriod;
