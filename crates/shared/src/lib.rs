//! Shared types and configuration for Finstat.
//!
//! This crate provides common types used across all other crates:
//! - Reporting period derived from a transaction batch
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, ReportConfig};
pub use types::ReportingPeriod;
