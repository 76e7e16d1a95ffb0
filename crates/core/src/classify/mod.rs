//! Account-to-category classification.
//!
//! Classification is table-driven: an immutable [`AccountRules`] table
//! (exact and prefix patterns, optional fallback) is loaded once and passed
//! explicitly to the [`Classifier`]. Unmapped labels are skipped and
//! surfaced as warnings, or routed to the fallback category when one is
//! configured.

pub mod category;
pub mod classifier;
pub mod rules;

pub use category::{BalanceSide, Category};
pub use classifier::{ClassifiedBatch, ClassifiedEntry, Classifier, UnknownAccount};
pub use rules::{AccountRule, AccountRules, MatchKind, RulesError};
