//! Transaction record ingestion.
//!
//! Two paths converge on the same [`TransactionEntry`] shape: bulk tabular
//! ingestion over CSV ([`read_entries`]) and single-record construction
//! ([`TransactionEntry::new`] / [`RawRecord::into_entry`]). Validation is
//! batch-atomic: a malformed row aborts the batch with nothing partial
//! returned.

pub mod error;
pub mod reader;
pub mod record;

pub use error::{IngestError, RecordError};
pub use reader::{read_entries, read_entries_from_str};
pub use record::{RawRecord, TransactionEntry};
