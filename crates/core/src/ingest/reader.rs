//! Bulk CSV ingestion.
//!
//! The reader is handed an already-open `io::Read`; the core performs no
//! blocking I/O of its own. Input order is preserved and assumed
//! chronological.

use std::io::Read;

use super::error::IngestError;
use super::record::{RawRecord, TransactionEntry};

/// Reads a whole CSV batch, aborting on the first malformed row.
///
/// The first line must be a header row
/// (`date,description,account,debit,credit,balance`, capitalization
/// accepted). Row numbers in errors are 1-based over data rows.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<TransactionEntry>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (index, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row = index + 1;
        let raw = result?;
        let entry = raw
            .into_entry()
            .map_err(|source| IngestError::Row { row, source })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Convenience wrapper for in-memory CSV text.
pub fn read_entries_from_str(data: &str) -> Result<Vec<TransactionEntry>, IngestError> {
    read_entries(data.as_bytes())
}
