//! Reporting domain errors
//!
//! Nothing here aborts a whole report: unknown references degrade to a
//! placeholder label and orphan dispatch records drop their row. The
//! variants exist so the degradations are logged with structure.

use thiserror::Error;

use core_kernel::DispatchId;

/// Errors that can occur while assembling a report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A transaction references master data with no lookup entry
    #[error("Unknown {entity} reference: {id}")]
    UnknownReference { entity: &'static str, id: i64 },

    /// A dispatch record's sale group has no transactions
    #[error("Dispatch {0} references a sale group with no transactions")]
    OrphanDispatch(DispatchId),

    /// CSV rendering failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Export(err.to_string())
    }
}
