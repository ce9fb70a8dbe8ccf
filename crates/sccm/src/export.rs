//! CSV export of computer records.

use officevisit_core::{ExportError, write_quoted_csv};

use crate::record::SccmComputerRecord;

pub const SCCM_CSV_HEADER: [&str; 12] = [
    "name",
    "memory",
    "storage",
    "model",
    "lastLoginUsername",
    "lastSeen",
    "os",
    "sccmStatus",
    "status",
    "notes",
    "id",
    "lastUpdated",
];

/// Render records as quoted CSV with [`SCCM_CSV_HEADER`] first.
pub fn records_to_csv(records: &[SccmComputerRecord]) -> Result<String, ExportError> {
    write_quoted_csv(SCCM_CSV_HEADER, records.iter().map(SccmComputerRecord::to_csv_fields))
}
