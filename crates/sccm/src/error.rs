use thiserror::Error;

use officevisit_core::{ExportError, ReportError};

#[derive(Debug, Error)]
pub enum IngestError {
    /// The pasted text produced no record with a computer name.
    #[error(
        "no valid computer data found; each line needs a computer name (check the column layout)"
    )]
    NoValidDataFound,

    #[error("could not read delimited text: {0}")]
    Read(#[from] csv::Error),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
