//! SCCM bulk-paste ingestion.
//!
//! Turns PC inventory text copied out of SCCM consoles, Excel, or exported CSV
//! into [`SccmComputerRecord`]s. Two paths:
//!
//! - **Header path**: the first line names the columns; each header is mapped
//!   to a record field through an ordered rule table. Comma or tab delimited
//!   text is read as CSV, so quoted cells keep embedded delimiters.
//! - **Headerless path**: columns are positional, and each line is split on
//!   runs of spaces, relaxing the run length until enough columns appear.
//!
//! Parsing is pure; time and ids come from the injected [`Clock`] and
//! [`IdGenerator`].
//!
//! [`Clock`]: officevisit_core::Clock
//! [`IdGenerator`]: officevisit_core::IdGenerator

pub mod config;
pub mod error;
pub mod export;
pub mod header;
pub mod ingest;
pub mod inventory;
pub mod record;
pub mod tokenize;
pub mod transform;

pub use config::IngestConfig;
pub use error::IngestError;
pub use export::{SCCM_CSV_HEADER, records_to_csv};
pub use ingest::SccmIngestor;
pub use inventory::ComputerInventory;
pub use record::{ComputerStatus, SccmComputerRecord, SccmField, SccmStatus};
