//! `officevisit-core` — shared building blocks for the office-visit report engines.
//!
//! This crate contains **pure** primitives (no IO): the error model, record
//! identifiers, quoted-CSV rendering, and the clock / id-generator seams that
//! keep the engines deterministic under test.

pub mod clock;
pub mod entity;
pub mod error;
pub mod export;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{ReportError, ReportResult};
pub use export::{ExportError, write_quoted_csv};
pub use id::{IdGenerator, RecordId, SequentialIdGenerator, UuidIdGenerator};
