//! Hardware inventory totals engine.
//!
//! Pure, deterministic logic over the office-visit inventory table: raw field
//! input is normalised to non-negative integers, and the derived totals
//! (other-use, spares, row total, sheet summary) are always recomputed from
//! the normalised fields, never stored.

pub mod export;
pub mod normalize;
pub mod row;
pub mod sheet;
pub mod summary;

pub use export::{INVENTORY_CSV_HEADER, rows_to_csv};
pub use normalize::{FieldValue, normalize_field};
pub use row::{
    InventoryField, InventoryRow, RawInventoryRow, RowTotals, TotaledRow, compute_raw_row_totals,
    compute_row_totals,
};
pub use sheet::InventorySheet;
pub use summary::{InventorySummary, compute_summary};
