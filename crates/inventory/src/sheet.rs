//! The inventory sheet: an ordered, id-unique collection of rows.

use serde::{Deserialize, Serialize};

use officevisit_core::{Entity, IdGenerator, RecordId, ReportError, ReportResult};

use crate::normalize::FieldValue;
use crate::row::{InventoryField, InventoryRow, RawInventoryRow, RowTotals, TotaledRow};
use crate::summary::{InventorySummary, compute_summary};

/// Line items every office-visit report starts with.
const STANDARD_ITEMS: [(&str, &str); 7] = [
    ("pcs", "PCs"),
    ("laptops", "Laptops"),
    ("monitors", "Monitors"),
    ("docking-stations", "Docking Stations"),
    ("printers", "Printers"),
    ("phones", "Phones"),
    ("tablets", "Tablets"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySheet {
    rows: Vec<InventoryRow>,
}

impl InventorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet seeded with the standard line items, all counts zero.
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_ITEMS
                .iter()
                .map(|(id, name)| InventoryRow::new(*id, *name))
                .collect(),
        }
    }

    /// Build a sheet from existing rows, rejecting duplicate ids.
    pub fn from_rows(rows: Vec<InventoryRow>) -> ReportResult<Self> {
        let mut sheet = Self::new();
        for row in rows {
            sheet.insert(row)?;
        }
        Ok(sheet)
    }

    /// Build a sheet from loosely typed rows. Rows without an id get a fresh
    /// one from `ids`; explicit ids must still be unique.
    pub fn from_raw_rows(raw: &[RawInventoryRow], ids: &dyn IdGenerator) -> ReportResult<Self> {
        let rows = raw
            .iter()
            .map(|r| {
                let mut row = InventoryRow::from_raw(r);
                if row.id.as_str().trim().is_empty() {
                    row.id = ids.next_id();
                }
                row
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&InventoryRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Append a row; its id must not already be on the sheet.
    pub fn insert(&mut self, row: InventoryRow) -> ReportResult<()> {
        if self.get(row.id()).is_some() {
            return Err(ReportError::conflict(format!("duplicate row id {}", row.id())));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Add a user-defined line item with all counts at zero.
    pub fn add_custom_item(
        &mut self,
        name: &str,
        ids: &dyn IdGenerator,
    ) -> ReportResult<&InventoryRow> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReportError::validation("item name cannot be empty"));
        }
        self.insert(InventoryRow::new(ids.next_id(), name))?;
        tracing::debug!(item = name, "custom inventory item added");
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Edit one count of one row, returning the row's fresh totals.
    pub fn update_field(
        &mut self,
        id: &RecordId,
        field: InventoryField,
        value: impl Into<FieldValue>,
    ) -> ReportResult<RowTotals> {
        let row = self.get_mut(id)?;
        row.set_field(field, value);
        Ok(row.totals())
    }

    pub fn rename(&mut self, id: &RecordId, name: &str) -> ReportResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReportError::validation("item name cannot be empty"));
        }
        self.get_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn remove(&mut self, id: &RecordId) -> ReportResult<InventoryRow> {
        let idx = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ReportError::not_found(format!("inventory row {id}")))?;
        Ok(self.rows.remove(idx))
    }

    pub fn rows_with_totals(&self) -> Vec<TotaledRow> {
        self.rows.iter().cloned().map(TotaledRow::from).collect()
    }

    pub fn summary(&self) -> InventorySummary {
        compute_summary(&self.rows)
    }

    fn get_mut(&mut self, id: &RecordId) -> ReportResult<&mut InventoryRow> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ReportError::not_found(format!("inventory row {id}")))
    }
}
