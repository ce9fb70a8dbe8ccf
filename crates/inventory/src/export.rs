//! CSV export of the inventory sheet.

use officevisit_core::{ExportError, write_quoted_csv};

use crate::row::{InventoryField, InventoryRow, compute_row_totals};

/// Column headers, in export order.
pub const INVENTORY_CSV_HEADER: [&str; 15] = [
    "name",
    "inUseByEmployees",
    "training",
    "conferenceRoom",
    "gsmOffice",
    "prospectingStation",
    "applicantStation",
    "visitorStation",
    "other",
    "sparesOnFloor",
    "sparesInStorage",
    "broken",
    "totalOtherUse",
    "sparesAuto",
    "rowTotal",
];

/// Render rows as CSV: comma-delimited, every field quoted, header first.
pub fn rows_to_csv(rows: &[InventoryRow]) -> Result<String, ExportError> {
    write_quoted_csv(
        INVENTORY_CSV_HEADER,
        rows.iter().map(|row| {
            let totals = compute_row_totals(row);
            let mut record = Vec::with_capacity(INVENTORY_CSV_HEADER.len());
            record.push(row.name.clone());
            record.extend(InventoryField::ALL.into_iter().map(|f| row.get(f).to_string()));
            record.push(totals.total_other_use.to_string());
            record.push(totals.spares_auto.to_string());
            record.push(totals.row_total.to_string());
            record
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_field_order() {
        for (i, field) in InventoryField::ALL.into_iter().enumerate() {
            assert_eq!(INVENTORY_CSV_HEADER[i + 1], field.as_str());
        }
    }

    #[test]
    fn exports_quoted_rows_with_totals() {
        let row = InventoryRow::new("pcs", "PCs, desktop")
            .with(InventoryField::InUseByEmployees, 10)
            .with(InventoryField::Training, 2)
            .with(InventoryField::SparesInStorage, 3);

        let csv = rows_to_csv(&[row]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"name\",\"inUseByEmployees\""));
        assert_eq!(
            lines[1],
            "\"PCs, desktop\",\"10\",\"2\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"3\",\"0\",\"2\",\"3\",\"15\""
        );
    }

    #[test]
    fn empty_sheet_exports_header_only() {
        let csv = rows_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
