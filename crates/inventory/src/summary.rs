//! Sheet-wide totals.

use serde::{Deserialize, Serialize};

use crate::row::{InventoryRow, compute_row_totals};

/// Aggregate totals across every row of an inventory sheet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub row_count: usize,
    pub total_in_use: u64,
    pub total_other_use: u64,
    pub total_spares: u64,
    pub total_broken: u64,
    pub grand_total: u64,
}

/// Sum per-row totals across `rows`. An empty slice yields all zeros.
pub fn compute_summary(rows: &[InventoryRow]) -> InventorySummary {
    rows.iter().fold(InventorySummary::default(), |acc, row| {
        let totals = compute_row_totals(row);
        InventorySummary {
            row_count: acc.row_count + 1,
            total_in_use: acc.total_in_use.saturating_add(row.in_use_by_employees),
            total_other_use: acc.total_other_use.saturating_add(totals.total_other_use),
            total_spares: acc.total_spares.saturating_add(totals.spares_auto),
            total_broken: acc.total_broken.saturating_add(row.broken),
            grand_total: acc.grand_total.saturating_add(totals.row_total),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::InventoryField;

    #[test]
    fn empty_sheet_is_all_zero() {
        assert_eq!(compute_summary(&[]), InventorySummary::default());
    }

    #[test]
    fn sums_across_rows() {
        let pcs = InventoryRow::new("pcs", "PCs")
            .with(InventoryField::InUseByEmployees, 10)
            .with(InventoryField::Training, 2)
            .with(InventoryField::SparesOnFloor, 1)
            .with(InventoryField::Broken, 1);
        let laptops = InventoryRow::new("laptops", "Laptops")
            .with(InventoryField::InUseByEmployees, 4)
            .with(InventoryField::VisitorStation, 1)
            .with(InventoryField::SparesInStorage, 3);

        let summary = compute_summary(&[pcs, laptops]);
        assert_eq!(
            summary,
            InventorySummary {
                row_count: 2,
                total_in_use: 14,
                total_other_use: 3,
                total_spares: 4,
                total_broken: 1,
                grand_total: 22,
            }
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the grand total equals the sum of the four category totals.
            #[test]
            fn grand_total_is_sum_of_categories(
                counts in proptest::collection::vec(proptest::collection::vec(0u64..10_000, 11), 0..8)
            ) {
                let rows: Vec<InventoryRow> = counts
                    .into_iter()
                    .enumerate()
                    .map(|(i, cs)| {
                        let mut row = InventoryRow::new(format!("row-{i}"), format!("Row {i}"));
                        for (field, c) in InventoryField::ALL.into_iter().zip(cs) {
                            row.set_field(field, c);
                        }
                        row
                    })
                    .collect();

                let s = compute_summary(&rows);
                prop_assert_eq!(s.row_count, rows.len());
                prop_assert_eq!(
                    s.grand_total,
                    s.total_in_use + s.total_other_use + s.total_spares + s.total_broken
                );
            }
        }
    }
}
