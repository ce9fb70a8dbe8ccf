use core::str::FromStr;

use serde::{Deserialize, Serialize};

use officevisit_core::{Entity, RecordId, ReportError};

use crate::normalize::{FieldValue, normalize_field};

/// The numeric columns of an inventory row, in sheet order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventoryField {
    InUseByEmployees,
    Training,
    ConferenceRoom,
    GsmOffice,
    ProspectingStation,
    ApplicantStation,
    VisitorStation,
    Other,
    SparesOnFloor,
    SparesInStorage,
    Broken,
}

impl InventoryField {
    pub const ALL: [InventoryField; 11] = [
        InventoryField::InUseByEmployees,
        InventoryField::Training,
        InventoryField::ConferenceRoom,
        InventoryField::GsmOffice,
        InventoryField::ProspectingStation,
        InventoryField::ApplicantStation,
        InventoryField::VisitorStation,
        InventoryField::Other,
        InventoryField::SparesOnFloor,
        InventoryField::SparesInStorage,
        InventoryField::Broken,
    ];

    /// Wire name (camelCase), also used as the CSV column header.
    pub fn as_str(self) -> &'static str {
        match self {
            InventoryField::InUseByEmployees => "inUseByEmployees",
            InventoryField::Training => "training",
            InventoryField::ConferenceRoom => "conferenceRoom",
            InventoryField::GsmOffice => "gsmOffice",
            InventoryField::ProspectingStation => "prospectingStation",
            InventoryField::ApplicantStation => "applicantStation",
            InventoryField::VisitorStation => "visitorStation",
            InventoryField::Other => "other",
            InventoryField::SparesOnFloor => "sparesOnFloor",
            InventoryField::SparesInStorage => "sparesInStorage",
            InventoryField::Broken => "broken",
        }
    }

    /// Human-readable column label.
    pub fn label(self) -> &'static str {
        match self {
            InventoryField::InUseByEmployees => "In Use by Employees",
            InventoryField::Training => "Training",
            InventoryField::ConferenceRoom => "Conference Room",
            InventoryField::GsmOffice => "GSM Office",
            InventoryField::ProspectingStation => "Prospecting Station",
            InventoryField::ApplicantStation => "Applicant Station",
            InventoryField::VisitorStation => "Visitor Station",
            InventoryField::Other => "Other",
            InventoryField::SparesOnFloor => "Spares on Floor",
            InventoryField::SparesInStorage => "Spares in Storage",
            InventoryField::Broken => "Broken",
        }
    }

    /// Whether the field feeds `totalOtherUse`.
    pub fn is_other_use(self) -> bool {
        matches!(
            self,
            InventoryField::Training
                | InventoryField::ConferenceRoom
                | InventoryField::GsmOffice
                | InventoryField::ProspectingStation
                | InventoryField::ApplicantStation
                | InventoryField::VisitorStation
                | InventoryField::Other
        )
    }
}

impl core::fmt::Display for InventoryField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryField {
    type Err = ReportError;

    /// Accepts the camelCase wire name or its snake_case spelling, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        InventoryField::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == wanted)
            .ok_or_else(|| ReportError::validation(format!("unknown inventory field: {s}")))
    }
}

/// An inventory row as entered: every count may be a number, text, or absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInventoryRow {
    pub id: RecordId,
    pub name: String,
    pub in_use_by_employees: FieldValue,
    pub training: FieldValue,
    pub conference_room: FieldValue,
    pub gsm_office: FieldValue,
    pub prospecting_station: FieldValue,
    pub applicant_station: FieldValue,
    pub visitor_station: FieldValue,
    pub other: FieldValue,
    pub spares_on_floor: FieldValue,
    pub spares_in_storage: FieldValue,
    pub broken: FieldValue,
}

impl RawInventoryRow {
    pub fn field(&self, field: InventoryField) -> &FieldValue {
        match field {
            InventoryField::InUseByEmployees => &self.in_use_by_employees,
            InventoryField::Training => &self.training,
            InventoryField::ConferenceRoom => &self.conference_room,
            InventoryField::GsmOffice => &self.gsm_office,
            InventoryField::ProspectingStation => &self.prospecting_station,
            InventoryField::ApplicantStation => &self.applicant_station,
            InventoryField::VisitorStation => &self.visitor_station,
            InventoryField::Other => &self.other,
            InventoryField::SparesOnFloor => &self.spares_on_floor,
            InventoryField::SparesInStorage => &self.spares_in_storage,
            InventoryField::Broken => &self.broken,
        }
    }
}

/// A normalised inventory row: every count is a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: RecordId,
    pub name: String,
    pub in_use_by_employees: u64,
    pub training: u64,
    pub conference_room: u64,
    pub gsm_office: u64,
    pub prospecting_station: u64,
    pub applicant_station: u64,
    pub visitor_station: u64,
    pub other: u64,
    pub spares_on_floor: u64,
    pub spares_in_storage: u64,
    pub broken: u64,
}

impl InventoryRow {
    /// A row with every count at zero.
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            in_use_by_employees: 0,
            training: 0,
            conference_room: 0,
            gsm_office: 0,
            prospecting_station: 0,
            applicant_station: 0,
            visitor_station: 0,
            other: 0,
            spares_on_floor: 0,
            spares_in_storage: 0,
            broken: 0,
        }
    }

    pub fn from_raw(raw: &RawInventoryRow) -> Self {
        let mut row = Self::new(raw.id.clone(), raw.name.clone());
        for field in InventoryField::ALL {
            *row.slot_mut(field) = normalize_field(raw.field(field));
        }
        row
    }

    pub fn get(&self, field: InventoryField) -> u64 {
        match field {
            InventoryField::InUseByEmployees => self.in_use_by_employees,
            InventoryField::Training => self.training,
            InventoryField::ConferenceRoom => self.conference_room,
            InventoryField::GsmOffice => self.gsm_office,
            InventoryField::ProspectingStation => self.prospecting_station,
            InventoryField::ApplicantStation => self.applicant_station,
            InventoryField::VisitorStation => self.visitor_station,
            InventoryField::Other => self.other,
            InventoryField::SparesOnFloor => self.spares_on_floor,
            InventoryField::SparesInStorage => self.spares_in_storage,
            InventoryField::Broken => self.broken,
        }
    }

    /// Overwrite one count from raw input, normalising it first.
    pub fn set_field(&mut self, field: InventoryField, value: impl Into<FieldValue>) {
        *self.slot_mut(field) = normalize_field(&value.into());
    }

    /// Builder-style counterpart of [`InventoryRow::set_field`].
    pub fn with(mut self, field: InventoryField, value: impl Into<FieldValue>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn totals(&self) -> RowTotals {
        compute_row_totals(self)
    }

    fn slot_mut(&mut self, field: InventoryField) -> &mut u64 {
        match field {
            InventoryField::InUseByEmployees => &mut self.in_use_by_employees,
            InventoryField::Training => &mut self.training,
            InventoryField::ConferenceRoom => &mut self.conference_room,
            InventoryField::GsmOffice => &mut self.gsm_office,
            InventoryField::ProspectingStation => &mut self.prospecting_station,
            InventoryField::ApplicantStation => &mut self.applicant_station,
            InventoryField::VisitorStation => &mut self.visitor_station,
            InventoryField::Other => &mut self.other,
            InventoryField::SparesOnFloor => &mut self.spares_on_floor,
            InventoryField::SparesInStorage => &mut self.spares_in_storage,
            InventoryField::Broken => &mut self.broken,
        }
    }
}

impl Entity for InventoryRow {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Derived totals of one row. Always recomputed, never entered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowTotals {
    pub total_other_use: u64,
    pub spares_auto: u64,
    pub row_total: u64,
}

/// Compute the derived totals of a normalised row.
///
/// - `totalOtherUse` = training + conference room + GSM office + prospecting
///   + applicant + visitor + other
/// - `sparesAuto` = spares on floor + spares in storage
/// - `rowTotal` = in use by employees + totalOtherUse + sparesAuto + broken
pub fn compute_row_totals(row: &InventoryRow) -> RowTotals {
    let total_other_use = InventoryField::ALL
        .into_iter()
        .filter(|f| f.is_other_use())
        .fold(0u64, |acc, f| acc.saturating_add(row.get(f)));
    let spares_auto = row.spares_on_floor.saturating_add(row.spares_in_storage);
    let row_total = row
        .in_use_by_employees
        .saturating_add(total_other_use)
        .saturating_add(spares_auto)
        .saturating_add(row.broken);

    RowTotals {
        total_other_use,
        spares_auto,
        row_total,
    }
}

/// Normalise a raw row, then compute its totals.
pub fn compute_raw_row_totals(raw: &RawInventoryRow) -> RowTotals {
    compute_row_totals(&InventoryRow::from_raw(raw))
}

/// A row paired with its derived totals, for rendering and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotaledRow {
    #[serde(flatten)]
    pub row: InventoryRow,
    #[serde(flatten)]
    pub totals: RowTotals,
}

impl From<InventoryRow> for TotaledRow {
    fn from(row: InventoryRow) -> Self {
        let totals = compute_row_totals(&row);
        Self { row, totals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> InventoryRow {
        use InventoryField::*;
        InventoryRow::new("pcs", "PCs")
            .with(InUseByEmployees, 10)
            .with(Training, 2)
            .with(ConferenceRoom, 1)
            .with(GsmOffice, 1)
            .with(ProspectingStation, 3)
            .with(ApplicantStation, 1)
            .with(VisitorStation, 1)
            .with(Other, 1)
            .with(SparesOnFloor, 5)
            .with(SparesInStorage, 3)
            .with(Broken, 2)
    }

    #[test]
    fn sample_row_totals() {
        let totals = compute_row_totals(&sample_row());
        assert_eq!(
            totals,
            RowTotals {
                total_other_use: 10,
                spares_auto: 8,
                row_total: 30,
            }
        );
    }

    #[test]
    fn empty_row_totals_are_zero() {
        assert_eq!(InventoryRow::new("x", "X").totals(), RowTotals::default());
    }

    #[test]
    fn raw_row_is_normalised_before_summing() {
        let raw = RawInventoryRow {
            id: "laptops".into(),
            name: "Laptops".to_string(),
            in_use_by_employees: "1,000".into(),
            training: "5.7".into(),
            conference_room: (-3).into(),
            gsm_office: "abc".into(),
            spares_on_floor: 2.9.into(),
            spares_in_storage: "".into(),
            broken: FieldValue::Missing,
            ..RawInventoryRow::default()
        };

        let row = InventoryRow::from_raw(&raw);
        assert_eq!(row.in_use_by_employees, 1000);
        assert_eq!(row.training, 5);
        assert_eq!(row.conference_room, 0);
        assert_eq!(row.gsm_office, 0);
        assert_eq!(row.spares_on_floor, 2);

        assert_eq!(
            compute_raw_row_totals(&raw),
            RowTotals {
                total_other_use: 5,
                spares_auto: 2,
                row_total: 1007,
            }
        );
    }

    #[test]
    fn raw_row_deserializes_with_missing_fields() {
        let raw: RawInventoryRow = serde_json::from_str(
            r#"{"id":"pcs","name":"PCs","inUseByEmployees":"12","training":null,"broken":1}"#,
        )
        .unwrap();
        let row = InventoryRow::from_raw(&raw);
        assert_eq!(row.in_use_by_employees, 12);
        assert_eq!(row.training, 0);
        assert_eq!(row.broken, 1);
        assert_eq!(row.totals().row_total, 13);
    }

    #[test]
    fn set_field_normalises_input() {
        let mut row = InventoryRow::new("pcs", "PCs");
        row.set_field(InventoryField::Broken, "2,000");
        assert_eq!(row.broken, 2000);
        row.set_field(InventoryField::Broken, "-1");
        assert_eq!(row.broken, 0);
    }

    #[test]
    fn field_names_parse_in_either_spelling() {
        assert_eq!(
            "inUseByEmployees".parse::<InventoryField>().unwrap(),
            InventoryField::InUseByEmployees
        );
        assert_eq!(
            "spares_in_storage".parse::<InventoryField>().unwrap(),
            InventoryField::SparesInStorage
        );
        assert_eq!("GSMOFFICE".parse::<InventoryField>().unwrap(), InventoryField::GsmOffice);
        assert!(matches!(
            "warp_drive".parse::<InventoryField>(),
            Err(ReportError::Validation(_))
        ));
    }

    #[test]
    fn totaled_row_flattens_into_one_object() {
        let json = serde_json::to_value(TotaledRow::from(sample_row())).unwrap();
        assert_eq!(json["name"], "PCs");
        assert_eq!(json["inUseByEmployees"], 10);
        assert_eq!(json["totalOtherUse"], 10);
        assert_eq!(json["rowTotal"], 30);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let row = InventoryRow::new("x", "X")
            .with(InventoryField::InUseByEmployees, u64::MAX)
            .with(InventoryField::Broken, 5);
        assert_eq!(row.totals().row_total, u64::MAX);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_row() -> impl Strategy<Value = InventoryRow> {
            proptest::collection::vec(0u64..1_000_000, 11).prop_map(|counts| {
                let mut row = InventoryRow::new("row", "Row");
                for (field, count) in InventoryField::ALL.into_iter().zip(counts) {
                    row.set_field(field, count);
                }
                row
            })
        }

        proptest! {
            /// Property: totalOtherUse is the sum of the seven other-use columns.
            #[test]
            fn other_use_identity(row in arb_row()) {
                let t = compute_row_totals(&row);
                prop_assert_eq!(
                    t.total_other_use,
                    row.training + row.conference_room + row.gsm_office + row.prospecting_station
                        + row.applicant_station + row.visitor_station + row.other
                );
            }

            /// Property: rowTotal = inUse + totalOtherUse + sparesAuto + broken.
            #[test]
            fn row_total_identity(row in arb_row()) {
                let t = compute_row_totals(&row);
                prop_assert_eq!(t.spares_auto, row.spares_on_floor + row.spares_in_storage);
                prop_assert_eq!(
                    t.row_total,
                    row.in_use_by_employees + t.total_other_use + t.spares_auto + row.broken
                );
            }

            /// Property: computing totals is idempotent and leaves the row untouched.
            #[test]
            fn totals_are_idempotent(row in arb_row()) {
                let before = row.clone();
                let first = compute_row_totals(&row);
                let second = compute_row_totals(&row);
                prop_assert_eq!(first, second);
                prop_assert_eq!(before, row);
            }

            /// Property: normalising an already-normalised row changes nothing.
            #[test]
            fn normalisation_is_stable(row in arb_row()) {
                let mut raw = RawInventoryRow {
                    id: row.id.clone(),
                    name: row.name.clone(),
                    ..RawInventoryRow::default()
                };
                raw.in_use_by_employees = row.in_use_by_employees.into();
                raw.training = row.training.to_string().into();
                raw.conference_room = row.conference_room.into();
                raw.gsm_office = row.gsm_office.into();
                raw.prospecting_station = row.prospecting_station.into();
                raw.applicant_station = row.applicant_station.into();
                raw.visitor_station = row.visitor_station.into();
                raw.other = row.other.into();
                raw.spares_on_floor = row.spares_on_floor.into();
                raw.spares_in_storage = row.spares_in_storage.into();
                raw.broken = row.broken.into();
                prop_assert_eq!(InventoryRow::from_raw(&raw), row);
            }
        }
    }
}
