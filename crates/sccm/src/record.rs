use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use officevisit_core::{Entity, RecordId, ReportError};

/// SCCM client activity as reported (or inferred from the last logon).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SccmStatus {
    #[default]
    Active,
    Offline,
    Unknown,
    Pending,
}

impl SccmStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SccmStatus::Active => "active",
            SccmStatus::Offline => "offline",
            SccmStatus::Unknown => "unknown",
            SccmStatus::Pending => "pending",
        }
    }
}

impl FromStr for SccmStatus {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SccmStatus::Active),
            "offline" | "inactive" => Ok(SccmStatus::Offline),
            "unknown" => Ok(SccmStatus::Unknown),
            "pending" => Ok(SccmStatus::Pending),
            other => Err(ReportError::validation(format!("unknown sccm status: {other}"))),
        }
    }
}

/// Lifecycle status of the machine as tracked by the visiting technician.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Retired,
}

impl ComputerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComputerStatus::Active => "active",
            ComputerStatus::Inactive => "inactive",
            ComputerStatus::Maintenance => "maintenance",
            ComputerStatus::Retired => "retired",
        }
    }
}

impl FromStr for ComputerStatus {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ComputerStatus::Active),
            "inactive" => Ok(ComputerStatus::Inactive),
            "maintenance" => Ok(ComputerStatus::Maintenance),
            "retired" => Ok(ComputerStatus::Retired),
            other => Err(ReportError::validation(format!("unknown computer status: {other}"))),
        }
    }
}

/// One PC from the SCCM inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SccmComputerRecord {
    pub name: String,
    /// Display text, e.g. `"16GB"`.
    pub memory: String,
    pub storage: String,
    pub model: String,
    pub last_login_username: String,
    /// Last logon timestamp exactly as pasted.
    pub last_seen: String,
    /// Operating system, with the build appended in parentheses when known.
    pub os: String,
    pub sccm_status: SccmStatus,
    pub status: ComputerStatus,
    pub notes: String,
    pub id: RecordId,
    pub last_updated: DateTime<Utc>,
}

impl SccmComputerRecord {
    /// A record with only a name; everything else blank or default.
    pub fn named(name: impl Into<String>, id: RecordId, last_updated: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            memory: String::new(),
            storage: String::new(),
            model: String::new(),
            last_login_username: String::new(),
            last_seen: String::new(),
            os: String::new(),
            sccm_status: SccmStatus::default(),
            status: ComputerStatus::default(),
            notes: String::new(),
            id,
            last_updated,
        }
    }

    /// The record as export strings, in [`crate::SCCM_CSV_HEADER`] order.
    pub fn to_csv_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.memory.clone(),
            self.storage.clone(),
            self.model.clone(),
            self.last_login_username.clone(),
            self.last_seen.clone(),
            self.os.clone(),
            self.sccm_status.as_str().to_string(),
            self.status.as_str().to_string(),
            self.notes.clone(),
            self.id.to_string(),
            self.last_updated.to_rfc3339(),
        ]
    }
}

impl Entity for SccmComputerRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A column a pasted header can map to.
///
/// `OsVersion` has no record field of its own; it is folded into `os`.
/// `Id` and `LastUpdated` are recognised so re-imported exports do not
/// mis-map them, but their values are regenerated on import.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SccmField {
    Name,
    Memory,
    Storage,
    Model,
    LastLoginUsername,
    LastSeen,
    Os,
    OsVersion,
    SccmStatus,
    Status,
    Notes,
    Id,
    LastUpdated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn statuses_parse_case_insensitively() {
        assert_eq!("Active".parse::<SccmStatus>().unwrap(), SccmStatus::Active);
        assert_eq!(" OFFLINE ".parse::<SccmStatus>().unwrap(), SccmStatus::Offline);
        assert_eq!("Retired".parse::<ComputerStatus>().unwrap(), ComputerStatus::Retired);
        assert!("busy".parse::<SccmStatus>().is_err());
        assert!("broken".parse::<ComputerStatus>().is_err());
    }

    #[test]
    fn record_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap();
        let mut record = SccmComputerRecord::named("AKRON-PC1", RecordId::new("pc-1"), at);
        record.last_login_username = "jo.doe".to_string();
        record.sccm_status = SccmStatus::Pending;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "AKRON-PC1");
        assert_eq!(json["lastLoginUsername"], "jo.doe");
        assert_eq!(json["sccmStatus"], "pending");
        assert_eq!(json["status"], "active");
        assert_eq!(json["id"], "pc-1");
    }
}
