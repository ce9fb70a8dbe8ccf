//! Per-field transforms applied while building records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::record::SccmStatus;

const KB_PER_GB: f64 = 1024.0 * 1024.0;

/// SCCM reports memory in kilobytes. An integer becomes rounded gigabytes
/// (`"16491588"` → `"16GB"`); anything else passes through untouched.
pub fn memory_display(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<u64>() {
        Ok(kb) => format!("{}GB", (kb as f64 / KB_PER_GB).round() as u64),
        Err(_) => raw.to_string(),
    }
}

/// `"Microsoft Windows 11 Enterprise"` + `"10.0.26100"` →
/// `"Microsoft Windows 11 Enterprise (10.0.26100)"`.
pub fn os_with_version(os: &str, version: &str) -> String {
    let (os, version) = (os.trim(), version.trim());
    match (os.is_empty(), version.is_empty()) {
        (_, true) => os.to_string(),
        (true, false) => version.to_string(),
        (false, false) => format!("{os} ({version})"),
    }
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parse a last-logon timestamp. Timestamps without an offset are read as UTC.
pub fn parse_last_seen(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Infer SCCM client status from the last logon.
///
/// - no timestamp: `active`
/// - parseable timestamp: `active` if within `window_days` of `now`, else `offline`
/// - unparseable timestamp: `active` if a login user is known, else `unknown`
pub fn derive_sccm_status(
    last_seen: &str,
    last_login_username: &str,
    now: DateTime<Utc>,
    window_days: i64,
) -> SccmStatus {
    if last_seen.trim().is_empty() {
        return SccmStatus::Active;
    }

    match parse_last_seen(last_seen) {
        Some(seen) => {
            let cutoff = TimeDelta::try_days(window_days.max(0))
                .and_then(|window| now.checked_sub_signed(window));
            match cutoff {
                Some(cutoff) if seen < cutoff => SccmStatus::Offline,
                _ => SccmStatus::Active,
            }
        }
        None if !last_login_username.trim().is_empty() => SccmStatus::Active,
        None => SccmStatus::Unknown,
    }
}
