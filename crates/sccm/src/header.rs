//! Header recognition.
//!
//! Header text is matched against an ordered rule table. Each rule lists the
//! spellings that name one field. Matching runs three passes over the table:
//! exact, then header-contains-candidate, then candidate-contains-header; the
//! first rule that matches in the earliest pass wins. Rules for longer,
//! more specific names come before the generic ones they contain ("last
//! login username" before "name", "os version" before "os").

use std::sync::LazyLock;

use regex::Regex;

use crate::record::SccmField;

struct FieldRule {
    field: SccmField,
    candidates: &'static [&'static str],
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: SccmField::LastLoginUsername,
        candidates: &[
            "last login username",
            "last logon username",
            "last logon user name",
            "last logged on user",
            "primary user",
            "username",
            "user name",
            "user",
        ],
    },
    FieldRule {
        field: SccmField::LastSeen,
        candidates: &[
            "last seen",
            "last logon timestamp",
            "last logon time",
            "last logon",
            "last login",
            "last active",
            "last contact",
        ],
    },
    FieldRule {
        field: SccmField::OsVersion,
        candidates: &["os version", "operating system version", "os build", "build"],
    },
    FieldRule {
        field: SccmField::Os,
        candidates: &["os", "os name", "operating system"],
    },
    FieldRule {
        field: SccmField::SccmStatus,
        candidates: &["sccm status", "client status", "client activity"],
    },
    FieldRule {
        field: SccmField::Status,
        candidates: &["status", "state"],
    },
    FieldRule {
        field: SccmField::Memory,
        candidates: &["memory", "ram", "total physical memory"],
    },
    FieldRule {
        field: SccmField::Storage,
        candidates: &["storage", "disk", "hard drive", "drive"],
    },
    FieldRule {
        field: SccmField::Model,
        candidates: &["model", "computer model", "system model"],
    },
    FieldRule {
        field: SccmField::Notes,
        candidates: &["notes", "note", "comments", "comment"],
    },
    FieldRule {
        field: SccmField::LastUpdated,
        candidates: &["last updated"],
    },
    FieldRule {
        field: SccmField::Id,
        candidates: &["id"],
    },
    FieldRule {
        field: SccmField::Name,
        candidates: &[
            "name",
            "computer name",
            "device name",
            "host name",
            "hostname",
            "machine name",
            "netbios name",
            "computer",
            "device",
            "machine",
        ],
    },
];

/// Shortest candidate (or header) allowed to take part in substring passes.
const MIN_SUBSTRING_LEN: usize = 3;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Lowercase, split camelCase, drop quotes and separators, collapse to no spaces.
///
/// `"Last Login Username"`, `"lastLoginUsername"` and `"last_login_username"`
/// all compact to `"lastloginusername"`.
fn compact(text: &str) -> String {
    let trimmed = text.trim().trim_matches('"');
    CAMEL_BOUNDARY
        .replace_all(trimmed, "$1 $2")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map one header cell to a field, or `None` if nothing matches.
pub fn match_header(header: &str) -> Option<SccmField> {
    let h = compact(header);
    if h.is_empty() {
        return None;
    }

    let candidates = || {
        FIELD_RULES
            .iter()
            .flat_map(|rule| rule.candidates.iter().map(move |c| (rule.field, compact(c))))
    };

    candidates()
        .find(|(_, c)| *c == h)
        .or_else(|| {
            candidates().find(|(_, c)| c.len() >= MIN_SUBSTRING_LEN && h.contains(c.as_str()))
        })
        .or_else(|| {
            if h.len() < MIN_SUBSTRING_LEN {
                return None;
            }
            candidates().find(|(_, c)| c.contains(h.as_str()))
        })
        .map(|(field, _)| field)
}

/// Whether `token` is exactly one of the known field spellings.
pub fn is_known_field_name(token: &str) -> bool {
    let t = compact(token);
    !t.is_empty()
        && FIELD_RULES
            .iter()
            .flat_map(|rule| rule.candidates.iter())
            .any(|c| compact(c) == t)
}

static COMPUTER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{4,}$").expect("valid regex"));

/// Whether `token` reads as a bare machine name (`AKRON-D1NCSNK3`).
///
/// A known field spelling ("Name", "Model") never counts as a machine name.
pub fn looks_like_computer_name(token: &str) -> bool {
    let token = token.trim().trim_matches('"');
    COMPUTER_NAME.is_match(token) && !is_known_field_name(token)
}

/// Decide whether the first line's tokens form a header row.
pub fn is_header_row(tokens: &[&str]) -> bool {
    let Some(first) = tokens.first() else {
        return false;
    };
    tokens.iter().any(|t| is_known_field_name(t)) && !looks_like_computer_name(first)
}

/// Map every header cell to a field. When two cells name the same field,
/// the leftmost keeps it.
pub fn map_headers(headers: &[&str]) -> Vec<Option<SccmField>> {
    let mut seen = Vec::new();
    headers
        .iter()
        .map(|h| match match_header(h) {
            Some(field) if !seen.contains(&field) => {
                seen.push(field);
                Some(field)
            }
            _ => None,
        })
        .collect()
}
