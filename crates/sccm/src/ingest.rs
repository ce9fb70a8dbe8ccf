//! The bulk-paste ingestor.

use chrono::{DateTime, Utc};

use officevisit_core::{Clock, IdGenerator};

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::header::{is_header_row, map_headers};
use crate::record::{SccmComputerRecord, SccmField};
use crate::tokenize::{delimiter_for, non_empty_lines, read_delimited, split_relaxed};
use crate::transform::{derive_sccm_status, memory_display, os_with_version};

/// Parses pasted SCCM text into records.
///
/// Holds no state between calls; the clock and id generator are borrowed from
/// the caller.
pub struct SccmIngestor<'a> {
    config: IngestConfig,
    clock: &'a dyn Clock,
    ids: &'a dyn IdGenerator,
}

impl<'a> SccmIngestor<'a> {
    pub fn new(clock: &'a dyn Clock, ids: &'a dyn IdGenerator) -> Self {
        Self {
            config: IngestConfig::default(),
            clock,
            ids,
        }
    }

    pub fn with_config(mut self, config: IngestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock
    }

    pub fn ids(&self) -> &dyn IdGenerator {
        self.ids
    }

    /// Parse `text` into records.
    ///
    /// Lines without a computer name are dropped one by one; if nothing
    /// survives, the whole call fails with [`IngestError::NoValidDataFound`].
    pub fn parse(&self, text: &str) -> Result<Vec<SccmComputerRecord>, IngestError> {
        let lines = non_empty_lines(text);
        let Some(first) = lines.first() else {
            tracing::warn!("pasted text has no non-blank lines");
            return Err(IngestError::NoValidDataFound);
        };

        let now = self.clock.now();
        let records = match delimiter_for(first) {
            Some(delimiter) => {
                let rows = read_delimited(&lines.join("\n"), delimiter)?;
                let header: Vec<&str> = rows
                    .first()
                    .map(|row| row.iter().map(String::as_str).collect())
                    .unwrap_or_default();
                if is_header_row(&header) {
                    tracing::debug!(rows = rows.len(), "parsing delimited text with header row");
                    self.parse_with_header(&rows, now)
                } else {
                    tracing::debug!(lines = lines.len(), "parsing pasted text as positional columns");
                    self.parse_headerless(&lines, now)
                }
            }
            None => {
                let min_tokens = self.config.min_headerless_tokens;
                if is_header_row(&split_relaxed(first, min_tokens).tokens) {
                    tracing::debug!(lines = lines.len(), "parsing spaced text with header row");
                    let rows: Vec<Vec<String>> = lines
                        .iter()
                        .map(|line| {
                            let split = split_relaxed(line, min_tokens);
                            split.tokens.into_iter().map(str::to_string).collect()
                        })
                        .collect();
                    self.parse_with_header(&rows, now)
                } else {
                    tracing::debug!(lines = lines.len(), "parsing pasted text as positional columns");
                    self.parse_headerless(&lines, now)
                }
            }
        };

        if records.is_empty() {
            tracing::warn!(lines = lines.len(), "no usable computer records in pasted text");
            return Err(IngestError::NoValidDataFound);
        }

        tracing::info!(
            records = records.len(),
            dropped = lines.len().saturating_sub(records.len()),
            "parsed sccm computer records"
        );
        Ok(records)
    }

    fn parse_with_header(
        &self,
        rows: &[Vec<String>],
        now: DateTime<Utc>,
    ) -> Vec<SccmComputerRecord> {
        let Some((header, body)) = rows.split_first() else {
            return Vec::new();
        };
        let header: Vec<&str> = header.iter().map(String::as_str).collect();
        let columns = map_headers(&header);
        tracing::debug!(?columns, "mapped header columns");

        body.iter()
            .filter_map(|cells| {
                let mut fields = RawFields::default();
                for (i, column) in columns.iter().enumerate() {
                    if let Some(field) = column {
                        // Short rows pad with empty cells.
                        fields.set(*field, cells.get(i).map_or("", String::as_str));
                    }
                }
                self.build(fields, false, now)
            })
            .collect()
    }

    fn parse_headerless(&self, lines: &[&str], now: DateTime<Utc>) -> Vec<SccmComputerRecord> {
        const POSITIONS: [SccmField; 8] = [
            SccmField::Name,
            SccmField::Memory,
            SccmField::Storage,
            SccmField::Model,
            SccmField::LastLoginUsername,
            SccmField::LastSeen,
            SccmField::Os,
            SccmField::OsVersion,
        ];

        lines
            .iter()
            .filter_map(|line| {
                let split = split_relaxed(line, self.config.min_headerless_tokens);
                tracing::trace!(run = split.run, columns = split.tokens.len(), "split line");
                let mut fields = RawFields::default();
                for (field, token) in POSITIONS.iter().zip(&split.tokens) {
                    fields.set(*field, *token);
                }
                self.build(fields, true, now)
            })
            .collect()
    }

    fn build(
        &self,
        fields: RawFields<'_>,
        memory_in_kb: bool,
        now: DateTime<Utc>,
    ) -> Option<SccmComputerRecord> {
        let name = fields.name.trim();
        if name.is_empty() {
            tracing::trace!("dropping line without a computer name");
            return None;
        }

        let mut record = SccmComputerRecord::named(name, self.ids.next_id(), now);
        record.memory = if memory_in_kb {
            memory_display(fields.memory)
        } else {
            fields.memory.trim().to_string()
        };
        record.storage = fields.storage.trim().to_string();
        record.model = fields.model.trim().to_string();
        record.last_login_username = fields.last_login_username.trim().to_string();
        record.last_seen = fields.last_seen.trim().to_string();
        record.os = os_with_version(fields.os, fields.os_version);
        record.notes = fields.notes.trim().to_string();
        record.sccm_status = match fields.sccm_status.parse() {
            Ok(status) => status,
            Err(_) => derive_sccm_status(
                &record.last_seen,
                &record.last_login_username,
                now,
                self.config.active_window_days,
            ),
        };
        record.status = fields.status.parse().unwrap_or_default();
        Some(record)
    }
}

/// Cell text gathered for one record before transformation.
#[derive(Debug, Default)]
struct RawFields<'a> {
    name: &'a str,
    memory: &'a str,
    storage: &'a str,
    model: &'a str,
    last_login_username: &'a str,
    last_seen: &'a str,
    os: &'a str,
    os_version: &'a str,
    sccm_status: &'a str,
    status: &'a str,
    notes: &'a str,
}

impl<'a> RawFields<'a> {
    fn set(&mut self, field: SccmField, value: &'a str) {
        let slot = match field {
            SccmField::Name => &mut self.name,
            SccmField::Memory => &mut self.memory,
            SccmField::Storage => &mut self.storage,
            SccmField::Model => &mut self.model,
            SccmField::LastLoginUsername => &mut self.last_login_username,
            SccmField::LastSeen => &mut self.last_seen,
            SccmField::Os => &mut self.os,
            SccmField::OsVersion => &mut self.os_version,
            SccmField::SccmStatus => &mut self.sccm_status,
            SccmField::Status => &mut self.status,
            SccmField::Notes => &mut self.notes,
            SccmField::Id | SccmField::LastUpdated => return,
        };
        *slot = value;
    }
}
