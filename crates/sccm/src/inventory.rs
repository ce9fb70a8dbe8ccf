//! The PC inventory list: records in display order, unique by id.

use serde::{Deserialize, Serialize};

use officevisit_core::{Clock, Entity, RecordId, ReportError, ReportResult};

use crate::error::IngestError;
use crate::export::records_to_csv;
use crate::ingest::SccmIngestor;
use crate::record::{ComputerStatus, SccmComputerRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputerInventory {
    records: Vec<SccmComputerRecord>,
}

impl ComputerInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SccmComputerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&SccmComputerRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Parse pasted text and append every record it yields.
    ///
    /// All or nothing: on any error the inventory is left as it was.
    pub fn ingest_text(
        &mut self,
        text: &str,
        ingestor: &SccmIngestor<'_>,
    ) -> Result<usize, IngestError> {
        let parsed = ingestor.parse(text)?;

        for (i, record) in parsed.iter().enumerate() {
            let clash = self.get(record.id()).is_some()
                || parsed[..i].iter().any(|earlier| earlier.id() == record.id());
            if clash {
                let err = ReportError::conflict(format!("duplicate record id {}", record.id()));
                return Err(err.into());
            }
        }

        let added = parsed.len();
        self.records.extend(parsed);
        Ok(added)
    }

    /// Add a machine by hand, with only its name filled in.
    pub fn add_manual(
        &mut self,
        name: &str,
        ingestor: &SccmIngestor<'_>,
    ) -> ReportResult<&SccmComputerRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReportError::validation("computer name cannot be empty"));
        }
        let record =
            SccmComputerRecord::named(name, ingestor.ids().next_id(), ingestor.clock().now());
        if self.get(record.id()).is_some() {
            return Err(ReportError::conflict(format!("duplicate record id {}", record.id())));
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn set_status(
        &mut self,
        id: &RecordId,
        status: ComputerStatus,
        clock: &dyn Clock,
    ) -> ReportResult<()> {
        let record = self.get_mut(id)?;
        record.status = status;
        record.last_updated = clock.now();
        Ok(())
    }

    pub fn set_notes(&mut self, id: &RecordId, notes: &str, clock: &dyn Clock) -> ReportResult<()> {
        let record = self.get_mut(id)?;
        record.notes = notes.to_string();
        record.last_updated = clock.now();
        Ok(())
    }

    pub fn remove(&mut self, id: &RecordId) -> ReportResult<SccmComputerRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ReportError::not_found(format!("computer record {id}")))?;
        Ok(self.records.remove(idx))
    }

    pub fn to_csv(&self) -> Result<String, IngestError> {
        Ok(records_to_csv(&self.records)?)
    }

    fn get_mut(&mut self, id: &RecordId) -> ReportResult<&mut SccmComputerRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ReportError::not_found(format!("computer record {id}")))
    }
}
