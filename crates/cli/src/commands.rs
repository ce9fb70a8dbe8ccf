use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use officevisit_core::{SystemClock, UuidIdGenerator};
use officevisit_inventory::{InventorySheet, InventorySummary, RawInventoryRow, TotaledRow, rows_to_csv};
use officevisit_sccm::{IngestConfig, SccmIngestor, records_to_csv};

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn ingest_sccm(path: &Path, window_days: Option<i64>, json: bool) -> Result<String> {
    let text = read_input(path)?;

    let mut config = IngestConfig::from_env();
    if let Some(days) = window_days {
        config = config.with_active_window_days(days);
    }

    let clock = SystemClock;
    let ids = UuidIdGenerator;
    let records = SccmIngestor::new(&clock, &ids)
        .with_config(config)
        .parse(&text)
        .with_context(|| format!("failed to import {}", path.display()))?;

    if json {
        let mut out = serde_json::to_string_pretty(&records)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(records_to_csv(&records)?)
    }
}

#[derive(Serialize)]
struct TotalsReport {
    rows: Vec<TotaledRow>,
    summary: InventorySummary,
}

pub fn totals(path: &Path, json: bool) -> Result<String> {
    let text = read_input(path)?;
    let raw: Vec<RawInventoryRow> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of inventory rows", path.display()))?;

    let sheet = InventorySheet::from_raw_rows(&raw, &UuidIdGenerator)?;
    let summary = sheet.summary();
    tracing::info!(
        rows = summary.row_count,
        grand_total = summary.grand_total,
        "computed inventory totals"
    );

    if json {
        let report = TotalsReport {
            rows: sheet.rows_with_totals(),
            summary,
        };
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(rows_to_csv(sheet.rows())?)
    }
}

pub fn template() -> Result<String> {
    let mut out = serde_json::to_string_pretty(&InventorySheet::standard())?;
    out.push('\n');
    Ok(out)
}
