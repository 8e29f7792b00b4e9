use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use super::constants::{DATA_END, DATA_START, HEADER_ROW_PREFIX};
use super::decoder::{decode_rows, ColumnLayout};
use super::error::ParseError;
use super::model::RawConfig;
use super::report::Report;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the text of a SimpleDyno run into a [`Report`].
///
/// Header and data section are read in two independent passes over `text`.
/// Rows that cannot be decoded are skipped; the only failures are a missing
/// required column and an empty result.
pub fn parse(text: &str) -> Result<Report, ParseError> {
    let config = extract_config(text);
    let table = locate_data_table(text)?;

    let samples = match &table {
        Some(table) => decode_rows(table.rows.iter().copied(), &table.layout),
        None => {
            debug!("no {HEADER_ROW_PREFIX} header row found in data section");
            Vec::new()
        }
    };

    Report::build(config, samples)
}

/// Read and parse a run file, naming the report after the file.
pub fn load_file(path: &Path) -> Result<Report> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading run file {}", path.display()))?;
    let report = parse(&text).with_context(|| format!("parsing run file {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(
        "loaded {name}: {} samples in {} bins",
        report.sample_count(),
        report.bins().len()
    );
    Ok(report.with_name(name))
}

// ---------------------------------------------------------------------------
// Header pass
// ---------------------------------------------------------------------------

/// Collect recognised `Key: value` lines up to the data section marker.
///
/// Only the first colon splits; later duplicates of a key win.
pub fn extract_config(text: &str) -> RawConfig {
    let mut config = RawConfig::default();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':') {
            config.record(key.trim(), value.trim());
        }
        if line.trim() == DATA_START {
            break;
        }
    }
    debug!("header pass found {} config entries", config.len());
    config
}

// ---------------------------------------------------------------------------
// Data pass
// ---------------------------------------------------------------------------

/// The resolved column layout and the candidate rows that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable<'a> {
    pub layout: ColumnLayout,
    /// Trimmed, non-empty lines after the header row, before the end marker.
    pub rows: Vec<&'a str>,
}

/// Find the data table between [`DATA_START`] and [`DATA_END`].
///
/// Returns `Ok(None)` when no header row appears in the data section.
pub fn locate_data_table(text: &str) -> Result<Option<DataTable<'_>>, ParseError> {
    let mut in_data = false;
    let mut layout: Option<ColumnLayout> = None;
    let mut rows = Vec::new();

    for line in text.lines().map(str::trim) {
        if line == DATA_START {
            in_data = true;
            continue;
        }
        if !in_data {
            continue;
        }
        if line.starts_with(DATA_END) {
            break;
        }

        match layout {
            None => {
                if line.starts_with(HEADER_ROW_PREFIX) {
                    layout = Some(ColumnLayout::resolve(line)?);
                }
            }
            Some(_) => {
                if !line.is_empty() {
                    rows.push(line);
                }
            }
        }
    }

    Ok(layout.map(|layout| DataTable { layout, rows }))
}
