use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::warn;
use serde::Serialize;

use crate::data::{load_file, Report};

// ---------------------------------------------------------------------------
// Report metadata
// ---------------------------------------------------------------------------

/// Free-form details printed on a report alongside the runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMeta {
    pub customer_name: String,
    pub engine_type: String,
    /// Local time the report was assembled, `%Y-%m-%d %H:%M`.
    pub test_date: String,
}

impl ReportMeta {
    /// Metadata stamped with the current local time.
    pub fn new(customer_name: impl Into<String>, engine_type: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            engine_type: engine_type.into(),
            test_date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self::new("N/A", "N/A")
    }
}

// ---------------------------------------------------------------------------
// Session – main run plus optional comparison run
// ---------------------------------------------------------------------------

/// Which side of a comparison a run sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunRole {
    Main,
    Comparison,
}

impl fmt::Display for RunRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunRole::Main => write!(f, "Main Run"),
            RunRole::Comparison => write!(f, "Comparison Run"),
        }
    }
}

/// Read-only pairing of a main run with an optional comparison run.
///
/// The two reports are kept side by side as parsed; nothing is merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSession {
    main_run: Report,
    comparison_run: Option<Report>,
    meta: ReportMeta,
}

impl ReportSession {
    pub fn new(main_run: Report, comparison_run: Option<Report>, meta: ReportMeta) -> Self {
        Self {
            main_run,
            comparison_run,
            meta,
        }
    }

    /// Load the main run and, if given, a comparison run.
    ///
    /// A main run that fails to load fails the session. A comparison run that
    /// fails is logged and left out.
    pub fn load(main: &Path, comparison: Option<&Path>, meta: ReportMeta) -> Result<Self> {
        let main_run = load_file(main)
            .with_context(|| format!("failed to parse main run {}", main.display()))?;

        let comparison_run = comparison.and_then(|path| match load_file(path) {
            Ok(report) => Some(report),
            Err(err) => {
                warn!("comparison run {} skipped: {err:#}", path.display());
                None
            }
        });

        Ok(Self::new(main_run, comparison_run, meta))
    }

    pub fn main_run(&self) -> &Report {
        &self.main_run
    }

    pub fn comparison_run(&self) -> Option<&Report> {
        self.comparison_run.as_ref()
    }

    pub fn meta(&self) -> &ReportMeta {
        &self.meta
    }

    /// Runs in display order, main first.
    pub fn runs(&self) -> impl Iterator<Item = (RunRole, &Report)> {
        std::iter::once((RunRole::Main, &self.main_run))
            .chain(self.comparison_run.iter().map(|r| (RunRole::Comparison, r)))
    }

    /// Re-bin every run with `bin_width`.
    pub fn with_bin_width(self, bin_width: u32) -> Self {
        Self {
            main_run: self.main_run.with_bin_width(bin_width),
            comparison_run: self.comparison_run.map(|r| r.with_bin_width(bin_width)),
            meta: self.meta,
        }
    }
}
