//! SimpleDyno run reports.
//!
//! Parses `.sdp` run exports into a [`Report`]: header configuration, the
//! RPM/torque/power samples above the low-speed floor, torque and horsepower
//! averaged over RPM bins, and peak values. [`ReportSession`] pairs a main
//! run with an optional comparison run for rendering.

pub mod data;
pub mod export;
pub mod session;

pub use data::{aggregate, load_file, parse, AggregatedBin, ParseError, RawConfig, Report, Sample};
pub use session::{ReportMeta, ReportSession, RunRole};
