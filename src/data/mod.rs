//! Data layer: run file parsing, unit conversion, binning and the report.
//!
//! Architecture:
//! ```text
//!  .sdp run text
//!        │
//!        ├──────────────────────┐
//!        ▼                      ▼
//!   ┌──────────┐         ┌──────────────┐
//!   │  loader   │ header  │    loader     │  data table: sentinel → Time_(Sec)
//!   │  (pass 1) │ config  │   (pass 2)    │  row → column layout → rows
//!   └──────────┘         └──────────────┘
//!        │                      │
//!        │                      ▼
//!        │               ┌──────────┐
//!        │               │  decoder  │  row → Sample (units, RPM floor)
//!        │               └──────────┘
//!        │                      │
//!        ▼                      ▼
//!   ┌──────────────────────────────┐
//!   │ report  (aggregate → bins,    │
//!   │          peaks, immutable)    │
//!   └──────────────────────────────┘
//! ```

pub mod aggregate;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;

pub use aggregate::aggregate;
pub use error::ParseError;
pub use loader::{load_file, parse};
pub use model::{AggregatedBin, ChartPoint, RawConfig, Sample};
pub use report::Report;
