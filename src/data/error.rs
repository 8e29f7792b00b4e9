use thiserror::Error;

use super::constants::MIN_RPM;

/// Fatal outcomes of parsing one run file.
///
/// Malformed rows are not represented here: the decoder skips them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The `Time_(Sec)` header row lacks one of the required columns.
    #[error("required column not found in data header row: {0}")]
    MissingColumn(String),
    /// No data section, no header row, or every row fell below the RPM floor.
    #[error("parsing complete, but no data points were found above {} RPM", MIN_RPM)]
    NoDataAboveThreshold,
}
