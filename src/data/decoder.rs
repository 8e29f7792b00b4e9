//! Row → [`Sample`] conversion with unit handling and the low-speed floor.
//!
//! Nothing in here fails a parse. A row that cannot be read, is too short or
//! runs below [`MIN_RPM`] simply yields no sample.

use log::debug;

use super::constants::{
    MIN_RPM, POWER_COLUMN, RAD_S_TO_RPM, RPM_COLUMN, TORQUE_COLUMN, WATTS_PER_HP,
};
use super::error::ParseError;
use super::model::Sample;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Zero-based token positions of the three columns the decoder reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub rpm: usize,
    pub torque: usize,
    pub power: usize,
}

impl ColumnLayout {
    /// Resolve the required columns from a whitespace-separated header row.
    ///
    /// Names are matched exactly; the first one missing is reported.
    pub fn resolve(header_row: &str) -> Result<Self, ParseError> {
        let names: Vec<&str> = header_row.split_whitespace().collect();
        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| ParseError::MissingColumn(column.to_string()))
        };

        Ok(ColumnLayout {
            rpm: find(RPM_COLUMN)?,
            torque: find(TORQUE_COLUMN)?,
            power: find(POWER_COLUMN)?,
        })
    }

    /// Minimum token count a row needs to hold all three columns.
    fn min_tokens(&self) -> usize {
        self.rpm.max(self.torque).max(self.power) + 1
    }
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

/// Parse a number that may use `,` as its decimal separator.
pub fn parse_decimal(token: &str) -> Option<f64> {
    token.replace(',', ".").parse::<f64>().ok()
}

/// Round to two decimals using the exact decimal value of `value`.
///
/// Scaling by 100 first would round twice: 2.835 is stored as 2.83499...
/// and must come out as 2.83.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse::<f64>().unwrap_or(value)
}

/// Speeds from here up no longer fit an `i64` RPM.
const RPM_LIMIT: f64 = i64::MAX as f64;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one data row, or `None` if the row is skipped.
pub fn decode_row(row: &str, layout: &ColumnLayout) -> Option<Sample> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    if tokens.len() < layout.min_tokens() {
        return None;
    }

    let rpm = parse_decimal(tokens[layout.rpm])? * RAD_S_TO_RPM;
    if !rpm.is_finite() || !(MIN_RPM..RPM_LIMIT).contains(&rpm) {
        return None;
    }

    let torque = round2(parse_decimal(tokens[layout.torque])?);
    let hp = round2(parse_decimal(tokens[layout.power])? / WATTS_PER_HP);
    if !torque.is_finite() || !hp.is_finite() {
        return None;
    }

    Some(Sample {
        rpm: rpm.round_ties_even() as i64,
        torque,
        hp,
    })
}

/// Decode every candidate row, keeping file order.
pub fn decode_rows<'a, I>(rows: I, layout: &ColumnLayout) -> Vec<Sample>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = 0usize;
    let samples: Vec<Sample> = rows
        .into_iter()
        .filter_map(|row| {
            let sample = decode_row(row, layout);
            if sample.is_none() {
                skipped += 1;
            }
            sample
        })
        .collect();

    debug!("decoded {} samples, skipped {skipped} rows", samples.len());
    samples
}
