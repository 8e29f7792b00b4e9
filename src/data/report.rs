use serde::Serialize;

use super::aggregate::aggregate;
use super::constants::DEFAULT_BIN_WIDTH;
use super::error::ParseError;
use super::model::{AggregatedBin, ChartPoint, RawConfig, Sample};

// ---------------------------------------------------------------------------
// Report – everything downstream renderers get from one run
// ---------------------------------------------------------------------------

/// The parsed and aggregated result of one run file.
///
/// Immutable once built; the `with_*` methods return a new report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    config: RawConfig,
    sample_count: usize,
    peak_power: Sample,
    peak_torque: Sample,
    bin_width: u32,
    bins: Vec<AggregatedBin>,
    samples: Vec<Sample>,
}

impl Report {
    /// Build a report from header config and decoded samples (file order).
    ///
    /// Fails with [`ParseError::NoDataAboveThreshold`] when `samples` is empty.
    pub fn build(config: RawConfig, samples: Vec<Sample>) -> Result<Self, ParseError> {
        let peak_power = first_max_by(&samples, |s| s.hp).ok_or(ParseError::NoDataAboveThreshold)?;
        let peak_torque =
            first_max_by(&samples, |s| s.torque).ok_or(ParseError::NoDataAboveThreshold)?;
        let bins = aggregate(&samples, DEFAULT_BIN_WIDTH);

        Ok(Report {
            name: None,
            config,
            sample_count: samples.len(),
            peak_power,
            peak_torque,
            bin_width: DEFAULT_BIN_WIDTH,
            bins,
            samples,
        })
    }

    /// Attach a display name, usually the source file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Re-bin the samples with a different bucket width.
    pub fn with_bin_width(mut self, bin_width: u32) -> Self {
        self.bins = aggregate(&self.samples, bin_width);
        self.bin_width = bin_width;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &RawConfig {
        &self.config
    }

    /// Retained samples in file order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn bins(&self) -> &[AggregatedBin] {
        &self.bins
    }

    pub fn bin_width(&self) -> u32 {
        self.bin_width
    }

    /// Sample with the highest power; the earliest one on ties.
    pub fn peak_power(&self) -> Sample {
        self.peak_power
    }

    /// Sample with the highest torque; the earliest one on ties.
    pub fn peak_torque(&self) -> Sample {
        self.peak_torque
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Torque vs RPM in file order.
    pub fn torque_curve(&self) -> Vec<ChartPoint> {
        self.samples
            .iter()
            .map(|s| ChartPoint { x: s.rpm, y: s.torque })
            .collect()
    }

    /// Horsepower vs RPM in file order.
    pub fn hp_curve(&self) -> Vec<ChartPoint> {
        self.samples
            .iter()
            .map(|s| ChartPoint { x: s.rpm, y: s.hp })
            .collect()
    }
}

/// Linear max scan that keeps the first of equal maxima.
fn first_max_by(samples: &[Sample], key: impl Fn(&Sample) -> f64) -> Option<Sample> {
    samples
        .iter()
        .copied()
        .reduce(|best, s| if key(&s) > key(&best) { s } else { best })
}
