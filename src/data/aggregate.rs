use std::collections::BTreeMap;

use log::warn;

use super::decoder::round2;
use super::model::{AggregatedBin, Sample};

/// Lower edge of the bucket containing `rpm`.
pub fn bin_key(rpm: i64, width: i64) -> i64 {
    rpm.div_euclid(width) * width
}

#[derive(Default)]
struct BinAccumulator {
    torque_sum: f64,
    hp_sum: f64,
    count: usize,
}

impl BinAccumulator {
    fn add(&mut self, sample: &Sample) {
        self.torque_sum += sample.torque;
        self.hp_sum += sample.hp;
        self.count += 1;
    }

    fn finish(self, rpm: i64) -> AggregatedBin {
        let n = self.count as f64;
        AggregatedBin {
            rpm,
            torque: round2(self.torque_sum / n),
            hp: round2(self.hp_sum / n),
        }
    }
}

/// Average samples into `bin_width`-wide RPM buckets.
///
/// Bins come out in ascending RPM order, one per non-empty bucket. Sums are
/// accumulated in input order. A zero width yields no bins.
pub fn aggregate(samples: &[Sample], bin_width: u32) -> Vec<AggregatedBin> {
    if bin_width == 0 {
        warn!("bin width of 0 requested, no bins produced");
        return Vec::new();
    }
    let width = i64::from(bin_width);

    let mut bins: BTreeMap<i64, BinAccumulator> = BTreeMap::new();
    for sample in samples {
        bins.entry(bin_key(sample.rpm, width)).or_default().add(sample);
    }

    bins.into_iter()
        .map(|(rpm, acc)| acc.finish(rpm))
        .collect()
}
