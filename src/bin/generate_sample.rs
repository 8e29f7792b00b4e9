//! Writes a synthetic SimpleDyno run for demos and manual testing.
//!
//! Usage: `generate_sample [OUTPUT] [--comma]`.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
#[command(about = "Write a synthetic SimpleDyno .sdp run.")]
struct Args {
    /// Output file.
    #[arg(value_name = "OUTPUT", default_value = "sample_run.sdp")]
    output: PathBuf,

    /// Write decimals with `,` the way European-locale exports do.
    #[arg(long)]
    comma: bool,
}

/// Torque curve shaped like a small two-stroke: a hump peaking near
/// `peak_rad_s`, falling off quadratically either side.
fn torque_at(rad_s: f64, peak_rad_s: f64, peak_torque: f64) -> f64 {
    let spread = 520.0;
    (peak_torque * (1.0 - ((rad_s - peak_rad_s) / spread).powi(2))).max(0.0)
}

/// SplitMix64; enough for reproducible noise.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * amplitude
    }
}

fn render_run(rng: &mut SimpleRng, comma: bool) -> String {
    let fmt = |v: f64, decimals: usize| {
        let s = format!("{v:.decimals$}");
        if comma {
            s.replace('.', ",")
        } else {
            s
        }
    };

    let mut out = String::new();
    out.push_str("SimpleDyno run export\n");
    out.push_str("Gear_Ratio: 4.10\n");
    out.push_str("Roller_Diameter: 0.2032\n");
    out.push_str("Roller_Mass: 12.5\n");
    out.push_str("Actual_MOI: 0.0831\n");
    out.push_str("PRIMARY_CHANNEL_CURVE_FIT_DATA\n");
    out.push_str(
        "Time_(Sec) RPM1_Roller_(rad/s) RPM1_Motor_(rad/s) Motor_Torque_(N.m) Power_(W)\n",
    );

    // Sweep from idle-ish to over-rev; the first rows sit below the RPM floor.
    let steps = 160;
    for i in 0..steps {
        let time = i as f64 * 0.05;
        let motor = 420.0 + i as f64 * 5.0 + rng.jitter(1.5);
        let roller = motor / 4.10;
        let torque = torque_at(motor, 880.0, 1.35) + rng.jitter(0.02);
        let power = torque * motor;
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            fmt(time, 2),
            fmt(roller, 3),
            fmt(motor, 3),
            fmt(torque, 4),
            fmt(power, 2)
        );
    }

    out.push_str("FULL_SET_COAST_DOWN_FIT_DATA\n");
    out.push_str("Time_(Sec) Coast_Down_(rad/s)\n");
    for i in 0..10 {
        let _ = writeln!(out, "{} {}", fmt(i as f64 * 0.5, 2), fmt(1200.0 - i as f64 * 60.0, 1));
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output = args.output.display();

    let mut rng = SimpleRng(42);
    let text = render_run(&mut rng, args.comma);
    std::fs::write(&args.output, &text).with_context(|| format!("writing {output}"))?;

    let report = dyno_report::parse(&text).context("generated run does not parse")?;
    println!(
        "Wrote {output}: {} samples above the RPM floor, peak {:.2} hp @ {} RPM",
        report.sample_count(),
        report.peak_power().hp,
        report.peak_power().rpm
    );
    Ok(())
}
