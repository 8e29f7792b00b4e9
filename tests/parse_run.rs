use std::path::{Path, PathBuf};

use dyno_report::data::constants::MIN_RPM;
use dyno_report::{
    aggregate, load_file, parse, AggregatedBin, ParseError, ReportMeta, ReportSession, RunRole,
    Sample,
};

const MAIN_RUN: &str = include_str!("fixtures/main_run.sdp");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn main_run_config() {
    let report = parse(MAIN_RUN).unwrap();
    let config: Vec<(&str, &str)> = report.config().iter().collect();
    assert_eq!(
        config,
        vec![
            ("Actual_MOI", "0.0831"),
            ("Gear_Ratio", "4.10"),
            ("Roller_Diameter", "0.2032"),
            ("Roller_Mass", "12,5"),
        ]
    );
}

#[test]
fn main_run_samples() {
    let report = parse(MAIN_RUN).unwrap();
    let expected = [
        Sample { rpm: 5539, torque: 1.20, hp: 0.93 },
        Sample { rpm: 5730, torque: 1.25, hp: 1.01 },
        Sample { rpm: 5990, torque: 1.30, hp: 1.09 },
        Sample { rpm: 6494, torque: 1.28, hp: 1.17 },
        Sample { rpm: 6685, torque: 1.22, hp: 1.15 },
        Sample { rpm: 7066, torque: 1.15, hp: 1.14 },
    ];
    assert_eq!(report.samples(), &expected);
    assert_eq!(report.sample_count(), expected.len());
    assert!(report.samples().iter().all(|s| s.rpm as f64 >= MIN_RPM));
}

#[test]
fn main_run_bins_and_peaks() {
    let report = parse(MAIN_RUN).unwrap();
    assert_eq!(
        report.bins(),
        &[
            AggregatedBin { rpm: 5500, torque: 1.25, hp: 1.01 },
            AggregatedBin { rpm: 6000, torque: 1.28, hp: 1.17 },
            AggregatedBin { rpm: 6500, torque: 1.22, hp: 1.15 },
            AggregatedBin { rpm: 7000, torque: 1.15, hp: 1.14 },
        ]
    );
    assert_eq!(report.peak_power(), Sample { rpm: 6494, torque: 1.28, hp: 1.17 });
    assert_eq!(report.peak_torque(), Sample { rpm: 5990, torque: 1.30, hp: 1.09 });
}

#[test]
fn bins_match_means_of_their_members() {
    let report = parse(MAIN_RUN).unwrap();
    for width in [100u32, 250, 500, 1000] {
        let bins = aggregate(report.samples(), width);
        assert!(bins.windows(2).all(|w| w[0].rpm < w[1].rpm));
        for bin in &bins {
            let members: Vec<&Sample> = report
                .samples()
                .iter()
                .filter(|s| s.rpm.div_euclid(width as i64) * width as i64 == bin.rpm)
                .collect();
            assert!(!members.is_empty());
            let n = members.len() as f64;
            let torque = members.iter().map(|s| s.torque).sum::<f64>() / n;
            let hp = members.iter().map(|s| s.hp).sum::<f64>() / n;
            assert!((bin.torque - torque).abs() <= 0.005 + 1e-9);
            assert!((bin.hp - hp).abs() <= 0.005 + 1e-9);
        }
    }
}

#[test]
fn parsing_twice_gives_identical_json() {
    let first = serde_json::to_vec(&parse(MAIN_RUN).unwrap()).unwrap();
    let second = serde_json::to_vec(&parse(MAIN_RUN).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_required_column() {
    let err = load_file(&fixture("missing_power.sdp")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::MissingColumn("Power_(W)".into()))
    );
}

#[test]
fn session_with_comparison_run() {
    let session = ReportSession::load(
        &fixture("main_run.sdp"),
        Some(fixture("comparison_run.sdp").as_path()),
        ReportMeta::new("Track day", "50cc"),
    )
    .unwrap();

    let runs: Vec<(RunRole, usize)> = session.runs().map(|(role, r)| (role, r.sample_count())).collect();
    assert_eq!(runs, vec![(RunRole::Main, 6), (RunRole::Comparison, 2)]);

    let comparison = session.comparison_run().unwrap();
    assert_eq!(comparison.name(), Some("comparison_run.sdp"));
    assert_eq!(comparison.config().get("Gear_Ratio"), Some("3.90"));
    assert_eq!(comparison.bins(), &[AggregatedBin { rpm: 5500, torque: 45.0, hp: 3.35 }]);
}

#[test]
fn broken_comparison_does_not_sink_main_run() {
    let session = ReportSession::load(
        &fixture("main_run.sdp"),
        Some(fixture("missing_power.sdp").as_path()),
        ReportMeta::default(),
    )
    .unwrap();
    assert_eq!(session.main_run().sample_count(), 6);
    assert!(session.comparison_run().is_none());
}
