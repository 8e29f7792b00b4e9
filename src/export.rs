//! Writers for handing reports to the outside world: JSON for renderers and
//! templates, CSV for spreadsheets, and a plain-text summary for the terminal.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::Report;
use crate::session::ReportSession;

/// Pretty-printed JSON of a session (meta, main run, comparison run).
pub fn write_session_json<W: Write>(session: &ReportSession, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, session).context("serializing session to JSON")?;
    writeln!(writer)?;
    Ok(())
}

/// One CSV row per aggregated bin: `rpm,torque,hp`.
pub fn write_bins_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    write_csv(report.bins(), writer).context("writing bins CSV")
}

/// One CSV row per retained sample, file order: `rpm,torque,hp`.
pub fn write_samples_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    write_csv(report.samples(), writer).context("writing samples CSV")
}

fn write_csv<T: Serialize, W: Write>(records: &[T], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Human-readable overview of every run in the session.
pub fn write_summary<W: Write>(session: &ReportSession, mut writer: W) -> Result<()> {
    let meta = session.meta();
    writeln!(writer, "Customer: {}", meta.customer_name)?;
    writeln!(writer, "Engine:   {}", meta.engine_type)?;
    writeln!(writer, "Date:     {}", meta.test_date)?;

    for (role, report) in session.runs() {
        writeln!(writer)?;
        writeln!(writer, "== {role}: {}", report.name().unwrap_or("<unnamed>"))?;
        for (key, value) in report.config().iter() {
            writeln!(writer, "  {key:<16} {value}")?;
        }
        writeln!(writer, "  Data points      {}", report.sample_count())?;

        let power = report.peak_power();
        let torque = report.peak_torque();
        writeln!(writer, "  Peak power       {:.2} hp @ {} RPM", power.hp, power.rpm)?;
        writeln!(writer, "  Peak torque      {:.2} N.m @ {} RPM", torque.torque, torque.rpm)?;

        writeln!(writer, "  {:>8} {:>10} {:>8}", "RPM", "Torque", "HP")?;
        for bin in report.bins() {
            writeln!(writer, "  {:>8} {:>10.2} {:>8.2}", bin.rpm, bin.torque, bin.hp)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse;
    use crate::session::ReportMeta;

    const RUN: &str = "Gear_Ratio: 4.10\n\
        PRIMARY_CHANNEL_CURVE_FIT_DATA\n\
        Time_(Sec) RPM1_Motor_(rad/s) Motor_Torque_(N.m) Power_(W)\n\
        0.1 600.0 50.0 3000.0\n\
        0.2 627.3 40.0 2000.0\n\
        0.3 700.0 45.0 3200.0\n";

    fn session() -> ReportSession {
        let meta = ReportMeta {
            customer_name: "CLI User".into(),
            engine_type: "N/A".into(),
            test_date: "2024-05-01 10:30".into(),
        };
        let main = parse(RUN).unwrap().with_name("main.sdp");
        ReportSession::new(main, None, meta)
    }

    #[test]
    fn bins_csv_has_header_and_rows() {
        let session = session();
        let mut out = Vec::new();
        write_bins_csv(session.main_run(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["rpm,torque,hp", "5500,45.0,3.35", "6500,45.0,4.29"]);
    }

    #[test]
    fn samples_csv_keeps_file_order() {
        let session = session();
        let mut out = Vec::new();
        write_samples_csv(session.main_run(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rpms: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(rpms, vec!["5730", "5990", "6685"]);
    }

    #[test]
    fn json_exposes_runs_and_points() {
        let mut out = Vec::new();
        write_session_json(&session(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["meta"]["customer_name"], "CLI User");
        assert!(value["comparison_run"].is_null());
        let main = &value["main_run"];
        assert_eq!(main["name"], "main.sdp");
        assert_eq!(main["config"]["Gear_Ratio"], "4.10");
        assert_eq!(main["sample_count"], 3);
        assert_eq!(main["peak_torque"]["rpm"], 5730);
        assert_eq!(main["samples"][0]["hp"], 4.02);
        assert_eq!(main["bins"][0]["rpm"], 5500);
    }

    #[test]
    fn summary_lists_peaks_and_bins() {
        let mut out = Vec::new();
        write_summary(&session(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Main Run: main.sdp"));
        assert!(text.contains("Peak power       4.29 hp @ 6685 RPM"));
        assert!(text.contains("Peak torque      50.00 N.m @ 5730 RPM"));
        assert!(text.contains("Gear_Ratio       4.10"));
    }
}
