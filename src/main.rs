use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use dyno_report::data::constants::DEFAULT_BIN_WIDTH;
use dyno_report::export::{write_bins_csv, write_session_json, write_summary};
use dyno_report::{ReportMeta, ReportSession};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "dyno-report")]
#[command(about = "Parse SimpleDyno .sdp runs into torque and power reports.")]
struct Cli {
    /// Main run file.
    #[arg(value_name = "MAIN_SDP")]
    main_run: PathBuf,

    /// Optional run to compare against the main run.
    #[arg(value_name = "COMPARISON_SDP")]
    comparison_run: Option<PathBuf>,

    /// RPM bucket width of the aggregated curves.
    #[arg(long, value_name = "RPM", default_value_t = DEFAULT_BIN_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    bin_width: u32,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report here instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Also export the main run's aggregated bins as CSV.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    #[arg(long, value_name = "NAME", default_value = "CLI User")]
    customer: String,

    #[arg(long, value_name = "TYPE", default_value = "N/A")]
    engine: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let meta = ReportMeta::new(cli.customer, cli.engine);
    let session = ReportSession::load(&cli.main_run, cli.comparison_run.as_deref(), meta)?
        .with_bin_width(cli.bin_width);

    let mut writer: Box<dyn Write> = match &cli.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match cli.format {
        OutputFormat::Text => write_summary(&session, &mut writer)?,
        OutputFormat::Json => write_session_json(&session, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_bins_csv(session.main_run(), BufWriter::new(file))?;
        info!("wrote bins to {}", path.display());
    }
    Ok(())
}
