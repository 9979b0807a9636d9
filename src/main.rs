#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions)]

use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use const_format::concatcp;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::player_file::audit::MissingFieldReport;
use crate::player_file::parser::PlayerFileReader;
use crate::player_file::report::ReportWriter;

mod player_file;

const ABOUT: &str = "Reports ATP player records missing birthdate or handedness.";

/// The tool is meant to be run from a `utilities` directory beside the player file.
const DEFAULT_PLAYER_FILE: &str = concatcp!("..", MAIN_SEPARATOR_STR, "atp_players.csv");
const DEFAULT_REPORT_FILE: &str = "missing_bio_report.csv";

#[derive(Parser, Debug)]
#[command(name = "atp-bio-audit", about = ABOUT)]
struct Opt {
    #[arg(short, long, default_value = DEFAULT_PLAYER_FILE)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,
}

#[derive(Debug, Eq, PartialEq)]
enum AuditStatus {
    /// Player file was absent; nothing was opened or written.
    Aborted,
    Done { flagged: usize, report_path: PathBuf },
    Failed,
}

impl AuditStatus {
    fn summarize(&self) {
        if let Self::Done {
            flagged,
            report_path,
        } = self
        {
            info!("Audit complete.");
            info!("Found {} players with missing biographical data.", flagged);
            info!("Report saved to: {}", report_path.display());
        }
    }
}

/// Streams every auditable record into the report. Returns the flagged count
/// and the absolute path of the written report.
fn scan(input: &Path, output: &Path) -> Result<(usize, PathBuf)> {
    let reader = PlayerFileReader::try_from(input)?;
    let mut writer = ReportWriter::create(output)?;
    for record in reader {
        if let Some(report) = MissingFieldReport::new(&record?) {
            debug!("{} {}: {}", report.first_name, report.last_name, report.labels());
            writer.write(&report)?;
        }
    }
    let flagged = writer.finish()?;
    let report_path = std::path::absolute(output)
        .with_context(|| format!("Failed to resolve report path {}", output.display()))?;
    Ok((flagged, report_path))
}

fn audit_players(opt: &Opt) -> AuditStatus {
    if !opt.input.exists() {
        error!(
            "Could not find player file at {}",
            opt.input.display()
        );
        error!("Make sure you are running this script from the 'utilities' directory.");
        return AuditStatus::Aborted;
    }

    info!("Scanning {} for missing data...", opt.input.display());

    match scan(&opt.input, &opt.output) {
        Ok((flagged, report_path)) => AuditStatus::Done {
            flagged,
            report_path,
        },
        Err(e) => {
            error!("An error occurred: {:#}", e);
            AuditStatus::Failed
        }
    }
}

#[allow(clippy::expect_used)]
fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize trace");

    let start = Instant::now();
    let opt: Opt = Opt::parse();

    audit_players(&opt).summarize();

    let end = start.elapsed();
    debug!("Elapsed: {:?}", end);
}
