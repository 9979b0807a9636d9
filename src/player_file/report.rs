use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};

use crate::player_file::audit::MissingFieldReport;

pub const REPORT_HEADER: [&str; 4] = ["Player ID", "First Name", "Last Name", "Missing Fields"];

/// Writes the missing-bio report and counts the rows it has written.
pub struct ReportWriter<W: Write> {
    csv: Writer<W>,
    flagged: usize,
}

impl<W: Write> ReportWriter<W> {
    /// The header goes out immediately, so an empty audit still yields a valid report.
    pub fn new(wtr: W) -> Result<Self> {
        let mut csv = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(wtr);
        csv.write_record(REPORT_HEADER)
            .context("Failed to write report header")?;
        Ok(Self { csv, flagged: 0 })
    }

    pub fn write(&mut self, report: &MissingFieldReport) -> Result<()> {
        self.csv
            .serialize(report)
            .with_context(|| format!("Failed to write report row for {}", report.player_id))?;
        self.flagged += 1;
        Ok(())
    }

    /// Flushes the underlying writer and returns the number of flagged rows.
    pub fn finish(mut self) -> Result<usize> {
        self.csv.flush().context("Failed to flush report")?;
        Ok(self.flagged)
    }
}

impl ReportWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;
        Self::new(file)
    }
}
