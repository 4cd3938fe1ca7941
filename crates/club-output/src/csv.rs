//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `transcript.csv` — `time,code,client,table,message`; opening and
//!   closing markers carry only `time`
//! - `profits.csv` — `table,revenue,occupied`

use std::fs::File;
use std::path::Path;

use club_sim::EventCode;
use csv::Writer;
use tracing::debug;

use crate::writer::ReportWriter;
use crate::{OutputResult, ProfitRow, TranscriptLine};

/// Writes the transcript and settlement to two CSV files.
pub struct CsvWriter {
    transcript: Writer<File>,
    profits:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transcript = Writer::from_path(dir.join("transcript.csv"))?;
        transcript.write_record(["time", "code", "client", "table", "message"])?;

        let mut profits = Writer::from_path(dir.join("profits.csv"))?;
        profits.write_record(["table", "revenue", "occupied"])?;

        debug!(dir = %dir.display(), "CSV report opened");
        Ok(Self {
            transcript,
            profits,
            finished: false,
        })
    }
}

impl ReportWriter for CsvWriter {
    fn write_line(&mut self, line: &TranscriptLine) -> OutputResult<()> {
        let record = match line {
            TranscriptLine::Time(at) => {
                [at.to_string(), String::new(), String::new(), String::new(), String::new()]
            }
            TranscriptLine::Event { at, code, client, table } => [
                at.to_string(),
                code.to_string(),
                client.to_string(),
                table.map(|t| t.to_string()).unwrap_or_default(),
                String::new(),
            ],
            TranscriptLine::Error { at, message } => [
                at.to_string(),
                EventCode::Error.to_string(),
                String::new(),
                String::new(),
                message.clone(),
            ],
        };
        self.transcript.write_record(&record)?;
        Ok(())
    }

    fn write_profit(&mut self, row: &ProfitRow) -> OutputResult<()> {
        self.profits.write_record(&[
            row.table.to_string(),
            row.revenue.to_string(),
            row.occupied.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transcript.flush()?;
        self.profits.flush()?;
        Ok(())
    }
}
