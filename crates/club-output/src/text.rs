//! Plain-text transcript backend.

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{OutputResult, ProfitRow, TranscriptLine};

/// Writes the canonical transcript, one line per row, to any `Write`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the underlying sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_line(&mut self, line: &TranscriptLine) -> OutputResult<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn write_profit(&mut self, row: &ProfitRow) -> OutputResult<()> {
        writeln!(self.out, "{row}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
