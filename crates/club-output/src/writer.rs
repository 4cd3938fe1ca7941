//! The `ReportWriter` trait and writer combinators.

use crate::{OutputResult, ProfitRow, TranscriptLine};

/// Trait implemented by the text and CSV writers.
///
/// Errors surface to [`ReportObserver`][crate::ReportObserver], which keeps
/// the first one for [`take_error`][crate::ReportObserver::take_error].
pub trait ReportWriter {
    /// Write one transcript line.
    fn write_line(&mut self, line: &TranscriptLine) -> OutputResult<()>;

    /// Write one table's settlement.
    fn write_profit(&mut self, row: &ProfitRow) -> OutputResult<()>;

    /// Flush everything written so far.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// `None` writes nothing, so an optional backend can sit inside a [`Tee`].
impl<W: ReportWriter> ReportWriter for Option<W> {
    fn write_line(&mut self, line: &TranscriptLine) -> OutputResult<()> {
        match self {
            Some(w) => w.write_line(line),
            None => Ok(()),
        }
    }

    fn write_profit(&mut self, row: &ProfitRow) -> OutputResult<()> {
        match self {
            Some(w) => w.write_profit(row),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}

/// Writes everything to two writers.
///
/// Both writers are always called; if both fail, the first writer's error
/// is returned.
pub struct Tee<A, B> {
    pub first:  A,
    pub second: B,
}

impl<A: ReportWriter, B: ReportWriter> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: ReportWriter, B: ReportWriter> ReportWriter for Tee<A, B> {
    fn write_line(&mut self, line: &TranscriptLine) -> OutputResult<()> {
        let a = self.first.write_line(line);
        let b = self.second.write_line(line);
        a.and(b)
    }

    fn write_profit(&mut self, row: &ProfitRow) -> OutputResult<()> {
        let a = self.first.write_profit(row);
        let b = self.second.write_profit(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.first.finish();
        let b = self.second.finish();
        a.and(b)
    }
}
