//! `ReportObserver<W>` — bridges `DayObserver` to a `ReportWriter`.

use club_core::{ClientName, ClockTime};
use club_sim::{ClientEvent, ClubError, DayObserver, DerivedEvent, EventCode, TableProfit};
use tracing::warn;

use crate::row::{ProfitRow, TranscriptLine};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`DayObserver`] that renders the day through any [`ReportWriter`].
///
/// Errors from the writer are stored internally because `DayObserver` methods
/// have no return value.  After `club.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `club.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, line: TranscriptLine) {
        let result = self.writer.write_line(&line);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "report write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> DayObserver for ReportObserver<W> {
    fn on_day_start(&mut self, opening: ClockTime) {
        self.line(TranscriptLine::Time(opening));
    }

    fn on_event(&mut self, event: &ClientEvent) {
        self.line(TranscriptLine::Event {
            at:     event.at,
            code:   event.kind.code(),
            client: event.client.clone(),
            table:  event.kind.table(),
        });
    }

    fn on_error(&mut self, at: ClockTime, error: &ClubError) {
        self.line(TranscriptLine::Error { at, message: error.to_string() });
    }

    fn on_derived(&mut self, at: ClockTime, derived: &DerivedEvent) {
        self.line(TranscriptLine::Event {
            at,
            code:   derived.code(),
            client: derived.client().clone(),
            table:  derived.table(),
        });
    }

    fn on_forced_leave(&mut self, at: ClockTime, client: &ClientName) {
        self.line(TranscriptLine::Event {
            at,
            code:   EventCode::ForcedLeft,
            client: client.clone(),
            table:  None,
        });
    }

    fn on_day_end(&mut self, closing: ClockTime) {
        self.line(TranscriptLine::Time(closing));
    }

    fn on_profit(&mut self, profit: &TableProfit) {
        let result = self.writer.write_profit(&ProfitRow::from(profit));
        self.store_err(result);
    }

    fn on_finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
