//! `club-output` — transcript and settlement writers for the club simulator.
//!
//! | Writer          | Output                                               |
//! |-----------------|------------------------------------------------------|
//! | [`TextWriter`]  | The canonical line-per-event transcript (any `Write`) |
//! | [`CsvWriter`]   | `transcript.csv`, `profits.csv` in a directory       |
//! | [`Tee`]         | Both of two writers                                  |
//!
//! All writers implement [`ReportWriter`] and are driven by
//! [`ReportObserver`], which implements `club_sim::DayObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use club_output::{ReportObserver, TextWriter};
//!
//! let mut obs = ReportObserver::new(TextWriter::new(std::io::stdout().lock()));
//! club.run(&events, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::{ProfitRow, TranscriptLine};
pub use text::TextWriter;
pub use writer::{ReportWriter, Tee};
