//! Plain data rows handed to writers.

use std::fmt;

use club_core::{ClientName, ClockTime, Span, TableId};
use club_sim::{EventCode, TableProfit};

/// One line of the day transcript.
///
/// `Display` renders the canonical text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    /// Bare `HH:MM` marking opening or closing.
    Time(ClockTime),

    /// An input event or one the engine derived from it.
    Event {
        at:     ClockTime,
        code:   EventCode,
        client: ClientName,
        table:  Option<TableId>,
    },

    /// A rejected event, `HH:MM 13 message`.
    Error { at: ClockTime, message: String },
}

impl TranscriptLine {
    pub fn at(&self) -> ClockTime {
        match self {
            TranscriptLine::Time(at)
            | TranscriptLine::Event { at, .. }
            | TranscriptLine::Error { at, .. } => *at,
        }
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptLine::Time(at) => write!(f, "{at}"),
            TranscriptLine::Event { at, code, client, table: Some(table) } => {
                write!(f, "{at} {code} {client} {table}")
            }
            TranscriptLine::Event { at, code, client, table: None } => {
                write!(f, "{at} {code} {client}")
            }
            TranscriptLine::Error { at, message } => {
                write!(f, "{at} {} {message}", EventCode::Error)
            }
        }
    }
}

/// Settlement for one table: `id revenue HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitRow {
    pub table:    TableId,
    pub revenue:  u64,
    pub occupied: Span,
}

impl From<&TableProfit> for ProfitRow {
    fn from(p: &TableProfit) -> Self {
        Self { table: p.table, revenue: p.revenue, occupied: p.occupied }
    }
}

impl fmt::Display for ProfitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.table, self.revenue, self.occupied)
    }
}
