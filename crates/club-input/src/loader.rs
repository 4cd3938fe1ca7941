//! Day file loader.
//!
//! Loading is all-or-nothing: the whole file is read and checked before any
//! event is replayed, so a malformed line late in the file never leaves a
//! half-written transcript behind.
//!
//! # Header
//!
//! | Line | Contents              | Rejected when                               |
//! |------|-----------------------|---------------------------------------------|
//! | 1    | table count           | not an integer, or `< 1`                    |
//! | 2    | `opening closing`     | not two `HH:MM` times, or closing ≤ opening |
//! | 3    | hourly rate           | not an integer, or `< 1`                    |
//!
//! # Events
//!
//! `HH:MM code client [table]`, 3 to 5 fields.  Only codes 1–4 are accepted;
//! code 2 needs a table in `1..=N`.  Fields beyond those a code uses are
//! ignored.  Timestamps must not go backwards.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use club_core::{ClientName, ClockTime, DayConfig, TableId};
use club_sim::{ClientEvent, EventCode, EventKind};

use crate::{InputError, InputResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Everything a day file describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayInput {
    pub config: DayConfig,
    /// Events in file order, which is also non-decreasing time order.
    pub events: Vec<ClientEvent>,
}

/// Load a day file from disk.
pub fn load_day_path(path: &Path) -> InputResult<DayInput> {
    let file = File::open(path)?;
    load_day_reader(BufReader::new(file))
}

/// Like [`load_day_path`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn load_day_reader<R: BufRead>(reader: R) -> InputResult<DayInput> {
    let mut lines = NumberedLines::new(reader);

    let config = parse_header(&mut lines)?;
    debug!(
        tables  = config.tables,
        opening = %config.opening,
        closing = %config.closing,
        rate    = config.hourly_rate,
        "header parsed"
    );

    let mut events = Vec::new();
    let mut last = ClockTime::MIDNIGHT;
    // A blank line is only allowed if nothing but blank lines follows it.
    let mut blank: Option<(usize, String)> = None;

    while let Some((number, line)) = lines.next_line()? {
        if line.is_empty() {
            blank.get_or_insert((number, line));
            continue;
        }
        if let Some((number, line)) = blank.take() {
            return Err(malformed(number, line, "blank line before more events"));
        }

        let event = match parse_event(&line, &config) {
            Ok(event) => event,
            Err(reason) => return Err(malformed(number, line, reason)),
        };
        if event.at < last {
            return Err(malformed(number, line, "timestamp earlier than previous event"));
        }
        last = event.at;
        events.push(event);
    }

    info!(events = events.len(), "day file loaded");
    Ok(DayInput { config, events })
}

// ── Line source ───────────────────────────────────────────────────────────────

/// `BufRead::lines` with 1-based line numbers and any trailing `\r` removed.
struct NumberedLines<R> {
    inner:  std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { inner: reader.lines(), number: 0 }
    }

    fn next_line(&mut self) -> InputResult<Option<(usize, String)>> {
        let Some(line) = self.inner.next().transpose()? else {
            return Ok(None);
        };
        self.number += 1;
        let line = match line.strip_suffix('\r') {
            Some(stripped) => stripped.to_owned(),
            None => line,
        };
        Ok(Some((self.number, line)))
    }

    fn require(&mut self) -> InputResult<(usize, String)> {
        self.next_line()?.ok_or(InputError::MissingConfig)
    }
}

// ── Header ────────────────────────────────────────────────────────────────────

fn parse_header<R: BufRead>(lines: &mut NumberedLines<R>) -> InputResult<DayConfig> {
    let (number, line) = lines.require()?;
    let tables = match line.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(malformed(number, line, "table count must be an integer ≥ 1")),
    };

    let (number, line) = lines.require()?;
    let (opening, closing) = match parse_hours(&line) {
        Some(hours) => hours,
        None => return Err(malformed(number, line, "expected `HH:MM HH:MM` with closing after opening")),
    };

    let (number, line) = lines.require()?;
    let hourly_rate = match line.parse::<u64>() {
        Ok(n) if n >= 1 => n,
        _ => return Err(malformed(number, line, "hourly rate must be an integer ≥ 1")),
    };

    Ok(DayConfig { tables, opening, closing, hourly_rate })
}

fn parse_hours(line: &str) -> Option<(ClockTime, ClockTime)> {
    let mut fields = line.split(' ');
    let opening: ClockTime = fields.next()?.parse().ok()?;
    let closing: ClockTime = fields.next()?.parse().ok()?;
    if fields.next().is_some() || closing <= opening {
        return None;
    }
    Some((opening, closing))
}

// ── Events ────────────────────────────────────────────────────────────────────

fn parse_event(line: &str, config: &DayConfig) -> Result<ClientEvent, &'static str> {
    let fields: Vec<&str> = line.split(' ').collect();
    if !(3..=5).contains(&fields.len()) {
        return Err("expected 3 to 5 fields");
    }

    let at: ClockTime = fields[0].parse().map_err(|_| "bad timestamp")?;
    let code = fields[1].parse::<u8>().map_err(|_| "event code is not an integer")?;
    let client = ClientName::parse(fields[2]).map_err(|_| "invalid client name")?;

    let kind = match EventCode::incoming(code) {
        Some(EventCode::Arrived) => EventKind::Arrive,
        Some(EventCode::Waiting) => EventKind::Wait,
        Some(EventCode::Left)    => EventKind::Leave,
        Some(EventCode::Sat)     => {
            let table = fields
                .get(3)
                .ok_or("sit event without a table")?
                .parse::<u32>()
                .map(TableId)
                .map_err(|_| "table is not an integer")?;
            if !config.has_table(table) {
                return Err("table out of range");
            }
            EventKind::Sit(table)
        }
        _ => return Err("unknown event code"),
    };

    Ok(ClientEvent::new(at, client, kind))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn malformed(number: usize, line: String, reason: &str) -> InputError {
    debug!(line = number, reason, "malformed day file line");
    InputError::Malformed { line, number }
}
