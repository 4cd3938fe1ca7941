//! Clock model for a single simulated day.
//!
//! # Design
//!
//! A timestamp is the number of whole minutes since midnight ([`ClockTime`]);
//! a duration is a number of whole minutes ([`Span`]).  Minutes are the finest
//! unit the input format offers, so all occupancy arithmetic is exact integer
//! arithmetic.  Only billing rounds, and it rounds a table's *total* span up
//! to whole hours ([`Span::billable_hours`]).

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::{CoreError, CoreResult};

const MINUTES_PER_HOUR: u32 = 60;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A minute of the day in `[00:00, 23:59]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(pub u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from an hour and minute.
    ///
    /// Fails if `hour >= 24` or `minute >= 60`.
    pub fn from_hm(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(CoreError::Parse(format!(
                "time {hour:02}:{minute:02} is outside 00:00..=23:59"
            )));
        }
        Ok(ClockTime(hour * MINUTES_PER_HOUR + minute))
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Time elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: ClockTime) -> Span {
        Span(self.0.saturating_sub(earlier.0))
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    /// Parse strict `HH:MM` (exactly two digits on each side of the colon).
    fn from_str(s: &str) -> CoreResult<Self> {
        let bad = || CoreError::Parse(format!("invalid time {s:?}: expected HH:MM"));

        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(bad());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let hour:   u32 = h.parse().map_err(|_| bad())?;
        let minute: u32 = m.parse().map_err(|_| bad())?;
        Self::from_hm(hour, minute)
    }
}

impl Sub for ClockTime {
    type Output = Span;
    #[inline]
    fn sub(self, rhs: ClockTime) -> Span {
        self.since(rhs)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour() % 24, self.minute())
    }
}

// ── Span ──────────────────────────────────────────────────────────────────────

/// A non-negative duration in whole minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span(pub u32);

impl Span {
    pub const ZERO: Span = Span(0);

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_hours(hours: u32) -> Span {
        Span(hours * MINUTES_PER_HOUR)
    }

    /// Whole hours to bill for this span: any started hour counts in full.
    ///
    /// `0 → 0`, `1..=60 → 1`, `61..=120 → 2`, …
    #[inline]
    pub fn billable_hours(self) -> u64 {
        u64::from(self.0.div_ceil(MINUTES_PER_HOUR))
    }
}

impl Add for Span {
    type Output = Span;
    #[inline]
    fn add(self, rhs: Span) -> Span {
        Span(self.0 + rhs.0)
    }
}

impl AddAssign for Span {
    #[inline]
    fn add_assign(&mut self, rhs: Span) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Span {
    /// `HH:MM`; hours are not wrapped at 24.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / MINUTES_PER_HOUR, self.0 % MINUTES_PER_HOUR)
    }
}
