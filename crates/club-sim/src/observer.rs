//! Observer trait for transcript output and data collection.

use club_core::{ClientName, ClockTime};
use club_state::TableProfit;

use crate::{ClientEvent, ClubError, DerivedEvent};

/// Callbacks invoked by [`Club::run`][crate::Club::run] while a day is
/// replayed, in transcript order.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — counting rejections
///
/// ```rust
/// use club_core::ClockTime;
/// use club_sim::{ClubError, DayObserver};
///
/// #[derive(Default)]
/// struct Rejections(usize);
///
/// impl DayObserver for Rejections {
///     fn on_error(&mut self, _at: ClockTime, _error: &ClubError) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait DayObserver {
    /// Called once before the first event, with the opening time.
    fn on_day_start(&mut self, _opening: ClockTime) {}

    /// Called for every input event, before it is applied.
    fn on_event(&mut self, _event: &ClientEvent) {}

    /// Called right after [`on_event`][Self::on_event] when the event was
    /// rejected with a reportable error.
    fn on_error(&mut self, _at: ClockTime, _error: &ClubError) {}

    /// Called right after the event that caused `derived`.
    fn on_derived(&mut self, _at: ClockTime, _derived: &DerivedEvent) {}

    /// Called once per client still inside at closing, sorted by name.
    fn on_forced_leave(&mut self, _at: ClockTime, _client: &ClientName) {}

    /// Called after all forced leaves, with the closing time.
    fn on_day_end(&mut self, _closing: ClockTime) {}

    /// Called once per table after the day ends, in ascending table order.
    fn on_profit(&mut self, _profit: &TableProfit) {}

    /// Called once after the last profit.
    fn on_finish(&mut self) {}
}

/// A [`DayObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}
