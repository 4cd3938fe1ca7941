//! End-of-day billing.
//!
//! A table is billed for its *total* occupied time rounded up to whole hours,
//! not per session: two 40-minute sessions are 80 minutes, billed as 2 hours.

use club_core::{Span, TableId};

/// Revenue and occupied time of one table for the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableProfit {
    pub table:    TableId,
    pub revenue:  u64,
    pub occupied: Span,
}

impl TableProfit {
    /// Bill `occupied` at `hourly_rate` per started hour.
    ///
    /// Revenue saturates at `u64::MAX` rather than wrapping.
    pub fn bill(table: TableId, occupied: Span, hourly_rate: u64) -> Self {
        Self {
            table,
            revenue: occupied.billable_hours().saturating_mul(hourly_rate),
            occupied,
        }
    }
}
