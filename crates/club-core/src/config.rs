//! Day configuration.

use crate::{ClockTime, CoreError, CoreResult, TableId};

/// Immutable parameters of one simulated day.
///
/// Normally read from the header of the day file by `club-input`, which calls
/// [`validate`][Self::validate] before handing the config to the engine.  The
/// engine itself trusts whatever it is given.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayConfig {
    /// Number of tables, numbered `1..=tables`.
    pub tables: u32,

    /// Opening time.  Arrivals must be strictly later.
    pub opening: ClockTime,

    /// Closing time.  Everyone still present is evicted at this instant.
    pub closing: ClockTime,

    /// Price of one started hour at one table.
    pub hourly_rate: u64,
}

impl DayConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tables == 0 {
            return Err(CoreError::Config("table count must be at least 1".into()));
        }
        if self.closing <= self.opening {
            return Err(CoreError::Config(format!(
                "closing time {} must be after opening time {}",
                self.closing, self.opening
            )));
        }
        if self.hourly_rate == 0 {
            return Err(CoreError::Config("hourly rate must be at least 1".into()));
        }
        Ok(())
    }

    /// `true` if `table` names one of this day's tables.
    #[inline]
    pub fn has_table(&self, table: TableId) -> bool {
        (1..=self.tables).contains(&table.0)
    }

    /// Iterator over every table id in ascending order.
    pub fn table_ids(&self) -> impl Iterator<Item = TableId> {
        (1..=self.tables).map(TableId)
    }
}
