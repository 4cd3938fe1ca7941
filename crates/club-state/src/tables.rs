//! The `TableRegistry` — fixed set of numbered tables and their occupancy.
//!
//! Every mutation of a table goes through the registry, which keeps the
//! occupant and the time it sat down together in a single `Option`: a table
//! is free exactly when it has no [`Occupancy`], and `occupied_since` cannot
//! exist without an occupant.
//!
//! Accumulated time only grows, and only when an occupant leaves
//! ([`vacate`][TableRegistry::vacate]) or is evicted at closing
//! ([`evict_all`][TableRegistry::evict_all]).

use club_core::{ClientName, ClockTime, Span, TableId};
use tracing::trace;

use crate::{StateError, StateResult, TableProfit};

/// Who sits at a table and since when.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Occupancy {
    client: ClientName,
    since:  ClockTime,
}

/// One table's state.
#[derive(Clone, Debug)]
pub struct Table {
    id:        TableId,
    occupancy: Option<Occupancy>,
    total:     Span,
}

impl Table {
    fn new(id: TableId) -> Self {
        Self { id, occupancy: None, total: Span::ZERO }
    }

    #[inline]
    pub fn id(&self) -> TableId {
        self.id
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }

    /// The client sitting here, if any.
    pub fn occupant(&self) -> Option<&ClientName> {
        self.occupancy.as_ref().map(|o| &o.client)
    }

    /// When the current occupant sat down; `None` while the table is free.
    pub fn occupied_since(&self) -> Option<ClockTime> {
        self.occupancy.as_ref().map(|o| o.since)
    }

    /// Time accumulated by all finished sessions so far.
    #[inline]
    pub fn total_occupied(&self) -> Span {
        self.total
    }

    /// Close the current session at `at`, adding its length to the total.
    fn close_session(&mut self, at: ClockTime) -> Option<ClientName> {
        let Occupancy { client, since } = self.occupancy.take()?;
        let session = at - since;
        self.total += session;
        trace!(table = %self.id, client = %client, %session, total = %self.total, "session closed");
        Some(client)
    }
}

/// Fixed-size set of tables numbered `1..=N`.
///
/// `tables[i]` holds the table with id `i + 1`, so lookups by [`TableId`] are
/// direct indexing and iteration is in ascending id order.
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    /// Create `count` free tables numbered `1..=count`.
    pub fn new(count: u32) -> Self {
        Self {
            tables: (0..count as usize).map(|i| Table::new(TableId::from_slot(i))).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look up a table by id.
    pub fn get(&self, id: TableId) -> Option<&Table> {
        id.slot().and_then(|slot| self.tables.get(slot))
    }

    /// All tables in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    /// `true` if at least one table has no occupant.
    pub fn any_free(&self) -> bool {
        self.tables.iter().any(Table::is_free)
    }

    pub fn free_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_free()).count()
    }

    /// The client sitting at `id`, if the table exists and is occupied.
    pub fn occupant_of(&self, id: TableId) -> Option<&ClientName> {
        self.get(id).and_then(Table::occupant)
    }

    /// The table `client` currently occupies, if any.
    pub fn table_of(&self, client: &str) -> Option<TableId> {
        self.tables
            .iter()
            .find(|t| t.occupant().is_some_and(|c| c.as_str() == client))
            .map(Table::id)
    }

    /// Seat `client` at table `id` starting at `at`.
    ///
    /// # Errors
    ///
    /// - [`StateError::NoSuchTable`] if `id` is outside `1..=N`.
    /// - [`StateError::TableOccupied`] if someone already sits there
    ///   (the occupant is left untouched).
    pub fn seat(&mut self, id: TableId, client: ClientName, at: ClockTime) -> StateResult<()> {
        let table = id
            .slot()
            .and_then(|slot| self.tables.get_mut(slot))
            .ok_or(StateError::NoSuchTable(id))?;
        if !table.is_free() {
            return Err(StateError::TableOccupied(id));
        }
        trace!(table = %id, client = %client, %at, "seated");
        table.occupancy = Some(Occupancy { client, since: at });
        Ok(())
    }

    /// Free whichever table `client` occupies, accounting time up to `at`.
    ///
    /// Returns the freed table, or `None` if `client` was not seated.
    pub fn vacate(&mut self, client: &str, at: ClockTime) -> Option<TableId> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.occupant().is_some_and(|c| c.as_str() == client))?;
        table.close_session(at);
        Some(table.id)
    }

    /// Close every open session at `at` and free all tables.
    ///
    /// Returns how many tables were occupied.
    pub fn evict_all(&mut self, at: ClockTime) -> usize {
        self.tables
            .iter_mut()
            .filter_map(|t| t.close_session(at))
            .count()
    }

    /// Bill every table at `hourly_rate`, in ascending id order.
    ///
    /// Tables that were never used are included with zero revenue.
    pub fn profits(&self, hourly_rate: u64) -> Vec<TableProfit> {
        self.tables
            .iter()
            .map(|t| TableProfit::bill(t.id, t.total, hourly_rate))
            .collect()
    }
}
