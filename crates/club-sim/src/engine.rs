//! The `Club` engine and its day loop.

use club_core::{ClientName, ClockTime, DayConfig, TableId};
use club_state::{ClientRegistry, StateError, TableProfit, TableRegistry, WaitQueue};
use tracing::{debug, info};

use crate::{ClientEvent, ClubError, ClubResult, DayObserver, DerivedEvent, EventKind, Outcome};

// ── Client state ──────────────────────────────────────────────────────────────

/// Where a client is, derived from which store holds them.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ClientState {
    /// Not inside the club.
    Absent,
    /// Inside, neither seated nor queued.
    Idle,
    /// Inside and in the waiting queue.
    Waiting,
    /// Inside and sitting at a table.
    Seated(TableId),
}

// ── Day summary ───────────────────────────────────────────────────────────────

/// Totals returned by [`Club::run`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DaySummary {
    /// Input events replayed.
    pub events:  usize,
    /// Events rejected with any [`ClubError`].
    pub errors:  usize,
    /// Clients evicted at closing.
    pub forced:  usize,
    /// Sum of all tables' revenue, saturating at `u64::MAX`.
    pub revenue: u64,
}

// ── Club ──────────────────────────────────────────────────────────────────────

/// The simulation engine for one day.
///
/// `Club` exclusively owns the three stores and is the only code that mutates
/// them, so the cross-store invariants hold between any two calls:
///
/// - a client is in at most one of "queued" and "seated";
/// - everyone queued or seated is present in the client registry;
/// - a client occupies at most one table.
///
/// Each transition either applies completely or returns an error having
/// changed nothing.  The one exception is a `Wait` that finds the
/// queue full: the client is turned away, which removes them.
pub struct Club {
    config:  DayConfig,
    tables:  TableRegistry,
    clients: ClientRegistry,
    queue:   WaitQueue,
}

impl Club {
    /// Create a club with `config.tables` free tables and an empty queue of
    /// the same capacity.  `config` is trusted; validate it beforehand.
    pub fn new(config: DayConfig) -> Self {
        Self {
            tables:  TableRegistry::new(config.tables),
            clients: ClientRegistry::new(),
            queue:   WaitQueue::new(config.tables as usize),
            config,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &DayConfig {
        &self.config
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    pub fn queue(&self) -> &WaitQueue {
        &self.queue
    }

    pub fn client_state(&self, name: &str) -> ClientState {
        if !self.clients.contains(name) {
            ClientState::Absent
        } else if let Some(table) = self.tables.table_of(name) {
            ClientState::Seated(table)
        } else if self.queue.contains(name) {
            ClientState::Waiting
        } else {
            ClientState::Idle
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// A client walks in.
    ///
    /// # Errors
    ///
    /// - [`ClubError::NotOpenYet`] unless `at` is strictly after opening.
    /// - [`ClubError::AlreadyPresent`] if the client is already inside.
    pub fn arrive(&mut self, name: &ClientName, at: ClockTime) -> ClubResult<()> {
        if at <= self.config.opening {
            return Err(ClubError::NotOpenYet);
        }
        self.clients
            .add(name.clone())
            .map_err(|_| ClubError::AlreadyPresent)
    }

    /// A client sits at `table`, leaving any table they already occupy.
    ///
    /// Sitting back down at one's own table closes the running session and
    /// starts a new one at `at`.  A queued client who sits down leaves the
    /// queue.
    ///
    /// # Errors
    ///
    /// - [`ClubError::ClientUnknown`] if the client is not inside.
    /// - [`ClubError::NoSuchTable`] if `table` is not one of the day's tables.
    /// - [`ClubError::TableBusy`] if someone else sits there.  The client
    ///   keeps their current table.
    pub fn sit(&mut self, name: &ClientName, table: TableId, at: ClockTime) -> ClubResult<()> {
        if !self.clients.contains(name.as_str()) {
            return Err(ClubError::ClientUnknown);
        }
        let target = self.tables.get(table).ok_or(ClubError::NoSuchTable(table))?;
        if target.occupant().is_some_and(|occupant| occupant != name) {
            return Err(ClubError::TableBusy);
        }

        // Every check has passed; from here on nothing can fail.
        if let Some(previous) = self.tables.vacate(name.as_str(), at) {
            debug!(client = %name, from = %previous, to = %table, "moving tables");
        }
        self.queue.remove(name.as_str());
        self.tables.seat(table, name.clone(), at).map_err(seat_error)
    }

    /// A client asks to wait for a table.
    ///
    /// Succeeds silently, without queueing, for a client who is not inside,
    /// already queued, or already seated.
    ///
    /// # Errors
    ///
    /// - [`ClubError::CanWaitNoLonger`] if any table is free.
    /// - [`ClubError::QueueFull`] if the queue is at capacity.  The client is
    ///   removed from the club; report it as a forced leave.
    pub fn wait(&mut self, name: &ClientName, at: ClockTime) -> ClubResult<()> {
        if self.tables.any_free() {
            return Err(ClubError::CanWaitNoLonger);
        }
        if !self.clients.contains(name.as_str()) {
            debug!(client = %name, %at, "unknown client asked to wait; ignored");
            return Ok(());
        }
        if self.tables.table_of(name.as_str()).is_some() {
            debug!(client = %name, %at, "seated client asked to wait; ignored");
            return Ok(());
        }

        match self.queue.enqueue(name.clone()) {
            Ok(()) | Err(StateError::AlreadyQueued(_)) => Ok(()),
            Err(_) => {
                self.clients.remove(name.as_str());
                Err(ClubError::QueueFull)
            }
        }
    }

    /// A client leaves.
    ///
    /// If the client freed a table and someone is queued, the longest-waiting
    /// client is seated there at `at` and returned.
    ///
    /// # Errors
    ///
    /// [`ClubError::ClientUnknown`] if the client is not inside.
    pub fn leave(&mut self, name: &ClientName, at: ClockTime) -> ClubResult<Option<DerivedEvent>> {
        if !self.clients.contains(name.as_str()) {
            return Err(ClubError::ClientUnknown);
        }
        let freed = self.tables.vacate(name.as_str(), at);
        self.queue.remove(name.as_str());
        self.clients.remove(name.as_str());

        let Some(table) = freed else {
            return Ok(None);
        };
        let Some(next) = self.queue.front().cloned() else {
            return Ok(None);
        };
        // Seat first so a failure leaves the queue untouched.
        self.tables.seat(table, next.clone(), at).map_err(seat_error)?;
        self.queue.dequeue();
        Ok(Some(DerivedEvent::SeatedFromQueue { client: next, table }))
    }

    /// Apply one input event and describe what happened.
    pub fn apply(&mut self, event: &ClientEvent) -> Outcome {
        let ClientEvent { at, ref client, kind } = *event;
        let result = match kind {
            EventKind::Arrive       => self.arrive(client, at).map(|()| None),
            EventKind::Sit(table)   => self.sit(client, table, at).map(|()| None),
            EventKind::Wait         => self.wait(client, at).map(|()| None),
            EventKind::Leave        => self.leave(client, at),
        };

        match result {
            Ok(derived) => {
                debug!(%at, %client, ?kind, ?derived, "accepted");
                Outcome { derived, ..Outcome::accepted() }
            }
            Err(ClubError::QueueFull) => {
                debug!(%at, %client, "queue full; client turned away");
                Outcome::rejected(ClubError::QueueFull)
                    .with_derived(DerivedEvent::ForcedLeave { client: client.clone() })
            }
            Err(error) => {
                debug!(%at, %client, ?kind, %error, "rejected");
                Outcome::rejected(error)
            }
        }
    }

    // ── Day boundary ──────────────────────────────────────────────────────

    /// Close the day at `closing`: end every table session, empty the queue,
    /// and remove everyone still inside.
    ///
    /// Returns the removed clients sorted by name.
    pub fn end_of_day(&mut self, closing: ClockTime) -> Vec<ClientName> {
        let seated = self.tables.evict_all(closing);
        self.queue.clear();
        let mut forced = self.clients.clear_all();
        forced.sort_unstable();
        info!(%closing, seated, forced = forced.len(), "day closed");
        forced
    }

    /// Revenue per table at the configured hourly rate, ascending table id.
    pub fn profits(&self) -> Vec<TableProfit> {
        self.tables.profits(self.config.hourly_rate)
    }

    // ── Day loop ──────────────────────────────────────────────────────────

    /// Replay `events`, close the day at the configured closing time, and
    /// settle.  Observer hooks fire in transcript order (see the crate docs).
    ///
    /// `events` must be in non-decreasing time order; they are applied as
    /// given.
    pub fn run<O: DayObserver>(&mut self, events: &[ClientEvent], observer: &mut O) -> DaySummary {
        let mut summary = DaySummary { events: events.len(), ..DaySummary::default() };

        observer.on_day_start(self.config.opening);
        for event in events {
            observer.on_event(event);
            let outcome = self.apply(event);
            if let Some(error) = &outcome.error {
                summary.errors += 1;
                if error.is_reported() {
                    observer.on_error(event.at, error);
                }
            }
            if let Some(derived) = &outcome.derived {
                observer.on_derived(event.at, derived);
            }
        }

        let closing = self.config.closing;
        let forced = self.end_of_day(closing);
        summary.forced = forced.len();
        for client in &forced {
            observer.on_forced_leave(closing, client);
        }
        observer.on_day_end(closing);

        for profit in self.profits() {
            summary.revenue = summary.revenue.saturating_add(profit.revenue);
            observer.on_profit(&profit);
        }
        observer.on_finish();

        info!(
            events  = summary.events,
            errors  = summary.errors,
            forced  = summary.forced,
            revenue = summary.revenue,
            "day replayed"
        );
        summary
    }
}

fn seat_error(e: StateError) -> ClubError {
    match e {
        StateError::NoSuchTable(id) => ClubError::NoSuchTable(id),
        _ => ClubError::TableBusy,
    }
}
