//! Input events, derived events, and per-event outcomes.

use std::fmt;

use club_core::{ClientName, ClockTime, TableId};

use crate::ClubError;

// ── Wire codes ────────────────────────────────────────────────────────────────

/// Numeric event codes used in day files and transcripts.
///
/// Codes 1–4 are incoming events; 11–13 are produced by the engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum EventCode {
    Arrived      = 1,
    Sat          = 2,
    Waiting      = 3,
    Left         = 4,
    ForcedLeft   = 11,
    SatFromQueue = 12,
    Error        = 13,
}

impl EventCode {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode an *incoming* event code.  Engine-only codes (11–13) are not
    /// valid input and return `None`.
    pub fn incoming(code: u8) -> Option<EventCode> {
        match code {
            1 => Some(EventCode::Arrived),
            2 => Some(EventCode::Sat),
            3 => Some(EventCode::Waiting),
            4 => Some(EventCode::Left),
            _ => None,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ── Input events ──────────────────────────────────────────────────────────────

/// What a client did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Arrive,
    Sit(TableId),
    Wait,
    Leave,
}

impl EventKind {
    pub fn code(self) -> EventCode {
        match self {
            EventKind::Arrive => EventCode::Arrived,
            EventKind::Sit(_) => EventCode::Sat,
            EventKind::Wait   => EventCode::Waiting,
            EventKind::Leave  => EventCode::Left,
        }
    }

    /// The table named by a `Sit` event.
    pub fn table(self) -> Option<TableId> {
        match self {
            EventKind::Sit(table) => Some(table),
            _ => None,
        }
    }
}

/// One already-parsed line of the day's event log.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientEvent {
    pub at:     ClockTime,
    pub client: ClientName,
    pub kind:   EventKind,
}

impl ClientEvent {
    pub fn new(at: ClockTime, client: ClientName, kind: EventKind) -> Self {
        Self { at, client, kind }
    }
}

// ── Engine output ─────────────────────────────────────────────────────────────

/// An event the engine synthesizes as a consequence of an input event.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivedEvent {
    /// A queued client took the table freed by a departure.
    SeatedFromQueue { client: ClientName, table: TableId },

    /// A client asked to wait while the queue was full and left instead.
    ForcedLeave { client: ClientName },
}

impl DerivedEvent {
    pub fn code(&self) -> EventCode {
        match self {
            DerivedEvent::SeatedFromQueue { .. } => EventCode::SatFromQueue,
            DerivedEvent::ForcedLeave { .. }     => EventCode::ForcedLeft,
        }
    }

    pub fn client(&self) -> &ClientName {
        match self {
            DerivedEvent::SeatedFromQueue { client, .. } | DerivedEvent::ForcedLeave { client } => {
                client
            }
        }
    }

    pub fn table(&self) -> Option<TableId> {
        match self {
            DerivedEvent::SeatedFromQueue { table, .. } => Some(*table),
            DerivedEvent::ForcedLeave { .. } => None,
        }
    }
}

/// Result of applying one input event.
///
/// A rejected event leaves the state exactly as it was, with one exception:
/// a `Wait` rejected with [`ClubError::QueueFull`] removes the client and
/// carries a [`DerivedEvent::ForcedLeave`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Outcome {
    pub error:   Option<ClubError>,
    pub derived: Option<DerivedEvent>,
}

impl Outcome {
    pub fn accepted() -> Self {
        Self::default()
    }

    pub fn rejected(error: ClubError) -> Self {
        Self { error: Some(error), derived: None }
    }

    pub fn with_derived(mut self, derived: DerivedEvent) -> Self {
        self.derived = Some(derived);
        self
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }
}
