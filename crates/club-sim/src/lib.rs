//! `club-sim` — the state machine that replays one day of club events.
//!
//! # Event loop
//!
//! ```text
//! on_day_start(opening)
//! for event in events (non-decreasing time):
//!   ① on_event          — the input event itself
//!   ② apply             — Arrive / Sit / Wait / Leave transition
//!   ③ on_error          — rejected events (except a full queue, see ④)
//!   ④ on_derived        — SeatedFromQueue after a Leave frees a table,
//!                         ForcedLeave after a Wait hits a full queue
//! end_of_day(closing)   — close every session, clear queue and registry
//!   on_forced_leave     — one per evicted client, sorted by name
//! on_day_end(closing)
//! on_profit             — one per table, ascending id
//! on_finish
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use club_core::{ClientName, ClockTime, DayConfig, TableId};
//! use club_sim::{Club, ClientEvent, EventKind, NoopObserver};
//!
//! let config = DayConfig {
//!     tables:      1,
//!     opening:     "08:00".parse().unwrap(),
//!     closing:     "12:00".parse().unwrap(),
//!     hourly_rate: 10,
//! };
//! let alice = ClientName::parse("alice").unwrap();
//! let events = vec![
//!     ClientEvent::new("08:10".parse().unwrap(), alice.clone(), EventKind::Arrive),
//!     ClientEvent::new("08:10".parse().unwrap(), alice, EventKind::Sit(TableId(1))),
//! ];
//!
//! let mut club = Club::new(config);
//! let summary = club.run(&events, &mut NoopObserver);
//! assert_eq!(summary.revenue, 40);
//! ```

pub mod engine;
pub mod error;
pub mod event;
pub mod observer;


pub use engine::{ClientState, Club, DaySummary};
pub use error::{ClubError, ClubResult};
pub use event::{ClientEvent, DerivedEvent, EventCode, EventKind, Outcome};
pub use observer::{DayObserver, NoopObserver};

pub use club_state::TableProfit;
