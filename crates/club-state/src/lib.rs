//! `club-state` — the three stores owned by the simulation engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`wait_queue`]  | `WaitQueue` — bounded FIFO with O(1) removal by name       |
//! | [`tables`]      | `TableRegistry`, `Table` — occupancy and time accounting   |
//! | [`settlement`]  | `TableProfit` — end-of-day billing per table               |
//! | [`clients`]     | `ClientRegistry` — names currently inside the club         |
//! | [`error`]       | `StateError`, `StateResult<T>`                             |
//!
//! The stores do not know about each other.  Keeping a client in at most one
//! of "queued" or "seated" is the engine's job (`club-sim`); each store only
//! guards its own invariants.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` FxHash for the name-keyed indexes.      |
//! | `serde`   | Propagates serde derives to `club-core` types.            |

pub mod clients;
pub mod error;
pub mod settlement;
pub mod tables;
pub mod wait_queue;

#[cfg(test)]
mod tests;

pub use clients::ClientRegistry;
pub use error::{StateError, StateResult};
pub use settlement::TableProfit;
pub use tables::{Table, TableRegistry};
pub use wait_queue::WaitQueue;

// ── Name-keyed collections ────────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type NameMap<V> = rustc_hash::FxHashMap<club_core::ClientName, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type NameMap<V> = std::collections::HashMap<club_core::ClientName, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type NameSet = rustc_hash::FxHashSet<club_core::ClientName>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type NameSet = std::collections::HashSet<club_core::ClientName>;
