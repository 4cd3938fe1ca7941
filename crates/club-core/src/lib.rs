//! `club-core` — foundational types for the club day simulator.
//!
//! This crate is a dependency of every other `club-*` crate.  It has no
//! `club-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `TableId`                                               |
//! | [`name`]    | `ClientName` (validated client identity)                |
//! | [`time`]    | `ClockTime` (minute of day), `Span` (duration)          |
//! | [`config`]  | `DayConfig` (table count, opening hours, hourly rate)   |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod name;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DayConfig;
pub use error::{CoreError, CoreResult};
pub use ids::TableId;
pub use name::ClientName;
pub use time::{ClockTime, Span};
