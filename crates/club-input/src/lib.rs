//! `club-input` — reads a day file into a validated [`DayConfig`] and the
//! list of client events to replay.
//!
//! # Crate layout
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`loader`]   | `DayInput`, `load_day_path`, `load_day_reader` |
//! | [`error`]    | `InputError`, `InputResult<T>`               |
//!
//! # File format
//!
//! ```text
//! 3                 table count (≥ 1)
//! 09:00 19:00       opening and closing (closing later)
//! 10                hourly rate (≥ 1)
//! 08:48 1 client1   HH:MM code client [table]
//! 09:41 1 client1
//! 09:48 1 client2
//! 09:54 2 client1 1
//! ```
//!
//! Fields are separated by exactly one space.  The first line that breaks
//! any rule aborts loading with [`InputError::Malformed`], whose `Display`
//! is that line verbatim.
//!
//! [`DayConfig`]: club_core::DayConfig

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{load_day_path, load_day_reader, DayInput};
