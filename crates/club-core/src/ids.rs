//! Strongly typed table identifier.
//!
//! Tables are numbered from 1 on the wire and in every report.  The registry
//! stores them in a `Vec`, so [`TableId::slot`] converts to the 0-based
//! position; use [`TableId::from_slot`] to go back.

use std::fmt;

/// A table number in `[1, N]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub u32);

impl TableId {
    /// Sentinel meaning "no table"; never a valid table number.
    pub const INVALID: TableId = TableId(u32::MAX);

    /// 0-based position of this table in a registry `Vec`.
    ///
    /// Returns `None` for table 0 and the `INVALID` sentinel.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self.0 {
            0 | u32::MAX => None,
            n => Some(n as usize - 1),
        }
    }

    /// Inverse of [`slot`][Self::slot].
    #[inline]
    pub fn from_slot(slot: usize) -> TableId {
        TableId(slot as u32 + 1)
    }
}

impl Default for TableId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TableId {
    #[inline]
    fn from(n: u32) -> TableId {
        TableId(n)
    }
}
