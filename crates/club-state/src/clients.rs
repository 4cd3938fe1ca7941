//! The `ClientRegistry` — who is inside the club right now.

use club_core::ClientName;
use tracing::trace;

use crate::{NameSet, StateError, StateResult};

/// Set of clients that have arrived and not yet left.
///
/// Presence says nothing about seating or queueing; the engine derives those
/// from the table registry and the waiting queue.
#[derive(Default)]
pub struct ClientRegistry {
    present: NameSet,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as present.
    ///
    /// # Errors
    ///
    /// [`StateError::AlreadyPresent`] if `name` is already inside.
    pub fn add(&mut self, name: ClientName) -> StateResult<()> {
        if self.present.contains(&name) {
            return Err(StateError::AlreadyPresent(name));
        }
        trace!(client = %name, "registered");
        self.present.insert(name);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// Unregister `name`.  Returns `false` if it was not present.
    ///
    /// Does not touch tables or the queue.
    pub fn remove(&mut self, name: &str) -> bool {
        self.present.remove(name)
    }

    /// Remove and return every present client, in no particular order.
    pub fn clear_all(&mut self) -> Vec<ClientName> {
        self.present.drain().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.present.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientName> + '_ {
        self.present.iter()
    }
}
