//! `WaitQueue` — bounded FIFO of clients waiting for a free table.
//!
//! # Why not a `VecDeque`
//!
//! Clients can leave the club while still queued, and removing an arbitrary
//! element from a `VecDeque` is O(n).  The queue is instead a doubly linked
//! list whose nodes live in an arena (`Vec<Option<Node>>`) and link to each
//! other by slot index.  A `ClientName → slot` index gives O(1) membership
//! tests and O(1) removal by name; vacated slots are recycled through a free
//! list so the arena never grows beyond `capacity` live nodes plus holes.
//!
//! | Operation   | Cost          |
//! |-------------|---------------|
//! | `enqueue`   | O(1) amortized |
//! | `dequeue`   | O(1)          |
//! | `front`     | O(1)          |
//! | `remove`    | O(1)          |
//! | `contains`  | O(1)          |

use club_core::ClientName;
use tracing::trace;

use crate::{NameMap, StateError, StateResult};

struct Node {
    name: ClientName,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Bounded FIFO of distinct client names.
pub struct WaitQueue {
    slots:    Vec<Option<Node>>,
    /// Indices of `None` entries in `slots`, reused before the arena grows.
    free:     Vec<usize>,
    index:    NameMap<usize>,
    head:     Option<usize>,
    tail:     Option<usize>,
    capacity: usize,
}

impl WaitQueue {
    /// Create an empty queue holding at most `capacity` clients.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots:    Vec::with_capacity(capacity),
            free:     Vec::new(),
            index:    NameMap::with_capacity_and_hasher(capacity, Default::default()),
            head:     None,
            tail:     None,
            capacity,
        }
    }

    /// Append `name` to the tail.
    ///
    /// # Errors
    ///
    /// - [`StateError::AlreadyQueued`] if `name` is already waiting.
    /// - [`StateError::QueueFull`] if the queue holds `capacity` clients.
    pub fn enqueue(&mut self, name: ClientName) -> StateResult<()> {
        if self.index.contains_key(&name) {
            return Err(StateError::AlreadyQueued(name));
        }
        if self.len() >= self.capacity {
            return Err(StateError::QueueFull { capacity: self.capacity });
        }

        let node = Node { name: name.clone(), prev: self.tail, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None       => self.head = Some(slot),
        }
        self.tail = Some(slot);

        trace!(client = %name, position = self.index.len() + 1, "enqueued");
        self.index.insert(name, slot);
        Ok(())
    }

    /// Remove and return the client that has waited longest.
    pub fn dequeue(&mut self) -> Option<ClientName> {
        let head = self.head?;
        let name = self.unlink(head);
        trace!(client = %name, "dequeued");
        Some(name)
    }

    /// The client that has waited longest, without removing it.
    pub fn front(&self) -> Option<&ClientName> {
        let head = self.head?;
        self.slots[head].as_ref().map(|node| &node.name)
    }

    /// Remove `name` wherever it is in the queue.
    ///
    /// Returns `false` (and changes nothing) if `name` is not queued.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(&slot) = self.index.get(name) else {
            return false;
        };
        self.unlink(slot);
        trace!(client = name, "removed from queue");
        true
    }

    /// Drop every queued client.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queued names from head (next to be seated) to tail.
    pub fn iter(&self) -> impl Iterator<Item = &ClientName> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.slots[cursor?].as_ref()?;
            cursor = node.next;
            Some(&node.name)
        })
    }

    /// Arena size including recycled holes.
    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.slots.len()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn node_mut(&mut self, slot: usize) -> &mut Node {
        self.slots[slot]
            .as_mut()
            .expect("linked slot must hold a node")
    }

    /// Detach the node at `slot`, recycle the slot, and return its name.
    fn unlink(&mut self, slot: usize) -> ClientName {
        let node = self.slots[slot]
            .take()
            .expect("indexed slot must hold a node");

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None       => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None       => self.tail = node.prev,
        }

        self.free.push(slot);
        self.index.remove(&node.name);
        node.name
    }
}
