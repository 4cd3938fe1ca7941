//! Unit tests for club-state.

use club_core::{ClientName, ClockTime, Span, TableId};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn name(s: &str) -> ClientName {
    ClientName::parse(s).unwrap()
}

fn at(hh: u32, mm: u32) -> ClockTime {
    ClockTime::from_hm(hh, mm).unwrap()
}

// ── WaitQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wait_queue {
    use super::*;
    use crate::{StateError, WaitQueue};

    fn queued(q: &WaitQueue) -> Vec<&str> {
        q.iter().map(ClientName::as_str).collect()
    }

    #[test]
    fn fifo_order() {
        let mut q = WaitQueue::new(3);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        q.enqueue(name("c")).unwrap();
        assert_eq!(q.dequeue(), Some(name("a")));
        assert_eq!(q.dequeue(), Some(name("b")));
        assert_eq!(q.dequeue(), Some(name("c")));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn duplicate_rejected() {
        let mut q = WaitQueue::new(3);
        q.enqueue(name("a")).unwrap();
        assert_eq!(q.enqueue(name("a")), Err(StateError::AlreadyQueued(name("a"))));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn full_queue_rejects_any_newcomer() {
        let mut q = WaitQueue::new(2);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        assert!(q.is_full());
        for other in ["c", "d", "zz"] {
            assert_eq!(
                q.enqueue(name(other)),
                Err(StateError::QueueFull { capacity: 2 })
            );
        }
        assert_eq!(queued(&q), ["a", "b"]);
    }

    #[test]
    fn duplicate_checked_before_capacity() {
        let mut q = WaitQueue::new(1);
        q.enqueue(name("a")).unwrap();
        assert!(matches!(q.enqueue(name("a")), Err(StateError::AlreadyQueued(_))));
    }

    #[test]
    fn remove_middle_preserves_order() {
        let mut q = WaitQueue::new(4);
        for n in ["a", "b", "c", "d"] {
            q.enqueue(name(n)).unwrap();
        }
        assert!(q.remove("b"));
        assert_eq!(queued(&q), ["a", "c", "d"]);
        assert!(q.remove("d"));
        assert_eq!(queued(&q), ["a", "c"]);
        assert!(q.remove("a"));
        assert_eq!(queued(&q), ["c"]);
        assert_eq!(q.dequeue(), Some(name("c")));
        assert!(q.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut q = WaitQueue::new(3);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        assert!(!q.remove("nobody"));
        assert_eq!(q.len(), 2);
        assert_eq!(queued(&q), ["a", "b"]);
    }

    #[test]
    fn removal_frees_capacity() {
        let mut q = WaitQueue::new(2);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        q.remove("a");
        q.enqueue(name("c")).unwrap();
        assert_eq!(queued(&q), ["b", "c"]);
    }

    #[test]
    fn slots_are_recycled() {
        let mut q = WaitQueue::new(2);
        for round in 0..50 {
            q.enqueue(name(&format!("x{round}"))).unwrap();
            q.enqueue(name(&format!("y{round}"))).unwrap();
            q.dequeue().unwrap();
            q.dequeue().unwrap();
        }
        assert!(q.arena_len() <= 2, "arena grew to {}", q.arena_len());
    }

    #[test]
    fn clear_empties_queue() {
        let mut q = WaitQueue::new(3);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains("a"));
        assert_eq!(q.dequeue(), None);
        q.enqueue(name("a")).unwrap();
        assert_eq!(queued(&q), ["a"]);
    }

    #[test]
    fn front_peeks_without_removing() {
        let mut q = WaitQueue::new(2);
        assert_eq!(q.front(), None);
        q.enqueue(name("a")).unwrap();
        q.enqueue(name("b")).unwrap();
        assert_eq!(q.front(), Some(&name("a")));
        assert_eq!(q.len(), 2);
        q.remove("a");
        assert_eq!(q.front(), Some(&name("b")));
    }

    #[test]
    fn zero_capacity_accepts_nobody() {
        let mut q = WaitQueue::new(0);
        assert!(matches!(q.enqueue(name("a")), Err(StateError::QueueFull { capacity: 0 })));
    }
}

// ── TableRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tables {
    use super::*;
    use crate::{StateError, TableRegistry};

    #[test]
    fn new_tables_are_free() {
        let reg = TableRegistry::new(3);
        assert_eq!(reg.len(), 3);
        assert!(reg.any_free());
        assert_eq!(reg.free_count(), 3);
        let ids: Vec<_> = reg.iter().map(|t| t.id()).collect();
        assert_eq!(ids, [TableId(1), TableId(2), TableId(3)]);
    }

    #[test]
    fn seat_records_occupant_and_start() {
        let mut reg = TableRegistry::new(2);
        reg.seat(TableId(2), name("alice"), at(9, 15)).unwrap();
        let t = reg.get(TableId(2)).unwrap();
        assert_eq!(t.occupant(), Some(&name("alice")));
        assert_eq!(t.occupied_since(), Some(at(9, 15)));
        assert_eq!(reg.table_of("alice"), Some(TableId(2)));
        assert_eq!(reg.free_count(), 1);
    }

    #[test]
    fn occupied_table_is_never_overwritten() {
        let mut reg = TableRegistry::new(1);
        reg.seat(TableId(1), name("alice"), at(9, 0)).unwrap();
        let err = reg.seat(TableId(1), name("bob"), at(9, 30)).unwrap_err();
        assert_eq!(err, StateError::TableOccupied(TableId(1)));
        assert_eq!(reg.occupant_of(TableId(1)), Some(&name("alice")));
        assert_eq!(reg.get(TableId(1)).unwrap().occupied_since(), Some(at(9, 0)));
        assert!(!reg.any_free());
    }

    #[test]
    fn unknown_table_rejected() {
        let mut reg = TableRegistry::new(2);
        for id in [TableId(0), TableId(3), TableId::INVALID] {
            assert_eq!(
                reg.seat(id, name("alice"), at(9, 0)),
                Err(StateError::NoSuchTable(id))
            );
        }
    }

    #[test]
    fn vacate_accumulates_and_frees() {
        let mut reg = TableRegistry::new(1);
        reg.seat(TableId(1), name("alice"), at(8, 10)).unwrap();
        assert_eq!(reg.vacate("alice", at(10, 0)), Some(TableId(1)));
        let t = reg.get(TableId(1)).unwrap();
        assert!(t.is_free());
        assert_eq!(t.occupied_since(), None);
        assert_eq!(t.total_occupied(), Span(110));
    }

    #[test]
    fn vacate_unseated_client_returns_none() {
        let mut reg = TableRegistry::new(1);
        reg.seat(TableId(1), name("alice"), at(8, 0)).unwrap();
        assert_eq!(reg.vacate("bob", at(9, 0)), None);
        assert_eq!(reg.get(TableId(1)).unwrap().total_occupied(), Span::ZERO);
    }

    #[test]
    fn evict_all_closes_open_sessions() {
        let mut reg = TableRegistry::new(3);
        reg.seat(TableId(1), name("a"), at(10, 0)).unwrap();
        reg.seat(TableId(3), name("c"), at(11, 30)).unwrap();
        assert_eq!(reg.evict_all(at(12, 0)), 2);
        assert_eq!(reg.free_count(), 3);
        assert_eq!(reg.get(TableId(1)).unwrap().total_occupied(), Span(120));
        assert_eq!(reg.get(TableId(2)).unwrap().total_occupied(), Span::ZERO);
        assert_eq!(reg.get(TableId(3)).unwrap().total_occupied(), Span(30));
    }

    #[test]
    fn billing_rounds_total_not_sessions() {
        let mut reg = TableRegistry::new(1);
        reg.seat(TableId(1), name("a"), at(9, 0)).unwrap();
        reg.vacate("a", at(9, 40));
        reg.seat(TableId(1), name("b"), at(10, 0)).unwrap();
        reg.vacate("b", at(10, 40));
        let profits = reg.profits(10);
        assert_eq!(profits[0].occupied, Span(80));
        assert_eq!(profits[0].revenue, 20);
    }

    #[test]
    fn billing_boundaries() {
        let cases = [(0, 0), (60, 7), (61, 14)];
        for (minutes, expected) in cases {
            let mut reg = TableRegistry::new(1);
            if minutes > 0 {
                reg.seat(TableId(1), name("a"), at(9, 0)).unwrap();
                reg.vacate("a", ClockTime(at(9, 0).0 + minutes));
            }
            assert_eq!(reg.profits(7)[0].revenue, expected, "{minutes} minutes");
        }
    }

    #[test]
    fn huge_rate_saturates_instead_of_overflowing() {
        let mut reg = TableRegistry::new(1);
        reg.seat(TableId(1), name("a"), at(9, 0)).unwrap();
        reg.evict_all(at(19, 0));
        let profit = reg.profits(u64::MAX)[0];
        assert_eq!(profit.revenue, u64::MAX);
        assert_eq!(profit.occupied, Span(600));
    }

    #[test]
    fn profits_cover_every_table_in_order() {
        let mut reg = TableRegistry::new(3);
        reg.seat(TableId(2), name("a"), at(9, 0)).unwrap();
        reg.evict_all(at(10, 0));
        let profits = reg.profits(5);
        let ids: Vec<_> = profits.iter().map(|p| p.table).collect();
        assert_eq!(ids, [TableId(1), TableId(2), TableId(3)]);
        let revenue: Vec<_> = profits.iter().map(|p| p.revenue).collect();
        assert_eq!(revenue, [0, 5, 0]);
    }
}

// ── ClientRegistry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod clients {
    use super::*;
    use crate::{ClientRegistry, StateError};

    #[test]
    fn add_and_contains() {
        let mut reg = ClientRegistry::new();
        reg.add(name("alice")).unwrap();
        assert!(reg.contains("alice"));
        assert!(!reg.contains("bob"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn duplicate_add_rejected() {
        let mut reg = ClientRegistry::new();
        reg.add(name("alice")).unwrap();
        assert_eq!(reg.add(name("alice")), Err(StateError::AlreadyPresent(name("alice"))));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut reg = ClientRegistry::new();
        reg.add(name("alice")).unwrap();
        assert!(reg.remove("alice"));
        assert!(!reg.remove("alice"));
        assert!(reg.is_empty());
    }

    #[test]
    fn clear_all_returns_everyone() {
        let mut reg = ClientRegistry::new();
        for n in ["c", "a", "b"] {
            reg.add(name(n)).unwrap();
        }
        let mut all = reg.clear_all();
        all.sort();
        assert_eq!(all, [name("a"), name("b"), name("c")]);
        assert!(reg.is_empty());
    }
}
