use crate::event::Event;
use crate::plane::{AtcId, RequestKind};
use crate::time::Time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by the dispatch key. Two entries compare equal only
/// when they refer to the same plane at the same time, so the queue's order
/// is strict across distinct planes.
#[derive(Debug)]
struct Scheduled(Event);

impl Scheduled {
    /// Dispatch order: earliest time first, then landing-class planes ahead
    /// of takeoff-class ones, then ascending ATC ID. Every variant takes its
    /// class from the plane it carries, so a Complete keeps the rank of the
    /// request that started its chain.
    fn key(&self) -> (Time, RequestKind, AtcId) {
        let plane = self.0.plane();
        (self.0.time(), plane.request, plane.atc_id)
    }
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Pending-event queue, the simulation's clock driver. Owns every event that
/// has been scheduled but not yet dispatched.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, event: Event) {
        self.heap.push(Reverse(Scheduled(event)));
    }

    pub fn dequeue(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(entry)| entry.0)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(entry)| &entry.0)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
