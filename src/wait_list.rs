use crate::plane::{AtcId, Plane, RequestKind};
use crate::time::Time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Waiting(Plane);

impl Waiting {
    /// Fairness order among waiters: landings before takeoffs, then by who
    /// asked first, then ascending ATC ID. Unlike the event queue, the
    /// primary key is the request class, not time.
    fn key(&self) -> (RequestKind, Time, AtcId) {
        (self.0.request, self.0.request_time, self.0.atc_id)
    }
}

impl PartialEq for Waiting {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Waiting {}

impl PartialOrd for Waiting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Waiting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Planes holding for a runway. Owns every plane whose request has been
/// handled but which has not yet been granted a clearance.
#[derive(Debug, Default)]
pub struct WaitList {
    heap: BinaryHeap<Reverse<Waiting>>,
}

impl WaitList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, plane: Plane) {
        self.heap.push(Reverse(Waiting(plane)));
    }

    pub fn dequeue(&mut self) -> Option<Plane> {
        self.heap.pop().map(|Reverse(entry)| entry.0)
    }

    pub fn peek(&self) -> Option<&Plane> {
        self.heap.peek().map(|Reverse(entry)| &entry.0)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
