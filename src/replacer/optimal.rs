//! Clairvoyant page replacement (Belady's MIN).
//!
//! With the whole reference string known in advance, the page to replace is
//! the one whose next use lies farthest in the future. No online policy can
//! incur fewer faults, which makes this the lower bound LRU and FIFO are
//! measured against.

use {
    crate::{
        Access,
        CacheResult,
        PageId,
        ReplacementPolicy,
        config::{checked_capacity, prealloc},
    },
    priority_queue::PriorityQueue,
    std::{cmp::Reverse, collections::HashMap},
    tracing::{debug, trace},
};

/// Eviction priority of a resident page: position of its next use, then how
/// long ago it was last touched. The queue pops the maximum, i.e. the page
/// needed last, and among pages never needed again the least recently used.
type Priority = (usize, Reverse<usize>);

/// Position used for pages that never occur again.
const NEVER: usize = usize::MAX;

/// Clairvoyant page cache.
///
/// Built from the forecast reference string. Touches are expected to replay
/// that string in order; a touch that deviates from it is still classified
/// exactly, but later eviction choices are no longer guaranteed optimal.
#[derive(Debug)]
pub struct OptimalCache<P: PageId> {
    capacity: usize,

    /// Forecast positions of every page, ascending.
    forecast: HashMap<P, Vec<usize>>,

    /// Number of touches so far, i.e. position of the next reference.
    clock: usize,

    /// Resident pages keyed by eviction priority.
    resident: PriorityQueue<P, Priority>,

    faults: usize,
}

impl<P: PageId> OptimalCache<P> {
    /// Creates a new clairvoyant cache for the given reference string.
    pub fn new<I>(capacity: usize, references: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        let mut forecast: HashMap<P, Vec<usize>> = HashMap::new();
        for (pos, page) in references.into_iter().enumerate() {
            forecast.entry(page).or_default().push(pos);
        }
        Self {
            capacity,
            forecast,
            clock: 0,
            resident: PriorityQueue::with_capacity(prealloc(capacity)),
            faults: 0,
        }
    }

    /// Creates a new clairvoyant cache from a signed capacity.
    pub fn try_new<I>(capacity: i64, references: I) -> CacheResult<Self>
    where
        I: IntoIterator<Item = P>,
    {
        checked_capacity(capacity).map(|capacity| Self::new(capacity, references))
    }

    /// Forecast position of the first use of `page` after position `now`.
    fn next_use(&self, page: &P, now: usize) -> usize {
        self.forecast.get(page).map_or(NEVER, |positions| {
            let idx = positions.partition_point(|&pos| pos <= now);
            positions.get(idx).copied().unwrap_or(NEVER)
        })
    }
}

impl<P: PageId> ReplacementPolicy<P> for OptimalCache<P> {
    fn touch(&mut self, id: P) -> Access<P> {
        let now = self.clock;
        self.clock += 1;
        let priority = (self.next_use(&id, now), Reverse(now));

        if self.resident.change_priority(&id, priority).is_some() {
            trace!(page = ?id, "optimal hit");
            return Access::Hit;
        }

        self.faults += 1;
        trace!(page = ?id, faults = self.faults, "optimal fault");
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.resident.len() >= self.capacity {
            self.resident.pop().map(|(victim, _)| victim)
        } else {
            None
        };
        if let Some(victim) = &evicted {
            debug!(victim = ?victim, page = ?id, "optimal eviction");
        }

        self.resident.push(id, priority);

        Access::Fault { evicted }
    }

    fn peek(&self) -> Option<&P> {
        self.resident.peek().map(|(page, _)| page)
    }

    fn contains(&self, id: &P) -> bool {
        self.resident.get(id).is_some()
    }

    fn fault_count(&self) -> usize {
        self.faults
    }

    fn resident_count(&self) -> usize {
        self.resident.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
