use {
    crate::{
        Access,
        CacheResult,
        PageId,
        ReplacementPolicy,
        config::{checked_capacity, prealloc},
    },
    std::collections::{HashSet, VecDeque},
    tracing::{debug, trace},
};

/// First-In-First-Out (FIFO) page cache.
///
/// Evicts pages in the order they were brought in. Hits do not affect the
/// eviction order, which makes FIFO a useful baseline for LRU.
#[derive(Debug)]
pub struct FifoCache<P: PageId> {
    capacity: usize,

    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<P>,

    /// Set for O(1) membership check.
    resident: HashSet<P>,

    faults: usize,
}

impl<P: PageId> FifoCache<P> {
    /// Creates a new FIFO cache holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(prealloc(capacity)),
            resident: HashSet::with_capacity(prealloc(capacity)),
            faults: 0,
        }
    }

    /// Creates a new FIFO cache from a signed capacity.
    pub fn try_new(capacity: i64) -> CacheResult<Self> {
        checked_capacity(capacity).map(Self::new)
    }
}

impl<P: PageId> ReplacementPolicy<P> for FifoCache<P> {
    fn touch(&mut self, id: P) -> Access<P> {
        if self.resident.contains(&id) {
            trace!(page = ?id, "fifo hit");
            return Access::Hit;
        }

        self.faults += 1;
        trace!(page = ?id, faults = self.faults, "fifo fault");
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.queue.len() >= self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(victim) = &evicted {
            self.resident.remove(victim);
            debug!(victim = ?victim, page = ?id, "fifo eviction");
        }

        self.queue.push_back(id.clone());
        self.resident.insert(id);

        Access::Fault { evicted }
    }

    fn peek(&self) -> Option<&P> {
        self.queue.front()
    }

    fn contains(&self, id: &P) -> bool {
        self.resident.contains(id)
    }

    fn fault_count(&self) -> usize {
        self.faults
    }

    fn resident_count(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
