use {
    crate::{
        Access,
        CacheResult,
        PageId,
        ReplacementPolicy,
        config::{checked_capacity, prealloc},
        ds::{Index, RecencyList},
    },
    tracing::{debug, trace},
};

/// Least Recently Used (LRU) page cache.
///
/// Resident pages are kept in a recency list, most recently used at the
/// front. A hit relocates the page's entry to the front; a fault inserts a new
/// front entry, first evicting the entry at the back if the cache is full.
/// An index from page to list handle makes lookup, promotion and eviction all
/// O(1).
///
/// Hit/fault classification depends on the order of touches only, so the
/// same reference string always yields the same fault count.
#[derive(Debug)]
pub struct LruCache<P: PageId> {
    /// Maximum number of resident pages.
    capacity: usize,

    /// Resident pages, most recently used first.
    entries: RecencyList<P>,

    /// Page to list handle mapping, one per listed entry.
    index: Index<P>,

    /// Number of touches that found their page absent.
    faults: usize,
}

impl<P: PageId> LruCache<P> {
    /// Creates a new LRU cache holding at most `capacity` pages.
    ///
    /// A zero capacity is allowed: such a cache faults on every touch and
    /// never holds a page.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RecencyList::with_capacity(prealloc(capacity)),
            index: Index::with_capacity(prealloc(capacity)),
            faults: 0,
        }
    }

    /// Creates a new LRU cache from a signed capacity.
    ///
    /// Fails with [`CacheError::NegativeCapacity`](crate::CacheError) if the
    /// capacity is negative.
    pub fn try_new(capacity: i64) -> CacheResult<Self> {
        checked_capacity(capacity).map(Self::new)
    }

    /// Iterates resident pages from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.entries.iter()
    }

    /// Evicts the least recently used page from both the list and the index.
    fn evict(&mut self) -> Option<P> {
        debug_assert!(!self.entries.is_empty(), "eviction from an empty cache");
        let victim = self.entries.pop_back()?;
        self.index.remove(&victim);
        Some(victim)
    }
}

impl<P: PageId> ReplacementPolicy<P> for LruCache<P> {
    fn touch(&mut self, id: P) -> Access<P> {
        if let Some(handle) = self.index.lookup(&id) {
            self.entries.move_to_front(handle);
            trace!(page = ?id, "lru hit");
            return Access::Hit;
        }

        self.faults += 1;
        trace!(page = ?id, faults = self.faults, "lru fault");
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict()
        } else {
            None
        };
        if let Some(victim) = &evicted {
            debug!(victim = ?victim, page = ?id, "lru eviction");
        }

        let handle = self.entries.push_front(id.clone());
        self.index.insert(id, handle);
        debug_assert_eq!(self.index.len(), self.entries.len());

        Access::Fault { evicted }
    }

    fn peek(&self) -> Option<&P> {
        self.entries.back()
    }

    fn contains(&self, id: &P) -> bool {
        self.index.lookup(id).is_some()
    }

    fn fault_count(&self) -> usize {
        self.faults
    }

    fn resident_count(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
