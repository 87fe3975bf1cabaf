//! Recency list: resident pages ordered from most to least recently used.
//!
//! Entries are stored in an [`Arena`] and linked through arena handles rather
//! than pointers:
//!
//! ```text
//!   most_recent ─► [h3] ──older──► [h0] ──older──► [h7] ◄─ least_recent
//!                  [h3] ◄──newer── [h0] ◄──newer── [h7]
//! ```
//!
//! Given a handle, every mutation is O(1): `push_front`, `move_to_front` and
//! `pop_back` only relink a constant number of neighbours.

use super::arena::{Arena, Handle};

#[derive(Debug)]
struct Entry<P> {
    page: P,
    /// Next less recently used entry.
    older: Option<Handle>,
    /// Next more recently used entry.
    newer: Option<Handle>,
}

#[derive(Debug)]
pub(crate) struct RecencyList<P> {
    entries: Arena<Entry<P>>,
    most_recent: Option<Handle>,
    least_recent: Option<Handle>,
}

impl<P> RecencyList<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arena::with_capacity(capacity),
            most_recent: None,
            least_recent: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.most_recent.is_none()
    }

    /// Least recently used page.
    pub fn back(&self) -> Option<&P> {
        self.least_recent
            .and_then(|handle| self.entries.get(handle))
            .map(|entry| &entry.page)
    }

    /// Inserts `page` as the most recently used entry.
    ///
    /// The caller guarantees that the page is not already listed.
    pub fn push_front(&mut self, page: P) -> Handle {
        let handle = self.entries.insert(Entry {
            page,
            older: None,
            newer: None,
        });
        self.attach_front(handle);
        handle
    }

    /// Promotes the entry to the most recently used position.
    pub fn move_to_front(&mut self, handle: Handle) {
        if self.most_recent == Some(handle) {
            return;
        }
        if self.detach(handle).is_none() {
            debug_assert!(false, "move_to_front on a stale handle");
            return;
        }
        self.attach_front(handle);
    }

    /// Removes the least recently used entry and returns its page.
    pub fn pop_back(&mut self) -> Option<P> {
        let handle = self.least_recent?;
        self.detach(handle)?;
        self.entries.remove(handle).map(|entry| entry.page)
    }

    /// Iterates pages from most to least recently used.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            list: self,
            cursor: self.most_recent,
        }
    }

    /// Unlinks the entry from its neighbours, leaving it in the arena.
    fn detach(&mut self, handle: Handle) -> Option<()> {
        let entry = self.entries.get(handle)?;
        let (older, newer) = (entry.older, entry.newer);

        match newer.and_then(|h| self.entries.get_mut(h)) {
            Some(newer) => newer.older = older,
            None => self.most_recent = older,
        }
        match older.and_then(|h| self.entries.get_mut(h)) {
            Some(older) => older.newer = newer,
            None => self.least_recent = newer,
        }
        Some(())
    }

    fn attach_front(&mut self, handle: Handle) {
        let previous = self.most_recent.replace(handle);
        if let Some(entry) = self.entries.get_mut(handle) {
            entry.older = previous;
            entry.newer = None;
        }
        match previous.and_then(|h| self.entries.get_mut(h)) {
            Some(front) => front.newer = Some(handle),
            None => self.least_recent = Some(handle),
        }
    }

    /// Walks the links in both directions and checks them against each other
    /// and the arena.
    #[cfg(test)]
    pub fn validate(&self) {
        let mut forward = Vec::new();
        let mut cursor = self.most_recent;
        let mut expected_newer = None;
        while let Some(handle) = cursor {
            let entry = self.entries.get(handle).expect("dangling older link");
            assert_eq!(entry.newer, expected_newer, "broken newer link");
            forward.push(handle);
            expected_newer = Some(handle);
            cursor = entry.older;
        }
        assert_eq!(self.least_recent, forward.last().copied());
        assert_eq!(forward.len(), self.len());

        let mut backward = Vec::new();
        let mut cursor = self.least_recent;
        while let Some(handle) = cursor {
            backward.push(handle);
            cursor = self.entries.get(handle).expect("dangling newer link").newer;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

/// Iterator over listed pages, most recently used first.
pub(crate) struct Iter<'a, P> {
    list: &'a RecencyList<P>,
    cursor: Option<Handle>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.entries.get(self.cursor?)?;
        self.cursor = entry.older;
        Some(&entry.page)
    }
}
