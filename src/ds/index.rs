use {
    super::arena::Handle,
    std::{collections::HashMap, hash::Hash},
};

/// Maps resident pages to their recency list handles.
///
/// Kept in lockstep with the recency list by the owning cache: one mapping per
/// listed entry. Inserting a mapped page or removing an unmapped one is a bug
/// in the caller and trips an assertion in debug builds.
#[derive(Debug)]
pub(crate) struct Index<P> {
    handles: HashMap<P, Handle>,
}

impl<P: Hash + Eq> Index<P> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: HashMap::with_capacity(capacity),
        }
    }

    pub fn lookup(&self, page: &P) -> Option<Handle> {
        self.handles.get(page).copied()
    }

    pub fn insert(&mut self, page: P, handle: Handle) {
        let previous = self.handles.insert(page, handle);
        debug_assert!(previous.is_none(), "page is already indexed");
    }

    pub fn remove(&mut self, page: &P) {
        let removed = self.handles.remove(page);
        debug_assert!(removed.is_some(), "page is not indexed");
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}
