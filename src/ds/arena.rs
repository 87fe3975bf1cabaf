//! Slot arena holding recency list entries.
//!
//! Entries are addressed by [`Handle`]s, plain indices into a vector of slots.
//! Removing an entry vacates its slot and threads it onto an embedded free
//! list, so a cache of capacity `n` never grows past `n` slots no matter how
//! many evictions it performs.

use std::mem;

/// Stable reference to an arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    /// Free slot, linked to the next free one.
    Vacant(Option<usize>),
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores `value`, reusing a vacated slot when one is available.
    pub fn insert(&mut self, value: T) -> Handle {
        let idx = match self.next_free {
            Some(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Occupied(value));
                debug_assert!(matches!(slot, Slot::Vacant(_)), "free list points at live slot");
                if let Slot::Vacant(next) = slot {
                    self.next_free = next;
                }
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        Handle(idx)
    }

    /// Vacates the slot and returns its value, or `None` if it is already
    /// free.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.0)?;
        if let Slot::Vacant(_) = slot {
            return None;
        }
        match mem::replace(slot, Slot::Vacant(self.next_free)) {
            Slot::Occupied(value) => {
                self.next_free = Some(handle.0);
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant(_) => None,
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
