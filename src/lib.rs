#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod config;
mod driver;
mod ds;
mod error;
mod replacer;

use std::{fmt, hash::Hash};

pub use {
    config::{DEFAULT_CAPACITY, PolicyKind, SimulationConfig},
    driver::{Report, compare, count_faults, simulate},
    error::{CacheError, CacheResult},
    replacer::{FifoCache, LruCache, OptimalCache},
};

/// Page identifier type.
///
/// Pages are opaque to the replacement engines: all they need is to tell two
/// identifiers apart and to use them as hash map keys. No bounded range is
/// assumed, so anything from a small integer to a string key will do.
pub trait PageId: Clone + Hash + Eq + fmt::Debug {}

impl<T> PageId for T where T: Clone + Hash + Eq + fmt::Debug {}

/// Outcome of a single page reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// Page was already resident. Only its replacement metadata changed.
    Hit,

    /// Page was not resident and has been brought in.
    ///
    /// If the cache was full, `evicted` holds the page that was replaced to
    /// make room for it.
    Fault {
        /// Replacement victim, if any.
        evicted: Option<P>,
    },
}

impl<P> Access<P> {
    /// Returns `true` if the referenced page was resident.
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// Returns `true` if the reference caused a page fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// Page evicted by this reference, if any.
    pub fn evicted(&self) -> Option<&P> {
        match self {
            Access::Fault { evicted } => evicted.as_ref(),
            Access::Hit => None,
        }
    }
}

/// Page replacement policy.
///
/// Defines the interface shared by all replacement strategies. A policy owns a
/// bounded set of resident pages; every reference to a page goes through
/// [`touch`](ReplacementPolicy::touch), which classifies it as a hit or a
/// fault and, on a fault against a full cache, picks the page to replace.
///
/// Policies are single-threaded state machines. Callers sharing one between
/// threads must serialize access themselves, e.g. by wrapping it in a mutex.
pub trait ReplacementPolicy<P: PageId> {
    /// Notifies the policy that a page has been referenced.
    ///
    /// Never fails: a page that is not resident is exactly the fault outcome.
    fn touch(&mut self, id: P) -> Access<P>;

    /// Peek into the page that the next eviction would replace.
    fn peek(&self) -> Option<&P>;

    /// Returns `true` if the page is currently resident.
    fn contains(&self, id: &P) -> bool;

    /// Number of references that found their page absent so far.
    fn fault_count(&self) -> usize;

    /// Number of resident pages.
    fn resident_count(&self) -> usize;

    /// Returns the maximum number of pages that can be resident.
    fn capacity(&self) -> usize;
}
