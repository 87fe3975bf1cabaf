use {
    crate::{CacheError, CacheResult},
    std::{fmt, str::FromStr},
};

/// Default number of page frames in a simulated cache.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Replacement policy selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Least recently used.
    #[default]
    Lru,

    /// First in, first out.
    Fifo,

    /// Clairvoyant replacement (Belady's MIN). Needs the whole reference
    /// string up front.
    Optimal,
}

impl PolicyKind {
    /// All supported policies, in reporting order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Lru, PolicyKind::Fifo, PolicyKind::Optimal];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Optimal => "optimal",
        };
        f.write_str(name)
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> CacheResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "fifo" => Ok(PolicyKind::Fifo),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(CacheError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Configuration of a reference-string simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of page frames.
    ///
    /// Kept signed so that configuration sources can express (and the driver
    /// can reject) a negative value before any reference is processed.
    pub capacity: i64,

    /// Replacement policy to simulate.
    pub policy: PolicyKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as i64,
            policy: PolicyKind::default(),
        }
    }
}

/// Most slots a cache reserves at construction. Larger caches grow their
/// storage as pages become resident.
pub(crate) const PREALLOC_LIMIT: usize = 4096;

/// Number of slots to reserve up front for a cache of `capacity` pages.
pub(crate) fn prealloc(capacity: usize) -> usize {
    capacity.min(PREALLOC_LIMIT)
}

/// Converts a signed capacity into a frame count.
///
/// Only negative values fail on 64-bit targets; `CapacityOverflow` is
/// reachable where `usize` is narrower than `i64`.
pub(crate) fn checked_capacity(capacity: i64) -> CacheResult<usize> {
    if capacity < 0 {
        return Err(CacheError::NegativeCapacity(capacity));
    }
    usize::try_from(capacity).map_err(|_| CacheError::CapacityOverflow(capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_names() {
        assert_eq!("lru".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!(" FIFO ".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!("opt".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert_eq!("Optimal".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert_eq!(
            "clock".parse::<PolicyKind>(),
            Err(CacheError::UnknownPolicy("clock".to_owned()))
        );
    }

    #[test]
    fn capacity_validation() {
        assert_eq!(checked_capacity(0), Ok(0));
        assert_eq!(checked_capacity(4), Ok(4));
        assert_eq!(checked_capacity(-1), Err(CacheError::NegativeCapacity(-1)));
        assert_eq!(
            checked_capacity(i64::MIN),
            Err(CacheError::NegativeCapacity(i64::MIN))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_capacity_is_accepted() {
        assert_eq!(checked_capacity(i64::MAX), Ok(i64::MAX as usize));
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn huge_capacity_overflows() {
        assert_eq!(
            checked_capacity(i64::MAX),
            Err(CacheError::CapacityOverflow(i64::MAX))
        );
    }

    #[test]
    fn prealloc_is_bounded() {
        assert_eq!(prealloc(0), 0);
        assert_eq!(prealloc(16), 16);
        assert_eq!(prealloc(usize::MAX), PREALLOC_LIMIT);
    }

    #[test]
    fn default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY as i64);
        assert_eq!(config.policy, PolicyKind::Lru);
    }
}
