/// Page cache error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// Cache capacity must not be negative.
    #[error("Negative cache capacity: {0}")]
    NegativeCapacity(i64),

    /// Cache capacity does not fit into `usize`. Only possible on targets
    /// with pointers narrower than 64 bits.
    #[error("Cache capacity is too large: {0}")]
    CapacityOverflow(i64),

    /// Replacement policy name is not recognized.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
}

/// Page cache result type.
pub type CacheResult<T> = Result<T, CacheError>;
