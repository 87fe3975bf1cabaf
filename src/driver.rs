//! Reference-string driver.
//!
//! Feeds a sequence of page references through a replacement policy, one
//! touch per reference in order, and reports the resulting fault count.

use {
    crate::{
        CacheResult,
        FifoCache,
        LruCache,
        OptimalCache,
        PageId,
        PolicyKind,
        ReplacementPolicy,
        SimulationConfig,
        config::checked_capacity,
    },
    std::fmt,
    tracing::{debug, warn},
};

/// Outcome of running a reference string through a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Simulated policy.
    pub policy: PolicyKind,

    /// Number of page frames.
    pub capacity: usize,

    /// Number of references processed.
    pub references: usize,

    /// Number of page faults.
    pub faults: usize,

    /// Number of pages resident at the end of the run.
    pub resident: usize,
}

impl Report {
    /// Number of references that found their page resident.
    pub fn hits(&self) -> usize {
        self.references - self.faults
    }

    /// Fraction of references that faulted, `0.0` for an empty run.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        self.faults as f64 / self.references as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} faults, {} hits over {} references ({} frames)",
            self.policy,
            self.faults,
            self.hits(),
            self.references,
            self.capacity
        )
    }
}

/// Touches every reference in order and returns the policy's fault count.
pub fn count_faults<P, R, I>(policy: &mut R, references: I) -> usize
where
    P: PageId,
    R: ReplacementPolicy<P> + ?Sized,
    I: IntoIterator<Item = P>,
{
    for page in references {
        policy.touch(page);
    }
    policy.fault_count()
}

/// Runs the reference string through the configured policy.
///
/// The capacity is validated before any reference is processed, so a bad
/// configuration never yields a partial run.
pub fn simulate<P: PageId>(config: &SimulationConfig, references: &[P]) -> CacheResult<Report> {
    let capacity = checked_capacity(config.capacity).inspect_err(|err| {
        warn!(capacity = config.capacity, policy = %config.policy, "rejected configuration: {err}");
    })?;
    Ok(run(config.policy, capacity, references))
}

/// Runs the reference string through every supported policy.
///
/// Reports come back in [`PolicyKind::ALL`] order.
pub fn compare<P: PageId>(capacity: i64, references: &[P]) -> CacheResult<Vec<Report>> {
    PolicyKind::ALL
        .into_iter()
        .map(|policy| simulate(&SimulationConfig { capacity, policy }, references))
        .collect()
}

fn run<P: PageId>(kind: PolicyKind, capacity: usize, references: &[P]) -> Report {
    debug!(policy = %kind, capacity, references = references.len(), "simulation started");

    let mut policy: Box<dyn ReplacementPolicy<P> + '_> = match kind {
        PolicyKind::Lru => Box::new(LruCache::new(capacity)),
        PolicyKind::Fifo => Box::new(FifoCache::new(capacity)),
        PolicyKind::Optimal => Box::new(OptimalCache::new(capacity, references.iter().cloned())),
    };
    let faults = count_faults(policy.as_mut(), references.iter().cloned());

    let report = Report {
        policy: kind,
        capacity,
        references: references.len(),
        faults,
        resident: policy.resident_count(),
    };
    debug!(%report, "simulation finished");
    report
}
