use pagefault::{Access, CacheError, OptimalCache, ReplacementPolicy, count_faults};

#[test]
fn evicts_page_needed_last() {
    let refs = [5, 0, 1, 3, 2, 4, 1, 0, 5];
    let mut cache = OptimalCache::new(4, refs);

    for page in [5, 0, 1, 3] {
        assert_eq!(cache.touch(page), Access::Fault { evicted: None });
    }
    // 3 is never referenced again.
    assert_eq!(cache.peek(), Some(&3));
    assert_eq!(cache.touch(2), Access::Fault { evicted: Some(3) });
    // Nor is 2, while 5, 0 and 1 all come back.
    assert_eq!(cache.touch(4), Access::Fault { evicted: Some(2) });

    assert_eq!(cache.touch(1), Access::Hit);
    assert_eq!(cache.touch(0), Access::Hit);
    assert_eq!(cache.touch(5), Access::Hit);
    assert_eq!(cache.fault_count(), 6);
    assert_eq!(cache.resident_count(), 4);
}

#[test]
fn reference_strings() {
    struct TestCase {
        capacity: usize,
        refs: Vec<u32>,
        faults: usize,
    }

    let tests = vec![
        TestCase {
            capacity: 4,
            refs: vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2],
            faults: 6,
        },
        TestCase {
            capacity: 3,
            refs: vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
            faults: 9,
        },
        TestCase {
            capacity: 3,
            refs: vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5],
            faults: 7,
        },
        TestCase {
            capacity: 2,
            refs: vec![1, 2, 3, 1],
            faults: 3,
        },
        TestCase {
            capacity: 0,
            refs: vec![1, 2, 3],
            faults: 3,
        },
    ];
    for test in tests {
        let mut cache = OptimalCache::new(test.capacity, test.refs.iter().copied());
        assert_eq!(
            count_faults(&mut cache, test.refs.iter().copied()),
            test.faults,
            "capacity {} refs {:?}",
            test.capacity,
            test.refs
        );
    }
}

#[test]
fn unused_pages_go_in_lru_order() {
    // None of these pages is referenced after its single touch, so the
    // clairvoyant cache falls back to evicting the least recently used.
    let refs = [1, 2, 3, 4, 5];
    let mut cache = OptimalCache::new(2, refs);
    cache.touch(1);
    cache.touch(2);
    assert_eq!(cache.touch(3), Access::Fault { evicted: Some(1) });
    assert_eq!(cache.touch(4), Access::Fault { evicted: Some(2) });
    assert_eq!(cache.touch(5), Access::Fault { evicted: Some(3) });
}

#[test]
fn off_forecast_touches_are_still_classified() {
    let mut cache = OptimalCache::new(2, [1, 2, 1]);
    assert!(cache.touch(1).is_fault());
    assert!(cache.touch(9).is_fault());
    assert!(cache.touch(1).is_hit());
    assert!(cache.touch(9).is_hit());
    assert!(cache.contains(&9));
    assert_eq!(cache.fault_count(), 2);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn huge_capacity() {
    let refs = [4u32, 5, 4, 6];
    let mut cache = OptimalCache::try_new(i64::MAX, refs).unwrap();
    assert_eq!(count_faults(&mut cache, refs), 3);
    assert_eq!(cache.resident_count(), 3);
}

#[test]
fn debug_output() {
    let mut cache = OptimalCache::new(2, [3u32, 4]);
    cache.touch(3);
    let debug = format!("{cache:?}");
    assert!(debug.starts_with("OptimalCache"));
    assert!(debug.contains("faults: 1"));
}

#[test]
fn try_new() {
    assert!(OptimalCache::try_new(1, [1u32]).is_ok());
    assert_eq!(
        OptimalCache::try_new(-2, [1u32]).err(),
        Some(CacheError::NegativeCapacity(-2))
    );
}
