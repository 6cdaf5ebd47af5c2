//! Identifier generation for goals and sub-goals.
//!
//! Ids are millisecond wall-clock timestamps, which keeps them readable and
//! roughly ordered by creation time. The generator never hands out a value
//! less than or equal to one it has already issued (or been told about via
//! [`IdGenerator::observe`]), so bursts within the same millisecond and clock
//! steps backwards still produce unique, strictly increasing ids.

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;

use crate::error::{Result, TrackerError};

/// Process-wide source of unique ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator that has not issued any id yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id, strictly greater than every id issued or observed
    /// so far.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::IdsExhausted` once `u64::MAX` is in use
    pub fn next_id(&self) -> Result<u64> {
        self.next_at(Self::now_millis())
    }

    /// Records that `id` is already in use so it is never issued.
    pub fn observe(&self, id: u64) {
        self.last.fetch_max(id, Ordering::AcqRel);
    }

    fn next_at(&self, now: u64) -> Result<u64> {
        let bump = |last: u64| last.checked_add(1).map(|next| now.max(next));

        self.last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, bump)
            .ok()
            .and_then(bump)
            .ok_or_else(|| TrackerError::IdsExhausted {
                last: self.last.load(Ordering::Acquire),
            })
    }

    fn now_millis() -> u64 {
        u64::try_from(Timestamp::now().as_millisecond()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use super::IdGenerator;
    use crate::error::TrackerError;

    #[test]
    fn test_ids_follow_the_clock() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000).unwrap(), 1_000);
        assert_eq!(ids.next_at(5_000).unwrap(), 5_000);
    }

    #[test]
    fn test_same_millisecond_still_unique() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000).unwrap(), 1_000);
        assert_eq!(ids.next_at(1_000).unwrap(), 1_001);
        assert_eq!(ids.next_at(1_000).unwrap(), 1_002);
    }

    #[test]
    fn test_clock_going_backwards_keeps_increasing() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_at(2_000).unwrap(), 2_000);
        assert_eq!(ids.next_at(1_500).unwrap(), 2_001);
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let ids = IdGenerator::new();
        ids.observe(9_000);
        assert_eq!(ids.next_at(1_000).unwrap(), 9_001);

        // Observing a smaller id never moves the generator backwards
        ids.observe(10);
        assert_eq!(ids.next_at(1_000).unwrap(), 9_002);
    }

    #[test]
    fn test_exhausted_ids_are_an_error() {
        let ids = IdGenerator::new();
        ids.observe(u64::MAX - 1);
        assert_eq!(ids.next_at(1_000).unwrap(), u64::MAX);

        let err = ids.next_at(1_000).unwrap_err();
        assert!(matches!(err, TrackerError::IdsExhausted { last: u64::MAX }));

        // The generator stays exhausted instead of reissuing the last id
        ids.observe(u64::MAX);
        assert!(ids.next_id().is_err());
    }

    #[test]
    fn test_wall_clock_ids_are_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || {
                    (0..500)
                        .map(|_| ids.next_id().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("thread panicked") {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }
}
