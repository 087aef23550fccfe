//! Export progress reporting
//!
//! Advisory counters for the host's progress display. The conversion loop
//! bumps them; any other thread may read a snapshot at the same time. Reads
//! use relaxed atomics: a snapshot may run one update behind, which is fine
//! for a progress line and never blocks the producer.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Best-effort progress over a batch of ranges
#[derive(Debug)]
pub struct Progress {
    total: AtomicUsize,
    completed: AtomicUsize,
}

impl Progress {
    /// Create a tracker for `total` ranges
    pub fn new(total: usize) -> Self {
        Progress {
            total: AtomicUsize::new(total),
            completed: AtomicUsize::new(0),
        }
    }

    /// Record one finished range
    pub fn complete_one(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of `(completed, total)`
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.completed.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }

    pub fn is_done(&self) -> bool {
        let (completed, total) = self.snapshot();
        completed >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_to_total() {
        let progress = Progress::new(3);
        assert_eq!(progress.snapshot(), (0, 3));
        assert!(!progress.is_done());

        progress.complete_one();
        progress.complete_one();
        assert_eq!(progress.snapshot(), (2, 3));

        progress.complete_one();
        assert!(progress.is_done());
    }

    #[test]
    fn test_zero_ranges_is_done() {
        assert!(Progress::new(0).is_done());
    }

    #[test]
    fn test_concurrent_reads() {
        use std::sync::Arc;

        let progress = Arc::new(Progress::new(100));
        let reader = {
            let progress = Arc::clone(&progress);
            std::thread::spawn(move || {
                let mut last = 0;
                while !progress.is_done() {
                    let (completed, _) = progress.snapshot();
                    assert!(completed >= last);
                    last = completed;
                }
            })
        };

        for _ in 0..100 {
            progress.complete_one();
        }
        reader.join().unwrap();
    }
}
