//! In-memory recording sink.

use pricer_core::types::{PricingError, PricingResult};
use pricer_pipeline::Sink;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Sink keeping every accepted result in memory.
///
/// Clones share the same storage, so one handle can be given to a pipeline
/// and another kept for inspection. A panic while the buffer is held does
/// not lose the results recorded before it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    results: Arc<RwLock<Vec<PricingResult>>>,
    finishes: Arc<AtomicUsize>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the results accepted so far, in arrival order.
    pub fn results(&self) -> Vec<PricingResult> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recently accepted result.
    pub fn last(&self) -> Option<PricingResult> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    /// Number of completed runs.
    pub fn finish_count(&self) -> usize {
        self.finishes.load(Ordering::SeqCst)
    }
}

impl Sink for RecordingSink {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result);
        Ok(())
    }

    fn finish(&self) -> Result<(), PricingError> {
        self.finishes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(price: f64) -> PricingResult {
        PricingResult {
            price,
            delta: 0.5,
            gamma: 0.01,
        }
    }

    #[test]
    fn test_records_in_order() {
        let sink = RecordingSink::new();
        sink.accept(result(1.0)).unwrap();
        sink.accept(result(2.0)).unwrap();

        let prices: Vec<f64> = sink.results().iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![1.0, 2.0]);
        assert_eq!(sink.last(), Some(result(2.0)));
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = RecordingSink::new();
        let handle = sink.clone();

        sink.accept(result(3.0)).unwrap();
        sink.finish().unwrap();

        assert_eq!(handle.results().len(), 1);
        assert_eq!(handle.finish_count(), 1);
    }

    #[test]
    fn test_poisoned_buffer_keeps_results() {
        let sink = RecordingSink::new();
        sink.accept(result(1.0)).unwrap();

        let buffer = Arc::clone(&sink.results);
        let panicked = std::thread::spawn(move || {
            let _guard = buffer.write().unwrap();
            panic!("recorder panicked while holding the buffer");
        })
        .join();
        assert!(panicked.is_err());
        assert!(sink.results.is_poisoned());

        assert_eq!(sink.results(), vec![result(1.0)]);
        assert_eq!(sink.last(), Some(result(1.0)));

        sink.accept(result(2.0)).unwrap();
        assert_eq!(sink.results().len(), 2);
    }

    #[test]
    fn test_empty_sink() {
        let sink = RecordingSink::new();
        assert!(sink.results().is_empty());
        assert_eq!(sink.last(), None);
        assert_eq!(sink.finish_count(), 0);
    }
}
