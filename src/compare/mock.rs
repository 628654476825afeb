//! Scripted comparator for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::fetch::ImageResource;

use super::adapter::FaceComparator;
use super::error::ComparatorError;
use super::types::RawComparison;

/// [`FaceComparator`] that replays a scripted queue of results.
///
/// Results are consumed in call order; an exhausted queue yields an upstream
/// error so a miscounted script fails loudly instead of silently matching.
#[derive(Default, Clone)]
pub struct MockFaceComparator {
    inner: Arc<Mutex<MockComparatorInner>>,
}

#[derive(Default)]
struct MockComparatorInner {
    script: VecDeque<Result<RawComparison, String>>,
    calls: usize,
}

impl MockFaceComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful raw comparison.
    pub fn push_result(&self, distance: f64, threshold: f64, verified: bool) {
        self.inner
            .lock()
            .expect("lock poisoned")
            .script
            .push_back(Ok(RawComparison {
                distance,
                threshold,
                verified,
            }));
    }

    /// Queues a backend failure with the given message text.
    pub fn push_failure(&self, message: &str) {
        self.inner
            .lock()
            .expect("lock poisoned")
            .script
            .push_back(Err(message.to_string()));
    }

    /// Number of comparisons attempted so far.
    pub fn compare_count(&self) -> usize {
        self.inner.lock().expect("lock poisoned").calls
    }
}

impl FaceComparator for MockFaceComparator {
    async fn compare(
        &self,
        _source: &ImageResource,
        _target: &ImageResource,
    ) -> Result<RawComparison, ComparatorError> {
        let next = {
            let mut inner = self.inner.lock().expect("lock poisoned");
            inner.calls += 1;
            inner.script.pop_front()
        };

        match next {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(message)) => Err(ComparatorError::Upstream { message }),
            None => Err(ComparatorError::Upstream {
                message: "no scripted comparison result".to_string(),
            }),
        }
    }
}
