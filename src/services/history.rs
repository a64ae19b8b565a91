use std::collections::VecDeque;
use std::sync::Mutex;

use crate::models::PredictionRecord;

/// Newest-first log of predictions made since process start
///
/// Shared by every worker; all access goes through the mutex.
#[derive(Debug, Default)]
pub struct PredictionHistory {
    records: Mutex<VecDeque<PredictionRecord>>,
    max_entries: Option<usize>,
}

impl PredictionHistory {
    /// Create a history, optionally capped at `max_entries`
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            max_entries,
        }
    }

    /// Prepend a record and return the history as it stands afterwards
    pub fn record(&self, record: PredictionRecord) -> Vec<PredictionRecord> {
        let mut records = self.lock();
        records.push_front(record);
        if let Some(max) = self.max_entries {
            records.truncate(max);
        }
        records.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> Vec<PredictionRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<PredictionRecord>> {
        // No update leaves the deque half-written, so poisoning is ignored
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
