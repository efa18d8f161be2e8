//! Bounded in-memory log of cycle outcomes

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::log_entry::LogEntry;

pub const DEFAULT_LOG_CAPACITY: usize = 100;
pub const DEFAULT_LOG_READ_LIMIT: usize = 5;

/// Ring buffer of [`LogEntry`] values. Once `capacity` is exceeded the
/// oldest entry is evicted. Clones share the same buffer.
#[derive(Clone)]
pub struct LogSink {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
    read_limit: usize,
}

impl LogSink {
    pub fn new(capacity: usize, read_limit: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity + 1))),
            capacity,
            read_limit,
        }
    }

    pub async fn push(&self, message: impl Into<String>) {
        self.append(LogEntry::new(message)).await;
    }

    pub async fn append(&self, entry: LogEntry) {
        let mut entries = self.entries.write().await;
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// The newest entries (at most the read limit), newest first.
    pub async fn recent(&self) -> Vec<LogEntry> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(self.read_limit).cloned().collect()
    }

    /// Every buffered entry, oldest first.
    pub async fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY, DEFAULT_LOG_READ_LIMIT)
    }
}
