//! Attempt bookkeeping for chain runs.
//!
//! [`Chain::run`](crate::Chain::run) records one [`AttemptRecord`] per
//! invoked operation. The bare [`execute`](crate::execute) function records
//! nothing.

use serde::{Deserialize, Serialize};

/// Get the current Unix timestamp in milliseconds.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Outcome of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptStatus {
    /// The operation returned a value; the chain stopped here.
    Succeeded,
    /// The operation failed; the chain moved on to the next operation.
    Failed,
}

/// Timing information for a single attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Position of the operation in the chain (0-based).
    pub index: usize,
    /// When the attempt started (Unix timestamp ms).
    pub started_at: u64,
    /// When the attempt completed (Unix timestamp ms), if completed.
    pub completed_at: Option<u64>,
    /// Outcome of the attempt, if completed.
    pub status: Option<AttemptStatus>,
}

impl AttemptRecord {
    /// Create a new attempt record for the operation at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            started_at: now_millis(),
            completed_at: None,
            status: None,
        }
    }

    /// Mark the attempt as completed with the given status.
    pub fn complete(&mut self, status: AttemptStatus) {
        self.completed_at = Some(now_millis());
        self.status = Some(status);
    }

    /// Get the duration in milliseconds, if completed.
    pub fn duration_ms(&self) -> Option<u64> {
        self.completed_at
            .map(|end| end.saturating_sub(self.started_at))
    }
}

/// Record of one chain run: when it started and what each attempt did.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainReport {
    /// When the run started (Unix timestamp ms).
    started_at: Option<u64>,
    /// One record per invoked operation, in invocation order.
    attempts: Vec<AttemptRecord>,
}

impl ChainReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as started.
    pub fn mark_started(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(now_millis());
        }
    }

    /// Get when the run started.
    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// Record the start of an attempt.
    pub fn record_attempt_start(&mut self, index: usize) {
        self.attempts.push(AttemptRecord::new(index));
    }

    /// Record the end of the most recent attempt.
    pub fn record_attempt_end(&mut self, status: AttemptStatus) {
        if let Some(record) = self.attempts.last_mut() {
            record.complete(status);
        }
    }

    /// Get all attempt records, in invocation order.
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Number of operations that were actually invoked.
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }
}
