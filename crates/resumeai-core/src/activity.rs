//! In-memory activity log
//!
//! Append-only record of generation and optimization events, kept for the
//! lifetime of the process. Growth is unbounded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

/// What kind of event was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "resume_generation")]
    Generation,
    #[serde(rename = "resume_optimization")]
    Optimization,
}

/// One logged event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub requester_id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(rename = "details")]
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}

/// Dashboard counters plus the tail of the log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub total_generations: usize,
    pub total_optimizations: usize,
    pub recent: Vec<ActivityRecord>,
}

#[derive(Debug, Default)]
struct LogState {
    records: Vec<ActivityRecord>,
    total_generations: usize,
    total_optimizations: usize,
}

/// Process-wide activity log.
///
/// Appends take the write lock; queries take the read lock and see whatever
/// had been appended when they acquired it.
#[derive(Debug, Default)]
pub struct ActivityLog {
    state: RwLock<LogState>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return a copy of the stored record
    pub fn record(
        &self,
        requester_id: impl Into<String>,
        kind: ActivityKind,
        payload: Value,
    ) -> ActivityRecord {
        let record = ActivityRecord {
            id: Uuid::new_v4(),
            requester_id: requester_id.into(),
            kind,
            payload,
            timestamp: Utc::now(),
        };

        // A panic elsewhere while holding the lock cannot leave a half-pushed
        // record behind, so a poisoned lock is still usable.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match kind {
            ActivityKind::Generation => state.total_generations += 1,
            ActivityKind::Optimization => state.total_optimizations += 1,
        }
        state.records.push(record.clone());
        debug!(
            requester = %record.requester_id,
            kind = ?kind,
            total = state.records.len(),
            "Recorded activity"
        );

        record
    }

    /// All records for `requester_id`, oldest first
    pub fn query(&self, requester_id: &str) -> Vec<ActivityRecord> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .records
            .iter()
            .filter(|r| r.requester_id == requester_id)
            .cloned()
            .collect()
    }

    /// Totals and the `recent` most recent records, oldest first
    pub fn summary(&self, recent: usize) -> ActivitySummary {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let start = state.records.len().saturating_sub(recent);
        ActivitySummary {
            total_generations: state.total_generations,
            total_optimizations: state.total_optimizations,
            recent: state.records[start..].to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_returns_stored_copy() {
        let log = ActivityLog::new();
        let record = log.record("a@example.com", ActivityKind::Generation, json!({"k": 1}));

        assert_eq!(record.requester_id, "a@example.com");
        assert_eq!(record.kind, ActivityKind::Generation);
        assert_eq!(log.query("a@example.com"), vec![record]);
    }

    #[test]
    fn test_query_preserves_order_and_filters() {
        let log = ActivityLog::new();
        log.record("a", ActivityKind::Generation, json!(1));
        log.record("b", ActivityKind::Generation, json!(2));
        log.record("a", ActivityKind::Optimization, json!(3));
        log.record("b", ActivityKind::Optimization, json!(4));
        log.record("a", ActivityKind::Generation, json!(5));

        let payloads: Vec<Value> = log.query("a").into_iter().map(|r| r.payload).collect();
        assert_eq!(payloads, vec![json!(1), json!(3), json!(5)]);
        assert!(log.query("nobody").is_empty());
    }

    #[test]
    fn test_summary_counts_and_recent() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        for i in 0..7 {
            let kind = if i % 3 == 0 {
                ActivityKind::Optimization
            } else {
                ActivityKind::Generation
            };
            log.record("u", kind, json!(i));
        }

        let summary = log.summary(5);
        assert_eq!(summary.total_generations, 4);
        assert_eq!(summary.total_optimizations, 3);
        let recent: Vec<Value> = summary.recent.into_iter().map(|r| r.payload).collect();
        assert_eq!(recent, vec![json!(2), json!(3), json!(4), json!(5), json!(6)]);

        assert_eq!(log.summary(100).recent.len(), 7);
        assert!(log.summary(0).recent.is_empty());
    }

    #[test]
    fn test_concurrent_records_all_persist() {
        let log = Arc::new(ActivityLog::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..50 {
                        log.record(format!("user-{}", t), ActivityKind::Generation, json!(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.len(), 400);
        assert_eq!(log.summary(0).total_generations, 400);
        let own: Vec<Value> = log.query("user-3").into_iter().map(|r| r.payload).collect();
        assert_eq!(own, (0..50).map(|i| json!(i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_record_wire_format() {
        let log = ActivityLog::new();
        let record = log.record("a", ActivityKind::Optimization, json!({"job": "x"}));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["user_id"], "a");
        assert_eq!(value["type"], "resume_optimization");
        assert_eq!(value["details"]["job"], "x");
        assert!(value["timestamp"].is_string());
    }
}
