//! In-memory activity feed — process-lifetime, newest first, reset on
//! restart. Not persisted; display only.

use crate::clock;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Customer,
    Plan,
    Complaint,
    Billing,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Customer => "Customer",
            ActivityKind::Plan => "Plan",
            ActivityKind::Complaint => "Complaint",
            ActivityKind::Billing => "Billing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: String,
}

/// Bounded ring of recent mutations. Oldest entries fall off the back.
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// A capacity of zero means unbounded.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record a successful mutation, stamped at call time.
    pub fn record(&mut self, kind: ActivityKind, message: impl Into<String>) {
        if self.capacity > 0 && self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(ActivityEntry {
            kind,
            message: message.into(),
            timestamp: clock::timestamp(),
        });
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut feed = ActivityLog::new(2);
        feed.record(ActivityKind::Customer, "first");
        feed.record(ActivityKind::Plan, "second");
        feed.record(ActivityKind::Billing, "third");

        let messages: Vec<&str> = feed.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second"]);
    }

    #[test]
    fn zero_capacity_is_unbounded() {
        let mut feed = ActivityLog::new(0);
        for i in 0..100 {
            feed.record(ActivityKind::Complaint, format!("entry {i}"));
        }
        assert_eq!(feed.len(), 100);
    }
}
