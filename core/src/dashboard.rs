//! Read-side dashboard aggregation.
//!
//! Recomputed on demand, never cached — the dataset is small and there is
//! exactly one writer.

use crate::activity::{ActivityEntry, ActivityKind};
use crate::desk::Desk;
use crate::error::DeskResult;
use serde::{Deserialize, Serialize};

/// Summary counts for the dashboard header cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_customers: i64,
    pub active_customers: i64,
    pub total_plans: i64,
    pub most_popular_plan: Option<PopularPlan>,
    pub open_complaints: i64,
    pub resolved_complaints: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularPlan {
    pub name: String,
    pub subscribers: i64,
}

/// Rows each store feed contributes to `recent_activity`.
const FEED_ROWS: usize = 5;

impl Desk {
    pub fn dashboard_stats(&self) -> DeskResult<DashboardStats> {
        let most_popular_plan =
            self.most_popular_plan()?
                .map(|(plan, subscribers)| PopularPlan {
                    name: plan.name,
                    subscribers,
                });
        Ok(DashboardStats {
            total_customers: self.store.customer_count()?,
            active_customers: self.store.active_customer_count()?,
            total_plans: self.store.plan_count()?,
            most_popular_plan,
            open_complaints: self.store.open_complaint_count()?,
            resolved_complaints: self.store.resolved_complaint_count()?,
        })
    }

    /// The activity feed merged with the newest registrations and complaints,
    /// newest first, at most `limit` entries.
    pub fn recent_activity(&self, limit: usize) -> DeskResult<Vec<ActivityEntry>> {
        let mut merged: Vec<ActivityEntry> = self.activity.iter().cloned().collect();

        for (name, date) in self.store.recent_registrations(FEED_ROWS)? {
            merged.push(ActivityEntry {
                kind: ActivityKind::Customer,
                message: format!("New customer: {name}"),
                timestamp: date,
            });
        }
        for (name, description, date) in self.store.recent_complaints(FEED_ROWS)? {
            merged.push(ActivityEntry {
                kind: ActivityKind::Complaint,
                message: format!("New complaint: {name} - {}", truncate(&description, 30)),
                timestamp: date,
            });
        }

        // All feeds share one sortable text format; see clock::STAMP_FORMAT.
        merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        merged.truncate(limit);
        Ok(merged)
    }
}

/// First `max` characters, with a trailing ellipsis when cut short.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_only_when_long() {
        assert_eq!(truncate("short", 30), "short");
        let long = "a".repeat(40);
        assert_eq!(truncate(&long, 30), format!("{}...", "a".repeat(30)));
    }
}
