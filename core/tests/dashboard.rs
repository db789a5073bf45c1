//! Dashboard aggregation and activity feed tests.

use ispdesk_core::{
    activity::ActivityKind,
    complaint::ComplaintStatus,
    config::DeskConfig,
    customer::CustomerRef,
    desk::Desk,
};

/// Stats recompute straight off the repositories: totals, actives, the
/// popular plan, and the complaint split.
#[test]
fn stats_reflect_repository_state() {
    let mut desk = Desk::in_memory().unwrap();

    let empty = desk.dashboard_stats().unwrap();
    assert_eq!(empty.total_customers, 0);
    assert_eq!(empty.total_plans, 0);
    assert!(empty.most_popular_plan.is_none());

    let basic = desk.add_plan("Basic", "10Mbps", 19.99, None, None).unwrap();
    desk.add_plan("Fibre", "100Mbps", 49.99, None, None).unwrap();
    desk.add_customer("Alice", "addr", "555", "a@x.com", Some(basic))
        .unwrap();
    desk.add_customer("Ben", "addr", "555", "b@x.com", Some(basic))
        .unwrap();
    desk.add_customer("Cara", "addr", "555", "c@x.com", None)
        .unwrap();

    let target = CustomerRef::Name("Alice".into());
    desk.add_complaint(&target, "slow", ComplaintStatus::Open).unwrap();
    let resolved = desk
        .add_complaint(&target, "outage", ComplaintStatus::Open)
        .unwrap();
    desk.resolve_complaint(resolved, "restarted the line").unwrap();

    let stats = desk.dashboard_stats().unwrap();
    assert_eq!(stats.total_customers, 3);
    assert_eq!(stats.active_customers, 2);
    assert_eq!(stats.total_plans, 2);
    let popular = stats.most_popular_plan.unwrap();
    assert_eq!(popular.name, "Basic");
    assert_eq!(popular.subscribers, 2);
    assert_eq!(stats.open_complaints, 1);
    assert_eq!(stats.resolved_complaints, 1);
}

/// Open plus resolved always equals the total complaint count.
#[test]
fn complaint_counts_always_sum_to_total() {
    let mut desk = Desk::in_memory().unwrap();
    desk.add_customer("Alice", "addr", "555", "a@x.com", None)
        .unwrap();
    let target = CustomerRef::Name("Alice".into());

    for (i, status) in [
        ComplaintStatus::Open,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Open,
        ComplaintStatus::Resolved,
    ]
    .into_iter()
    .enumerate()
    {
        desk.add_complaint(&target, &format!("issue {i}"), status)
            .unwrap();
        let stats = desk.dashboard_stats().unwrap();
        let total = desk.complaints().unwrap().len() as i64;
        assert_eq!(stats.open_complaints + stats.resolved_complaints, total);
    }
}

/// Every successful mutation lands in the feed, newest first; the merged
/// view also carries the store-backed registration and complaint rows.
#[test]
fn recent_activity_merges_feeds_newest_first() {
    let mut desk = Desk::in_memory().unwrap();
    let plan = desk.add_plan("Basic", "10Mbps", 19.99, None, None).unwrap();
    desk.add_customer("Alice", "addr", "555", "a@x.com", Some(plan))
        .unwrap();
    desk.add_complaint(
        &CustomerRef::Name("Alice".into()),
        "Connection drops every evening without warning",
        ComplaintStatus::Open,
    )
    .unwrap();

    let feed = desk.activity();
    assert_eq!(feed.len(), 3);
    let newest = feed.iter().next().unwrap();
    assert_eq!(newest.kind, ActivityKind::Complaint);
    assert_eq!(newest.message, "Added complaint for: Alice");

    let merged = desk.recent_activity(20).unwrap();
    // 3 feed entries + 1 registration row + 1 complaint row.
    assert_eq!(merged.len(), 5);
    assert!(merged
        .iter()
        .any(|e| e.message == "New customer: Alice"));
    assert!(merged
        .iter()
        .any(|e| e.message.starts_with("New complaint: Alice - ")));
    assert!(merged
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));

    let capped = desk.recent_activity(2).unwrap();
    assert_eq!(capped.len(), 2);
}

/// The feed honors the configured capacity, dropping oldest entries.
#[test]
fn activity_feed_is_bounded_by_config() {
    let config = DeskConfig {
        database_path: ":memory:".into(),
        activity_capacity: 3,
    };
    let mut desk = Desk::from_config(&config).unwrap();
    for i in 0..10 {
        desk.add_plan(&format!("Plan {i}"), "10Mbps", 9.99, None, None)
            .unwrap();
    }
    assert_eq!(desk.activity().len(), 3);
    let newest = desk.activity().iter().next().unwrap();
    assert_eq!(newest.message, "Added plan: Plan 9");
}
