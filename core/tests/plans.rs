//! Plan repository tests, including the referential delete guard and the
//! most-popular aggregate.

use ispdesk_core::{desk::Desk, error::DeskError};

#[test]
fn add_then_list_round_trip() {
    let mut desk = Desk::in_memory().unwrap();
    let id = desk
        .add_plan("Basic", "10Mbps", 19.99, Some("100GB"), Some("Entry plan"))
        .unwrap();

    let plans = desk.plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].plan_id, id);
    assert_eq!(plans[0].name, "Basic");
    assert_eq!(plans[0].speed, "10Mbps");
    assert_eq!(plans[0].price, 19.99);
    assert_eq!(plans[0].data_limit.as_deref(), Some("100GB"));
}

/// Name and speed are required; the price must be a non-negative number.
#[test]
fn plan_field_validation() {
    let mut desk = Desk::in_memory().unwrap();
    assert!(matches!(
        desk.add_plan("", "10Mbps", 19.99, None, None).unwrap_err(),
        DeskError::Validation(_)
    ));
    assert!(matches!(
        desk.add_plan("Basic", "", 19.99, None, None).unwrap_err(),
        DeskError::Validation(_)
    ));
    assert!(matches!(
        desk.add_plan("Basic", "10Mbps", -0.01, None, None).unwrap_err(),
        DeskError::Validation(_)
    ));
    assert!(matches!(
        desk.add_plan("Basic", "10Mbps", f64::NAN, None, None).unwrap_err(),
        DeskError::Validation(_)
    ));
    // Free plans are fine.
    assert!(desk.add_plan("Promo", "5Mbps", 0.0, None, None).is_ok());
}

#[test]
fn update_unknown_plan_is_not_found() {
    let mut desk = Desk::in_memory().unwrap();
    let err = desk
        .update_plan(9, "Basic", "10Mbps", 19.99, None, None)
        .unwrap_err();
    assert!(matches!(err, DeskError::NotFound(_)));
}

/// A referenced plan cannot be deleted; the error reports the subscriber
/// count and nothing changes.
#[test]
fn delete_is_blocked_while_referenced() {
    let mut desk = Desk::in_memory().unwrap();
    let plan = desk.add_plan("Basic", "10Mbps", 19.99, None, None).unwrap();
    desk.add_customer("Alice", "addr", "555", "a@x.com", Some(plan))
        .unwrap();

    let err = desk.delete_plan(plan).unwrap_err();
    match err {
        DeskError::Conflict(msg) => assert!(msg.contains("1 customer"), "got: {msg}"),
        other => panic!("expected Conflict, got {other:?}"),
    }

    // Plan and customer both survive the refused delete.
    assert_eq!(desk.plans().unwrap().len(), 1);
    assert_eq!(desk.customers().unwrap().len(), 1);
}

#[test]
fn delete_unreferenced_plan_succeeds() {
    let mut desk = Desk::in_memory().unwrap();
    let plan = desk.add_plan("Basic", "10Mbps", 19.99, None, None).unwrap();
    desk.delete_plan(plan).unwrap();
    assert!(desk.plans().unwrap().is_empty());
    assert!(matches!(
        desk.delete_plan(plan).unwrap_err(),
        DeskError::NotFound(_)
    ));
}

/// The plan with strictly the highest referencing-customer count wins.
#[test]
fn most_popular_highest_count() {
    let mut desk = Desk::in_memory().unwrap();
    let a = desk.add_plan("A", "10Mbps", 10.0, None, None).unwrap();
    let b = desk.add_plan("B", "50Mbps", 30.0, None, None).unwrap();

    for i in 0..3 {
        desk.add_customer(&format!("A{i}"), "addr", "555", "a@x.com", Some(a))
            .unwrap();
    }
    desk.add_customer("B0", "addr", "555", "b@x.com", Some(b))
        .unwrap();

    let (plan, count) = desk.most_popular_plan().unwrap().unwrap();
    assert_eq!(plan.plan_id, a);
    assert_eq!(count, 3);
}

/// No subscribers anywhere means no popular plan, even when plans exist.
#[test]
fn most_popular_none_without_subscribers() {
    let mut desk = Desk::in_memory().unwrap();
    desk.add_plan("A", "10Mbps", 10.0, None, None).unwrap();
    desk.add_plan("B", "50Mbps", 30.0, None, None).unwrap();
    assert!(desk.most_popular_plan().unwrap().is_none());
}

/// Ties break toward the lowest plan id.
#[test]
fn most_popular_tie_breaks_to_lowest_id() {
    let mut desk = Desk::in_memory().unwrap();
    let a = desk.add_plan("A", "10Mbps", 10.0, None, None).unwrap();
    let b = desk.add_plan("B", "50Mbps", 30.0, None, None).unwrap();
    desk.add_customer("A0", "addr", "555", "a@x.com", Some(a))
        .unwrap();
    desk.add_customer("B0", "addr", "555", "b@x.com", Some(b))
        .unwrap();

    let (plan, count) = desk.most_popular_plan().unwrap().unwrap();
    assert_eq!(plan.plan_id, a);
    assert_eq!(count, 1);
}

/// End-to-end walk: subscribe Alice to Basic, watch the delete guard fire,
/// then clear the reference and delete for real.
#[test]
fn basic_alice_scenario() {
    let mut desk = Desk::in_memory().unwrap();
    let basic = desk.add_plan("Basic", "10Mbps", 19.99, None, None).unwrap();
    let alice = desk
        .add_customer("Alice", "1 Main St", "555-1111", "a@x.com", Some(basic))
        .unwrap();

    let rows = desk.customers().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].plan_name.as_deref(), Some("Basic"));

    let err = desk.delete_plan(basic).unwrap_err();
    match err {
        DeskError::Conflict(msg) => assert!(msg.contains("1 customer"), "got: {msg}"),
        other => panic!("expected Conflict, got {other:?}"),
    }

    desk.delete_customer(alice).unwrap();
    desk.delete_plan(basic).unwrap();
    assert!(desk.plans().unwrap().is_empty());
}
