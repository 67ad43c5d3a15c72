//! Integration tests for criteria-set settings and column ordering.

mod helpers;

use criteria_core::types::UNLIMITED_RESULTS;
use criteria_model::{ColumnKind, Criteria, EntityCriteria};

use helpers::{OrderFilter, column_names, order_criteria};

#[test]
fn test_entity_columns_ready_after_construction() {
    let criteria = order_criteria(10);
    assert_eq!(criteria.len(), 3);
    assert_eq!(column_names(&criteria), ["order_total", "customer", "status"]);

    let kinds: Vec<_> = criteria.all_columns().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, [ColumnKind::Single, ColumnKind::Single, ColumnKind::Multi]);
}

#[test]
fn test_sort_orders_match_registration_index() {
    let criteria = order_criteria(10);
    let orders: Vec<_> = criteria
        .all_columns()
        .iter()
        .map(|c| c.sort_order())
        .collect();
    assert_eq!(orders, [Some(0), Some(1), Some(2)]);
}

#[test]
fn test_reordering_changes_iteration_order() {
    let criteria = order_criteria(10);
    criteria.column("status").unwrap().set_sort_order(Some(-1));
    assert_eq!(column_names(&criteria), ["status", "order_total", "customer"]);

    criteria.column("order_total").unwrap().set_sort_order(None);
    assert_eq!(column_names(&criteria), ["order_total", "status", "customer"]);
}

#[test]
fn test_settings_round_trip() {
    let criteria = EntityCriteria::new(OrderFilter::new(0));
    assert_eq!(criteria.table_name(), None);
    assert_eq!(criteria.max_results(), UNLIMITED_RESULTS);

    criteria.set_table_name(Some("  "));
    assert_eq!(criteria.table_name().as_deref(), Some("  "));

    criteria.set_max_results(50);
    assert_eq!(criteria.result_limit(), Some(50));

    criteria.set_where_logic(Some("OR"));
    assert_eq!(criteria.where_logic(), "OR");
}

#[test]
fn test_where_logic_self_heals() {
    let criteria = Criteria::with_table_name("orders");
    criteria.set_where_logic(None);
    assert_eq!(criteria.where_logic(), "AND");

    criteria.set_where_logic(Some("   "));
    assert_eq!(criteria.where_logic(), "AND");
    assert_eq!(criteria.where_logic(), "AND");
}

#[test]
fn test_max_results_constructor() {
    let criteria = EntityCriteria::with_max_results(OrderFilter::new(0), "orders", 200);
    assert_eq!(criteria.max_results(), 200);
    assert_eq!(criteria.len(), 3);
    assert_eq!(criteria.to_string(), "OrderFilter [tableName=orders]");
}
