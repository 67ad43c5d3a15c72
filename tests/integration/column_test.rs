//! Integration tests for the live-binding behavior of both column variants.

mod helpers;

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use criteria_core::types::{FilterValue, OrderBy};
use criteria_model::{Column, Criteria};

use helpers::order_criteria;

#[test]
fn test_single_value_lifecycle() {
    let criteria = order_criteria(100);
    let total = criteria.value_column::<i64>("order_total").unwrap();

    assert_eq!(total.value(), 100);

    total.set_value(250);
    assert_eq!(total.value(), 250);
    assert_eq!(criteria.entity().order_total.get(), 250);

    total.set_order_by(OrderBy::Asc);
    total.reset_value();
    assert_eq!(total.value(), 100);
    assert_eq!(criteria.entity().order_total.get(), 100);
    assert_eq!(total.order_by(), OrderBy::None);
}

#[test]
fn test_external_field_changes_are_visible() {
    let criteria = order_criteria(1);
    criteria.entity().customer.set(Some("acme".to_string()));

    let customer = criteria.column("customer").unwrap();
    assert_eq!(customer.filter_value(), FilterValue::String("acme".into()));
}

#[test]
fn test_multi_value_lifecycle() {
    let criteria = order_criteria(1);
    let status = criteria.values_column::<String>("status").unwrap();
    assert_eq!(status.operator(), "IN");
    assert_eq!(status.values(), ["open"]);

    status.set_values(vec!["held".to_string(), "closed".to_string()]);
    assert_eq!(criteria.entity().status.get(), ["held", "closed"]);

    criteria.entity().status.update(|s| s.push("void".to_string()));
    status.reset_value();
    assert_eq!(status.values(), ["open"]);
}

#[test]
fn test_reset_keeps_metadata() {
    let criteria = order_criteria(5);
    let total = criteria.column("order_total").unwrap();
    total.set_enabled(false);
    total.set_operator("<");
    total.set_label("Max Total");
    total.set_sort_order(Some(9));
    total.set_order_by(OrderBy::Desc);

    total.reset_value();

    assert!(!total.is_enabled());
    assert_eq!(total.operator(), "<");
    assert_eq!(total.label(), "Max Total");
    assert_eq!(total.sort_order(), Some(9));
    assert_eq!(total.order_by(), OrderBy::None);
}

#[test]
fn test_enabled_flag_is_independent() {
    let criteria = order_criteria(5);
    let customer = criteria.column("customer").unwrap();

    customer.set_enabled(false);
    customer.set_operator("LIKE");
    customer.set_order_by(OrderBy::Asc);
    customer.set_label("Buyer");
    assert!(!customer.is_enabled());

    customer.set_enabled(true);
    assert!(customer.is_enabled());
    assert_eq!(customer.operator(), "LIKE");
    assert_eq!(criteria.len(), 3);
}

#[test]
fn test_labels_and_types() {
    let criteria = order_criteria(5);
    let total = criteria.column("order_total").unwrap();
    assert_eq!(total.label(), "Order Total");
    assert!(total.value_type().is::<i64>());
    assert_eq!(total.table_name().as_deref(), Some("orders"));

    let status = criteria.column("status").unwrap();
    assert!(status.value_type().is::<String>());
    assert!(status.as_values_column::<String>().is_some());
    assert!(status.as_value_column::<String>().is_none());
}

#[test]
fn test_getter_panic_reaches_caller_and_column_stays_usable() {
    let criteria = Criteria::with_table_name("orders");
    let failing = Arc::new(AtomicBool::new(false));
    let field = Arc::new(AtomicI64::new(3));

    let (trigger, get, set) = (Arc::clone(&failing), Arc::clone(&field), Arc::clone(&field));
    let total = criteria.add_column_value(
        "order_total",
        move || {
            if trigger.load(Ordering::SeqCst) {
                panic!("order total unavailable");
            }
            get.load(Ordering::SeqCst)
        },
        move |v| set.store(v, Ordering::SeqCst),
    );
    total.set_order_by(OrderBy::Asc);

    failing.store(true, Ordering::SeqCst);
    let payload = panic::catch_unwind(AssertUnwindSafe(|| total.value())).unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"order total unavailable"));

    let column = criteria.column("order_total").unwrap();
    let payload = panic::catch_unwind(AssertUnwindSafe(|| column.filter_value())).unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"order total unavailable"));

    assert_eq!(total.order_by(), OrderBy::Asc);
    total.set_order_by(OrderBy::Desc);
    assert_eq!(total.order_by(), OrderBy::Desc);
    total.set_label("Total");
    assert_eq!(total.label(), "Total");
    assert_eq!(criteria.len(), 1);
    assert_eq!(criteria.table_name().as_deref(), Some("orders"));

    failing.store(false, Ordering::SeqCst);
    total.set_value(8);
    assert_eq!(total.value(), 8);
    total.reset_value();
    assert_eq!(total.value(), 3);
    assert_eq!(total.order_by(), OrderBy::None);
}

#[test]
fn test_field_survives_panic_during_update() {
    let criteria = order_criteria(5);
    let status = criteria.values_column::<String>("status").unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        criteria.entity().status.update(|s| {
            s.push("void".to_string());
            panic!("status update aborted");
        })
    }));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"status update aborted"));

    assert_eq!(criteria.entity().status.get(), ["open", "void"]);
    assert_eq!(status.values(), ["open", "void"]);

    criteria.entity().status.set(vec!["held".to_string()]);
    assert_eq!(status.values(), ["held"]);

    status.set_order_by(OrderBy::Asc);
    status.reset_value();
    assert_eq!(criteria.entity().status.get(), ["open"]);
    assert_eq!(status.order_by(), OrderBy::None);
}
