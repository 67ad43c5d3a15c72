//! Integration tests for concurrent registration, iteration, and mutation.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;

use criteria_core::types::{FilterValue, OrderBy};
use criteria_model::Criteria;

use helpers::order_criteria;

const THREADS: usize = 16;
const PER_THREAD: usize = 25;

#[test]
fn test_concurrent_registration_assigns_distinct_sort_orders() {
    let criteria = Criteria::with_table_name("orders");

    thread::scope(|s| {
        for t in 0..THREADS {
            let criteria = &criteria;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let field = Arc::new(AtomicI64::new(0));
                    let (get, set) = (Arc::clone(&field), field);
                    criteria.add_column_value(
                        &format!("col_{t:02}_{i:02}"),
                        move || get.load(Ordering::SeqCst),
                        move |v| set.store(v, Ordering::SeqCst),
                    );
                }
            });
        }
    });

    let columns = criteria.all_columns();
    assert_eq!(columns.len(), THREADS * PER_THREAD);

    let orders: Vec<i32> = columns.iter().map(|c| c.sort_order().unwrap()).collect();
    let expected: Vec<i32> = (0..(THREADS * PER_THREAD) as i32).collect();
    assert_eq!(orders, expected);

    let names: HashSet<_> = columns.iter().map(|c| c.column_name().to_string()).collect();
    assert_eq!(names.len(), THREADS * PER_THREAD);
}

#[test]
fn test_iteration_during_registration_stays_consistent() {
    let criteria = Criteria::new();

    thread::scope(|s| {
        let writer = s.spawn(|| {
            for i in 0..200 {
                criteria.add_column_value(&format!("col_{i:03}"), || 0_i32, |_| {});
            }
        });

        while !writer.is_finished() {
            let columns = criteria.all_columns();
            let orders: Vec<_> = columns.iter().map(|c| c.sort_order().unwrap()).collect();
            let expected: Vec<i32> = (0..orders.len() as i32).collect();
            assert_eq!(orders, expected);
        }
    });

    assert_eq!(criteria.len(), 200);
}

#[test]
fn test_concurrent_metadata_mutation() {
    let criteria = order_criteria(1);
    let column = criteria.column("customer").unwrap();

    thread::scope(|s| {
        for t in 0..THREADS {
            let column = Arc::clone(&column);
            s.spawn(move || {
                for i in 0..100 {
                    column.set_enabled((t + i) % 2 == 0);
                    column.set_operator(if t % 2 == 0 { "=" } else { "LIKE" });
                    column.set_order_by(if i % 2 == 0 { OrderBy::Asc } else { OrderBy::Desc });
                    column.set_label(&format!("Customer {t}"));
                }
            });
        }
    });

    assert!(["=", "LIKE"].contains(&column.operator().as_str()));
    assert!(column.order_by().is_active());
    assert!(column.label().starts_with("Customer "));
    assert_eq!(criteria.len(), 3);

    assert_eq!(column.column_name(), "customer");
    assert!(column.value_type().is::<Option<String>>());
    assert_eq!(column.sort_order(), Some(1));
    assert_eq!(column.table_name().as_deref(), Some("orders"));
    assert_eq!(criteria.entity().customer.get(), None);
    assert_eq!(column.filter_value(), FilterValue::Null);
}

#[test]
fn test_concurrent_where_logic_reads_never_blank() {
    let criteria = Criteria::new();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                criteria.set_where_logic(if i % 2 == 0 { Some(" ") } else { Some("OR") });
            }
        });
        s.spawn(|| {
            for _ in 0..500 {
                let logic = criteria.where_logic();
                assert!(logic == "AND" || logic == "OR", "unexpected where-logic {logic:?}");
            }
        });
    });
}
