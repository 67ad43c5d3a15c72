//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use criteria_model::field::{FieldCell, accessors};
use criteria_model::{Criteria, CriteriaEntity, EntityCriteria};

/// Entity with one scalar and one sequence field, in the shape a generated
/// search bean would have.
#[derive(Debug)]
pub struct OrderFilter {
    pub order_total: FieldCell<i64>,
    pub customer: FieldCell<Option<String>>,
    pub status: FieldCell<Vec<String>>,
}

impl OrderFilter {
    pub fn new(order_total: i64) -> Self {
        Self {
            order_total: FieldCell::new(order_total),
            customer: FieldCell::new(None),
            status: FieldCell::new(vec!["open".to_string()]),
        }
    }
}

impl CriteriaEntity for OrderFilter {
    fn add_columns(self: &Arc<Self>, criteria: &Criteria) {
        let (get, set) = accessors(self, |f| &f.order_total);
        criteria.add_column_value("order_total", get, set);
        let (get, set) = accessors(self, |f| &f.customer);
        criteria.add_column_value("customer", get, set);
        let (get, set) = accessors(self, |f| &f.status);
        criteria.add_column_values("status", get, set);
    }
}

/// Order filter criteria against the `orders` table.
pub fn order_criteria(order_total: i64) -> EntityCriteria<OrderFilter> {
    EntityCriteria::with_table_name(OrderFilter::new(order_total), "orders")
}

/// Column names of a criteria set, in iteration order.
pub fn column_names(criteria: &Criteria) -> Vec<String> {
    criteria
        .all_columns()
        .iter()
        .map(|c| c.column_name().to_string())
        .collect()
}
