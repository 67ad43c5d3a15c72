//! Order search form used by the plan printer.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use criteria_model::field::{FieldCell, accessors};
use criteria_model::{Column, Criteria, CriteriaEntity};

/// Search fields an order listing exposes as criteria columns.
#[derive(Debug, Default)]
pub struct OrderSearch {
    /// Customer display name, matched with `LIKE`.
    pub customer_name: FieldCell<Option<String>>,
    /// Lower bound on the order total.
    pub order_total: FieldCell<Option<f64>>,
    /// Earliest creation date.
    pub created_on: FieldCell<Option<NaiveDate>>,
    /// Accepted order states.
    pub status: FieldCell<Vec<String>>,
    /// Stores the order may belong to.
    pub store_ids: FieldCell<Vec<Uuid>>,
}

impl CriteriaEntity for OrderSearch {
    fn add_columns(self: &Arc<Self>, criteria: &Criteria) {
        let (get, set) = accessors(self, |s| &s.customer_name);
        criteria
            .add_column_value("customer_name", get, set)
            .set_operator("LIKE");

        let (get, set) = accessors(self, |s| &s.order_total);
        criteria
            .add_column_value("order_total", get, set)
            .set_operator(">=");

        let (get, set) = accessors(self, |s| &s.created_on);
        let created_on = criteria.add_column_value("created_on", get, set);
        created_on.set_operator(">=");
        created_on.set_label("Created Since");

        let (get, set) = accessors(self, |s| &s.status);
        criteria.add_column_values("status", get, set);

        let (get, set) = accessors(self, |s| &s.store_ids);
        criteria.add_column_values("store_id", get, set);
    }
}
