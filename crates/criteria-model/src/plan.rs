//! Reference reader of the query-execution contract.
//!
//! A [`FilterPlan`] is what a query engine extracts from a criteria set
//! before it renders a dialect-specific query: the table, the row limit,
//! the combinator, one condition per enabled column that has something to
//! compare against, and the ordering directives of enabled columns.

use serde::Serialize;
use tracing::debug;

use criteria_core::error::AppError;
use criteria_core::result::AppResult;
use criteria_core::types::{FilterOp, FilterValue, OrderBy, WHERE_AND, WHERE_OR};

use crate::criteria::Criteria;

/// One filter condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// Column the condition applies to.
    pub column: String,
    /// Operator token, as configured on the column.
    pub operator: String,
    /// Bound value.
    pub value: FilterValue,
}

/// One ordering directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    /// Column to order by.
    pub column: String,
    /// Direction; never [`OrderBy::None`].
    pub direction: OrderBy,
}

/// Filter/sort plan extracted from a criteria set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPlan {
    /// Target table.
    pub table_name: Option<String>,
    /// Row limit, `None` when unlimited.
    pub limit: Option<u32>,
    /// Combinator joining the conditions.
    pub where_logic: String,
    /// Conditions in column order.
    pub conditions: Vec<Condition>,
    /// Ordering directives in column order.
    pub ordering: Vec<SortKey>,
}

impl FilterPlan {
    /// Read a plan from `criteria`.
    ///
    /// Disabled columns contribute nothing. An enabled column whose value is
    /// null or an empty list yields no condition unless its operator takes
    /// no value (`IS NULL`, `IS NOT NULL`).
    pub fn from_criteria(criteria: &Criteria) -> Self {
        let mut conditions = Vec::new();
        let mut ordering = Vec::new();

        for column in criteria.all_columns() {
            if !column.is_enabled() {
                continue;
            }

            let operator = column.operator();
            let value_free = operator
                .parse::<FilterOp>()
                .is_ok_and(|op| !op.takes_value());
            let value = if value_free {
                FilterValue::Null
            } else {
                column.filter_value()
            };
            if value_free || !value.is_empty() {
                conditions.push(Condition {
                    column: column.column_name().to_string(),
                    operator,
                    value,
                });
            }

            let direction = column.order_by();
            if direction.is_active() {
                ordering.push(SortKey {
                    column: column.column_name().to_string(),
                    direction,
                });
            }
        }

        let plan = Self {
            table_name: criteria.table_name(),
            limit: criteria.result_limit(),
            where_logic: criteria.where_logic(),
            conditions,
            ordering,
        };

        debug!(
            table = ?plan.table_name,
            conditions = plan.conditions.len(),
            ordering = plan.ordering.len(),
            "Built filter plan"
        );
        plan
    }

    /// Whether the plan filters nothing.
    pub fn is_unfiltered(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check the plan against what a query engine can render.
    ///
    /// The where-logic must be `AND` or `OR`, every operator must be a known
    /// token, and list operators must be bound to a list value.
    pub fn validate(&self) -> AppResult<()> {
        if ![WHERE_AND, WHERE_OR].contains(&self.where_logic.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported where-logic '{}'",
                self.where_logic
            )));
        }

        for condition in &self.conditions {
            let op = condition.operator.parse::<FilterOp>().map_err(|_| {
                AppError::validation(format!(
                    "Column '{}' uses unknown operator '{}'",
                    condition.column, condition.operator
                ))
            })?;
            if op.takes_list() && !matches!(condition.value, FilterValue::List(_)) {
                return Err(AppError::validation(format!(
                    "Column '{}' applies '{}' to a single value",
                    condition.column, op
                )));
            }
        }
        Ok(())
    }

    /// Render the plan as pretty-printed JSON.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
