//! Column descriptors.
//!
//! A column is a named, typed, live view over one field of an entity plus
//! the filter/sort metadata a query engine needs. Two variants exist:
//! [`ValueColumn`] proxies a scalar field, [`ValuesColumn`] an ordered
//! sequence. Both implement the type-erased [`Column`] contract the
//! criteria set stores.

pub mod value;
pub mod values;

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use criteria_core::naming::labelize;
use criteria_core::types::{FilterOp, FilterValue, OrderBy, ToFilterValue, ValueType};

use crate::criteria::TableSettings;

pub use value::ValueColumn;
pub use values::ValuesColumn;

/// Read accessor supplied by the owning entity.
pub type Getter<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Write mutator supplied by the owning entity.
pub type Setter<T> = Box<dyn Fn(T) + Send + Sync>;

/// Element types a column can be bound to.
pub trait ColumnValue: ToFilterValue + Clone + Send + Sync + 'static {}

impl<T> ColumnValue for T where T: ToFilterValue + Clone + Send + Sync + 'static {}

/// Which variant a column is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Bound to a scalar field.
    Single,
    /// Bound to an ordered sequence field.
    Multi,
}

/// The type-erased column contract.
///
/// Every accessor takes the column's own lock for the duration of the call;
/// no atomicity is promised across calls.
pub trait Column: Send + Sync + fmt::Debug {
    /// The variant of this column.
    fn kind(&self) -> ColumnKind;

    /// Table name of the owning criteria set.
    fn table_name(&self) -> Option<String>;

    /// Identity of the column within its set.
    fn column_name(&self) -> &str;

    /// Declared element type.
    fn value_type(&self) -> ValueType;

    /// Human-readable label.
    fn label(&self) -> String;

    /// Replace the label.
    fn set_label(&self, label: &str);

    /// Position among the set's columns.
    fn sort_order(&self) -> Option<i32>;

    /// Move the column; `None` sorts ahead of every positioned column.
    fn set_sort_order(&self, sort_order: Option<i32>);

    /// Whether the column participates in filtering.
    fn is_enabled(&self) -> bool;

    /// Include or exclude the column from filtering.
    fn set_enabled(&self, enabled: bool);

    /// Comparison operator token.
    fn operator(&self) -> String;

    /// Replace the comparison operator token.
    fn set_operator(&self, operator: &str);

    /// Ordering directive.
    fn order_by(&self) -> OrderBy;

    /// Replace the ordering directive.
    fn set_order_by(&self, order_by: OrderBy);

    /// Restore the bound field to its registration-time snapshot and clear
    /// the ordering directive. Label, enable state, operator and sort order
    /// are left alone.
    fn reset_value(&self);

    /// Current bound value, erased for a query engine.
    fn filter_value(&self) -> FilterValue;

    /// Borrow as `Any` for downcasting to the concrete variant.
    fn as_any(&self) -> &dyn Any;

    /// Convert into `Any` for downcasting a shared handle.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl dyn Column {
    /// Downcast to a single-value column of element type `T`.
    pub fn as_value_column<T: ColumnValue>(&self) -> Option<&ValueColumn<T>> {
        self.as_any().downcast_ref()
    }

    /// Downcast to a multi-value column of element type `T`.
    pub fn as_values_column<T: ColumnValue>(&self) -> Option<&ValuesColumn<T>> {
        self.as_any().downcast_ref()
    }
}

/// Mutable per-column metadata, guarded by one lock per column.
#[derive(Debug, Clone)]
struct ColumnState {
    label: String,
    sort_order: Option<i32>,
    enabled: bool,
    operator: String,
    order_by: OrderBy,
}

/// Identity and metadata shared by both column variants.
pub(crate) struct ColumnMeta {
    name: String,
    value_type: ValueType,
    table: Arc<Mutex<TableSettings>>,
    state: Mutex<ColumnState>,
}

impl ColumnMeta {
    pub(crate) fn new(
        name: &str,
        value_type: ValueType,
        default_operator: FilterOp,
        table: Arc<Mutex<TableSettings>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            table,
            state: Mutex::new(ColumnState {
                label: labelize(name),
                sort_order: None,
                enabled: true,
                operator: default_operator.into(),
                order_by: OrderBy::None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ColumnState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn table_name(&self) -> Option<String> {
        self.table
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .table_name
            .clone()
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub(crate) fn label(&self) -> String {
        self.state().label.clone()
    }

    pub(crate) fn set_label(&self, label: &str) {
        self.state().label = label.to_string();
    }

    pub(crate) fn sort_order(&self) -> Option<i32> {
        self.state().sort_order
    }

    pub(crate) fn set_sort_order(&self, sort_order: Option<i32>) {
        self.state().sort_order = sort_order;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.state().enabled = enabled;
    }

    pub(crate) fn operator(&self) -> String {
        self.state().operator.clone()
    }

    pub(crate) fn set_operator(&self, operator: &str) {
        self.state().operator = operator.to_string();
    }

    pub(crate) fn order_by(&self) -> OrderBy {
        self.state().order_by
    }

    pub(crate) fn set_order_by(&self, order_by: OrderBy) {
        self.state().order_by = order_by;
    }

    pub(crate) fn fmt_fields(&self, f: &mut fmt::DebugStruct<'_, '_>) {
        let state = self.state().clone();
        f.field("name", &self.name)
            .field("value_type", &self.value_type.name())
            .field("label", &state.label)
            .field("sort_order", &state.sort_order)
            .field("enabled", &state.enabled)
            .field("operator", &state.operator)
            .field("order_by", &state.order_by);
    }
}

/// Implements the metadata half of [`Column`] by delegating to a `meta` field.
macro_rules! delegate_column_meta {
    () => {
        fn table_name(&self) -> Option<String> {
            self.meta.table_name()
        }

        fn column_name(&self) -> &str {
            self.meta.name()
        }

        fn value_type(&self) -> ValueType {
            self.meta.value_type()
        }

        fn label(&self) -> String {
            self.meta.label()
        }

        fn set_label(&self, label: &str) {
            self.meta.set_label(label);
        }

        fn sort_order(&self) -> Option<i32> {
            self.meta.sort_order()
        }

        fn set_sort_order(&self, sort_order: Option<i32>) {
            self.meta.set_sort_order(sort_order);
        }

        fn is_enabled(&self) -> bool {
            self.meta.is_enabled()
        }

        fn set_enabled(&self, enabled: bool) {
            self.meta.set_enabled(enabled);
        }

        fn operator(&self) -> String {
            self.meta.operator()
        }

        fn set_operator(&self, operator: &str) {
            self.meta.set_operator(operator);
        }

        fn order_by(&self) -> OrderBy {
            self.meta.order_by()
        }

        fn set_order_by(&self, order_by: OrderBy) {
            self.meta.set_order_by(order_by);
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    };
}

pub(crate) use delegate_column_meta;
