//! Single-value column.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex};

use criteria_core::types::{FilterOp, FilterValue, OrderBy, ValueType};
use tracing::trace;

use super::{Column, ColumnKind, ColumnMeta, ColumnValue, Getter, Setter, delegate_column_meta};
use crate::criteria::TableSettings;

/// A column proxying one scalar field of its entity.
///
/// Reads and writes go straight through the bound accessor pair, so the
/// column always reflects the field's current state, including changes
/// made outside the criteria workflow.
pub struct ValueColumn<T> {
    meta: ColumnMeta,
    getter: Getter<T>,
    setter: Setter<T>,
    default_value: T,
}

impl<T: ColumnValue> ValueColumn<T> {
    /// Bind a new column. The getter is called once to snapshot the default.
    pub(crate) fn new(
        name: &str,
        table: Arc<Mutex<TableSettings>>,
        getter: Getter<T>,
        setter: Setter<T>,
    ) -> Self {
        let default_value = getter();
        Self {
            meta: ColumnMeta::new(name, ValueType::of::<T>(), FilterOp::SINGLE_DEFAULT, table),
            getter,
            setter,
            default_value,
        }
    }

    /// Current value of the bound field.
    pub fn value(&self) -> T {
        (self.getter)()
    }

    /// Write through to the bound field.
    pub fn set_value(&self, value: T) {
        (self.setter)(value);
    }

    /// Value captured at registration.
    pub fn default_value(&self) -> &T {
        &self.default_value
    }
}

impl<T: ColumnValue> Column for ValueColumn<T> {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Single
    }

    delegate_column_meta!();

    fn reset_value(&self) {
        trace!(column = self.meta.name(), "Resetting column value");
        self.set_value(self.default_value.clone());
        self.meta.set_order_by(OrderBy::None);
    }

    fn filter_value(&self) -> FilterValue {
        self.value().to_filter_value()
    }
}

impl<T> fmt::Debug for ValueColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ValueColumn");
        self.meta.fmt_fields(&mut s);
        s.finish_non_exhaustive()
    }
}
