//! Multi-value column.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex};

use criteria_core::types::{FilterOp, FilterValue, OrderBy, ValueType};
use tracing::trace;

use super::{Column, ColumnKind, ColumnMeta, ColumnValue, Getter, Setter, delegate_column_meta};
use crate::criteria::TableSettings;

/// A column proxying an ordered sequence field of its entity.
///
/// The value type tag names the element type `T`, not `Vec<T>`.
pub struct ValuesColumn<T> {
    meta: ColumnMeta,
    getter: Getter<Vec<T>>,
    setter: Setter<Vec<T>>,
    // Owned copy: in-place edits of the live sequence never reach it.
    default_values: Vec<T>,
}

impl<T: ColumnValue> ValuesColumn<T> {
    /// Bind a new column. The getter is called once to snapshot the default.
    pub(crate) fn new(
        name: &str,
        table: Arc<Mutex<TableSettings>>,
        getter: Getter<Vec<T>>,
        setter: Setter<Vec<T>>,
    ) -> Self {
        let default_values = getter();
        Self {
            meta: ColumnMeta::new(name, ValueType::of::<T>(), FilterOp::MULTI_DEFAULT, table),
            getter,
            setter,
            default_values,
        }
    }

    /// Current values of the bound field.
    pub fn values(&self) -> Vec<T> {
        (self.getter)()
    }

    /// Replace the bound sequence.
    pub fn set_values(&self, values: Vec<T>) {
        (self.setter)(values);
    }

    /// Sequence captured at registration.
    pub fn default_values(&self) -> &[T] {
        &self.default_values
    }
}

impl<T: ColumnValue> Column for ValuesColumn<T> {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Multi
    }

    delegate_column_meta!();

    fn reset_value(&self) {
        trace!(
            column = self.meta.name(),
            len = self.default_values.len(),
            "Resetting column values"
        );
        self.set_values(self.default_values.clone());
        self.meta.set_order_by(OrderBy::None);
    }

    fn filter_value(&self) -> FilterValue {
        FilterValue::List(self.values().iter().map(|v| v.to_filter_value()).collect())
    }
}

impl<T> fmt::Debug for ValuesColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ValuesColumn");
        self.meta.fmt_fields(&mut s);
        s.finish_non_exhaustive()
    }
}
