//! The criteria set: table-level query settings plus an ordered collection
//! of column descriptors.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use criteria_core::config::criteria::CriteriaConfig;
use criteria_core::types::{UNLIMITED_RESULTS, WHERE_AND};
use tracing::debug;

use crate::column::{Column, ColumnKind, ColumnValue, ValueColumn, ValuesColumn};

/// Table-level settings, shared with every column of the set so columns can
/// report the current table name.
#[derive(Debug, Clone)]
pub(crate) struct TableSettings {
    pub(crate) table_name: Option<String>,
    pub(crate) max_results: i32,
    pub(crate) where_logic: Option<String>,
}

impl TableSettings {
    pub(crate) fn new(table_name: Option<String>, max_results: i32) -> Self {
        Self {
            table_name,
            max_results,
            where_logic: Some(WHERE_AND.to_string()),
        }
    }
}

/// Filter/sort criteria for one logical table.
///
/// Columns are kept in registration order and handed out sorted by
/// `(sort_order, column_name)`, so the order callers observe never depends
/// on which thread registered first or on later sort-order changes.
pub struct Criteria {
    name: &'static str,
    settings: Arc<Mutex<TableSettings>>,
    columns: RwLock<Vec<Arc<dyn Column>>>,
}

impl Criteria {
    /// Empty criteria with no table name and no result cap.
    pub fn new() -> Self {
        Self::build("Criteria", None, UNLIMITED_RESULTS)
    }

    /// Empty criteria for the given table, with no result cap.
    pub fn with_table_name(table_name: impl Into<String>) -> Self {
        Self::build("Criteria", Some(table_name.into()), UNLIMITED_RESULTS)
    }

    /// Empty criteria for the given table and result cap.
    pub fn with_max_results(table_name: impl Into<String>, max_results: i32) -> Self {
        Self::build("Criteria", Some(table_name.into()), max_results)
    }

    /// Empty criteria seeded from configured session defaults.
    pub fn from_config(config: &CriteriaConfig) -> Self {
        let criteria = Self::build("Criteria", config.table_name.clone(), config.max_results);
        criteria.set_where_logic(Some(config.where_logic.as_str()));
        criteria
    }

    pub(crate) fn build(name: &'static str, table_name: Option<String>, max_results: i32) -> Self {
        Self {
            name,
            settings: Arc::new(Mutex::new(TableSettings::new(table_name, max_results))),
            columns: RwLock::new(Vec::new()),
        }
    }

    fn settings(&self) -> MutexGuard<'_, TableSettings> {
        self.settings.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Logical table the criteria filter.
    pub fn table_name(&self) -> Option<String> {
        self.settings().table_name.clone()
    }

    /// Replace the table name. Blank names are accepted as-is.
    pub fn set_table_name(&self, table_name: Option<&str>) {
        self.settings().table_name = table_name.map(str::to_string);
    }

    /// Result cap; [`UNLIMITED_RESULTS`] means no cap.
    pub fn max_results(&self) -> i32 {
        self.settings().max_results
    }

    /// Replace the result cap.
    pub fn set_max_results(&self, max_results: i32) {
        self.settings().max_results = max_results;
    }

    /// The result cap as a row limit, `None` when unlimited.
    ///
    /// Any negative cap is treated as unlimited.
    pub fn result_limit(&self) -> Option<u32> {
        u32::try_from(self.max_results()).ok()
    }

    /// Combinator joining enabled conditions.
    ///
    /// A missing or blank value heals to `"AND"` on read.
    pub fn where_logic(&self) -> String {
        let mut settings = self.settings();
        let blank = settings
            .where_logic
            .as_deref()
            .is_none_or(|logic| logic.trim().is_empty());
        if blank {
            debug!(table = ?settings.table_name, "Where-logic was blank, defaulting to AND");
            settings.where_logic = Some(WHERE_AND.to_string());
        }
        settings
            .where_logic
            .clone()
            .unwrap_or_else(|| WHERE_AND.to_string())
    }

    /// Replace the combinator. Not validated.
    pub fn set_where_logic(&self, logic: Option<&str>) {
        self.settings().where_logic = logic.map(str::to_string);
    }

    /// Snapshot of all columns, ordered by sort order then column name.
    ///
    /// The handles are live: mutating a returned column mutates the set.
    pub fn all_columns(&self) -> Vec<Arc<dyn Column>> {
        let mut columns = self
            .columns
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        columns.sort_by_cached_key(|c| (c.sort_order(), c.column_name().to_string()));
        columns
    }

    /// First column with the given name, in column order.
    pub fn column(&self, name: &str) -> Option<Arc<dyn Column>> {
        self.all_columns()
            .into_iter()
            .find(|c| c.column_name() == name)
    }

    /// Typed handle to a single-value column.
    pub fn value_column<T: ColumnValue>(&self, name: &str) -> Option<Arc<ValueColumn<T>>> {
        self.all_columns()
            .into_iter()
            .filter(|c| c.column_name() == name && c.kind() == ColumnKind::Single)
            .find_map(|c| c.into_any().downcast::<ValueColumn<T>>().ok())
    }

    /// Typed handle to a multi-value column.
    pub fn values_column<T: ColumnValue>(&self, name: &str) -> Option<Arc<ValuesColumn<T>>> {
        self.all_columns()
            .into_iter()
            .filter(|c| c.column_name() == name && c.kind() == ColumnKind::Multi)
            .find_map(|c| c.into_any().downcast::<ValuesColumn<T>>().ok())
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no column is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a single-value column bound to `getter`/`setter`.
    ///
    /// The column's sort order is its 0-based registration index.
    pub fn add_column_value<T, G, S>(&self, name: &str, getter: G, setter: S) -> Arc<ValueColumn<T>>
    where
        T: ColumnValue,
        G: Fn() -> T + Send + Sync + 'static,
        S: Fn(T) + Send + Sync + 'static,
    {
        let column = Arc::new(ValueColumn::new(
            name,
            Arc::clone(&self.settings),
            Box::new(getter),
            Box::new(setter),
        ));
        self.register(Arc::clone(&column) as Arc<dyn Column>);
        column
    }

    /// Register a multi-value column bound to `getter`/`setter`.
    ///
    /// The column's sort order is its 0-based registration index.
    pub fn add_column_values<T, G, S>(
        &self,
        name: &str,
        getter: G,
        setter: S,
    ) -> Arc<ValuesColumn<T>>
    where
        T: ColumnValue,
        G: Fn() -> Vec<T> + Send + Sync + 'static,
        S: Fn(Vec<T>) + Send + Sync + 'static,
    {
        let column = Arc::new(ValuesColumn::new(
            name,
            Arc::clone(&self.settings),
            Box::new(getter),
            Box::new(setter),
        ));
        self.register(Arc::clone(&column) as Arc<dyn Column>);
        column
    }

    fn register(&self, column: Arc<dyn Column>) {
        let mut columns = self.columns.write().unwrap_or_else(|e| e.into_inner());
        let sort_order = i32::try_from(columns.len()).unwrap_or(i32::MAX);
        column.set_sort_order(Some(sort_order));
        debug!(
            criteria = self.name,
            column = column.column_name(),
            kind = ?column.kind(),
            sort_order,
            "Registered column"
        );
        columns.push(column);
    }

    /// Reset every column to its registration-time value.
    pub fn reset_values(&self) {
        for column in self.all_columns() {
            column.reset_value();
        }
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [tableName={}]",
            self.name,
            self.table_name().unwrap_or_default()
        )
    }
}

impl fmt::Debug for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings().clone();
        f.debug_struct("Criteria")
            .field("name", &self.name)
            .field("table_name", &settings.table_name)
            .field("max_results", &settings.max_results)
            .field("where_logic", &settings.where_logic)
            .field("columns", &self.all_columns())
            .finish()
    }
}
