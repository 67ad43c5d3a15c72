//! # criteria-model
//!
//! Typed filter/sort criteria. A [`Criteria`] set owns an ordered
//! collection of column descriptors, each a live view over one field of an
//! entity plus its filter metadata (label, enable state, sort position,
//! operator, order-by direction). Query engines read a set through
//! [`Criteria::all_columns`] and the table-level settings; [`FilterPlan`]
//! is a reference reader of that contract.

pub mod column;
pub mod criteria;
pub mod entity;
pub mod field;
pub mod plan;

pub use column::{Column, ColumnKind, ColumnValue, ValueColumn, ValuesColumn};
pub use criteria::Criteria;
pub use entity::{CriteriaEntity, EntityCriteria};
pub use field::FieldCell;
pub use plan::{Condition, FilterPlan, SortKey};
