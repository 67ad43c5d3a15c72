//! Core type definitions shared across the criteria workspace.

pub mod filter;
pub mod sorting;
pub mod value_type;

pub use filter::{FilterOp, FilterValue, ToFilterValue};
pub use sorting::OrderBy;
pub use value_type::ValueType;

/// Result-size cap meaning "no limit".
pub const UNLIMITED_RESULTS: i32 = -1;

/// Where-logic joining all enabled conditions with `AND`.
pub const WHERE_AND: &str = "AND";

/// Where-logic joining all enabled conditions with `OR`.
pub const WHERE_OR: &str = "OR";
