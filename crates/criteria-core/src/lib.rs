//! # criteria-core
//!
//! Core crate for the criteria model. Contains the unified error system,
//! configuration schemas, the filter/sort vocabulary shared by criteria
//! producers and query engines, and the column-name labeling helpers.
//!
//! This crate has **no** internal dependencies on other criteria crates.

pub mod config;
pub mod error;
pub mod naming;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
