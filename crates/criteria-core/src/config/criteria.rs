//! Session defaults for newly built criteria sets.

use serde::{Deserialize, Serialize};

use crate::types::{UNLIMITED_RESULTS, WHERE_AND};

/// Table-level defaults applied when a criteria set is built from config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaConfig {
    /// Logical table the criteria filter; `None` leaves it unset.
    #[serde(default)]
    pub table_name: Option<String>,
    /// Result cap; [`UNLIMITED_RESULTS`] disables it.
    #[serde(default = "default_max_results")]
    pub max_results: i32,
    /// Combinator joining enabled conditions (`"AND"` or `"OR"`).
    #[serde(default = "default_where_logic")]
    pub where_logic: String,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        Self {
            table_name: None,
            max_results: default_max_results(),
            where_logic: default_where_logic(),
        }
    }
}

fn default_max_results() -> i32 {
    UNLIMITED_RESULTS
}

fn default_where_logic() -> String {
    WHERE_AND.to_string()
}
