//! Per-column ordering directive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether, and in which direction, a column participates in result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// The column does not take part in ordering.
    #[default]
    None,
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderBy {
    /// Return the SQL keyword for this direction, if any.
    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Asc => Some("ASC"),
            Self::Desc => Some("DESC"),
        }
    }

    /// Whether this directive orders results at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}
