//! Filter vocabulary shared by criteria producers and query engines.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Standard comparison operators.
///
/// Column operators are free-form tokens; this enum names the common ones
/// and supplies the defaults for both column variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// SQL `LIKE` pattern match.
    Like,
    /// SQL `ILIKE` case-insensitive pattern match.
    ILike,
    /// SQL `IN` list membership.
    In,
    /// SQL `NOT IN` list exclusion.
    NotIn,
    /// SQL `BETWEEN` inclusive range.
    Between,
    /// SQL `IS NULL` check.
    IsNull,
    /// SQL `IS NOT NULL` check.
    IsNotNull,
}

impl FilterOp {
    /// Default operator of a single-value column.
    pub const SINGLE_DEFAULT: Self = Self::Eq;
    /// Default operator of a multi-value column.
    pub const MULTI_DEFAULT: Self = Self::In;

    /// Return the operator token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }

    /// Whether the operator compares against a value at all.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// Whether the operator expects a list of values.
    pub fn takes_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn | Self::Between)
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match token.to_uppercase().as_str() {
            "=" | "==" => Ok(Self::Eq),
            "<>" | "!=" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Gte),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Lte),
            "LIKE" => Ok(Self::Like),
            "ILIKE" => Ok(Self::ILike),
            "IN" => Ok(Self::In),
            "NOT IN" => Ok(Self::NotIn),
            "BETWEEN" => Ok(Self::Between),
            "IS NULL" => Ok(Self::IsNull),
            "IS NOT NULL" => Ok(Self::IsNotNull),
            _ => Err(AppError::validation(format!("Unknown filter operator '{s}'"))),
        }
    }
}

impl From<FilterOp> for String {
    fn from(op: FilterOp) -> Self {
        op.as_str().to_string()
    }
}

/// A dynamic filter value a query engine can bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// No value.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value (also used for identifiers and timestamps).
    String(String),
    /// An ordered list of values, for multi-value columns.
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Whether there is nothing to filter on: `Null` or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// Conversion of a bound element type into a [`FilterValue`].
///
/// Implemented for the common scalar types; implement it for custom
/// element types to bind them to columns.
pub trait ToFilterValue {
    /// Convert the value.
    fn to_filter_value(&self) -> FilterValue;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl ToFilterValue for $ty {
                fn to_filter_value(&self) -> FilterValue {
                    FilterValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl ToFilterValue for $ty {
                fn to_filter_value(&self) -> FilterValue {
                    i64::try_from(*self)
                        .map(FilterValue::Integer)
                        .unwrap_or_else(|_| FilterValue::String(self.to_string()))
                }
            }
        )*
    };
}

impl_wide_integer!(u64, usize, isize);

impl ToFilterValue for f32 {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::Float(f64::from(*self))
    }
}

impl ToFilterValue for f64 {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::Float(*self)
    }
}

impl ToFilterValue for bool {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::Boolean(*self)
    }
}

impl ToFilterValue for char {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.to_string())
    }
}

impl ToFilterValue for str {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.to_string())
    }
}

impl ToFilterValue for String {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.clone())
    }
}

impl ToFilterValue for Uuid {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.to_string())
    }
}

impl ToFilterValue for NaiveDate {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.format("%Y-%m-%d").to_string())
    }
}

impl ToFilterValue for NaiveDateTime {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl<Tz> ToFilterValue for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.to_rfc3339())
    }
}

impl ToFilterValue for FilterValue {
    fn to_filter_value(&self) -> FilterValue {
        self.clone()
    }
}

impl<T: ToFilterValue + ?Sized> ToFilterValue for &T {
    fn to_filter_value(&self) -> FilterValue {
        (**self).to_filter_value()
    }
}

impl<T: ToFilterValue> ToFilterValue for Option<T> {
    fn to_filter_value(&self) -> FilterValue {
        self.as_ref()
            .map_or(FilterValue::Null, ToFilterValue::to_filter_value)
    }
}

impl<T: ToFilterValue> ToFilterValue for Vec<T> {
    fn to_filter_value(&self) -> FilterValue {
        self.as_slice().to_filter_value()
    }
}

impl<T: ToFilterValue> ToFilterValue for [T] {
    fn to_filter_value(&self) -> FilterValue {
        FilterValue::List(self.iter().map(ToFilterValue::to_filter_value).collect())
    }
}
