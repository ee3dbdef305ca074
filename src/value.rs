//! Dynamic input values for dimension and vertex setters.
//!
//! Setters accept a [`Value`] rather than a bare float so that the engine can
//! enforce its typing rules at run time: integral input is converted to
//! float, `Unset` clears a slot, and booleans, text, and malformed lists are
//! rejected with a typed error instead of being silently coerced.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SectionError;
use crate::transform::Point2;

/// A dynamically typed value handed to a dimension or vertex setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value; clears the target slot.
    Unset,
    /// An integral number, converted to float on assignment.
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// A boolean. Never accepted as a number.
    Boolean(bool),
    /// A text value. Never accepted as a number.
    Text(String),
    /// A list of values; a two-element numeric list is a vertex.
    List(Vec<Value>),
}

/// Variant name of a [`Value`]. Used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Unset,
    Integer,
    Number,
    Boolean,
    Text,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the variant name.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Unset => ValueKind::Unset,
            Self::Integer(_) => ValueKind::Integer,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Coerces to an optional dimension value.
    ///
    /// `Unset` yields `None`, integers and numbers yield the float value.
    /// Everything else, booleans included, is a type error.
    pub fn as_dimension(&self) -> Result<Option<f64>, SectionError> {
        match self {
            Self::Unset => Ok(None),
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Ok(Some(*i as f64)),
            Self::Number(x) => Ok(Some(*x)),
            other => Err(SectionError::InvalidType {
                expected: "dimension",
                found: other.kind(),
            }),
        }
    }

    /// Coerces to an optional vertex.
    ///
    /// `Unset` yields `None`; a two-element list of numeric values yields the
    /// point. A list of any other arity fails with [`SectionError::VertexArity`],
    /// and non-list or non-numeric input fails with a type error.
    pub fn as_vertex(&self) -> Result<Option<Point2>, SectionError> {
        match self {
            Self::Unset => Ok(None),
            Self::List(items) => {
                if items.len() != 2 {
                    return Err(SectionError::VertexArity(items.len()));
                }
                let x = coordinate(&items[0])?;
                let y = coordinate(&items[1])?;
                Ok(Some(Point2::new(x, y)))
            }
            other => Err(SectionError::InvalidType {
                expected: "vertex",
                found: other.kind(),
            }),
        }
    }
}

/// A single vertex coordinate: integer or number, nothing else.
fn coordinate(value: &Value) -> Result<f64, SectionError> {
    match value {
        #[allow(clippy::cast_precision_loss)]
        Value::Integer(i) => Ok(*i as f64),
        Value::Number(x) => Ok(*x),
        other => Err(SectionError::InvalidType {
            expected: "vertex coordinate",
            found: other.kind(),
        }),
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<(f64, f64)> for Value {
    fn from((x, y): (f64, f64)) -> Self {
        Self::List(vec![Self::Number(x), Self::Number(y)])
    }
}

impl From<(i64, i64)> for Value {
    fn from((x, y): (i64, i64)) -> Self {
        Self::List(vec![Self::Integer(x), Self::Integer(y)])
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}
