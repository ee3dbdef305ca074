//! Crate-wide error type for the section-property engine.

use crate::value::ValueKind;

/// Coarse classification of a [`SectionError`].
///
/// Mirrors the four failure families of the engine: reading state that was
/// never set, feeding a setter a value of the wrong type, supplying a value
/// that is the right type but geometrically or structurally invalid, and
/// indexing outside a vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A dimension, vertex slot, or derived property was read before its
    /// prerequisites were set.
    NotSet,
    /// A setter received a value of an unusable type.
    Type,
    /// A value of the right type violated a constraint.
    Value,
    /// An index fell outside a vertex sequence or its capacity.
    Index,
}

/// Errors produced by section construction, mutation, and property reads.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectionError {
    /// A named dimension is still unset.
    #[error("dimension '{0}' is not set")]
    DimensionNotSet(String),

    /// A vertex slot exists but holds no point yet.
    #[error("vertex {0} is not set")]
    VertexNotSet(usize),

    /// The shape's dimension schema does not contain the given name.
    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    /// A value of an unusable kind was passed to a setter. Booleans are
    /// rejected here even though the host language could coerce them to
    /// integers.
    #[error("cannot use a {found} value as a {expected}")]
    InvalidType {
        /// What the setter needed.
        expected: &'static str,
        /// What it was given.
        found: ValueKind,
    },

    /// A shape-specific geometric constraint was violated.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Density must be nonzero (negative densities are legal signed weights).
    #[error("density must be nonzero")]
    ZeroDensity,

    /// A composite density weight of zero would zero out a child's density.
    #[error("density weights must be nonzero")]
    ZeroWeight,

    /// A vertex index fell outside the current sequence length.
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The current number of vertex slots.
        len: usize,
    },

    /// A vertex mutation would exceed the shape's fixed capacity.
    #[error("a {shape} accepts at most {capacity} vertices")]
    VertexCapacityExceeded {
        /// Shape name, e.g. `"triangle"`.
        shape: &'static str,
        /// The fixed capacity.
        capacity: usize,
    },

    /// Polygon properties need at least three vertices.
    #[error("a polygon requires at least three vertices, got {0}")]
    TooFewVertices(usize),

    /// A range assignment tried to change the sequence length.
    #[error("range assignment must preserve the vertex count (expected {expected}, got {found})")]
    VertexCountMismatch {
        /// Slots currently in the array.
        expected: usize,
        /// Values supplied.
        found: usize,
    },

    /// A vertex value did not hold exactly two coordinates.
    #[error("a vertex requires exactly two coordinates, got {0}")]
    VertexArity(usize),

    /// A composite was built with differing child and weight counts.
    #[error("expected {children} density weights, got {weights}")]
    WeightCountMismatch {
        /// Number of child sections.
        children: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A compound section needs at least one child to superpose.
    #[error("a compound section requires at least one child")]
    NoChildren,

    /// A vertex operation was invoked on a shape without vertex storage.
    #[error("{shape} sections have no vertex storage")]
    NoVertexStorage {
        /// Shape name of the receiving section.
        shape: &'static str,
    },
}

impl SectionError {
    /// The taxonomy bucket this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DimensionNotSet(_) | Self::VertexNotSet(_) => ErrorKind::NotSet,
            Self::UnknownDimension(_) | Self::InvalidType { .. } | Self::NoVertexStorage { .. } => {
                ErrorKind::Type
            }
            Self::InvalidDimensions(_)
            | Self::ZeroDensity
            | Self::ZeroWeight
            | Self::TooFewVertices(_)
            | Self::VertexCountMismatch { .. }
            | Self::VertexArity(_)
            | Self::WeightCountMismatch { .. }
            | Self::NoChildren => ErrorKind::Value,
            Self::VertexIndexOutOfRange { .. } | Self::VertexCapacityExceeded { .. } => {
                ErrorKind::Index
            }
        }
    }
}
