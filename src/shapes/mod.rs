//! Shape catalogue: per-shape schemas, validation, and closed-form
//! properties, dispatched over a closed set of variants.

pub(crate) mod circular;
pub(crate) mod composite;
pub(crate) mod polygon;
pub(crate) mod rectangle;

pub(crate) use composite::CompositeSection;

use crate::dimensions::Dimensions;
use crate::error::SectionError;
use crate::transform::{Point2, Tensor2};
use crate::vertices::VertexArray;

/// Maximum number of vertices a triangle accepts.
pub(crate) const TRIANGLE_CAPACITY: usize = 3;

/// Signed local properties of a shape: area (density included), centroid in
/// the shape frame, and the inertia tensor about the centroid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalProperties {
    pub a: f64,
    pub cog: Point2,
    pub i0: Tensor2,
}

/// The closed set of section shapes.
#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    Rectangle,
    CircularSector,
    CircularSegment,
    Polygon(VertexArray),
    Triangle(VertexArray),
    Composite(CompositeSection),
}

impl ShapeKind {
    /// Shape name for error messages and logs.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::CircularSector => "circular sector",
            Self::CircularSegment => "circular segment",
            Self::Polygon(_) => "polygon",
            Self::Triangle(_) => "triangle",
            Self::Composite(body) => body.kind().name(),
        }
    }

    /// Declared dimension names of the shape.
    pub(crate) fn schema(&self) -> &'static [&'static str] {
        match self {
            Self::Rectangle => rectangle::SCHEMA,
            Self::CircularSector => circular::SECTOR_SCHEMA,
            Self::CircularSegment => circular::SEGMENT_SCHEMA,
            Self::Polygon(_) | Self::Triangle(_) => &[],
            Self::Composite(body) => body.kind().schema(),
        }
    }

    /// Shape-specific geometric validation of a complete candidate set.
    ///
    /// Reading an unset dimension surfaces as a not-set error, which callers
    /// treat as a validation failure of the incomplete candidate.
    pub(crate) fn validate(&self, dims: &Dimensions) -> Result<(), SectionError> {
        match self {
            Self::Rectangle => rectangle::validate(dims),
            Self::CircularSector => circular::validate_sector(dims),
            Self::CircularSegment => circular::validate_segment(dims),
            Self::Polygon(_) | Self::Triangle(_) => Ok(()),
            Self::Composite(body) => body.kind().validate(dims),
        }
    }

    /// Vertex capacity, for shapes with bounded vertex storage.
    pub(crate) fn vertex_capacity(&self) -> Option<usize> {
        match self {
            Self::Triangle(_) => Some(TRIANGLE_CAPACITY),
            _ => None,
        }
    }
}
