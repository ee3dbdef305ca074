//! The section base: validated state plus memoized derived properties.
//!
//! A [`Section`] owns a shape variant, a density, a placement in the global
//! frame, and its named dimensions. The seven derived properties (signed
//! area, centroid and inertia tensors in both frames) are computed lazily as
//! one bundle and cached until the next mutation; every setter invalidates
//! the cache before it returns, so reads can never observe stale values.

use std::cell::Cell;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::error::SectionError;
use crate::shapes::{self, CompositeSection, LocalProperties, ShapeKind};
use crate::transform::{Point2, Position, Tensor2, parallel_axis};
use crate::value::Value;
use crate::vertices::VertexArray;

/// All derived properties of a section, in computation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Signed area times density.
    pub area: f64,
    /// Centroid in the shape's local frame.
    pub local_cog: Point2,
    /// Inertia tensor about the centroid, local orientation.
    pub local_inertia_cog: Tensor2,
    /// Inertia tensor about the shape origin, local orientation.
    pub local_inertia: Tensor2,
    /// Centroid in the global frame.
    pub cog: Point2,
    /// Inertia tensor about the global centroid position.
    pub inertia_cog: Tensor2,
    /// Inertia tensor about the global origin.
    pub inertia: Tensor2,
}

/// Memoized derived-property bundle.
#[derive(Debug, Clone, Copy)]
struct Derived {
    a: f64,
    cog_local: Point2,
    i0_local: Tensor2,
    i_local: Tensor2,
    cog: Point2,
    i0: Tensor2,
    i: Tensor2,
}

/// A planar cross-section with density, placement, and cached properties.
#[derive(Debug, Clone)]
pub struct Section {
    kind: ShapeKind,
    density: f64,
    position: Position,
    dimensions: Dimensions,
    cache: Cell<Option<Derived>>,
}

impl Section {
    fn from_kind(kind: ShapeKind) -> Self {
        let schema = kind.schema();
        let mut section = Self {
            kind,
            density: 1.0,
            position: Position::IDENTITY,
            dimensions: Dimensions::new(schema),
            cache: Cell::new(None),
        };
        if let ShapeKind::Composite(body) = &mut section.kind {
            body.propagate_density(1.0);
        }
        section
    }

    /// Solid rectangle with sides `a` and `b`.
    #[must_use]
    pub fn rectangle() -> Self {
        Self::from_kind(ShapeKind::Rectangle)
    }

    /// Annular sector with radii `ro`, `ri` and opening `phi`.
    #[must_use]
    pub fn circular_sector() -> Self {
        Self::from_kind(ShapeKind::CircularSector)
    }

    /// Chord-cut circular segment with radius `r` and opening `phi`.
    #[must_use]
    pub fn circular_segment() -> Self {
        Self::from_kind(ShapeKind::CircularSegment)
    }

    /// Simple polygon over an ordered vertex sequence.
    #[must_use]
    pub fn polygon() -> Self {
        Self::from_kind(ShapeKind::Polygon(VertexArray::default()))
    }

    /// Triangle: a polygon capped at three vertices whose winding is
    /// normalized after every mutation.
    #[must_use]
    pub fn triangle() -> Self {
        Self::from_kind(ShapeKind::Triangle(VertexArray::default()))
    }

    /// Full circle with radius `r`.
    #[must_use]
    pub fn circle() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::circle()))
    }

    /// Circular ring with radii `ro` and `ri`.
    #[must_use]
    pub fn ring() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::ring()))
    }

    /// Circular wedge with radius `r` and opening `phi`.
    #[must_use]
    pub fn wedge() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::wedge()))
    }

    /// Thin-walled rectangular tube with outer sides `a`, `b` and wall
    /// thicknesses `ta`, `tb`.
    #[must_use]
    pub fn box_section() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::box_section()))
    }

    /// Rounded corner with radius `r`, symmetric about the local x-axis,
    /// between legs opening by `phi`.
    #[must_use]
    pub fn base_fillet() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::base_fillet()))
    }

    /// Rounded corner with radius `r` between legs pointing along the
    /// directions `phi0` and `phi1`.
    #[must_use]
    pub fn fillet() -> Self {
        Self::from_kind(ShapeKind::Composite(CompositeSection::fillet()))
    }

    /// Free-form signed superposition of caller-dimensioned children.
    ///
    /// `weights` are relative density multipliers, one per child; negative
    /// weights subtract material. The children's densities are overwritten
    /// with `density * weight` immediately and on every later density change.
    pub fn compound(children: Vec<Section>, weights: Vec<f64>) -> Result<Self, SectionError> {
        let body = CompositeSection::compound(children, weights)?;
        Ok(Self::from_kind(ShapeKind::Composite(body)))
    }

    /// Set the density at construction time.
    pub fn with_density(mut self, density: f64) -> Result<Self, SectionError> {
        self.set_density(density)?;
        Ok(self)
    }

    /// Provide any subset of the declared dimensions at construction time.
    ///
    /// Entries are type-checked and committed; once every declared dimension
    /// holds a value the shape's geometric validation runs and, for
    /// composites, the children are derived. An incomplete set is legal and
    /// leaves every derived property unreadable until completed.
    pub fn with_dimensions(mut self, entries: &[(&str, Value)]) -> Result<Self, SectionError> {
        self.dimensions.update(entries)?;
        if self.dimensions.is_complete() {
            self.kind.validate(&self.dimensions)?;
            self.invalidate();
            self.recompute_children()?;
        }
        Ok(self)
    }

    /// Shape name, e.g. `"rectangle"` or `"base fillet"`.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Current density.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Current placement in the global frame.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Read a named dimension.
    pub fn dimension(&self, name: &str) -> Result<f64, SectionError> {
        self.dimensions.get(name)
    }

    /// The declared dimension names.
    #[must_use]
    pub fn dimension_names(&self) -> &'static [&'static str] {
        self.dimensions.names()
    }

    /// Set the density.
    ///
    /// Zero is rejected; negative densities are legal and flip the sign of
    /// every mass-weighted property. Composites re-apply
    /// `density * weight[i]` to each child.
    pub fn set_density(&mut self, density: f64) -> Result<(), SectionError> {
        if density == 0.0 {
            return Err(SectionError::ZeroDensity);
        }
        self.assign_density(density);
        Ok(())
    }

    /// Unchecked density assignment used for composite child propagation.
    pub(crate) fn assign_density(&mut self, density: f64) {
        self.density = density;
        self.invalidate();
        if let ShapeKind::Composite(body) = &mut self.kind {
            body.propagate_density(density);
        }
    }

    /// Update any subset of the placement; `None` components are retained.
    ///
    /// Placement only affects global-frame properties, never the local ones.
    pub fn set_position(&mut self, d1: Option<f64>, d2: Option<f64>, theta: Option<f64>) {
        if let Some(x) = d1 {
            self.position.x = x;
        }
        if let Some(y) = d2 {
            self.position.y = y;
        }
        if let Some(t) = theta {
            self.position.theta = t;
        }
        self.invalidate();
    }

    /// Update dimensions, all-or-nothing.
    ///
    /// The update is merged into a candidate copy, the candidate is
    /// type-checked and geometrically validated as a whole, and only then
    /// committed. Any failure, including a still-unset dimension, leaves the
    /// previous dimensions untouched. Composites re-derive their children
    /// from the committed set.
    pub fn set_dimensions(&mut self, entries: &[(&str, Value)]) -> Result<(), SectionError> {
        let mut candidate = self.dimensions.clone();
        candidate.update(entries)?;
        self.kind.validate(&candidate)?;
        self.dimensions = candidate;
        self.invalidate();
        self.recompute_children()
    }

    fn recompute_children(&mut self) -> Result<(), SectionError> {
        let density = self.density;
        if let ShapeKind::Composite(body) = &mut self.kind {
            body.recompute_children(&self.dimensions, density)?;
        }
        Ok(())
    }

    // ── Derived properties ──────────────────────────────────────────────

    /// Signed area times density.
    pub fn area(&self) -> Result<f64, SectionError> {
        Ok(self.derived()?.a)
    }

    /// Centroid in the local frame.
    pub fn local_cog(&self) -> Result<Point2, SectionError> {
        Ok(self.derived()?.cog_local)
    }

    /// Inertia tensor about the centroid, local orientation.
    pub fn local_inertia_cog(&self) -> Result<Tensor2, SectionError> {
        Ok(self.derived()?.i0_local)
    }

    /// Inertia tensor about the shape origin, local orientation.
    pub fn local_inertia(&self) -> Result<Tensor2, SectionError> {
        Ok(self.derived()?.i_local)
    }

    /// Centroid in the global frame.
    pub fn cog(&self) -> Result<Point2, SectionError> {
        Ok(self.derived()?.cog)
    }

    /// Inertia tensor about the centroid, global orientation.
    pub fn inertia_cog(&self) -> Result<Tensor2, SectionError> {
        Ok(self.derived()?.i0)
    }

    /// Inertia tensor about the global origin.
    pub fn inertia(&self) -> Result<Tensor2, SectionError> {
        Ok(self.derived()?.i)
    }

    /// All seven derived properties as one serializable report.
    pub fn properties(&self) -> Result<SectionProperties, SectionError> {
        let d = self.derived()?;
        Ok(SectionProperties {
            area: d.a,
            local_cog: d.cog_local,
            local_inertia_cog: d.i0_local,
            local_inertia: d.i_local,
            cog: d.cog,
            inertia_cog: d.i0,
            inertia: d.i,
        })
    }

    /// Transform a local-frame point into the global frame.
    #[must_use]
    pub fn transform_point_to_global(&self, p: Point2) -> Point2 {
        self.position.transform_point(p)
    }

    /// Rotate a symmetric tensor into the global frame. Translation never
    /// affects tensors.
    #[must_use]
    pub fn transform_tensor_to_global(&self, t: Tensor2) -> Tensor2 {
        self.position.rotate_tensor(t)
    }

    /// Parallel-axis shift of a tensor using this section's signed area.
    pub fn parallel_axis(
        &self,
        t: Tensor2,
        offset: Point2,
        reverse: bool,
    ) -> Result<Tensor2, SectionError> {
        Ok(parallel_axis(t, self.area()?, offset, reverse))
    }

    fn invalidate(&mut self) {
        self.cache.set(None);
    }

    fn derived(&self) -> Result<Derived, SectionError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }
        let LocalProperties { a, cog, i0 } = self.local_properties()?;
        let i_local = parallel_axis(i0, a, cog, false);
        let global_cog = self.position.transform_point(cog);
        let global_i0 = self.position.rotate_tensor(i0);
        let i = parallel_axis(global_i0, a, global_cog, false);
        let bundle = Derived {
            a,
            cog_local: cog,
            i0_local: i0,
            i_local,
            cog: global_cog,
            i0: global_i0,
            i,
        };
        self.cache.set(Some(bundle));
        trace!("recomputed derived properties of a {}", self.shape_name());
        Ok(bundle)
    }

    fn local_properties(&self) -> Result<LocalProperties, SectionError> {
        match &self.kind {
            ShapeKind::Rectangle => shapes::rectangle::local_properties(&self.dimensions, self.density),
            ShapeKind::CircularSector => {
                shapes::circular::sector_local_properties(&self.dimensions, self.density)
            }
            ShapeKind::CircularSegment => {
                shapes::circular::segment_local_properties(&self.dimensions, self.density)
            }
            ShapeKind::Polygon(vertices) | ShapeKind::Triangle(vertices) => {
                shapes::polygon::local_properties(vertices, self.density)
            }
            ShapeKind::Composite(body) => body.aggregate(),
        }
    }

    // ── Vertex access for polygonal shapes ──────────────────────────────

    /// Number of vertex slots.
    pub fn vertex_count(&self) -> Result<usize, SectionError> {
        Ok(self.vertex_array()?.len())
    }

    /// Read the vertex in slot `index`.
    pub fn vertex(&self, index: usize) -> Result<Point2, SectionError> {
        self.vertex_array()?.get(index)
    }

    /// Append one vertex.
    pub fn push_vertex(&mut self, value: Value) -> Result<(), SectionError> {
        let (vertices, capacity) = self.vertex_parts()?;
        check_capacity(capacity, vertices.len() + 1)?;
        let end = vertices.len();
        vertices.insert(end, &value)?;
        self.after_vertex_mutation();
        Ok(())
    }

    /// Append several vertices; nothing is committed if any value is bad.
    pub fn extend_vertices(&mut self, values: &[Value]) -> Result<(), SectionError> {
        for value in values {
            value.as_vertex()?;
        }
        let (vertices, capacity) = self.vertex_parts()?;
        check_capacity(capacity, vertices.len() + values.len())?;
        for value in values {
            let end = vertices.len();
            vertices.insert(end, value)?;
        }
        self.after_vertex_mutation();
        Ok(())
    }

    /// Insert one vertex at `index`, shifting the tail.
    pub fn insert_vertex(&mut self, index: usize, value: Value) -> Result<(), SectionError> {
        let (vertices, capacity) = self.vertex_parts()?;
        check_capacity(capacity, vertices.len() + 1)?;
        vertices.insert(index, &value)?;
        self.after_vertex_mutation();
        Ok(())
    }

    /// Replace the vertex in slot `index`. `Unset` clears the slot.
    pub fn set_vertex(&mut self, index: usize, value: Value) -> Result<(), SectionError> {
        let (vertices, _) = self.vertex_parts()?;
        vertices.set(index, &value)?;
        self.after_vertex_mutation();
        Ok(())
    }

    /// Resize the vertex sequence, padding with unset slots or truncating.
    pub fn set_vertex_count(&mut self, n: usize) -> Result<(), SectionError> {
        let (vertices, capacity) = self.vertex_parts()?;
        check_capacity(capacity, n)?;
        vertices.resize(n);
        self.after_vertex_mutation();
        Ok(())
    }

    /// Replace the whole vertex list, resizing to fit.
    ///
    /// Every value is coerced before anything is committed.
    pub fn assign_vertices(&mut self, values: &[Value]) -> Result<(), SectionError> {
        for value in values {
            value.as_vertex()?;
        }
        let (vertices, capacity) = self.vertex_parts()?;
        check_capacity(capacity, values.len())?;
        vertices.resize(values.len());
        vertices.set_range(values)?;
        self.after_vertex_mutation();
        Ok(())
    }

    fn vertex_array(&self) -> Result<&VertexArray, SectionError> {
        match &self.kind {
            ShapeKind::Polygon(vertices) | ShapeKind::Triangle(vertices) => Ok(vertices),
            other => Err(SectionError::NoVertexStorage {
                shape: other.name(),
            }),
        }
    }

    fn vertex_parts(&mut self) -> Result<(&mut VertexArray, Option<usize>), SectionError> {
        let capacity = self.kind.vertex_capacity();
        match &mut self.kind {
            ShapeKind::Polygon(vertices) | ShapeKind::Triangle(vertices) => {
                Ok((vertices, capacity))
            }
            other => Err(SectionError::NoVertexStorage {
                shape: other.name(),
            }),
        }
    }

    fn after_vertex_mutation(&mut self) {
        if let ShapeKind::Triangle(vertices) = &mut self.kind {
            shapes::polygon::normalize_triangle(vertices);
        }
        self.invalidate();
    }
}

fn check_capacity(capacity: Option<usize>, needed: usize) -> Result<(), SectionError> {
    match capacity {
        Some(limit) if needed > limit => Err(SectionError::VertexCapacityExceeded {
            shape: "triangle",
            capacity: limit,
        }),
        _ => Ok(()),
    }
}
