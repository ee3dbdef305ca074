//! Composite sections built by signed superposition of child sections.
//!
//! A composite owns its children outright together with a parallel list of
//! density weights. Setting the composite's dimensions re-derives every
//! child's dimensions (and placement, where relevant) from the composite's
//! own; setting its density assigns `density * weight[i]` to every child.
//! Aggregated properties come from the children's composite-frame values via
//! the parallel-axis theorem.

use std::f64::consts::{PI, TAU};

use log::debug;

use crate::dimensions::Dimensions;
use crate::error::SectionError;
use crate::section::Section;
use crate::shapes::LocalProperties;
use crate::transform::{Point2, Tensor2, parallel_axis};
use crate::value::Value;

/// The closed set of composite shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompositeKind {
    Circle,
    Ring,
    Wedge,
    Box,
    BaseFillet,
    Fillet,
    Compound,
}

impl CompositeKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ring => "ring",
            Self::Wedge => "wedge",
            Self::Box => "box",
            Self::BaseFillet => "base fillet",
            Self::Fillet => "fillet",
            Self::Compound => "compound",
        }
    }

    pub(crate) fn schema(self) -> &'static [&'static str] {
        match self {
            Self::Circle => &["r"],
            Self::Ring => &["ro", "ri"],
            Self::Wedge => &["r", "phi"],
            Self::Box => &["a", "b", "ta", "tb"],
            Self::BaseFillet => &["r", "phi"],
            Self::Fillet => &["r", "phi0", "phi1"],
            Self::Compound => &[],
        }
    }

    pub(crate) fn validate(self, dims: &Dimensions) -> Result<(), SectionError> {
        match self {
            Self::Circle => {
                let r = dims.get("r")?;
                positive("radius", r)
            }
            Self::Ring => {
                let ro = dims.get("ro")?;
                let ri = dims.get("ri")?;
                positive("inner radius", ri)?;
                if ro <= ri {
                    return Err(SectionError::InvalidDimensions(format!(
                        "outer radius must exceed the inner radius, got ro={ro}, ri={ri}"
                    )));
                }
                Ok(())
            }
            Self::Wedge => {
                let r = dims.get("r")?;
                let phi = dims.get("phi")?;
                positive("radius", r)?;
                if phi <= 0.0 || phi > TAU {
                    return Err(SectionError::InvalidDimensions(format!(
                        "opening angle must lie in (0, 2*pi], got phi={phi}"
                    )));
                }
                Ok(())
            }
            Self::Box => {
                let a = dims.get("a")?;
                let b = dims.get("b")?;
                let ta = dims.get("ta")?;
                let tb = dims.get("tb")?;
                positive("side a", a)?;
                positive("side b", b)?;
                positive("wall thickness ta", ta)?;
                positive("wall thickness tb", tb)?;
                if a <= 2.0 * tb || b <= 2.0 * ta {
                    return Err(SectionError::InvalidDimensions(format!(
                        "walls must leave an open cavity, got a={a}, b={b}, ta={ta}, tb={tb}"
                    )));
                }
                Ok(())
            }
            Self::BaseFillet => {
                let r = dims.get("r")?;
                let phi = dims.get("phi")?;
                positive("radius", r)?;
                fillet_opening(phi)
            }
            Self::Fillet => {
                let r = dims.get("r")?;
                let phi0 = dims.get("phi0")?;
                let phi1 = dims.get("phi1")?;
                positive("radius", r)?;
                if phi1 <= phi0 {
                    return Err(SectionError::InvalidDimensions(format!(
                        "leg angles must be ordered, got phi0={phi0}, phi1={phi1}"
                    )));
                }
                fillet_opening(phi1 - phi0)
            }
            Self::Compound => Ok(()),
        }
    }
}

fn positive(what: &str, value: f64) -> Result<(), SectionError> {
    if value <= 0.0 {
        return Err(SectionError::InvalidDimensions(format!(
            "{what} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Fillet openings live in `(0, 2π)` and cannot be the degenerate straight
/// corner `π`.
fn fillet_opening(phi: f64) -> Result<(), SectionError> {
    if phi <= 0.0 || phi >= TAU || phi == PI {
        return Err(SectionError::InvalidDimensions(format!(
            "fillet opening must lie in (0, 2*pi) and differ from pi, got phi={phi}"
        )));
    }
    Ok(())
}

/// Children and signed density weights of a composite section.
#[derive(Debug, Clone)]
pub(crate) struct CompositeSection {
    kind: CompositeKind,
    children: Vec<Section>,
    weights: Vec<f64>,
}

impl CompositeSection {
    pub(crate) fn circle() -> Self {
        Self {
            kind: CompositeKind::Circle,
            children: vec![Section::circular_sector()],
            weights: vec![1.0],
        }
    }

    pub(crate) fn ring() -> Self {
        Self {
            kind: CompositeKind::Ring,
            children: vec![Section::circular_sector()],
            weights: vec![1.0],
        }
    }

    pub(crate) fn wedge() -> Self {
        Self {
            kind: CompositeKind::Wedge,
            children: vec![Section::circular_sector()],
            weights: vec![1.0],
        }
    }

    pub(crate) fn box_section() -> Self {
        Self {
            kind: CompositeKind::Box,
            children: vec![Section::polygon()],
            weights: vec![1.0],
        }
    }

    pub(crate) fn base_fillet() -> Self {
        Self {
            kind: CompositeKind::BaseFillet,
            children: vec![Section::triangle(), Section::circular_segment()],
            weights: vec![1.0, -1.0],
        }
    }

    pub(crate) fn fillet() -> Self {
        Self {
            kind: CompositeKind::Fillet,
            children: vec![Section::base_fillet()],
            weights: vec![1.0],
        }
    }

    /// Free-form superposition of caller-supplied children.
    pub(crate) fn compound(
        children: Vec<Section>,
        weights: Vec<f64>,
    ) -> Result<Self, SectionError> {
        if children.is_empty() {
            return Err(SectionError::NoChildren);
        }
        if weights.len() != children.len() {
            return Err(SectionError::WeightCountMismatch {
                children: children.len(),
                weights: weights.len(),
            });
        }
        if weights.iter().any(|w| *w == 0.0) {
            return Err(SectionError::ZeroWeight);
        }
        Ok(Self {
            kind: CompositeKind::Compound,
            children,
            weights,
        })
    }

    pub(crate) fn kind(&self) -> CompositeKind {
        self.kind
    }

    /// Assign `density * weight[i]` to every child, recursively.
    pub(crate) fn propagate_density(&mut self, density: f64) {
        for (child, weight) in self.children.iter_mut().zip(&self.weights) {
            child.assign_density(density * weight);
        }
    }

    /// Re-derive every child's dimensions and placement from the composite's
    /// committed dimensions, then re-apply child densities.
    ///
    /// Callers validate the composite dimensions first, which guarantees the
    /// derived child dimensions pass the children's own validation.
    pub(crate) fn recompute_children(
        &mut self,
        dims: &Dimensions,
        density: f64,
    ) -> Result<(), SectionError> {
        match self.kind {
            CompositeKind::Circle => {
                let r = dims.get("r")?;
                self.children[0].set_dimensions(&[
                    ("ro", Value::from(r)),
                    ("ri", Value::from(0.0)),
                    ("phi", Value::from(TAU)),
                ])?;
            }
            CompositeKind::Ring => {
                let ro = dims.get("ro")?;
                let ri = dims.get("ri")?;
                self.children[0].set_dimensions(&[
                    ("ro", Value::from(ro)),
                    ("ri", Value::from(ri)),
                    ("phi", Value::from(TAU)),
                ])?;
            }
            CompositeKind::Wedge => {
                let r = dims.get("r")?;
                let phi = dims.get("phi")?;
                self.children[0].set_dimensions(&[
                    ("ro", Value::from(r)),
                    ("ri", Value::from(0.0)),
                    ("phi", Value::from(phi)),
                ])?;
            }
            CompositeKind::Box => self.recompute_box(dims)?,
            CompositeKind::BaseFillet => self.recompute_base_fillet(dims)?,
            CompositeKind::Fillet => {
                let r = dims.get("r")?;
                let phi0 = dims.get("phi0")?;
                let phi1 = dims.get("phi1")?;
                self.children[0].set_dimensions(&[
                    ("r", Value::from(r)),
                    ("phi", Value::from(phi1 - phi0)),
                ])?;
                self.children[0].set_position(None, None, Some(0.5 * (phi0 + phi1)));
            }
            CompositeKind::Compound => {}
        }
        self.propagate_density(density);
        debug!(
            "rederived {} children of a {} section",
            self.children.len(),
            self.kind.name()
        );
        Ok(())
    }

    /// Thin-walled rectangular tube as one closed 10-vertex outline: outer
    /// rectangle counter-clockwise, inner cavity clockwise.
    fn recompute_box(&mut self, dims: &Dimensions) -> Result<(), SectionError> {
        let ao = 0.5 * dims.get("a")?;
        let bo = 0.5 * dims.get("b")?;
        let ai = 0.5 * (dims.get("a")? - 2.0 * dims.get("tb")?);
        let bi = 0.5 * (dims.get("b")? - 2.0 * dims.get("ta")?);

        let outline = [
            (ao, -bo),
            (ao, bo),
            (-ao, bo),
            (-ao, -bo),
            (ao, -bo),
            (ai, -bi),
            (-ai, -bi),
            (-ai, bi),
            (ai, bi),
            (ai, -bi),
        ];
        let vertices: Vec<Value> = outline.iter().map(|v| Value::from(*v)).collect();
        self.children[0].assign_vertices(&vertices)
    }

    /// Rounded corner as triangle minus circular segment.
    ///
    /// For an opening beyond `π` the derived lengths change sign and the
    /// weight list flips, so the segment becomes the additive part.
    fn recompute_base_fillet(&mut self, dims: &Dimensions) -> Result<(), SectionError> {
        let r = dims.get("r")?;
        let phi = dims.get("phi")?;

        let alpha = 0.5 * phi;
        let beta = (PI - phi).abs();
        let theta = if phi < PI { PI } else { 0.0 };
        let s = (r * alpha.cos() / alpha.sin()).signum();
        let b = r * alpha.cos().powi(2) / alpha.sin() * s;
        let c = r * alpha.cos();
        let d = r / alpha.sin() * s;

        self.weights = if phi > PI {
            vec![-1.0, 1.0]
        } else {
            vec![1.0, -1.0]
        };

        self.children[0].assign_vertices(&[
            Value::from((0.0, 0.0)),
            Value::from((b, c)),
            Value::from((b, -c)),
        ])?;
        self.children[1].set_dimensions(&[("r", Value::from(r)), ("phi", Value::from(beta))])?;
        self.children[1].set_position(Some(d), Some(0.0), Some(theta));
        Ok(())
    }

    /// Aggregate the children's composite-frame properties.
    ///
    /// Children carry their own placement inside the composite frame, so the
    /// sums run over each child's global centroid and global origin tensor;
    /// the summed tensor is then shifted back onto the composite centroid.
    pub(crate) fn aggregate(&self) -> Result<LocalProperties, SectionError> {
        let mut a = 0.0;
        let mut sx = 0.0;
        let mut sy = 0.0;
        let mut at_origin = Tensor2::ZERO;
        for child in &self.children {
            let child_a = child.area()?;
            let child_cog = child.cog()?;
            a += child_a;
            sx += child_a * child_cog.x;
            sy += child_a * child_cog.y;
            at_origin = at_origin.add(child.inertia()?);
        }
        let cog = Point2::new(sx / a, sy / a);
        let i0 = parallel_axis(at_origin, a, cog, true);
        Ok(LocalProperties { a, cog, i0 })
    }
}
