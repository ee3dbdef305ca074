//! Annular sector and chord-cut segment of a circle.
//!
//! Both shapes are symmetric about the local x-axis, so their centroids lie
//! on it and the product moment vanishes.

use std::f64::consts::TAU;

use crate::dimensions::Dimensions;
use crate::error::SectionError;
use crate::shapes::LocalProperties;
use crate::transform::{Point2, Tensor2, parallel_axis};

pub(crate) const SECTOR_SCHEMA: &[&str] = &["ro", "ri", "phi"];
pub(crate) const SEGMENT_SCHEMA: &[&str] = &["r", "phi"];

pub(crate) fn validate_sector(dims: &Dimensions) -> Result<(), SectionError> {
    let ro = dims.get("ro")?;
    let ri = dims.get("ri")?;
    let phi = dims.get("phi")?;
    if ri < 0.0 {
        return Err(SectionError::InvalidDimensions(format!(
            "inner radius must be nonnegative, got ri={ri}"
        )));
    }
    if ro <= ri {
        return Err(SectionError::InvalidDimensions(format!(
            "outer radius must exceed the inner radius, got ro={ro}, ri={ri}"
        )));
    }
    validate_angle(phi)
}

pub(crate) fn validate_segment(dims: &Dimensions) -> Result<(), SectionError> {
    let r = dims.get("r")?;
    let phi = dims.get("phi")?;
    if r <= 0.0 {
        return Err(SectionError::InvalidDimensions(format!(
            "radius must be positive, got r={r}"
        )));
    }
    validate_angle(phi)
}

/// Opening angles live in `(0, 2π]`.
fn validate_angle(phi: f64) -> Result<(), SectionError> {
    if phi <= 0.0 || phi > TAU {
        return Err(SectionError::InvalidDimensions(format!(
            "opening angle must lie in (0, 2*pi], got phi={phi}"
        )));
    }
    Ok(())
}

/// Annular sector spanning `phi`, centered on the local x-axis.
pub(crate) fn sector_local_properties(
    dims: &Dimensions,
    density: f64,
) -> Result<LocalProperties, SectionError> {
    let ro = dims.get("ro")?;
    let ri = dims.get("ri")?;
    let phi = dims.get("phi")?;

    let area = 0.5 * (ro.powi(2) - ri.powi(2)) * phi;
    let a = density * area;
    let cog = Point2::new(
        2.0 / 3.0 * (ro.powi(3) - ri.powi(3)) * (0.5 * phi).sin() / area,
        0.0,
    );

    // Tensor about the circle center, then shifted onto the centroid.
    let r4 = ro.powi(4) - ri.powi(4);
    let at_origin = Tensor2::new(
        density * 0.125 * r4 * (phi - phi.sin()),
        density * 0.125 * r4 * (phi + phi.sin()),
        0.0,
    );
    let i0 = parallel_axis(at_origin, a, cog, true);

    Ok(LocalProperties { a, cog, i0 })
}

/// Circular segment: the region between a chord and the arc it subtends.
pub(crate) fn segment_local_properties(
    dims: &Dimensions,
    density: f64,
) -> Result<LocalProperties, SectionError> {
    let r = dims.get("r")?;
    let phi = dims.get("phi")?;

    let area = 0.5 * r.powi(2) * (phi - phi.sin());
    let a = density * area;
    let e1 = 4.0 * r * (0.5 * phi).sin().powi(3) / (3.0 * (phi - phi.sin()));

    let i11 = density / 48.0 * r.powi(4) * (6.0 * phi - 8.0 * phi.sin() + (2.0 * phi).sin());
    let i22 = density * 0.125 * r.powi(4) * (phi - phi.sin() * phi.cos()) - a * e1.powi(2);

    Ok(LocalProperties {
        a,
        cog: Point2::new(e1, 0.0),
        i0: Tensor2::new(i11, i22, 0.0),
    })
}
