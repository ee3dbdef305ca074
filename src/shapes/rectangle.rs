//! Solid rectangle, centered on its own origin.

use crate::dimensions::Dimensions;
use crate::error::SectionError;
use crate::shapes::LocalProperties;
use crate::transform::{Point2, Tensor2};

pub(crate) const SCHEMA: &[&str] = &["a", "b"];

pub(crate) fn validate(dims: &Dimensions) -> Result<(), SectionError> {
    let a = dims.get("a")?;
    let b = dims.get("b")?;
    if a <= 0.0 || b <= 0.0 {
        return Err(SectionError::InvalidDimensions(format!(
            "rectangle sides must be positive, got a={a}, b={b}"
        )));
    }
    Ok(())
}

/// `A = ρab`, centroid at the origin, `I0 = ρ(ab³, ba³, 0)/12`.
pub(crate) fn local_properties(
    dims: &Dimensions,
    density: f64,
) -> Result<LocalProperties, SectionError> {
    let a = dims.get("a")?;
    let b = dims.get("b")?;
    Ok(LocalProperties {
        a: density * a * b,
        cog: Point2::ORIGIN,
        i0: Tensor2::new(
            density * a * b.powi(3) / 12.0,
            density * b * a.powi(3) / 12.0,
            0.0,
        ),
    })
}
