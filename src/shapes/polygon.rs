//! Simple polygon over an ordered vertex sequence.
//!
//! All sums run over cyclic vertex pairs, so the sequence is treated as
//! closed. Counter-clockwise ordering yields positive area; clockwise input
//! simply produces the negated signed properties.

use crate::error::SectionError;
use crate::shapes::LocalProperties;
use crate::transform::{Point2, Tensor2, parallel_axis};
use crate::vertices::VertexArray;

/// Shoelace-integral properties of a polygon with at least three vertices.
pub(crate) fn local_properties(
    vertices: &VertexArray,
    density: f64,
) -> Result<LocalProperties, SectionError> {
    if vertices.len() < 3 {
        return Err(SectionError::TooFewVertices(vertices.len()));
    }
    let points = vertices.points()?;
    let n = points.len();

    let mut double_area = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut i11 = 0.0;
    let mut i22 = 0.0;
    let mut i12 = 0.0;
    for k in 0..n {
        let p = points[k];
        let q = points[(k + 1) % n];
        let cross = p.x * q.y - q.x * p.y;

        double_area += cross;
        sx += (p.x + q.x) * cross;
        sy += (p.y + q.y) * cross;
        i11 += (p.y * p.y + p.y * q.y + q.y * q.y) * cross;
        i22 += (p.x * p.x + p.x * q.x + q.x * q.x) * cross;
        i12 += (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y) * cross;
    }

    let area = 0.5 * double_area;
    let a = density * area;
    let cog = Point2::new(sx / (6.0 * area), sy / (6.0 * area));

    let at_origin = Tensor2::new(
        density * i11 / 12.0,
        density * i22 / 12.0,
        density * i12 / 24.0,
    );
    let i0 = parallel_axis(at_origin, a, cog, true);

    Ok(LocalProperties { a, cog, i0 })
}

/// Restore counter-clockwise winding of a fully set triangle.
///
/// With exactly three set vertices and a negative cross product of the two
/// edge vectors, the second and third vertices are swapped so the polygon
/// sums always see a counter-clockwise triangle. Runs after every vertex
/// mutation; incomplete triangles are left alone.
pub(crate) fn normalize_triangle(vertices: &mut VertexArray) {
    if vertices.len() != 3 || !vertices.is_complete() {
        return;
    }
    let Ok(points) = vertices.points() else {
        return;
    };
    let e1 = (points[1].x - points[0].x, points[1].y - points[0].y);
    let e2 = (points[2].x - points[1].x, points[2].y - points[1].y);
    if e1.0 * e2.1 - e1.1 * e2.0 < 0.0 {
        vertices.swap(1, 2);
    }
}
