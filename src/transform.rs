//! Planar coordinate-transformation math.
//!
//! Sections describe their geometry in a local frame; a [`Position`] carries
//! the translation and rotation into the global frame. Second moments of
//! area are symmetric 2×2 tensors stored as `(I11, I22, I12)`; they rotate
//! with the frame but are unaffected by translation, which is instead
//! handled by the parallel-axis (Huygens–Steiner) shift.

use serde::{Deserialize, Serialize};

/// A point or offset in the section plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to a coordinate pair.
    #[must_use]
    pub const fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Default for Point2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A symmetric second-moment-of-area tensor `(I11, I22, I12)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tensor2 {
    /// Moment about the first (x) axis.
    pub i11: f64,
    /// Moment about the second (y) axis.
    pub i22: f64,
    /// Product moment.
    pub i12: f64,
}

impl Tensor2 {
    /// The zero tensor.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(i11: f64, i22: f64, i12: f64) -> Self {
        Self { i11, i22, i12 }
    }

    /// Convert to an `(I11, I22, I12)` triple.
    #[must_use]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.i11, self.i22, self.i12)
    }

    /// Component-wise sum.
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self::new(self.i11 + rhs.i11, self.i22 + rhs.i22, self.i12 + rhs.i12)
    }
}

impl Default for Tensor2 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Placement of a section in the global frame: translation `(x, y)` followed
/// by a rotation `theta` about the section origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Rotation angle in radians, counter-clockwise.
    pub theta: f64,
}

impl Position {
    /// The identity placement.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Transform a local-frame point into the global frame.
    #[must_use]
    pub fn transform_point(&self, p: Point2) -> Point2 {
        let (s, c) = self.theta.sin_cos();
        Point2::new(
            self.x + p.x * c - p.y * s,
            self.y + p.x * s + p.y * c,
        )
    }

    /// Rotate a symmetric tensor into the global frame.
    ///
    /// Translation has no effect here; only the rotation part of the
    /// placement participates.
    #[must_use]
    pub fn rotate_tensor(&self, t: Tensor2) -> Tensor2 {
        let (s, c) = self.theta.sin_cos();
        let (ss, cc, sc) = (s * s, c * c, s * c);
        Tensor2::new(
            cc * t.i11 - 2.0 * sc * t.i12 + ss * t.i22,
            ss * t.i11 + 2.0 * sc * t.i12 + cc * t.i22,
            (cc - ss) * t.i12 + sc * (t.i11 - t.i22),
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Parallel-axis (Huygens–Steiner) shift of a tensor across an offset.
///
/// With `reverse` false the tensor moves away from the centroid frame:
/// `I11 + A·e2²`, `I22 + A·e1²`, `I12 + A·e1·e2`. With `reverse` true the
/// same terms are subtracted, moving a tensor back onto the centroid.
#[must_use]
pub fn parallel_axis(t: Tensor2, area: f64, offset: Point2, reverse: bool) -> Tensor2 {
    let sign = if reverse { -1.0 } else { 1.0 };
    Tensor2::new(
        t.i11 + sign * area * offset.y * offset.y,
        t.i22 + sign * area * offset.x * offset.x,
        t.i12 + sign * area * offset.x * offset.y,
    )
}
