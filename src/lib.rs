//! Static geometric and mass properties of planar cross-sections.
//!
//! The engine computes signed area, centroid, and second moments of area of
//! 2D sections for structural and mechanical calculations. Each [`Section`]
//! carries a density (negative densities model subtracted material), a
//! placement in the global frame, and a fixed schema of named dimensions;
//! derived properties are memoized and recomputed lazily after any mutation.
//!
//! Shapes come in two flavors: atomic ones with closed-form formulas
//! (rectangle, circular sector and segment, polygon, triangle) and composite
//! ones assembled by signed superposition of owned children (circle, ring,
//! wedge, box, fillets, and free-form compounds).
//!
//! ```
//! use section_engine::{Section, Value};
//!
//! let rect = Section::rectangle()
//!     .with_dimensions(&[("a", Value::from(2.0)), ("b", Value::from(3.0))])?;
//! assert!((rect.area()? - 6.0).abs() < 1e-12);
//! let i0 = rect.local_inertia_cog()?;
//! assert!((i0.i11 - 4.5).abs() < 1e-12);
//! # Ok::<(), section_engine::SectionError>(())
//! ```
//!
//! All formulas are unit-agnostic; consistent units are the caller's
//! responsibility. Sections are single-writer values: share them across
//! threads only behind external synchronization.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod dimensions;
mod error;
mod section;
mod shapes;
mod transform;
mod value;
mod vertices;

pub use dimensions::Dimensions;
pub use error::{ErrorKind, SectionError};
pub use section::{Section, SectionProperties};
pub use transform::{Point2, Position, Tensor2, parallel_axis};
pub use value::{Value, ValueKind};
pub use vertices::VertexArray;
