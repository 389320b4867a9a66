/*!
sidegrid
========

**sidegrid** extracts zonal cross-sections (depth versus latitude at a fixed
longitude) from the unstructured triangular-prism mesh of the FESOM
ocean/ice-shelf model, and computes the ice-shelf diagnostics that are built on
the same mesh.

The entry point of the cross-section machinery is
[`transformation::build_sidegrid`]; the mesh and field collaborators live in
[`mesh`] and [`field`].

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod analysis;
pub mod field;
pub mod mesh;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
///
/// Points and vectors are two-dimensional: cross-sections live in the
/// (latitude, depth) plane and horizontal computations use a local
/// projection of (longitude, latitude).
pub mod math {
    pub use super::real::*;
    pub use na::{DMatrix, DVector, Point2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// Mean radius of the Earth, in metres.
    pub const EARTH_RADIUS: Real = 6.371e6;

    /// Conversion factor from degrees to radians.
    pub const DEG_TO_RAD: Real = core::f64::consts::PI as Real / 180.0;
}
