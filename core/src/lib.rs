//! Core functionality of the `linea` project.
//!
//! Includes dense vectors and matrices of `f64` with a row reduction engine
//! (right-triangular form, determinant, rank, Gauss–Jordan inverse), angles,
//! rotation and projection matrix builders, approximate equality under an
//! explicit tolerance, and a small pseudo-random number generator.
//!
//! Lines, planes, and their intersections live in the `linea-geom` crate.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring floating-point functions not included
//!   in `core`. In particular this means square roots and trigonometric
//!   functions. Enabled by default.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `serde`:
//!   Derives `Serialize` and `Deserialize` for vectors, matrices, and angles.
//!
//! # Indexing
//!
//! Element, row, and column accessors are **1-based**, and return `None`
//! for index 0 or any index out of range.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod error;
pub mod math;

pub use error::{Error, Result};

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::transform::{
        look_at, perspective, rotate_x, rotate_y, rotate_z,
    };
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        approx::{ApproxEq, PRECISION},
        mat::{Matrix, Operand, Product},
        transform::{frustum, orthographic, scaling, translation},
        vec::{Vector, vec2, vec3},
    };
    pub use crate::{Error, Result};
}
