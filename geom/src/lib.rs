//! Lines and planes in 3-space, built on the vectors and matrices of
//! `linea-core`.
//!
//! Relations between points, lines, and planes are expressed as traits
//! generic over the other object: [`Parallel`], [`Contains`], [`Distance`],
//! [`ClosestPoint`], [`Reflect`], [`Rotate`], and [`Intersect`]. Points are
//! plain [`Vector`][la::math::Vector]s with the [`PointExt`] extension trait.
//!
//! The intersection of two planes is found by solving a 2×2 linear system
//! with the matrix inverse of `linea-core`; see [`solve`].
//!
//! # Crate features
//!
//! * `std`:
//!   Use the floating-point functions of `std`. Enabled by default.
//!
//! * `libm`:
//!   Use the floating-point functions of the `libm` crate instead.
//!   One of `std` and `libm` is required.
//!
//! * `serde`:
//!   Derives `Serialize` and `Deserialize` for lines and planes.
//!   Deserialization renormalizes directions and normals, and fails on
//!   zero vectors.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("linea-geom requires either the `std` or the `libm` feature");

extern crate alloc;
extern crate core;

pub mod isect;
pub mod line;
pub mod plane;
pub mod point;
pub mod rel;
pub mod solve;

mod v3;

pub use isect::Intersect;
pub use line::Line;
pub use plane::Plane;
pub use point::PointExt;
pub use rel::{ClosestPoint, Contains, Distance, Parallel, Reflect, Rotate};
