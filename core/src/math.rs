//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat] and their
//! [row reduction][mat::Matrix::to_right_triangular], [angles][angle],
//! [transform builders][transform], and [pseudo-random numbers][rand], as
//! well as utilities such as approximate equality comparisons.
//!
//! Unlike the fixed-size, space-tagged types of many graphics math libraries,
//! vectors and matrices here are dynamically sized. Operations that combine
//! two of them check the shapes at run time and report a mismatch as an
//! [`Error`][crate::Error] instead of panicking.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::{ApproxEq, PRECISION},
    mat::{Matrix, Operand, Product},
    rand::{Distrib, Uniform, Xorshift64},
    vec::{Vector, vec2, vec3},
};
#[cfg(feature = "fp")]
pub use angle::{acos, atan2};

pub mod angle;
pub mod approx;
pub mod float;
pub mod mat;
pub mod rand;
pub mod transform;
pub mod vec;
