//! Relations between points, lines, and planes.
//!
//! Each relation is a trait generic over the type of the other object, and
//! implemented once per meaningful combination. Points are represented by
//! [`Vector`][la::math::Vector]s of two or three dimensions; a 2-D point is
//! taken to lie in the plane `z = 0`. Operations that take a point return a
//! [`Result`][la::Result], failing with
//! [`WrongDimension`][la::Error::WrongDimension] for points of any other
//! dimension.

use la::math::{Angle, PRECISION};

use crate::line::Line;

/// Tests whether two objects are parallel.
pub trait Parallel<T: ?Sized> {
    /// Returns whether `self` and `other` are parallel to within `eps`.
    fn is_parallel_to_eps(&self, other: &T, eps: f64) -> bool;

    /// Returns whether `self` and `other` are parallel to within
    /// [`PRECISION`].
    fn is_parallel_to(&self, other: &T) -> bool {
        self.is_parallel_to_eps(other, PRECISION)
    }
}

/// Tests whether an object wholly contains another.
pub trait Contains<T: ?Sized> {
    /// Returns whether `other` lies within `eps` of `self`.
    fn contains_eps(&self, other: &T, eps: f64) -> bool;

    /// Returns whether `other` lies within [`PRECISION`] of `self`.
    fn contains(&self, other: &T) -> bool {
        self.contains_eps(other, PRECISION)
    }
}

/// The shortest distance between two objects.
pub trait Distance<T: ?Sized> {
    /// `f64`, or `Result<f64>` if either object is a point.
    type Output;

    /// Returns the shortest distance between `self` and `other`.
    /// Intersecting objects are at distance zero.
    fn distance_from(&self, other: &T) -> Self::Output;
}

/// The point of one object closest to another.
pub trait ClosestPoint<T: ?Sized> {
    type Output;

    /// Returns the point of `self` closest to `other`.
    fn point_closest_to(&self, other: &T) -> Self::Output;
}

/// Mirror images.
pub trait Reflect<T: ?Sized> {
    type Output;

    /// Returns the mirror image of `self` in `other`.
    ///
    /// Reflection in a point inverts through it, reflection in a line is
    /// a half-turn about it, and reflection in a plane mirrors across it.
    fn reflection_in(&self, other: &T) -> Self::Output;
}

/// Rotation about an arbitrary axis in 3-space.
pub trait Rotate {
    type Output;

    /// Returns `self` rotated by `angle` about `axis`.
    ///
    /// The rotation is counterclockwise when looking against the direction
    /// of `axis`.
    fn rotate(&self, angle: Angle, axis: &Line) -> Self::Output;
}
