//! Intersections of lines and planes.

use la::math::{PRECISION, Vector};
use log::debug;

use crate::rel::{ClosestPoint, Distance, Parallel};
use crate::solve::plane_intersection_anchor;
use crate::v3::{add, cross, dot, normalize, scale, sub};
use crate::{Line, Plane};

/// Trait for computing the intersection of two objects.
pub trait Intersect<T: ?Sized> {
    /// The type of the intersection.
    type Output;

    /// Returns whether `self` and `other` meet, using the tolerance `eps`.
    fn intersects_eps(&self, other: &T, eps: f64) -> bool;

    /// Returns the intersection of `self` and `other`, or `None` if they
    /// do not meet, using the tolerance `eps`.
    fn intersection_eps(&self, other: &T, eps: f64) -> Option<Self::Output>;

    /// Returns whether `self` and `other` meet.
    fn intersects(&self, other: &T) -> bool {
        self.intersects_eps(other, PRECISION)
    }

    /// Returns the intersection of `self` and `other`, or `None` if they
    /// do not meet.
    fn intersection(&self, other: &T) -> Option<Self::Output> {
        self.intersection_eps(other, PRECISION)
    }
}

impl Intersect<Plane> for Plane {
    type Output = Line;

    /// Two planes meet unless they are parallel.
    fn intersects_eps(&self, other: &Plane, eps: f64) -> bool {
        !self.is_parallel_to_eps(other, eps)
    }

    /// Returns the line along which `self` and `other` meet.
    ///
    /// The direction of the line is `self.normal() × other.normal()`,
    /// normalized.
    ///
    /// # Examples
    /// ```
    /// use la::math::{vec3, ApproxEq};
    /// use linea_geom::{Intersect, Line, Plane};
    ///
    /// let l = Plane::XY.intersection(&Plane::ZX).unwrap();
    /// assert!(l.approx_eq(&Line::X));
    /// assert_eq!(Plane::XY.intersection(&Plane::XY), None);
    /// ```
    fn intersection_eps(&self, other: &Plane, eps: f64) -> Option<Line> {
        if !self.intersects_eps(other, eps) {
            return None;
        }
        let (n, o) = (self.normal_3(), other.normal_3());
        let direction = normalize(cross(n, o))?;
        let anchor =
            plane_intersection_anchor(n, self.anchor_3(), o, other.anchor_3())?;
        Line::from_arrays(anchor, direction).ok()
    }
}

impl Intersect<Line> for Plane {
    type Output = Vector;

    /// A plane and a line meet unless the line is parallel to the plane.
    fn intersects_eps(&self, line: &Line, eps: f64) -> bool {
        !self.is_parallel_to_eps(line, eps)
    }

    /// Returns the point at which `line` crosses `self`.
    ///
    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::{Intersect, Line, Plane};
    ///
    /// let l = Line::new(&vec3(1.0, 2.0, 3.0), &vec3(0.0, 0.0, -1.0)).unwrap();
    /// assert_eq!(Plane::XY.intersection(&l), Some(vec3(1.0, 2.0, 0.0)));
    /// assert_eq!(Plane::XY.intersection(&Line::X), None);
    /// ```
    fn intersection_eps(&self, line: &Line, eps: f64) -> Option<Vector> {
        use la::math::float::f64;
        if !self.intersects_eps(line, eps) {
            return None;
        }
        let (n, p, d) = (self.normal_3(), line.anchor_3(), line.direction_3());
        let denom = dot(n, d);
        if f64::abs(denom) <= eps {
            debug!("line {line} is too close to parallel with plane {self}");
            return None;
        }
        let t = dot(n, sub(self.anchor_3(), p)) / denom;
        Some(add(p, scale(d, t)).into())
    }
}

impl Intersect<Plane> for Line {
    type Output = Vector;

    fn intersects_eps(&self, plane: &Plane, eps: f64) -> bool {
        plane.intersects_eps(self, eps)
    }

    fn intersection_eps(&self, plane: &Plane, eps: f64) -> Option<Vector> {
        plane.intersection_eps(self, eps)
    }
}

impl Intersect<Line> for Line {
    type Output = Vector;

    /// Two lines meet if they are not parallel and the distance between
    /// them is at most `eps`.
    fn intersects_eps(&self, other: &Line, eps: f64) -> bool {
        !self.is_parallel_to_eps(other, eps) && self.distance_from(other) <= eps
    }

    /// Returns the point at which `self` and `other` cross.
    ///
    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::{Intersect, Line};
    ///
    /// let l = Line::new(&vec3(1.0, 1.0, 0.0), &vec3(0.0, 1.0, 0.0)).unwrap();
    /// assert_eq!(Line::X.intersection(&l), Some(vec3(1.0, 0.0, 0.0)));
    ///
    /// let skew = l.translate(&vec3(0.0, 0.0, 1.0)).unwrap();
    /// assert_eq!(Line::X.intersection(&skew), None);
    /// ```
    fn intersection_eps(&self, other: &Line, eps: f64) -> Option<Vector> {
        if !self.intersects_eps(other, eps) {
            return None;
        }
        self.point_closest_to(other)
    }
}
