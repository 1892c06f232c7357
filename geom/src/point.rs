//! Points as vectors: their relations to lines and planes.

use la::Result;
use la::math::{Angle, PRECISION, Vector};

use crate::rel::{Contains, Distance, Reflect, Rotate};
use crate::v3::{point, sub};
use crate::{Line, Plane};

/// Extension methods for treating a [`Vector`] as a point.
pub trait PointExt {
    /// Returns whether `self` lies on `line`.
    fn lies_on(&self, line: &Line) -> bool {
        self.lies_on_eps(line, PRECISION)
    }
    /// Returns whether `self` lies within `eps` of `line`.
    fn lies_on_eps(&self, line: &Line, eps: f64) -> bool;

    /// Returns whether `self` lies in `plane`.
    fn lies_in(&self, plane: &Plane) -> bool {
        self.lies_in_eps(plane, PRECISION)
    }
    /// Returns whether `self` lies within `eps` of `plane`.
    fn lies_in_eps(&self, plane: &Plane, eps: f64) -> bool;
}

impl PointExt for Vector {
    fn lies_on_eps(&self, line: &Line, eps: f64) -> bool {
        line.contains_eps(self, eps)
    }
    fn lies_in_eps(&self, plane: &Plane, eps: f64) -> bool {
        plane.contains_eps(self, eps)
    }
}

impl Distance<Line> for Vector {
    type Output = Result<f64>;

    fn distance_from(&self, line: &Line) -> Result<f64> {
        line.distance_from(self)
    }
}

impl Distance<Plane> for Vector {
    type Output = Result<f64>;

    fn distance_from(&self, plane: &Plane) -> Result<f64> {
        plane.distance_from(self)
    }
}

impl Reflect<Vector> for Vector {
    type Output = Result<Vector>;

    /// Returns `self` inverted through the point `center`.
    fn reflection_in(&self, center: &Vector) -> Result<Vector> {
        self.reflect_through(center)
    }
}

impl Reflect<Line> for Vector {
    type Output = Result<Vector>;

    /// Returns `self` rotated half a turn about `line`, as a 3-vector.
    ///
    /// # Examples
    /// ```
    /// use la::math::{vec2, vec3};
    /// use linea_geom::{Line, Reflect};
    ///
    /// let p = vec2(3.0, 4.0).reflection_in(&Line::X);
    /// assert_eq!(p, Ok(vec3(3.0, -4.0, 0.0)));
    /// ```
    fn reflection_in(&self, line: &Line) -> Result<Vector> {
        let p = point(self)?;
        let q = line.closest_3(p);
        Ok(sub(q, sub(p, q)).into())
    }
}

impl Reflect<Plane> for Vector {
    type Output = Result<Vector>;

    /// Returns the mirror image of `self` across `plane`, as a 3-vector.
    fn reflection_in(&self, plane: &Plane) -> Result<Vector> {
        Ok(plane.mirror_3(point(self)?).into())
    }
}

impl Rotate for Vector {
    type Output = Result<Vector>;

    /// Returns the point `self` rotated by `angle` about `axis`, as
    /// a 3-vector.
    ///
    /// # Errors
    /// [`WrongDimension`][la::Error::WrongDimension] unless `self` is 2- or
    /// 3-dimensional.
    fn rotate(&self, angle: Angle, axis: &Line) -> Result<Vector> {
        Ok(axis.rotate_3(angle, point(self)?).into())
    }
}

#[cfg(test)]
mod tests {
    use la::math::{degs, vec2, vec3};
    use la::{Error, assert_approx_eq};

    use super::*;

    #[test]
    fn lies_on_and_in() {
        assert!(vec3(5.0, 0.0, 0.0).lies_on(&Line::X));
        assert!(!vec3(5.0, 0.1, 0.0).lies_on(&Line::X));
        assert!(vec3(5.0, 0.1, 0.0).lies_on_eps(&Line::X, 0.2));

        assert!(vec2(1.0, 2.0).lies_in(&Plane::XY));
        assert!(!vec3(1.0, 2.0, 3.0).lies_in(&Plane::XY));
    }

    #[test]
    fn distances() {
        assert_eq!(vec3(0.0, 3.0, 4.0).distance_from(&Line::X), Ok(5.0));
        assert_eq!(vec3(1.0, 1.0, -2.0).distance_from(&Plane::XY), Ok(2.0));
        assert_eq!(
            Vector::zero(4).distance_from(&Plane::XY),
            Err(Error::WrongDimension {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn reflections() {
        let p = vec3(1.0, 2.0, 3.0);
        assert_eq!(p.reflection_in(&Plane::XY), Ok(vec3(1.0, 2.0, -3.0)));
        assert_eq!(p.reflection_in(&Line::Z), Ok(vec3(-1.0, -2.0, 3.0)));
        assert_eq!(
            p.reflection_in(&vec3(0.0, 0.0, 0.0)),
            Ok(vec3(-1.0, -2.0, -3.0))
        );
    }

    #[test]
    fn rotate_about_offset_axis() {
        // Axis parallel to z through (1, 1)
        let axis = Line::Z.translate(&vec2(1.0, 1.0)).unwrap();
        let p = vec2(2.0, 1.0).rotate(degs(90.0), &axis).unwrap();
        assert_approx_eq!(p, vec3(1.0, 2.0, 0.0));
        let p = vec3(1.0, 1.0, 7.0).rotate(degs(33.0), &axis).unwrap();
        assert_approx_eq!(p, vec3(1.0, 1.0, 7.0));
    }
}
