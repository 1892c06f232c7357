//! Infinite lines in 3-space.

use core::fmt::{self, Display, Formatter};

use la::math::{Angle, ApproxEq, Matrix, PRECISION, Vector};
use la::{Error, Result};

use crate::rel::{ClosestPoint, Contains, Distance, Parallel, Reflect, Rotate};
use crate::{Plane, v3::*};

/// An infinite line through `anchor` in the direction `direction`.
///
/// The direction is always of unit length. Lines constructed from 2-D
/// vectors lie in the plane `z = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Repr")
)]
pub struct Line {
    anchor: V3,
    direction: V3,
}

impl Line {
    /// The x axis.
    pub const X: Self = Self::axis([1.0, 0.0, 0.0]);
    /// The y axis.
    pub const Y: Self = Self::axis([0.0, 1.0, 0.0]);
    /// The z axis.
    pub const Z: Self = Self::axis([0.0, 0.0, 1.0]);

    /// Returns the line through `anchor` in the direction of `direction`.
    ///
    /// The direction is normalized. Both vectors may be 2- or 3-dimensional;
    /// 2-D vectors get a zero z component.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] if either vector has any other dimension,
    /// [`Error::ZeroVector`] if `direction` is zero.
    ///
    /// # Examples
    /// ```
    /// use la::math::{vec2, vec3};
    /// use linea_geom::Line;
    ///
    /// let l = Line::new(&vec2(1.0, 2.0), &vec2(0.0, 3.0)).unwrap();
    /// assert_eq!(l.anchor(), vec3(1.0, 2.0, 0.0));
    /// assert_eq!(l.direction(), vec3(0.0, 1.0, 0.0));
    /// ```
    pub fn new(anchor: &Vector, direction: &Vector) -> Result<Self> {
        Self::from_arrays(point(anchor)?, point(direction)?)
    }

    pub(crate) fn from_arrays(anchor: V3, direction: V3) -> Result<Self> {
        let direction = normalize(direction).ok_or(Error::ZeroVector)?;
        Ok(Self { anchor, direction })
    }

    const fn axis(direction: V3) -> Self {
        Self { anchor: [0.0; 3], direction }
    }

    /// Returns the anchor point of `self` as a 3-vector.
    pub fn anchor(&self) -> Vector {
        self.anchor.into()
    }

    /// Returns the unit direction of `self` as a 3-vector.
    pub fn direction(&self) -> Vector {
        self.direction.into()
    }

    pub(crate) fn anchor_3(&self) -> V3 {
        self.anchor
    }

    pub(crate) fn direction_3(&self) -> V3 {
        self.direction
    }

    /// Returns the point `anchor + t · direction`.
    pub fn at(&self, t: f64) -> Vector {
        add(self.anchor, scale(self.direction, t)).into()
    }

    /// Returns `self` moved by `offset`.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] unless `offset` is 2- or 3-dimensional.
    pub fn translate(&self, offset: &Vector) -> Result<Self> {
        Ok(Self {
            anchor: add(self.anchor, point(offset)?),
            ..*self
        })
    }

    pub(crate) fn closest_3(&self, p: V3) -> V3 {
        let d = self.direction;
        add(self.anchor, scale(d, dot(sub(p, self.anchor), d)))
    }

    pub(crate) fn distance_3(&self, p: V3) -> f64 {
        len(cross(sub(p, self.anchor), self.direction))
    }

    /// Returns the matrix that rotates vectors by `angle` about the
    /// direction of `self`.
    pub(crate) fn rotation(&self, angle: Angle) -> Matrix {
        Matrix::rotation_about_unit(angle, self.direction)
    }

    /// Rotates the point `p` by `angle` about `self`.
    pub(crate) fn rotate_3(&self, angle: Angle, p: V3) -> V3 {
        let r = self.rotation(angle);
        add(self.anchor, apply(&r, sub(p, self.anchor)))
    }
}

//
// Relations
//

impl Parallel<Line> for Line {
    /// Returns whether the directions of `self` and `other` are within
    /// `eps` radians of equal or opposite.
    fn is_parallel_to_eps(&self, other: &Line, eps: f64) -> bool {
        is_parallel(self.direction, other.direction, eps)
    }
}

impl Parallel<Plane> for Line {
    fn is_parallel_to_eps(&self, other: &Plane, eps: f64) -> bool {
        other.is_parallel_to_eps(self, eps)
    }
}

impl Contains<Vector> for Line {
    /// Returns whether the point `p` lies on `self`. Always false if `p`
    /// is not 2- or 3-dimensional.
    fn contains_eps(&self, p: &Vector, eps: f64) -> bool {
        point(p).is_ok_and(|p| self.distance_3(p) <= eps)
    }
}

impl Distance<Vector> for Line {
    type Output = Result<f64>;

    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::{Distance, Line};
    ///
    /// assert_eq!(Line::X.distance_from(&vec3(5.0, 3.0, 4.0)), Ok(5.0));
    /// ```
    fn distance_from(&self, p: &Vector) -> Result<f64> {
        Ok(self.distance_3(point(p)?))
    }
}

impl Distance<Line> for Line {
    type Output = f64;

    fn distance_from(&self, other: &Line) -> f64 {
        use la::math::float::f64;
        if self.is_parallel_to(other) {
            return self.distance_3(other.anchor);
        }
        let n = cross(self.direction, other.direction);
        let offset = sub(other.anchor, self.anchor);
        normalize(n).map_or(0.0, |n| f64::abs(dot(offset, n)))
    }
}

impl Distance<Plane> for Line {
    type Output = f64;

    fn distance_from(&self, other: &Plane) -> f64 {
        other.distance_from(self)
    }
}

impl ClosestPoint<Vector> for Line {
    type Output = Result<Vector>;

    /// Returns the foot of the perpendicular from `p` to `self`.
    fn point_closest_to(&self, p: &Vector) -> Result<Vector> {
        Ok(self.closest_3(point(p)?).into())
    }
}

impl ClosestPoint<Line> for Line {
    type Output = Option<Vector>;

    /// Returns the point of `self` closest to `other`, or `None` if the
    /// lines are parallel and there is no unique such point.
    ///
    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::{ClosestPoint, Line};
    ///
    /// let l = Line::new(&vec3(0.0, 0.0, 2.0), &vec3(0.0, 1.0, 0.0)).unwrap();
    /// assert_eq!(Line::X.point_closest_to(&l), Some(vec3(0.0, 0.0, 0.0)));
    /// assert_eq!(l.point_closest_to(&Line::X), Some(vec3(0.0, 0.0, 2.0)));
    /// ```
    fn point_closest_to(&self, other: &Line) -> Option<Vector> {
        if self.is_parallel_to(other) {
            return None;
        }
        let (d, e) = (self.direction, other.direction);
        let w = sub(self.anchor, other.anchor);
        let b = dot(d, e);
        let denom = 1.0 - b * b;
        if denom == 0.0 {
            return None;
        }
        let s = (b * dot(e, w) - dot(d, w)) / denom;
        Some(add(self.anchor, scale(d, s)).into())
    }
}

impl Reflect<Vector> for Line {
    type Output = Result<Line>;

    /// Returns `self` inverted through the point `p`.
    fn reflection_in(&self, p: &Vector) -> Result<Line> {
        let p = point(p)?;
        Ok(Self {
            anchor: sub(scale(p, 2.0), self.anchor),
            ..*self
        })
    }
}

impl Reflect<Line> for Line {
    type Output = Line;

    fn reflection_in(&self, axis: &Line) -> Line {
        self.rotate(Angle::STRAIGHT, axis)
    }
}

impl Reflect<Plane> for Line {
    type Output = Line;

    fn reflection_in(&self, plane: &Plane) -> Line {
        Self {
            anchor: plane.mirror_3(self.anchor),
            direction: mirror(self.direction, plane.normal_3()),
        }
    }
}

impl Rotate for Line {
    type Output = Line;

    fn rotate(&self, angle: Angle, axis: &Line) -> Line {
        let r = axis.rotation(angle);
        Self {
            anchor: axis.rotate_3(angle, self.anchor),
            direction: apply(&r, self.direction),
        }
    }
}

//
// Foreign trait impls
//

impl ApproxEq for Line {
    /// Returns whether `self` and `other` are the same set of points:
    /// they are parallel and `self` contains the anchor of `other`.
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.is_parallel_to_eps(other, *eps)
            && self.distance_3(other.anchor) <= *eps
    }
    fn default_epsilon() -> f64 {
        PRECISION
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ([x, y, z], [a, b, c]) = (self.anchor, self.direction);
        write!(f, "({x}, {y}, {z}) + t·({a}, {b}, {c})")
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Repr {
    anchor: V3,
    direction: V3,
}

#[cfg(feature = "serde")]
impl TryFrom<Repr> for Line {
    type Error = Error;

    fn try_from(Repr { anchor, direction }: Repr) -> Result<Self> {
        Self::from_arrays(anchor, direction)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use la::assert_approx_eq;
    use la::math::{degs, vec2, vec3};

    use super::*;

    fn line(a: [f64; 3], d: [f64; 3]) -> Line {
        Line::new(&a.into(), &d.into()).unwrap()
    }

    #[test]
    fn new_normalizes_direction() {
        let l = line([1.0, 1.0, 1.0], [0.0, 3.0, 4.0]);
        assert_approx_eq!(l.direction(), vec3(0.0, 0.6, 0.8));
        assert_eq!(l.anchor(), vec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn new_errors() {
        assert_eq!(
            Line::new(&vec3(0.0, 0.0, 0.0), &vec3(0.0, 0.0, 0.0)),
            Err(Error::ZeroVector)
        );
        assert_eq!(
            Line::new(&Vector::zero(4), &vec2(1.0, 0.0)),
            Err(Error::WrongDimension {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn axes() {
        assert_eq!(Line::X.direction(), Vector::i());
        assert_eq!(Line::Y.direction(), Vector::j());
        assert_eq!(Line::Z.direction(), Vector::k());
        assert_eq!(Line::Z.anchor(), Vector::zero(3));
    }

    #[test]
    fn translate() {
        let l = Line::X.translate(&vec2(0.0, 2.0)).unwrap();
        assert_eq!(l.anchor(), vec3(0.0, 2.0, 0.0));
        assert_eq!(l.direction(), Vector::i());
        assert!(l.is_parallel_to(&Line::X));
        assert!(!l.approx_eq(&Line::X));
    }

    #[test]
    fn parallel_lines() {
        let l = line([0.0, 5.0, 0.0], [-2.0, 0.0, 0.0]);
        assert!(l.is_parallel_to(&Line::X));
        assert!(!l.is_parallel_to(&Line::Y));
        assert!(l.is_parallel_to(&Plane::XY));
        assert!(!l.is_parallel_to(&Plane::YZ));
    }

    #[test]
    fn contains_points() {
        let l = line([1.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
        assert!(l.contains(&vec2(3.0, 3.0)));
        assert!(l.contains(&vec3(-1.0, -1.0, 0.0)));
        assert!(!l.contains(&vec3(1.0, 1.0, 1.0)));
        assert!(!l.contains(&Vector::zero(4)));
    }

    #[test]
    fn distance_from_point() {
        let l = line([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        assert_approx_eq!(
            l.distance_from(&vec2(1.0, -1.0)).unwrap(),
            2.0_f64.sqrt()
        );
        assert_eq!(l.distance_from(&vec2(4.0, 4.0)), Ok(0.0));
    }

    #[test]
    fn distance_between_lines() {
        // Skew lines one unit apart
        let l = line([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]);
        assert_approx_eq!(Line::X.distance_from(&l), 1.0);
        // Parallel lines
        let l = line([0.0, 3.0, 4.0], [1.0, 0.0, 0.0]);
        assert_approx_eq!(Line::X.distance_from(&l), 5.0);
        // Intersecting lines
        assert_approx_eq!(Line::X.distance_from(&Line::Y), 0.0);
    }

    #[test]
    fn closest_point_to_point() {
        let p = Line::X.point_closest_to(&vec3(3.0, 4.0, 5.0)).unwrap();
        assert_eq!(p, vec3(3.0, 0.0, 0.0));
    }

    #[test]
    fn closest_point_to_parallel_line() {
        let l = Line::X.translate(&vec3(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(Line::X.point_closest_to(&l), None);
    }

    #[test]
    fn reflection_in_point() {
        let l = line([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let r = l.reflection_in(&vec3(2.0, 0.0, 0.0)).unwrap();
        assert_approx_eq!(r.anchor(), vec3(3.0, 0.0, 0.0));
        assert!(r.is_parallel_to(&l));
    }

    #[test]
    fn reflection_in_line() {
        let l = line([0.0, 1.0, 0.0], [1.0, 0.0, 1.0]);
        let r = l.reflection_in(&Line::X);
        assert!(r.contains(&vec3(0.0, -1.0, 0.0)));
        assert!(r.contains(&vec3(1.0, -1.0, -1.0)));
    }

    #[test]
    fn reflection_in_plane() {
        let l = line([0.0, 0.0, 1.0], [1.0, 0.0, 1.0]);
        let r = l.reflection_in(&Plane::XY);
        assert_approx_eq!(r.anchor(), vec3(0.0, 0.0, -1.0));
        assert!(r.contains(&vec3(1.0, 0.0, -2.0)));
    }

    #[test]
    fn rotate_about_z() {
        let l = line([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let r = l.rotate(degs(90.0), &Line::Z);
        assert_approx_eq!(r.anchor(), vec3(0.0, 1.0, 0.0));
        assert_approx_eq!(r.direction(), Vector::k());
    }

    #[test]
    fn approx_eq_ignores_anchor_and_sign() {
        let a = line([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = line([-7.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);
        assert_approx_eq!(a, b);
        assert!(!a.approx_eq(&Line::Y));
    }

    #[test]
    fn display() {
        let l = line([1.0, 2.0, 3.0], [0.0, 0.0, 2.0]);
        assert_eq!(l.to_string(), "(1, 2, 3) + t·(0, 0, 1)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let json = r#"{"anchor":[0.0,1.0,0.0],"direction":[0.0,0.0,2.0]}"#;
        let l: Line = serde_json::from_str(json).unwrap();
        assert_eq!(l.direction(), Vector::k());
        let zero = r#"{"anchor":[0.0,0.0,0.0],"direction":[0.0,0.0,0.0]}"#;
        assert!(serde_json::from_str::<Line>(zero).is_err());
    }
}
