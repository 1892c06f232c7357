//! Planes in 3-space.

use core::fmt::{self, Display, Formatter};

use la::math::{Angle, ApproxEq, PRECISION, Vector};
use la::{Error, Result};

use crate::rel::{ClosestPoint, Contains, Distance, Parallel, Reflect, Rotate};
use crate::{Intersect, Line, v3::*};

/// A plane through `anchor` with unit normal `normal`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Repr")
)]
pub struct Plane {
    anchor: V3,
    normal: V3,
}

impl Plane {
    /// The plane `z = 0`.
    pub const XY: Self = Self::origin([0.0, 0.0, 1.0]);
    /// The plane `x = 0`.
    pub const YZ: Self = Self::origin([1.0, 0.0, 0.0]);
    /// The plane `y = 0`.
    pub const ZX: Self = Self::origin([0.0, 1.0, 0.0]);

    /// Returns the plane through `anchor` perpendicular to `normal`.
    ///
    /// The normal is normalized; 2-D inputs get a zero z component.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] unless both vectors are 2- or
    /// 3-dimensional, [`Error::ZeroVector`] if `normal` is zero.
    ///
    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::Plane;
    ///
    /// let p = Plane::new(&vec3(0.0, 0.0, 2.0), &vec3(0.0, 0.0, -5.0)).unwrap();
    /// assert_eq!(p.normal(), vec3(0.0, 0.0, -1.0));
    /// ```
    pub fn new(anchor: &Vector, normal: &Vector) -> Result<Self> {
        Self::from_arrays(point(anchor)?, point(normal)?)
    }

    /// Returns the plane through the points `a`, `b`, and `c`.
    ///
    /// The normal is the normalized `(b − a) × (c − a)`, so the points
    /// appear counterclockwise when viewed from the side it points to.
    ///
    /// # Errors
    /// [`Error::WrongDimension`] unless all points are 2- or 3-dimensional,
    /// [`Error::Collinear`] if the points lie within [`PRECISION`] of
    /// a single line.
    ///
    /// # Examples
    /// ```
    /// use la::{Error, math::vec3};
    /// use linea_geom::Plane;
    ///
    /// let p = Plane::from_points(
    ///     &vec3(1.0, 0.0, 0.0),
    ///     &vec3(0.0, 1.0, 0.0),
    ///     &vec3(0.0, 0.0, 0.0),
    /// );
    /// assert_eq!(p.map(|p| p.normal()), Ok(vec3(0.0, 0.0, 1.0)));
    ///
    /// let q = Plane::from_points(
    ///     &vec3(0.0, 0.0, 0.0),
    ///     &vec3(1.0, 1.0, 1.0),
    ///     &vec3(2.0, 2.0, 2.0),
    /// );
    /// assert_eq!(q, Err(Error::Collinear));
    /// ```
    pub fn from_points(a: &Vector, b: &Vector, c: &Vector) -> Result<Self> {
        let (a, b, c) = (point(a)?, point(b)?, point(c)?);
        let n = cross(sub(b, a), sub(c, a));
        if len(n) <= PRECISION {
            return Err(Error::Collinear);
        }
        Self::from_arrays(a, n)
    }

    pub(crate) fn from_arrays(anchor: V3, normal: V3) -> Result<Self> {
        let normal = normalize(normal).ok_or(Error::ZeroVector)?;
        Ok(Self { anchor, normal })
    }

    const fn origin(normal: V3) -> Self {
        Self { anchor: [0.0; 3], normal }
    }

    /// Returns the anchor point of `self` as a 3-vector.
    pub fn anchor(&self) -> Vector {
        self.anchor.into()
    }

    /// Returns the unit normal of `self` as a 3-vector.
    pub fn normal(&self) -> Vector {
        self.normal.into()
    }

    pub(crate) fn anchor_3(&self) -> V3 {
        self.anchor
    }

    pub(crate) fn normal_3(&self) -> V3 {
        self.normal
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

    /// Returns whether the normals of `self` and `other` are perpendicular
    /// to within [`PRECISION`].
    pub fn is_perpendicular_to(&self, other: &Plane) -> bool {
        self.is_perpendicular_to_eps(other, PRECISION)
    }

    /// Returns whether the normals of `self` and `other` are perpendicular
    /// to within `eps`.
    pub fn is_perpendicular_to_eps(&self, other: &Plane, eps: f64) -> bool {
        use la::math::float::f64;
        f64::abs(dot(self.normal, other.normal)) <= eps
    }

    /// Returns the signed distance of `p` from `self`, positive on the side
    /// the normal points to.
    pub(crate) fn signed_distance_3(&self, p: V3) -> f64 {
        dot(sub(p, self.anchor), self.normal)
    }

    pub(crate) fn closest_3(&self, p: V3) -> V3 {
        sub(p, scale(self.normal, self.signed_distance_3(p)))
    }

    pub(crate) fn mirror_3(&self, p: V3) -> V3 {
        sub(p, scale(self.normal, 2.0 * self.signed_distance_3(p)))
    }
}

//
// Relations
//

impl Parallel<Plane> for Plane {
    /// Returns whether the normals of `self` and `other` are within `eps`
    /// radians of equal or opposite.
    fn is_parallel_to_eps(&self, other: &Plane, eps: f64) -> bool {
        is_parallel(self.normal, other.normal, eps)
    }
}

impl Parallel<Line> for Plane {
    /// Returns whether the normal of `self` is perpendicular to the
    /// direction of `line` to within `eps`.
    fn is_parallel_to_eps(&self, line: &Line, eps: f64) -> bool {
        use la::math::float::f64;
        f64::abs(dot(self.normal, line.direction_3())) <= eps
    }
}

impl Contains<Vector> for Plane {
    /// Returns whether the point `p` lies in `self`. Always false if `p`
    /// is not 2- or 3-dimensional.
    fn contains_eps(&self, p: &Vector, eps: f64) -> bool {
        use la::math::float::f64;
        point(p).is_ok_and(|p| f64::abs(self.signed_distance_3(p)) <= eps)
    }
}

impl Contains<Line> for Plane {
    /// Returns whether every point of `line` lies in `self`.
    fn contains_eps(&self, line: &Line, eps: f64) -> bool {
        use la::math::float::f64;
        let a = line.anchor_3();
        let b = add(a, line.direction_3());
        f64::abs(self.signed_distance_3(a)) <= eps
            && f64::abs(self.signed_distance_3(b)) <= eps
    }
}

impl Distance<Vector> for Plane {
    type Output = Result<f64>;

    /// # Examples
    /// ```
    /// use la::math::vec3;
    /// use linea_geom::{Distance, Plane};
    ///
    /// assert_eq!(Plane::XY.distance_from(&vec3(1.0, 2.0, -3.0)), Ok(3.0));
    /// ```
    fn distance_from(&self, p: &Vector) -> Result<f64> {
        use la::math::float::f64;
        Ok(f64::abs(self.signed_distance_3(point(p)?)))
    }
}

impl Distance<Line> for Plane {
    type Output = f64;

    /// Returns zero unless `line` is parallel to `self`.
    fn distance_from(&self, line: &Line) -> f64 {
        use la::math::float::f64;
        if self.intersects(line) {
            return 0.0;
        }
        f64::abs(self.signed_distance_3(line.anchor_3()))
    }
}

impl Distance<Plane> for Plane {
    type Output = f64;

    /// Returns zero unless `other` is parallel to `self`.
    fn distance_from(&self, other: &Plane) -> f64 {
        use la::math::float::f64;
        if self.intersects(other) {
            return 0.0;
        }
        f64::abs(self.signed_distance_3(other.anchor))
    }
}

impl ClosestPoint<Vector> for Plane {
    type Output = Result<Vector>;

    /// Returns the orthogonal projection of `p` onto `self`.
    fn point_closest_to(&self, p: &Vector) -> Result<Vector> {
        Ok(self.closest_3(point(p)?).into())
    }
}

impl Reflect<Vector> for Plane {
    type Output = Result<Plane>;

    /// Returns `self` inverted through the point `p`.
    fn reflection_in(&self, p: &Vector) -> Result<Plane> {
        let p = point(p)?;
        Ok(Self {
            anchor: sub(scale(p, 2.0), self.anchor),
            ..*self
        })
    }
}

impl Reflect<Line> for Plane {
    type Output = Plane;

    fn reflection_in(&self, axis: &Line) -> Plane {
        self.rotate(Angle::STRAIGHT, axis)
    }
}

impl Reflect<Plane> for Plane {
    type Output = Plane;

    fn reflection_in(&self, mirror_plane: &Plane) -> Plane {
        Self {
            anchor: mirror_plane.mirror_3(self.anchor),
            normal: mirror(self.normal, mirror_plane.normal),
        }
    }
}

impl Rotate for Plane {
    type Output = Plane;

    fn rotate(&self, angle: Angle, axis: &Line) -> Plane {
        let r = axis.rotation(angle);
        Self {
            anchor: axis.rotate_3(angle, self.anchor),
            normal: apply(&r, self.normal),
        }
    }
}

//
// Foreign trait impls
//

impl ApproxEq for Plane {
    /// Returns whether `self` and `other` are the same set of points:
    /// they are parallel and `self` contains the anchor of `other`.
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        use la::math::float::f64;
        self.is_parallel_to_eps(other, *eps)
            && f64::abs(self.signed_distance_3(other.anchor)) <= *eps
    }
    fn default_epsilon() -> f64 {
        PRECISION
    }
}

impl Display for Plane {
    /// Formats `self` as the equation `ax + by + cz = d`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.normal;
        let d = dot(self.normal, self.anchor);
        write!(f, "{a}x + {b}y + {c}z = {d}")
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Repr {
    anchor: V3,
    normal: V3,
}

#[cfg(feature = "serde")]
impl TryFrom<Repr> for Plane {
    type Error = Error;

    fn try_from(Repr { anchor, normal }: Repr) -> Result<Self> {
        Self::from_arrays(anchor, normal)
    }
}
