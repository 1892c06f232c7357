//! Testing and asserting approximate equality.

use core::iter::zip;

/// The default tolerance used by every equality and zero test in the crate.
///
/// Two values are numerically equal if their absolute difference is at most
/// `PRECISION`. Operations that compare values have an `_eps` variant that
/// takes the tolerance as an explicit argument instead.
pub const PRECISION: f64 = 1e-6;

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to their
/// finite precision. The presence of rounding errors means that two floats may
/// not compare equal even if their counterparts in ℝ would. Even such a simple
/// expression as `0.1 + 0.2 == 0.3` will evaluate to false due to precision
/// issues.
///
/// Two values are considered approximately equal if their *absolute*
/// difference is at most some small value, "epsilon". Note that a fixed
/// absolute epsilon does not scale with the magnitude of the values compared:
/// it is too strict for values much larger than one and too lenient for
/// values much smaller than the epsilon itself.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = f64> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::default_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::default_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the absolute epsilon `eps`.
    fn approx_eq_eps(&self, other: &Other, eps: &Epsilon) -> bool;

    /// Returns the default epsilon of type `E`.
    fn default_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        use super::float::f64;
        f64::abs(self - other) <= *eps
    }

    fn default_epsilon() -> Self {
        PRECISION
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, eps))
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, eps)
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, eps),
            (Some(_), None) | (None, Some(_)) => false,
            (None, None) => true,
        }
    }

    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

/// Returns whether `x` is within `eps` of zero.
#[inline]
pub fn is_zero_eps(x: f64, eps: f64) -> bool {
    x.approx_eq_eps(&0.0, &eps)
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use linea_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use linea_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 100.5, eps = 1.0);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use linea_core::assert_approx_eq;
/// assert_approx_eq!(f64::sin(3.14), 0.0, eps = 0.0001,
///     "3.14 is not a good approximation of {}!", std::f64::consts::PI);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {

    mod f64 {
        use crate::math::approx::ApproxEq;

        #[test]
        fn approx_eq_zero() {
            assert_approx_eq!(0.0, 0.0);
            assert_approx_eq!(-0.0, 0.0);
            assert_approx_eq!(0.0, -0.0);
        }

        #[test]
        fn approx_eq_positive() {
            assert_approx_eq!(0.0, 0.0000001);
            assert_approx_eq!(0.0000001, 0.0);
            assert_approx_eq!(0.9999999, 1.0);
            assert_approx_eq!(1.0, 1.0000001);
        }

        #[test]
        fn approx_eq_negative() {
            assert_approx_eq!(0.0, -0.0000001);
            assert_approx_eq!(-0.0000001, 0.0);
            assert_approx_eq!(-1.0, -1.0000001);
            assert_approx_eq!(-0.9999999, -1.0);
        }

        #[test]
        fn approx_eq_custom_epsilon() {
            assert_approx_eq!(0.0, 0.001, eps = 0.01);
            assert_approx_eq!(0.0, -0.001, eps = 0.01);
            assert_approx_eq!(1.0, 0.999, eps = 0.01);
            assert_approx_eq!(100.0, 99.995, eps = 0.01);
        }

        #[test]
        fn epsilon_is_absolute() {
            // Large magnitudes are compared as strictly as small ones
            assert!(!1.0e10_f64.approx_eq(&(1.0e10 + 1.0)));
            // and tiny ones are all "equal"
            assert!(1.0e-9_f64.approx_eq(&-1.0e-9));
        }

        #[test]
        #[should_panic]
        fn zero_not_approx_eq_to_one() {
            assert_approx_eq!(0.0, 1.0);
        }
        #[test]
        #[should_panic]
        fn one_not_approx_eq_to_1_00001() {
            assert_approx_eq!(1.0, 1.00001);
        }
        #[test]
        #[should_panic]
        fn inf_not_approx_eq_to_inf() {
            assert_approx_eq!(f64::INFINITY, f64::INFINITY);
        }
        #[test]
        #[should_panic]
        fn nan_not_approx_eq_to_nan() {
            assert_approx_eq!(f64::NAN, f64::NAN);
        }
    }

    #[test]
    fn slices_of_unequal_length_differ() {
        use crate::math::approx::ApproxEq;
        let a: &[f64] = &[1.0, 2.0];
        let b: &[f64] = &[1.0, 2.0, 3.0];
        assert!(!a.approx_eq(b));
        assert!(a.approx_eq(&[1.0, 2.0000001][..]));
    }

    #[test]
    fn options() {
        assert_approx_eq!(Some(1.0_f64), Some(1.0000001));
        assert_approx_eq!(None::<f64>, None);
    }
}
