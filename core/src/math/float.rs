//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the ones this crate needs using either `std` or the `libm` crate,
//! depending on which feature is enabled, under the single path `float::f64`.
//! As a fallback, it also implements `abs` even if neither feature is enabled.
//!
//! Import `f64` from here *inside a function body* and call the functions
//! with path syntax, for example `f64::sqrt(x)`, so that the import does not
//! shadow the primitive type in signatures.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabs as abs;
    pub use libm::round;
    pub use libm::sqrt;

    pub use libm::cos;
    pub use libm::sin;
    pub use libm::tan;

    pub use libm::acos;
    pub use libm::atan2;
}

pub mod fallback {
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f64) -> f64 {
        f64::from_bits(x.to_bits() & !(1 << 63))
    }
}

#[cfg(all(feature = "fp", not(any(feature = "std", feature = "libm"))))]
compile_error!("feature `fp` requires either `std` or `libm`");

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f64;

#[cfg(not(feature = "fp"))]
pub use fallback as f64;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f64::consts::*;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn fallback_abs() {
        assert_eq!(fallback::abs(-1.5), 1.5);
        assert_eq!(fallback::abs(2.0), 2.0);
        assert_eq!(fallback::abs(-0.0).to_bits(), 0.0f64.to_bits());
        assert!(fallback::abs(f64::NAN).is_nan());
        assert_eq!(fallback::abs(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::abs(-3.0), 3.0);
        assert_eq!(libm::round(2.5), 3.0);
        assert_eq!(libm::round(-2.5), -3.0);

        assert_eq!(libm::sqrt(9.0), 3.0);
        assert!(libm::sqrt(-1.0).is_nan());

        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
        assert_eq!(libm::cos(PI), -1.0);
        assert_approx_eq!(libm::tan(FRAC_PI_4), 1.0);
        assert_approx_eq!(libm::acos(0.0), FRAC_PI_2);
        assert_approx_eq!(libm::atan2(1.0, 1.0), FRAC_PI_4);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f64::abs(-3.0), 3.0);
        assert_eq!(f64::round(2.5), 3.0);
        assert_eq!(f64::sqrt(9.0), 3.0);
        assert!(f64::sqrt(-1.0).is_nan());
        assert_eq!(f64::cos(PI), -1.0);
        assert_approx_eq!(f64::acos(0.0), FRAC_PI_2);
    }
}
