//! Pseudo-random number generation for the random vector and matrix factories.

use core::{fmt::Debug, ops::Range};

#[cfg(feature = "fp")]
use crate::math::vec::Vector;

//
// Traits and types
//

type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the elements of the sample space of `Self`, also called
    /// "outcomes".
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift is a type of linear-feedback shift register that uses only three
/// right-shifts and three xor operations per generated number, making it very
/// efficient. Xorshift64 has a period of 2<sup>64</sup>-1: it yields every
/// number in the interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of values in the given range.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// A uniform distribution of 3-vectors on the (surface of) the unit sphere.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitSphere;

/// Iterator returned by the [Distrib::iter()] method.
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to initialize the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// Two `Xorshift64` instances generate the same sequence of pseudo-random
    /// numbers if and only if they were created with the same seed.
    ///
    /// # Examples
    /// ```
    /// # use linea_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), 133101616827);
    /// assert_eq!(g.next_bits(), 12690785413091508870);
    /// assert_eq!(g.next_bits(), 7516749944291143043);
    /// ```
    ///
    /// # Panics
    ///
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns a new `Xorshift64` seeded by the current system time.
    ///
    /// Note that depending on the precision of the system clock, two or more
    /// calls to this function in quick succession *may* return instances seeded
    /// by the same number.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        let t = std::time::SystemTime::UNIX_EPOCH
            .elapsed()
            .unwrap_or_default();
        Self::from_seed((t.as_micros() as u64).max(1))
    }

    /// Returns 64 bits of pseudo-randomness.
    ///
    /// Successive calls to this function (with the same `self`) will yield
    /// every value in the interval [1, 2<sup>64</sup>) exactly once before
    /// starting to repeat the sequence.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    /// Returns a `Xorshift64` seeded with [`Xorshift64::DEFAULT_SEED`].
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<f64> {
    type Sample = f64;

    /// Returns a uniformly distributed `f64` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f64 {
        let Range { start, end } = self.0;
        // Bit repr of a random f64 in range 1.0..2.0
        let bits = 1023 << 52 | rng.next_bits() >> 12;
        let unit = f64::from_bits(bits) - 1.0;
        unit * (end - start) + start
    }
}

#[cfg(feature = "fp")]
impl Distrib for UnitSphere {
    type Sample = Vector;

    /// Returns a 3-vector uniformly distributed on the unit sphere.
    fn sample(&self, rng: &mut DefaultRng) -> Vector {
        let d = Uniform(-1.0..1.0);
        loop {
            let v = Vector::from([d.sample(rng), d.sample(rng), d.sample(rng)]);
            // Reject points outside the ball to keep the distribution uniform
            let len_sqr = v.modulus_sqr();
            if 0.0 < len_sqr && len_sqr <= 1.0 {
                return v.to_unit_vector();
            }
        }
    }
}
