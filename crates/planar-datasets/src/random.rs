//! Random sampling primitives.
//!
//! Every function here draws from the `rand::Rng` passed in by the caller.
//! Seed that generator to make the samples reproducible.

use rand::{distributions::Distribution, Rng};

use crate::types::Point;

/// Draws a real number uniformly from `[a, b)`.
///
/// `a` may exceed `b`, in which case the sample lies in `(b, a]`.
///
/// # Arguments
///
/// * `a`: one end of the interval.
/// * `b`: the other end of the interval.
/// * `rng`: random number generator.
pub fn uniform<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>().mul_add(b - a, a)
}

/// Draws a point uniformly from the segment between `p0` and `p1`.
///
/// The sample is `p0 + t * (p1 - p0)` with `t` drawn from `[0, 1)`, so `p1`
/// itself is never returned. A degenerate segment (`p0 == p1`) always yields
/// `p0`.
pub fn on_segment<R: Rng + ?Sized>(p0: Point, p1: Point, rng: &mut R) -> Point {
    let t = rng.gen::<f64>();
    p0 + (p1 - p0) * t
}

/// Draws from the normal distribution with the given `mean` and `variance`.
///
/// Uses the Marsaglia polar method. See [`Normal`].
pub fn normal<R: Rng + ?Sized>(mean: f64, variance: f64, rng: &mut R) -> f64 {
    Normal::new(mean, variance).sample(rng)
}

/// Draws from the standard normal distribution.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Normal::standard().sample(rng)
}

/// Applies the polar transform to a pair drawn from `[-1, 1]²`.
///
/// Returns `None` when the pair must be rejected, i.e. when `s = v1² + v2²`
/// lies outside `(0, 1]`. At `s = 0` the transform would take the logarithm
/// of zero.
#[must_use]
pub fn polar_transform(v1: f64, v2: f64) -> Option<f64> {
    let s = v1.mul_add(v1, v2 * v2);
    if s > 0.0 && s <= 1.0 {
        Some((-2.0 * s.ln() / s).sqrt() * v1)
    } else {
        None
    }
}

/// A normal distribution, parameterized by mean and *variance*.
///
/// Samples are drawn with the Marsaglia polar (rejection) method. The
/// rejection loop has no iteration cap; it accepts a pair with probability
/// `pi / 4` so it needs about 1.27 attempts on average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    /// The mean of the distribution.
    mean: f64,
    /// The variance of the distribution.
    variance: f64,
}

impl Normal {
    /// Creates a new `Normal` distribution.
    ///
    /// The variance is not validated. A negative variance yields `NaN`
    /// samples.
    #[must_use]
    pub const fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// The standard normal distribution, with mean 0 and variance 1.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The mean of the distribution.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// The variance of the distribution.
    #[must_use]
    pub const fn variance(&self) -> f64 {
        self.variance
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution<f64> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z = loop {
            let v1 = uniform(-1.0, 1.0, rng);
            let v2 = uniform(-1.0, 1.0, rng);
            if let Some(z) = polar_transform(v1, v2) {
                break z;
            }
        };
        self.variance.sqrt().mul_add(z, self.mean)
    }
}
