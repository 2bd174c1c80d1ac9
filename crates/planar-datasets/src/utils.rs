//! Helpers shared across the generators.

use rand::Rng;

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Walks a counter from `items.len()` down to 1, swapping the element at
/// `counter - 1` with one drawn uniformly from `[0, counter)`. Every
/// permutation is equally likely. Empty and single-element slices are left
/// untouched.
///
/// # Arguments
///
/// * `items`: the slice to shuffle.
/// * `rng`: random number generator.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for counter in (1..=items.len()).rev() {
        let index = rng.gen_range(0..counter);
        items.swap(counter - 1, index);
    }
}

/// A linear map from a `domain` interval onto a `range` interval.
///
/// Values outside the domain extrapolate linearly unless the scale is
/// clamped, in which case they map onto the nearest end of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    /// The input interval.
    domain: (f64, f64),
    /// The output interval.
    range: (f64, f64),
    /// Whether outputs are kept inside the range.
    clamp: bool,
}

impl LinearScale {
    /// Creates a new, unclamped `LinearScale`.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Returns a copy of the scale that clamps its outputs to the range.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self { clamp: true, ..self }
    }

    /// Maps `value` from the domain onto the range.
    ///
    /// A degenerate domain (both ends equal) maps everything to the start of
    /// the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_datasets::utils::LinearScale;
    ///
    /// let scale = LinearScale::new((0.0, 0.5), (0.5, 4.0));
    /// assert!((scale.apply(0.25) - 2.25).abs() <= f64::EPSILON);
    /// assert!((scale.apply(1.0) - 7.5).abs() <= f64::EPSILON);
    ///
    /// let clamped = scale.clamped();
    /// assert!((clamped.apply(1.0) - 4.0).abs() <= f64::EPSILON);
    /// ```
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let width = d1 - d0;
        let mut t = if width == 0.0 { 0.0 } else { (value - d0) / width };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        t.mul_add(r1 - r0, r0)
    }
}
