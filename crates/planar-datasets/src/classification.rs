//! Generators for two-class datasets, labeled `1.0` or `-1.0`.
//!
//! The two-Gaussian, spiral and circle generators split the samples evenly
//! between the classes, so they return `2 * (num_samples / 2)` examples. The
//! XOR generator returns exactly `num_samples` examples and the glyph
//! generators return whatever their line quotas add up to.

use core::f64::consts::PI;

use distances::Number;
use rand::Rng;

use crate::{
    glyphs, lines,
    random::{normal, uniform},
    types::{Example, Point},
    utils::LinearScale,
};

/// Radius of the outer edge of the circle dataset.
pub const CIRCLE_RADIUS: f64 = 5.0;

/// Half-width of the square the XOR dataset is drawn from.
pub const XOR_HALF_WIDTH: f64 = 5.0;

/// How far XOR coordinates are pushed away from the axes.
pub const XOR_PADDING: f64 = 0.3;

/// Maps the noise level onto the variance of each Gaussian blob.
const VARIANCE_SCALE: LinearScale = LinearScale::new((0.0, 0.5), (0.5, 4.0));

/// Maps a boolean to a class label.
const fn class_label(positive: bool) -> f64 {
    if positive {
        1.0
    } else {
        -1.0
    }
}

/// Draws `count` points around `center`, each coordinate normally
/// distributed with the given `variance`.
pub fn gaussian_blob<R: Rng + ?Sized>(center: Point, variance: f64, label: f64, count: usize, rng: &mut R) -> Vec<Example> {
    (0..count)
        .map(|_| {
            let x = normal(center.x, variance, rng);
            let y = normal(center.y, variance, rng);
            Example::new(x, y, label)
        })
        .collect()
}

/// Two Gaussian blobs, positive at `(2, 2)` and negative at `(-2, -2)`.
///
/// The variance of both blobs grows linearly from 0.5 to 4 as `noise` goes
/// from 0 to 0.5, and keeps growing past that.
pub fn two_gaussians<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating two Gaussians with {num_samples} samples and noise {noise}.");

    let variance = VARIANCE_SCALE.apply(noise);
    let half = num_samples / 2;

    let mut examples = gaussian_blob(Point::new(2.0, 2.0), variance, 1.0, half, rng);
    examples.extend(gaussian_blob(Point::new(-2.0, -2.0), variance, -1.0, half, rng));
    examples
}

/// Appends one arm of the spiral to `examples`.
fn spiral_arm<R: Rng + ?Sized>(n: usize, delta_t: f64, label: f64, noise: f64, rng: &mut R, examples: &mut Vec<Example>) {
    let n_f = n.as_f64();
    for i in 0..n {
        let progress = i.as_f64() / n_f;
        let r = progress * 5.0;
        let t = (1.75 * progress).mul_add(2.0 * PI, delta_t);
        let x = r.mul_add(t.sin(), uniform(-1.0, 1.0, rng) * noise);
        let y = r.mul_add(t.cos(), uniform(-1.0, 1.0, rng) * noise);
        examples.push(Example::new(x, y, label));
    }
}

/// Two interleaved spiral arms, the negative one rotated by `pi`.
pub fn spiral<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating spiral with {num_samples} samples and noise {noise}.");

    let half = num_samples / 2;
    let mut examples = Vec::with_capacity(2 * half);
    spiral_arm(half, 0.0, 1.0, noise, rng, &mut examples);
    spiral_arm(half, PI, -1.0, noise, rng, &mut examples);
    examples
}

/// The label of the circle dataset at `p`: positive inside half the radius.
#[must_use]
pub fn circle_label(p: &Point) -> f64 {
    class_label(p.distance_to(&Point::origin()) < CIRCLE_RADIUS * 0.5)
}

/// Appends points drawn in the annulus `[r_min, r_max)` to `examples`.
///
/// The emitted coordinates are noise-free. The label is computed at a copy
/// of the point moved by noise scaled by [`CIRCLE_RADIUS`], so heavy noise
/// can put a point in the other class.
fn circle_ring<R: Rng + ?Sized>(count: usize, r_min: f64, r_max: f64, noise: f64, rng: &mut R, examples: &mut Vec<Example>) {
    for _ in 0..count {
        let r = uniform(r_min, r_max, rng);
        let angle = uniform(0.0, 2.0 * PI, rng);
        let p = Point::new(r * angle.sin(), r * angle.cos());

        let jitter = Point::new(
            uniform(-CIRCLE_RADIUS, CIRCLE_RADIUS, rng),
            uniform(-CIRCLE_RADIUS, CIRCLE_RADIUS, rng),
        ) * noise;
        let label = circle_label(&(p + jitter));

        examples.push(Example { point: p, label });
    }
}

/// A disk of radius 2.5 inside an annulus spanning radii 3.5 to 5.
pub fn circle<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating circle with {num_samples} samples and noise {noise}.");

    let half = num_samples / 2;
    let mut examples = Vec::with_capacity(2 * half);
    circle_ring(half, 0.0, CIRCLE_RADIUS * 0.5, noise, rng, &mut examples);
    circle_ring(half, CIRCLE_RADIUS * 0.7, CIRCLE_RADIUS, noise, rng, &mut examples);
    examples
}

/// The label of the XOR dataset at `p`: positive where `x * y >= 0`.
#[must_use]
pub fn xor_label(p: &Point) -> f64 {
    class_label(p.x * p.y >= 0.0)
}

/// Pushes `v` away from zero by [`XOR_PADDING`].
fn pad(v: f64) -> f64 {
    if v > 0.0 {
        v + XOR_PADDING
    } else {
        v - XOR_PADDING
    }
}

/// Points in the four quadrants, labeled by the sign of `x * y`.
///
/// Coordinates are drawn from `[-5, 5]` and pushed away from the axes by
/// [`XOR_PADDING`]. The emitted coordinates are noise-free; the label is
/// taken at a noisy copy of the point.
pub fn xor<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating XOR with {num_samples} samples and noise {noise}.");

    (0..num_samples)
        .map(|_| {
            let x = pad(uniform(-XOR_HALF_WIDTH, XOR_HALF_WIDTH, rng));
            let y = pad(uniform(-XOR_HALF_WIDTH, XOR_HALF_WIDTH, rng));
            let noise_x = uniform(-XOR_HALF_WIDTH, XOR_HALF_WIDTH, rng) * noise;
            let noise_y = uniform(-XOR_HALF_WIDTH, XOR_HALF_WIDTH, rng) * noise;
            Example::new(x, y, xor_label(&Point::new(x + noise_x, y + noise_y)))
        })
        .collect()
}

/// The letters "A" (positive) and "V" (negative). See [`glyphs::A_AND_V`].
pub fn glyph_a<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating glyph A/V with {num_samples} samples and noise {noise}.");
    lines::generate_default(num_samples, noise, &glyphs::A_AND_V, rng).unwrap_or_else(|e| unreachable!("{e}"))
}

/// The letters "T" (positive) and "L" (negative). See [`glyphs::T_AND_L`].
pub fn glyph_b<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating glyph T/L with {num_samples} samples and noise {noise}.");
    lines::generate_default(num_samples, noise, &glyphs::T_AND_L, rng).unwrap_or_else(|e| unreachable!("{e}"))
}
