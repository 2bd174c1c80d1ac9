//! Generators for datasets with continuous labels.
//!
//! Both generators draw `num_samples` points uniformly from `[-6, 6]²` and
//! emit them noise-free. The label is evaluated at a copy of each point moved
//! by `uniform(-6, 6) * noise` along each axis.

use rand::Rng;

use crate::{
    random::uniform,
    types::{Example, Point},
    utils::LinearScale,
};

/// Half-width of the square the regression datasets are drawn from.
pub const REGRESSION_RADIUS: f64 = 6.0;

/// Maps `x + y` onto the plane label. Not clamped.
const PLANE_SCALE: LinearScale = LinearScale::new((-10.0, 10.0), (-1.0, 1.0));

/// Maps the distance from a Gaussian center onto its magnitude.
const GAUSSIAN_SCALE: LinearScale = LinearScale::new((0.0, 2.0), (1.0, 0.0)).clamped();

/// The centers of the Gaussian field and the sign of each bump.
pub const GAUSSIAN_CENTERS: [(Point, f64); 6] = [
    (Point::new(-4.0, 2.5), 1.0),
    (Point::new(0.0, 2.5), -1.0),
    (Point::new(4.0, 2.5), 1.0),
    (Point::new(-4.0, -2.5), -1.0),
    (Point::new(0.0, -2.5), 1.0),
    (Point::new(4.0, -2.5), -1.0),
];

/// The label of the plane dataset at `p`.
///
/// Maps `x + y` linearly from `[-10, 10]` onto `[-1, 1]`, without clamping.
#[must_use]
pub fn plane_label(p: &Point) -> f64 {
    PLANE_SCALE.apply(p.x + p.y)
}

/// The label of the Gaussian-field dataset at `p`.
///
/// Each center contributes `sign * scale(distance)`, where the scale maps
/// `[0, 2]` onto `[1, 0]` and is clamped. The label is the contribution with
/// the largest magnitude; ties keep the earlier center.
#[must_use]
pub fn gaussian_label(p: &Point) -> f64 {
    GAUSSIAN_CENTERS.iter().fold(0.0, |label, (center, sign)| {
        let contribution = sign * GAUSSIAN_SCALE.apply(p.distance_to(center));
        if contribution.abs() > label.abs() {
            contribution
        } else {
            label
        }
    })
}

/// Draws `num_samples` noise-free points, labeling each at a noisy copy.
fn labeled_square<R, F>(num_samples: usize, noise: f64, label_at: F, rng: &mut R) -> Vec<Example>
where
    R: Rng + ?Sized,
    F: Fn(&Point) -> f64,
{
    (0..num_samples)
        .map(|_| {
            let p = Point::new(
                uniform(-REGRESSION_RADIUS, REGRESSION_RADIUS, rng),
                uniform(-REGRESSION_RADIUS, REGRESSION_RADIUS, rng),
            );
            let jitter = Point::new(
                uniform(-REGRESSION_RADIUS, REGRESSION_RADIUS, rng),
                uniform(-REGRESSION_RADIUS, REGRESSION_RADIUS, rng),
            ) * noise;
            Example {
                point: p,
                label: label_at(&(p + jitter)),
            }
        })
        .collect()
}

/// A tilted plane whose label rises along the `x = y` diagonal.
pub fn plane<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating regression plane with {num_samples} samples and noise {noise}.");
    labeled_square(num_samples, noise, plane_label, rng)
}

/// Six signed Gaussian bumps arranged in two rows of three.
pub fn gaussian_field<R: Rng + ?Sized>(num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    ftlog::debug!("Generating regression Gaussian field with {num_samples} samples and noise {noise}.");
    labeled_square(num_samples, noise, gaussian_label, rng)
}
