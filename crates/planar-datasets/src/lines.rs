//! Labeled points scattered along weighted line segments.

use distances::Number;
use rand::Rng;

use crate::{
    random::{on_segment, uniform},
    types::{Example, LineDescriptor},
};

/// The default half-width of the uniform noise added to each coordinate.
pub const DEFAULT_NOISE_RADIUS: f64 = 3.0;

/// The number of points each descriptor receives out of `num_samples`.
///
/// A descriptor's quota is `floor(ratio / total_ratio * num_samples)`. The
/// quotas may sum to less than `num_samples` because each one is rounded
/// down on its own.
///
/// # Errors
///
/// * If `descriptors` is empty.
/// * If any ratio is negative or not finite.
/// * If the ratios do not sum to a positive, finite number.
#[allow(clippy::cast_possible_truncation)]
pub fn quotas(descriptors: &[LineDescriptor], num_samples: usize) -> Result<Vec<usize>, String> {
    if descriptors.is_empty() {
        return Err("No positive-weight line descriptors: the list is empty.".to_string());
    }

    if let Some(d) = descriptors.iter().find(|d| !d.ratio.is_finite() || d.ratio < 0.0) {
        return Err(format!("Line descriptor ratios must be finite and non-negative. Got {}.", d.ratio));
    }

    let total_ratio = descriptors.iter().map(|d| d.ratio).sum::<f64>();
    if total_ratio <= 0.0 {
        return Err("No positive-weight line descriptors: the ratios sum to zero.".to_string());
    }
    if !total_ratio.is_finite() {
        return Err(format!("Line descriptor ratios overflow when summed. Got {total_ratio}."));
    }

    let n = num_samples.as_f64();
    Ok(descriptors
        .iter()
        .map(|d| (d.ratio / total_ratio * n).floor().as_u64() as usize)
        .collect())
}

/// Generates labeled points along the given line segments.
///
/// Each descriptor, in order, receives its quota of points (see [`quotas`]).
/// Each point is drawn uniformly on the descriptor's segment and then moved
/// by `uniform(-noise_radius, noise_radius) * noise` along each axis. The
/// output is grouped by descriptor in input order.
///
/// # Arguments
///
/// * `num_samples`: the nominal number of points to generate.
/// * `noise`: scale of the perturbation, conventionally in `[0, 1]`.
/// * `descriptors`: the weighted, labeled segments.
/// * `noise_radius`: half-width of the per-axis noise before scaling.
/// * `rng`: random number generator.
///
/// # Errors
///
/// See [`quotas`].
pub fn generate<R: Rng + ?Sized>(
    num_samples: usize,
    noise: f64,
    descriptors: &[LineDescriptor],
    noise_radius: f64,
    rng: &mut R,
) -> Result<Vec<Example>, String> {
    let quotas = quotas(descriptors, num_samples)?;
    ftlog::debug!(
        "Sampling {} points along {} segments with noise {noise}.",
        quotas.iter().sum::<usize>(),
        descriptors.len()
    );

    let mut examples = Vec::with_capacity(quotas.iter().sum());
    for (descriptor, &quota) in descriptors.iter().zip(quotas.iter()) {
        ftlog::trace!("Segment {descriptor:?} receives {quota} points.");
        for _ in 0..quota {
            let p = on_segment(descriptor.start, descriptor.end, rng);
            let x = uniform(-noise_radius, noise_radius, rng).mul_add(noise, p.x);
            let y = uniform(-noise_radius, noise_radius, rng).mul_add(noise, p.y);
            examples.push(Example::new(x, y, descriptor.label));
        }
    }

    Ok(examples)
}

/// Like [`generate`], with the default noise radius of 3.
///
/// # Errors
///
/// See [`quotas`].
pub fn generate_default<R: Rng + ?Sized>(
    num_samples: usize,
    noise: f64,
    descriptors: &[LineDescriptor],
    rng: &mut R,
) -> Result<Vec<Example>, String> {
    generate(num_samples, noise, descriptors, DEFAULT_NOISE_RADIUS, rng)
}
