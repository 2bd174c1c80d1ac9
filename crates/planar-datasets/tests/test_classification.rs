//! Tests for the classification generators.

use planar_datasets::{
    classification::{self, circle_label, xor_label, CIRCLE_RADIUS, XOR_PADDING},
    Example, Point,
};
use rand::SeedableRng;
use test_case::test_case;

type Gen = fn(usize, f64, &mut rand::rngs::StdRng) -> Vec<Example>;

fn is_class(label: f64) -> bool {
    label.abs() == 1.0
}

#[test_case(classification::two_gaussians, 0)]
#[test_case(classification::two_gaussians, 1)]
#[test_case(classification::two_gaussians, 101)]
#[test_case(classification::spiral, 0)]
#[test_case(classification::spiral, 7)]
#[test_case(classification::spiral, 500)]
#[test_case(classification::circle, 1)]
#[test_case(classification::circle, 99)]
#[test_case(classification::circle, 200)]
fn even_split_lengths(generator: Gen, num_samples: usize) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for noise in [0.0, 0.25, 1.0] {
        let data = generator(num_samples, noise, &mut rng);
        assert_eq!(data.len(), 2 * (num_samples / 2));
        assert!(data.iter().all(|e| is_class(e.label)));
    }
}

#[test_case(0)]
#[test_case(1)]
#[test_case(333)]
fn xor_length(num_samples: usize) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::xor(num_samples, 0.3, &mut rng);
    assert_eq!(data.len(), num_samples);
    assert!(data.iter().all(|e| is_class(e.label)));
}

#[test]
fn two_gaussians_classes_by_blob() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::two_gaussians(1_000, 0.0, &mut rng);
    let (positive, negative) = data.split_at(500);
    assert!(positive.iter().all(|e| e.label > 0.0));
    assert!(negative.iter().all(|e| e.label < 0.0));

    let centroid = |half: &[Example]| {
        let n = 500.0;
        Point::new(
            half.iter().map(Example::x).sum::<f64>() / n,
            half.iter().map(Example::y).sum::<f64>() / n,
        )
    };
    assert!(centroid(positive).distance_to(&Point::new(2.0, 2.0)) < 0.2);
    assert!(centroid(negative).distance_to(&Point::new(-2.0, -2.0)) < 0.2);
}

#[test]
fn two_gaussians_variance_grows_with_noise() {
    let spread = |noise: f64| {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let data = classification::two_gaussians(10_000, noise, &mut rng);
        let positive = &data[..5_000];
        positive.iter().map(|e| (e.x() - 2.0).powi(2)).sum::<f64>() / 5_000.0
    };
    let low = spread(0.0);
    let high = spread(0.5);
    assert!((low - 0.5).abs() < 0.1, "variance at noise 0 was {low}");
    assert!((high - 4.0).abs() < 0.4, "variance at noise 0.5 was {high}");
}

#[test]
fn spiral_noiseless_arms() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::spiral(200, 0.0, &mut rng);
    let (positive, negative) = data.split_at(100);
    assert!(positive.iter().all(|e| e.label > 0.0));
    assert!(negative.iter().all(|e| e.label < 0.0));

    for (i, (p, n)) in positive.iter().zip(negative).enumerate() {
        let r = i as f64 / 100.0 * 5.0;
        assert!((p.point.distance_to(&Point::origin()) - r).abs() < 1e-9);
        // The arms are point reflections of each other.
        assert!((p.x() + n.x()).abs() < 1e-9 && (p.y() + n.y()).abs() < 1e-9);
    }
}

#[test]
fn circle_noiseless_labels() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::circle(1_000, 0.0, &mut rng);
    let (inner, outer) = data.split_at(500);
    for e in inner {
        assert!(e.label > 0.0);
        assert!(e.point.distance_to(&Point::origin()) < CIRCLE_RADIUS * 0.5);
    }
    for e in outer {
        assert!(e.label < 0.0);
        let r = e.point.distance_to(&Point::origin());
        assert!((CIRCLE_RADIUS * 0.7 - 1e-9..=CIRCLE_RADIUS + 1e-9).contains(&r));
    }
    assert!(data.iter().all(|e| (circle_label(&e.point) - e.label).abs() <= f64::EPSILON));
}

#[test]
fn circle_heavy_noise_flips_some_labels() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::circle(1_000, 1.0, &mut rng);
    let (inner, _) = data.split_at(500);
    assert!(inner.iter().any(|e| e.label < 0.0));
    assert!(inner.iter().all(|e| e.point.distance_to(&Point::origin()) < CIRCLE_RADIUS * 0.5));
}

#[test]
fn circle_label_threshold() {
    assert!(circle_label(&Point::new(0.0, 0.0)) > 0.0);
    assert!(circle_label(&Point::new(2.4, 0.0)) > 0.0);
    assert!(circle_label(&Point::new(0.0, -2.5)) < 0.0);
    assert!(circle_label(&Point::new(3.0, 4.0)) < 0.0);
}

#[test]
fn xor_noiseless_labels() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let data = classification::xor(2_000, 0.0, &mut rng);
    for e in &data {
        let expected = if e.x() * e.y() >= 0.0 { 1.0 } else { -1.0 };
        assert!((e.label - expected).abs() <= f64::EPSILON, "{e:?}");
        assert!(e.x().abs() >= XOR_PADDING && e.y().abs() >= XOR_PADDING, "{e:?}");
        assert!(e.x().abs() <= 5.0 + XOR_PADDING && e.y().abs() <= 5.0 + XOR_PADDING, "{e:?}");
    }
}

#[test]
fn xor_label_ties_are_positive() {
    assert!(xor_label(&Point::new(0.0, 3.0)) > 0.0);
    assert!(xor_label(&Point::new(-2.0, 0.0)) > 0.0);
    assert!(xor_label(&Point::new(-2.0, 1.0)) < 0.0);
    assert!(xor_label(&Point::new(-2.0, -1.0)) > 0.0);
}

#[test_case(classification::glyph_a)]
#[test_case(classification::glyph_b)]
fn glyphs(generator: Gen) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    assert!(generator(0, 0.1, &mut rng).is_empty());

    let data = generator(1_000, 0.1, &mut rng);
    assert!(data.len() <= 1_000 && data.len() >= 995);
    assert!(data.iter().all(|e| is_class(e.label)));
    assert!(data.iter().any(|e| e.label > 0.0));
    assert!(data.iter().any(|e| e.label < 0.0));

    // Positive letters sit on the left, negative ones on the right.
    let noiseless = generator(1_000, 0.0, &mut rng);
    assert!(noiseless.iter().all(|e| (e.label > 0.0) == (e.x() < 0.0)));
}
