//! Summary statistics of a generated dataset.

use std::io::Write;

use distances::Number;
use planar_datasets::{DatasetKind, Example};

use super::DatasetArgs;

/// Statistics of the labels of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelStats {
    /// Counts of each class.
    Classes {
        /// Examples labeled `1.0`.
        positive: usize,
        /// Examples labeled `-1.0`.
        negative: usize,
    },
    /// Range and mean of continuous labels.
    Values {
        /// The smallest label.
        min: f64,
        /// The mean label.
        mean: f64,
        /// The largest label.
        max: f64,
    },
}

/// Summary statistics of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The number of examples.
    pub cardinality: usize,
    /// The smallest `x` and `y` over all examples.
    pub lower: (f64, f64),
    /// The largest `x` and `y` over all examples.
    pub upper: (f64, f64),
    /// Statistics of the labels.
    pub labels: LabelStats,
}

impl Summary {
    /// Computes the summary of `examples`.
    ///
    /// The bounds and label range of an empty dataset are infinite and the
    /// mean is `NaN`.
    pub fn new(kind: DatasetKind, examples: &[Example]) -> Self {
        let (lower, upper) = examples.iter().fold(
            ((f64::INFINITY, f64::INFINITY), (f64::NEG_INFINITY, f64::NEG_INFINITY)),
            |((lx, ly), (ux, uy)), e| ((lx.min(e.x()), ly.min(e.y())), (ux.max(e.x()), uy.max(e.y()))),
        );

        let labels = match kind {
            DatasetKind::Classification => {
                let positive = examples.iter().filter(|e| e.label > 0.0).count();
                LabelStats::Classes {
                    positive,
                    negative: examples.len() - positive,
                }
            }
            DatasetKind::Regression => {
                let (min, max, sum) = examples.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY, 0.0),
                    |(min, max, sum), e| (min.min(e.label), max.max(e.label), sum + e.label),
                );
                let mean = sum / examples.len().as_f64();
                LabelStats::Values { min, mean, max }
            }
        };

        Self {
            cardinality: examples.len(),
            lower,
            upper,
            labels,
        }
    }
}

/// Writes the summary as human-readable lines.
pub fn write_summary<W: Write>(out: &mut W, args: &DatasetArgs, summary: &Summary) -> Result<(), String> {
    let mut lines = vec![
        format!("dataset: {} ({})", args.dataset, args.dataset.kind()),
        format!("requested: {} samples at noise {}", args.num_samples, args.noise),
        format!("generated: {}", summary.cardinality),
        format!("x range: [{:.4}, {:.4}]", summary.lower.0, summary.upper.0),
        format!("y range: [{:.4}, {:.4}]", summary.lower.1, summary.upper.1),
    ];
    match summary.labels {
        LabelStats::Classes { positive, negative } => {
            lines.push(format!("positive: {positive}"));
            lines.push(format!("negative: {negative}"));
        }
        LabelStats::Values { min, mean, max } => {
            lines.push(format!("label min: {min:.4}"));
            lines.push(format!("label mean: {mean:.4}"));
            lines.push(format!("label max: {max:.4}"));
        }
    }

    for line in lines {
        writeln!(out, "{line}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use planar_datasets::{Dataset, DatasetKind, Example};
    use rand::SeedableRng;
    use test_case::test_case;

    use super::{LabelStats, Summary};

    #[test]
    fn classification_counts() {
        let examples = [
            Example::new(-1.0, 2.0, 1.0),
            Example::new(3.0, -4.0, -1.0),
            Example::new(0.5, 0.5, 1.0),
        ];
        let summary = Summary::new(DatasetKind::Classification, &examples);
        assert_eq!(summary.cardinality, 3);
        assert_eq!(summary.lower, (-1.0, -4.0));
        assert_eq!(summary.upper, (3.0, 2.0));
        assert_eq!(summary.labels, LabelStats::Classes { positive: 2, negative: 1 });
    }

    #[test]
    fn regression_values() {
        let examples = [Example::new(0.0, 0.0, -0.5), Example::new(1.0, 1.0, 1.5)];
        let summary = Summary::new(DatasetKind::Regression, &examples);
        assert_eq!(
            summary.labels,
            LabelStats::Values {
                min: -0.5,
                mean: 0.5,
                max: 1.5
            }
        );
    }

    #[test]
    fn regression_mean_over_many() {
        let examples = (0..10).map(|i| Example::new(0.0, 0.0, f64::from(i))).collect::<Vec<_>>();
        let summary = Summary::new(DatasetKind::Regression, &examples);
        assert_eq!(
            summary.labels,
            LabelStats::Values {
                min: 0.0,
                mean: 4.5,
                max: 9.0
            }
        );

        let empty = Summary::new(DatasetKind::Regression, &[]);
        assert_eq!(empty.cardinality, 0);
        assert!(matches!(empty.labels, LabelStats::Values { mean, .. } if mean.is_nan()));
    }

    #[test_case(Dataset::Spiral, 200)]
    #[test_case(Dataset::Xor, 200)]
    #[test_case(Dataset::GlyphB, 240)]
    fn balanced_classes(dataset: Dataset, num_samples: usize) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let examples = dataset.generate(num_samples, 0.0, &mut rng);
        let summary = Summary::new(dataset.kind(), &examples);
        assert_eq!(summary.cardinality, examples.len());
        assert!(summary.cardinality <= num_samples);
        match summary.labels {
            LabelStats::Classes { positive, negative } => {
                assert_eq!(positive + negative, examples.len());
                assert!(positive > 0 && negative > 0);
            }
            LabelStats::Values { .. } => unreachable!("{dataset} is a classification dataset"),
        }
    }
}
