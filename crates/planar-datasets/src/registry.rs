//! The named datasets a caller can choose from.

use rand::Rng;

use crate::{classification, regression, types::Example};

/// A dataset generator: `(num_samples, noise, rng) -> examples`.
pub type Generator<R> = fn(usize, f64, &mut R) -> Vec<Example>;

/// Whether a dataset's labels are classes or continuous values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Labels are exactly `-1.0` or `1.0`.
    Classification,
    /// Labels are any real number.
    Regression,
}

impl DatasetKind {
    /// The name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The named datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Two Gaussian blobs.
    TwoGaussians,
    /// Two interleaved spiral arms.
    Spiral,
    /// A disk inside an annulus.
    Circle,
    /// The four quadrants, labeled by `sign(x * y)`.
    Xor,
    /// The letters "A" and "V".
    GlyphA,
    /// The letters "T" and "L".
    GlyphB,
    /// A tilted plane.
    RegressPlane,
    /// Six signed Gaussian bumps.
    RegressGaussian,
}

impl Dataset {
    /// Every dataset, classification first.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::TwoGaussians,
            Self::Spiral,
            Self::Circle,
            Self::Xor,
            Self::GlyphA,
            Self::GlyphB,
            Self::RegressPlane,
            Self::RegressGaussian,
        ]
    }

    /// The short name of the dataset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TwoGaussians => "gauss",
            Self::Spiral => "spiral",
            Self::Circle => "circle",
            Self::Xor => "xor",
            Self::GlyphA => "glyph-a",
            Self::GlyphB => "glyph-b",
            Self::RegressPlane => "reg-plane",
            Self::RegressGaussian => "reg-gauss",
        }
    }

    /// Whether the dataset is for classification or regression.
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::RegressPlane | Self::RegressGaussian => DatasetKind::Regression,
            _ => DatasetKind::Classification,
        }
    }

    /// The generator function behind the dataset.
    #[must_use]
    pub fn generator<R: Rng>(&self) -> Generator<R> {
        match self {
            Self::TwoGaussians => classification::two_gaussians::<R>,
            Self::Spiral => classification::spiral::<R>,
            Self::Circle => classification::circle::<R>,
            Self::Xor => classification::xor::<R>,
            Self::GlyphA => classification::glyph_a::<R>,
            Self::GlyphB => classification::glyph_b::<R>,
            Self::RegressPlane => regression::plane::<R>,
            Self::RegressGaussian => regression::gaussian_field::<R>,
        }
    }

    /// Generates the dataset.
    ///
    /// # Arguments
    ///
    /// * `num_samples`: the nominal number of examples.
    /// * `noise`: the noise level, conventionally in `[0, 1]`.
    /// * `rng`: random number generator.
    pub fn generate<R: Rng>(&self, num_samples: usize, noise: f64, rng: &mut R) -> Vec<Example> {
        (self.generator::<R>())(num_samples, noise, rng)
    }

    /// Generates the dataset from the thread-local random number generator.
    #[must_use]
    pub fn generate_with_thread_rng(&self, num_samples: usize, noise: f64) -> Vec<Example> {
        self.generate(num_samples, noise, &mut rand::thread_rng())
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("Unknown dataset: {s}"))
    }
}
