#![doc = include_str!("../README.md")]

pub mod classification;
pub mod glyphs;
pub mod lines;
pub mod random;
pub mod registry;
pub mod regression;
pub mod types;
pub mod utils;

pub use registry::{Dataset, DatasetKind, Generator};
pub use types::{Example, LineDescriptor, Point};
pub use utils::shuffle;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
