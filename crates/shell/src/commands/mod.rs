//! The commands under the `planar` CLI.

pub mod generate;
pub mod list;
pub mod summary;

use clap::Subcommand;
use planar_datasets::{Dataset, Example};
use rand::Rng;

/// Which dataset to generate, and how.
#[derive(clap::Args, Debug, Clone)]
pub struct DatasetArgs {
    /// The name of the dataset. Run `planar list` to see them all.
    #[arg(short('d'), long)]
    pub dataset: Dataset,

    /// The nominal number of examples to generate.
    #[arg(short('n'), long, default_value_t = 500)]
    pub num_samples: usize,

    /// The noise level, conventionally between 0 and 1.
    #[arg(short('e'), long, default_value_t = 0.0)]
    pub noise: f64,
}

impl DatasetArgs {
    /// Generates the dataset, optionally shuffling the examples.
    pub fn generate<R: Rng>(&self, rng: &mut R, shuffle: bool) -> Vec<Example> {
        ftlog::info!(
            "Generating {} with {} samples and noise {}.",
            self.dataset,
            self.num_samples,
            self.noise
        );
        let mut examples = self.dataset.generate(self.num_samples, self.noise, rng);
        ftlog::info!("Generated {} examples.", examples.len());

        if shuffle {
            ftlog::info!("Shuffling examples.");
            planar_datasets::shuffle(&mut examples, rng);
        }
        examples
    }
}

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available datasets.
    List,
    /// Print a dataset as `x,y,label` CSV rows.
    Generate {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Whether to shuffle the examples before printing.
        #[arg(long, default_value_t = false)]
        shuffle: bool,

        /// Whether to print an `x,y,label` header row.
        #[arg(long, default_value_t = false)]
        header: bool,
    },
    /// Print summary statistics of a dataset.
    Summary {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}
