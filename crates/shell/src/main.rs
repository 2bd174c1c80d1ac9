//! CLI for generating and inspecting planar datasets.

mod commands;
mod utils;

use clap::Parser;
use rand::{RngCore, SeedableRng};

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use. Without one, every run differs.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The maximum level of messages written to the log file.
    #[arg(short('l'), long, default_value = "info")]
    log_level: utils::LogLevel,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger("planar", args.log_level.filter())?;
    ftlog::info!("{args:?}");
    ftlog::info!("Log file: {log_path:?}");

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut out = std::io::stdout().lock();
    match args.command {
        Commands::List => commands::list::print_datasets(&mut out)?,
        Commands::Generate {
            dataset,
            shuffle,
            header,
        } => {
            let examples = dataset.generate(&mut rng, shuffle);
            commands::generate::write_csv(&mut out, &examples, header)?;
        }
        Commands::Summary { dataset } => {
            let examples = dataset.generate(&mut rng, false);
            let summary = commands::summary::Summary::new(dataset.dataset.kind(), &examples);
            commands::summary::write_summary(&mut out, &dataset, &summary)?;
        }
    }

    Ok(())
}
