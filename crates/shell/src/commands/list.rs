//! Listing the available datasets.

use std::io::Write;

use planar_datasets::Dataset;

/// Writes one `name<TAB>kind` line per dataset.
pub fn print_datasets<W: Write>(out: &mut W) -> Result<(), String> {
    for dataset in Dataset::all() {
        writeln!(out, "{dataset}\t{}", dataset.kind()).map_err(|e| e.to_string())?;
    }
    Ok(())
}
