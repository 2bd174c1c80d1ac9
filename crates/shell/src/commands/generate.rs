//! Printing a dataset as CSV.

use std::io::Write;

use planar_datasets::Example;

/// Writes `examples` as `x,y,label` rows, optionally preceded by a header.
pub fn write_csv<W: Write>(out: &mut W, examples: &[Example], header: bool) -> Result<(), String> {
    let mut out = std::io::BufWriter::new(out);
    if header {
        writeln!(out, "x,y,label").map_err(|e| e.to_string())?;
    }
    for e in examples {
        writeln!(out, "{},{},{}", e.x(), e.y(), e.label).map_err(|err| err.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}
