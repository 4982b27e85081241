//! Times every strategy over matrix sizes 4 to 1024 and writes the
//! best times to `timings.csv`.
//!
//! Run with `cargo run --release --example timings [output.csv]`.

use cholbench::harness::*;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), HarnessError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "timings.csv".to_string());

    let settings = HarnessSettingsBuilder::<f64>::default()
        .strategies(["sequential", "vectorized", "parallel", "auto"].map(String::from).to_vec())
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let report = run_benchmark(settings)?;

    let mut out = BufWriter::new(File::create(&path)?);
    report.write_delimited(&mut out, ',')?;
    println!("timings written to {path}");
    Ok(())
}
