//! Benchmark driver comparing classical and Strassen multiplication.

use std::fs::{self, File};
use std::io::BufWriter;
use std::time::Instant;

use anyhow::{Context, Result};
use matcmp::report::{self, TrialAverages};
use matcmp::{multiply_ikj, random_matrix, strassen};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The sweep covers sizes 2^1 through 2^MAX_POWER.
const MAX_POWER: u32 = 8;
/// Full sweeps averaged into the CSV report.
const TRIALS: u32 = 5;
const CSV_PATH: &str = "results/output_data.csv";

fn main() -> Result<()> {
    let mut rng = StdRng::from_entropy();

    println!("=== Classical vs Strassen ===\n");
    head_to_head(&mut rng)?;

    println!("\n=== Classical, averaged over {TRIALS} trials ===\n");
    let averages = classical_trials(&mut rng);

    fs::create_dir_all("results").context("creating results directory")?;
    let file = File::create(CSV_PATH).with_context(|| format!("creating {CSV_PATH}"))?;
    averages
        .write_csv(&mut BufWriter::new(file))
        .with_context(|| format!("writing {CSV_PATH}"))?;

    Ok(())
}

/// Time both algorithms once per size and print the comparison table.
fn head_to_head(rng: &mut StdRng) -> Result<()> {
    println!("Size\tClassical(ms)\tStrassen(ms)");
    for n in report::sizes(MAX_POWER) {
        let a = random_matrix(n, rng);
        let b = random_matrix(n, rng);

        let start = Instant::now();
        let _ = multiply_ikj(&a, &b);
        let classical_ms = start.elapsed().as_millis();

        let start = Instant::now();
        let _ = strassen::multiply(&a, &b)?;
        let strassen_ms = start.elapsed().as_millis();

        println!("{n}\t{classical_ms}\t{strassen_ms}");
    }
    Ok(())
}

/// Time the classical multiplier over repeated sweeps, printing each sweep
/// and accumulating per-size totals for the CSV report.
fn classical_trials(rng: &mut StdRng) -> TrialAverages {
    let mut averages = TrialAverages::new(report::sizes(MAX_POWER));
    for trial in 1..=TRIALS {
        println!("Trial {trial}");
        println!("Size\tClassical(ms)");

        let mut timings = Vec::with_capacity(MAX_POWER as usize);
        for n in report::sizes(MAX_POWER) {
            let a = random_matrix(n, rng);
            let b = random_matrix(n, rng);

            let start = Instant::now();
            let _ = multiply_ikj(&a, &b);
            let ms = start.elapsed().as_millis() as u64;

            println!("{n}\t{ms}");
            timings.push(ms);
        }
        averages.record_trial(&timings);
    }
    averages
}
