use std::{path::PathBuf, time::Instant};

use batsp::{log::build_solver_logger_for_verbosity, prelude::*};
use glob::glob;
use itertools::Itertools;
use structopt::StructOpt;

const GREEN_BOLD: &str = "\x1b[1;32m";
const RED_BOLD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

#[derive(StructOpt)]
struct Opts {
    /// Glob pattern selecting the instances to run
    #[structopt(short, long, default_value = "instances/*.atsp")]
    pattern: String,

    /// Number of timed runs per instance
    #[structopt(long, default_value = "1")]
    iterations: u32,

    /// Append one JSON record per run to this file
    #[structopt(short, long)]
    results: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_solver_logger_for_verbosity(::log::LevelFilter::Warn, opts.verbose);

    let files = glob(&opts.pattern)?
        .map(|r| r.expect("Failed to access globbed path"))
        .sorted()
        .collect_vec();
    anyhow::ensure!(!files.is_empty(), "no instances match {}", opts.pattern);

    let mut results = opts
        .results
        .as_ref()
        .map(BenchmarkWriter::try_create)
        .transpose()?;

    let start_vertex = 0;
    let mut failures = 0u32;

    for file in &files {
        let filename = String::from(file.as_os_str().to_str().unwrap());
        let matrix = GraphMatrix::try_read_atsp_file(file)?;

        for _ in 0..opts.iterations {
            let start = Instant::now();
            let tour = branch_and_bound_solver(&matrix, start_vertex);
            let elapsed = start.elapsed();

            assert!(tour.is_valid(&matrix, start_vertex));
            let correct = matrix.optimum().is_none_or(|opt| opt == tour.weight());
            failures += !correct as u32;

            let verdict = if correct {
                format!("{GREEN_BOLD}PASS{RESET}")
            } else {
                format!("{RED_BOLD}FAIL{RESET}")
            };

            println!(
                "{filename:<40} | {:>5} | {:>6} ({:>6}) | {verdict} | {:>9} ns",
                matrix.number_of_vertices(),
                tour.weight(),
                matrix
                    .optimum()
                    .map_or_else(|| String::from("?"), |opt| format!("{opt}")),
                elapsed.as_nanos()
            );

            if let Some(writer) = results.as_mut() {
                writer.append(&BenchmarkRecord {
                    instance: filename.clone(),
                    vertices: matrix.number_of_vertices(),
                    weight: tour.weight(),
                    optimum: matrix.optimum(),
                    correct,
                    elapsed_ns: elapsed.as_nanos() as u64,
                })?;
            }
        }
    }

    anyhow::ensure!(failures == 0, "{failures} runs missed the recorded optimum");

    Ok(())
}
