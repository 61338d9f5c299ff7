use std::{path::PathBuf, time::Instant};

use batsp::{log::build_solver_logger_for_verbosity, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opts {
    #[structopt(long, default_value = "3")]
    min_size: NumVertices,

    #[structopt(long, default_value = "10")]
    max_size: NumVertices,

    /// Number of instances generated and solved per size
    #[structopt(long, default_value = "5")]
    iterations: u32,

    #[structopt(long, default_value = "1")]
    seed: u64,

    /// Upper bound on generated edge weights
    #[structopt(long, default_value = "10")]
    max_weight: Weight,

    /// Cross-check every result against brute force (sizes up to 8)
    #[structopt(short, long)]
    check: bool,

    /// Dump every generated instance to this directory
    #[structopt(short, long)]
    write: Option<PathBuf>,

    /// Append one JSON record per size to this file
    #[structopt(short, long)]
    results: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_solver_logger_for_verbosity(::log::LevelFilter::Warn, opts.verbose);

    anyhow::ensure!(opts.min_size >= 1 && opts.min_size <= opts.max_size);
    anyhow::ensure!(opts.iterations >= 1);

    if let Some(dir) = &opts.write {
        std::fs::create_dir_all(dir)?;
    }

    let mut results = opts
        .results
        .as_ref()
        .map(BenchmarkWriter::try_create)
        .transpose()?;

    let mut rng = Pcg64::seed_from_u64(opts.seed);
    let start_vertex = 0;

    for n in opts.min_size..=opts.max_size {
        let mut total_ns = 0u64;

        for i in 0..opts.iterations {
            let mut matrix = GraphMatrix::random_complete(&mut rng, n, opts.max_weight);

            let start = Instant::now();
            let tour = branch_and_bound_solver(&matrix, start_vertex);
            total_ns += start.elapsed().as_nanos() as u64;

            assert!(tour.is_valid(&matrix, start_vertex));

            if opts.check && n <= 8 {
                let reference = brute_force_solver(&matrix, start_vertex);
                assert_eq!(
                    tour.weight(),
                    reference.weight(),
                    "mismatch on n={n} iteration={i}"
                );
            }

            if let Some(dir) = &opts.write {
                matrix.set_optimum(tour.weight());
                matrix.try_write_atsp_file(dir.join(format!("random_n{n:03}_{i:03}.atsp")))?;
            }
        }

        let average_ns = total_ns / opts.iterations as u64;
        println!("n = {n:>4} | average over {} runs: {average_ns:>12} ns", opts.iterations);

        if let Some(writer) = results.as_mut() {
            writer.append(&SweepRecord {
                vertices: n,
                iterations: opts.iterations,
                average_ns,
            })?;
        }
    }

    Ok(())
}
