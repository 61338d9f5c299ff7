use std::{fs::File, path::PathBuf};

use batsp::{log::build_solver_logger_for_verbosity, prelude::*};
use log::info;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opts {
    /// Instance file; reads from stdin when absent
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Tour output file; writes to stdout when absent
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Vertex at which the tour starts and ends
    #[structopt(short, long, default_value = "0")]
    start: Vertex,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_matrix(path: &Option<PathBuf>) -> anyhow::Result<GraphMatrix> {
    if let Some(path) = path {
        Ok(GraphMatrix::try_read_atsp_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(GraphMatrix::try_read_atsp(stdin)?)
    }
}

fn write_tour(tour: &Tour, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        let file = File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        tour.write(writer)?;
    } else {
        let writer = std::io::stdout();
        tour.write(writer)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_solver_logger_for_verbosity(::log::LevelFilter::Warn, opts.verbose);

    let matrix = load_matrix(&opts.instance)?;
    anyhow::ensure!(
        opts.start < matrix.number_of_vertices(),
        "start vertex {} out of range for {} vertices",
        opts.start,
        matrix.number_of_vertices()
    );

    let tour = branch_and_bound_solver(&matrix, opts.start);

    assert!(
        tour.is_valid(&matrix, opts.start),
        "Produced tour is not valid"
    );

    if let Some(optimum) = matrix.optimum() {
        info!(
            "tour weight {} vs recorded optimum {optimum}",
            tour.weight()
        );
    }

    write_tour(&tour, &opts.output)?;

    Ok(())
}
