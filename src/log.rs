use std::{io::Write, time::Instant};

use env_logger::Builder;
use log::LevelFilter;

/// Installs a logger that writes to stderr and prefixes every record with
/// the time elapsed since the logger was built. Repeated calls are no-ops.
pub fn build_solver_logger_for_level(level: LevelFilter) {
    let start = Instant::now();

    let mut builder = Builder::new();
    builder.filter_level(level).format(move |buf, record| {
        writeln!(
            buf,
            "[{:>10.3}ms {:>5}] {}",
            start.elapsed().as_secs_f64() * 1e3,
            record.level(),
            record.args()
        )
    });

    let _ = builder.try_init();
}

/// Maps the number of `-v` occurrences on a command line to a level and
/// installs the logger; zero occurrences keep the provided default.
pub fn build_solver_logger_for_verbosity(default: LevelFilter, verbosity: usize) {
    build_solver_logger_for_level(match verbosity {
        0 => default,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
}
