//! Row-granularity multi-process benchmark binary.
//!
//! Each work unit is one output row; workers are forked processes sharing
//! the matrices through anonymous shared memory.

use std::env;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use forkmul::matrix::display::print_matrix;
use forkmul::process::multiply_rows;
use forkmul::{DEFAULT_SEED, populate};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <matrix_size> <num_processes>", args[0]);
        process::exit(1);
    }
    let m: usize = args[1]
        .parse()
        .context("matrix_size must be a positive integer")?;
    let p: usize = args[2]
        .parse()
        .context("num_processes must be a positive integer")?;
    if m == 0 || p == 0 {
        bail!("matrix_size and num_processes must be positive");
    }
    if m > 10_000 {
        tracing::warn!(m, "matrix size is very large, may cause memory issues");
    }
    if p > 1_000 {
        tracing::warn!(p, "process count is very high, may cause system overload");
    }

    let (a, b) = populate(m, DEFAULT_SEED);

    let start = Instant::now();
    let c = multiply_rows(&a, &b, m, p).context("parallel multiplication failed")?;
    let elapsed = start.elapsed();

    println!(
        "parallel-row: m={}, p={}, time={} microseconds",
        m,
        p,
        elapsed.as_micros()
    );
    if m <= 10 {
        println!("Result C:");
        print_matrix(&c, m);
    }
    Ok(())
}
