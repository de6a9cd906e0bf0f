//! Sequential triple-loop benchmark binary.

use std::env;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use forkmul::matrix::display::print_matrix;
use forkmul::{DEFAULT_SEED, multiply_naive, populate};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <matrix_size>", args[0]);
        process::exit(1);
    }
    let m: usize = args[1]
        .parse()
        .context("matrix_size must be a positive integer")?;
    if m == 0 {
        bail!("matrix_size must be positive");
    }
    if m > 10_000 {
        tracing::warn!(m, "matrix size is very large, may cause memory issues");
    }

    let (a, b) = populate(m, DEFAULT_SEED);
    let mut c = vec![0.0; m * m];

    let start = Instant::now();
    multiply_naive(&a, &b, &mut c, m);
    let elapsed = start.elapsed();

    println!("sequential: m={}, time={} microseconds", m, elapsed.as_micros());
    if m <= 10 {
        println!("Result C:");
        print_matrix(&c, m);
    }
    Ok(())
}
