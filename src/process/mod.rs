//! Multi-process matrix multiplication over shared memory.
//!
//! The engine maps A, B and C into anonymous shared memory, forks a pool of
//! worker processes, and hands out work units through a shared counter
//! guarded by a process-shared semaphore. Two granularities are provided:
//! one output *row* per unit ([`multiply_rows`]) or one output *cell* per
//! unit ([`multiply_cells`]). Either way the write sets are disjoint, so C
//! itself needs no locking - the counter is the only contended state.
//!
//! Resource lifecycle: the arena and queue are created before the fork and
//! dropped (unmapped, semaphore destroyed) after every worker has been
//! reaped, on every exit path, so no OS-level shared resources leak.

pub mod pool;
pub mod queue;
pub mod shmem;

use crate::error::Error;
use queue::WorkQueue;
use shmem::Arena;

/// Multiply A and B across `workers` processes, one output row per work unit.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `n` - Dimension of all three matrices
/// * `workers` - Number of worker processes to fork
///
/// # Errors
///
/// [`Error::InvalidConfig`] for a zero size or worker count,
/// [`Error::Map`] / [`Error::Semaphore`] when shared resources can't be
/// acquired, [`Error::NoWorkers`] when every fork fails.
pub fn multiply_rows(a: &[f64], b: &[f64], n: usize, workers: usize) -> Result<Vec<f64>, Error> {
    validate(n, workers)?;
    let arena = Arena::new(a, b, n)?;
    let queue = WorkQueue::new(n)?;

    let pa = arena.a.ptr() as *const f64;
    let pb = arena.b.ptr() as *const f64;
    let pc = arena.c.ptr();

    pool::run(&queue, workers, |row| unsafe {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += *pa.add(row * n + k) * *pb.add(k * n + j);
            }
            *pc.add(row * n + j) = sum;
        }
    })?;

    Ok(arena.c.to_vec())
}

/// Multiply A and B across `workers` processes, one output cell per work unit.
///
/// Same contract as [`multiply_rows`], but the queue dispenses `n * n`
/// linear cell indices (`row = idx / n`, `col = idx % n`). Finer units mean
/// more claims through the semaphore per cell of useful work; the row
/// variant usually wins on wall clock for the same result.
pub fn multiply_cells(a: &[f64], b: &[f64], n: usize, workers: usize) -> Result<Vec<f64>, Error> {
    validate(n, workers)?;
    let arena = Arena::new(a, b, n)?;
    let queue = WorkQueue::new(n * n)?;

    let pa = arena.a.ptr() as *const f64;
    let pb = arena.b.ptr() as *const f64;
    let pc = arena.c.ptr();

    pool::run(&queue, workers, |idx| unsafe {
        let row = idx / n;
        let col = idx % n;
        let mut sum = 0.0;
        for k in 0..n {
            sum += *pa.add(row * n + k) * *pb.add(k * n + col);
        }
        *pc.add(idx) = sum;
    })?;

    Ok(arena.c.to_vec())
}

fn validate(n: usize, workers: usize) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::InvalidConfig(
            "matrix size must be positive".into(),
        ));
    }
    if workers == 0 {
        return Err(Error::InvalidConfig(
            "worker count must be positive".into(),
        ));
    }
    Ok(())
}
