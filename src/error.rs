//! Error taxonomy for the process-parallel engine.
//!
//! Every failure here is either fatal before any computation starts
//! (configuration, shared-memory or semaphore acquisition) or detected at
//! orchestration time (no worker could be spawned). There is no retry logic
//! anywhere; a single failed `fork` is merely logged and the pool continues
//! with fewer workers.

use thiserror::Error;

/// Errors produced by the shared-memory parallel engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive matrix size or worker count.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `mmap` of a shared arena or coordinator block failed.
    #[error("shared memory mapping failed")]
    Map(#[source] std::io::Error),

    /// Creating the process-shared semaphore failed.
    #[error("semaphore initialization failed")]
    Semaphore(#[source] std::io::Error),

    /// Every `fork` failed, so nobody would ever drain the work queue.
    /// Reported instead of silently returning an all-zero result.
    #[error("no worker process could be spawned")]
    NoWorkers,
}
