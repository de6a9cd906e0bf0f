//! Dense square matrix multiplication, three ways.
//!
//! I wrote this to compare how far three very different strategies get on
//! the same problem:
//!
//! - a sequential triple-loop reference ([`multiply_naive`])
//! - a pool of forked worker *processes* pulling work units from a shared
//!   counter, with the matrices living in shared memory ([`process`])
//! - Strassen's divide-and-conquer algorithm, which trades extra additions
//!   and allocations for one fewer multiplication per recursion level
//!   ([`strassen`])
//!
//! The parallel engine uses real OS processes, not threads: the matrices are
//! `mmap`ed `MAP_SHARED` so every worker sees the same buffers, and the only
//! synchronised state is a single "next work unit" counter guarded by a
//! process-shared POSIX semaphore. Workers write disjoint cells of C, so the
//! result buffer itself needs no locking.
//!
//! ## Usage
//!
//! ```
//! use forkmul::multiply_naive;
//! use forkmul::strassen;
//!
//! let a = vec![1.0, 2.0, 3.0, 4.0];
//! let b = vec![5.0, 6.0, 7.0, 8.0];
//!
//! let mut c = vec![0.0; 4];
//! multiply_naive(&a, &b, &mut c, 2);
//!
//! assert_eq!(c, strassen::multiply(&a, &b, 2));
//! ```
//!
//! For the process-parallel engine (row granularity, 4 workers):
//!
//! ```no_run
//! let a = vec![1.0; 64 * 64];
//! let b = vec![1.0; 64 * 64];
//!
//! let c = forkmul::process::multiply_rows(&a, &b, 64, 4).unwrap();
//! assert_eq!(c[0], 64.0);
//! ```

pub mod error;
pub mod matrix;
pub mod process;
pub mod strassen;

pub use error::Error;
pub use matrix::naive::multiply_naive;
pub use matrix::populate::{DEFAULT_SEED, populate};
