//! Basic matrix operations shared by every execution strategy.
//!
//! Matrices are square `f64` buffers in row-major order, identified by a
//! slice and a dimension `n`. The naive multiply here is the correctness
//! baseline that both the parallel engine and the Strassen engine are
//! checked against.

pub mod display;
pub mod naive;
pub mod populate;
