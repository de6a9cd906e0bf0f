//! Strassen divide-and-conquer matrix multiplication.
//!
//! Strassen's trick: multiplying two n × n matrices block-wise needs eight
//! half-size products, but seven cleverly chosen products of quadrant sums
//! and differences are enough. Applied recursively that drops the exponent
//! from 3 to ~2.807, at the cost of extra additions and O(n²) temporary
//! buffers per level - which is why small blocks fall back to the plain
//! triple loop.
//!
//! The recombination reorders additions relative to the definitional dot
//! product, so results can differ from the naive reference in the last few
//! bits. That precision trade is inherent to the algorithm and accepted
//! here, not corrected.

pub mod padding;

use crate::matrix::naive::multiply_naive;
use padding::{pad, unpad};

/// Below this size a direct triple-loop multiply beats the recursion:
/// the allocations and quadrant copies cost more than the saved multiply.
const THRESHOLD: usize = 64;

/// Multiply two n × n row-major matrices with Strassen's algorithm.
///
/// Works for any `n >= 1`. Power-of-two sizes go straight into the
/// recursion; anything else is zero-padded up to the next power of two
/// first and the true-size result extracted afterward. Padding is exact:
/// the zero border contributes zero terms to every dot product it touches.
///
/// # Panics
///
/// Panics if `n == 0` or a slice length doesn't equal `n * n`.
pub fn multiply(a: &[f64], b: &[f64], n: usize) -> Vec<f64> {
    assert!(n > 0, "matrix dimension must be positive");
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);

    if n.is_power_of_two() {
        let mut c = vec![0.0; n * n];
        multiply_pow2(a, b, &mut c, n);
        return c;
    }

    let p = n.next_power_of_two();
    let a_pad = pad(a, n, p);
    let b_pad = pad(b, n, p);
    let mut c_pad = vec![0.0; p * p];
    multiply_pow2(&a_pad, &b_pad, &mut c_pad, p);
    unpad(&c_pad, p, n)
}

/// The recursion proper. `n` must be a power of two; non-power-of-two
/// inputs never get here (the padding adapter runs upstream).
fn multiply_pow2(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    if n <= THRESHOLD {
        multiply_naive(a, b, c, n);
        return;
    }

    let half = n / 2;

    let a11 = quadrant(a, n, 0, 0, half);
    let a12 = quadrant(a, n, 0, half, half);
    let a21 = quadrant(a, n, half, 0, half);
    let a22 = quadrant(a, n, half, half, half);

    let b11 = quadrant(b, n, 0, 0, half);
    let b12 = quadrant(b, n, 0, half, half);
    let b21 = quadrant(b, n, half, 0, half);
    let b22 = quadrant(b, n, half, half, half);

    // The seven products. Each one is a single recursive multiply of two
    // freshly formed half-size operands.
    let p1 = product(&a11, &sub(&b12, &b22), half);
    let p2 = product(&add(&a11, &a12), &b22, half);
    let p3 = product(&add(&a21, &a22), &b11, half);
    let p4 = product(&a22, &sub(&b21, &b11), half);
    let p5 = product(&add(&a11, &a22), &add(&b11, &b22), half);
    let p6 = product(&sub(&a12, &a22), &add(&b21, &b22), half);
    let p7 = product(&sub(&a11, &a21), &add(&b11, &b12), half);

    // C11 = P5 + P4 - P2 + P6
    let c11 = add(&sub(&add(&p5, &p4), &p2), &p6);
    // C12 = P1 + P2
    let c12 = add(&p1, &p2);
    // C21 = P3 + P4
    let c21 = add(&p3, &p4);
    // C22 = P5 + P1 - P3 - P7
    let c22 = sub(&sub(&add(&p5, &p1), &p3), &p7);

    write_quadrant(c, &c11, n, 0, 0, half);
    write_quadrant(c, &c12, n, 0, half, half);
    write_quadrant(c, &c21, n, half, 0, half);
    write_quadrant(c, &c22, n, half, half, half);
}

fn product(x: &[f64], y: &[f64], half: usize) -> Vec<f64> {
    let mut out = vec![0.0; half * half];
    multiply_pow2(x, y, &mut out, half);
    out
}

/// Element-wise sum of two equally sized buffers.
fn add(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(a, b)| a + b).collect()
}

/// Element-wise difference of two equally sized buffers.
fn sub(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(a, b)| a - b).collect()
}

/// Copy a `half × half` quadrant out of an `n × n` parent into a fresh,
/// independently owned buffer.
fn quadrant(parent: &[f64], n: usize, row0: usize, col0: usize, half: usize) -> Vec<f64> {
    let mut out = vec![0.0; half * half];
    for i in 0..half {
        for j in 0..half {
            out[i * half + j] = parent[(row0 + i) * n + (col0 + j)];
        }
    }
    out
}

/// Write a `half × half` quadrant back into an `n × n` parent at the given
/// offsets.
fn write_quadrant(parent: &mut [f64], sub: &[f64], n: usize, row0: usize, col0: usize, half: usize) {
    for i in 0..half {
        for j in 0..half {
            parent[(row0 + i) * n + (col0 + j)] = sub[i * half + j];
        }
    }
}
