/// Sequential triple-loop matrix multiplication: C = A * B.
///
/// The textbook i-j-k loop over square row-major matrices. Each output cell
/// is accumulated into a local sum and stored once, so C's prior contents
/// are overwritten, not accumulated into.
///
/// This is the reference every other strategy is compared against, and also
/// the Strassen engine's base case below its recursion threshold.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if any slice length doesn't equal `n * n`.
pub fn multiply_naive(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
