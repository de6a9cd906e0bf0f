//! Zero-padding to the next power of two.
//!
//! The Strassen recursion halves the dimension at every level, so it
//! requires a power-of-two size. Arbitrary inputs are zero-extended into
//! the top-left block of a larger buffer before the recursion and the
//! true-size result copied back out afterward. The padded rows and columns
//! contribute exact zero terms to every dot product, so the round trip
//! loses nothing.

/// Zero-pad an `orig_n × orig_n` matrix into a `new_n × new_n` buffer.
///
/// The original occupies the top-left block; every other cell is zero.
///
/// # Panics
///
/// Panics if `new_n < orig_n` or the slice length doesn't match `orig_n`.
pub fn pad(m: &[f64], orig_n: usize, new_n: usize) -> Vec<f64> {
    assert!(new_n >= orig_n, "padded size must not shrink the matrix");
    assert_eq!(m.len(), orig_n * orig_n);

    let mut padded = vec![0.0; new_n * new_n];
    for i in 0..orig_n {
        padded[i * new_n..i * new_n + orig_n].copy_from_slice(&m[i * orig_n..(i + 1) * orig_n]);
    }
    padded
}

/// Extract the top-left `orig_n × orig_n` block of a padded matrix,
/// discarding the border. Exact inverse of [`pad`].
pub fn unpad(padded: &[f64], new_n: usize, orig_n: usize) -> Vec<f64> {
    assert!(new_n >= orig_n);
    assert_eq!(padded.len(), new_n * new_n);

    let mut m = vec![0.0; orig_n * orig_n];
    for i in 0..orig_n {
        m[i * orig_n..(i + 1) * orig_n].copy_from_slice(&padded[i * new_n..i * new_n + orig_n]);
    }
    m
}
