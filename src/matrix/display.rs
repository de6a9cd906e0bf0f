/// Print a square matrix row by row with fixed-width cells.
///
/// Used by the benchmark binaries for small results (`n <= 10`), where
/// eyeballing the output is still feasible.
pub fn print_matrix(m: &[f64], n: usize) {
    for row in m.chunks(n) {
        for v in row {
            print!("{:6.1} ", v);
        }
        println!();
    }
}
