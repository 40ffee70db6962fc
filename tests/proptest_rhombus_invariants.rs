//! Property-based invariant tests for the diamond renderer.
//!
//! 1. A `n x n` matrix renders to exactly `2n - 1` lines.
//! 2. Every element appears exactly once, on line `r + c`.
//! 3. Rendering is deterministic.
//! 4. Single-digit matrices widen then narrow symmetrically.

use proptest::prelude::*;
use rhombus::{Matrix, Rhombus};

fn square_strategy(max: usize) -> impl Strategy<Value = Matrix> {
    (1..=max).prop_flat_map(|n| {
                 proptest::collection::vec(proptest::collection::vec(any::<i64>(), n), n)
             })
             .prop_map(|rows| Matrix::from_rows(rows).unwrap())
}

fn digit_square_strategy(max: usize) -> impl Strategy<Value = Matrix> {
    (1..=max).prop_flat_map(|n| proptest::collection::vec(proptest::collection::vec(0i64..10, n), n))
             .prop_map(|rows| Matrix::from_rows(rows).unwrap())
}

proptest! {
    #[test]
    fn line_count_is_two_n_minus_one(m in square_strategy(12)) {
        let r = Rhombus::new(&m).unwrap();
        prop_assert_eq!(r.lines().len(), 2 * m.rows - 1);
    }
}

proptest! {
    #[test]
    fn each_element_once_on_its_index_sum(n in 1usize..=10) {
        let rows: Vec<Vec<i64>> = (0..n).map(|r| (0..n).map(|c| (r * n + c) as i64).collect()).collect();
        let m = Matrix::from_rows(rows).unwrap();
        let bands = Rhombus::new(&m).unwrap().bands();
        let mut seen = vec![false; n * n];
        for (line, band) in bands.iter().enumerate() {
            for &v in &band.values {
                let idx = v as usize;
                prop_assert!(!seen[idx], "index {} emitted twice", idx);
                seen[idx] = true;
                prop_assert_eq!(idx / n + idx % n, line);
            }
        }
        prop_assert!(seen.iter().all(|s| *s));
    }
}

proptest! {
    #[test]
    fn rendering_is_deterministic(m in square_strategy(8)) {
        let r = Rhombus::new(&m).unwrap();
        prop_assert_eq!(r.to_string(), r.to_string());
        prop_assert_eq!(Rhombus::new(&m.clone()).unwrap().lines(), r.lines());
    }
}

proptest! {
    #[test]
    fn digit_silhouette_is_a_diamond(m in digit_square_strategy(10)) {
        let widths = Rhombus::new(&m).unwrap().silhouette();
        let n = m.rows;
        prop_assert!(widths[..n].windows(2).all(|w| w[0] <= w[1]), "{:?}", widths);
        prop_assert!(widths[n - 1..].windows(2).all(|w| w[0] >= w[1]), "{:?}", widths);
        let mirrored: Vec<usize> = widths.iter().rev().cloned().collect();
        prop_assert_eq!(widths, mirrored);
    }
}
