//! Every strategy must agree with the elementwise reference.

use approx::assert_abs_diff_eq;
use ndarray::{Array3, ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swelter_formula::heat_index;
use swelter_grid::{GridError, Strategy, heat_index_array, heat_index_slice};

fn uniform_grid(temp: f64, rh: f64) -> (Array3<f64>, Array3<f64>) {
    (
        Array3::from_elem((2, 2, 2), temp),
        Array3::from_elem((2, 2, 2), rh),
    )
}

fn random_grid(shape: (usize, usize, usize), seed: u64) -> (Array3<f64>, Array3<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let temp = Array3::from_shape_fn(shape, |_| rng.random_range(50.0..100.0));
    let rh = Array3::from_shape_fn(shape, |_| rng.random_range(0.05..0.95));
    (temp, rh)
}

fn assert_all_strategies_agree(temp: &Array3<f64>, rh: &Array3<f64>) {
    let reference = heat_index_array(temp, rh, Strategy::Elementwise).unwrap();
    for strategy in Strategy::ALL {
        let out = heat_index_array(temp, rh, strategy).unwrap();
        assert_eq!(out.shape(), reference.shape());
        for (a, b) in out.iter().zip(reference.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario grids
// ---------------------------------------------------------------------------

#[test]
fn dry_adjustment_grid() {
    let (temp, rh) = uniform_grid(95.0, 0.10);
    assert_all_strategies_agree(&temp, &rh);
    let out = heat_index_array(&temp, &rh, Strategy::Masked).unwrap();
    assert!(out.iter().all(|&v| (v - 87.3292080918).abs() < 1e-9));
}

#[test]
fn humid_adjustment_grid() {
    let (temp, rh) = uniform_grid(85.0, 0.90);
    assert_all_strategies_agree(&temp, &rh);
    let out = heat_index_array(&temp, &rh, Strategy::Parallel).unwrap();
    assert!(out.iter().all(|&v| (v - 78.9477326998).abs() < 1e-9));
}

#[test]
fn no_adjustment_grid() {
    let (temp, rh) = uniform_grid(90.0, 0.65);
    assert_all_strategies_agree(&temp, &rh);
    let out = heat_index_array(&temp, &rh, Strategy::Elementwise).unwrap();
    assert!(out.iter().all(|&v| (v - 86.5626955891750).abs() < 1e-9));
}

// ---------------------------------------------------------------------------
// Random grids
// ---------------------------------------------------------------------------

#[test]
fn random_grid_all_strategies_agree() {
    let (temp, rh) = random_grid((4, 100, 300), 0x5EED);
    assert_all_strategies_agree(&temp, &rh);
}

#[test]
fn random_grid_matches_scalar() {
    let (temp, rh) = random_grid((3, 7, 11), 7);
    for strategy in Strategy::ALL {
        let out = heat_index_array(&temp, &rh, strategy).unwrap();
        for ((&hi, &t), &r) in out.iter().zip(temp.iter()).zip(rh.iter()) {
            assert_abs_diff_eq!(hi, heat_index(t, r), epsilon = 1e-9);
        }
    }
}

#[test]
fn wide_range_including_nan_regions() {
    // Temperatures far outside the dry-adjustment domain exercise the
    // masked strategy's NaN discarding.
    let temp = Array3::from_shape_fn((5, 8, 9), |(i, j, k)| {
        40.0 + (i * 72 + j * 9 + k) as f64 * 0.3
    });
    let rh = Array3::from_shape_fn((5, 8, 9), |(i, j, k)| {
        ((i + 2 * j + 3 * k) % 101) as f64 / 100.0
    });
    assert_all_strategies_agree(&temp, &rh);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let (temp, rh) = random_grid((2, 50, 50), 99);
    for strategy in Strategy::ALL {
        let a = heat_index_array(&temp, &rh, strategy).unwrap();
        let b = heat_index_array(&temp, &rh, strategy).unwrap();
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
    }
}

#[test]
fn inputs_are_untouched() {
    let (temp, rh) = random_grid((2, 3, 4), 3);
    let (temp_copy, rh_copy) = (temp.clone(), rh.clone());
    for strategy in Strategy::ALL {
        heat_index_array(&temp, &rh, strategy).unwrap();
    }
    assert_eq!(temp, temp_copy);
    assert_eq!(rh, rh_copy);
}

#[test]
fn slice_agrees_with_array() {
    let (temp, rh) = random_grid((2, 10, 10), 11);
    let t_flat: Vec<f64> = temp.iter().copied().collect();
    let r_flat: Vec<f64> = rh.iter().copied().collect();
    let reference = heat_index_array(&temp, &rh, Strategy::Elementwise).unwrap();
    for strategy in Strategy::ALL {
        let flat = heat_index_slice(&t_flat, &r_flat, strategy).unwrap();
        for (a, b) in flat.iter().zip(reference.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Shape mismatch
// ---------------------------------------------------------------------------

#[test]
fn shape_mismatch_222_vs_223() {
    let temp = Array3::from_elem((2, 2, 2), 90.0);
    let rh = Array3::from_elem((2, 2, 3), 0.5);
    for strategy in Strategy::ALL {
        let result = heat_index_array(&temp, &rh, strategy);
        assert!(
            matches!(
                &result,
                Err(GridError::ShapeMismatch { temp, rh })
                    if temp == &[2, 2, 2] && rh == &[2, 2, 3]
            ),
            "expected ShapeMismatch for {strategy}, got {result:?}",
        );
    }
}

#[test]
fn shape_mismatch_same_count_different_rank() {
    let temp = ArrayD::from_elem(IxDyn(&[8]), 90.0);
    let rh = ArrayD::from_elem(IxDyn(&[2, 2, 2]), 0.5);
    let result = heat_index_array(&temp, &rh, Strategy::Parallel);
    assert!(matches!(result, Err(GridError::ShapeMismatch { .. })));
}
