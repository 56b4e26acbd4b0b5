use matcmp::{Error, Matrix, multiply, multiply_ijk, multiply_ikj, random_matrix, strassen};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================
// Known products
// ============================================================

#[test]
fn test_2x2_known_product() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
    let expected = Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]);

    assert_eq!(multiply_ijk(&a, &b), expected);
    assert_eq!(multiply_ikj(&a, &b), expected);
    assert_eq!(strassen::multiply(&a, &b).unwrap(), expected);
}

#[test]
fn test_strassen_1x1_base_case() {
    let a = Matrix::from_rows(vec![vec![7]]);
    let b = Matrix::from_rows(vec![vec![-6]]);

    let c = strassen::multiply(&a, &b).unwrap();
    assert_eq!(c, Matrix::from_rows(vec![vec![-42]]));
}

#[test]
fn test_negative_entries() {
    let a = Matrix::from_rows(vec![vec![-1, 2], vec![3, -4]]);
    let b = Matrix::from_rows(vec![vec![5, -6], vec![-7, 8]]);

    let classical = multiply_ikj(&a, &b);
    assert_eq!(classical, Matrix::from_rows(vec![vec![-19, 22], vec![43, -50]]));
    assert_eq!(strassen::multiply(&a, &b).unwrap(), classical);
}

// ============================================================
// Elementwise arithmetic
// ============================================================

#[test]
fn test_add_sub_elementwise() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(8, &mut rng);
    let b = random_matrix(8, &mut rng);

    let sum = a.add(&b);
    let diff = a.sub(&b);

    for i in 0..8 {
        for j in 0..8 {
            assert_eq!(sum[i][j], a[i][j] + b[i][j]);
            assert_eq!(diff[i][j], a[i][j] - b[i][j]);
        }
    }
}

#[test]
#[should_panic(expected = "elementwise op")]
fn test_add_rejects_mismatched_sizes() {
    let _ = Matrix::zeros(2).add(&Matrix::zeros(3));
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_property() {
    let mut rng = StdRng::seed_from_u64(11);

    for n in [1, 2, 4, 8, 16] {
        let a = random_matrix(n, &mut rng);
        let id = Matrix::identity(n);

        assert_eq!(multiply_ikj(&a, &id), a);
        assert_eq!(multiply_ikj(&id, &a), a);
        assert_eq!(strassen::multiply(&a, &id).unwrap(), a);
        assert_eq!(strassen::multiply(&id, &a).unwrap(), a);
    }
}

#[test]
fn test_zero_property() {
    let mut rng = StdRng::seed_from_u64(13);

    for n in [2, 4, 8] {
        let a = random_matrix(n, &mut rng);
        let zero = Matrix::zeros(n);

        assert_eq!(multiply_ikj(&a, &zero), zero);
        assert_eq!(multiply_ikj(&zero, &a), zero);
        assert_eq!(strassen::multiply(&a, &zero).unwrap(), zero);
    }
}

// ============================================================
// Implementation equivalence
// ============================================================

#[test]
fn test_loop_orders_agree() {
    let mut rng = StdRng::seed_from_u64(17);

    // Loop reordering must not change results, power of two or not.
    for n in [1, 2, 3, 5, 8, 13, 16] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        assert_eq!(multiply_ijk(&a, &b), multiply_ikj(&a, &b), "size {n}");
    }
}

#[test]
fn test_strassen_matches_classical() {
    let mut rng = StdRng::seed_from_u64(23);

    for n in [2, 4, 8, 16, 32, 64] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        assert_eq!(
            strassen::multiply(&a, &b).unwrap(),
            multiply_ikj(&a, &b),
            "size {n}"
        );
    }
}

#[test]
fn test_4x4_hundred_random_trials() {
    let mut rng = StdRng::seed_from_u64(99);

    for trial in 0..100 {
        let a = random_matrix(4, &mut rng);
        let b = random_matrix(4, &mut rng);

        assert_eq!(
            strassen::multiply(&a, &b).unwrap(),
            multiply_ikj(&a, &b),
            "trial {trial}"
        );
    }
}

#[test]
fn test_top_level_multiply_is_classical() {
    let mut rng = StdRng::seed_from_u64(29);
    let a = random_matrix(8, &mut rng);
    let b = random_matrix(8, &mut rng);

    assert_eq!(multiply(&a, &b), multiply_ikj(&a, &b));
}

// ============================================================
// Strassen preconditions
// ============================================================

#[test]
fn test_strassen_rejects_non_power_of_two() {
    let mut rng = StdRng::seed_from_u64(5);

    for n in [3, 5, 6, 12] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        assert_eq!(strassen::multiply(&a, &b), Err(Error::NotPowerOfTwo { n }));
    }
}

#[test]
fn test_strassen_rejects_mismatched_sizes() {
    let a = Matrix::zeros(4);
    let b = Matrix::zeros(8);

    assert_eq!(
        strassen::multiply(&a, &b),
        Err(Error::DimensionMismatch { left: 4, right: 8 })
    );
}

// ============================================================
// Generator
// ============================================================

#[test]
fn test_generator_is_seed_deterministic() {
    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);

    assert_eq!(random_matrix(16, &mut rng1), random_matrix(16, &mut rng2));
}

#[test]
fn test_generator_emits_single_digits() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(32, &mut rng);

    for i in 0..32 {
        for j in 0..32 {
            assert!((0..=9).contains(&a[i][j]), "entry {} at ({i},{j})", a[i][j]);
        }
    }
}
