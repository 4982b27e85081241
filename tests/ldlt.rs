#![allow(non_snake_case)]

use cholbench::{algebra::*, cholesky::*, harness::random_spd_matrix};

#[test]
fn test_ldlt_matches_cholesky() {
    let n = 25;
    let M = random_spd_matrix::<f64>(n, 111970);

    let mut L = Matrix::zeros((n, n));
    factorize(&M, &mut L).unwrap();

    let mut U = Matrix::zeros((n, n));
    let mut d = vec![0.0; n];
    factorize_ldlt(&M, &mut U, &mut d).unwrap();

    // L = U * sqrt(D)
    for i in 0..n {
        assert_eq!(U[(i, i)], 1.0);
        assert!((d[i].sqrt() - L[(i, i)]).abs() < 1e-10 * L[(i, i)]);
        for j in 0..i {
            let expected = L[(i, j)];
            let got = U[(i, j)] * d[j].sqrt();
            assert!((got - expected).abs() < 1e-9 * (1.0 + expected.abs()));
        }
    }
}

#[test]
fn test_ldlt_symmetric_indefinite() {
    #[rustfmt::skip]
    let M = Matrix::from(
        &[[ 2.,  1.,  0.],
          [ 1., -3.,  1.],
          [ 0.,  1.,  4.]]);

    let mut U = Matrix::zeros((3, 3));
    let mut d = vec![0.0; 3];
    factorize_ldlt(&M, &mut U, &mut d).unwrap();
    assert_eq!(d[0], 2.0);
    assert_eq!(d[1], -3.5);
    assert!(d[2] > 0.0);

    // M = U*D*U^T
    for i in 0..3 {
        for j in 0..=i {
            let v: f64 = (0..=j).map(|k| U[(i, k)] * d[k] * U[(j, k)]).sum();
            assert!((v - M[(i, j)]).abs() < 1e-12);
        }
    }

    // plain Cholesky rejects the same matrix
    let mut L = Matrix::zeros((3, 3));
    assert_eq!(
        factorize(&M, &mut L),
        Err(CholeskyError::NotPositiveDefinite { index: 1 })
    );
}
