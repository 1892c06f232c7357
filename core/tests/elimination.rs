//! Randomized checks of the row reduction engine.

use linea_core::{
    Error, assert_approx_eq, mat,
    math::{ApproxEq, Matrix, Xorshift64},
};

const ROUNDS: usize = 50;

/// Returns a random matrix with a dominant diagonal, hence nonsingular.
fn nonsingular(n: usize, rng: &mut Xorshift64) -> Matrix {
    let m = Matrix::random(n, n, rng);
    m.add(&Matrix::identity(n).mul_scalar(n as f64)).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn triangular_form_is_triangular() {
    let rng = &mut Xorshift64::from_seed(7);
    for _ in 0..ROUNDS {
        let m = Matrix::random(4, 5, rng);
        let t = m.to_right_triangular();
        assert_eq!(t.dimensions(), (4, 5));
        for i in 1..=4 {
            for j in 1..i {
                assert_eq!(t.e(i, j), Some(0.0), "{t:?}");
            }
        }
    }
}

#[test]
fn triangularizing_is_idempotent() {
    let rng = &mut Xorshift64::from_seed(11);
    for n in 1..=6 {
        let t = Matrix::random(n, n, rng).to_right_triangular();
        assert_approx_eq!(t.to_right_triangular(), t);
    }
}

#[test]
fn determinant_survives_elimination() {
    let rng = &mut Xorshift64::from_seed(13);
    for _ in 0..ROUNDS {
        let m = nonsingular(4, rng);
        let t = m.to_right_triangular();
        let (d, dt) = (m.determinant().unwrap(), t.determinant().unwrap());
        assert!(close(d, dt), "{d} vs {dt}");
    }
}

#[test]
fn determinant_is_multiplicative() {
    let rng = &mut Xorshift64::from_seed(17);
    for _ in 0..ROUNDS {
        let a = nonsingular(3, rng);
        let b = nonsingular(3, rng);
        let ab = a.mul_mat(&b).unwrap();

        let lhs = ab.determinant().unwrap();
        let rhs = a.determinant().unwrap() * b.determinant().unwrap();
        assert!(close(lhs, rhs), "{lhs} vs {rhs}");
    }
}

#[test]
fn inverse_is_two_sided() {
    let rng = &mut Xorshift64::from_seed(19);
    for n in 1..=8 {
        let m = nonsingular(n, rng);
        let inv = m.inverse().unwrap();
        let id = Matrix::identity(n);

        assert!(m.mul_mat(&inv).unwrap().approx_eq(&id), "{m:?}");
        assert!(inv.mul_mat(&m).unwrap().approx_eq(&id), "{m:?}");
    }
}

#[test]
fn inverse_of_inverse() {
    let rng = &mut Xorshift64::from_seed(23);
    let m = nonsingular(5, rng);
    let back = m.inverse().and_then(|inv| inv.inverse()).unwrap();
    assert_approx_eq!(back, m);
}

#[test]
fn rank_is_bounded_by_shape() {
    let rng = &mut Xorshift64::from_seed(29);
    for (rows, cols) in [(1, 4), (2, 3), (3, 3), (5, 2), (6, 1)] {
        let r = Matrix::random(rows, cols, rng).rank();
        assert!(r <= rows.min(cols), "{rows}×{cols}: rank {r}");
        assert!(r > 0);
    }
}

#[test]
fn rank_of_outer_product_is_one() {
    let u = mat![1.0; 2.0; 3.0];
    let v = mat![1.0, -2.0, 0.5, 4.0];
    let uv = u.mul_mat(&v).unwrap();
    assert_eq!(uv.dimensions(), (3, 4));
    assert_eq!(uv.rank(), 1);
}

#[test]
fn singular_inputs() {
    let m = mat![
        1.0, 2.0, 3.0;
        2.0, 4.0, 6.0;
        0.0, 1.0, 1.0
    ];
    assert_eq!(m.is_singular(), Ok(true));
    assert_eq!(m.inverse(), Err(Error::Singular));
    assert_eq!(m.rank(), 2);
}
