use super::{FloatT, VectorMath};
use itertools::izip;
use std::iter::zip;

// number of independent accumulators used by `dot_lanes`.  Eight
// doubles fill two AVX registers.
const LANES: usize = 8;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        debug_assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn dot_lanes(&self, y: &[T]) -> T {
        debug_assert_eq!(self.len(), y.len());

        let xc = self.chunks_exact(LANES);
        let yc = y.chunks_exact(LANES);
        let (xr, yr) = (xc.remainder(), yc.remainder());

        let mut acc = [T::zero(); LANES];
        for (xs, ys) in zip(xc, yc) {
            for (a, &x, &y) in izip!(acc.iter_mut(), xs, ys) {
                *a += x * y;
            }
        }

        // pairwise horizontal reduction of the lanes
        let mut width = LANES;
        while width > 1 {
            width /= 2;
            for k in 0..width {
                acc[k] = acc[k] + acc[k + width];
            }
        }

        zip(xr, yr).fold(acc[0], |s, (&x, &y)| s + x * y)
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for &v in self {
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v.abs());
        }
        out
    }

    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
    assert_eq!(x.dot_lanes(&y), 60.);
}

#[test]
fn test_dot_lanes_long() {
    // integer valued entries keep every partial sum exact,
    // so both accumulation orders must agree
    let x: Vec<f64> = (0..37).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..37).map(|i| (i % 5) as f64 - 2.0).collect();
    assert_eq!(x.dot(&y), x.dot_lanes(&y));
}

#[test]
fn test_dot_lanes_short_matches_dot() {
    let x: [f64; 5] = [0.1, 0.7, 1.3, -2.9, 3.3];
    let y = [1.7, -0.2, 0.3, 0.11, 9.0];
    assert_eq!(x.dot(&y).to_bits(), x.dot_lanes(&y).to_bits());
}

#[test]
fn test_norm_inf_diff() {
    let x = [1.0, -2.0, 3.0];
    let y = [1.5, -2.0, 0.0];
    assert_eq!(x.norm_inf_diff(&y), 3.0);
    assert_eq!(x.norm_inf(), 3.0);
}
