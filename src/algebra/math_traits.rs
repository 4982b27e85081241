use super::FloatT;

// All slice math used by the factorization kernels goes
// through this trait, implemented generically for floats
// of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)
pub trait VectorMath {
    type T: FloatT;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Standard Euclidean or 2-norm inner product.
    ///
    /// Accumulates strictly left to right.
    fn dot(&self, y: &Self) -> Self::T;

    /// Inner product accumulated across independent lanes.
    ///
    /// Rounding differs from [`dot`](VectorMath::dot) once the slices are
    /// longer than one lane group, but the result is deterministic for
    /// fixed inputs.
    fn dot_lanes(&self, y: &Self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// Inf-norm of an elementwise difference
    fn norm_inf_diff(&self, b: &Self) -> Self::T;
}
