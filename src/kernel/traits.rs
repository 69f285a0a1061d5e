//! Radial kernel trait definition

/// Radial basis function trait
///
/// A radial kernel is a scalar function of a nonnegative radius r (the
/// Euclidean distance from a sample center). Implementations are pure and
/// carry no state beyond the selected family.
pub trait RadialKernel: Send + Sync + std::fmt::Debug {
    /// Kernel value at radius r
    fn value(&self, r: f64) -> f64;

    /// Analytic first derivative with respect to r
    ///
    /// Kernels whose analytic derivative is singular at r = 0 return 0 there.
    fn derivative(&self, r: f64) -> f64;
}
