//! Gaussian kernel implementation
//!
//! The Gaussian kernel is defined as: φ(r) = exp(−r²)
//!
//! It decays fastest of the supported families and keeps all basis values in
//! (0, 1], with φ(0) = 1 exactly.

use crate::kernel::RadialKernel;

/// Gaussian kernel: φ(r) = exp(−r²)
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl Gaussian {
    /// Create a new Gaussian kernel
    pub fn new() -> Self {
        Self
    }
}

impl RadialKernel for Gaussian {
    fn value(&self, r: f64) -> f64 {
        (-r * r).exp()
    }

    fn derivative(&self, r: f64) -> f64 {
        -2.0 * r * (-r * r).exp()
    }
}
