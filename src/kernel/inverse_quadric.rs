//! Inverse quadric kernel implementation
//!
//! The inverse quadric kernel is defined as: φ(r) = 1 / (1 + r²)

use crate::kernel::RadialKernel;

/// Inverse quadric kernel: φ(r) = 1 / (1 + r²)
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseQuadric;

impl InverseQuadric {
    /// Create a new inverse quadric kernel
    pub fn new() -> Self {
        Self
    }
}

impl RadialKernel for InverseQuadric {
    fn value(&self, r: f64) -> f64 {
        1.0 / (1.0 + r * r)
    }

    fn derivative(&self, r: f64) -> f64 {
        let d = 1.0 + r * r;
        -2.0 * r / (d * d)
    }
}
