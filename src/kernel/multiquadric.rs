//! Multiquadric kernel implementation
//!
//! The multiquadric kernel is defined as: φ(r) = √(1 + r²)
//!
//! It grows unboundedly with distance, which tends to produce well-behaved
//! interpolants for smooth underlying functions.

use crate::kernel::RadialKernel;

/// Multiquadric kernel: φ(r) = √(1 + r²)
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiquadric;

impl Multiquadric {
    /// Create a new multiquadric kernel
    pub fn new() -> Self {
        Self
    }
}

impl RadialKernel for Multiquadric {
    fn value(&self, r: f64) -> f64 {
        (1.0 + r * r).sqrt()
    }

    fn derivative(&self, r: f64) -> f64 {
        r / (1.0 + r * r).sqrt()
    }
}
