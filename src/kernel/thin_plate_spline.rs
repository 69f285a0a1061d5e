//! Thin plate spline kernel implementation
//!
//! The thin plate spline is defined as: φ(r) = r² · ln(r)
//!
//! It is the default kernel family and minimizes a bending-energy functional
//! in two dimensions, which makes it a common choice for scattered-data
//! interpolation without a shape parameter to tune.

use crate::kernel::RadialKernel;

/// Thin plate spline kernel: φ(r) = r² · ln(r), with φ(0) = 0
#[derive(Debug, Clone, Copy, Default)]
pub struct ThinPlateSpline;

impl ThinPlateSpline {
    /// Create a new thin plate spline kernel
    pub fn new() -> Self {
        Self
    }
}

impl RadialKernel for ThinPlateSpline {
    fn value(&self, r: f64) -> f64 {
        if r == 0.0 {
            return 0.0;
        }
        r * r * r.ln()
    }

    fn derivative(&self, r: f64) -> f64 {
        // dφ/dr = 2r·ln(r) + r, singular limit at r = 0 taken as 0
        if r == 0.0 {
            return 0.0;
        }
        2.0 * r * r.ln() + r
    }
}
