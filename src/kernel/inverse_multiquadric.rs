//! Inverse multiquadric kernel implementation
//!
//! The inverse multiquadric kernel is defined as: φ(r) = 1 / √(1 + r²)

use crate::kernel::RadialKernel;

/// Inverse multiquadric kernel: φ(r) = 1 / √(1 + r²)
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseMultiquadric;

impl InverseMultiquadric {
    /// Create a new inverse multiquadric kernel
    pub fn new() -> Self {
        Self
    }
}

impl RadialKernel for InverseMultiquadric {
    fn value(&self, r: f64) -> f64 {
        1.0 / (1.0 + r * r).sqrt()
    }

    fn derivative(&self, r: f64) -> f64 {
        -r * (1.0 + r * r).powf(-1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_at_zero() {
        let kernel = InverseMultiquadric::new();
        assert_eq!(kernel.value(0.0), 1.0);
    }

    #[test]
    fn test_value_closed_form() {
        let kernel = InverseMultiquadric::new();
        // φ(√3) = 1/√4 = 0.5
        assert_relative_eq!(kernel.value(3.0_f64.sqrt()), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_at_zero() {
        let kernel = InverseMultiquadric::new();
        assert_eq!(kernel.derivative(0.0), 0.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let kernel = InverseMultiquadric::new();
        let r = 2.1;
        let h = 1e-6;
        let fd = (kernel.value(r + h) - kernel.value(r - h)) / (2.0 * h);
        assert_relative_eq!(kernel.derivative(r), fd, epsilon = 1e-6);
    }

    #[test]
    fn test_reciprocal_of_multiquadric() {
        use crate::kernel::Multiquadric;
        let imq = InverseMultiquadric::new();
        let mq = Multiquadric::new();
        for r in [0.0, 0.5, 1.0, 3.0] {
            assert_relative_eq!(imq.value(r) * mq.value(r), 1.0, epsilon = 1e-12);
        }
    }
}
