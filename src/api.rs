//! High-level API for RBF interpolation
//!
//! This module provides a builder-style entry point for the common workflow:
//! pick a kernel family and mode, train on a sample set, evaluate the
//! resulting network.
//!
//! # Quick Start
//!
//! ```rust
//! use rbfnet::{RBFInterpolator, RBFType, SampleSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut samples = SampleSet::new();
//! samples.add_sample(vec![0.0], 0.0)?;
//! samples.add_sample(vec![0.5], 0.25)?;
//! samples.add_sample(vec![2.0], 4.0)?;
//!
//! let network = RBFInterpolator::new()
//!     .with_kernel(RBFType::Gaussian)
//!     .normalized(false)
//!     .train(&samples)?;
//!
//! let value = network.eval(&[1.0])?;
//! let gradient = network.eval_jacobian(&[1.0])?;
//! # let _ = (value, gradient);
//! # Ok(())
//! # }
//! ```

use crate::core::{Result, SampleSet};
use crate::kernel::RBFType;
use crate::model::RBFNetwork;
use crate::trainer::{Preconditioner, RBFTrainer, TrainingObserver};

/// Builder for RBF interpolation networks
///
/// Defaults to the thin plate spline kernel, unnormalized mode, and no
/// preconditioning.
pub struct RBFInterpolator {
    kernel_type: RBFType,
    normalized: bool,
    precondition: bool,
    preconditioner: Option<Box<dyn Preconditioner>>,
    observer: Option<Box<dyn TrainingObserver>>,
}

impl RBFInterpolator {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self {
            kernel_type: RBFType::default(),
            normalized: false,
            precondition: false,
            preconditioner: None,
            observer: None,
        }
    }

    /// Select the kernel family
    pub fn with_kernel(mut self, kernel_type: RBFType) -> Self {
        self.kernel_type = kernel_type;
        self
    }

    /// Select normalized or unnormalized evaluation mode
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Enable or disable preconditioning of the training system
    pub fn with_preconditioning(mut self, precondition: bool) -> Self {
        self.precondition = precondition;
        self
    }

    /// Inject a preconditioning strategy
    pub fn with_preconditioner(mut self, preconditioner: Box<dyn Preconditioner>) -> Self {
        self.preconditioner = Some(preconditioner);
        self
    }

    /// Register an observer for post-solve training diagnostics
    pub fn with_observer(mut self, observer: Box<dyn TrainingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Train a network on the given sample set
    pub fn train(self, samples: &SampleSet) -> Result<RBFNetwork> {
        let mut trainer = RBFTrainer::new(self.kernel_type)
            .normalized(self.normalized)
            .with_preconditioning(self.precondition);
        if let Some(preconditioner) = self.preconditioner {
            trainer = trainer.with_preconditioner(preconditioner);
        }
        if let Some(observer) = self.observer {
            trainer = trainer.with_observer(observer);
        }
        trainer.train(samples)
    }
}

impl Default for RBFInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_builder_uses_thin_plate_spline() {
        let mut samples = SampleSet::new();
        samples.add_sample(vec![0.0], 0.0).unwrap();
        samples.add_sample(vec![0.5], 1.0).unwrap();
        samples.add_sample(vec![2.0], 2.0).unwrap();

        let network = RBFInterpolator::new().train(&samples).unwrap();
        assert_eq!(network.kernel_type(), RBFType::ThinPlateSpline);
        assert!(!network.is_normalized());
        assert!(!network.uses_preconditioning());
    }

    #[test]
    fn test_builder_trains_configured_network() {
        let mut samples = SampleSet::new();
        samples.add_sample(vec![0.0, 0.0], 1.0).unwrap();
        samples.add_sample(vec![1.0, 1.0], 2.0).unwrap();
        samples.add_sample(vec![2.0, 0.5], 3.0).unwrap();

        let network = RBFInterpolator::new()
            .with_kernel(RBFType::Gaussian)
            .normalized(true)
            .train(&samples)
            .unwrap();

        assert_eq!(network.kernel_type(), RBFType::Gaussian);
        assert!(network.is_normalized());
        for point in &samples {
            assert_relative_eq!(network.eval(&point.x).unwrap(), point.y, epsilon = 1e-6);
        }
    }
}
