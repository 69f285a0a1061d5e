//! RBF network training
//!
//! The trainer builds the dense N×N kernel (Gram) matrix over all sample
//! pairs, optionally applies a preconditioner, and solves the resulting
//! linear system for the interpolation weights with an SVD-based
//! least-squares solve. The SVD degrades gracefully to the minimum-norm
//! solution when the matrix is singular, so training never fails on
//! ill-conditioned sample sets; conditioning is reported as a diagnostic
//! only.

use crate::core::{RBFError, Result, SampleSet};
use crate::kernel::RBFType;
use crate::model::RBFNetwork;
use crate::utils::euclidean_distance;
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Singular values at or below this threshold are treated as zero by the
/// least-squares solve, which makes it equivalent to a pseudo-inverse.
const SVD_EPSILON: f64 = 1e-12;

/// Conditioning and fit diagnostics reported after each solve
#[derive(Debug, Clone, Copy)]
pub struct TrainingDiagnostics {
    /// Largest singular value of the (possibly preconditioned) system matrix
    pub sigma_max: f64,
    /// Smallest singular value
    pub sigma_min: f64,
    /// Reciprocal condition number σ_min/σ_max, 0 when either is nonpositive
    pub rcond: f64,
    /// Relative residual ||A·w − b|| / ||b||
    pub residual: f64,
}

/// Observer invoked with diagnostics once the weight solve completes
///
/// This replaces ad hoc console printing with a structured hook; the trainer
/// never inspects the diagnostics itself.
pub trait TrainingObserver: Send + Sync {
    fn on_solve(&self, diagnostics: &TrainingDiagnostics);
}

/// Preconditioning strategy for the training system
///
/// The returned matrix P is applied as P·A and P·b before solving.
pub trait Preconditioner: Send + Sync {
    fn compute(&self, num_samples: usize) -> DMatrix<f64>;
}

/// Placeholder preconditioner returning the zero matrix
///
/// This reproduces the reference implementation's unimplemented
/// preconditioning hook. Enabling preconditioning with this strategy
/// collapses the system to all zeros; it exists as an extension point for a
/// real preconditioner (e.g. ACBF), not as a usable feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPreconditioner;

impl Preconditioner for ZeroPreconditioner {
    fn compute(&self, num_samples: usize) -> DMatrix<f64> {
        DMatrix::zeros(num_samples, num_samples)
    }
}

/// Builder-style trainer producing immutable `RBFNetwork` models
pub struct RBFTrainer {
    kernel_type: RBFType,
    normalized: bool,
    precondition: bool,
    preconditioner: Box<dyn Preconditioner>,
    observer: Option<Box<dyn TrainingObserver>>,
}

impl RBFTrainer {
    /// Create a trainer for the given kernel family, unnormalized by default
    pub fn new(kernel_type: RBFType) -> Self {
        Self {
            kernel_type,
            normalized: false,
            precondition: false,
            preconditioner: Box::new(ZeroPreconditioner),
            observer: None,
        }
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

    /// Inject a preconditioning strategy (used only when preconditioning is
    /// enabled)
    pub fn with_preconditioner(mut self, preconditioner: Box<dyn Preconditioner>) -> Self {
        self.preconditioner = preconditioner;
        self
    }

    /// Register an observer for post-solve diagnostics
    pub fn with_observer(mut self, observer: Box<dyn TrainingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Train a network on the given sample set
    ///
    /// Fails only on an empty sample set; singular or ill-conditioned
    /// systems solve to the minimum-norm least-squares weights.
    pub fn train(&self, samples: &SampleSet) -> Result<RBFNetwork> {
        if samples.is_empty() {
            return Err(RBFError::EmptyDataset);
        }

        let kernel = self.kernel_type.build();
        let n = samples.len();

        let mut a = DMatrix::zeros(n, n);
        let mut b = DVector::zeros(n);

        for (i, pi) in samples.iter().enumerate() {
            let mut row_sum = 0.0;
            for (j, pj) in samples.iter().enumerate() {
                let val = kernel.value(euclidean_distance(&pi.x, &pj.x)?);
                if val != 0.0 {
                    a[(i, j)] = val;
                    row_sum += val;
                }
            }

            b[i] = if self.normalized {
                row_sum * pi.y
            } else {
                pi.y
            };
        }

        if self.precondition {
            let p = self.preconditioner.compute(n);
            a = &p * a;
            b = p * b;
        }

        debug!("Computing RBF weights for {n} samples using dense SVD solver");

        let svd = a.clone().svd(true, true);
        let svals = &svd.singular_values;
        let sigma_max = svals[0];
        let sigma_min = svals[svals.len() - 1];
        let rcond = if sigma_max <= 0.0 || sigma_min <= 0.0 {
            0.0
        } else {
            sigma_min / sigma_max
        };

        // U and V^T were both requested above, so the solve cannot fail
        // structurally; a fully zero system still yields the zero vector.
        let weights = svd
            .solve(&b, SVD_EPSILON)
            .unwrap_or_else(|_| DVector::zeros(n));

        let residual = (&a * &weights - &b).norm() / b.norm();

        let diagnostics = TrainingDiagnostics {
            sigma_max,
            sigma_min,
            rcond,
            residual,
        };
        debug!(
            "Reciprocal condition number: {rcond:e} (sigma max/min: {sigma_max:e} / {sigma_min:e})"
        );
        debug!("Relative residual: {residual:e}");
        if let Some(observer) = &self.observer {
            observer.on_solve(&diagnostics);
        }

        Ok(RBFNetwork::new(
            samples.clone(),
            self.kernel_type,
            self.normalized,
            self.precondition,
            weights.iter().copied().collect(),
        ))
    }
}
