//! Trained RBF network model
//!
//! An `RBFNetwork` is the immutable result of training: the owned sample set,
//! the kernel family, the mode flags, and the solved coefficient vector. All
//! evaluation methods are pure reads, so a trained network can be shared
//! freely across threads. Loading never mutates an existing instance; it
//! constructs a fresh network that callers publish atomically (e.g. by
//! swapping an `Arc`) if readers are concurrent.

use crate::core::{RBFError, Result, SampleSet};
use crate::kernel::{RBFType, RadialKernel};
use crate::persistence;
use crate::utils::euclidean_distance;
use std::path::Path;

/// Trained RBF interpolation network
#[derive(Debug)]
pub struct RBFNetwork {
    samples: SampleSet,
    kernel_type: RBFType,
    kernel: Box<dyn RadialKernel>,
    normalized: bool,
    precondition: bool,
    coefficients: Vec<f64>,
    num_samples: usize,
    num_variables: usize,
}

impl RBFNetwork {
    /// Assemble a network from freshly trained parts
    pub(crate) fn new(
        samples: SampleSet,
        kernel_type: RBFType,
        normalized: bool,
        precondition: bool,
        coefficients: Vec<f64>,
    ) -> Self {
        let num_samples = samples.len();
        let num_variables = samples.dim_x();
        Self::from_parts(
            samples,
            kernel_type,
            normalized,
            precondition,
            coefficients,
            num_samples,
            num_variables,
        )
    }

    /// Assemble a network from persisted fields, counts included
    pub(crate) fn from_parts(
        samples: SampleSet,
        kernel_type: RBFType,
        normalized: bool,
        precondition: bool,
        coefficients: Vec<f64>,
        num_samples: usize,
        num_variables: usize,
    ) -> Self {
        Self {
            samples,
            kernel: kernel_type.build(),
            kernel_type,
            normalized,
            precondition,
            coefficients,
            num_samples,
            num_variables,
        }
    }

    /// Interpolated value at the query point
    ///
    /// In normalized mode the weighted kernel sum is divided by the plain
    /// kernel sum; a zero plain sum follows IEEE division semantics.
    pub fn eval(&self, x: &[f64]) -> Result<f64> {
        self.check_dimension(x)?;

        let mut sum = 0.0;
        let mut sumw = 0.0;
        for (i, point) in self.samples.iter().enumerate() {
            let f = self.kernel.value(euclidean_distance(x, &point.x)?);
            sumw += self.coefficients[i] * f;
            sum += f;
        }

        Ok(if self.normalized { sumw / sum } else { sumw })
    }

    /// Raw kernel basis vector at the query point, length `num_samples`
    ///
    /// In normalized mode every entry is divided by the total sum, so the
    /// entries sum to 1 whenever the raw sum is nonzero.
    pub fn eval_basis(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_dimension(x)?;

        let mut basis = Vec::with_capacity(self.num_samples);
        for point in &self.samples {
            basis.push(self.kernel.value(euclidean_distance(x, &point.x)?));
        }

        if self.normalized {
            let total: f64 = basis.iter().sum();
            for v in &mut basis {
                *v /= total;
            }
        }

        Ok(basis)
    }

    /// Analytic gradient of `eval` at the query point, length `num_variables`
    ///
    /// A sample coinciding with the query point (r = 0) contributes nothing
    /// to the directional derivative sums. This is an approximation kept for
    /// compatibility with the reference behavior, not an exact limit.
    pub fn eval_jacobian(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_dimension(x)?;

        let mut jac = vec![0.0; self.num_variables];
        for (i, slot) in jac.iter_mut().enumerate() {
            let mut sum = 0.0;
            let mut sumw = 0.0;
            let mut sum_d = 0.0;
            let mut sumw_d = 0.0;

            for (j, point) in self.samples.iter().enumerate() {
                let r = euclidean_distance(x, &point.x)?;
                let ri = x[i] - point.x[i];

                let f = self.kernel.value(r);
                let dfdr = self.kernel.derivative(r);

                sum += f;
                sumw += self.coefficients[j] * f;

                if r != 0.0 {
                    sum_d += dfdr * ri / r;
                    sumw_d += self.coefficients[j] * dfdr * ri / r;
                }
            }

            *slot = if self.normalized {
                (sum * sumw_d - sum_d * sumw) / (sum * sum)
            } else {
                sumw_d
            };
        }

        Ok(jac)
    }

    /// Write the network to a binary file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_network(self, path)
    }

    /// Reconstruct a network from a binary file written by `save`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_network(path)
    }

    /// Kernel family used by this network
    pub fn kernel_type(&self) -> RBFType {
        self.kernel_type
    }

    /// Whether the network evaluates in normalized mode
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Whether the training system was preconditioned
    pub fn uses_preconditioning(&self) -> bool {
        self.precondition
    }

    /// Number of training samples (and coefficients)
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Dimension of the query space
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Solved interpolation weights
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The owned training sample set
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Human-readable description of the network
    pub fn description(&self) -> String {
        format!("RadialBasisFunction of type {}", self.kernel_type)
    }

    fn check_dimension(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.num_variables {
            return Err(RBFError::DimensionMismatch {
                expected: self.num_variables,
                actual: x.len(),
            });
        }
        Ok(())
    }
}
