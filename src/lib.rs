//! Rust implementation of Radial Basis Function (RBF) interpolation networks
//!
//! Builds an interpolant from scattered (x, y) samples that can be evaluated
//! and differentiated at arbitrary query points.

pub mod api;
pub mod core;
pub mod kernel;
pub mod model;
pub mod persistence;
pub mod trainer;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::RBFInterpolator;
pub use crate::core::error::{RBFError, Result};
pub use crate::core::types::{DataPoint, SampleSet};
pub use crate::kernel::{RBFType, RadialKernel};
pub use crate::model::RBFNetwork;
pub use crate::trainer::{
    Preconditioner, RBFTrainer, TrainingDiagnostics, TrainingObserver, ZeroPreconditioner,
};
pub use crate::utils::euclidean_distance;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
