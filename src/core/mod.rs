//! Core types and error definitions

pub mod error;
pub mod types;

pub use self::error::{RBFError, Result};
pub use self::types::{DataPoint, SampleSet};
