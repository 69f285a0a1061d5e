//! Utility functions shared by training and evaluation

use crate::core::error::{RBFError, Result};

/// Compute the Euclidean distance ||x - y|| between two coordinate vectors
///
/// Fails with `DimensionMismatch` if the vectors disagree in length.
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(RBFError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }

    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_basic() {
        let x = [0.0, 0.0];
        let y = [3.0, 4.0];
        assert_relative_eq!(euclidean_distance(&x, &y).unwrap(), 5.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let x = [1.0, -2.0, 0.5];
        let y = [-3.0, 4.0, 2.5];
        assert_eq!(
            euclidean_distance(&x, &y).unwrap(),
            euclidean_distance(&y, &x).unwrap()
        );
    }

    #[test]
    fn test_distance_identical_points() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(euclidean_distance(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let x = [1.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        assert!(matches!(
            euclidean_distance(&x, &y),
            Err(RBFError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_distance_empty_vectors() {
        assert_eq!(euclidean_distance(&[], &[]).unwrap(), 0.0);
    }
}
