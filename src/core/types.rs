//! Core type definitions for RBF interpolation

use crate::core::error::{RBFError, Result};

/// A single scattered sample: a dense coordinate vector and a scalar response
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Coordinate vector (dimension shared by all points in a set)
    pub x: Vec<f64>,
    /// Scalar response value
    pub y: f64,
}

impl DataPoint {
    /// Create a new data point
    pub fn new(x: Vec<f64>, y: f64) -> Self {
        Self { x, y }
    }

    /// Dimension of the coordinate vector
    pub fn dim_x(&self) -> usize {
        self.x.len()
    }
}

/// Ordered collection of data points sharing one coordinate dimension
///
/// The dimension is fixed by the first point added; adding a point of any
/// other dimension fails with `DimensionMismatch`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSet {
    points: Vec<DataPoint>,
    dim_x: usize,
}

impl SampleSet {
    /// Create an empty sample set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sample set from a vector of points, validating dimensions
    pub fn from_points(points: Vec<DataPoint>) -> Result<Self> {
        let mut set = Self::new();
        for p in points {
            set.add(p)?;
        }
        Ok(set)
    }

    /// Add a sample, enforcing dimension agreement with earlier samples
    pub fn add(&mut self, point: DataPoint) -> Result<()> {
        if self.points.is_empty() {
            self.dim_x = point.dim_x();
        } else if point.dim_x() != self.dim_x {
            return Err(RBFError::DimensionMismatch {
                expected: self.dim_x,
                actual: point.dim_x(),
            });
        }
        self.points.push(point);
        Ok(())
    }

    /// Convenience: add a sample from raw parts
    pub fn add_sample(&mut self, x: Vec<f64>, y: f64) -> Result<()> {
        self.add(DataPoint::new(x, y))
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate dimension (0 for an empty set)
    pub fn dim_x(&self) -> usize {
        self.dim_x
    }

    /// Get a point by index
    ///
    /// # Panics
    /// Panics if index >= len()
    pub fn get(&self, i: usize) -> &DataPoint {
        &self.points[i]
    }

    /// All points in insertion order
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Iterate over points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
