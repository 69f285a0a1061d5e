//! Binary model persistence
//!
//! Trained networks are written as a contiguous little-endian byte stream and
//! read back through a monotonic cursor. The layout is strictly positional:
//! there is no schema, version tag, or checksum, and a stream whose field
//! order does not match the writer's is undefined. Truncated streams surface
//! the underlying IO error from the read cursor; nothing more is validated.
//! This is a known limitation carried over from the reference format.
//!
//! Field order for a network: sample set, kernel type tag, normalized flag,
//! precondition flag, coefficients, num_samples, num_variables.

use crate::core::{DataPoint, RBFError, Result, SampleSet};
use crate::kernel::RBFType;
use crate::model::RBFNetwork;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;
use std::path::Path;

/// Appends atomic values to a contiguous byte stream
#[derive(Debug, Default)]
pub struct StreamWriter {
    buf: Vec<u8>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.buf.write_u8(v as u8)?;
        Ok(())
    }

    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        self.buf.write_u32::<LittleEndian>(v)?;
        Ok(())
    }

    pub fn write_u64(&mut self, v: u64) -> Result<()> {
        self.buf.write_u64::<LittleEndian>(v)?;
        Ok(())
    }

    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        self.buf.write_f64::<LittleEndian>(v)?;
        Ok(())
    }

    /// Length-prefixed sequence of scalars
    pub fn write_f64_seq(&mut self, values: &[f64]) -> Result<()> {
        self.write_u64(values.len() as u64)?;
        for &v in values {
            self.write_f64(v)?;
        }
        Ok(())
    }

    /// Consume the writer and return the assembled stream
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Consumes a byte stream through a monotonic read cursor
#[derive(Debug)]
pub struct StreamReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> StreamReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.cursor.read_u8()? != 0)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.cursor.read_u32::<LittleEndian>()?)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(self.cursor.read_u64::<LittleEndian>()?)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(self.cursor.read_f64::<LittleEndian>()?)
    }

    /// Length-prefixed sequence of scalars
    pub fn read_f64_seq(&mut self) -> Result<Vec<f64>> {
        let len = self.read_u64()? as usize;
        let mut values = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            values.push(self.read_f64()?);
        }
        Ok(values)
    }
}

fn write_sample_set(w: &mut StreamWriter, samples: &SampleSet) -> Result<()> {
    w.write_u64(samples.dim_x() as u64)?;
    w.write_u64(samples.len() as u64)?;
    for point in samples {
        w.write_f64_seq(&point.x)?;
        w.write_f64(point.y)?;
    }
    Ok(())
}

fn read_sample_set(r: &mut StreamReader<'_>) -> Result<SampleSet> {
    let _dim_x = r.read_u64()?;
    let count = r.read_u64()? as usize;

    let mut samples = SampleSet::new();
    for _ in 0..count {
        let x = r.read_f64_seq()?;
        let y = r.read_f64()?;
        samples.add(DataPoint::new(x, y))?;
    }
    Ok(samples)
}

/// Write a trained network to a binary file
pub fn save_network<P: AsRef<Path>>(network: &RBFNetwork, path: P) -> Result<()> {
    let mut w = StreamWriter::new();

    write_sample_set(&mut w, network.samples())?;
    w.write_u32(network.kernel_type().tag())?;
    w.write_bool(network.is_normalized())?;
    w.write_bool(network.uses_preconditioning())?;
    w.write_f64_seq(network.coefficients())?;
    w.write_u64(network.num_samples() as u64)?;
    w.write_u64(network.num_variables() as u64)?;

    std::fs::write(path, w.into_bytes())?;
    Ok(())
}

/// Read a file written by `save_network` and reconstruct a fresh network
///
/// The returned network is a complete replacement; no existing instance is
/// mutated, so callers with concurrent readers can publish it atomically.
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<RBFNetwork> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).map_err(|_| RBFError::FileAccess(path.display().to_string()))?;

    let mut r = StreamReader::new(&bytes);

    let samples = read_sample_set(&mut r)?;
    let kernel_type = RBFType::from_tag(r.read_u32()?);
    let normalized = r.read_bool()?;
    let precondition = r.read_bool()?;
    let coefficients = r.read_f64_seq()?;
    let num_samples = r.read_u64()? as usize;
    let num_variables = r.read_u64()? as usize;

    Ok(RBFNetwork::from_parts(
        samples,
        kernel_type,
        normalized,
        precondition,
        coefficients,
        num_samples,
        num_variables,
    ))
}
