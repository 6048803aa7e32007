//! Dataset request types and the labeled 2-D result array
//!
//! A dataset request names one geophysical variable in the file plus
//! optional caller overrides; the result is a 2-D grid labeled with
//! `y`/`x` axes and carrying a merged metadata map.

use crate::errors::Result;
use crate::metadata::{Metadata, MetadataValue};
use ndarray::{Array2, ArrayD, Ix2};

/// Identifies a named variable to extract from the file.
#[derive(Debug, Clone)]
pub struct DatasetId {
    pub name: String,
}

impl DatasetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Caller-supplied output metadata and options for a dataset request.
///
/// `file_key` overrides the source variable name to read instead of the
/// dataset's own name. Everything in `attrs` is folded into the result's
/// metadata (derived fields still win on key collisions).
#[derive(Debug, Clone, Default)]
pub struct DatasetInfo {
    pub file_key: Option<String>,
    pub attrs: Metadata,
}

impl DatasetInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_key(mut self, file_key: impl Into<String>) -> Self {
        self.file_key = Some(file_key.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// A 2-D labeled array with attached metadata.
///
/// Axis order is always (`y`, `x`). Row 0 is the northernmost row after
/// the reader's vertical flip.
#[derive(Debug, Clone)]
pub struct DataArray {
    pub values: Array2<f64>,
    pub attrs: Metadata,
}

impl DataArray {
    /// Axis names, in storage order.
    pub const DIMS: (&'static str, &'static str) = ("y", "x");

    pub fn new(values: Array2<f64>) -> Self {
        Self {
            values,
            attrs: Metadata::new(),
        }
    }

    pub fn dims(&self) -> (&'static str, &'static str) {
        Self::DIMS
    }

    /// Number of rows (`y` samples).
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (`x` samples).
    pub fn width(&self) -> usize {
        self.values.ncols()
    }
}

/// Drop all singleton dimensions and require a 2-D grid to remain.
///
/// A (1, H, W) variable squeezes to (H, W); anything that does not leave
/// exactly two axes surfaces as a shape error.
pub fn squeeze_to_grid(data: ArrayD<f64>) -> Result<Array2<f64>> {
    let kept: Vec<usize> = data
        .shape()
        .iter()
        .copied()
        .filter(|&len| len != 1)
        .collect();
    let squeezed = data.into_shape(kept)?;
    Ok(squeezed.into_dimensionality::<Ix2>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;

    #[test]
    fn test_squeeze_drops_leading_singleton() {
        let data =
            ArrayD::from_shape_vec(vec![1, 2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let grid = squeeze_to_grid(data).unwrap();
        assert_eq!(grid.shape(), &[2, 3]);
        assert_eq!(grid[[1, 2]], 6.0);
    }

    #[test]
    fn test_squeeze_rejects_non_grid() {
        let data = ArrayD::from_shape_vec(vec![2, 3, 4], (0..24).map(f64::from).collect()).unwrap();
        assert!(squeeze_to_grid(data).is_err());
    }
}
