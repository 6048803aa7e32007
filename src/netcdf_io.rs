//! NetCDF access layer for CyclObs product files
//!
//! This module wraps the raw `netcdf` bindings behind the small surface
//! the reader needs: opening a file, reading whole variables with CF
//! mask-and-scale applied, shape introspection, and collecting variable
//! or file-level attributes into plain maps.
//!
//! Mask-and-scale follows the NetCDF convention: stored values equal to
//! `_FillValue` or `missing_value` become NaN, then `scale_factor` and
//! `add_offset` are applied. The `netcdf` crate does none of this on its
//! own, so it lives here.

use crate::errors::{CyclObsError, Result};
use log::debug;
use ndarray::ArrayD;
use netcdf::{open, AttributeValue, File, Variable};
use std::collections::HashMap;
use std::path::Path;

/// Handle to one open CyclObs NetCDF file.
pub struct NcAccess {
    file: File,
}

impl NcAccess {
    /// Open a NetCDF file. Open and format errors propagate unmodified.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("opening NetCDF file: {}", path.as_ref().display());
        let file = open(path)?;
        Ok(Self { file })
    }

    fn variable(&self, name: &str) -> Result<Variable<'_>> {
        self.file
            .variable(name)
            .ok_or_else(|| CyclObsError::VariableNotFound {
                var: name.to_string(),
            })
    }

    /// Shape of a variable, one length per dimension.
    pub fn shape(&self, name: &str) -> Result<Vec<usize>> {
        let var = self.variable(name)?;
        Ok(var.dimensions().iter().map(|d| d.len()).collect())
    }

    /// Read a whole variable as `f64` with mask-and-scale applied.
    pub fn read_masked(&self, name: &str) -> Result<ArrayD<f64>> {
        let var = self.variable(name)?;
        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let values: Vec<f64> = var.get_values::<f64, _>(..)?;

        let fill = numeric_attribute(&var, "_FillValue");
        let missing = numeric_attribute(&var, "missing_value");
        let scale = numeric_attribute(&var, "scale_factor").unwrap_or(1.0);
        let offset = numeric_attribute(&var, "add_offset").unwrap_or(0.0);

        let masked: Vec<f64> = values
            .into_iter()
            .map(|raw| {
                if fill.map_or(false, |f| raw == f) || missing.map_or(false, |m| raw == m) {
                    f64::NAN
                } else {
                    raw * scale + offset
                }
            })
            .collect();

        Ok(ArrayD::from_shape_vec(shape, masked)?)
    }

    /// First sample of a 1-D integer variable, e.g. the nanosecond `time`
    /// coordinate.
    pub fn first_i64(&self, name: &str) -> Result<i64> {
        let var = self.variable(name)?;
        let values: Vec<i64> = var.get_values::<i64, _>(0..1)?;
        values
            .first()
            .copied()
            .ok_or_else(|| CyclObsError::Generic(format!("variable '{}' is empty", name)))
    }

    /// Native attributes of one variable as a plain map.
    pub fn variable_attributes(&self, name: &str) -> Result<HashMap<String, AttributeValue>> {
        let var = self.variable(name)?;
        let mut attributes = HashMap::new();
        for attr in var.attributes() {
            if let Ok(value) = attr.value() {
                attributes.insert(attr.name().to_string(), value);
            }
        }
        Ok(attributes)
    }

    /// File-level global attributes as a plain map.
    pub fn global_attributes(&self) -> HashMap<String, AttributeValue> {
        let mut attributes = HashMap::new();
        for attr in self.file.attributes() {
            if let Ok(value) = attr.value() {
                attributes.insert(attr.name().to_string(), value);
            }
        }
        attributes
    }

    /// Borrow the underlying file for inspection helpers.
    pub fn file(&self) -> &File {
        &self.file
    }
}

/// Scalar numeric attribute as f64, if present and numeric.
fn numeric_attribute(var: &Variable, name: &str) -> Option<f64> {
    let value = var.attribute(name)?.value().ok()?;
    attribute_as_f64(&value)
}

/// Convert a scalar numeric attribute value to f64.
pub fn attribute_as_f64(value: &AttributeValue) -> Option<f64> {
    match value {
        AttributeValue::Uchar(v) => Some(f64::from(*v)),
        AttributeValue::Schar(v) => Some(f64::from(*v)),
        AttributeValue::Ushort(v) => Some(f64::from(*v)),
        AttributeValue::Short(v) => Some(f64::from(*v)),
        AttributeValue::Uint(v) => Some(f64::from(*v)),
        AttributeValue::Int(v) => Some(f64::from(*v)),
        AttributeValue::Ulonglong(v) => Some(*v as f64),
        AttributeValue::Longlong(v) => Some(*v as f64),
        AttributeValue::Float(v) => Some(f64::from(*v)),
        AttributeValue::Double(v) => Some(*v),
        _ => None,
    }
}
