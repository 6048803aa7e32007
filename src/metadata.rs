//! Metadata values and NetCDF inspection helpers
//!
//! CyclObs dataset metadata is a heterogeneous map: native NetCDF
//! attribute values sit next to derived strings, timestamps, and one
//! nested map holding the file's global attributes. [`MetadataValue`]
//! models that union; [`Metadata`] is the map itself.
//!
//! The module also provides the inspection functions used by the
//! `cyclobs_nc` binary for examining file structure.

use crate::errors::{CyclObsError, Result};
use crate::netcdf_io::NcAccess;
use chrono::{DateTime, Utc};
use netcdf::AttributeValue;
use std::collections::HashMap;

/// Merged metadata map attached to a dataset.
pub type Metadata = HashMap<String, MetadataValue>;

/// One value in a dataset's metadata map.
#[derive(Debug, Clone)]
pub enum MetadataValue {
    /// A native NetCDF attribute value
    Attr(AttributeValue),

    /// A derived string field (platform name, sensor, ...)
    Text(String),

    /// A derived UTC timestamp (acquisition time window)
    Time(DateTime<Utc>),

    /// A nested attribute map, used for `global_attributes`
    Group(HashMap<String, AttributeValue>),
}

impl MetadataValue {
    /// The string content, for `Text` values and string attributes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            MetadataValue::Attr(AttributeValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// The timestamp content, for `Time` values.
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            MetadataValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// The nested attribute map, for `Group` values.
    pub fn as_group(&self) -> Option<&HashMap<String, AttributeValue>> {
        match self {
            MetadataValue::Group(map) => Some(map),
            _ => None,
        }
    }
}

impl From<AttributeValue> for MetadataValue {
    fn from(value: AttributeValue) -> Self {
        MetadataValue::Attr(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<DateTime<Utc>> for MetadataValue {
    fn from(value: DateTime<Utc>) -> Self {
        MetadataValue::Time(value)
    }
}

/// Prints global attributes and variables of a CyclObs file.
pub fn print_metadata(nc: &NcAccess) -> Result<()> {
    println!("\n===== Global Attributes =====");
    for attr in nc.file().attributes() {
        println!("- {}: {:?}", attr.name(), attr.value()?);
    }

    println!("\n===== Variables =====");
    for var in nc.file().variables() {
        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| format!("{}[{}]", d.name(), d.len()))
            .collect();
        println!("- {} ({})", var.name(), dims.join(", "));
    }

    Ok(())
}

/// Describes a specific variable showing its data type, shape, and all attributes.
pub fn describe_variable(nc: &NcAccess, var_name: &str) -> Result<()> {
    let var = nc
        .file()
        .variable(var_name)
        .ok_or_else(|| CyclObsError::VariableNotFound {
            var: var_name.to_string(),
        })?;
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

    println!("\n Variable Description: {}", var_name);
    println!("={}", "=".repeat(var_name.len() + 25));

    let data_type = format!("{:?}", var.vartype()).to_lowercase();
    println!(" Data type: {}", data_type);

    let dims: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();

    if dims.is_empty() {
        println!(" Dimensions: (scalar)");
    } else {
        println!(" Dimensions: [{}]", dims.join(", "));
        println!(
            " Shape: ({})",
            shape
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" x ")
        );
    }

    let attributes: Vec<_> = var.attributes().collect();
    if attributes.is_empty() {
        println!("\n Attributes: (none)");
    } else {
        println!("\n Attributes:");
        for attr in attributes {
            match attr.value() {
                Ok(AttributeValue::Str(s)) => println!("   - {}: \"{}\"", attr.name(), s),
                Ok(value) => println!("   - {}: {:?}", attr.name(), value),
                Err(e) => println!("   - {}: (error reading value: {})", attr.name(), e),
            }
        }
    }

    Ok(())
}
