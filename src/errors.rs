//! Centralized error handling for the CyclObs reader
//!
//! This module provides structured error types covering file access,
//! variable lookup and metadata failures, enabling better error context
//! and type safety than a generic `Box<dyn Error>`.

use std::fmt;

/// Main error type for CyclObs reader operations
#[derive(Debug)]
pub enum CyclObsError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// A variable is missing the coordinate needed to interpret it
    MissingCoordinate { var: String, coord: String },

    /// Platform shortname is not one of the recognized CyclObs platforms
    UnknownPlatform { shortname: String },

    /// Product filename does not follow the CyclObs naming convention
    FilenameParse { message: String },

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for everything else
    Generic(String),
}

impl fmt::Display for CyclObsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclObsError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            CyclObsError::IoError(e) => write!(f, "I/O error: {}", e),
            CyclObsError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            CyclObsError::MissingCoordinate { var, coord } => {
                write!(f, "Variable '{}' has no '{}' coordinate", var, coord)
            }
            CyclObsError::UnknownPlatform { shortname } => {
                write!(f, "Unknown platform shortname '{}'", shortname)
            }
            CyclObsError::FilenameParse { message } => {
                write!(f, "Invalid CyclObs filename: {}", message)
            }
            CyclObsError::ArrayError(e) => write!(f, "Array error: {}", e),
            CyclObsError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CyclObsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CyclObsError::NetCDFError(e) => Some(e),
            CyclObsError::IoError(e) => Some(e),
            CyclObsError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for CyclObsError {
    fn from(error: netcdf::Error) -> Self {
        CyclObsError::NetCDFError(error)
    }
}

impl From<std::io::Error> for CyclObsError {
    fn from(error: std::io::Error) -> Self {
        CyclObsError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for CyclObsError {
    fn from(error: ndarray::ShapeError) -> Self {
        CyclObsError::ArrayError(error)
    }
}

impl From<String> for CyclObsError {
    fn from(error: String) -> Self {
        CyclObsError::Generic(error)
    }
}

impl From<&str> for CyclObsError {
    fn from(error: &str) -> Self {
        CyclObsError::Generic(error.to_string())
    }
}

/// Result type alias for CyclObs reader operations
pub type Result<T> = std::result::Result<T, CyclObsError>;
