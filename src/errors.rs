//! Centralized error handling for tardis
//!
//! Coordinate lookups fail with [`TardisError::CoordinateNotFound`], which the
//! resolvers treat differently from every other error, so it is kept as its own
//! variant and exposed through [`TardisError::is_coordinate_not_found`].

use std::fmt;

/// Main error type for tardis operations
#[derive(Debug)]
pub enum TardisError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// JSON serialization errors
    JsonError(serde_json::Error),

    /// A single-coordinate lookup matched zero or several coordinates
    CoordinateNotFound { query: String, found: usize },

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Unrecognised axis tag
    InvalidAxis { value: String },

    /// Generic error for ad-hoc messages
    Generic(String),
}

impl TardisError {
    /// True for the "coordinate not found" failure and nothing else.
    pub fn is_coordinate_not_found(&self) -> bool {
        matches!(self, TardisError::CoordinateNotFound { .. })
    }
}

impl fmt::Display for TardisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TardisError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            TardisError::JsonError(e) => write!(f, "JSON error: {}", e),
            TardisError::CoordinateNotFound { query, found } => write!(
                f,
                "Expected to find exactly 1 coordinate matching {}, but found {}",
                query, found
            ),
            TardisError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            TardisError::InvalidAxis { value } => write!(
                f,
                "Invalid axis '{}': expected one of X, Y, Z, T or altitude",
                value
            ),
            TardisError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TardisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TardisError::NetCDFError(e) => Some(e),
            TardisError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for TardisError {
    fn from(error: netcdf::Error) -> Self {
        TardisError::NetCDFError(error)
    }
}

impl From<serde_json::Error> for TardisError {
    fn from(error: serde_json::Error) -> Self {
        TardisError::JsonError(error)
    }
}

/// Result type alias for tardis operations
pub type Result<T> = std::result::Result<T, TardisError>;
