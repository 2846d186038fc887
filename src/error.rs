//! Error types for the schema mapper

use thiserror::Error;

/// Main error type for the schema mapper
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("Non-integer id: {0}")]
    InvalidId(String),

    #[error("No ids given")]
    NoIds,

    #[error("Record not found: {0}")]
    RecordNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl MapperError {
    pub(crate) fn invalid(field: &str, expected: &'static str) -> Self {
        MapperError::InvalidField {
            field: field.to_string(),
            expected,
        }
    }
}

#[cfg(feature = "python")]
impl From<MapperError> for pyo3::PyErr {
    fn from(err: MapperError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};

        match err {
            MapperError::MissingKey(key) => PyKeyError::new_err(key),
            MapperError::RecordNotFound(id) => {
                PyKeyError::new_err(format!("Record not found: {}", id))
            }
            MapperError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the schema mapper
pub type Result<T> = std::result::Result<T, MapperError>;
