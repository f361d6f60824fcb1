//! Error types for JSON marshaling and unmarshaling.

use std::error::Error;
use std::fmt;

use crate::builders::BuildError;

/// Result type for JSON operations.
pub type JsonResult<T> = Result<T, JsonError>;

/// Errors that can occur while reading or writing JSON documents.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The document is not valid JSON.
    Syntax(String),

    /// A value has a different JSON type than the field requires.
    InvalidType {
        /// Dotted path of the offending value, empty for the document itself.
        path: String,
        /// Description of the expected JSON type.
        expected: &'static str,
    },

    /// A value has the right JSON type but cannot be interpreted.
    InvalidValue {
        /// Dotted path of the offending value.
        path: String,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// The document was read but the object could not be built.
    Build(BuildError),
}

impl JsonError {
    pub(crate) fn invalid_type(path: impl Into<String>, expected: &'static str) -> Self {
        JsonError::InvalidType {
            path: path.into(),
            expected,
        }
    }

    /// Prefix the path of this error with the key or index it was found under.
    pub(crate) fn within(self, parent: &str) -> Self {
        fn join(parent: &str, path: String) -> String {
            if path.is_empty() {
                parent.to_string()
            } else if path.starts_with('[') {
                format!("{}{}", parent, path)
            } else {
                format!("{}.{}", parent, path)
            }
        }

        match self {
            JsonError::InvalidType { path, expected } => JsonError::InvalidType {
                path: join(parent, path),
                expected,
            },
            JsonError::InvalidValue { path, reason } => JsonError::InvalidValue {
                path: join(parent, path),
                reason,
            },
            other => other,
        }
    }

    /// Dotted path of the offending value, if the error concerns one.
    pub fn path(&self) -> Option<&str> {
        match self {
            JsonError::InvalidType { path, .. } | JsonError::InvalidValue { path, .. } => {
                Some(path.as_str())
            }
            JsonError::Syntax(_) | JsonError::Build(_) => None,
        }
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::Syntax(msg) => write!(f, "Invalid JSON: {}", msg),
            JsonError::InvalidType { path, expected } if path.is_empty() => {
                write!(f, "Invalid document: expected {}", expected)
            }
            JsonError::InvalidType { path, expected } => {
                write!(f, "Invalid type for field '{}': expected {}", path, expected)
            }
            JsonError::InvalidValue { path, reason } => {
                write!(f, "Invalid value for field '{}': {}", path, reason)
            }
            JsonError::Build(err) => write!(f, "Could not build object: {}", err),
        }
    }
}

impl Error for JsonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JsonError::Build(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Syntax(err.to_string())
    }
}

impl From<BuildError> for JsonError {
    fn from(err: BuildError) -> Self {
        JsonError::Build(err)
    }
}
