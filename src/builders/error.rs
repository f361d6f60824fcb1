//! Error types for the builder API.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, Datelike, Utc};

/// Errors that can occur while materializing a value object.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A field holds data that cannot be materialized.
    InvalidValue {
        /// The name of the field that had an invalid value.
        field: &'static str,
        /// A description of why the value is invalid.
        reason: String,
    },
    /// A nested builder failed.
    Nested {
        /// The field holding the nested builder.
        field: &'static str,
        /// Position of the failing element for repeated fields.
        index: Option<usize>,
        /// The failure of the nested builder.
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Wrap this error as the failure of the nested builder stored in `field`.
    pub(crate) fn nested(self, field: &'static str) -> Self {
        BuildError::Nested {
            field,
            index: None,
            source: Box::new(self),
        }
    }

    /// Wrap this error as the failure of element `index` of the repeated `field`.
    pub(crate) fn nested_at(self, field: &'static str, index: usize) -> Self {
        BuildError::Nested {
            field,
            index: Some(index),
            source: Box::new(self),
        }
    }

    /// The innermost failure, with all nesting removed.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            BuildError::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Dotted path from the outermost object to the failing field,
    /// e.g. `machine_pools[1].cluster.node_drain_grace_period.value`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            if !path.is_empty() {
                path.push('.');
            }
            match current {
                BuildError::InvalidValue { field, .. } => {
                    path.push_str(field);
                    return path;
                }
                BuildError::Nested { field, index, source } => {
                    path.push_str(field);
                    if let Some(index) = index {
                        path.push_str(&format!("[{}]", index));
                    }
                    current = source.as_ref();
                }
            }
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root_cause() {
            BuildError::InvalidValue { reason, .. } => {
                write!(f, "Invalid value for field '{}': {}", self.path(), reason)
            }
            root => write!(f, "Could not build field '{}'", root.path()),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::Nested { source, .. } => Some(source.as_ref()),
            BuildError::InvalidValue { .. } => None,
        }
    }
}

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Fails with [`BuildError::InvalidValue`] unless `value` is a finite number.
///
/// JSON has no representation for NaN or the infinities.
pub(crate) fn check_finite(field: &'static str, value: f64) -> BuildResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BuildError::InvalidValue {
            field,
            reason: format!("{} is not a finite number", value),
        })
    }
}

/// Fails with [`BuildError::InvalidValue`] unless `value` has a four digit year.
///
/// RFC 3339 only covers the years 0000 to 9999.
pub(crate) fn check_timestamp(
    field: &'static str,
    value: Option<DateTime<Utc>>,
) -> BuildResult<Option<DateTime<Utc>>> {
    match value {
        Some(timestamp) if !(0..=9999).contains(&timestamp.year()) => {
            Err(BuildError::InvalidValue {
                field,
                reason: format!("{} is outside the RFC 3339 year range", timestamp),
            })
        }
        other => Ok(other),
    }
}
