//! Builder for numeric values with units.

use super::error::{BuildResult, check_finite};
use crate::presence::{Field, FieldSet};
use crate::types::{Value, ValueField};

/// Builder for [`Value`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueBuilder {
    pub(crate) fields: FieldSet<ValueField>,
    unit: String,
    value: f64,
}

impl ValueBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit, e.g. `minutes` or `GiB`.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self.fields.insert(ValueField::Unit);
        self
    }

    /// Set the numeric magnitude.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self.fields.insert(ValueField::Value);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &Value) -> Self {
        Self {
            fields: object.fields.clone(),
            unit: object.unit.clone(),
            value: object.value,
        }
    }

    /// Build the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude is NaN or infinite.
    pub fn build(&self) -> BuildResult<Value> {
        Ok(Value {
            fields: self.fields.clone(),
            unit: self.unit.clone(),
            value: check_finite(ValueField::Value.name(), self.value)?,
        })
    }
}
