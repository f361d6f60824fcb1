//! Builder for add-ons.

use super::class_setters;
use super::error::{BuildResult, check_finite};
use crate::enums::AddOnInstallMode;
use crate::presence::{Field, FieldSet};
use crate::types::{AddOn, AddOnField};

/// Builder for [`AddOn`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddOnBuilder {
    pub(crate) fields: FieldSet<AddOnField>,
    link: bool,
    id: String,
    href: String,
    description: String,
    enabled: bool,
    install_mode: Option<AddOnInstallMode>,
    name: String,
    resource_cost: f64,
    target_namespace: String,
}

impl AddOnBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(AddOnField);

    /// Set the description.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self.fields.insert(AddOnField::Description);
        self
    }

    /// Set whether the add-on can be installed.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self.fields.insert(AddOnField::Enabled);
        self
    }

    /// Set the namespaces watched by the operator.
    pub fn install_mode(mut self, value: AddOnInstallMode) -> Self {
        self.install_mode = Some(value);
        self.fields.insert(AddOnField::InstallMode);
        self
    }

    /// Set the name.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self.fields.insert(AddOnField::Name);
        self
    }

    /// Set the quota units consumed by one installation.
    pub fn resource_cost(mut self, value: f64) -> Self {
        self.resource_cost = value;
        self.fields.insert(AddOnField::ResourceCost);
        self
    }

    /// Set the namespace the add-on is installed into.
    pub fn target_namespace(mut self, value: impl Into<String>) -> Self {
        self.target_namespace = value.into();
        self.fields.insert(AddOnField::TargetNamespace);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &AddOn) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            description: object.description.clone(),
            enabled: object.enabled,
            install_mode: object.install_mode.clone(),
            name: object.name.clone(),
            resource_cost: object.resource_cost,
            target_namespace: object.target_namespace.clone(),
        }
    }

    /// Build the add-on.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cost is NaN or infinite.
    pub fn build(&self) -> BuildResult<AddOn> {
        Ok(AddOn {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
            install_mode: self.install_mode.clone(),
            name: self.name.clone(),
            resource_cost: check_finite(AddOnField::ResourceCost.name(), self.resource_cost)?,
            target_namespace: self.target_namespace.clone(),
        })
    }
}
