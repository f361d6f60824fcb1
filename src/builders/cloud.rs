//! Builders for cloud providers and cloud regions.

use super::error::BuildResult;
use super::{build_nested, class_setters};
use crate::presence::{Field, FieldSet};
use crate::types::{CloudProvider, CloudProviderField, CloudRegion, CloudRegionField};

/// Builder for [`CloudProvider`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudProviderBuilder {
    pub(crate) fields: FieldSet<CloudProviderField>,
    link: bool,
    id: String,
    href: String,
    display_name: String,
    name: String,
}

impl CloudProviderBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(CloudProviderField);

    /// Set the human friendly name.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = value.into();
        self.fields.insert(CloudProviderField::DisplayName);
        self
    }

    /// Set the short name, e.g. `aws`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self.fields.insert(CloudProviderField::Name);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &CloudProvider) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            display_name: object.display_name.clone(),
            name: object.name.clone(),
        }
    }

    /// Build the cloud provider.
    pub fn build(&self) -> BuildResult<CloudProvider> {
        Ok(CloudProvider {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            display_name: self.display_name.clone(),
            name: self.name.clone(),
        })
    }
}

/// Builder for [`CloudRegion`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudRegionBuilder {
    pub(crate) fields: FieldSet<CloudRegionField>,
    link: bool,
    id: String,
    href: String,
    cloud_provider: Option<CloudProviderBuilder>,
    display_name: String,
    enabled: bool,
    name: String,
    supports_multi_az: bool,
}

impl CloudRegionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(CloudRegionField);

    /// Set the provider of the region. Passing `None` unsets it.
    pub fn cloud_provider(mut self, value: impl Into<Option<CloudProviderBuilder>>) -> Self {
        self.cloud_provider = value.into();
        self.fields
            .set(CloudRegionField::CloudProvider, self.cloud_provider.is_some());
        self
    }

    /// Set the human friendly name.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = value.into();
        self.fields.insert(CloudRegionField::DisplayName);
        self
    }

    /// Set whether clusters can be created in the region.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self.fields.insert(CloudRegionField::Enabled);
        self
    }

    /// Set the short name, e.g. `us-east-1`.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self.fields.insert(CloudRegionField::Name);
        self
    }

    /// Set whether the region supports multi-AZ clusters.
    pub fn supports_multi_az(mut self, value: bool) -> Self {
        self.supports_multi_az = value;
        self.fields.insert(CloudRegionField::SupportsMultiAz);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &CloudRegion) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            cloud_provider: object.cloud_provider.as_ref().map(CloudProviderBuilder::from),
            display_name: object.display_name.clone(),
            enabled: object.enabled,
            name: object.name.clone(),
            supports_multi_az: object.supports_multi_az,
        }
    }

    /// Build the cloud region.
    ///
    /// # Errors
    ///
    /// Fails if the cloud provider fails to build.
    pub fn build(&self) -> BuildResult<CloudRegion> {
        Ok(CloudRegion {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            cloud_provider: build_nested(
                CloudRegionField::CloudProvider.name(),
                self.cloud_provider.as_ref(),
            )?,
            display_name: self.display_name.clone(),
            enabled: self.enabled,
            name: self.name.clone(),
            supports_multi_az: self.supports_multi_az,
        })
    }
}
