//! JSON support for cloud providers and cloud regions.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::{CloudProviderBuilder, CloudRegionBuilder};
use crate::presence::Field;
use crate::types::{CloudProvider, CloudProviderField, CloudRegion, CloudRegionField};

impl Serialize for CloudProvider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(CloudProviderField::Id, &self.id)?;
        state.field(CloudProviderField::Href, &self.href)?;
        state.field(CloudProviderField::DisplayName, &self.display_name)?;
        state.field(CloudProviderField::Name, &self.name)?;
        state.end()
    }
}

impl ReadJson for CloudProviderBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = CloudProviderBuilder::new();
        for (key, value) in reader::entries(value, CloudProvider::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, CloudProvider::LINK_KIND)?);
                continue;
            }
            let Some(field) = CloudProviderField::from_name(key) else {
                reader::skip(CloudProvider::KIND, key);
                continue;
            };
            builder = match field {
                CloudProviderField::Id => builder.id(reader::string(key, value)?),
                CloudProviderField::Href => builder.href(reader::string(key, value)?),
                CloudProviderField::DisplayName => builder.display_name(reader::string(key, value)?),
                CloudProviderField::Name => builder.name(reader::string(key, value)?),
            };
        }
        Ok(builder)
    }
}

impl Serialize for CloudRegion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(CloudRegionField::Id, &self.id)?;
        state.field(CloudRegionField::Href, &self.href)?;
        state.optional(CloudRegionField::CloudProvider, self.cloud_provider.as_ref())?;
        state.field(CloudRegionField::DisplayName, &self.display_name)?;
        state.field(CloudRegionField::Enabled, &self.enabled)?;
        state.field(CloudRegionField::Name, &self.name)?;
        state.field(CloudRegionField::SupportsMultiAz, &self.supports_multi_az)?;
        state.end()
    }
}

impl ReadJson for CloudRegionBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = CloudRegionBuilder::new();
        for (key, value) in reader::entries(value, CloudRegion::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, CloudRegion::LINK_KIND)?);
                continue;
            }
            let Some(field) = CloudRegionField::from_name(key) else {
                reader::skip(CloudRegion::KIND, key);
                continue;
            };
            builder = match field {
                CloudRegionField::Id => builder.id(reader::string(key, value)?),
                CloudRegionField::Href => builder.href(reader::string(key, value)?),
                CloudRegionField::CloudProvider => {
                    builder.cloud_provider(reader::object::<CloudProviderBuilder>(key, value)?)
                }
                CloudRegionField::DisplayName => builder.display_name(reader::string(key, value)?),
                CloudRegionField::Enabled => builder.enabled(reader::boolean(key, value)?),
                CloudRegionField::Name => builder.name(reader::string(key, value)?),
                CloudRegionField::SupportsMultiAz => {
                    builder.supports_multi_az(reader::boolean(key, value)?)
                }
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    CloudProvider => CloudProviderBuilder,
    CloudRegion => CloudRegionBuilder,
}
