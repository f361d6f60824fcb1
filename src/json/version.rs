//! JSON support for versions.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::VersionBuilder;
use crate::presence::Field;
use crate::types::{Version, VersionField};

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(VersionField::Id, &self.id)?;
        state.field(VersionField::Href, &self.href)?;
        state.field(VersionField::ChannelGroup, &self.channel_group)?;
        state.field(VersionField::Default, &self.default)?;
        state.field(VersionField::Enabled, &self.enabled)?;
        state.timestamp(VersionField::EndOfLifeTimestamp, self.end_of_life_timestamp.as_ref())?;
        state.field(VersionField::RawId, &self.raw_id)?;
        state.end()
    }
}

impl ReadJson for VersionBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = VersionBuilder::new();
        for (key, value) in reader::entries(value, Version::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, Version::LINK_KIND)?);
                continue;
            }
            let Some(field) = VersionField::from_name(key) else {
                reader::skip(Version::KIND, key);
                continue;
            };
            builder = match field {
                VersionField::Id => builder.id(reader::string(key, value)?),
                VersionField::Href => builder.href(reader::string(key, value)?),
                VersionField::ChannelGroup => builder.channel_group(reader::string(key, value)?),
                VersionField::Default => builder.default_version(reader::boolean(key, value)?),
                VersionField::Enabled => builder.enabled(reader::boolean(key, value)?),
                VersionField::EndOfLifeTimestamp => {
                    builder.end_of_life_timestamp(reader::timestamp(key, value)?)
                }
                VersionField::RawId => builder.raw_id(reader::string(key, value)?),
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    Version => VersionBuilder,
}
