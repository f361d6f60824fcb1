//! Builder for versions.

use chrono::{DateTime, Utc};

use super::class_setters;
use super::error::{BuildResult, check_timestamp};
use crate::presence::{Field, FieldSet};
use crate::types::{Version, VersionField};

/// Builder for [`Version`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionBuilder {
    pub(crate) fields: FieldSet<VersionField>,
    link: bool,
    id: String,
    href: String,
    channel_group: String,
    default: bool,
    enabled: bool,
    end_of_life_timestamp: Option<DateTime<Utc>>,
    raw_id: String,
}

impl VersionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(VersionField);

    /// Set the channel group, e.g. `stable` or `candidate`.
    pub fn channel_group(mut self, value: impl Into<String>) -> Self {
        self.channel_group = value.into();
        self.fields.insert(VersionField::ChannelGroup);
        self
    }

    /// Set whether this is the default version.
    pub fn default_version(mut self, value: bool) -> Self {
        self.default = value;
        self.fields.insert(VersionField::Default);
        self
    }

    /// Set whether the version can be installed.
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self.fields.insert(VersionField::Enabled);
        self
    }

    /// Set the end of life timestamp.
    pub fn end_of_life_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.end_of_life_timestamp = Some(value);
        self.fields.insert(VersionField::EndOfLifeTimestamp);
        self
    }

    /// Set the bare version number.
    pub fn raw_id(mut self, value: impl Into<String>) -> Self {
        self.raw_id = value.into();
        self.fields.insert(VersionField::RawId);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &Version) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            channel_group: object.channel_group.clone(),
            default: object.default,
            enabled: object.enabled,
            end_of_life_timestamp: object.end_of_life_timestamp,
            raw_id: object.raw_id.clone(),
        }
    }

    /// Build the version.
    ///
    /// # Errors
    ///
    /// Returns an error if the end of life timestamp cannot be written as
    /// RFC 3339.
    pub fn build(&self) -> BuildResult<Version> {
        Ok(Version {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            channel_group: self.channel_group.clone(),
            default: self.default,
            enabled: self.enabled,
            end_of_life_timestamp: check_timestamp(
                VersionField::EndOfLifeTimestamp.name(),
                self.end_of_life_timestamp,
            )?,
            raw_id: self.raw_id.clone(),
        })
    }
}
