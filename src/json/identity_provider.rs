//! JSON support for identity providers.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::IdentityProviderBuilder;
use crate::enums::{IdentityProviderMappingMethod, IdentityProviderType};
use crate::presence::Field;
use crate::types::{IdentityProvider, IdentityProviderField};

impl Serialize for IdentityProvider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(IdentityProviderField::Id, &self.id)?;
        state.field(IdentityProviderField::Href, &self.href)?;
        state.field(IdentityProviderField::Challenge, &self.challenge)?;
        state.field(IdentityProviderField::Login, &self.login)?;
        state.optional(IdentityProviderField::MappingMethod, self.mapping_method.as_ref())?;
        state.field(IdentityProviderField::Name, &self.name)?;
        state.optional(IdentityProviderField::Type, self.type_.as_ref())?;
        state.end()
    }
}

impl ReadJson for IdentityProviderBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = IdentityProviderBuilder::new();
        for (key, value) in reader::entries(value, IdentityProvider::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, IdentityProvider::LINK_KIND)?);
                continue;
            }
            let Some(field) = IdentityProviderField::from_name(key) else {
                reader::skip(IdentityProvider::KIND, key);
                continue;
            };
            builder = match field {
                IdentityProviderField::Id => builder.id(reader::string(key, value)?),
                IdentityProviderField::Href => builder.href(reader::string(key, value)?),
                IdentityProviderField::Challenge => builder.challenge(reader::boolean(key, value)?),
                IdentityProviderField::Login => builder.login(reader::boolean(key, value)?),
                IdentityProviderField::MappingMethod => builder.mapping_method(
                    IdentityProviderMappingMethod::from(reader::string(key, value)?.as_str()),
                ),
                IdentityProviderField::Name => builder.name(reader::string(key, value)?),
                IdentityProviderField::Type => builder.type_(IdentityProviderType::from(
                    reader::string(key, value)?.as_str(),
                )),
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    IdentityProvider => IdentityProviderBuilder,
}
