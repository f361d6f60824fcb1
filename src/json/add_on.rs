//! JSON support for add-ons.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::AddOnBuilder;
use crate::enums::AddOnInstallMode;
use crate::presence::Field;
use crate::types::{AddOn, AddOnField};

impl Serialize for AddOn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(AddOnField::Id, &self.id)?;
        state.field(AddOnField::Href, &self.href)?;
        state.field(AddOnField::Description, &self.description)?;
        state.field(AddOnField::Enabled, &self.enabled)?;
        state.optional(AddOnField::InstallMode, self.install_mode.as_ref())?;
        state.field(AddOnField::Name, &self.name)?;
        state.field(AddOnField::ResourceCost, &self.resource_cost)?;
        state.field(AddOnField::TargetNamespace, &self.target_namespace)?;
        state.end()
    }
}

impl ReadJson for AddOnBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = AddOnBuilder::new();
        for (key, value) in reader::entries(value, AddOn::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, AddOn::LINK_KIND)?);
                continue;
            }
            let Some(field) = AddOnField::from_name(key) else {
                reader::skip(AddOn::KIND, key);
                continue;
            };
            builder = match field {
                AddOnField::Id => builder.id(reader::string(key, value)?),
                AddOnField::Href => builder.href(reader::string(key, value)?),
                AddOnField::Description => builder.description(reader::string(key, value)?),
                AddOnField::Enabled => builder.enabled(reader::boolean(key, value)?),
                AddOnField::InstallMode => builder.install_mode(AddOnInstallMode::from(
                    reader::string(key, value)?.as_str(),
                )),
                AddOnField::Name => builder.name(reader::string(key, value)?),
                AddOnField::ResourceCost => builder.resource_cost(reader::float(key, value)?),
                AddOnField::TargetNamespace => {
                    builder.target_namespace(reader::string(key, value)?)
                }
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    AddOn => AddOnBuilder,
}
