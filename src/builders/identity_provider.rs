//! Builder for identity providers.

use super::class_setters;
use super::error::BuildResult;
use crate::enums::{IdentityProviderMappingMethod, IdentityProviderType};
use crate::presence::FieldSet;
use crate::types::{IdentityProvider, IdentityProviderField};

/// Builder for [`IdentityProvider`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentityProviderBuilder {
    pub(crate) fields: FieldSet<IdentityProviderField>,
    link: bool,
    id: String,
    href: String,
    challenge: bool,
    login: bool,
    mapping_method: Option<IdentityProviderMappingMethod>,
    name: String,
    type_: Option<IdentityProviderType>,
}

impl IdentityProviderBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(IdentityProviderField);

    /// Set whether challenge based authentication is supported.
    pub fn challenge(mut self, value: bool) -> Self {
        self.challenge = value;
        self.fields.insert(IdentityProviderField::Challenge);
        self
    }

    /// Set whether interactive login is supported.
    pub fn login(mut self, value: bool) -> Self {
        self.login = value;
        self.fields.insert(IdentityProviderField::Login);
        self
    }

    /// Set how identities are mapped to users.
    pub fn mapping_method(mut self, value: IdentityProviderMappingMethod) -> Self {
        self.mapping_method = Some(value);
        self.fields.insert(IdentityProviderField::MappingMethod);
        self
    }

    /// Set the name of the provider.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self.fields.insert(IdentityProviderField::Name);
        self
    }

    /// Set the type of the provider.
    pub fn type_(mut self, value: IdentityProviderType) -> Self {
        self.type_ = Some(value);
        self.fields.insert(IdentityProviderField::Type);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &IdentityProvider) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            challenge: object.challenge,
            login: object.login,
            mapping_method: object.mapping_method.clone(),
            name: object.name.clone(),
            type_: object.type_.clone(),
        }
    }

    /// Build the identity provider.
    pub fn build(&self) -> BuildResult<IdentityProvider> {
        Ok(IdentityProvider {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            challenge: self.challenge,
            login: self.login,
            mapping_method: self.mapping_method.clone(),
            name: self.name.clone(),
            type_: self.type_.clone(),
        })
    }
}
