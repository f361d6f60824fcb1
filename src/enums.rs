//! Enumerated attribute values.
//!
//! On the wire these are plain strings. Values this crate does not know about
//! are kept verbatim in an `Other` variant so that they survive a round trip.

use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// Values compare by their wire representation, so `Other` holding a
        /// known string equals the matching named variant. Prefer
        /// `From<&str>` to construct values from text.
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this crate.
            Other(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl $name {
            /// The wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(text) => text.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                match text {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Overall state of a cluster.
    pub enum ClusterState {
        /// Error during installation.
        Error => "error",
        /// The cluster is hibernating.
        Hibernating => "hibernating",
        /// The cluster is still being installed.
        Installing => "installing",
        /// The cluster is pending resources before being provisioned.
        Pending => "pending",
        /// The cluster is moving to hibernation.
        PoweringDown => "powering_down",
        /// The cluster is ready to use.
        Ready => "ready",
        /// The cluster is resuming from hibernation.
        Resuming => "resuming",
        /// The cluster is being uninstalled.
        Uninstalling => "uninstalling",
        /// The state of the cluster is unknown.
        Unknown => "unknown",
        /// The cluster is validating user input.
        Validating => "validating",
        /// The cluster is waiting for user action.
        Waiting => "waiting",
    }
}

wire_enum! {
    /// Type of identity provider.
    pub enum IdentityProviderType {
        /// GitHub identity provider.
        Github => "GithubIdentityProvider",
        /// GitLab identity provider.
        Gitlab => "GitlabIdentityProvider",
        /// Google identity provider.
        Google => "GoogleIdentityProvider",
        /// HTPasswd identity provider.
        HtPasswd => "HTPasswdIdentityProvider",
        /// LDAP identity provider.
        Ldap => "LDAPIdentityProvider",
        /// OpenID identity provider.
        OpenId => "OpenIDIdentityProvider",
    }
}

wire_enum! {
    /// How new identities are mapped to users.
    pub enum IdentityProviderMappingMethod {
        /// Adds the identity to an existing user with the same name.
        Add => "add",
        /// Provisions a user with the preferred user name of the identity.
        Claim => "claim",
        /// Provisions a user with a generated user name.
        Generate => "generate",
        /// Looks up an existing identity, user identity mapping and user.
        Lookup => "lookup",
    }
}

wire_enum! {
    /// Namespaces an add-on operator watches.
    pub enum AddOnInstallMode {
        /// The operator watches all namespaces.
        AllNamespaces => "all_namespaces",
        /// The operator watches only its own namespace.
        OwnNamespace => "own_namespace",
    }
}
