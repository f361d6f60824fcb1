//! Presence tracking for optional fields.
//!
//! Every resource type declares a field enum implementing [`Field`]. Builders
//! and value objects carry a [`FieldSet`] of that enum recording which fields
//! were explicitly assigned, so that "set to the zero value" can be told apart
//! from "never set" when producing partial update payloads.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Identifier of one optional field of a resource type.
pub trait Field: Copy + Ord + Hash + fmt::Debug + 'static {
    /// All fields of the type, in wire order.
    const ALL: &'static [Self];

    /// The JSON key of the field.
    fn name(self) -> &'static str;

    /// Looks up a field by its JSON key.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// The set of fields that were explicitly assigned.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldSet<F: Field> {
    fields: BTreeSet<F>,
}

impl<F: Field> FieldSet<F> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }

    /// Mark a field as present.
    pub fn insert(&mut self, field: F) {
        self.fields.insert(field);
    }

    /// Mark a field as absent.
    pub fn remove(&mut self, field: F) {
        self.fields.remove(&field);
    }

    /// Mark or clear a field depending on `present`.
    pub fn set(&mut self, field: F, present: bool) {
        if present {
            self.insert(field);
        } else {
            self.remove(field);
        }
    }

    /// Returns `true` if the field was explicitly assigned.
    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// Returns `true` if no field was assigned.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of assigned fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over the assigned fields in wire order.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    /// JSON keys of the assigned fields in wire order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(F::name).collect()
    }
}

impl<F: Field> Default for FieldSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> fmt::Debug for FieldSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(F::name)).finish()
    }
}

impl<F: Field> FromIterator<F> for FieldSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Access to the presence set of a builder or value object.
pub trait Presence {
    /// The field enum of the type.
    type Field: Field;

    /// The fields that were explicitly assigned.
    fn fields(&self) -> &FieldSet<Self::Field>;

    /// Returns `true` if `field` was explicitly assigned.
    fn is_set(&self, field: Self::Field) -> bool {
        self.fields().contains(field)
    }
}

/// Declares a field enum and its [`Field`] implementation.
///
/// Variants are listed in wire order; the derived `Ord` follows declaration
/// order, which keeps [`FieldSet`] iteration in the same order.
macro_rules! fields {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("The `", $key, "` field.")]
                $variant,
            )+
        }

        impl $crate::presence::Field for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }
    };
}

pub(crate) use fields;

#[cfg(test)]
mod tests {
    use super::*;

    fields! {
        /// Fields of a test object.
        pub enum SampleField {
            Id => "id",
            Name => "name",
            Replicas => "replicas",
        }
    }

    #[test]
    fn test_field_lookup_by_name() {
        assert_eq!(SampleField::from_name("name"), Some(SampleField::Name));
        assert_eq!(SampleField::from_name("missing"), None);
        assert_eq!(SampleField::Replicas.name(), "replicas");
    }

    #[test]
    fn test_field_set_insert_and_remove() {
        let mut set = FieldSet::new();
        assert!(set.is_empty());

        set.insert(SampleField::Replicas);
        set.insert(SampleField::Id);
        set.insert(SampleField::Id);
        assert_eq!(set.len(), 2);
        assert!(set.contains(SampleField::Id));
        assert!(!set.contains(SampleField::Name));

        set.set(SampleField::Id, false);
        assert!(!set.contains(SampleField::Id));
        set.remove(SampleField::Replicas);
        assert!(set.is_empty());
    }

    #[test]
    fn test_field_set_iterates_in_wire_order() {
        let set: FieldSet<SampleField> =
            [SampleField::Replicas, SampleField::Id, SampleField::Name]
                .into_iter()
                .collect();
        assert_eq!(set.names(), vec!["id", "name", "replicas"]);
        assert_eq!(format!("{:?}", set), r#"{"id", "name", "replicas"}"#);
    }
}
