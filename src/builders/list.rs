//! Builder for collections of objects with an identity.

use super::error::BuildResult;
use super::{ObjectBuilder, build_list, copy_list};
use crate::types::List;

/// Builder for [`List`] values.
///
/// Used for collection attributes such as the machine pools of a cluster,
/// which the server may return as a link to the collection instead of the
/// items themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ListBuilder<B> {
    link: bool,
    href: String,
    items: Vec<B>,
}

impl<B> Default for ListBuilder<B> {
    fn default() -> Self {
        Self {
            link: false,
            href: String::new(),
            items: Vec::new(),
        }
    }
}

impl<B: ObjectBuilder> ListBuilder<B> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as a link to the collection.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    /// Set the link to the collection.
    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = value.into();
        self
    }

    /// Replace the items.
    pub fn items<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        self.items = values.into_iter().collect();
        self
    }

    /// Append an item.
    pub fn add_item(mut self, value: B) -> Self {
        self.items.push(value);
        self
    }

    pub(crate) fn push(&mut self, value: B) {
        self.items.push(value);
    }

    pub(crate) fn copy_of(list: &List<B::Object>) -> Self {
        Self {
            link: list.link,
            href: list.href.clone(),
            items: copy_list::<B>(&list.items),
        }
    }

    /// Build every item, reporting failures under `field`.
    pub(crate) fn build(&self, field: &'static str) -> BuildResult<List<B::Object>> {
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items: build_list(field, &self.items)?,
        })
    }
}
