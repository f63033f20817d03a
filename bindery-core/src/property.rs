use std::{borrow::Cow, fmt::Debug};

/// Identity of a mapped entity property, the key of every indexed lookup on an
/// [`EntityState`](crate::EntityState) or a [`Sidecar`](crate::Sidecar).
pub trait Property: Debug {
    /// Property name in the entity model.
    fn name(&self) -> &str;
    /// Position of the property in the entity's current value buffer.
    fn index(&self) -> usize;
    /// Slot in the original values snapshot, `None` if the property is never snapshotted.
    fn original_value_index(&self) -> Option<usize> {
        None
    }
}

/// Plain data description of an entity property.
#[derive(Default, Debug, Clone)]
pub struct PropertyDef {
    pub name: Cow<'static, str>,
    pub index: usize,
    pub original_value_index: Option<usize>,
}

impl PropertyDef {
    pub fn new(name: impl Into<Cow<'static, str>>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            ..Default::default()
        }
    }
    /// Marks the property as snapshotted in slot `index` of the original values.
    pub fn with_original_value_index(mut self, index: usize) -> Self {
        self.original_value_index = Some(index);
        self
    }
}

impl Property for PropertyDef {
    fn name(&self) -> &str {
        &self.name
    }
    fn index(&self) -> usize {
        self.index
    }
    fn original_value_index(&self) -> Option<usize> {
        self.original_value_index
    }
}
