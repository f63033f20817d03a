use crate::{Property, Result, Value};

/// Tracked in-memory state of one entity.
///
/// Sibling column modifications of the same row share the state through a
/// shared reference, therefore `set` takes `&self` and implementors rely on
/// interior mutability. This also makes them `!Sync` in practice, confining one
/// entry to the thread building its command.
pub trait EntityState {
    /// Current value of `property`.
    fn get(&self, property: &dyn Property) -> Result<Value>;
    /// Replace the current value of `property`, marking it as changed.
    fn set(&self, property: &dyn Property, value: Value) -> Result<()>;
    /// Snapshot of the values as they were before the entity was modified, if any.
    fn original_values(&self) -> Option<&dyn Sidecar>;
}

/// Auxiliary per-entity value store holding values for a subset of the properties.
pub trait Sidecar {
    /// Whether this store keeps a value for `property`.
    fn can_store_value(&self, property: &dyn Property) -> bool;
    fn get(&self, property: &dyn Property) -> Result<Value>;
    fn set(&self, property: &dyn Property, value: Value) -> Result<()>;
}
