use crate::{EntityState, Error, Property, Result, Sidecar, Value};
use std::cell::RefCell;

/// In-memory [`EntityState`] storing one value per property index.
#[derive(Default, Debug)]
pub struct StateEntry {
    values: RefCell<Box<[Value]>>,
    original_values: Option<OriginalValues>,
}

impl StateEntry {
    pub fn new(values: impl Into<Box<[Value]>>) -> Self {
        Self {
            values: RefCell::new(values.into()),
            original_values: None,
        }
    }
    pub fn with_original_values(mut self, original_values: OriginalValues) -> Self {
        self.original_values = Some(original_values);
        self
    }
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Copy the current value of every snapshotted property into the original values.
    ///
    /// Does nothing if the entry has no original values.
    pub fn take_snapshot<'p>(
        &self,
        properties: impl IntoIterator<Item = &'p dyn Property>,
    ) -> Result<()> {
        if let Some(original_values) = &self.original_values {
            original_values.take_snapshot(self, properties)?;
        }
        Ok(())
    }
}

impl EntityState for StateEntry {
    fn get(&self, property: &dyn Property) -> Result<Value> {
        let values = self.values.borrow();
        values
            .get(property.index())
            .cloned()
            .ok_or_else(|| out_of_range("entry", property, property.index(), values.len()))
    }
    fn set(&self, property: &dyn Property, value: Value) -> Result<()> {
        let mut values = self.values.borrow_mut();
        let len = values.len();
        let slot = values
            .get_mut(property.index())
            .ok_or_else(|| out_of_range("entry", property, property.index(), len))?;
        *slot = value;
        Ok(())
    }
    fn original_values(&self) -> Option<&dyn Sidecar> {
        self.original_values.as_ref().map(|v| v as &dyn Sidecar)
    }
}

/// Snapshot of the values that properties had before being modified.
///
/// Only properties with an `original_value_index` are stored here.
#[derive(Default, Debug)]
pub struct OriginalValues {
    values: RefCell<Box<[Value]>>,
}

impl OriginalValues {
    /// Sidecar with `len` slots, all `NULL`.
    pub fn new(len: usize) -> Self {
        Self {
            values: RefCell::new(vec![Value::Null; len].into_boxed_slice()),
        }
    }
    pub fn take_snapshot<'p>(
        &self,
        entry: &dyn EntityState,
        properties: impl IntoIterator<Item = &'p dyn Property>,
    ) -> Result<()> {
        let mut captured = 0;
        for property in properties {
            if self.can_store_value(property) {
                self.set(property, entry.get(property)?)?;
                captured += 1;
            }
        }
        log::debug!("Snapshot captured {captured} original values");
        Ok(())
    }
    fn slot(&self, property: &dyn Property) -> Result<usize> {
        let len = self.values.borrow().len();
        match property.original_value_index() {
            Some(index) if index < len => Ok(index),
            Some(index) => Err(out_of_range("original values", property, index, len)),
            None => Err(Error::msg(format!(
                "Property `{}` does not have an original value",
                property.name()
            ))),
        }
    }
}

impl Sidecar for OriginalValues {
    fn can_store_value(&self, property: &dyn Property) -> bool {
        property
            .original_value_index()
            .is_some_and(|v| v < self.values.borrow().len())
    }
    fn get(&self, property: &dyn Property) -> Result<Value> {
        let index = self.slot(property)?;
        Ok(self.values.borrow()[index].clone())
    }
    fn set(&self, property: &dyn Property, value: Value) -> Result<()> {
        let index = self.slot(property)?;
        self.values.borrow_mut()[index] = value;
        Ok(())
    }
}

fn out_of_range(store: &str, property: &dyn Property, index: usize, len: usize) -> Error {
    Error::msg(format!(
        "Property `{}` maps to index {index} but the {store} holds {len} values",
        property.name()
    ))
}
