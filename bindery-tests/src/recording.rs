use bindery_core::{EntityState, Error, Property, Result, Sidecar, Value};
use std::cell::{Cell, RefCell};

/// Entity state returning a fixed value and recording every access.
#[derive(Default, Debug)]
pub struct RecordingEntry {
    value: Value,
    original_values: Option<RecordingSidecar>,
    reads: RefCell<Vec<String>>,
    writes: RefCell<Vec<(String, Value)>>,
    original_values_requests: Cell<usize>,
}

impl RecordingEntry {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
    pub fn with_original_values(mut self, original_values: RecordingSidecar) -> Self {
        self.original_values = Some(original_values);
        self
    }
    /// Names of the properties read, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
    /// Properties and values written, in order.
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.writes.borrow().clone()
    }
    pub fn original_values_requests(&self) -> usize {
        self.original_values_requests.get()
    }
    pub fn sidecar(&self) -> Option<&RecordingSidecar> {
        self.original_values.as_ref()
    }
}

impl EntityState for RecordingEntry {
    fn get(&self, property: &dyn Property) -> Result<Value> {
        self.reads.borrow_mut().push(property.name().to_owned());
        Ok(self.value.clone())
    }
    fn set(&self, property: &dyn Property, value: Value) -> Result<()> {
        self.writes
            .borrow_mut()
            .push((property.name().to_owned(), value));
        Ok(())
    }
    fn original_values(&self) -> Option<&dyn Sidecar> {
        self.original_values_requests
            .set(self.original_values_requests.get() + 1);
        self.original_values.as_ref().map(|v| v as &dyn Sidecar)
    }
}

/// Sidecar answering `can_store_value` with a fixed outcome and recording every access.
#[derive(Default, Debug)]
pub struct RecordingSidecar {
    can_store: bool,
    value: Value,
    failing: bool,
    can_store_requests: Cell<usize>,
    reads: RefCell<Vec<String>>,
    writes: RefCell<Vec<(String, Value)>>,
}

impl RecordingSidecar {
    pub fn new(can_store: bool, value: Value) -> Self {
        Self {
            can_store,
            value,
            ..Default::default()
        }
    }
    /// Claims to store every property but fails every indexed access.
    pub fn failing() -> Self {
        Self {
            can_store: true,
            failing: true,
            ..Default::default()
        }
    }
    pub fn can_store_requests(&self) -> usize {
        self.can_store_requests.get()
    }
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.writes.borrow().clone()
    }
}

impl Sidecar for RecordingSidecar {
    fn can_store_value(&self, _property: &dyn Property) -> bool {
        self.can_store_requests.set(self.can_store_requests.get() + 1);
        self.can_store
    }
    fn get(&self, property: &dyn Property) -> Result<Value> {
        self.reads.borrow_mut().push(property.name().to_owned());
        if self.failing {
            return Err(Error::msg(format!(
                "Sidecar cannot read `{}`",
                property.name()
            )));
        }
        Ok(self.value.clone())
    }
    fn set(&self, property: &dyn Property, value: Value) -> Result<()> {
        if self.failing {
            return Err(Error::msg(format!(
                "Sidecar cannot write `{}`",
                property.name()
            )));
        }
        self.writes
            .borrow_mut()
            .push((property.name().to_owned(), value));
        Ok(())
    }
}
