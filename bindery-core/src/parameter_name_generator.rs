use std::{borrow::Cow, cell::Cell};

/// Sequential allocator of parameter labels for one command.
///
/// Every label is `base` followed by the counter value, which starts at zero and
/// only moves forward. Create one generator per command and lend it to each of
/// the command's column modifications; it is neither `Clone` nor `Sync`, so a
/// sequence can be neither forked nor shared across threads.
#[derive(Debug)]
pub struct ParameterNameGenerator {
    base: Cow<'static, str>,
    counter: Cell<u64>,
}

impl ParameterNameGenerator {
    pub const DEFAULT_BASE: &'static str = "p";

    pub fn new() -> Self {
        Self::with_base(Self::DEFAULT_BASE)
    }
    /// Generator producing `{base}0`, `{base}1`, ... (for example `"@p"` for SQL Server).
    pub fn with_base(base: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: base.into(),
            counter: Cell::new(0),
        }
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    /// Number of labels issued so far.
    pub fn allocated(&self) -> u64 {
        self.counter.get()
    }
    /// Label made of `base` and the current counter value, then advance the counter.
    pub fn generate_next(&self, base: &str) -> String {
        let current = self.counter.get();
        // Labels are never reissued
        self.counter.set(current.checked_add(1).unwrap_or_else(|| {
            panic!("Parameter name generator exhausted after {current} labels")
        }));
        let mut buffer = itoa::Buffer::new();
        let number = buffer.format(current);
        let mut result = String::with_capacity(base.len() + number.len());
        result.push_str(base);
        result.push_str(number);
        log::trace!("Allocated parameter name {result}");
        result
    }
    /// Next label using the configured base.
    pub fn next_name(&self) -> String {
        self.generate_next(&self.base)
    }
}

impl Default for ParameterNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
