use crate::{ColumnMapping, EntityState, ParameterNameGenerator, Property, Result, Value};
use std::{
    cell::OnceCell,
    fmt::{self, Debug, Formatter},
};

/// One column taking part in an insert, update or delete of a single row.
///
/// Describes the role of the column in the statement and resolves the values
/// bound to its parameters. Parameter names are drawn from the command's
/// [`ParameterNameGenerator`] the first time each of them is requested, so the
/// numbers assigned follow the order in which the names are queried.
pub struct ColumnModification<'a> {
    entry: &'a dyn EntityState,
    property: &'a dyn Property,
    mapping: &'a dyn ColumnMapping,
    generator: &'a ParameterNameGenerator,
    is_read: bool,
    is_write: bool,
    is_key: bool,
    is_condition: bool,
    parameter_name: OnceCell<String>,
    original_parameter_name: OnceCell<String>,
    output_parameter_name: OnceCell<String>,
}

impl<'a> ColumnModification<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        entry: &'a dyn EntityState,
        property: &'a dyn Property,
        mapping: &'a dyn ColumnMapping,
        generator: &'a ParameterNameGenerator,
        is_read: bool,
        is_write: bool,
        is_key: bool,
        is_condition: bool,
    ) -> Self {
        Self {
            entry,
            property,
            mapping,
            generator,
            is_read,
            is_write,
            is_key,
            is_condition,
            parameter_name: OnceCell::new(),
            original_parameter_name: OnceCell::new(),
            output_parameter_name: OnceCell::new(),
        }
    }

    pub fn entry(&self) -> &'a dyn EntityState {
        self.entry
    }
    pub fn property(&self) -> &'a dyn Property {
        self.property
    }
    pub fn mapping(&self) -> &'a dyn ColumnMapping {
        self.mapping
    }
    pub fn column_name(&self) -> Option<&'a str> {
        self.mapping.column_name()
    }

    /// Column value is read back after the statement (generated or computed).
    pub fn is_read(&self) -> bool {
        self.is_read
    }
    /// Column value is sent with the statement.
    pub fn is_write(&self) -> bool {
        self.is_write
    }
    pub fn is_key(&self) -> bool {
        self.is_key
    }
    /// Column takes part in the `WHERE` clause.
    pub fn is_condition(&self) -> bool {
        self.is_condition
    }
    pub fn use_current_value_parameter(&self) -> bool {
        self.is_write
    }
    pub fn use_original_value_parameter(&self) -> bool {
        self.is_condition
    }

    /// Name of the parameter carrying the current value.
    pub fn parameter_name(&self) -> &str {
        self.parameter_name.get_or_init(|| self.generator.next_name())
    }
    /// Name of the parameter carrying the original value, used by conditions.
    pub fn original_parameter_name(&self) -> &str {
        self.original_parameter_name
            .get_or_init(|| self.generator.next_name())
    }
    /// Name of the parameter receiving the value read back.
    pub fn output_parameter_name(&self) -> &str {
        self.output_parameter_name
            .get_or_init(|| self.generator.next_name())
    }

    /// Current value of the property.
    pub fn value(&self) -> Result<Value> {
        self.entry.get(self.property)
    }
    /// Overwrite the current value of the property in the entry.
    pub fn set_value(&self, value: Value) -> Result<()> {
        self.entry.set(self.property, value)
    }
    /// Value the property had before being modified.
    ///
    /// Read from the entry's original values when they store this property,
    /// otherwise the property was never snapshotted and the current value is
    /// returned.
    pub fn original_value(&self) -> Result<Value> {
        match self.entry.original_values() {
            Some(original_values) if original_values.can_store_value(self.property) => {
                original_values.get(self.property)
            }
            _ => self.entry.get(self.property),
        }
    }
}

impl<'a> Debug for ColumnModification<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnModification")
            .field("property", &self.property.name())
            .field("column_name", &self.column_name())
            .field("is_read", &self.is_read)
            .field("is_write", &self.is_write)
            .field("is_key", &self.is_key)
            .field("is_condition", &self.is_condition)
            .field("parameter_name", &self.parameter_name.get())
            .field("original_parameter_name", &self.original_parameter_name.get())
            .field("output_parameter_name", &self.output_parameter_name.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnModification;
    use crate::{
        ColumnDef, EntityState, OriginalValues, ParameterNameGenerator, Property, PropertyDef,
        StateEntry, Value,
    };

    #[test]
    fn names_are_memoized() {
        let property = PropertyDef::new("id", 0);
        let entry = StateEntry::new([Value::Int64(Some(1))]);
        let column = ColumnDef::for_property(&property);
        let generator = ParameterNameGenerator::new();
        let modification =
            ColumnModification::new(&entry, &property, &column, &generator, false, true, true, true);
        assert_eq!(modification.column_name(), Some("id"));
        assert_eq!(modification.original_parameter_name(), "p0");
        assert_eq!(modification.parameter_name(), "p1");
        assert_eq!(modification.original_parameter_name(), "p0");
        assert_eq!(modification.parameter_name(), "p1");
        assert_eq!(generator.allocated(), 2);
    }

    #[test]
    fn debug_does_not_allocate() {
        let property = PropertyDef::new("id", 0);
        let entry = StateEntry::new([Value::Null]);
        let column = ColumnDef::default();
        let generator = ParameterNameGenerator::new();
        let modification =
            ColumnModification::new(&entry, &property, &column, &generator, true, false, false, false);
        let _ = format!("{modification:?}");
        assert_eq!(generator.allocated(), 0);
        assert_eq!(modification.output_parameter_name(), "p0");
        assert!(format!("{modification:?}").contains("\"p0\""));
    }

    #[test]
    fn original_value_from_snapshot() {
        let version = PropertyDef::new("version", 0).with_original_value_index(0);
        let title = PropertyDef::new("title", 1);
        let entry = StateEntry::new([Value::Int32(Some(1)), Value::Varchar(Some("old".into()))])
            .with_original_values(OriginalValues::new(1));
        entry
            .take_snapshot([&version as &dyn Property, &title])
            .unwrap();
        let generator = ParameterNameGenerator::new();
        let column = ColumnDef::default();

        let version_modification =
            ColumnModification::new(&entry, &version, &column, &generator, false, true, false, true);
        let title_modification =
            ColumnModification::new(&entry, &title, &column, &generator, false, true, false, false);
        version_modification
            .set_value(Value::Int32(Some(2)))
            .unwrap();
        title_modification
            .set_value(Value::Varchar(Some("new".into())))
            .unwrap();

        assert_eq!(version_modification.value().unwrap(), Value::Int32(Some(2)));
        assert_eq!(
            version_modification.original_value().unwrap(),
            Value::Int32(Some(1))
        );
        // Never snapshotted: original is the current value
        assert_eq!(
            title_modification.original_value().unwrap(),
            Value::Varchar(Some("new".into()))
        );
        assert_eq!(entry.get(&title).unwrap(), Value::Varchar(Some("new".into())));
    }

    #[test]
    fn errors_propagate() {
        let property = PropertyDef::new("ghost", 9);
        let entry = StateEntry::default();
        let column = ColumnDef::default();
        let generator = ParameterNameGenerator::new();
        let modification =
            ColumnModification::new(&entry, &property, &column, &generator, false, false, false, false);
        assert!(modification.value().is_err());
        assert!(modification.original_value().is_err());
        assert!(modification.set_value(Value::Null).is_err());
    }
}
