use bindery_core::{
    ColumnMapping, ColumnModification, EntityState, ParameterNameGenerator, Property, Result,
    TableRef, Value,
};
use std::fmt::{self, Debug, Formatter};

/// Columns of the insert, update or delete command for one row.
///
/// All the columns share the row's entry and the command's parameter name
/// generator, so their parameter names never collide.
pub struct ModificationCommand<'a> {
    table: TableRef,
    entry: &'a dyn EntityState,
    generator: &'a ParameterNameGenerator,
    columns: Vec<ColumnModification<'a>>,
}

impl<'a> ModificationCommand<'a> {
    pub fn new(
        table: TableRef,
        entry: &'a dyn EntityState,
        generator: &'a ParameterNameGenerator,
    ) -> Self {
        Self {
            table,
            entry,
            generator,
            columns: Vec::new(),
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }
    pub fn entry(&self) -> &'a dyn EntityState {
        self.entry
    }
    pub fn generator(&self) -> &'a ParameterNameGenerator {
        self.generator
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_column(
        &mut self,
        property: &'a dyn Property,
        mapping: &'a dyn ColumnMapping,
        is_read: bool,
        is_write: bool,
        is_key: bool,
        is_condition: bool,
    ) -> &ColumnModification<'a> {
        log::trace!(
            "Command on {} adds column {:?} (read: {is_read}, write: {is_write}, key: {is_key}, condition: {is_condition})",
            self.table.full_name(),
            mapping.column_name().unwrap_or(property.name()),
        );
        let index = self.columns.len();
        self.columns.push(ColumnModification::new(
            self.entry,
            property,
            mapping,
            self.generator,
            is_read,
            is_write,
            is_key,
            is_condition,
        ));
        &self.columns[index]
    }

    pub fn columns(&self) -> &[ColumnModification<'a>] {
        &self.columns
    }
    pub fn read_columns(&self) -> impl Iterator<Item = &ColumnModification<'a>> {
        self.columns.iter().filter(|v| v.is_read())
    }
    pub fn write_columns(&self) -> impl Iterator<Item = &ColumnModification<'a>> {
        self.columns.iter().filter(|v| v.is_write())
    }
    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnModification<'a>> {
        self.columns.iter().filter(|v| v.is_key())
    }
    pub fn condition_columns(&self) -> impl Iterator<Item = &ColumnModification<'a>> {
        self.columns.iter().filter(|v| v.is_condition())
    }

    /// Parameter names and values to bind, in column order.
    ///
    /// Each column contributes its current value if written, then its original
    /// value if it is a condition.
    pub fn bindings(&self) -> Result<Vec<(&str, Value)>> {
        let mut result = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            if column.use_current_value_parameter() {
                result.push((column.parameter_name(), column.value()?));
            }
            if column.use_original_value_parameter() {
                result.push((column.original_parameter_name(), column.original_value()?));
            }
        }
        Ok(result)
    }
}

impl<'a> Debug for ModificationCommand<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModificationCommand")
            .field("table", &self.table)
            .field("columns", &self.columns)
            .finish()
    }
}
