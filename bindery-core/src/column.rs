use crate::Property;
use std::borrow::Cow;

/// Relational storage extensions of a property: where and how it is persisted.
pub trait ColumnMapping {
    /// Column name, `None` if the mapping does not define one.
    fn column_name(&self) -> Option<&str>;
}

/// Declarative column mapping.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name.
    pub name: Option<Cow<'static, str>>,
}

impl ColumnDef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
    /// Default mapping: the column takes the name of the property.
    pub fn for_property(property: &dyn Property) -> Self {
        Self::new(property.name().to_owned())
    }
}

impl ColumnMapping for ColumnDef {
    fn column_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnDef, ColumnMapping};
    use crate::PropertyDef;

    #[test]
    fn unnamed_by_default() {
        let column = ColumnDef::default();
        assert_eq!(column.column_name(), None);
    }

    #[test]
    fn named_after_property() {
        let property = PropertyDef::new("balance", 3);
        let column = ColumnDef::for_property(&property);
        assert_eq!(column.column_name(), Some("balance"));
        assert_eq!(column, ColumnDef::new("balance"));
    }
}
