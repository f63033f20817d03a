use std::borrow::Cow;

/// Table targeted by a modification command.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: Cow<'static, str>,
    pub schema: Cow<'static, str>,
    pub alias: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
    pub fn with_schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }
    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.alias.is_empty() {
            result.push_str(&self.alias);
        } else {
            if !self.schema.is_empty() {
                result.push_str(&self.schema);
                result.push('.');
            }
            result.push_str(&self.name);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::TableRef;

    #[test]
    fn full_name() {
        assert_eq!(TableRef::new("orders").full_name(), "orders");
        assert_eq!(
            TableRef::new("orders").with_schema("sales").full_name(),
            "sales.orders"
        );
        assert_eq!(
            TableRef::new("orders")
                .with_schema("sales")
                .with_alias("o")
                .full_name(),
            "o"
        );
    }
}
