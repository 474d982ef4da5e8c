//! Table columns

use crate::naming::AssetName;
use crate::platform::Platform;

/// Column definition
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: AssetName,
    column_type: String,
    nullable: bool,
    autoincrement: bool,
    default: Option<String>,
}

impl Column {
    pub fn new(name: &str, column_type: &str) -> Self {
        Self {
            name: AssetName::from_raw(name),
            column_type: column_type.to_string(),
            nullable: false,
            autoincrement: false,
            default: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn autoincrement(mut self, autoincrement: bool) -> Self {
        self.autoincrement = autoincrement;
        self
    }

    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    pub fn column_type(&self) -> &str {
        &self.column_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_autoincrement(&self) -> bool {
        self.autoincrement
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Same column under a new name
    pub fn renamed(&self, new_name: &str) -> Self {
        Self {
            name: self.name.renamed(new_name),
            ..self.clone()
        }
    }

    pub fn quoted_name<P: Platform + ?Sized>(&self, platform: &P) -> String {
        self.name.quoted_name(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SqlDialect;

    #[test]
    fn test_column_definition() {
        let column = Column::new("email", "VARCHAR(255)")
            .nullable(true)
            .default_value("''");
        assert_eq!(column.name().name(), "email");
        assert_eq!(column.column_type(), "VARCHAR(255)");
        assert!(column.is_nullable());
        assert!(!column.is_autoincrement());
        assert_eq!(column.default(), Some("''"));
    }

    #[test]
    fn test_renamed_keeps_definition() {
        let column = Column::new("id", "INTEGER").autoincrement(true);
        let renamed = column.renamed("order");
        assert_eq!(renamed.name().name(), "order");
        assert!(renamed.is_autoincrement());
        assert_eq!(renamed.quoted_name(&SqlDialect::PostgreSQL), "\"order\"");
        assert_eq!(column.name().name(), "id");
    }
}
