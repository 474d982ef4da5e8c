//! Foreign key constraints

use crate::naming::AssetName;
use crate::platform::Platform;

/// Reference from local columns to columns of another table
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyConstraint {
    name: AssetName,
    local_columns: Vec<AssetName>,
    foreign_table: AssetName,
    foreign_columns: Vec<AssetName>,
}

impl ForeignKeyConstraint {
    pub fn new(
        name: &str,
        local_columns: &[&str],
        foreign_table: &str,
        foreign_columns: &[&str],
    ) -> Self {
        Self {
            name: AssetName::from_raw(name),
            local_columns: local_columns.iter().map(|c| AssetName::from_raw(c)).collect(),
            foreign_table: AssetName::from_raw(foreign_table),
            foreign_columns: foreign_columns.iter().map(|c| AssetName::from_raw(c)).collect(),
        }
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    pub fn local_columns(&self) -> Vec<&str> {
        self.local_columns.iter().map(AssetName::name).collect()
    }

    pub fn foreign_table(&self) -> &AssetName {
        &self.foreign_table
    }

    pub fn foreign_columns(&self) -> Vec<&str> {
        self.foreign_columns.iter().map(AssetName::name).collect()
    }

    pub fn renamed(&self, new_name: &str) -> Self {
        Self {
            name: self.name.renamed(new_name),
            ..self.clone()
        }
    }

    pub fn quoted_name<P: Platform + ?Sized>(&self, platform: &P) -> String {
        self.name.quoted_name(platform)
    }

    pub fn quoted_local_columns<P: Platform + ?Sized>(&self, platform: &P) -> Vec<String> {
        self.local_columns.iter().map(|c| c.quoted_name(platform)).collect()
    }

    pub fn quoted_foreign_table_name<P: Platform + ?Sized>(&self, platform: &P) -> String {
        self.foreign_table.quoted_name(platform)
    }

    pub fn quoted_foreign_columns<P: Platform + ?Sized>(&self, platform: &P) -> Vec<String> {
        self.foreign_columns.iter().map(|c| c.quoted_name(platform)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SqlDialect;

    #[test]
    fn test_foreign_key_quoting() {
        let fk = ForeignKeyConstraint::new("fk_order_user", &["user"], "app.user", &["id"]);

        assert_eq!(fk.local_columns(), vec!["user"]);
        assert_eq!(fk.foreign_table().namespace(), Some("app"));
        assert_eq!(fk.quoted_local_columns(&SqlDialect::PostgreSQL), vec!["\"user\"".to_string()]);
        assert_eq!(fk.quoted_foreign_table_name(&SqlDialect::PostgreSQL), "app.\"user\"");
        assert_eq!(fk.quoted_foreign_columns(&SqlDialect::PostgreSQL), vec!["id".to_string()]);

        let renamed = fk.renamed("fk_order_owner");
        assert_eq!(renamed.name().name(), "fk_order_owner");
        assert_eq!(renamed.foreign_table().qualified_name(), "app.user");
    }
}
