//! Tables and the objects they own

use tracing::debug;

use crate::config::DbalConfig;
use crate::error::SchemaError;
use crate::naming::{generate_identifier_name, AssetName, DEFAULT_MAX_IDENTIFIER_LENGTH};
use crate::platform::Platform;

use super::column::Column;
use super::foreign_key::ForeignKeyConstraint;
use super::index::Index;

/// Name given to every primary key index
pub const PRIMARY_KEY_NAME: &str = "primary";

/// Table definition
///
/// Columns and indexes are looked up case-insensitively through the
/// shortest name of the asset relative to the table's namespace, or the
/// configured default namespace for an unqualified table. Names left
/// out of `add_index`, `add_unique_index` and `add_foreign_key` are
/// generated from the table name and the column list.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: AssetName,
    columns: Vec<Column>,
    indexes: Vec<Index>,
    foreign_keys: Vec<ForeignKeyConstraint>,
    max_identifier_length: usize,
    default_namespace: String,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: AssetName::from_raw(name),
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            default_namespace: String::new(),
        }
    }

    /// Table using the configured identifier limit and default namespace
    pub fn with_config(name: &str, config: &DbalConfig) -> Self {
        Self::new(name)
            .with_max_identifier_length(config.identifier_max_length)
            .with_default_namespace(config.namespace())
    }

    pub fn with_default_namespace(mut self, namespace: &str) -> Self {
        self.default_namespace = namespace.to_string();
        self
    }

    /// Limit applied to generated index and constraint names
    pub fn with_max_identifier_length(mut self, max_length: usize) -> Self {
        self.max_identifier_length = max_length;
        self
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    /// Namespace names are resolved against
    pub fn namespace(&self) -> &str {
        self.name.namespace().unwrap_or(&self.default_namespace)
    }

    /// Table name without the namespace when it is the default one
    pub fn shortest_name(&self) -> String {
        self.name.shortest_name(&self.default_namespace)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyConstraint] {
        &self.foreign_keys
    }

    pub fn add_column(&mut self, column: Column) -> Result<&mut Self, SchemaError> {
        let key = self.normalize(column.name());
        if self.position_of_column(&key).is_some() {
            return Err(SchemaError::ColumnAlreadyExists {
                table: self.name.qualified_name(),
                column: column.name().qualified_name(),
            });
        }
        self.columns.push(column);
        Ok(self)
    }

    pub fn has_column(&self, name: &str) -> bool {
        let key = self.normalize(&AssetName::from_raw(name));
        self.position_of_column(&key).is_some()
    }

    pub fn column(&self, name: &str) -> Result<&Column, SchemaError> {
        let key = self.normalize(&AssetName::from_raw(name));
        self.position_of_column(&key)
            .map(|position| &self.columns[position])
            .ok_or_else(|| self.column_not_found(name))
    }

    pub fn drop_column(&mut self, name: &str) -> Result<Column, SchemaError> {
        let key = self.normalize(&AssetName::from_raw(name));
        match self.position_of_column(&key) {
            Some(position) => Ok(self.columns.remove(position)),
            None => Err(self.column_not_found(name)),
        }
    }

    pub fn add_index(&mut self, columns: &[&str], name: Option<&str>) -> Result<&Index, SchemaError> {
        self.push_index(columns, name, "idx", false)
    }

    pub fn add_unique_index(
        &mut self,
        columns: &[&str],
        name: Option<&str>,
    ) -> Result<&Index, SchemaError> {
        self.push_index(columns, name, "uniq", true)
    }

    pub fn set_primary_key(&mut self, columns: &[&str]) -> Result<&Index, SchemaError> {
        self.ensure_columns(columns)?;
        if self.primary_key().is_some() {
            return Err(SchemaError::IndexAlreadyExists {
                table: self.name.qualified_name(),
                index: PRIMARY_KEY_NAME.to_string(),
            });
        }
        self.insert_index(Index::new(PRIMARY_KEY_NAME, columns, true, true))
    }

    pub fn primary_key(&self) -> Option<&Index> {
        self.indexes.iter().find(|index| index.is_primary())
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        let key = self.normalize(&AssetName::from_raw(name));
        self.indexes
            .iter()
            .find(|index| self.normalize(index.name()) == key)
    }

    pub fn has_index(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    pub fn add_foreign_key(
        &mut self,
        local_columns: &[&str],
        foreign_table: &str,
        foreign_columns: &[&str],
        name: Option<&str>,
    ) -> Result<&ForeignKeyConstraint, SchemaError> {
        self.ensure_columns(local_columns)?;
        if local_columns.len() != foreign_columns.len() {
            return Err(SchemaError::ForeignKeyColumnMismatch {
                table: self.name.qualified_name(),
                local: local_columns.len(),
                foreign: foreign_columns.len(),
            });
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => self.generated_name(local_columns, "fk"),
        };
        debug!("Adding foreign key {} on {}", name, self.name);

        self.foreign_keys.push(ForeignKeyConstraint::new(
            &name,
            local_columns,
            foreign_table,
            foreign_columns,
        ));
        let last = self.foreign_keys.len() - 1;
        Ok(&self.foreign_keys[last])
    }

    /// Same table under a new name
    pub fn renamed(&self, new_name: &str) -> Self {
        Self {
            name: self.name.renamed(new_name),
            ..self.clone()
        }
    }

    pub fn quoted_name<P: Platform + ?Sized>(&self, platform: &P) -> String {
        self.name.quoted_name(platform)
    }

    fn push_index(
        &mut self,
        columns: &[&str],
        name: Option<&str>,
        prefix: &str,
        unique: bool,
    ) -> Result<&Index, SchemaError> {
        self.ensure_columns(columns)?;
        let name = match name {
            Some(name) => name.to_string(),
            None => self.generated_name(columns, prefix),
        };
        if name.is_empty() {
            return Err(SchemaError::InvalidName(format!(
                "index name for table '{}' is empty",
                self.name.qualified_name()
            )));
        }
        if self.has_index(&name) {
            return Err(SchemaError::IndexAlreadyExists {
                table: self.name.qualified_name(),
                index: name,
            });
        }
        debug!("Adding index {} on {}", name, self.name);
        self.insert_index(Index::new(&name, columns, unique, false))
    }

    fn insert_index(&mut self, index: Index) -> Result<&Index, SchemaError> {
        self.indexes.push(index);
        let last = self.indexes.len() - 1;
        Ok(&self.indexes[last])
    }

    fn generated_name(&self, columns: &[&str], prefix: &str) -> String {
        let mut parts = Vec::with_capacity(columns.len() + 1);
        parts.push(self.name.qualified_name());
        parts.extend(columns.iter().map(|column| column.to_string()));
        generate_identifier_name(parts.as_slice(), prefix, self.max_identifier_length)
    }

    fn ensure_columns(&self, columns: &[&str]) -> Result<(), SchemaError> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(missing) => Err(self.column_not_found(missing)),
            None => Ok(()),
        }
    }

    fn normalize(&self, name: &AssetName) -> String {
        name.shortest_name(self.namespace())
    }

    fn position_of_column(&self, key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| self.normalize(column.name()) == key)
    }

    fn column_not_found(&self, column: &str) -> SchemaError {
        SchemaError::ColumnNotFound {
            table: self.name.qualified_name(),
            column: column.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::generate_identifier_name;
    use crate::platform::SqlDialect;

    fn users() -> Table {
        let mut table = Table::new("users");
        table
            .add_column(Column::new("id", "INTEGER").autoincrement(true))
            .unwrap()
            .add_column(Column::new("email", "VARCHAR(255)"))
            .unwrap()
            .add_column(Column::new("order", "INTEGER").nullable(true))
            .unwrap();
        table
    }

    #[test]
    fn test_column_lookup_ignores_case() {
        let table = users();
        assert!(table.has_column("EMAIL"));
        assert!(table.has_column("\"Email\""));
        assert_eq!(table.column("Id").unwrap().column_type(), "INTEGER");
        assert!(!table.has_column("name"));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut table = users();
        let err = table.add_column(Column::new("Email", "TEXT")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnAlreadyExists {
                table: "users".to_string(),
                column: "Email".to_string(),
            }
        );
    }

    #[test]
    fn test_drop_column() {
        let mut table = users();
        let dropped = table.drop_column("email").unwrap();
        assert_eq!(dropped.name().name(), "email");
        assert!(!table.has_column("email"));
        assert!(matches!(
            table.drop_column("email"),
            Err(SchemaError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_generated_index_names() {
        let mut table = users();
        let expected = generate_identifier_name(&["users", "email"], "idx", 30);
        let index_name = table.add_index(&["email"], None).unwrap().name().name().to_string();
        assert_eq!(index_name, expected);
        assert!(index_name.starts_with("IDX_"));
        assert_eq!(index_name.chars().count(), 20);

        let unique = table.add_unique_index(&["email"], None).unwrap();
        assert!(unique.is_unique());
        assert!(unique.name().name().starts_with("UNIQ_"));
    }

    #[test]
    fn test_max_identifier_length_applies_to_generated_names() {
        let mut table = users().with_max_identifier_length(8);
        let index = table.add_index(&["email", "order"], None).unwrap();
        assert_eq!(index.name().name().chars().count(), 8);
    }

    #[test]
    fn test_index_requires_existing_columns() {
        let mut table = users();
        assert!(matches!(
            table.add_index(&["missing"], None),
            Err(SchemaError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_index_name_rejected() {
        let mut table = users();
        table.add_index(&["email"], Some("idx_email")).unwrap();
        assert!(matches!(
            table.add_index(&["order"], Some("IDX_EMAIL")),
            Err(SchemaError::IndexAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_primary_key() {
        let mut table = users();
        table.set_primary_key(&["id"]).unwrap();
        let primary = table.primary_key().unwrap();
        assert_eq!(primary.name().name(), PRIMARY_KEY_NAME);
        assert_eq!(primary.columns(), vec!["id"]);
        assert!(table.set_primary_key(&["email"]).is_err());
    }

    #[test]
    fn test_foreign_key() {
        let mut orders = Table::new("orders");
        orders.add_column(Column::new("user_id", "INTEGER")).unwrap();
        let fk = orders
            .add_foreign_key(&["user_id"], "users", &["id"], None)
            .unwrap();
        assert!(fk.name().name().starts_with("FK_"));
        assert_eq!(fk.foreign_table().name(), "users");

        assert_eq!(
            orders
                .add_foreign_key(&["user_id"], "users", &["id", "email"], None)
                .unwrap_err(),
            SchemaError::ForeignKeyColumnMismatch {
                table: "orders".to_string(),
                local: 1,
                foreign: 2,
            }
        );
        assert_eq!(orders.foreign_keys().len(), 1);
    }

    #[test]
    fn test_renamed_and_quoted() {
        let table = users().renamed("app.user");
        assert_eq!(table.name().qualified_name(), "app.user");
        assert_eq!(table.columns().len(), 3);
        assert_eq!(table.quoted_name(&SqlDialect::PostgreSQL), "app.\"user\"");
        assert_eq!(table.quoted_name(&SqlDialect::SqlServer), "app.[user]");
    }

    #[test]
    fn test_config_drives_generated_names_and_namespace() {
        let config = DbalConfig {
            default_namespace: Some("shop".to_string()),
            identifier_max_length: 12,
            ..DbalConfig::default()
        };

        let mut table = Table::with_config("orders", &config);
        table.add_column(Column::new("shop.total", "NUMERIC")).unwrap();
        assert_eq!(table.namespace(), "shop");
        assert!(table.has_column("total"));

        let index_name = table.add_index(&["total"], None).unwrap().name().name().to_string();
        assert_eq!(index_name.chars().count(), 12);
        assert_eq!(index_name, generate_identifier_name(&["orders", "total"], "idx", 12));

        assert_eq!(Table::with_config("shop.orders", &config).shortest_name(), "orders");
        assert_eq!(Table::with_config("audit.orders", &config).shortest_name(), "audit.orders");
    }

    #[test]
    fn test_column_names_relative_to_table_namespace() {
        let mut table = Table::new("app.accounts");
        table.add_column(Column::new("app.balance", "NUMERIC")).unwrap();
        assert!(table.has_column("balance"));
        assert!(table.has_column("app.balance"));
    }
}
