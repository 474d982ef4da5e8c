//! Query Builder SELECT operations

use crate::naming::AssetName;

use super::builder::QueryBuilder;
use super::types::TableReference;

impl QueryBuilder {
    /// Add SELECT fields to the query
    pub fn select(mut self, fields: &str) -> Self {
        if fields == "*" {
            self.select_fields.push("*".to_string());
        } else {
            self.select_fields.extend(
                fields
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty()),
            );
        }
        self
    }

    /// Add SELECT DISTINCT to the query
    pub fn select_distinct(mut self, fields: &str) -> Self {
        self.distinct = true;
        self.select(fields)
    }

    /// Add aggregate COUNT to SELECT
    pub fn select_count(mut self, column: &str, alias: Option<&str>) -> Self {
        let select_expr = match alias {
            Some(alias) => format!("COUNT({}) AS {}", column, alias),
            None => format!("COUNT({})", column),
        };
        self.select_fields.push(select_expr);
        self
    }

    /// Set the FROM table
    pub fn from(mut self, table: &str) -> Self {
        self.from_tables = vec![TableReference {
            table: AssetName::from_raw(table),
            alias: None,
        }];
        self
    }

    /// Add a FROM table with an alias
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.from_tables.push(TableReference {
            table: AssetName::from_raw(table),
            alias: Some(alias.to_string()),
        });
        self
    }
}
