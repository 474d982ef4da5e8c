//! Sequences

use crate::naming::AssetName;
use crate::platform::Platform;

use super::table::Table;

/// Database sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    name: AssetName,
    allocation_size: i64,
    initial_value: i64,
}

impl Sequence {
    pub fn new(name: &str) -> Self {
        Self {
            name: AssetName::from_raw(name),
            allocation_size: 1,
            initial_value: 1,
        }
    }

    pub fn allocation_size(mut self, size: i64) -> Self {
        self.allocation_size = size;
        self
    }

    pub fn initial_value(mut self, value: i64) -> Self {
        self.initial_value = value;
        self
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    pub fn allocation(&self) -> i64 {
        self.allocation_size
    }

    pub fn initial(&self) -> i64 {
        self.initial_value
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

    /// Whether this is the implicit sequence behind `table`'s autoincrement
    /// primary key, named `<table>_<column>_seq`
    pub fn is_autoincrement_for(&self, table: &Table) -> bool {
        let Some(primary) = table.primary_key() else {
            return false;
        };
        let columns = primary.columns();
        if columns.len() != 1 {
            return false;
        }
        let Ok(column) = table.column(columns[0]) else {
            return false;
        };
        if !column.is_autoincrement() {
            return false;
        }

        let namespace = table.namespace();
        let expected = format!(
            "{}_{}_seq",
            table.name().shortest_name(namespace),
            column.name().shortest_name(namespace)
        );
        self.name.shortest_name(namespace) == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    fn users_table(autoincrement: bool) -> Table {
        let mut table = Table::new("users");
        table
            .add_column(Column::new("id", "INTEGER").autoincrement(autoincrement))
            .unwrap();
        table.set_primary_key(&["id"]).unwrap();
        table
    }

    #[test]
    fn test_defaults() {
        let sequence = Sequence::new("users_id_seq");
        assert_eq!(sequence.allocation(), 1);
        assert_eq!(sequence.initial(), 1);
    }

    #[test]
    fn test_renamed_keeps_settings() {
        let sequence = Sequence::new("users_id_seq").allocation_size(10).initial_value(100);
        let renamed = sequence.renamed("accounts_id_seq");
        assert_eq!(renamed.name().name(), "accounts_id_seq");
        assert_eq!(renamed.allocation(), 10);
        assert_eq!(renamed.initial(), 100);
        assert!(!renamed.is_autoincrement_for(&users_table(true)));
    }

    #[test]
    fn test_autoincrement_sequence_detection() {
        let table = users_table(true);
        assert!(Sequence::new("users_id_seq").is_autoincrement_for(&table));
        assert!(Sequence::new("USERS_ID_SEQ").is_autoincrement_for(&table));
        assert!(!Sequence::new("users_seq").is_autoincrement_for(&table));
    }

    #[test]
    fn test_not_autoincrement_without_flag_or_primary_key() {
        assert!(!Sequence::new("users_id_seq").is_autoincrement_for(&users_table(false)));
        assert!(!Sequence::new("users_id_seq").is_autoincrement_for(&Table::new("users")));
    }
}
