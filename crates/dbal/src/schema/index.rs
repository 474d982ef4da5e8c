//! Indexes

use crate::naming::AssetName;
use crate::platform::Platform;

/// Index over one or more columns
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    name: AssetName,
    columns: Vec<AssetName>,
    unique: bool,
    primary: bool,
}

impl Index {
    pub fn new(name: &str, columns: &[&str], unique: bool, primary: bool) -> Self {
        Self {
            name: AssetName::from_raw(name),
            columns: columns.iter().map(|c| AssetName::from_raw(c)).collect(),
            unique: unique || primary,
            primary,
        }
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    /// Column names as written
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(AssetName::name).collect()
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Whether the index covers exactly `columns`, in order
    ///
    /// Names compare by their shortest form, so quoting and case are ignored.
    pub fn spans_columns(&self, columns: &[&str]) -> bool {
        self.columns.len() == columns.len()
            && self.columns.iter().zip(columns).all(|(own, other)| {
                own.shortest_name("") == AssetName::from_raw(other).shortest_name("")
            })
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

    pub fn quoted_columns<P: Platform + ?Sized>(&self, platform: &P) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.quoted_name(platform))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SqlDialect;

    #[test]
    fn test_primary_implies_unique() {
        let index = Index::new("primary", &["id"], false, true);
        assert!(index.is_unique());
        assert!(index.is_primary());
    }

    #[test]
    fn test_spans_columns() {
        let index = Index::new("idx_user_role", &["user_id", "Role"], false, false);
        assert!(index.spans_columns(&["USER_ID", "role"]));
        assert!(!index.spans_columns(&["role", "user_id"]));
        assert!(!index.spans_columns(&["user_id"]));
    }

    #[test]
    fn test_spans_columns_ignores_quoting() {
        let index = Index::new("idx_email", &["email"], false, false);
        assert!(index.spans_columns(&["\"Email\""]));
        assert!(index.spans_columns(&["`EMAIL`"]));

        let quoted = Index::new("idx_order", &["\"Order\""], false, false);
        assert!(quoted.spans_columns(&["order"]));
        assert!(!quoted.spans_columns(&["orders"]));
    }

    #[test]
    fn test_quoted_columns() {
        let index = Index::new("idx_group", &["group", "name"], false, false);
        assert_eq!(
            index.quoted_columns(&SqlDialect::MySQL),
            vec!["`group`".to_string(), "name".to_string()]
        );
    }
}
