//! Built-in SQL dialects

use serde::{Deserialize, Serialize};

use super::keywords::{
    KeywordList, GENERIC_KEYWORDS, MYSQL_KEYWORDS, ORACLE_KEYWORDS, POSTGRESQL_KEYWORDS,
    SQLITE_KEYWORDS, SQLSERVER_KEYWORDS,
};
use super::{CaseFolding, IdentifierQuoting, KeywordCheck, Platform, UnquotedFolding};

/// SQL dialect enumeration for rendering database-specific names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[serde(alias = "postgres")]
    PostgreSQL,
    MySQL,
    SQLite,
    #[serde(alias = "mssql")]
    SqlServer,
    Oracle,
    Generic,
}

impl SqlDialect {
    /// Opening and closing identifier quote characters
    pub fn identifier_quotes(&self) -> (char, char) {
        match self {
            SqlDialect::MySQL => ('`', '`'),
            SqlDialect::SqlServer => ('[', ']'),
            SqlDialect::PostgreSQL | SqlDialect::SQLite | SqlDialect::Oracle | SqlDialect::Generic => {
                ('"', '"')
            }
        }
    }

    /// Folding applied to unquoted identifiers
    pub fn unquoted_folding(&self) -> UnquotedFolding {
        match self {
            SqlDialect::PostgreSQL => UnquotedFolding::Lower,
            SqlDialect::Oracle => UnquotedFolding::Upper,
            SqlDialect::MySQL | SqlDialect::SQLite | SqlDialect::SqlServer | SqlDialect::Generic => {
                UnquotedFolding::None
            }
        }
    }

    /// Reserved keywords of this dialect
    pub fn keywords(&self) -> &'static KeywordList {
        match self {
            SqlDialect::PostgreSQL => &*POSTGRESQL_KEYWORDS,
            SqlDialect::MySQL => &*MYSQL_KEYWORDS,
            SqlDialect::SQLite => &*SQLITE_KEYWORDS,
            SqlDialect::SqlServer => &*SQLSERVER_KEYWORDS,
            SqlDialect::Oracle => &*ORACLE_KEYWORDS,
            SqlDialect::Generic => &*GENERIC_KEYWORDS,
        }
    }
}

impl KeywordCheck for SqlDialect {
    fn is_keyword(&self, word: &str) -> bool {
        self.keywords().is_keyword(word)
    }
}

impl CaseFolding for SqlDialect {
    fn fold_case(&self, identifier: &str) -> String {
        self.unquoted_folding().apply(identifier)
    }
}

impl IdentifierQuoting for SqlDialect {
    fn quote_single_identifier(&self, identifier: &str) -> String {
        let (open, close) = self.identifier_quotes();
        let doubled: String = [close, close].iter().collect();
        format!("{}{}{}", open, identifier.replace(close, &doubled), close)
    }
}

impl Platform for SqlDialect {
    fn name(&self) -> &'static str {
        self.keywords().name()
    }

    fn max_identifier_length(&self) -> usize {
        match self {
            SqlDialect::PostgreSQL | SqlDialect::Generic => 63,
            SqlDialect::MySQL => 64,
            SqlDialect::SQLite | SqlDialect::SqlServer => 128,
            SqlDialect::Oracle => 30,
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlDialect::PostgreSQL => write!(f, "postgresql"),
            SqlDialect::MySQL => write!(f, "mysql"),
            SqlDialect::SQLite => write!(f, "sqlite"),
            SqlDialect::SqlServer => write!(f, "sqlserver"),
            SqlDialect::Oracle => write!(f, "oracle"),
            SqlDialect::Generic => write!(f, "generic"),
        }
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(SqlDialect::PostgreSQL),
            "mysql" => Ok(SqlDialect::MySQL),
            "sqlite" => Ok(SqlDialect::SQLite),
            "sqlserver" | "mssql" => Ok(SqlDialect::SqlServer),
            "oracle" => Ok(SqlDialect::Oracle),
            "generic" => Ok(SqlDialect::Generic),
            _ => Err(format!("Unsupported database platform: {}", s)),
        }
    }
}
