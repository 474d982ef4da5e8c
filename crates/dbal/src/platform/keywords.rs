//! Reserved keyword lists per SQL dialect

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Case-insensitive set of reserved words
#[derive(Debug, Clone)]
pub struct KeywordList {
    name: &'static str,
    keywords: HashSet<String>,
}

impl KeywordList {
    /// Build a keyword list from one or more word tables
    pub fn new(name: &'static str, tables: &[&[&str]]) -> Self {
        let keywords = tables
            .iter()
            .flat_map(|table| table.iter())
            .map(|word| word.to_uppercase())
            .collect();
        Self { name, keywords }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether `word` is reserved, ignoring case
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Words reserved by SQL:92 that every supported dialect also reserves
const SQL_CORE: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CHECK",
    "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END",
    "EXCEPT", "EXISTS", "FALSE", "FOR", "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING",
    "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "NATURAL",
    "NOT", "NULL", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT",
    "SET", "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES",
    "WHEN", "WHERE", "WITH",
];

const POSTGRESQL_EXTRA: &[&str] = &[
    "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "AUTHORIZATION", "BINARY", "BOTH",
    "COLLATE", "COLLATION", "CONCURRENTLY", "CURRENT_CATALOG", "CURRENT_ROLE",
    "CURRENT_SCHEMA", "CURRENT_USER", "DEFERRABLE", "DO", "FETCH", "FREEZE", "ILIKE",
    "INITIALLY", "ISNULL", "LATERAL", "LEADING", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP",
    "NOTNULL", "OFFSET", "ONLY", "OVERLAPS", "PLACING", "RETURNING", "SESSION_USER",
    "SIMILAR", "SOME", "SYMMETRIC", "TABLESAMPLE", "TRAILING", "USER", "VARIADIC", "VERBOSE",
    "WINDOW",
];

const MYSQL_EXTRA: &[&str] = &[
    "ACCESSIBLE", "ADD", "BEFORE", "BIGINT", "BLOB", "BOTH", "CALL", "CASCADE", "CHANGE",
    "CHAR", "CHARACTER", "COLLATE", "CONDITION", "CONTINUE", "CONVERT", "CURSOR", "DATABASE",
    "DATABASES", "DECIMAL", "DECLARE", "DELAYED", "DESCRIBE", "DIV", "DOUBLE", "DUAL", "EACH",
    "ELSEIF", "ENCLOSED", "ESCAPED", "EXIT", "EXPLAIN", "FLOAT", "FORCE", "FULLTEXT", "IF",
    "IGNORE", "INDEX", "INFILE", "INT", "INTEGER", "INTERVAL", "KEY", "KEYS", "KILL",
    "LEADING", "LEAVE", "LIMIT", "LINES", "LOAD", "LOCK", "LONG", "LOOP", "MATCH", "MOD",
    "OPTIMIZE", "OPTION", "OUTFILE", "PROCEDURE", "PURGE", "RANGE", "READ", "REGEXP",
    "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESTRICT", "RETURN", "REVOKE",
    "RLIKE", "SCHEMA", "SCHEMAS", "SEPARATOR", "SHOW", "SPATIAL", "SQL", "STARTING",
    "TRAILING", "TRIGGER", "UNLOCK", "UNSIGNED", "USAGE", "USE", "VARCHAR", "WHILE", "WRITE",
    "XOR", "ZEROFILL",
];

const SQLITE_EXTRA: &[&str] = &[
    "ABORT", "ACTION", "ADD", "AFTER", "ATTACH", "AUTOINCREMENT", "BEFORE", "BEGIN",
    "CASCADE", "COLLATE", "COMMIT", "CONFLICT", "DATABASE", "DEFERRABLE", "DEFERRED",
    "DETACH", "EACH", "ESCAPE", "EXCLUSIVE", "EXPLAIN", "FAIL", "GLOB", "IF", "IGNORE",
    "IMMEDIATE", "INDEX", "INDEXED", "INITIALLY", "INSTEAD", "ISNULL", "KEY", "LIMIT",
    "MATCH", "NO", "NOTNULL", "OF", "OFFSET", "PLAN", "PRAGMA", "QUERY", "RAISE", "RECURSIVE",
    "REGEXP", "REINDEX", "RELEASE", "RENAME", "REPLACE", "RESTRICT", "ROLLBACK", "ROW",
    "SAVEPOINT", "TEMP", "TEMPORARY", "TRANSACTION", "TRIGGER", "VACUUM", "VIEW", "VIRTUAL",
];

const SQLSERVER_EXTRA: &[&str] = &[
    "ADD", "AUTHORIZATION", "BACKUP", "BEGIN", "BREAK", "BROWSE", "BULK", "CASCADE",
    "CHECKPOINT", "CLOSE", "CLUSTERED", "COALESCE", "COLLATE", "COMMIT", "COMPUTE",
    "CONTAINS", "CONTAINSTABLE", "CONTINUE", "CONVERT", "CURRENT", "CURRENT_USER", "CURSOR",
    "DATABASE", "DBCC", "DEALLOCATE", "DECLARE", "DENY", "DISK", "DISTRIBUTED", "DOUBLE",
    "DUMP", "ERRLVL", "ESCAPE", "EXEC", "EXECUTE", "EXIT", "EXTERNAL", "FETCH", "FILE",
    "FILLFACTOR", "FREETEXT", "FUNCTION", "GOTO", "HOLDLOCK", "IDENTITY", "IDENTITY_INSERT",
    "IDENTITYCOL", "IF", "INDEX", "KEY", "KILL", "LINENO", "LOAD", "MERGE", "NOCHECK",
    "NONCLUSTERED", "NULLIF", "OF", "OFF", "OFFSETS", "OPEN", "OPENQUERY", "OPENROWSET",
    "OPTION", "OVER", "PERCENT", "PIVOT", "PLAN", "PRINT", "PROC", "PROCEDURE", "PUBLIC",
    "RAISERROR", "READ", "RECONFIGURE", "REPLICATION", "RESTORE", "RESTRICT", "RETURN",
    "REVERT", "REVOKE", "ROLLBACK", "ROWCOUNT", "ROWGUIDCOL", "RULE", "SAVE", "SCHEMA",
    "SESSION_USER", "SETUSER", "SHUTDOWN", "SOME", "STATISTICS", "SYSTEM_USER", "TEXTSIZE",
    "TOP", "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE", "TSEQUAL", "UNPIVOT", "USE", "USER",
    "VIEW", "WAITFOR", "WHILE", "WRITETEXT",
];

const ORACLE_EXTRA: &[&str] = &[
    "ACCESS", "ADD", "AUDIT", "CHAR", "CLUSTER", "COMMENT", "COMPRESS", "CONNECT", "CURRENT",
    "DATE", "DECIMAL", "EXCLUSIVE", "FILE", "FLOAT", "IDENTIFIED", "IMMEDIATE", "INCREMENT",
    "INDEX", "INITIAL", "INTEGER", "LEVEL", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL",
    "MODE", "MODIFY", "NOAUDIT", "NOCOMPRESS", "NOWAIT", "NUMBER", "OF", "OFFLINE", "ONLINE",
    "OPTION", "PCTFREE", "PRIOR", "PUBLIC", "RAW", "RENAME", "RESOURCE", "REVOKE", "ROW",
    "ROWID", "ROWNUM", "ROWS", "SESSION", "SHARE", "SIZE", "SMALLINT", "START", "SUCCESSFUL",
    "SYNONYM", "SYSDATE", "TRIGGER", "UID", "USER", "VALIDATE", "VARCHAR", "VARCHAR2", "VIEW",
    "WHENEVER",
];

pub(crate) static POSTGRESQL_KEYWORDS: Lazy<KeywordList> =
    Lazy::new(|| KeywordList::new("PostgreSQL", &[SQL_CORE, POSTGRESQL_EXTRA]));

pub(crate) static MYSQL_KEYWORDS: Lazy<KeywordList> =
    Lazy::new(|| KeywordList::new("MySQL", &[SQL_CORE, MYSQL_EXTRA]));

pub(crate) static SQLITE_KEYWORDS: Lazy<KeywordList> =
    Lazy::new(|| KeywordList::new("SQLite", &[SQL_CORE, SQLITE_EXTRA]));

pub(crate) static SQLSERVER_KEYWORDS: Lazy<KeywordList> =
    Lazy::new(|| KeywordList::new("SQLServer", &[SQL_CORE, SQLSERVER_EXTRA]));

pub(crate) static ORACLE_KEYWORDS: Lazy<KeywordList> =
    Lazy::new(|| KeywordList::new("Oracle", &[SQL_CORE, ORACLE_EXTRA]));

/// Every keyword known to sqlparser, reserved or not
pub(crate) static GENERIC_KEYWORDS: Lazy<KeywordList> = Lazy::new(|| {
    KeywordList::new("Generic", &[SQL_CORE, sqlparser::keywords::ALL_KEYWORDS])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_ignores_case() {
        assert!(POSTGRESQL_KEYWORDS.is_keyword("select"));
        assert!(POSTGRESQL_KEYWORDS.is_keyword("Order"));
        assert!(POSTGRESQL_KEYWORDS.is_keyword("LIMIT"));
        assert!(!POSTGRESQL_KEYWORDS.is_keyword("customer_accounts"));
    }

    #[test]
    fn test_dialects_reserve_different_words() {
        assert!(SQLSERVER_KEYWORDS.is_keyword("top"));
        assert!(!POSTGRESQL_KEYWORDS.is_keyword("top"));
        assert!(ORACLE_KEYWORDS.is_keyword("rownum"));
        assert!(!MYSQL_KEYWORDS.is_keyword("rownum"));
        assert!(SQLITE_KEYWORDS.is_keyword("pragma"));
    }

    #[test]
    fn test_generic_list_includes_sqlparser_keywords() {
        assert!(GENERIC_KEYWORDS.is_keyword("select"));
        assert!(GENERIC_KEYWORDS.is_keyword("table"));
        assert!(GENERIC_KEYWORDS.len() > POSTGRESQL_KEYWORDS.len());
        assert_eq!(GENERIC_KEYWORDS.name(), "Generic");
    }
}
