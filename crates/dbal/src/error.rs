//! Error types for the database abstraction layer
//!
//! Name parsing problems are recoverable and handled close to where they
//! occur. Only conditions that would produce an incorrect statement, such as
//! two sub-queries binding the same named parameter, reach the caller.

use thiserror::Error;

/// Result type alias for DBAL operations
pub type DbalResult<T> = Result<T, DbalError>;

/// Top-level error type for the DBAL
#[derive(Error, Debug)]
pub enum DbalError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierParseError),
}

/// Malformed raw object name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierParseError {
    #[error("unterminated quoted identifier starting at position {position} (expected closing '{expected}')")]
    UnterminatedQuote { position: usize, expected: char },

    #[error("empty identifier at position {position}")]
    EmptySegment { position: usize },

    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("expected at most 2 identifiers, got {count}")]
    TooManySegments { count: usize },
}

/// Error types for query building operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Two sub-queries bind the same named parameter
    #[error("Duplicate named parameters across sub-queries: {}", names.join(", "))]
    DuplicateParameter { names: Vec<String> },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl QueryError {
    /// Build a duplicate parameter error with the colliding names sorted
    pub fn duplicate_parameters<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names.dedup();
        QueryError::DuplicateParameter { names }
    }
}

/// Error types for schema object operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Column '{column}' already exists on table '{table}'")]
    ColumnAlreadyExists { table: String, column: String },

    #[error("Column '{column}' does not exist on table '{table}'")]
    ColumnNotFound { table: String, column: String },

    #[error("Index '{index}' already exists on table '{table}'")]
    IndexAlreadyExists { table: String, index: String },

    #[error("Foreign key on table '{table}' maps {local} local columns to {foreign} foreign columns")]
    ForeignKeyColumnMismatch {
        table: String,
        local: usize,
        foreign: usize,
    },

    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value '{value}' for {field}, expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_parameter_message_is_sorted() {
        let err = QueryError::duplicate_parameters(vec![
            "status".to_string(),
            "id".to_string(),
            "status".to_string(),
        ]);
        assert_eq!(
            err,
            QueryError::DuplicateParameter {
                names: vec!["id".to_string(), "status".to_string()]
            }
        );
        assert_eq!(
            err.to_string(),
            "Duplicate named parameters across sub-queries: id, status"
        );
    }

    #[test]
    fn test_conversion_into_dbal_error() {
        let err: DbalError = SchemaError::InvalidName("".to_string()).into();
        assert!(matches!(err, DbalError::Schema(_)));
        assert_eq!(err.to_string(), "Schema error: Invalid name: ");
    }
}
