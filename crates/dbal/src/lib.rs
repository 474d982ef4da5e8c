//! # elif-dbal: Portable identifiers and query composition for elif.rs
//!
//! Database abstraction pieces that sit below the ORM:
//! parsing and quoting of object names across SQL dialects, generated
//! constraint names, schema objects that carry those names, and a query
//! builder whose sub-queries contribute parameters to one merged statement.

pub mod config;
pub mod error;
pub mod naming;
pub mod platform;
pub mod query;
pub mod schema;

// Re-export the commonly used types
pub use config::DbalConfig;
pub use error::{ConfigError, DbalError, DbalResult, IdentifierParseError, QueryError, SchemaError};
pub use naming::{
    generate_identifier_name, parse_identifiers, AssetName, Identifier, NameDivergence,
    QuotingResolver, RenderedName, DEFAULT_MAX_IDENTIFIER_LENGTH,
};
pub use platform::{CaseFolding, IdentifierQuoting, KeywordCheck, KeywordList, Platform, SqlDialect};
pub use query::{
    BuilderAggregator, DatabaseValue, MergedParameters, ParamTypeMap, Parameter, ParameterKey,
    ParameterSet, ParameterType, QueryBuilder, Statement,
};
pub use schema::{Column, ForeignKeyConstraint, Index, Sequence, Table};
