//! Query Builder Module - composition of statements from sub-queries

pub mod aggregator;
pub mod builder;
pub mod ordering;
pub mod parameters;
pub mod select;
pub mod sql_generation;
pub mod statement;
pub mod types;
pub mod value;
pub mod where_clause;

pub use aggregator::{BuilderAggregator, MergedParameters, SYNTHETIC_PARAMETER_PREFIX};
pub use builder::QueryBuilder;
pub use parameters::{ParamTypeMap, Parameter, ParameterKey, ParameterSet};
pub use statement::Statement;
pub use types::{OrderDirection, QueryOperator};
pub use value::{DatabaseValue, ParameterType};
