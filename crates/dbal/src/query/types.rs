//! Query Builder Types - Core types and enums for query building

use std::fmt;

use crate::naming::AssetName;

use super::builder::QueryBuilder;

/// Query operator types
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    IsNull,
    IsNotNull,
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOperator::Equal => write!(f, "="),
            QueryOperator::NotEqual => write!(f, "<>"),
            QueryOperator::GreaterThan => write!(f, ">"),
            QueryOperator::GreaterThanOrEqual => write!(f, ">="),
            QueryOperator::LessThan => write!(f, "<"),
            QueryOperator::LessThanOrEqual => write!(f, "<="),
            QueryOperator::Like => write!(f, "LIKE"),
            QueryOperator::IsNull => write!(f, "IS NULL"),
            QueryOperator::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// Where clause condition
///
/// `placeholder` is the SQL text on the right-hand side, e.g. `:status`,
/// `?` or a column reference. Raw conditions carry their SQL in `raw`.
#[derive(Debug, Clone)]
pub struct WhereCondition {
    pub column: String,
    pub operator: QueryOperator,
    pub placeholder: Option<String>,
    pub raw: Option<String>,
}

/// Order by direction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Table reference in a FROM clause
#[derive(Debug, Clone)]
pub struct TableReference {
    pub table: AssetName,
    pub alias: Option<String>,
}

/// Common table expression attached with [`QueryBuilder::with`]
#[derive(Debug, Clone)]
pub struct CommonTableExpression {
    pub name: AssetName,
    pub columns: Vec<String>,
    pub query: Box<QueryBuilder>,
}
