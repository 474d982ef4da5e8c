//! Query Builder WHERE clause operations
//!
//! Conditions reference placeholders (`:name`, `?`) rather than values; the
//! values live in the builder's parameter set.

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    fn push_condition(mut self, column: &str, operator: QueryOperator, placeholder: Option<&str>) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator,
            placeholder: placeholder.map(str::to_string),
            raw: None,
        });
        self
    }

    /// Add WHERE condition with equality
    pub fn where_eq(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::Equal, Some(placeholder))
    }

    /// Add WHERE condition with not equal
    pub fn where_ne(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::NotEqual, Some(placeholder))
    }

    /// Add WHERE condition with greater than
    pub fn where_gt(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::GreaterThan, Some(placeholder))
    }

    /// Add WHERE condition with greater than or equal
    pub fn where_gte(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::GreaterThanOrEqual, Some(placeholder))
    }

    /// Add WHERE condition with less than
    pub fn where_lt(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::LessThan, Some(placeholder))
    }

    /// Add WHERE condition with less than or equal
    pub fn where_lte(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::LessThanOrEqual, Some(placeholder))
    }

    /// Add WHERE condition with LIKE
    pub fn where_like(self, column: &str, placeholder: &str) -> Self {
        self.push_condition(column, QueryOperator::Like, Some(placeholder))
    }

    /// Add WHERE condition with IS NULL
    pub fn where_null(self, column: &str) -> Self {
        self.push_condition(column, QueryOperator::IsNull, None)
    }

    /// Add WHERE condition with IS NOT NULL
    pub fn where_not_null(self, column: &str) -> Self {
        self.push_condition(column, QueryOperator::IsNotNull, None)
    }

    /// Add raw WHERE condition for complex cases
    pub fn where_raw(mut self, raw_condition: &str) -> Self {
        self.where_conditions.push(WhereCondition {
            column: String::new(),
            operator: QueryOperator::Equal,
            placeholder: None,
            raw: Some(raw_condition.to_string()),
        });
        self
    }
}
