//! Query Builder - Core builder implementation

use crate::error::DbalResult;
use crate::naming::{AssetName, QuotingResolver};
use crate::platform::Platform;

use super::aggregator::BuilderAggregator;
use super::parameters::{ParameterKey, ParameterSet};
use super::statement::Statement;
use super::types::*;
use super::value::{DatabaseValue, ParameterType};

/// Query builder for SELECT statements composed from sub-queries
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) ctes: Vec<CommonTableExpression>,
    pub(crate) select_fields: Vec<String>,
    pub(crate) from_tables: Vec<TableReference>,
    pub(crate) where_conditions: Vec<WhereCondition>,
    pub(crate) order_by: Vec<(String, OrderDirection)>,
    pub(crate) group_by: Vec<String>,
    pub(crate) limit_count: Option<i64>,
    pub(crate) offset_value: Option<i64>,
    pub(crate) distinct: bool,
    pub(crate) parameters: ParameterSet,
    pub(crate) resolver: QuotingResolver,
}

impl QueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `resolver` when rendering table and CTE names
    pub fn quoting(mut self, resolver: QuotingResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Add a common table expression
    pub fn with(self, name: &str, query: QueryBuilder) -> Self {
        self.with_columns(name, &[], query)
    }

    /// Add a common table expression with an explicit column list
    pub fn with_columns(mut self, name: &str, columns: &[&str], query: QueryBuilder) -> Self {
        self.ctes.push(CommonTableExpression {
            name: AssetName::from_raw(name),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            query: Box::new(query),
        });
        self
    }

    /// Bind a named parameter (`:name` in the SQL)
    pub fn set_parameter<V: Into<DatabaseValue>>(mut self, name: &str, value: V) -> Self {
        self.parameters.set(ParameterKey::named(name), value);
        self
    }

    /// Bind a named parameter with an explicit type
    pub fn set_parameter_with_type<V: Into<DatabaseValue>>(
        mut self,
        name: &str,
        value: V,
        param_type: ParameterType,
    ) -> Self {
        self.parameters
            .set_with_type(ParameterKey::named(name), value, param_type);
        self
    }

    /// Bind a positional parameter (1-based, `?` in the SQL)
    pub fn set_positional_parameter<V: Into<DatabaseValue>>(mut self, position: usize, value: V) -> Self {
        self.parameters.set(ParameterKey::Position(position), value);
        self
    }

    /// Bind `value` under a synthetic name and return its placeholder
    ///
    /// The name comes from the session counter, so placeholders created by
    /// different sub-builders of the same statement never clash.
    pub fn create_named_parameter<V: Into<DatabaseValue>>(
        &mut self,
        aggregator: &mut BuilderAggregator,
        value: V,
    ) -> String {
        let name = aggregator.next_synthetic_name();
        self.parameters.set(ParameterKey::named(&name), value);
        format!(":{}", name)
    }

    /// Bind `value` at the next position and return its placeholder
    pub fn create_positional_parameter<V: Into<DatabaseValue>>(&mut self, value: V) -> String {
        self.parameters.push_positional(value);
        "?".to_string()
    }

    /// Parameters bound directly on this builder
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Register this builder's parameters and those of its CTEs
    ///
    /// CTEs come first, depth-first in declaration order, matching the order
    /// in which their SQL is rendered.
    pub fn register_parameters(&self, aggregator: &mut BuilderAggregator) {
        for cte in &self.ctes {
            cte.query.register_parameters(aggregator);
        }
        aggregator.register(self.parameters.clone());
    }

    /// Assemble the final statement
    ///
    /// Fails when two sub-queries bind the same named parameter. Either way
    /// the aggregator is marked for reset so it can serve the next build.
    pub fn build<P: Platform + ?Sized>(
        &self,
        platform: &P,
        aggregator: &mut BuilderAggregator,
    ) -> DbalResult<Statement> {
        self.register_parameters(aggregator);
        let sql = self.to_sql(platform);
        let merged = aggregator.merge();
        aggregator.mark_pending_reset();
        let merged = merged?;

        tracing::debug!("Built statement with {} parameters: {}", merged.parameters.len(), sql);
        Ok(Statement::new(sql, merged))
    }
}
