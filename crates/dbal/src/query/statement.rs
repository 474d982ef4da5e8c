//! Assembled statements

use super::aggregator::MergedParameters;
use super::parameters::{ParamTypeMap, ParameterSet};

/// Final SQL with the merged parameters of every sub-query
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    parameters: ParameterSet,
    types: ParamTypeMap,
}

impl Statement {
    pub(crate) fn new(sql: String, merged: MergedParameters) -> Self {
        let (parameters, types) = merged.into_parts();
        Self {
            sql,
            parameters,
            types,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn types(&self) -> &ParamTypeMap {
        &self.types
    }

    pub fn into_parts(self) -> (String, ParameterSet, ParamTypeMap) {
        (self.sql, self.parameters, self.types)
    }
}
