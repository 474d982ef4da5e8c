//! Builder aggregation
//!
//! A statement composed from several independently built sub-queries (for
//! example common table expressions) binds parameters in each of them. The
//! [`BuilderAggregator`] collects those parameter sets for one build session,
//! merges them into a single set and hands out synthetic placeholder names
//! from a counter shared by every sub-builder.
//!
//! One aggregator belongs to one build. The top-level builder creates it and
//! passes it by `&mut` to each nested builder, so two concurrent builds never
//! share state.

use crate::error::QueryError;

use super::parameters::{ParamTypeMap, ParameterKey, ParameterSet};

/// Prefix of names generated by [`BuilderAggregator::next_synthetic_name`]
pub const SYNTHETIC_PARAMETER_PREFIX: &str = "dcValue";

/// Parameters and types of a merged statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedParameters {
    pub parameters: ParameterSet,
    pub types: ParamTypeMap,
}

impl MergedParameters {
    pub fn into_parts(self) -> (ParameterSet, ParamTypeMap) {
        (self.parameters, self.types)
    }
}

/// Per-session collector of sub-query parameter sets
#[derive(Debug, Default)]
pub struct BuilderAggregator {
    registered: Vec<ParameterSet>,
    bound_counter: usize,
    pending_reset: bool,
}

impl BuilderAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current session on the next registration
    ///
    /// Called once the assembled statement has been handed off, so a later
    /// unrelated build starts clean.
    pub fn mark_pending_reset(&mut self) {
        self.pending_reset = true;
    }

    pub fn is_pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Add a sub-query's parameters to the session
    pub fn register(&mut self, parameters: ParameterSet) {
        self.begin_session();
        tracing::debug!(
            "Registering parameter set #{} with {} parameters",
            self.registered.len() + 1,
            parameters.len()
        );
        self.registered.push(parameters);
    }

    /// Number of parameter sets registered in this session
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Merge every registered set in registration order
    ///
    /// Named keys must be unique across all sets; every collision is reported.
    /// Positional keys are appended after the positions already merged, so
    /// position 0 is rejected rather than landing on an earlier value.
    pub fn merge(&self) -> Result<MergedParameters, QueryError> {
        let mut merged = MergedParameters::default();

        for set in &self.registered {
            let collisions: Vec<String> = set
                .named_keys()
                .filter(|name| merged.parameters.contains_key(&ParameterKey::named(name)))
                .map(str::to_string)
                .collect();

            if !collisions.is_empty() {
                let err = QueryError::duplicate_parameters(collisions);
                tracing::debug!("Parameter merge failed: {}", err);
                return Err(err);
            }

            let offset = merged.parameters.next_position() - 1;
            for parameter in set {
                let key = match &parameter.key {
                    ParameterKey::Position(0) => {
                        let err = QueryError::InvalidParameter(
                            "positional parameters are 1-based, got position 0".to_string(),
                        );
                        tracing::debug!("Parameter merge failed: {}", err);
                        return Err(err);
                    }
                    ParameterKey::Position(position) => ParameterKey::Position(offset + position),
                    named => named.clone(),
                };
                merged.types.insert(key.clone(), parameter.param_type.clone());
                merged
                    .parameters
                    .set_with_type(key, parameter.value.clone(), parameter.param_type.clone());
            }
        }

        tracing::debug!(
            "Merged {} parameter sets into {} parameters",
            self.registered.len(),
            merged.parameters.len()
        );
        Ok(merged)
    }

    /// Values auto-bound so far in this session
    pub fn bound_counter(&self) -> usize {
        self.bound_counter
    }

    /// Advance the shared counter and return its new value
    pub fn increment_bound_counter(&mut self) -> usize {
        self.begin_session();
        self.bound_counter += 1;
        self.bound_counter
    }

    /// Apply a pending reset before the first use of a new session
    fn begin_session(&mut self) {
        if !self.pending_reset {
            return;
        }
        tracing::debug!(
            "Resetting builder aggregator ({} registered sets, counter at {})",
            self.registered.len(),
            self.bound_counter
        );
        self.registered.clear();
        self.bound_counter = 0;
        self.pending_reset = false;
    }

    /// Next unique synthetic parameter name (`dcValue1`, `dcValue2`, ...)
    pub fn next_synthetic_name(&mut self) -> String {
        format!("{}{}", SYNTHETIC_PARAMETER_PREFIX, self.increment_bound_counter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::value::{DatabaseValue, ParameterType};

    fn named(pairs: &[(&str, i32)]) -> ParameterSet {
        let mut set = ParameterSet::new();
        for (name, value) in pairs {
            set.set(*name, *value);
        }
        set
    }

    #[test]
    fn test_merge_disjoint_named_sets() {
        let mut aggregator = BuilderAggregator::new();
        aggregator.register(named(&[("a", 1), ("b", 2)]));
        aggregator.register(named(&[("c", 3)]));

        let merged = aggregator.merge().unwrap();
        assert_eq!(merged.parameters.len(), 3);
        assert_eq!(merged.types.len(), 3);
        assert_eq!(merged.parameters.named("c"), Some(&DatabaseValue::Int32(3)));
    }

    #[test]
    fn test_merge_reports_every_collision_sorted() {
        let mut aggregator = BuilderAggregator::new();
        aggregator.register(named(&[("status", 1), ("id", 2), ("limit", 3)]));
        aggregator.register(named(&[("status", 4), ("id", 5), ("offset", 6)]));

        let err = aggregator.merge().unwrap_err();
        assert_eq!(
            err,
            QueryError::DuplicateParameter {
                names: vec!["id".to_string(), "status".to_string()]
            }
        );
    }

    #[test]
    fn test_merge_does_not_mutate_registered_sets() {
        let mut aggregator = BuilderAggregator::new();
        aggregator.register(named(&[("a", 1)]));
        let _ = aggregator.merge().unwrap();
        let again = aggregator.merge().unwrap();
        assert_eq!(again.parameters.len(), 1);
        assert_eq!(aggregator.registered_count(), 1);
    }

    #[test]
    fn test_positional_keys_are_reindexed_not_checked() {
        let mut first = ParameterSet::new();
        first.push_positional("x");
        first.push_positional("y");
        let mut second = ParameterSet::new();
        second.push_positional(true);
        second.set("flag", 1i32);

        let mut aggregator = BuilderAggregator::new();
        aggregator.register(first);
        aggregator.register(second);

        let merged = aggregator.merge().unwrap();
        assert_eq!(merged.parameters.len(), 4);
        assert_eq!(merged.parameters.positional(1), Some(&DatabaseValue::from("x")));
        assert_eq!(merged.parameters.positional(3), Some(&DatabaseValue::Bool(true)));
        assert_eq!(
            merged.types.get(&ParameterKey::Position(3)),
            Some(&ParameterType::Boolean)
        );
    }

    #[test]
    fn test_position_zero_is_rejected_instead_of_overwriting() {
        let mut first = ParameterSet::new();
        first.push_positional(1i32);
        first.push_positional(2i32);
        let mut second = ParameterSet::new();
        second.set(0usize, 99i32);

        let mut aggregator = BuilderAggregator::new();
        aggregator.register(first);
        aggregator.register(second);

        assert!(matches!(
            aggregator.merge(),
            Err(QueryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pending_reset_discards_previous_session() {
        let mut aggregator = BuilderAggregator::new();
        aggregator.register(named(&[("old", 1)]));
        aggregator.increment_bound_counter();
        aggregator.mark_pending_reset();
        assert!(aggregator.is_pending_reset());

        aggregator.register(named(&[("new", 2)]));
        assert!(!aggregator.is_pending_reset());
        assert_eq!(aggregator.bound_counter(), 0);

        let merged = aggregator.merge().unwrap();
        assert_eq!(merged.parameters.len(), 1);
        assert!(merged.parameters.named("old").is_none());
        assert!(merged.parameters.named("new").is_some());
    }

    #[test]
    fn test_counter_survives_registrations_within_session() {
        let mut aggregator = BuilderAggregator::new();
        assert_eq!(aggregator.bound_counter(), 0);
        assert_eq!(aggregator.increment_bound_counter(), 1);
        aggregator.register(ParameterSet::new());
        assert_eq!(aggregator.increment_bound_counter(), 2);
        aggregator.register(ParameterSet::new());
        assert_eq!(aggregator.bound_counter(), 2);
        assert_eq!(aggregator.next_synthetic_name(), "dcValue3");
    }

    #[test]
    fn test_counter_use_starts_new_session() {
        let mut aggregator = BuilderAggregator::new();
        aggregator.register(named(&[("old", 1)]));
        aggregator.increment_bound_counter();
        aggregator.increment_bound_counter();
        aggregator.mark_pending_reset();

        assert_eq!(aggregator.next_synthetic_name(), "dcValue1");
        assert_eq!(aggregator.registered_count(), 0);

        aggregator.register(named(&[("dcValue1", 7)]));
        assert_eq!(aggregator.bound_counter(), 1);
        assert_eq!(aggregator.registered_count(), 1);
    }

    #[test]
    fn test_merge_of_empty_session() {
        let aggregator = BuilderAggregator::new();
        let (parameters, types) = aggregator.merge().unwrap().into_parts();
        assert!(parameters.is_empty());
        assert!(types.is_empty());
    }
}
