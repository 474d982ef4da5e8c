//! Query parameter sets
//!
//! An ordered collection of bound values keyed either by a 1-based position
//! or by a case-sensitive name. Keys are unique within one set; binding an
//! existing key replaces its value in place.

use std::fmt;

use super::value::{DatabaseValue, ParameterType};

/// Key of a bound parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKey {
    /// 1-based placeholder position (`?`)
    Position(usize),
    /// Named placeholder (`:name`), stored without the leading colon
    Named(String),
}

impl ParameterKey {
    pub fn named(name: &str) -> Self {
        ParameterKey::Named(name.strip_prefix(':').unwrap_or(name).to_string())
    }

    pub fn is_named(&self) -> bool {
        matches!(self, ParameterKey::Named(_))
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            ParameterKey::Named(name) => Some(name),
            ParameterKey::Position(_) => None,
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKey::Position(position) => write!(f, "{}", position),
            ParameterKey::Named(name) => write!(f, ":{}", name),
        }
    }
}

impl From<usize> for ParameterKey {
    fn from(position: usize) -> Self {
        ParameterKey::Position(position)
    }
}

impl From<&str> for ParameterKey {
    fn from(name: &str) -> Self {
        ParameterKey::named(name)
    }
}

/// A single bound parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub key: ParameterKey,
    pub value: DatabaseValue,
    pub param_type: ParameterType,
}

/// Ordered set of bound parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` under `key`, inferring its type
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<ParameterKey>,
        V: Into<DatabaseValue>,
    {
        let value = value.into();
        let param_type = value.parameter_type();
        self.set_with_type(key, value, param_type);
    }

    /// Bind `value` under `key` with an explicitly declared type
    pub fn set_with_type<K, V>(&mut self, key: K, value: V, param_type: ParameterType)
    where
        K: Into<ParameterKey>,
        V: Into<DatabaseValue>,
    {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.value = value;
                entry.param_type = param_type;
            }
            None => self.entries.push(Parameter {
                key,
                value,
                param_type,
            }),
        }
    }

    /// Bind `value` at the next free position and return that position
    pub fn push_positional<V: Into<DatabaseValue>>(&mut self, value: V) -> usize {
        let position = self.next_position();
        self.set(ParameterKey::Position(position), value);
        position
    }

    /// Position following the highest positional key in the set
    pub fn next_position(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| match entry.key {
                ParameterKey::Position(position) => Some(position),
                ParameterKey::Named(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn get(&self, key: &ParameterKey) -> Option<&Parameter> {
        self.entries.iter().find(|entry| &entry.key == key)
    }

    /// Value bound under the named key `name`
    pub fn named(&self, name: &str) -> Option<&DatabaseValue> {
        self.get(&ParameterKey::named(name)).map(|entry| &entry.value)
    }

    /// Value bound at `position`
    pub fn positional(&self, position: usize) -> Option<&DatabaseValue> {
        self.get(&ParameterKey::Position(position))
            .map(|entry| &entry.value)
    }

    pub fn contains_key(&self, key: &ParameterKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Names of all named keys, in binding order
    pub fn named_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| entry.key.as_name())
    }

    /// Declared types of every bound parameter
    pub fn types(&self) -> ParamTypeMap {
        ParamTypeMap {
            entries: self
                .entries
                .iter()
                .map(|entry| (entry.key.clone(), entry.param_type.clone()))
                .collect(),
        }
    }
}

impl IntoIterator for ParameterSet {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Ordered mapping from parameter key to declared type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamTypeMap {
    entries: Vec<(ParameterKey, ParameterType)>,
}

impl ParamTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ParameterKey, param_type: ParameterType) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = param_type,
            None => self.entries.push((key, param_type)),
        }
    }

    pub fn get(&self, key: &ParameterKey) -> Option<&ParameterType> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, param_type)| param_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &ParameterType)> {
        self.entries.iter().map(|(key, param_type)| (key, param_type))
    }
}
