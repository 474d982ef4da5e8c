//! Asset names
//!
//! Every schema object (table, column, index, sequence, constraint) names
//! itself with an [`AssetName`]. The raw input is interpreted twice: once by
//! the strict identifier parser and once by the legacy splitter. The legacy
//! fields drive rendering today; the strict segments are used to detect names
//! whose meaning will change once the strict rules become the default.

use std::fmt;

use crate::error::IdentifierParseError;
use crate::platform::Platform;

use super::identifier::{parse_identifiers, Identifier};
use super::legacy;
use super::quoting::QuotingResolver;

/// Resolved name of a schema object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    raw_input: String,
    namespace: Option<Identifier>,
    name: Identifier,
    legacy_namespace: Option<String>,
    legacy_name: String,
    quoted: bool,
    strict_mode: bool,
    parse_error: Option<IdentifierParseError>,
}

impl AssetName {
    /// Interpret a raw object name
    ///
    /// Never fails: input the strict parser rejects falls back to the legacy
    /// interpretation with strict mode disabled.
    pub fn from_raw(raw: &str) -> Self {
        let legacy = legacy::interpret(raw);

        let (namespace, name, strict_mode, parse_error) = match parse_identifiers(raw) {
            Ok(mut identifiers) => {
                let name = identifiers.pop().unwrap_or_else(|| Identifier::unquoted(""));
                (identifiers.pop(), name, true, None)
            }
            Err(err) => {
                tracing::debug!(
                    "Unable to parse object name '{}', falling back to legacy interpretation: {}",
                    raw,
                    err
                );
                let to_identifier = |value: &str| {
                    if legacy.quoted {
                        Identifier::quoted(value)
                    } else {
                        Identifier::unquoted(value)
                    }
                };
                (
                    legacy.namespace.as_deref().map(to_identifier),
                    to_identifier(&legacy.name),
                    false,
                    Some(err),
                )
            }
        };

        Self {
            raw_input: raw.to_string(),
            namespace,
            name,
            legacy_namespace: legacy.namespace,
            legacy_name: legacy.name,
            quoted: legacy.quoted,
            strict_mode,
            parse_error,
        }
    }

    /// Interpret a new raw name for the same object
    pub fn renamed(&self, new_raw: &str) -> Self {
        Self::from_raw(new_raw)
    }

    /// Raw input this name was built from
    pub fn raw(&self) -> &str {
        &self.raw_input
    }

    /// Local name
    pub fn name(&self) -> &str {
        &self.legacy_name
    }

    /// Namespace (schema) the object lives in, if any
    pub fn namespace(&self) -> Option<&str> {
        self.legacy_namespace.as_deref()
    }

    /// Local name segment as resolved by the identifier parser
    pub fn name_identifier(&self) -> &Identifier {
        &self.name
    }

    /// Namespace segment as resolved by the identifier parser
    pub fn namespace_identifier(&self) -> Option<&Identifier> {
        self.namespace.as_ref()
    }

    /// Parsed segments, namespace first
    pub fn identifiers(&self) -> Vec<&Identifier> {
        self.namespace.iter().chain(std::iter::once(&self.name)).collect()
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Whether the strict parser accepted the raw input
    pub fn is_strict(&self) -> bool {
        self.strict_mode
    }

    /// Why the strict parser rejected the raw input
    pub fn parse_error(&self) -> Option<&IdentifierParseError> {
        self.parse_error.as_ref()
    }

    /// `namespace.name`, or just the name when there is no namespace
    pub fn qualified_name(&self) -> String {
        match &self.legacy_namespace {
            Some(namespace) => format!("{}.{}", namespace, self.legacy_name),
            None => self.legacy_name.clone(),
        }
    }

    /// Shortest lowercase name that still identifies the object when
    /// `default_namespace` is in effect
    ///
    /// This is a comparison key, not a rendering. It is always lower-cased,
    /// whatever the platform folds unquoted names to, and quoted names are
    /// lower-cased too. Use [`QuotingResolver`] for platform-aware output.
    pub fn shortest_name(&self, default_namespace: &str) -> String {
        let shortest = if self.is_in_default_namespace(default_namespace) {
            self.legacy_name.clone()
        } else {
            self.qualified_name()
        };
        shortest.to_lowercase()
    }

    /// Lowercase `namespace.name`, filling in `default_namespace` when unset
    pub fn full_qualified_name(&self, default_namespace: &str) -> String {
        let qualified = match &self.legacy_namespace {
            Some(_) => self.qualified_name(),
            None => format!("{}.{}", default_namespace, self.legacy_name),
        };
        qualified.to_lowercase()
    }

    pub fn is_in_default_namespace(&self, default_namespace: &str) -> bool {
        match &self.legacy_namespace {
            None => true,
            Some(namespace) => namespace == default_namespace,
        }
    }

    /// Render for `platform` with the default resolver
    pub fn quoted_name<P: Platform + ?Sized>(&self, platform: &P) -> String {
        QuotingResolver::default().render_for(self, platform).into_sql()
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

impl From<&str> for AssetName {
    fn from(raw: &str) -> Self {
        AssetName::from_raw(raw)
    }
}
