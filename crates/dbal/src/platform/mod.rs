//! Platform Capabilities
//!
//! A platform is the dialect-specific bundle consumed when names are rendered
//! into SQL: which words are reserved, how unquoted identifiers are folded,
//! and how a single identifier is quoted. The traits are kept separate so the
//! quoting resolver can be driven by any combination of them.

pub mod dialect;
pub mod keywords;

pub use dialect::SqlDialect;
pub use keywords::KeywordList;

/// Reserved-word membership check
pub trait KeywordCheck {
    /// Case-insensitive check whether `word` is reserved
    fn is_keyword(&self, word: &str) -> bool;
}

/// Case folding applied to unquoted identifiers
pub trait CaseFolding {
    fn fold_case(&self, identifier: &str) -> String;
}

/// Quoting of a single identifier segment
pub trait IdentifierQuoting {
    /// Wrap `identifier` in the dialect's quote characters, escaping any
    /// embedded closing quote
    fn quote_single_identifier(&self, identifier: &str) -> String;
}

/// Full capability bundle of a SQL dialect
pub trait Platform: KeywordCheck + CaseFolding + IdentifierQuoting {
    /// Human readable platform name
    fn name(&self) -> &'static str;

    /// Maximum identifier length accepted by the database
    fn max_identifier_length(&self) -> usize;
}

/// How a dialect folds unquoted identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnquotedFolding {
    /// Fold to lowercase (PostgreSQL)
    Lower,
    /// Fold to uppercase (Oracle)
    Upper,
    /// Preserve as written
    None,
}

impl UnquotedFolding {
    pub fn apply(&self, identifier: &str) -> String {
        match self {
            UnquotedFolding::Lower => identifier.to_lowercase(),
            UnquotedFolding::Upper => identifier.to_uppercase(),
            UnquotedFolding::None => identifier.to_string(),
        }
    }
}
