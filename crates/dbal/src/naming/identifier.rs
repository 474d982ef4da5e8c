//! Identifier parsing
//!
//! Splits a raw object name such as `app."User Accounts"` into its
//! dot-separated segments. Quoting is dialect-agnostic: `"..."`, `` `...` ``
//! and `[...]` are all accepted, and a doubled closing character inside a
//! quoted segment stands for the character itself.

use std::fmt;

use crate::error::IdentifierParseError;
use crate::platform::{CaseFolding, IdentifierQuoting};

/// Maximum number of segments in an object name (`namespace.name`)
pub const MAX_NAME_SEGMENTS: usize = 2;

const QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('`', '`'), ('[', ']')];

/// A single name segment as written by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    value: String,
    quoted: bool,
}

impl Identifier {
    pub(crate) fn unquoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub(crate) fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }

    /// Literal text with delimiters removed
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Name the database will store: quoted identifiers keep their case,
    /// unquoted ones are folded
    pub fn effective_value<F: CaseFolding + ?Sized>(&self, folding: &F) -> String {
        if self.quoted {
            self.value.clone()
        } else {
            folding.fold_case(&self.value)
        }
    }

    /// Render as SQL, always quoted, using the folded value for unquoted input
    pub fn to_sql<P: CaseFolding + IdentifierQuoting + ?Sized>(&self, platform: &P) -> String {
        platform.quote_single_identifier(&self.effective_value(platform))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Parse an object name into at most two identifiers
///
/// Empty input yields no identifiers.
pub fn parse_identifiers(raw: &str) -> Result<Vec<Identifier>, IdentifierParseError> {
    let identifiers = parse_segments(raw)?;
    if identifiers.len() > MAX_NAME_SEGMENTS {
        return Err(IdentifierParseError::TooManySegments {
            count: identifiers.len(),
        });
    }
    Ok(identifiers)
}

/// Parse any number of dot-separated identifiers
pub fn parse_segments(raw: &str) -> Result<Vec<Identifier>, IdentifierParseError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut identifiers = Vec::new();

    if chars.is_empty() {
        return Ok(identifiers);
    }

    let mut pos = 0;
    loop {
        let (identifier, next) = match closing_quote_for(chars.get(pos).copied()) {
            Some(close) => parse_quoted(&chars, pos, close)?,
            None => parse_unquoted(&chars, pos)?,
        };
        identifiers.push(identifier);
        pos = next;

        match chars.get(pos) {
            None => break,
            Some('.') => {
                pos += 1;
                if pos >= chars.len() {
                    return Err(IdentifierParseError::EmptySegment { position: pos });
                }
            }
            Some(&character) => {
                return Err(IdentifierParseError::UnexpectedCharacter {
                    character,
                    position: pos,
                })
            }
        }
    }

    Ok(identifiers)
}

fn closing_quote_for(c: Option<char>) -> Option<char> {
    let c = c?;
    QUOTE_PAIRS
        .iter()
        .find(|(open, _)| *open == c)
        .map(|(_, close)| *close)
}

fn parse_quoted(
    chars: &[char],
    start: usize,
    close: char,
) -> Result<(Identifier, usize), IdentifierParseError> {
    let mut value = String::new();
    let mut pos = start + 1;

    while pos < chars.len() {
        if chars[pos] == close {
            if chars.get(pos + 1) == Some(&close) {
                value.push(close);
                pos += 2;
                continue;
            }
            return Ok((Identifier::quoted(value), pos + 1));
        }
        value.push(chars[pos]);
        pos += 1;
    }

    Err(IdentifierParseError::UnterminatedQuote {
        position: start,
        expected: close,
    })
}

fn parse_unquoted(chars: &[char], start: usize) -> Result<(Identifier, usize), IdentifierParseError> {
    let mut value = String::new();
    let mut pos = start;

    while let Some(&c) = chars.get(pos) {
        if c == '.' {
            break;
        }
        if closing_quote_for(Some(c)).is_some() {
            return Err(IdentifierParseError::UnexpectedCharacter {
                character: c,
                position: pos,
            });
        }
        value.push(c);
        pos += 1;
    }

    if value.is_empty() {
        return Err(IdentifierParseError::EmptySegment { position: start });
    }

    Ok((Identifier::unquoted(value), pos))
}
