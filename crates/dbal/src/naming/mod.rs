//! Portable identifier naming
//!
//! Turns user-supplied object names into names that are valid on every
//! supported platform: parsing, legacy interpretation, quoting and generated
//! constraint names.

pub mod asset_name;
pub mod hash;
pub mod identifier;
pub mod legacy;
pub mod quoting;

pub use asset_name::AssetName;
pub use hash::{generate_identifier_name, DEFAULT_MAX_IDENTIFIER_LENGTH};
pub use identifier::{parse_identifiers, Identifier};
pub use quoting::{NameDivergence, QuotingResolver, RenderedName};
