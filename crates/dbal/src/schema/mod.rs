//! Schema objects named through asset names
//!
//! Tables own their columns, indexes and foreign keys. Every object keeps an
//! [`AssetName`](crate::naming::AssetName) and renders it with the quoting
//! resolver of the target platform.

pub mod column;
pub mod foreign_key;
pub mod index;
pub mod sequence;
pub mod table;

pub use column::Column;
pub use foreign_key::ForeignKeyConstraint;
pub use index::Index;
pub use sequence::Sequence;
pub use table::{Table, PRIMARY_KEY_NAME};
