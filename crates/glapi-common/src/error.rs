// error.rs — Error types for directory registration and remap resolution

use thiserror::Error;

use crate::abi::Offset;

/// Failures registering a dynamic entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("invalid entry-point name {0:?}")]
    BadName(String),

    #[error("entry point {name} already registered with signature {existing:?}, not {requested:?}")]
    SignatureMismatch {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("names given for one entry point map to different slots ({first} and {second})")]
    OffsetConflict { first: Offset, second: Offset },

    #[error("no dynamic slots left (capacity {capacity})")]
    TableFull { capacity: usize },
}

/// Failures building or using a RemapTable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    #[error("remap table used before being resolved")]
    Unresolved,

    #[error("remap index {index} for {name} is outside a table of {len} entries")]
    IndexOutOfRange {
        name: &'static str,
        index: usize,
        len: usize,
    },
}
