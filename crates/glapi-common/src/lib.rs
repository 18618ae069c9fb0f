#![allow(clippy::missing_safety_doc, clippy::too_many_arguments, clippy::type_complexity,
         clippy::len_without_is_empty, clippy::new_without_default)]

pub mod abi;
pub mod types;
pub mod entry;
pub mod entries;
pub mod error;
pub mod config;
pub mod table;
pub mod remap;
pub mod directory;
pub mod current;
pub mod accessor;
pub mod sanity;

pub use abi::{Offset, Proc, RemapIndex};
pub use accessor::{Addressing, BuildAddressing, Direct, Dispatch, LoaderAddressing, Remapped};
pub use config::{DebugFlags, DispatchConfig};
pub use directory::{Directory, ProcDirectory, ProcRegistry};
pub use entry::{Entry, EntryDescriptor, EntryFn};
pub use error::{DirectoryError, RemapError};
pub use remap::{RemapTable, ResolveReport};
pub use table::Table;
