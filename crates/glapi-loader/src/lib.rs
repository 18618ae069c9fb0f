#![allow(clippy::missing_safety_doc)]

pub mod library;
pub mod populate;

pub use library::{check_abi_version, LibraryDirectory, LoaderError, ProducerLibrary};
pub use populate::{populate_entries, populate_table, PopulateReport, SymbolSource};
