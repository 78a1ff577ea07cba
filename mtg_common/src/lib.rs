//! MTG Common - shared catalog types
//!
//! Holds the schema of the versioned card catalog dump (an MTGJSON
//! AllPrintings-style document) and the functions that load it from disk.

pub mod catalog;
pub mod error;

pub use catalog::{
    load_catalog, parse_catalog, CardData, CardIdentifiers, CatalogDump, CatalogMeta, SetData,
};
pub use error::{CatalogError, Result};
