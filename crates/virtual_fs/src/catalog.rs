//! Built-in portfolio catalog.

use crate::registry::{FileRegistry, RegistryError};

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Parses and validates the embedded portfolio catalog.
///
/// # Errors
///
/// Returns [`RegistryError`] if the embedded document is malformed or violates tree invariants.
pub fn builtin_catalog() -> Result<FileRegistry, RegistryError> {
    FileRegistry::from_json(CATALOG_JSON)
}
