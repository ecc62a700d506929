pub mod format;
pub mod value;

use patchnode_core::{CatalogError, NodeCatalog};

/// Registers every node in this crate with `catalog`.
///
/// # Errors
///
/// Fails if `catalog` already holds a node with the same id as one of ours.
pub fn register_all(catalog: &mut NodeCatalog) -> Result<(), CatalogError> {
    catalog.register::<value::ZipValues>()?;
    Ok(())
}
