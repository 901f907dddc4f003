//! Catalogs pairing target identifiers with the permission clauses that
//! guard them.
//!
//! A catalog answers one question: given the caller's roles, which targets
//! may be shown? Each entry is evaluated independently, so a malformed
//! clause only hides its own target.

mod catalog;
mod error;
mod load;

pub use catalog::{PermissionCatalog, PermissionEntry, PermissionsCatalog};
pub use error::CatalogError;
