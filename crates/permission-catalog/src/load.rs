//! Declarative catalog definitions.
//!
//! A definition is a JSON document listing the entries in order:
//!
//! ```json
//! {
//!   "permissions": [
//!     { "target": "Orders", "clause": "Clerk OR Manager" },
//!     { "target": "Home" }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::catalog::PermissionCatalog;
use crate::error::CatalogError;

impl PermissionCatalog {
    /// Parse a catalog definition held in memory.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] when the text is not a valid
    /// definition.
    ///
    /// # Examples
    /// ```
    /// use permission_catalog::PermissionCatalog;
    ///
    /// let catalog = PermissionCatalog::from_json_str(
    ///     r#"{"permissions": [{"module": "Reports", "clause": "Auditor"}]}"#,
    /// )
    /// .unwrap_or_default();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(definition: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(definition)?;
        log::debug!("parsed catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog definition from a reader.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] when the stream is unreadable or not a
    /// valid definition.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        log::debug!("read catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog definition from a file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] when the file cannot be opened and
    /// [`CatalogError::Json`] when its contents are not a valid definition.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} permission entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PermissionEntry;
    use permission_clause::PermissionClause;

    #[test]
    fn parses_entries_in_order() {
        let definition = r#"{
            "permissions": [
                { "target": "Orders", "clause": "Clerk OR Manager" },
                { "module": "Payroll", "clause": "Manager" },
                { "target": "Home", "clause": null },
                { "target": "About" }
            ]
        }"#;
        let catalog = match PermissionCatalog::from_json_str(definition) {
            Ok(catalog) => catalog,
            Err(err) => panic!("definition should parse: {err}"),
        };
        let entries: Vec<PermissionEntry> = catalog.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![
                PermissionEntry::new("Orders", "Clerk OR Manager"),
                PermissionEntry::new("Payroll", "Manager"),
                PermissionEntry::unrestricted("Home"),
                PermissionEntry::new("About", PermissionClause::unrestricted()),
            ]
        );
    }

    #[test]
    fn treats_missing_permissions_as_empty() {
        let catalog = PermissionCatalog::from_json_str("{}");
        assert!(matches!(catalog, Ok(ref c) if c.is_empty()));
    }

    #[test]
    fn rejects_entries_without_target() {
        let result = PermissionCatalog::from_json_str(r#"{"permissions": [{"clause": "A"}]}"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn reports_missing_files_with_path() {
        let result = PermissionCatalog::load("does/not/exist.json");
        let Err(CatalogError::Io { path, .. }) = result else {
            panic!("missing file should be an I/O error");
        };
        assert_eq!(path, Path::new("does/not/exist.json"));
    }
}
