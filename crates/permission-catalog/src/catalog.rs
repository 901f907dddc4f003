//! Permission entries and the catalog query.

use permission_clause::{ClauseVerdict, PermissionClause, RoleLookup};
use serde::{Deserialize, Serialize};

/// A target identifier guarded by a permission clause.
///
/// # Examples
///
/// ```
/// use permission_catalog::PermissionEntry;
///
/// let entry = PermissionEntry::new("Reports", "Manager OR Auditor");
/// assert!(entry.is_permitted(&["Auditor"]));
/// assert!(!entry.is_permitted(&["Clerk"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Identifier of the guarded target, such as a module name.
    #[serde(alias = "module")]
    pub target: String,
    /// Clause the caller's roles must satisfy; absent means unrestricted.
    #[serde(default)]
    pub clause: PermissionClause,
}

impl PermissionEntry {
    /// Create an entry guarding `target` with `clause`.
    #[must_use]
    pub fn new(target: impl Into<String>, clause: impl Into<PermissionClause>) -> Self {
        Self {
            target: target.into(),
            clause: clause.into(),
        }
    }

    /// Create an entry that every principal may access.
    #[must_use]
    pub fn unrestricted(target: impl Into<String>) -> Self {
        Self::new(target, PermissionClause::unrestricted())
    }

    /// Returns `true` when `roles` satisfy the entry's clause.
    #[must_use]
    pub fn is_permitted<R>(&self, roles: &R) -> bool
    where
        R: RoleLookup + ?Sized,
    {
        self.clause.evaluate(roles)
    }
}

/// Source of the targets a principal may access.
pub trait PermissionsCatalog {
    /// Return the identifiers of every target whose clause `roles` satisfy.
    fn permitted_targets(&self, roles: &dyn RoleLookup) -> Vec<String>;
}

/// Ordered collection of permission entries.
///
/// Insertion order is preserved and drives the order of query results, but
/// entries are evaluated independently of one another. Callers sharing a
/// catalog across threads must not mutate it while it is being queried.
///
/// # Examples
///
/// ```
/// use permission_catalog::{PermissionCatalog, PermissionEntry, PermissionsCatalog};
/// use permission_clause::RoleSet;
///
/// let catalog = PermissionCatalog::new()
///     .with_entry(PermissionEntry::new("ModA", "RoleX"))
///     .with_entry(PermissionEntry::unrestricted("ModB"));
/// assert_eq!(catalog.permitted_targets(&RoleSet::new()), vec!["ModB".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCatalog {
    #[serde(default)]
    permissions: Vec<PermissionEntry>,
}

impl PermissionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning the catalog for chaining.
    #[must_use]
    pub fn with_entry(mut self, entry: PermissionEntry) -> Self {
        self.push(entry);
        self
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PermissionEntry) {
        self.permissions.push(entry);
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PermissionEntry> {
        self.permissions.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Returns `true` when the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Evaluate every entry, keeping the failure behind each denial.
    pub fn verdicts<'a, R>(
        &'a self,
        roles: &'a R,
    ) -> impl Iterator<Item = (&'a str, ClauseVerdict)> + 'a
    where
        R: RoleLookup + ?Sized,
    {
        self.iter()
            .map(move |entry| (entry.target.as_str(), entry.clause.verdict(roles)))
    }
}

impl PermissionsCatalog for PermissionCatalog {
    fn permitted_targets(&self, roles: &dyn RoleLookup) -> Vec<String> {
        self.iter()
            .filter(|entry| entry.is_permitted(roles))
            .map(|entry| entry.target.clone())
            .collect()
    }
}

impl FromIterator<PermissionEntry> for PermissionCatalog {
    fn from_iter<I: IntoIterator<Item = PermissionEntry>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl Extend<PermissionEntry> for PermissionCatalog {
    fn extend<I: IntoIterator<Item = PermissionEntry>>(&mut self, iter: I) {
        self.permissions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PermissionCatalog {
    type Item = &'a PermissionEntry;
    type IntoIter = std::slice::Iter<'a, PermissionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permission_clause::{ClauseError, RoleSet};
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> PermissionCatalog {
        [
            PermissionEntry::new("Orders", "Clerk OR Manager"),
            PermissionEntry::new("Payroll", "Manager AND NOT Intern"),
            PermissionEntry::new("Broken", "Manager)"),
            PermissionEntry::unrestricted("Home"),
        ]
        .into_iter()
        .collect()
    }

    fn permitted(catalog: &PermissionCatalog, held: &[&str]) -> Vec<String> {
        let roles: RoleSet = held.iter().copied().collect();
        catalog.permitted_targets(&roles)
    }

    #[rstest]
    #[case(&[], &["Home"])]
    #[case(&["Clerk"], &["Orders", "Home"])]
    #[case(&["Manager"], &["Orders", "Payroll", "Home"])]
    #[case(&["Manager", "Intern"], &["Orders", "Home"])]
    fn returns_permitted_targets_in_catalog_order(
        catalog: PermissionCatalog,
        #[case] held: &[&str],
        #[case] expected: &[&str],
    ) {
        assert_eq!(permitted(&catalog, held), expected);
    }

    #[rstest]
    fn malformed_clause_only_hides_its_own_target(catalog: PermissionCatalog) {
        let roles: RoleSet = ["Manager"].into_iter().collect();
        let broken: Vec<(&str, ClauseVerdict)> = catalog
            .verdicts(&roles)
            .filter(|(_, verdict)| verdict.error().is_some())
            .collect();
        let [(target, verdict)] = broken.as_slice() else {
            panic!("expected exactly one failing entry, got {broken:?}");
        };
        assert_eq!(*target, "Broken");
        assert!(matches!(verdict.error(), Some(ClauseError::Syntax { .. })));
    }

    #[test]
    fn empty_catalog_permits_nothing() {
        let catalog = PermissionCatalog::new();
        assert!(catalog.is_empty());
        assert!(permitted(&catalog, &["Manager"]).is_empty());
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let mut catalog = PermissionCatalog::new()
            .with_entry(PermissionEntry::unrestricted("B"))
            .with_entry(PermissionEntry::unrestricted("A"));
        catalog.extend([PermissionEntry::unrestricted("C")]);
        let targets: Vec<&str> = catalog.iter().map(|entry| entry.target.as_str()).collect();
        assert_eq!(targets, vec!["B", "A", "C"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn serves_callers_through_the_trait() {
        let catalog: Box<dyn PermissionsCatalog> =
            Box::new(PermissionCatalog::new().with_entry(PermissionEntry::new("ModA", "RoleX")));
        assert_eq!(catalog.permitted_targets(&["RoleX"]), vec!["ModA".to_string()]);
    }
}
