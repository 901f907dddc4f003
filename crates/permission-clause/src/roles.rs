//! Role membership lookups used when reducing a clause.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use derive_more::{Deref, From};

/// Membership test over the role names held by the current principal.
///
/// Only membership matters: ordering and duplicates have no effect on
/// evaluation. The trait is object safe so catalogs can accept
/// `&dyn RoleLookup`.
pub trait RoleLookup {
    /// Returns `true` when `role` is held.
    fn has_role(&self, role: &str) -> bool;
}

impl<S, H> RoleLookup for HashSet<S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    fn has_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl<S> RoleLookup for BTreeSet<S>
where
    S: Borrow<str> + Ord,
{
    fn has_role(&self, role: &str) -> bool {
        self.contains(role)
    }
}

impl<S: AsRef<str>> RoleLookup for [S] {
    fn has_role(&self, role: &str) -> bool {
        self.iter().any(|held| held.as_ref() == role)
    }
}

impl<S: AsRef<str>> RoleLookup for Vec<S> {
    fn has_role(&self, role: &str) -> bool {
        self.as_slice().has_role(role)
    }
}

impl<S: AsRef<str>, const N: usize> RoleLookup for [S; N] {
    fn has_role(&self, role: &str) -> bool {
        self.as_slice().has_role(role)
    }
}

impl<T: RoleLookup + ?Sized> RoleLookup for &T {
    fn has_role(&self, role: &str) -> bool {
        (**self).has_role(role)
    }
}

/// Owned set of role names for a principal.
///
/// # Examples
///
/// ```
/// use permission_clause::{RoleLookup, RoleSet};
///
/// let roles: RoleSet = ["Admin", "Auditor", "Admin"].into_iter().collect();
/// assert_eq!(roles.len(), 2);
/// assert!(roles.has_role("Auditor"));
/// assert!(!roles.has_role("admin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    /// Create an empty role set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role, returning `false` when it was already present.
    pub fn insert(&mut self, role: impl Into<String>) -> bool {
        self.0.insert(role.into())
    }

    /// Consume the set and return the underlying names.
    #[must_use]
    pub fn into_inner(self) -> HashSet<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for RoleSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl RoleLookup for RoleSet {
    fn has_role(&self, role: &str) -> bool {
        self.0.contains(role)
    }
}
