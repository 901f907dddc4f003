//! Clause compilation, reduction and the deny-on-failure entry point.

mod compiler;
mod evaluator;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClauseError;
use crate::roles::RoleLookup;

pub use compiler::{RpnQueue, RpnToken, compile, yields_to};
pub use evaluator::reduce;
pub use lexer::next_element;

/// Outcome of evaluating a clause, with the failure that forced a denial.
///
/// A verdict is built fresh by every call, so repeated evaluations never
/// observe each other's errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseVerdict {
    /// Whether the clause grants access.
    pub permitted: bool,
    /// Compilation or reduction failure, when one occurred.
    pub error: Option<ClauseError>,
}

impl ClauseVerdict {
    fn granted(permitted: bool) -> Self {
        Self {
            permitted,
            error: None,
        }
    }

    fn failed(error: ClauseError) -> Self {
        Self {
            permitted: false,
            error: Some(error),
        }
    }

    /// Returns `true` when the clause grants access.
    #[must_use]
    pub fn is_permitted(&self) -> bool {
        self.permitted
    }

    /// The failure that caused a denial, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ClauseError> {
        self.error.as_ref()
    }
}

/// Evaluate `clause` against `roles`.
///
/// An absent or empty clause places no restriction and is permitted without
/// being compiled. A clause that fails to compile or reduce is denied; the
/// failure is kept on the verdict rather than returned as an error.
///
/// # Examples
/// ```
/// use permission_clause::evaluate;
///
/// assert!(evaluate(None, &["Clerk"]).is_permitted());
/// assert!(evaluate(Some("Clerk OR Admin"), &["Clerk"]).is_permitted());
///
/// let verdict = evaluate(Some("Clerk)"), &["Clerk"]);
/// assert!(!verdict.is_permitted());
/// assert!(verdict.error().is_some());
/// ```
#[must_use]
pub fn evaluate<R>(clause: Option<&str>, roles: &R) -> ClauseVerdict
where
    R: RoleLookup + ?Sized,
{
    let Some(clause) = clause.filter(|text| !text.is_empty()) else {
        return ClauseVerdict::granted(true);
    };
    match compile(clause).and_then(|rpn| reduce(&rpn, roles)) {
        Ok(permitted) => ClauseVerdict::granted(permitted),
        Err(err) => {
            log::warn!("denying permission clause '{clause}': {err}");
            ClauseVerdict::failed(err)
        }
    }
}

/// A permission clause as written in configuration.
///
/// Wraps the optional clause text. An absent or empty clause places no
/// restriction on the target it guards. Parsing from a string never fails;
/// malformed clauses are only detected when evaluated.
///
/// # Examples
/// ```
/// use permission_clause::PermissionClause;
///
/// let clause: PermissionClause = "Manager AND NOT Intern".into();
/// assert!(clause.evaluate(&["Manager"]));
/// assert!(!clause.evaluate(&["Manager", "Intern"]));
/// assert!(PermissionClause::unrestricted().evaluate(&[] as &[&str]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionClause(Option<String>);

impl PermissionClause {
    /// Create a clause from its text.
    #[must_use]
    pub fn new(clause: impl Into<String>) -> Self {
        Self(Some(clause.into()))
    }

    /// A clause that permits every principal.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self(None)
    }

    /// The clause text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns `true` when the clause is absent or empty.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.as_str().is_none_or(str::is_empty)
    }

    /// Evaluate the clause, returning only whether access is granted.
    #[must_use]
    pub fn evaluate<R>(&self, roles: &R) -> bool
    where
        R: RoleLookup + ?Sized,
    {
        self.verdict(roles).permitted
    }

    /// Evaluate the clause and keep any failure for diagnostics.
    #[must_use]
    pub fn verdict<R>(&self, roles: &R) -> ClauseVerdict
    where
        R: RoleLookup + ?Sized,
    {
        evaluate(self.as_str(), roles)
    }

    /// Compile the clause, returning `None` for an unrestricted clause.
    ///
    /// # Errors
    /// Returns [`ClauseError::Syntax`] when the clause text is malformed.
    pub fn compile(&self) -> Result<Option<RpnQueue>, ClauseError> {
        if self.is_unrestricted() {
            return Ok(None);
        }
        self.as_str().map(compile).transpose()
    }
}

impl fmt::Display for PermissionClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

impl FromStr for PermissionClause {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for PermissionClause {
    fn from(clause: &str) -> Self {
        Self::new(clause)
    }
}

impl From<String> for PermissionClause {
    fn from(clause: String) -> Self {
        Self(Some(clause))
    }
}

impl From<Option<String>> for PermissionClause {
    fn from(clause: Option<String>) -> Self {
        Self(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleSet;
    use rstest::rstest;

    const NO_ROLES: &[&str] = &[];

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn absent_or_empty_clause_is_permitted(#[case] clause: Option<&str>) {
        assert_eq!(evaluate(clause, NO_ROLES), ClauseVerdict::granted(true));
    }

    #[test]
    fn whitespace_only_clause_is_denied() {
        let verdict = evaluate(Some("  "), NO_ROLES);
        assert!(!verdict.is_permitted());
        assert_eq!(verdict.error(), Some(&ClauseError::Reduction { remaining: 0 }));
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let verdict = evaluate(Some("A)"), &["A"]);
        assert!(!verdict.is_permitted());
        let position = verdict
            .error()
            .and_then(ClauseError::syntax_info)
            .map(|info| info.position);
        assert_eq!(position, Some(2));
    }

    #[test]
    fn verdicts_do_not_leak_between_calls() {
        let roles: RoleSet = ["A"].into_iter().collect();
        let failed = evaluate(Some("A B"), &roles);
        let passed = evaluate(Some("A"), &roles);
        assert!(failed.error().is_some());
        assert_eq!(passed, ClauseVerdict::granted(true));
        assert_eq!(evaluate(Some("A B"), &roles), failed);
    }

    #[test]
    fn clause_round_trips_through_strings() {
        let clause: PermissionClause = "A OR B".parse().unwrap_or_default();
        assert_eq!(clause.as_str(), Some("A OR B"));
        assert_eq!(clause.to_string(), "A OR B");
        assert_eq!(PermissionClause::unrestricted().to_string(), "");
    }

    #[rstest]
    #[case(PermissionClause::unrestricted(), true)]
    #[case(PermissionClause::new(""), true)]
    #[case(PermissionClause::new(" "), false)]
    #[case(PermissionClause::from("Admin"), false)]
    fn detects_unrestricted_clauses(#[case] clause: PermissionClause, #[case] expected: bool) {
        assert_eq!(clause.is_unrestricted(), expected);
    }

    #[test]
    fn compiles_only_restricted_clauses() {
        assert_eq!(PermissionClause::unrestricted().compile(), Ok(None));
        let rpn = PermissionClause::from("NOT Guest").compile();
        assert_eq!(
            rpn.map(|rpn| rpn.map(|queue| queue.to_string())),
            Ok(Some("Guest NOT".to_string()))
        );
        assert!(PermissionClause::from("(Guest").compile().is_err());
    }

    #[test]
    fn deserialises_optional_clause_text() {
        let clauses: Vec<PermissionClause> =
            serde_json::from_str(r#"["Admin", null]"#).unwrap_or_default();
        assert_eq!(
            clauses,
            vec![
                PermissionClause::from("Admin"),
                PermissionClause::unrestricted()
            ]
        );
    }
}
