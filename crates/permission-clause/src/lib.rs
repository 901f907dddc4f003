//! Permission clauses: boolean expressions over role names.
//!
//! A clause such as `Manager AND NOT (Intern OR Contractor)` is compiled to
//! reverse Polish notation with the shunting-yard algorithm and reduced
//! against the role names of the current principal. Evaluation never
//! panics and never returns an error: absent clauses permit, malformed
//! clauses deny, and the failure is reported on the [`ClauseVerdict`].

mod clause;
mod errors;
mod operator;
mod roles;

pub use clause::{
    ClauseVerdict, PermissionClause, RpnQueue, RpnToken, compile, evaluate, next_element, reduce,
    yields_to,
};
pub use errors::{ClauseError, SyntaxErrorInfo};
pub use operator::{Associativity, Operator, UnknownOperator};
pub use roles::{RoleLookup, RoleSet};
