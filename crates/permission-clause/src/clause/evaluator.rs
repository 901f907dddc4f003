//! Stack reduction of a compiled clause against a role set.

use crate::errors::ClauseError;
use crate::operator::Operator;
use crate::roles::RoleLookup;

use super::compiler::{RpnQueue, RpnToken};

fn apply_binary(stack: &mut Vec<bool>, op: Operator, combine: fn(bool, bool) -> bool) {
    if stack.len() < 2 {
        log::debug!(
            "skipping {op}: {} operand(s) available, two required",
            stack.len()
        );
        return;
    }
    if let (Some(first), Some(second)) = (stack.pop(), stack.pop()) {
        stack.push(combine(first, second));
    }
}

fn apply_not(stack: &mut Vec<bool>) {
    match stack.pop() {
        Some(value) => stack.push(!value),
        None => log::debug!("skipping {}: no operand available", Operator::Not),
    }
}

/// Reduce a compiled clause to a single boolean.
///
/// Role tokens push their membership in `roles`. Binary operators pop two
/// values and `NOT` pops one. An operator that finds too few values is
/// skipped rather than treated as an error.
///
/// # Errors
/// Returns [`ClauseError::Reduction`] when the stack does not hold exactly
/// one value once the queue is exhausted.
///
/// # Examples
/// ```
/// use permission_clause::{compile, reduce};
///
/// let rpn = compile("Admin XOR Guest").unwrap_or_else(|err| panic!("{err}"));
/// assert_eq!(reduce(&rpn, &["Admin"]), Ok(true));
/// assert_eq!(reduce(&rpn, &["Admin", "Guest"]), Ok(false));
/// ```
pub fn reduce<R>(rpn: &RpnQueue, roles: &R) -> Result<bool, ClauseError>
where
    R: RoleLookup + ?Sized,
{
    let mut stack = Vec::with_capacity(rpn.len());
    for token in rpn {
        match token {
            RpnToken::Operator(op @ Operator::And) => apply_binary(&mut stack, *op, |a, b| a & b),
            RpnToken::Operator(op @ Operator::Or) => apply_binary(&mut stack, *op, |a, b| a | b),
            RpnToken::Operator(op @ Operator::Xor) => apply_binary(&mut stack, *op, |a, b| a ^ b),
            RpnToken::Operator(Operator::Not) => apply_not(&mut stack),
            RpnToken::Operator(grouping) => stack.push(roles.has_role(grouping.representation())),
            RpnToken::Role(role) => stack.push(roles.has_role(role)),
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        (Some(_), false) => Err(ClauseError::Reduction {
            remaining: stack.len() + 1,
        }),
        (None, _) => Err(ClauseError::Reduction { remaining: 0 }),
    }
}
