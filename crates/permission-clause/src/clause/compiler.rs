//! Convert clause text into reverse Polish notation with the shunting-yard
//! algorithm.

use std::fmt;

use crate::errors::{ClauseError, syntax_error, wrap_syntax};
use crate::operator::{Associativity, Operator};

use super::lexer::Lexer;

/// One element of a compiled clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RpnToken {
    /// An operator to apply to the values already on the stack.
    Operator(Operator),
    /// A role name to look up in the caller's role set.
    Role(String),
}

impl RpnToken {
    /// Return the token as it appeared in the clause.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Operator(op) => op.representation(),
            Self::Role(name) => name,
        }
    }
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clause compiled to reverse Polish notation.
///
/// Tokens are consumed front to back by the evaluator. The queue is built
/// fresh for every compilation and never shared between evaluations.
///
/// # Examples
/// ```
/// use permission_clause::compile;
///
/// let rpn = compile("A OR B AND C").unwrap_or_else(|err| panic!("{err}"));
/// assert_eq!(rpn.to_string(), "A B C AND OR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpnQueue {
    tokens: Vec<RpnToken>,
}

impl RpnQueue {
    /// Iterate over the tokens in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RpnToken> {
        self.tokens.iter()
    }

    /// Number of tokens in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the clause produced no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn push_operator(&mut self, op: Operator) {
        self.tokens.push(RpnToken::Operator(op));
    }

    fn push_role(&mut self, role: &str) {
        self.tokens.push(RpnToken::Role(role.to_string()));
    }
}

impl fmt::Display for RpnQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RpnQueue {
    type Item = &'a RpnToken;
    type IntoIter = std::slice::Iter<'a, RpnToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for RpnQueue {
    type Item = RpnToken;
    type IntoIter = std::vec::IntoIter<RpnToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Decide whether `top` must leave the operator stack before `incoming` is
/// pushed.
///
/// Left-to-right (and grouping) operators yield only to strictly higher
/// precedence; right-to-left operators also yield to equal precedence.
#[must_use]
pub fn yields_to(top: Operator, incoming: Operator, associativity: Associativity) -> bool {
    match associativity {
        Associativity::LeftToRight | Associativity::None => {
            top.precedence() > incoming.precedence()
        }
        Associativity::RightToLeft => top.precedence() >= incoming.precedence(),
    }
}

/// Operator stack plus output queue for one compilation.
#[derive(Debug, Default)]
struct ShuntingYard {
    output: RpnQueue,
    operators: Vec<Operator>,
}

impl ShuntingYard {
    fn admit(&mut self, incoming: Operator) {
        while let Some(&top) = self.operators.last() {
            if !yields_to(top, incoming, incoming.associativity()) {
                break;
            }
            self.operators.pop();
            self.output.push_operator(top);
        }
        self.operators.push(incoming);
    }

    fn close_phrase(&mut self, position: usize) -> Result<(), ClauseError> {
        while let Some(top) = self.operators.pop() {
            if top == Operator::OpenPhrase {
                return Ok(());
            }
            self.output.push_operator(top);
        }
        Err(syntax_error("no matching '(' for the closing ')'", position))
    }

    fn finish(mut self, position: usize) -> Result<RpnQueue, ClauseError> {
        while let Some(top) = self.operators.pop() {
            if top == Operator::OpenPhrase {
                return Err(syntax_error("unclosed '('", position));
            }
            self.output.push_operator(top);
        }
        Ok(self.output)
    }
}

/// Compile a clause into a reverse Polish notation queue.
///
/// Role names go straight to the output; operators are ordered by
/// precedence and parentheses. The grammar itself is not enforced, so two
/// adjacent role names compile fine and fail later during reduction.
///
/// # Errors
/// Returns [`ClauseError::Syntax`] for an unmatched `)` or an unclosed `(`,
/// and wraps any lexer fault in a syntax error. Both carry the cursor
/// position at the point of failure, which for `)` is just past it.
pub fn compile(clause: &str) -> Result<RpnQueue, ClauseError> {
    let mut lexer = Lexer::new(clause);
    let mut yard = ShuntingYard::default();

    while let Some(next) = lexer.next() {
        let (_, element) = next.map_err(|err| wrap_syntax(err, lexer.cursor()))?;
        match Operator::from_token(element) {
            Some(Operator::OpenPhrase) => yard.operators.push(Operator::OpenPhrase),
            Some(Operator::ClosePhrase) => yard.close_phrase(lexer.cursor())?,
            Some(op) => yard.admit(op),
            None => yard.output.push_role(element),
        }
    }

    let rpn = yard.finish(clause.len())?;
    log::trace!("compiled clause '{clause}' to '{rpn}'");
    Ok(rpn)
}
