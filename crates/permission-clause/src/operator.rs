//! Operator catalog for permission clauses.
//!
//! This module provides the fixed set of keywords and grouping symbols a
//! clause may contain, together with their precedence and associativity.
//! The lexer is oblivious to operators; the compiler and the evaluator both
//! recognise them by comparing raw tokens against [`Operator`].

use std::fmt;
use std::str::FromStr;

/// Tie-breaking rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// Grouping symbols take no part in precedence climbing.
    None,
    /// Equal-precedence operators group from the left.
    LeftToRight,
    /// Equal-precedence operators group from the right.
    RightToLeft,
}

/// A recognised clause operator or grouping symbol.
///
/// Every operator has a unique textual representation, so equality between
/// operators is equality of their representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical conjunction, `AND`.
    And,
    /// Logical disjunction, `OR`.
    Or,
    /// Exclusive disjunction, `XOR`.
    Xor,
    /// Logical negation, `NOT`.
    Not,
    /// Opening parenthesis, `(`.
    OpenPhrase,
    /// Closing parenthesis, `)`.
    ClosePhrase,
}

impl Operator {
    /// Every operator in the catalog.
    pub const ALL: [Self; 6] = [
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::OpenPhrase,
        Self::ClosePhrase,
    ];

    /// Return the operator as it is written in a clause.
    ///
    /// # Examples
    ///
    /// ```
    /// use permission_clause::Operator;
    ///
    /// assert_eq!(Operator::Xor.representation(), "XOR");
    /// assert_eq!(Operator::OpenPhrase.representation(), "(");
    /// ```
    #[must_use]
    pub const fn representation(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::OpenPhrase => "(",
            Self::ClosePhrase => ")",
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::OpenPhrase | Self::ClosePhrase => 0,
            Self::Xor => 1,
            Self::Or => 2,
            Self::And => 3,
            Self::Not => 4,
        }
    }

    /// Grouping rule applied when precedences tie.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::OpenPhrase | Self::ClosePhrase => Associativity::None,
            Self::And | Self::Or | Self::Xor | Self::Not => Associativity::LeftToRight,
        }
    }

    /// Returns `true` for `AND`, `OR`, `XOR` and `NOT`.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        !matches!(self, Self::OpenPhrase | Self::ClosePhrase)
    }

    /// Look up the operator written as `token`, matching case-sensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use permission_clause::Operator;
    ///
    /// assert_eq!(Operator::from_token("NOT"), Some(Operator::Not));
    /// assert_eq!(Operator::from_token("not"), None);
    /// assert_eq!(Operator::from_token("Admin"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| *op == token)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.representation())
    }
}

impl AsRef<str> for Operator {
    fn as_ref(&self) -> &str {
        self.representation()
    }
}

impl From<Operator> for &'static str {
    fn from(op: Operator) -> Self {
        op.representation()
    }
}

impl PartialEq<str> for Operator {
    fn eq(&self, other: &str) -> bool {
        self.representation() == other
    }
}

impl PartialEq<&str> for Operator {
    fn eq(&self, other: &&str) -> bool {
        self.representation() == *other
    }
}

impl PartialEq<Operator> for str {
    fn eq(&self, other: &Operator) -> bool {
        other == self
    }
}

impl PartialEq<Operator> for &str {
    fn eq(&self, other: &Operator) -> bool {
        other == self
    }
}

/// Error returned when a string is not one of the catalog operators.
///
/// Contains the unrecognised text for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown clause operator: {}", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_token(value).ok_or_else(|| UnknownOperator(value.to_string()))
    }
}
