//! Error types shared by the clause lexing, compilation and reduction stages.

use std::fmt;
use thiserror::Error;

/// Positional context for a clause syntax error.
///
/// # Examples
/// ```
/// use permission_clause::SyntaxErrorInfo;
/// let info = SyntaxErrorInfo::new("unclosed '('", 4);
/// assert_eq!(info.position, 4);
/// assert_eq!(info.to_string(), "unclosed '(' at byte 4 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Human-readable description of the fault.
    pub message: &'static str,
    /// Byte offset of the lexer cursor when the fault was detected.
    pub position: usize,
}

impl SyntaxErrorInfo {
    /// Create a new syntax error description.
    #[must_use]
    pub fn new(message: &'static str, position: usize) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {} (zero-based)", self.message, self.position)
    }
}

/// Errors surfaced while compiling or reducing a permission clause.
///
/// Argument errors signal misuse of the lexer. Syntax errors come from the
/// compiler and carry the cursor position. Reduction errors mean the RPN
/// queue did not collapse to a single boolean.
///
/// # Examples
/// ```
/// use permission_clause::{ClauseError, SyntaxErrorInfo};
/// let err = ClauseError::Syntax {
///     info: SyntaxErrorInfo::new("no matching '(' for ')'", 1),
///     cause: None,
/// };
/// assert!(err.to_string().starts_with("syntax error: no matching '('"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// A lexer precondition was violated.
    #[error("invalid argument: {0}")]
    Argument(&'static str),
    /// The clause could not be converted to reverse Polish notation.
    #[error("syntax error: {info}")]
    Syntax {
        /// Where and why compilation stopped.
        info: SyntaxErrorInfo,
        /// The lower-level fault that triggered the syntax error, if any.
        #[source]
        cause: Option<Box<ClauseError>>,
    },
    /// The RPN queue reduced to zero or several values.
    #[error("clause reduced to {remaining} values, expected exactly one")]
    Reduction {
        /// Number of values left on the evaluation stack.
        remaining: usize,
    },
}

impl ClauseError {
    /// Return the syntax error context when this is a syntax error.
    #[must_use]
    pub fn syntax_info(&self) -> Option<&SyntaxErrorInfo> {
        match self {
            Self::Syntax { info, .. } => Some(info),
            Self::Argument(_) | Self::Reduction { .. } => None,
        }
    }
}

pub(crate) fn syntax_error(message: &'static str, position: usize) -> ClauseError {
    ClauseError::Syntax {
        info: SyntaxErrorInfo::new(message, position),
        cause: None,
    }
}

/// Wrap a lower-level fault as a syntax error at `position`.
///
/// Syntax errors pass through untouched so their original position survives.
pub(crate) fn wrap_syntax(err: ClauseError, position: usize) -> ClauseError {
    match err {
        ClauseError::Syntax { .. } => err,
        other => ClauseError::Syntax {
            info: SyntaxErrorInfo::new("unexpected element", position),
            cause: Some(Box::new(other)),
        },
    }
}
