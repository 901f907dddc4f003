//! Clause lexer extracting whitespace-separated elements and parentheses.
//!
//! The lexer knows nothing about keywords: `AND` comes out exactly like a
//! role name and is only recognised later by the compiler.

use crate::errors::ClauseError;

fn is_parenthesis(c: char) -> bool {
    c == '(' || c == ')'
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_parenthesis(c)
}

/// Extract the next element of `source`, starting at byte offset `cursor`.
///
/// Leading whitespace is skipped. A parenthesis is returned on its own;
/// any other element runs until whitespace, a parenthesis or the end of the
/// source. `cursor` is advanced past the returned element. `Ok(None)` means
/// only whitespace remained.
///
/// # Errors
/// Returns [`ClauseError::Argument`] when `source` is empty or when `cursor`
/// is already past the last valid index (or inside a multi-byte character).
///
/// # Examples
/// ```
/// use permission_clause::next_element;
///
/// let mut cursor = 0;
/// assert_eq!(next_element("  (Admin", &mut cursor), Ok(Some("(")));
/// assert_eq!(next_element("  (Admin", &mut cursor), Ok(Some("Admin")));
/// assert_eq!(cursor, 8);
/// ```
pub fn next_element<'a>(
    source: &'a str,
    cursor: &mut usize,
) -> Result<Option<&'a str>, ClauseError> {
    if source.is_empty() {
        return Err(ClauseError::Argument("source must not be empty"));
    }
    let Some(rest) = source.get(*cursor..).filter(|rest| !rest.is_empty()) else {
        return Err(ClauseError::Argument(
            "cursor must be less than or equal to the last index",
        ));
    };

    let skipped = rest.len() - rest.trim_start().len();
    *cursor += skipped;
    let rest = rest.trim_start();
    let Some(first) = rest.chars().next() else {
        return Ok(None);
    };

    let len = if is_parenthesis(first) {
        first.len_utf8()
    } else {
        rest.find(is_delimiter).unwrap_or(rest.len())
    };
    let element = rest.get(..len);
    *cursor += len;
    Ok(element)
}

/// Iterator over `(position, element)` pairs of a clause.
///
/// Positions are byte offsets of the first character of each element.
#[derive(Debug, Clone)]
pub(crate) struct Lexer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Byte offset the next extraction starts from.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, &'a str), ClauseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.source.len() {
            return None;
        }
        match next_element(self.source, &mut self.cursor) {
            Ok(Some(element)) => Some(Ok((self.cursor - element.len(), element))),
            Ok(None) => None,
            Err(err) => {
                self.cursor = self.source.len();
                Some(Err(err))
            }
        }
    }
}
