//! Turns user-typed text into tree keys. Only plain runs of ASCII digits are
//! accepted, so signs, spaces inside the number and decimals are all
//! rejected before anything reaches the tree.

use crate::error::{Error, Result};
use crate::tree::Key;

/// Parses a key typed by a user. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use bst_view::input::parse_key;
///
/// assert_eq!(parse_key(" 42 ").unwrap(), 42);
/// assert!(parse_key("-1").is_err());
/// assert!(parse_key("4.2").is_err());
/// ```
pub fn parse_key(text: &str) -> Result<Key> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::Empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::NotANumber(text.to_string()));
    }
    // All digits, so the only way this fails is overflow.
    text.parse()
        .map_err(|_| Error::OutOfRange(text.to_string()))
}
