//! Character sequences and string reversal.
//!
//! A [`CharSequence`] holds the Unicode scalar values of a string so that
//! positional access and reversal operate on characters rather than UTF-8
//! bytes.

use std::fmt;

use crate::{ReverseError, ReverseResult};

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;

/// An owned sequence of characters with bounds-checked positional access.
///
/// # Examples
///
/// ```
/// use reverser_core::CharSequence;
///
/// let seq = CharSequence::from("abcd");
/// assert_eq!(seq.char_at(0)?, 'a');
/// assert!(seq.char_at(4).is_err());
/// assert_eq!(seq.reversed().to_string(), "dcba");
/// # Ok::<(), reverser_core::ReverseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSequence {
    chars: Vec<char>,
}

impl CharSequence {
    /// Number of characters in the sequence.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the sequence holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ReverseError::IndexOutOfBounds` when `index >= len()`.
    pub fn char_at(&self, index: usize) -> ReverseResult<char> {
        self.chars
            .get(index)
            .copied()
            .ok_or(ReverseError::IndexOutOfBounds {
                index,
                length: self.chars.len(),
            })
    }

    /// Returns a new sequence with the characters in opposite order.
    ///
    /// Walks from the last valid index (`len() - 1`) down to `0`, so
    /// `output[i] == input[len - 1 - i]` for every position.
    pub fn reversed(&self) -> Self {
        let chars = (0..self.chars.len())
            .rev()
            .map(|index| self.chars[index])
            .collect();
        Self { chars }
    }

    /// The characters as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CharSequence {
    fn from(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
        }
    }
}

impl From<String> for CharSequence {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromIterator<char> for CharSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Reverses `input` character by character.
///
/// # Examples
///
/// ```
/// use reverser_core::reverse;
///
/// assert_eq!(reverse("abcd"), "dcba");
/// assert_eq!(reverse(""), "");
/// assert_eq!(reverse("a"), "a");
/// ```
pub fn reverse(input: &str) -> String {
    CharSequence::from(input).reversed().to_string()
}
