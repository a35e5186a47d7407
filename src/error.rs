//! Error types for natural-order tokenization and comparison.
//!
//! Exactly one failure mode exists in this crate: text that matches the
//! date lexical pattern (digits in date-shaped positions) but does not form
//! a valid calendar date. Number and text extraction cannot fail once their
//! patterns have matched, by construction of the patterns.
//!
//! ## Examples
//!
//! ```rust
//! use natseq::{compare, Error};
//!
//! // "2017-13-40" is date-shaped but month 13 does not exist.
//! let result = compare("2017-13-40", "anything");
//! assert!(matches!(result, Err(Error::InvalidDate { .. })));
//! ```

use thiserror::Error;

/// All errors that can occur while tokenizing or comparing strings.
///
/// Each variant includes enough context to locate the problem in the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text matched the date pattern but is not a valid calendar date.
    ///
    /// This aborts the whole `tokenize` (and therefore `compare`) call:
    /// a date-shaped token that names a nonexistent day is treated as bad
    /// input, not silently reinterpreted as numbers or text.
    #[error("invalid calendar date {text:?} at byte {position}")]
    InvalidDate {
        /// The exact substring that matched the date pattern.
        text: String,
        /// Byte offset of the match within the input string.
        position: usize,
    },
}

impl Error {
    /// Creates an invalid-date error for a date-shaped match that failed
    /// calendar validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use natseq::Error;
    ///
    /// let err = Error::invalid_date("2017-13-40", 0);
    /// assert!(err.to_string().contains("2017-13-40"));
    /// ```
    pub fn invalid_date(text: &str, position: usize) -> Self {
        Error::InvalidDate {
            text: text.to_string(),
            position,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
