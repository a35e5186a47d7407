//! Typed token values extracted from strings.
//!
//! This module provides the two core value types of the crate:
//!
//! - [`TokenKind`]: the closed set of token types (date, number, text)
//! - [`Element`]: one typed token carrying its parsed value
//!
//! Elements are produced by the tokenizer in [`crate::tokenize`] and
//! consumed pairwise by the comparator in [`crate::compare`]. They are
//! immutable once built and owned solely by the sequence that contains
//! them.
//!
//! ## Examples
//!
//! ```rust
//! use natseq::{Element, TokenKind};
//! use std::cmp::Ordering;
//!
//! let a = Element::Number(2.0);
//! let b = Element::Number(10.0);
//!
//! assert_eq!(a.kind(), TokenKind::Number);
//! assert_eq!(a.cmp_values(&b), Ordering::Less);
//! ```

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// The type of a token, in matching-priority order.
///
/// The derived [`Ord`] follows the tag order (`Date < Number < Text`),
/// which is also the order the tags sort as signature text.
///
/// # Examples
///
/// ```rust
/// use natseq::TokenKind;
///
/// assert_eq!(TokenKind::Date.tag(), "1");
/// assert_eq!(TokenKind::Number.tag(), "2");
/// assert_eq!(TokenKind::Text.tag(), "3");
/// assert!(TokenKind::Date < TokenKind::Text);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// A calendar date (year, month, day). No time of day, no timezone.
    Date,
    /// A signed 64-bit floating-point number.
    Number,
    /// A run of ASCII letters, compared case-insensitively.
    Text,
}

impl TokenKind {
    /// Returns the stable one-character tag used in type signatures.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            TokenKind::Date => "1",
            TokenKind::Number => "2",
            TokenKind::Text => "3",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One typed token extracted from a string.
///
/// An element pairs a [`TokenKind`] with the parsed value for that kind:
/// a [`NaiveDate`] for dates, an `f64` for numbers, and the exact matched
/// substring for text (case is preserved here; comparison folds it).
///
/// # Examples
///
/// ```rust
/// use natseq::{tokenize, Element};
///
/// let seq = tokenize("report 2016-10-12 rev 2").unwrap();
/// assert_eq!(seq.elements().len(), 4);
/// assert!(matches!(seq.elements()[0], Element::Text(_)));
/// assert!(matches!(seq.elements()[1], Element::Date(_)));
/// assert!(matches!(seq.elements()[3], Element::Number(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Date(NaiveDate),
    Number(f64),
    Text(String),
}

impl Element {
    /// Returns the kind of this element.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Element::Date(_) => TokenKind::Date,
            Element::Number(_) => TokenKind::Number,
            Element::Text(_) => TokenKind::Text,
        }
    }

    /// Returns `true` if this is a date element.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Element::Date(_))
    }

    /// Returns `true` if this is a number element.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Element::Number(_))
    }

    /// Returns `true` if this is a text element.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Returns the date value if this is a date element.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Element::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a number element.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Element::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a text element.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Compares two elements by value, assuming matching kinds.
    ///
    /// The comparator only calls this after the signature-equality gate,
    /// so both sides always have the same kind there. If kinds do differ,
    /// the elements order by kind tag instead of by value.
    ///
    /// Rules per kind:
    ///
    /// - `Date`: chronological order
    /// - `Number`: numeric order (pattern-validated input is never NaN)
    /// - `Text`: ASCII-case-insensitive lexical order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use natseq::Element;
    /// use std::cmp::Ordering;
    ///
    /// let a = Element::Text("Apple".to_string());
    /// let b = Element::Text("bacon".to_string());
    /// assert_eq!(a.cmp_values(&b), Ordering::Less);
    /// ```
    #[must_use]
    pub fn cmp_values(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Date(a), Element::Date(b)) => a.cmp(b),
            // Matched numbers are finite, so partial_cmp only returns None
            // for values the tokenizer cannot produce.
            (Element::Number(a), Element::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Element::Text(a), Element::Text(b)) => cmp_ignore_ascii_case(a, b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

/// Compares two strings after folding ASCII letters to lowercase.
///
/// Matched text tokens are ASCII-only, so byte-wise folding is exact;
/// signatures are digits and dashes, which fold to themselves.
pub(crate) fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let fold_a = a.bytes().map(|b| b.to_ascii_lowercase());
    let fold_b = b.bytes().map(|b| b.to_ascii_lowercase());
    fold_a.cmp(fold_b)
}
