//! The natural-order comparator.
//!
//! Two strings are ordered in two phases:
//!
//! 1. **Signature phase**: both sides are tokenized and their type
//!    signatures compared as case-insensitive text. If the signatures
//!    differ, that comparison is the final verdict: strings whose
//!    token-type shapes differ are ordered purely by shape, regardless of
//!    content. This is what groups structurally similar strings together.
//! 2. **Value phase**: with equal signatures, elements are compared
//!    pairwise by type-appropriate rules (chronological, numeric,
//!    case-folded lexical); the first non-equal pair decides. If every
//!    compared pair is equal, the shorter sequence sorts first.
//!
//! Note that across differing signatures this is a grouping heuristic,
//! not a value ordering: a string containing a later date can sort before
//! one containing an earlier date when their shapes differ. Within one
//! signature group the ordering is plain value order.
//!
//! ## Usage
//!
//! ```rust
//! use natseq::compare;
//! use std::cmp::Ordering;
//!
//! // Embedded numbers compare as values, not digit runs.
//! assert_eq!(compare("file2", "file10").unwrap(), Ordering::Less);
//!
//! // Embedded dates compare chronologically across separators.
//! assert_eq!(compare("2016/10/10", "2016-10-12").unwrap(), Ordering::Less);
//! ```

use crate::error::Result;
use crate::token::{cmp_ignore_ascii_case, Element};
use crate::tokenize::{tokenize, TokenSequence};
use std::cmp::Ordering;

/// Compares two strings in natural order.
///
/// Identical raw strings short-circuit to `Equal` without tokenizing, so
/// equality holds even for input that would fail to tokenize. Otherwise
/// both sides are tokenized independently and compared signature-first as
/// described in the module docs.
///
/// # Examples
///
/// ```rust
/// use natseq::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("abc45", "abc123").unwrap(), Ordering::Less);
/// assert_eq!(compare("Apple", "bacon").unwrap(), Ordering::Less);
/// assert_eq!(compare("2017-13-40", "2017-13-40").unwrap(), Ordering::Equal);
/// ```
///
/// # Errors
///
/// Propagates [`crate::Error::InvalidDate`] from tokenizing either input.
/// The failure aborts the comparison; it is never treated as `Equal`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    if a == b {
        return Ok(Ordering::Equal);
    }
    let seq_a = tokenize(a)?;
    let seq_b = tokenize(b)?;
    Ok(compare_sequences(&seq_a, &seq_b))
}

/// Compares two already-tokenized sequences.
///
/// This is the infallible core of [`compare`]; use it to amortize
/// tokenization when one string participates in many comparisons (as
/// [`sorted`] does).
///
/// # Examples
///
/// ```rust
/// use natseq::{tokenize, compare_sequences};
/// use std::cmp::Ordering;
///
/// let a = tokenize("abc 123").unwrap();
/// let b = tokenize("abc").unwrap();
/// // Signatures "3-2" vs "3" differ, so signature text decides.
/// assert_eq!(compare_sequences(&b, &a), Ordering::Less);
/// ```
#[must_use]
pub fn compare_sequences(a: &TokenSequence, b: &TokenSequence) -> Ordering {
    match cmp_ignore_ascii_case(a.signature(), b.signature()) {
        Ordering::Equal => compare_elements(a.elements(), b.elements()),
        verdict => verdict,
    }
}

/// Pairwise element comparison with the length tie-break. Only called
/// with equal signatures, so paired elements always share a kind.
fn compare_elements(a: &[Element], b: &[Element]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp_values(y) {
            Ordering::Equal => continue,
            verdict => return verdict,
        }
    }
    a.len().cmp(&b.len())
}

/// Sorts a list of strings into natural order, returning the sorted list.
///
/// Each input is tokenized exactly once up front (failing fast on the
/// first invalid date), then ordered with the standard library's stable
/// sort, so inputs that compare equal keep their relative order.
///
/// # Examples
///
/// ```rust
/// use natseq::sorted;
///
/// let list = vec!["10", ".2", "-1", "-2.4", "2"];
/// assert_eq!(sorted(list).unwrap(), vec!["-2.4", "-1", ".2", "2", "10"]);
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::InvalidDate`] if any input fails to tokenize;
/// no partial ordering is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sorted<T: AsRef<str>>(items: Vec<T>) -> Result<Vec<T>> {
    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        let seq = tokenize(item.as_ref())?;
        keyed.push((item, seq));
    }
    keyed.sort_by(|(a, seq_a), (b, seq_b)| {
        if a.as_ref() == b.as_ref() {
            Ordering::Equal
        } else {
            compare_sequences(seq_a, seq_b)
        }
    });
    Ok(keyed.into_iter().map(|(item, _)| item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn identical_strings_skip_tokenization() {
        // Equality must hold even for input that cannot tokenize.
        assert_eq!(compare("2017-13-40", "2017-13-40").unwrap(), Ordering::Equal);
        assert_eq!(compare("", "").unwrap(), Ordering::Equal);
        assert_eq!(compare("?!?", "?!?").unwrap(), Ordering::Equal);
    }

    #[test]
    fn differing_signatures_order_by_signature_text() {
        // "1-3" < "2-3" < "3-1" no matter what the values are.
        assert_eq!(
            compare("2017/01/23 special", "20Watermelon").unwrap(),
            Ordering::Less
        );
        assert_eq!(
            compare("321apple", "abcd 2016/01/01").unwrap(),
            Ordering::Less
        );
        // A later date still sorts first when its shape says so.
        assert_eq!(
            compare("2099/01/01 z", "a 2000-01-01").unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn signature_prefix_orders_before_extension() {
        // "3" < "3-2" < "3-2-1" as text.
        assert_eq!(compare("abc", "abc 123").unwrap(), Ordering::Less);
        assert_eq!(
            compare("abc 123", "abc 123 2017/02/23").unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn equal_signatures_compare_values_pairwise() {
        // First differing pair decides.
        assert_eq!(compare("abc45", "abc123").unwrap(), Ordering::Less);
        assert_eq!(compare("abc45", "def45").unwrap(), Ordering::Less);
        assert_eq!(
            compare("ended on 2017-01-05", "Ended on 2016-01-02").unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn length_breaks_value_ties() {
        let a = tokenize("abc").unwrap();
        let b = tokenize("ABC 1").unwrap();
        // Signatures differ here ("3" vs "3-2"), so exercise the length
        // rule directly on element lists of equal signature.
        assert_eq!(compare_elements(a.elements(), a.elements()), Ordering::Equal);
        assert_eq!(
            compare_elements(a.elements(), b.elements()),
            Ordering::Less
        );
        assert_eq!(
            compare_elements(b.elements(), a.elements()),
            Ordering::Greater
        );
    }

    #[test]
    fn invalid_date_propagates_from_either_side() {
        let err = compare("2017-13-40", "hello").unwrap_err();
        assert_eq!(err, Error::invalid_date("2017-13-40", 0));
        let err = compare("hello", "2017-13-40").unwrap_err();
        assert_eq!(err, Error::invalid_date("2017-13-40", 0));
    }

    #[test]
    fn sorted_fails_fast_on_invalid_input() {
        assert!(sorted(vec!["ok", "2017-13-40", "also ok"]).is_err());
    }

    #[test]
    fn sorted_is_stable_for_equal_keys() {
        // "A1" and "a1" compare equal (case fold); input order is kept.
        let out = sorted(vec!["b2", "A1", "a1"]).unwrap();
        assert_eq!(out, vec!["A1", "a1", "b2"]);
    }
}
