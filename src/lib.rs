//! # natseq
//!
//! A natural-order string comparator built on typed token sequences.
//!
//! ## What is natural order?
//!
//! Plain lexicographic sorting treats `"10"` as smaller than `"2"` and
//! orders embedded dates by digit runs. `natseq` instead decomposes each
//! string into a left-to-right sequence of typed tokens (calendar dates,
//! numbers, and alphabetic runs) and compares those sequences
//! structurally: first by the *type signature* (the ordered shape of
//! token types), then element by element as values.
//!
//! Signature-first comparison is the distinguishing feature: strings with
//! the same interleaving of text/number/date group together, and within a
//! group embedded dates sort by date value and embedded numbers by
//! numeric value.
//!
//! ## Key Features
//!
//! - **Typed tokens**: dates (`2017-02-14` or `2017/02/14`), signed
//!   decimal numbers (including `.2` and `-2.4`), and ASCII letter runs
//! - **Signature grouping**: structurally similar strings sort adjacently
//! - **Case-insensitive text**: `Apple` < `bacon` < `Watermelon`
//! - **Strict dates**: date-shaped text that names no real calendar day
//!   (`2017-13-40`) is an error, not a silent fallback
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! natseq = "0.1"
//! ```
//!
//! ### Comparing and sorting
//!
//! ```rust
//! use natseq::{compare, sorted};
//! use std::cmp::Ordering;
//!
//! // Numbers compare as values.
//! assert_eq!(compare("file2", "file10").unwrap(), Ordering::Less);
//!
//! // Dates compare chronologically, across separator styles.
//! let dates = vec!["2017-01-01", "2016/10/10", "2016-10-12"];
//! assert_eq!(
//!     sorted(dates).unwrap(),
//!     vec!["2016/10/10", "2016-10-12", "2017-01-01"],
//! );
//! ```
//!
//! ### Inspecting token sequences
//!
//! ```rust
//! use natseq::tokenize;
//!
//! let seq = tokenize("Valentine 2017/02/14 200").unwrap();
//! assert_eq!(seq.signature(), "3-1-2"); // text, date, number
//! ```
//!
//! ## Ordering semantics
//!
//! The verdict for `compare(a, b)` is decided in order:
//!
//! 1. `a == b` as raw strings yields `Equal` immediately (this holds even
//!    for strings that cannot be tokenized).
//! 2. Unequal type signatures order by the signatures as
//!    case-insensitive text, ignoring token values entirely.
//! 3. Equal signatures order by the first non-equal element pair; dates
//!    chronologically, numbers numerically, text case-insensitively.
//! 4. All pairs equal: the shorter sequence sorts first.
//!
//! Because step 2 ignores values, the relation is a consistent ordering
//! but not a "pure value" order across signature groups; see
//! [`compare`]'s module documentation for the details.
//!
//! ## Error Handling
//!
//! The single failure mode is [`Error::InvalidDate`]: text matched the
//! date pattern but is not a valid calendar date. It aborts the whole
//! comparison (and any sort built on it) rather than degrading silently.

pub mod compare;
pub mod error;
pub mod token;
pub mod tokenize;

pub use compare::{compare, compare_sequences, sorted};
pub use error::{Error, Result};
pub use token::{Element, TokenKind};
pub use tokenize::{tokenize, TokenSequence, Tokenizer};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_compare_numbers_as_values() {
        assert_eq!(compare("2", "10").unwrap(), Ordering::Less);
        assert_eq!(compare("-2.4", "-1").unwrap(), Ordering::Less);
        assert_eq!(compare(".2", "2").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_compare_dates_across_separators() {
        assert_eq!(compare("2016/10/10", "2016-10-12").unwrap(), Ordering::Less);
        assert_eq!(compare("2016-10-12", "2017-01-01").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_compare_text_case_insensitively() {
        assert_eq!(compare("Apple", "bacon").unwrap(), Ordering::Less);
        assert_eq!(compare("bacon", "Watermelon").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_sorted_mixed_signatures() {
        let list = vec![
            "Valentine 2017/02/14 200",
            "2017/03/14 is Valentine",
            "Ended 2017/02/15 300",
        ];
        assert_eq!(
            sorted(list).unwrap(),
            vec![
                "2017/03/14 is Valentine",
                "Ended 2017/02/15 300",
                "Valentine 2017/02/14 200",
            ],
        );
    }

    #[test]
    fn test_invalid_date_aborts() {
        assert!(compare("2017-13-40", "x").is_err());
        assert!(sorted(vec!["a", "2017-13-40"]).is_err());
    }
}
