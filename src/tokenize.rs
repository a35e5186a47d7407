//! String tokenization.
//!
//! This module turns a raw string into a [`TokenSequence`]: an ordered list
//! of typed [`Element`]s plus the derived type signature used as the
//! comparator's grouping key.
//!
//! ## Overview
//!
//! The tokenizer is a single-pass, left-to-right scanner:
//!
//! - **Ordered matchers**: at each position a fixed priority table of
//!   `(matcher, kind)` pairs is tried; the first match wins. Dates come
//!   before numbers so a 4-digit year is not consumed as a bare integer.
//! - **Greedy, non-overlapping**: a successful match advances the cursor
//!   past the matched text before scanning resumes.
//! - **Lossy by design**: bytes that match no pattern (punctuation,
//!   whitespace, symbols) are skipped without producing a token.
//!
//! ## Usage
//!
//! ```rust
//! use natseq::tokenize;
//!
//! let seq = tokenize("Valentine 2017/02/14 200").unwrap();
//! assert_eq!(seq.signature(), "3-1-2");
//! assert_eq!(seq.len(), 3);
//! ```
//!
//! The only failure mode is a date-shaped match that is not a real
//! calendar date:
//!
//! ```rust
//! use natseq::{tokenize, Error};
//!
//! assert!(matches!(
//!     tokenize("due 2017-13-40"),
//!     Err(Error::InvalidDate { .. })
//! ));
//! ```

use crate::error::{Error, Result};
use crate::token::{Element, TokenKind};
use chrono::NaiveDate;

/// The ordered list of elements extracted from one string, plus its
/// derived type signature.
///
/// The signature is each element's kind tag joined by `-` in order of
/// appearance (e.g. `"3-1-2"` for text, date, number). It is computed
/// once at construction and is a pure function of the element list:
/// recomputing it from [`TokenSequence::elements`] always reproduces the
/// same string.
///
/// Sequences are created fresh per call and hold no references back to
/// the input string.
///
/// # Examples
///
/// ```rust
/// use natseq::tokenize;
///
/// let seq = tokenize("abc 123 2017/02/23").unwrap();
/// assert_eq!(seq.signature(), "3-2-1");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSequence {
    elements: Vec<Element>,
    signature: String,
}

impl TokenSequence {
    fn new(elements: Vec<Element>) -> Self {
        let signature = elements
            .iter()
            .map(|e| e.kind().tag())
            .collect::<Vec<_>>()
            .join("-");
        TokenSequence {
            elements,
            signature,
        }
    }

    /// Returns the elements in match order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the type signature (kind tags joined by `-`).
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no pattern matched anywhere in the input.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consumes the sequence, returning the owned elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

/// Tokenizes a string into its typed element sequence.
///
/// Scans left to right, extracting dates, numbers, and alphabetic runs in
/// priority order and skipping everything else. See the module docs for
/// the full pattern table.
///
/// # Examples
///
/// ```rust
/// use natseq::tokenize;
///
/// let seq = tokenize("20Watermelon").unwrap();
/// assert_eq!(seq.signature(), "2-3");
/// assert_eq!(seq.elements()[0].as_number(), Some(20.0));
/// assert_eq!(seq.elements()[1].as_text(), Some("Watermelon"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if a date-shaped match fails calendar
/// validation (e.g. `"2017-13-40"`). This is a hard error for the whole
/// call, not a silent skip.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tokenize(input: &str) -> Result<TokenSequence> {
    Tokenizer::new(input).run()
}

/// The scanner behind [`tokenize`].
///
/// Holds the input and a byte cursor; see [`Tokenizer::run`].
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
}

/// A lexical matcher: given the remaining input, returns the length of a
/// match at position 0, if any. Matchers never validate values; that
/// happens when the element is built.
type Matcher = fn(&[u8]) -> Option<usize>;

/// Matching priority. First match at each scan position wins, which is
/// what disambiguates overlapping patterns: a 4-digit year also matches
/// the integer pattern, and `-1.5` also starts an integer match.
const MATCHERS: &[(Matcher, TokenKind)] = &[
    (match_date_hyphen, TokenKind::Date),
    (match_date_slash, TokenKind::Date),
    (match_decimal, TokenKind::Number),
    (match_bare_fraction, TokenKind::Number),
    (match_integer, TokenKind::Number),
    (match_alpha, TokenKind::Text),
];

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, position: 0 }
    }

    /// Runs the scan to completion, producing the token sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] for a date-shaped match that is not
    /// a valid calendar date.
    pub fn run(mut self) -> Result<TokenSequence> {
        let bytes = self.input.as_bytes();
        let mut elements = Vec::new();

        while self.position < bytes.len() {
            match self.match_here(&bytes[self.position..]) {
                Some((len, kind)) => {
                    // Matches are all-ASCII, so the byte range is a valid
                    // char boundary slice.
                    let text = &self.input[self.position..self.position + len];
                    elements.push(self.build_element(kind, text)?);
                    self.position += len;
                }
                // Unrecognized byte (punctuation, whitespace, non-ASCII):
                // skip it without emitting anything.
                None => self.position += 1,
            }
        }

        Ok(TokenSequence::new(elements))
    }

    fn match_here(&self, rest: &[u8]) -> Option<(usize, TokenKind)> {
        MATCHERS
            .iter()
            .find_map(|&(matcher, kind)| matcher(rest).map(|len| (len, kind)))
    }

    fn build_element(&self, kind: TokenKind, text: &str) -> Result<Element> {
        match kind {
            TokenKind::Date => parse_date(text)
                .map(Element::Date)
                .ok_or_else(|| Error::invalid_date(text, self.position)),
            TokenKind::Number => match text.parse() {
                Ok(value) => Ok(Element::Number(value)),
                // The number matchers only accept valid f64 literal forms.
                Err(_) => unreachable!("number pattern matched non-numeric text {text:?}"),
            },
            TokenKind::Text => Ok(Element::Text(text.to_string())),
        }
    }
}

/// Parses a 10-byte `YYYY-MM-DD` or `YYYY/MM/DD` match by calendar rules.
/// Returns `None` for digit combinations that name no real date.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let year = digits_to_u32(&text[..4]) as i32;
    let month = digits_to_u32(&text[5..7]);
    let day = digits_to_u32(&text[8..10]);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Converts an all-digit ASCII substring to its numeric value.
fn digits_to_u32(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn match_date_hyphen(s: &[u8]) -> Option<usize> {
    match_date_shape(s, b'-')
}

fn match_date_slash(s: &[u8]) -> Option<usize> {
    match_date_shape(s, b'/')
}

/// `\d{4} sep \d{2} sep \d{2}`: a fixed-width shape check only; calendar
/// validation happens in [`parse_date`].
fn match_date_shape(s: &[u8], sep: u8) -> Option<usize> {
    if s.len() < 10 {
        return None;
    }
    let shaped = s[..4].iter().all(u8::is_ascii_digit)
        && s[4] == sep
        && s[5..7].iter().all(u8::is_ascii_digit)
        && s[7] == sep
        && s[8..10].iter().all(u8::is_ascii_digit);
    shaped.then_some(10)
}

fn digit_run(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(s: &[u8]) -> usize {
    usize::from(s.first() == Some(&b'-'))
}

/// `-?\d+\.\d+`
fn match_decimal(s: &[u8]) -> Option<usize> {
    let sign = sign_len(s);
    let int = digit_run(&s[sign..]);
    if int == 0 {
        return None;
    }
    let rest = &s[sign + int..];
    if rest.first() != Some(&b'.') {
        return None;
    }
    let frac = digit_run(&rest[1..]);
    (frac > 0).then_some(sign + int + 1 + frac)
}

/// `-?\.\d+`: a decimal with no leading integer digit, e.g. `.2`.
fn match_bare_fraction(s: &[u8]) -> Option<usize> {
    let sign = sign_len(s);
    if s.get(sign) != Some(&b'.') {
        return None;
    }
    let frac = digit_run(&s[sign + 1..]);
    (frac > 0).then_some(sign + 1 + frac)
}

/// `-?\d+`
fn match_integer(s: &[u8]) -> Option<usize> {
    let sign = sign_len(s);
    let digits = digit_run(&s[sign..]);
    (digits > 0).then_some(sign + digits)
}

/// `[A-Za-z]+`: ASCII letters only; digits and punctuation end the run.
fn match_alpha(s: &[u8]) -> Option<usize> {
    let run = s.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    (run > 0).then_some(run)
}
