//! Provides the `Separator` type and the `Elements` iterator that splits a
//! text into the elements delimited by a separator.
use anyhow::{ensure, Result};
use bstr::{BStr, ByteSlice};
use memchr::memmem::Finder;
use std::fmt;

/// A `Separator` is the literal byte string that delimits elements, both when
/// a text is split into elements and when a result set is joined back into a
/// text. It is never empty: an empty separator would match at every position,
/// so `Separator::new` refuses one.
#[derive(Clone, PartialEq, Eq)]
pub struct Separator(Vec<u8>);

impl Separator {
    /// Returns a `Separator` for `bytes`, or an error if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        ensure!(!bytes.is_empty(), "the separator must not be empty");
        Ok(Separator(bytes))
    }

    /// The separator's bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `sep.elements(text)` returns an iterator over the elements of `text`,
    /// in order, including empty elements.
    #[must_use]
    pub fn elements<'t>(&self, text: &'t [u8]) -> Elements<'t, '_> {
        Elements { remaining: Some(text), finder: Finder::new(&self.0) }
    }
}

/// Elements are separated by newlines unless the caller says otherwise.
impl Default for Separator {
    fn default() -> Self {
        Separator(b"\n".to_vec())
    }
}

impl AsRef<[u8]> for Separator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Separator({:?})", BStr::new(&self.0))
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_bstr())
    }
}

/// `Elements` yields the pieces of a text between occurrences of a separator.
/// Matching is literal and non-overlapping, scanning left to right, so with a
/// separator of `::` the text `a:::b` yields `a` and `:b`.
///
/// * An empty text yields a single empty element.
/// * A leading separator yields a leading empty element, and a trailing
///   separator a trailing one: `a\n` yields `a` and the empty element.
pub struct Elements<'t, 's> {
    remaining: Option<&'t [u8]>, // None once the last element has been yielded
    finder: Finder<'s>,
}

impl<'t> Iterator for Elements<'t, '_> {
    type Item = &'t [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remaining?;
        match self.finder.find(text) {
            Some(start) => {
                let (element, rest) = text.split_at(start);
                self.remaining = Some(&rest[self.finder.needle().len()..]);
                Some(element)
            }
            None => {
                self.remaining = None;
                Some(text)
            }
        }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn split<'t>(separator: &str, text: &'t str) -> Vec<&'t str> {
        let separator = Separator::new(separator).unwrap();
        separator.elements(text.as_bytes()).map(|e| e.to_str().unwrap()).collect()
    }

    #[test]
    fn the_empty_separator_is_refused() {
        assert!(Separator::new("").is_err());
        assert!(Separator::new(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn the_default_separator_is_a_newline() {
        assert_eq!(Separator::default().as_bytes(), b"\n");
    }

    #[test]
    fn an_empty_text_is_a_single_empty_element() {
        assert_eq!(split("\n", ""), vec![""]);
    }

    #[test]
    fn a_text_without_separators_is_a_single_element() {
        assert_eq!(split(",", "abc"), vec!["abc"]);
    }

    #[test]
    fn leading_trailing_and_doubled_separators_give_empty_elements() {
        assert_eq!(split("\n", "a\n"), vec!["a", ""]);
        assert_eq!(split("\n", "\na"), vec!["", "a"]);
        assert_eq!(split("\n", "a\n\nb\n\n"), vec!["a", "", "b", "", ""]);
        assert_eq!(split(",", ","), vec!["", ""]);
    }

    #[test]
    fn multibyte_separators_match_literally_and_without_overlap() {
        assert_eq!(split("::", "a::b::c"), vec!["a", "b", "c"]);
        assert_eq!(split("::", "a:::b"), vec!["a", ":b"]);
        assert_eq!(split("::", "::::"), vec!["", "", ""]);
        assert_eq!(split(".*", "x.*y.z"), vec!["x", "y.z"]);
    }

    #[test]
    fn crlf_is_not_special_unless_it_is_the_separator() {
        assert_eq!(split("\n", "a\r\nb"), vec!["a\r", "b"]);
        assert_eq!(split("\r\n", "a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn separator_displays_as_text() {
        let sep = Separator::new(", ").unwrap();
        assert_eq!(sep.to_string(), ", ");
        assert_eq!(format!("{sep:?}"), "Separator(\", \")");
    }
}
