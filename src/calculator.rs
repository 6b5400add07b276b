//! Houses the `SetOperations` trait and its implementation, `SetCalculator`.
//!
use anyhow::{Context, Result};
use bstr::{BStr, BString, ByteSlice};
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::debug;
use std::path::Path;

use crate::operands;
use crate::separator::Separator;

/// The set operations offered to the command line. Each operation returns its
/// result set as a single text, its elements joined by a separator.
///
/// The order of elements in a result is unspecified: compare results as sets.
pub trait SetOperations {
    /// The elements found in either operand
    fn union(&self) -> BString;
    /// The elements found in both operands
    fn intersection(&self) -> BString;
    /// The elements found in the first operand but not in the second
    fn difference(&self) -> BString;
}

// An `ElementSet` is a set of elements borrowed from the calculator's texts.
//
type ElementSet<'data> = IndexSet<&'data [u8], FxBuildHasher>;

/// A `SetCalculator` holds two texts and the `Separator` that splits each of
/// them into a set of elements. The texts are never modified: every operation
/// splits them afresh, so an operation can be repeated, or a different one
/// requested, with the same result each time.
///
/// The empty element (produced by leading, trailing, or doubled separators,
/// or by an empty text) is never part of a result.
#[derive(Debug, Clone)]
pub struct SetCalculator {
    text_a: Vec<u8>,
    text_b: Vec<u8>,
    separator: Separator,
}

impl SetCalculator {
    /// A calculator for texts already held in memory
    #[must_use]
    pub fn new(text_a: impl Into<Vec<u8>>, text_b: impl Into<Vec<u8>>, separator: Separator) -> Self {
        SetCalculator { text_a: text_a.into(), text_b: text_b.into(), separator }
    }

    /// A calculator for the contents of the files at `path_a` and `path_b`
    pub fn from_paths(path_a: &Path, path_b: &Path, separator: Separator) -> Result<Self> {
        let text_a = operands::read(path_a).context("unable to read first file")?;
        let text_b = operands::read(path_b).context("unable to read second file")?;
        Ok(SetCalculator { text_a, text_b, separator })
    }

    /// The first operand's text
    #[must_use]
    pub fn text_a(&self) -> &BStr {
        self.text_a.as_bstr()
    }

    /// The second operand's text
    #[must_use]
    pub fn text_b(&self) -> &BStr {
        self.text_b.as_bstr()
    }

    /// The separator used both to split the operands and to join results
    #[must_use]
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    fn element_set<'data>(&self, text: &'data [u8]) -> ElementSet<'data> {
        self.separator.elements(text).collect()
    }

    /// Join the non-empty members of `set` with the separator.
    fn format(&self, set: &ElementSet) -> BString {
        let members = set.iter().filter(|element| !element.is_empty());
        BString::from(bstr::join(self.separator.as_bytes(), members))
    }
}

impl SetOperations for SetCalculator {
    fn union(&self) -> BString {
        let mut set = self.element_set(&self.text_a);
        set.extend(self.separator.elements(&self.text_b));
        debug!("union: {} elements", set.len());
        self.format(&set)
    }

    /// The first operand is the lookup side; the result lists common elements
    /// in the order the second operand gives them.
    fn intersection(&self) -> BString {
        let lookup = self.element_set(&self.text_a);
        let mut set = ElementSet::default();
        for element in self.separator.elements(&self.text_b) {
            if !element.is_empty() && lookup.contains(element) {
                set.insert(element);
            }
        }
        debug!("intersection: {} of {} elements", set.len(), lookup.len());
        self.format(&set)
    }

    fn difference(&self) -> BString {
        // `IndexSet::remove` doesn't preserve order, and `shift_remove` is
        // O(n), so we collect the second operand and make one `retain` pass.
        let mut set = self.element_set(&self.text_a);
        let other = self.element_set(&self.text_b);
        set.retain(|element| !other.contains(element));
        debug!("difference: {} elements", set.len());
        self.format(&set)
    }
}
