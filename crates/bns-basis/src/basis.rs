use std::collections::BTreeMap;

use bns_core::errors::{BnsError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::combinations::SubsetIter;
use crate::digit::Digit;
use crate::system::DigitSystem;

/// Canonical label of a basis function: the member digit indices, sorted.
///
/// Labels compare and hash as unordered sets because construction sorts the
/// members, so no subset can appear under two orderings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label(Box<[i32]>);

impl Label {
    /// Canonicalizes a collection of digit indices into a label.
    pub fn new(indices: impl Into<Vec<i32>>) -> Self {
        let mut indices = indices.into();
        indices.sort_unstable();
        Self(indices.into_boxed_slice())
    }

    /// Returns the member indices in ascending order.
    pub fn indices(&self) -> &[i32] {
        &self.0
    }

    /// Returns the number of digits participating in the product.
    pub fn order(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<i32>> for Label {
    fn from(indices: Vec<i32>) -> Self {
        Self::new(indices)
    }
}

/// Lazy producer of `(label, function)` pairs over every non-empty digit
/// subset, subset sizes ascending, lexicographic within a size.
///
/// Basis enumeration is exponential in digit count; callers can stop early
/// or bound work with [`projected_basis_size`] before committing.
pub struct BasisEnumerator<'a> {
    lattice_len: usize,
    digits: Vec<&'a Digit>,
    order: usize,
    inner: SubsetIter<usize>,
}

impl<'a> BasisEnumerator<'a> {
    fn new(system: &'a DigitSystem) -> Self {
        let digits: Vec<&Digit> = system.digits().collect();
        let positions: Vec<usize> = (0..digits.len()).collect();
        Self {
            lattice_len: system.lattice().len(),
            digits,
            order: 1,
            inner: SubsetIter::new(positions, 1),
        }
    }
}

impl<'a> Iterator for BasisEnumerator<'a> {
    type Item = (Label, Box<[f64]>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.order > self.digits.len() {
                return None;
            }
            if let Some(selection) = self.inner.next() {
                let mut values = vec![1.0f64; self.lattice_len];
                let mut members = Vec::with_capacity(selection.len());
                for &position in &selection {
                    let digit = self.digits[position];
                    members.push(digit.index());
                    for (slot, value) in values.iter_mut().zip(digit.values()) {
                        *slot *= value;
                    }
                }
                return Some((Label::new(members), values.into_boxed_slice()));
            }
            self.order += 1;
            let positions: Vec<usize> = (0..self.digits.len()).collect();
            self.inner = SubsetIter::new(positions, self.order);
        }
    }
}

/// Lazily enumerates the basis functions of a digit system.
pub fn basis_functions(system: &DigitSystem) -> BasisEnumerator<'_> {
    BasisEnumerator::new(system)
}

/// Number of functions a full enumeration will produce, `2^n - 1` for `n`
/// digits. The constant zeroth element is not counted.
pub fn projected_basis_size(system: &DigitSystem) -> u128 {
    (1u128 << system.digit_count()) - 1
}

/// Materialized multiplicative basis over a digit system's lattice.
///
/// Holds one function per non-empty digit subset, keyed by canonical label,
/// plus the all-ones constant as a separate zeroth element.
#[derive(Debug)]
pub struct Basis {
    system: DigitSystem,
    constant: Box<[f64]>,
    functions: BTreeMap<Label, Box<[f64]>>,
}

impl Basis {
    /// Builds the full basis eagerly by draining [`basis_functions`].
    pub fn build(system: DigitSystem) -> Self {
        let mut functions = BTreeMap::new();
        for (label, values) in basis_functions(&system) {
            functions.insert(label, values);
        }
        let constant = vec![1.0f64; system.lattice().len()].into_boxed_slice();
        Self {
            system,
            constant,
            functions,
        }
    }

    /// Returns the underlying digit system.
    pub fn system(&self) -> &DigitSystem {
        &self.system
    }

    /// Returns the number of stored functions, `2^n - 1` for `n` digits.
    pub fn basis_size(&self) -> usize {
        self.functions.len()
    }

    /// Returns the all-ones constant, the degenerate empty-subset member.
    pub fn constant(&self) -> &[f64] {
        &self.constant
    }

    /// Returns the stored labels in canonical order.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &Label> {
        self.functions.keys()
    }

    /// Returns `(label, function)` pairs in canonical label order.
    pub fn functions(&self) -> impl ExactSizeIterator<Item = (&Label, &[f64])> {
        self.functions
            .iter()
            .map(|(label, values)| (label, values.as_ref()))
    }

    /// Returns the function for `label`, failing with `UnknownLabel` when no
    /// such subset was enumerated.
    pub fn function_for(&self, label: &Label) -> Result<&[f64], BnsError> {
        self.functions
            .get(label)
            .map(|values| values.as_ref())
            .ok_or_else(|| {
                BnsError::UnknownLabel(
                    ErrorInfo::new("unknown-label", "no basis function with the requested label")
                        .with_context("label", format!("{:?}", label.indices()))
                        .with_context("basis_size", self.functions.len().to_string()),
                )
            })
    }
}
