use std::collections::BTreeMap;
use std::sync::Arc;

use bns_core::errors::{BnsError, ErrorInfo};
use bns_core::{Resolution, Symmetry};

use crate::combinations::pairs;
use crate::digit::Digit;

/// Ordered family of every valid digit for one resolution pair.
///
/// All digits share a single lattice allocation; lookup is keyed by digit
/// index rather than scanning the family.
#[derive(Debug, Clone)]
pub struct DigitSystem {
    resolution: Resolution,
    symmetry: Symmetry,
    lattice: Arc<[f64]>,
    digits: BTreeMap<i32, Digit>,
}

impl DigitSystem {
    /// Builds one digit per index in `[-n_minus, n_plus)`, ascending.
    pub fn new(resolution: Resolution, symmetry: Symmetry) -> Result<Self, BnsError> {
        let lattice: Arc<[f64]> = resolution.lattice(symmetry).into();
        let mut digits = BTreeMap::new();
        for index in resolution.digit_indices() {
            let digit = Digit::on_lattice(resolution, index, symmetry, Arc::clone(&lattice))?;
            digits.insert(index, digit);
        }
        Ok(Self {
            resolution,
            symmetry,
            lattice,
            digits,
        })
    }

    /// Returns the resolution pair the system was built for.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the system's symmetry variant.
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Returns the lattice shared by every digit in the system.
    pub fn lattice(&self) -> &[f64] {
        &self.lattice
    }

    /// Returns the valid digit index range in ascending order.
    pub fn digit_indices(&self) -> std::ops::Range<i32> {
        self.resolution.digit_indices()
    }

    /// Returns the number of digits in the system.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns the digits in ascending index order.
    pub fn digits(&self) -> impl ExactSizeIterator<Item = &Digit> {
        self.digits.values()
    }

    /// Returns the digit for `index`, failing with `UnknownDigitIndex` when
    /// the system holds no such digit.
    pub fn digit_at(&self, index: i32) -> Result<&Digit, BnsError> {
        self.digits.get(&index).ok_or_else(|| {
            BnsError::UnknownDigitIndex(
                ErrorInfo::new("unknown-digit", "no digit with the requested index")
                    .with_context("index", index.to_string())
                    .with_context(
                        "valid",
                        format!("[{}, {})", -self.resolution.n_minus(), self.resolution.n_plus()),
                    ),
            )
        })
    }

    /// Composes two digits pointwise: `product[i] = c(s1, x_i) * c(s2, x_i)`.
    ///
    /// The returned composition shares the system lattice. Fails with
    /// `UnknownDigitIndex` when either index is absent.
    pub fn compose(&self, s1: i32, s2: i32) -> Result<Composition, BnsError> {
        let first = self.digit_at(s1)?;
        let second = self.digit_at(s2)?;
        let values = first
            .values()
            .iter()
            .zip(second.values())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Composition {
            indices: (s1, s2),
            lattice: Arc::clone(&self.lattice),
            values,
        })
    }

    /// Composes every unordered pair of digit indices, in canonical pair
    /// enumeration order (`n*(n-1)/2` compositions).
    pub fn pairwise_compositions(&self) -> Result<Vec<Composition>, BnsError> {
        let indices: Vec<i32> = self.digit_indices().collect();
        pairs(&indices)
            .into_iter()
            .map(|(s1, s2)| self.compose(s1, s2))
            .collect()
    }
}

/// Pointwise product of two digits over their shared lattice.
#[derive(Debug, Clone)]
pub struct Composition {
    indices: (i32, i32),
    lattice: Arc<[f64]>,
    values: Box<[f64]>,
}

impl Composition {
    /// Returns the composed digit indices `(s1, s2)`.
    pub fn indices(&self) -> (i32, i32) {
        self.indices
    }

    /// Returns the shared lattice coordinates.
    pub fn lattice(&self) -> &[f64] {
        &self.lattice
    }

    /// Returns the elementwise product values, same length as the lattice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
