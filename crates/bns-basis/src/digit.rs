use std::sync::Arc;

use bns_core::errors::{BnsError, ErrorInfo};
use bns_core::{Resolution, Symmetry};

/// Single binary digit function sampled on its resolution lattice.
///
/// A digit is the place-value function `c(s, x)` of the binary expansion of
/// `x` scaled to the lattice; lower-magnitude places correspond to more
/// negative `s`. Instances are immutable after construction.
#[derive(Debug, Clone)]
pub struct Digit {
    resolution: Resolution,
    index: i32,
    symmetry: Symmetry,
    lattice: Arc<[f64]>,
    values: Box<[f64]>,
}

impl Digit {
    /// Builds the digit function for `index` on a fresh lattice.
    ///
    /// Fails with `InvalidDigitIndex` when `index` falls outside
    /// `[-n_minus, n_plus)`; no partially built digit is ever returned.
    pub fn new(resolution: Resolution, index: i32, symmetry: Symmetry) -> Result<Self, BnsError> {
        let lattice: Arc<[f64]> = resolution.lattice(symmetry).into();
        Self::on_lattice(resolution, index, symmetry, lattice)
    }

    /// Builds the digit on a lattice already generated for `resolution` and
    /// `symmetry`, so systems can share one allocation across all digits.
    pub(crate) fn on_lattice(
        resolution: Resolution,
        index: i32,
        symmetry: Symmetry,
        lattice: Arc<[f64]>,
    ) -> Result<Self, BnsError> {
        if !resolution.contains_digit(index) {
            let info = ErrorInfo::new(
                "digit-index-range",
                "digit index is outside the resolution's valid range",
            )
            .with_context("index", index.to_string())
            .with_context(
                "valid",
                format!("[{}, {})", -resolution.n_minus(), resolution.n_plus()),
            );
            return Err(BnsError::InvalidDigitIndex(info));
        }
        debug_assert_eq!(lattice.len(), resolution.lattice_len());

        let step = resolution.step();
        let (low, high) = symmetry.levels();
        let period = ((index + 1) as f64).exp2();
        let threshold = (index as f64).exp2();
        // Values sample the unshifted grid for both variants; only the
        // stored coordinates carry the symmetric half-step offset.
        let values = (0..resolution.lattice_len())
            .map(|i| {
                let x = i as f64 * step;
                let remainder = x - (x / period).floor() * period;
                if remainder < threshold {
                    low
                } else {
                    high
                }
            })
            .collect();

        Ok(Self {
            resolution,
            index,
            symmetry,
            lattice,
            values,
        })
    }

    /// Returns the resolution pair the digit was built for.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the digit index `s`.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Returns the digit's symmetry variant.
    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Returns the ordered lattice coordinates.
    pub fn lattice(&self) -> &[f64] {
        &self.lattice
    }

    /// Returns the digit value at every lattice point, same length as the lattice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
