//! Resolution pairs and dyadic lattice generation.

use serde::{Deserialize, Serialize};

use crate::errors::{BnsError, ErrorInfo};

/// Upper bound on `n_plus + n_minus` accepted by [`Resolution::new`].
///
/// Lattices hold `2^(n_plus + n_minus)` coordinates and every digit carries
/// a values array of the same length, so the cap bounds the size of a single
/// allocation. Basis enumeration grows as `2^n - 1` on top of this; see
/// `projected_basis_size` in the basis crate before materializing.
pub const MAX_TOTAL_RESOLUTION: u32 = 24;

/// Value mapping and lattice placement for a digit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// Digits take values in `{0, 1}` on the unshifted lattice.
    NonSymmetric,
    /// Digits take values in `{-1/2, +1/2}` on a lattice shifted by half a step.
    Symmetric,
}

impl Symmetry {
    /// Returns the `(low, high)` digit levels for the variant.
    pub fn levels(&self) -> (f64, f64) {
        match self {
            Symmetry::NonSymmetric => (0.0, 1.0),
            Symmetry::Symmetric => (-0.5, 0.5),
        }
    }

    /// Returns the lattice offset measured in fractions of the lattice step.
    pub fn offset_steps(&self) -> f64 {
        match self {
            Symmetry::NonSymmetric => 0.0,
            Symmetry::Symmetric => 0.5,
        }
    }
}

/// Validated resolution pair `(n_plus, n_minus)`.
///
/// The pair fixes a lattice of `2^(n_plus + n_minus)` points with step
/// `2^-n_minus`, covering `[0, 2^n_plus)` before any symmetric shift, and a
/// digit index range of `[-n_minus, n_plus)`. Instances only exist for
/// non-negative parameters whose sum stays within [`MAX_TOTAL_RESOLUTION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResolution", into = "RawResolution")]
pub struct Resolution {
    n_plus: u32,
    n_minus: u32,
}

/// Wire form of [`Resolution`]; deserialized payloads re-validate through
/// [`Resolution::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawResolution {
    n_plus: i32,
    n_minus: i32,
}

impl From<Resolution> for RawResolution {
    fn from(resolution: Resolution) -> Self {
        Self {
            n_plus: resolution.n_plus as i32,
            n_minus: resolution.n_minus as i32,
        }
    }
}

impl TryFrom<RawResolution> for Resolution {
    type Error = BnsError;

    fn try_from(raw: RawResolution) -> Result<Self, Self::Error> {
        Resolution::new(raw.n_plus, raw.n_minus)
    }
}

impl Resolution {
    /// Validates and constructs a resolution pair.
    pub fn new(n_plus: i32, n_minus: i32) -> Result<Self, BnsError> {
        if n_plus < 0 || n_minus < 0 {
            let info = ErrorInfo::new(
                "negative-resolution",
                "resolution parameters must be non-negative",
            )
            .with_context("n_plus", n_plus.to_string())
            .with_context("n_minus", n_minus.to_string());
            return Err(BnsError::InvalidResolution(info));
        }
        let total = n_plus as u32 + n_minus as u32;
        if total > MAX_TOTAL_RESOLUTION {
            let info = ErrorInfo::new(
                "resolution-cap",
                "lattice size 2^(n_plus + n_minus) exceeds the supported cap",
            )
            .with_context("n_plus", n_plus.to_string())
            .with_context("n_minus", n_minus.to_string())
            .with_context("cap", MAX_TOTAL_RESOLUTION.to_string())
            .with_hint("lower n_plus or n_minus so their sum stays within the cap");
            return Err(BnsError::InvalidResolution(info));
        }
        Ok(Self {
            n_plus: n_plus as u32,
            n_minus: n_minus as u32,
        })
    }

    /// Returns the integer-part resolution `n_plus`.
    pub fn n_plus(&self) -> i32 {
        self.n_plus as i32
    }

    /// Returns the fractional-part resolution `n_minus`.
    pub fn n_minus(&self) -> i32 {
        self.n_minus as i32
    }

    /// Returns `n_plus + n_minus`, the number of binary places.
    pub fn total_resolution(&self) -> u32 {
        self.n_plus + self.n_minus
    }

    /// Returns the number of lattice points, `2^(n_plus + n_minus)`.
    pub fn lattice_len(&self) -> usize {
        1usize << self.total_resolution()
    }

    /// Returns the lattice spacing, `2^-n_minus`.
    pub fn step(&self) -> f64 {
        (-(self.n_minus as f64)).exp2()
    }

    /// Returns the valid digit index range `[-n_minus, n_plus)` in ascending order.
    pub fn digit_indices(&self) -> std::ops::Range<i32> {
        -(self.n_minus as i32)..self.n_plus as i32
    }

    /// Returns the number of valid digit indices.
    pub fn digit_count(&self) -> usize {
        self.total_resolution() as usize
    }

    /// Returns whether `index` names a valid digit for this pair.
    pub fn contains_digit(&self, index: i32) -> bool {
        self.digit_indices().contains(&index)
    }

    /// Generates the ordered lattice coordinates for the given variant.
    ///
    /// `point[i] = i * 2^-n_minus`, plus half a step for the symmetric
    /// variant. Coordinates are strictly increasing.
    pub fn lattice(&self, symmetry: Symmetry) -> Vec<f64> {
        let step = self.step();
        let offset = symmetry.offset_steps() * step;
        (0..self.lattice_len())
            .map(|i| i as f64 * step + offset)
            .collect()
    }
}
