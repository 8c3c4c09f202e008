#![deny(missing_docs)]
#![doc = "Digit functions, pairwise compositions, and multiplicative bases on binary numeral-system lattices."]

/// Multiplicative basis assembly and lazy enumeration.
pub mod basis;
/// Unordered pair and subset enumeration helpers.
pub mod combinations;
/// Single digit function evaluation.
pub mod digit;
/// Canonical hashing helpers for report artefacts.
pub mod hash;
/// Structured reports describing systems and bases.
pub mod report;
/// Serde helpers for JSON and byte artefacts.
#[path = "serde.rs"]
pub mod serde_io;
/// Digit system aggregation and composition.
pub mod system;

pub use basis::{basis_functions, projected_basis_size, Basis, BasisEnumerator, Label};
pub use combinations::{binomial, pairs, subsets, SubsetIter};
pub use digit::Digit;
pub use report::{describe_basis, describe_system, BasisReport, SystemReport};
pub use system::{Composition, DigitSystem};
