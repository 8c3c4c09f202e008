#![deny(missing_docs)]
#![doc = "Core types for binary numeral-system lattices: validated resolution pairs, symmetry variants, lattice generation, and structured errors."]

pub mod errors;
pub mod resolution;

pub use errors::{BnsError, ErrorInfo};
pub use resolution::{Resolution, Symmetry, MAX_TOTAL_RESOLUTION};
