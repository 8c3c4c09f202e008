use bns_core::errors::BnsError;
use bns_core::{Resolution, Symmetry};
use serde::{Deserialize, Serialize};

use crate::basis::{projected_basis_size, Basis};
use crate::combinations::binomial;
use crate::hash::{hash_basis, hash_system};
use crate::system::DigitSystem;

/// Structured summary of a constructed digit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// Resolution pair the system was built for.
    pub resolution: Resolution,
    /// Digit variant of the system.
    pub symmetry: Symmetry,
    /// Number of digits in the system.
    pub digit_count: usize,
    /// Number of lattice points shared by every digit.
    pub lattice_len: usize,
    /// Valid digit indices in ascending order.
    pub digit_indices: Vec<i32>,
    /// Functions a full basis enumeration over this system will produce.
    pub projected_basis_size: u128,
    /// Canonical hash of the report payload.
    pub system_hash: String,
}

/// Builds the canonical report for a digit system.
pub fn describe_system(system: &DigitSystem) -> Result<SystemReport, BnsError> {
    let mut report = SystemReport {
        resolution: system.resolution(),
        symmetry: system.symmetry(),
        digit_count: system.digit_count(),
        lattice_len: system.lattice().len(),
        digit_indices: system.digit_indices().collect(),
        projected_basis_size: projected_basis_size(system),
        system_hash: String::new(),
    };
    report.system_hash = hash_system(&report)?;
    Ok(report)
}

/// Structured summary of a materialized basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisReport {
    /// Resolution pair the basis was built for.
    pub resolution: Resolution,
    /// Digit variant of the underlying system.
    pub symmetry: Symmetry,
    /// Number of digits feeding the enumeration.
    pub digit_count: usize,
    /// Number of lattice points per function.
    pub lattice_len: usize,
    /// Number of stored functions, `2^n - 1`.
    pub basis_size: usize,
    /// Functions per subset size, ascending in size (`C(n, 1)..C(n, n)`).
    pub functions_per_order: Vec<u128>,
    /// Canonical hash of the report payload.
    pub basis_hash: String,
}

/// Builds the canonical report for a materialized basis.
pub fn describe_basis(basis: &Basis) -> Result<BasisReport, BnsError> {
    let system = basis.system();
    let n = system.digit_count() as u64;
    let functions_per_order = (1..=n).map(|k| binomial(n, k)).collect();
    let mut report = BasisReport {
        resolution: system.resolution(),
        symmetry: system.symmetry(),
        digit_count: system.digit_count(),
        lattice_len: system.lattice().len(),
        basis_size: basis.basis_size(),
        functions_per_order,
        basis_hash: String::new(),
    };
    report.basis_hash = hash_basis(&report)?;
    Ok(report)
}
