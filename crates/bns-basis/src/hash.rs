use bns_core::errors::{BnsError, ErrorInfo};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::report::{BasisReport, SystemReport};

fn hash_json<T: Serialize>(value: &T) -> Result<String, BnsError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| BnsError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the canonical hash for a digit system report.
pub fn hash_system(report: &SystemReport) -> Result<String, BnsError> {
    hash_json(report)
}

/// Computes the canonical hash for a basis report.
pub fn hash_basis(report: &BasisReport) -> Result<String, BnsError> {
    hash_json(report)
}
