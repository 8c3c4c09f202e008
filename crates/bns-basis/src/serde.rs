use bns_core::errors::{BnsError, ErrorInfo};

use crate::report::{BasisReport, SystemReport};

fn map_json(err: serde_json::Error, code: &str) -> BnsError {
    BnsError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn map_bytes(err: bincode::Error, code: &str) -> BnsError {
    BnsError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a system report to JSON.
pub fn system_to_json(report: &SystemReport) -> Result<String, BnsError> {
    serde_json::to_string_pretty(report).map_err(|err| map_json(err, "system-serialize"))
}

/// Restores a system report from JSON.
pub fn system_from_json(json: &str) -> Result<SystemReport, BnsError> {
    serde_json::from_str(json).map_err(|err| map_json(err, "system-deserialize"))
}

/// Serialises a basis report to JSON.
pub fn basis_to_json(report: &BasisReport) -> Result<String, BnsError> {
    serde_json::to_string_pretty(report).map_err(|err| map_json(err, "basis-serialize"))
}

/// Restores a basis report from JSON.
pub fn basis_from_json(json: &str) -> Result<BasisReport, BnsError> {
    serde_json::from_str(json).map_err(|err| map_json(err, "basis-deserialize"))
}

/// Serialises a system report to compact bytes.
pub fn system_to_bytes(report: &SystemReport) -> Result<Vec<u8>, BnsError> {
    bincode::serialize(report).map_err(|err| map_bytes(err, "system-encode"))
}

/// Restores a system report from compact bytes.
pub fn system_from_bytes(bytes: &[u8]) -> Result<SystemReport, BnsError> {
    bincode::deserialize(bytes).map_err(|err| map_bytes(err, "system-decode"))
}

/// Serialises a basis report to compact bytes.
pub fn basis_to_bytes(report: &BasisReport) -> Result<Vec<u8>, BnsError> {
    bincode::serialize(report).map_err(|err| map_bytes(err, "basis-encode"))
}

/// Restores a basis report from compact bytes.
pub fn basis_from_bytes(bytes: &[u8]) -> Result<BasisReport, BnsError> {
    bincode::deserialize(bytes).map_err(|err| map_bytes(err, "basis-decode"))
}
